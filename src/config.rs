//! Run configuration for archgen.
//! A single immutable record is built at startup and handed by reference
//! to every generator.

use serde::Serialize;

/// Project type used when nothing else is requested.
pub const DEFAULT_PROJECT_TYPE: &str = "webapp";
/// Technology stack used when nothing else is requested.
pub const DEFAULT_TECH_STACK: &str = "react";
/// Requirement text used when nothing else is requested.
pub const DEFAULT_REQUIREMENTS: &str = "reactでTo doアプリをwebアプリとして作って";
/// Feature list used when nothing else is requested.
pub const DEFAULT_FEATURES: &str = "basic";
/// Generation mode tag used when nothing else is requested.
pub const DEFAULT_MODE: &str = "complete_project";

/// Describes the project the remote model is asked to produce.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Config {
    /// Name looked up in the template catalog. Unknown names select the web template.
    pub project_type: String,
    pub tech_stack: String,
    /// Free-form requirement description forwarded to the model.
    pub requirements: String,
    pub features: Vec<String>,
    pub mode: String,
}

impl Config {
    /// Features joined the way they appear in prompts and in the summary.
    pub fn features_list(&self) -> String {
        self.features.join(", ")
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            project_type: DEFAULT_PROJECT_TYPE.to_string(),
            tech_stack: DEFAULT_TECH_STACK.to_string(),
            requirements: DEFAULT_REQUIREMENTS.to_string(),
            features: parse_features(DEFAULT_FEATURES),
            mode: DEFAULT_MODE.to_string(),
        }
    }
}

/// Splits a comma separated feature string into trimmed names.
///
/// Empty entries are dropped, so `"a,,b"` yields `["a", "b"]`.
pub fn parse_features(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(String::from)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.project_type, "webapp");
        assert_eq!(config.tech_stack, "react");
        assert_eq!(config.features, vec!["basic".to_string()]);
        assert_eq!(config.mode, "complete_project");
    }

    #[test]
    fn test_parse_features() {
        assert_eq!(parse_features("basic"), vec!["basic"]);
        assert_eq!(parse_features("auth, storage"), vec!["auth", "storage"]);
        assert_eq!(parse_features("a,,b"), vec!["a", "b"]);
        assert!(parse_features("").is_empty());
    }

    #[test]
    fn test_features_list() {
        let config = Config {
            features: vec!["auth".into(), "storage".into()],
            ..Config::default()
        };
        assert_eq!(config.features_list(), "auth, storage");
    }
}
