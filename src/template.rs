//! Template catalog for archgen.
//! Maps each known project type to the directories it needs and the files
//! the remote model is asked to write.

use indexmap::IndexMap;
use std::fmt;

/// Symbolic tag describing what a generated file is supposed to contain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FileKind {
    MobilePackage,
    MobileApp,
    Navigation,
    HomeScreen,
    WebPackage,
    WebApp,
    WebIndex,
    WebHtml,
    ApiPackage,
    ApiApp,
    ApiServer,
}

impl FileKind {
    /// Tag embedded in prompts.
    pub fn as_str(&self) -> &'static str {
        match self {
            FileKind::MobilePackage => "mobile_package",
            FileKind::MobileApp => "mobile_app",
            FileKind::Navigation => "navigation",
            FileKind::HomeScreen => "home_screen",
            FileKind::WebPackage => "web_package",
            FileKind::WebApp => "web_app",
            FileKind::WebIndex => "web_index",
            FileKind::WebHtml => "web_html",
            FileKind::ApiPackage => "api_package",
            FileKind::ApiApp => "api_app",
            FileKind::ApiServer => "api_server",
        }
    }
}

impl fmt::Display for FileKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Directory layout and file list for one project type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Template {
    /// Directories created before any file is generated, relative to the output root.
    pub structure: Vec<&'static str>,
    /// Files to generate, in generation order.
    pub files: IndexMap<&'static str, FileKind>,
}

/// Project types known to the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProjectType {
    Mobile,
    Web,
    Api,
}

impl ProjectType {
    /// Every catalog entry, in catalog order.
    pub const ALL: [ProjectType; 3] = [ProjectType::Mobile, ProjectType::Web, ProjectType::Api];

    /// Looks up a project type by its exact name.
    ///
    /// Names outside the catalog fall back to [`ProjectType::Web`]; this is
    /// not an error.
    pub fn from_name(name: &str) -> Self {
        match name {
            "mobile" => ProjectType::Mobile,
            "api" => ProjectType::Api,
            "web" => ProjectType::Web,
            _ => ProjectType::Web,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            ProjectType::Mobile => "mobile",
            ProjectType::Web => "web",
            ProjectType::Api => "api",
        }
    }

    /// Builds the template carried by this project type.
    pub fn template(&self) -> Template {
        match self {
            ProjectType::Mobile => Template {
                structure: vec![
                    "src/components",
                    "src/screens",
                    "src/navigation",
                    "src/services",
                    "src/utils",
                    "assets/images",
                    "assets/fonts",
                ],
                files: IndexMap::from([
                    ("package.json", FileKind::MobilePackage),
                    ("App.js", FileKind::MobileApp),
                    ("src/navigation/AppNavigator.js", FileKind::Navigation),
                    ("src/screens/HomeScreen.js", FileKind::HomeScreen),
                ]),
            },
            ProjectType::Web => Template {
                structure: vec![
                    "src/components",
                    "src/pages",
                    "src/hooks",
                    "src/services",
                    "src/styles",
                    "public",
                ],
                files: IndexMap::from([
                    ("package.json", FileKind::WebPackage),
                    ("src/App.js", FileKind::WebApp),
                    ("src/index.js", FileKind::WebIndex),
                    ("public/index.html", FileKind::WebHtml),
                ]),
            },
            ProjectType::Api => Template {
                structure: vec![
                    "src/controllers",
                    "src/models",
                    "src/routes",
                    "src/middleware",
                    "src/utils",
                    "tests",
                ],
                files: IndexMap::from([
                    ("package.json", FileKind::ApiPackage),
                    ("src/app.js", FileKind::ApiApp),
                    ("src/server.js", FileKind::ApiServer),
                ]),
            },
        }
    }
}

impl fmt::Display for ProjectType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Returns the template registered for `project_type`, or the web template.
pub fn lookup(project_type: &str) -> Template {
    ProjectType::from_name(project_type).template()
}
