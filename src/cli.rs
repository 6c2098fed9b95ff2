//! Command-line interface implementation for archgen.
//! Every flag is optional; the defaults reproduce the built-in configuration.

use clap::Parser;
use std::path::PathBuf;

use crate::config::{
    parse_features, Config, DEFAULT_FEATURES, DEFAULT_MODE, DEFAULT_PROJECT_TYPE,
    DEFAULT_REQUIREMENTS, DEFAULT_TECH_STACK,
};

/// Command-line arguments structure for archgen.
#[derive(Parser, Debug)]
#[command(author, version, about = "archgen: scaffold a project with a remote completion model", long_about = None)]
pub struct Args {
    /// Project type: mobile, web or api. Unknown types use the web template
    #[arg(long = "type", default_value = DEFAULT_PROJECT_TYPE)]
    pub project_type: String,

    /// Technology stack passed to the model
    #[arg(long, default_value = DEFAULT_TECH_STACK)]
    pub tech_stack: String,

    /// Free-form description of what to build
    #[arg(long, default_value = DEFAULT_REQUIREMENTS)]
    pub requirements: String,

    /// Comma separated feature names
    #[arg(long, default_value = DEFAULT_FEATURES)]
    pub features: String,

    /// Generation mode recorded in the summary
    #[arg(long, default_value = DEFAULT_MODE)]
    pub mode: String,

    /// Directory the project is generated into
    #[arg(short, long, default_value = ".")]
    pub output_dir: PathBuf,

    /// Enable verbose logging output
    #[arg(short, long)]
    pub verbose: bool,
}

impl Args {
    /// Builds the run configuration from the parsed flags.
    pub fn config(&self) -> Config {
        Config {
            project_type: self.project_type.clone(),
            tech_stack: self.tech_stack.clone(),
            requirements: self.requirements.clone(),
            features: parse_features(&self.features),
            mode: self.mode.clone(),
        }
    }
}

/// Parses command line arguments and returns the Args structure.
///
/// # Exits
/// * With clap's default error handling for invalid arguments
pub fn get_args() -> Args {
    Args::parse()
}
