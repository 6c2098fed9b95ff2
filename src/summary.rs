//! Run summary written once generation has finished or failed.

use std::fs;
use std::path::{Path, PathBuf};

use crate::config::Config;
use crate::error::Result;

/// Summary file name, relative to the output root.
pub const SUMMARY_FILE: &str = "generation_summary.txt";

/// Marker line written when the run completes.
pub const SUCCESS_MARKER: &str = "Generation completed successfully!";

/// Final outcome of a run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunStatus {
    Success,
    /// Carries the description of the error that stopped the run.
    Failed(String),
}

/// Renders the summary text for `status`.
///
/// A failed run records only the failure, not the configuration.
pub fn render_summary(config: &Config, status: &RunStatus) -> String {
    match status {
        RunStatus::Success => format!(
            "Project Type: {}\n\
             Tech Stack: {}\n\
             Features: {}\n\
             Generation Mode: {}\n\
             \n\
             {SUCCESS_MARKER}",
            config.project_type,
            config.tech_stack,
            config.features_list(),
            config.mode,
        ),
        RunStatus::Failed(reason) => format!("Generation failed: {reason}"),
    }
}

/// Writes the summary under `output_root`, replacing any previous one.
///
/// # Returns
/// * `Result<PathBuf>` - Path of the written summary file
pub fn write_summary<P: AsRef<Path>>(
    output_root: P,
    config: &Config,
    status: &RunStatus,
) -> Result<PathBuf> {
    let path = output_root.as_ref().join(SUMMARY_FILE);
    fs::write(&path, render_summary(config, status))?;
    Ok(path)
}
