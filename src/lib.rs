//! archgen scaffolds a project from a built-in template catalog and asks a
//! remote text-completion model to write every file.

/// Command-line interface module for the archgen application
pub mod cli;

/// Remote completion client and the trait generators depend on
pub mod client;

/// Run configuration record
pub mod config;

/// Error types and handling for the archgen application
pub mod error;

/// Logger setup
pub mod logger;

/// Core generation orchestration
/// Creates directories, generates files and the README, writes the summary
pub mod processor;

/// Prompts sent to the completion service
pub mod prompt;

/// Run summary file
pub mod summary;

/// Template catalog keyed by project type
pub mod template;
