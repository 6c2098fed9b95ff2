//! Error handling for the archgen application.
//! Defines custom error types and results used throughout the application.

use std::io;
use thiserror::Error;

/// Custom error types for archgen operations.
///
/// This enum represents all possible errors that can occur within the archgen application.
/// It implements the standard Error trait through thiserror's derive macro.
#[derive(Error, Debug)]
pub enum Error {
    /// Represents errors that occur during file system operations
    #[error("IO error: {0}.")]
    IoError(#[from] io::Error),

    /// The environment variable holding the API key is not set
    #[error("Missing credential: environment variable '{0}' is not set.")]
    MissingCredential(String),

    /// Represents transport failures while talking to the completion service
    #[error("HTTP error: {0}.")]
    HttpError(#[from] reqwest::Error),

    /// The completion service answered with a non-success status
    #[error("API Error: {status}")]
    ApiError { status: u16 },

    /// The completion service answered, but the body had no usable text
    #[error("Response error: {0}.")]
    ResponseError(String),
}

/// Convenience type alias for Results with archgen's Error as the error type.
///
/// # Type Parameters
/// * `T` - The type of the success value
pub type Result<T> = std::result::Result<T, Error>;

/// Default error handler that prints the error and exits the program.
///
/// # Arguments
/// * `err` - The Error to handle
///
/// # Behavior
/// Prints the error message to stderr and exits with status code 1
pub fn default_error_handler(err: Error) {
    eprintln!("Generation failed: {err}");
    std::process::exit(1);
}
