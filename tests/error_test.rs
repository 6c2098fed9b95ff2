use std::io;

use archgen::error::Error;

#[test]
fn test_error_conversion() {
    let io_err = io::Error::new(io::ErrorKind::NotFound, "file not found");
    let err: Error = io_err.into();

    match err {
        Error::IoError(_) => (),
        _ => panic!("Expected IoError variant"),
    }
}

#[test]
fn test_error_display() {
    let err = Error::ApiError { status: 529 };
    assert_eq!(err.to_string(), "API Error: 529");

    let err = Error::MissingCredential("ANTHROPIC_API_KEY".to_string());
    assert_eq!(
        err.to_string(),
        "Missing credential: environment variable 'ANTHROPIC_API_KEY' is not set."
    );
}
