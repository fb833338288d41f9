//! Error types for the wkhtmltoimage wrapper

use thiserror::Error;

/// Result type alias for wrapper operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while generating an image
#[derive(Error, Debug)]
pub enum Error {
    /// The supplied options are not usable
    #[error("Invalid options: {0}")]
    InvalidOptions(String),

    /// The wkhtmltoimage binary could not be located
    #[error("Binary not found: {0}")]
    BinaryNotFound(String),

    /// The page-list JSON document could not be decoded
    #[error("Invalid JSON input: {0}")]
    Json(String),

    /// A base64 HTML blob in the page list could not be decoded
    #[error("Invalid base64 input: {0}")]
    Base64(String),

    /// The subprocess could not be started or its stdio could not be driven
    #[error("Failed to run wkhtmltoimage: {0}")]
    Spawn(String),

    /// wkhtmltoimage exited with a non-zero status.
    ///
    /// `output` holds the best-effort (already repaired) bytes captured before
    /// the failure; they may be partial or corrupt, so the error itself is
    /// authoritative. Callers that want to salvage whatever the tool managed
    /// to write can still read them.
    #[error("wkhtmltoimage failed: {status}")]
    ProcessFailed { status: String, output: Vec<u8> },
}
