//! Error types for presigning operations

use thiserror::Error;

/// Result type for presigning operations
pub type PresignResult<T> = Result<T, PresignError>;

/// Errors that can occur while generating a presigned URL
#[derive(Error, Debug)]
pub enum PresignError {
    /// S3 SDK failed to build or sign the request
    #[error("S3 error: {0}")]
    S3Error(String),

    /// Presigning configuration rejected
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// Invalid input provided
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}
