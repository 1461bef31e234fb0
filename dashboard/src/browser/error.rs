//! Error types for listing operations

use thiserror::Error;

/// Result type for listing operations
pub type BrowserResult<T> = Result<T, BrowserError>;

/// Errors that can occur while listing buckets or objects
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BrowserError {
    /// S3 service or transport error
    #[error("S3 service error: {0}")]
    S3Error(String),
}
