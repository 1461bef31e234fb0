//! Error types for connection configuration

use thiserror::Error;

/// Result type for connection configuration
pub type ConnectionResult<T> = Result<T, ConnectionError>;

/// Errors that can occur while assembling a connection configuration
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConnectionError {
    /// Access key or secret key is absent or empty
    #[error("AWS_ACCESS_KEY_ID and AWS_SECRET_ACCESS_KEY environment variables must be set.")]
    MissingCredentials,
}
