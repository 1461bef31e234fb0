//! Connection settings shared by the S3 tooling binaries

#![deny(
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    missing_docs,
    dead_code
)]

mod args;
mod config;
mod error;

pub use args::ConnectionArgs;
pub use config::{ConnectionConfig, DEFAULT_REGION};
pub use error::{ConnectionError, ConnectionResult};
