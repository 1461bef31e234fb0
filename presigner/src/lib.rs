//! Presigned GET URL generation for S3-compatible object stores

#![deny(
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    missing_docs,
    dead_code
)]

/// Command-line interface
pub mod cli;

/// Console output
pub mod output;

/// Presigned URL generation
pub mod url_generator;

pub use output::render_banner;
pub use url_generator::{
    PresignError, PresignResult, PresignedUrl, UrlGenerator, PRESIGNED_URL_EXPIRY_SECS,
};
