mod error;

use std::sync::Arc;
use std::time::{Duration, SystemTime};

use aws_sdk_s3::{error::DisplayErrorContext, presigning::PresigningConfig, Client as S3Client};
use chrono::{DateTime, Utc};
use tracing::debug;

pub use error::{PresignError, PresignResult};

/// Lifetime of generated URLs: one hour
pub const PRESIGNED_URL_EXPIRY_SECS: u64 = 60 * 60;

/// Presigned URL with expiration information
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PresignedUrl {
    /// The presigned URL for GET operations
    pub url: String,
    /// UTC instant after which the URL is rejected
    pub expires_at: DateTime<Utc>,
}

/// Generates time-limited GET URLs for objects in an S3-compatible store
pub struct UrlGenerator {
    s3_client: Arc<S3Client>,
    expiry_secs: u64,
}

impl UrlGenerator {
    /// Creates a new URL generator
    ///
    /// # Arguments
    ///
    /// * `s3_client` - Pre-configured S3 client (path-style addressing for non-AWS endpoints)
    /// * `expiry_secs` - Validity window of generated URLs in seconds
    #[must_use]
    pub const fn new(s3_client: Arc<S3Client>, expiry_secs: u64) -> Self {
        Self {
            s3_client,
            expiry_secs,
        }
    }

    /// Generates a presigned GET URL that starts its validity window now
    ///
    /// # Errors
    ///
    /// See [`UrlGenerator::presign_get_at`]
    pub async fn presign_get(&self, bucket: &str, key: &str) -> PresignResult<PresignedUrl> {
        self.presign_get_at(bucket, key, SystemTime::now()).await
    }

    /// Generates a presigned GET URL signed as of `start_time`
    ///
    /// Signing is local: no request reaches the endpoint. Identical inputs and
    /// `start_time` yield identical URLs.
    ///
    /// # Errors
    ///
    /// Returns `PresignError::InvalidInput` if `bucket` or `key` is empty
    /// Returns `PresignError::ConfigError` if the expiry is outside what S3 accepts
    /// Returns `PresignError::S3Error` if the SDK fails to resolve the endpoint or sign
    pub async fn presign_get_at(
        &self,
        bucket: &str,
        key: &str,
        start_time: SystemTime,
    ) -> PresignResult<PresignedUrl> {
        if bucket.is_empty() {
            return Err(PresignError::InvalidInput("bucket must not be empty".to_string()));
        }
        if key.is_empty() {
            return Err(PresignError::InvalidInput("key must not be empty".to_string()));
        }

        debug!(bucket, key, expiry_secs = self.expiry_secs, "Presigning GET request");

        let expires_in = Duration::from_secs(self.expiry_secs);
        let presigning_config = PresigningConfig::builder()
            .start_time(start_time)
            .expires_in(expires_in)
            .build()
            .map_err(|e| {
                PresignError::ConfigError(format!("Failed to create presigning config: {e}"))
            })?;

        let presigned_request = self
            .s3_client
            .get_object()
            .bucket(bucket)
            .key(key)
            .presigned(presigning_config)
            .await
            .map_err(|e| {
                PresignError::S3Error(format!(
                    "Failed to generate presigned URL: {}",
                    DisplayErrorContext(&e)
                ))
            })?;

        let expires_at = DateTime::<Utc>::from(start_time) + expires_in;

        debug!(bucket, key, %expires_at, "Generated presigned URL");

        Ok(PresignedUrl {
            url: presigned_request.uri().to_string(),
            expires_at,
        })
    }
}
