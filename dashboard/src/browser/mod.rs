mod error;

use std::sync::Arc;

use aws_sdk_s3::{
    error::DisplayErrorContext,
    primitives::DateTime as SmithyDateTime,
    types::{Bucket, Object},
    Client as S3Client,
};
use chrono::{DateTime, Utc};
use tracing::debug;

pub use error::{BrowserError, BrowserResult};

/// Bucket row of the report
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BucketSummary {
    /// Bucket name
    pub name: String,
    /// Creation instant, when reported by the server
    pub created: Option<DateTime<Utc>>,
}

impl From<&Bucket> for BucketSummary {
    fn from(bucket: &Bucket) -> Self {
        Self {
            name: bucket.name().unwrap_or_default().to_string(),
            created: bucket.creation_date().and_then(to_chrono),
        }
    }
}

/// Object row of the report
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ObjectSummary {
    /// Object key
    pub key: String,
    /// Object size in bytes
    pub size_bytes: i64,
    /// Last modification instant, when reported by the server
    pub last_modified: Option<DateTime<Utc>>,
}

impl ObjectSummary {
    /// Size in KiB, rounded to two decimals
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn size_kb(&self) -> f64 {
        (self.size_bytes as f64 / 1024.0 * 100.0).round() / 100.0
    }
}

impl From<&Object> for ObjectSummary {
    fn from(object: &Object) -> Self {
        Self {
            key: object.key().unwrap_or_default().to_string(),
            size_bytes: object.size().unwrap_or_default(),
            last_modified: object.last_modified().and_then(to_chrono),
        }
    }
}

fn to_chrono(instant: &SmithyDateTime) -> Option<DateTime<Utc>> {
    DateTime::from_timestamp(instant.secs(), instant.subsec_nanos())
}

/// Picks the bucket to browse: the requested one, else the first listed
#[must_use]
pub fn select_bucket(requested: Option<&str>, buckets: &[BucketSummary]) -> Option<String> {
    requested
        .filter(|name| !name.is_empty())
        .map(ToString::to_string)
        .or_else(|| buckets.first().map(|bucket| bucket.name.clone()))
}

/// Read-only bucket and object listing
pub struct Browser {
    s3_client: Arc<S3Client>,
}

impl Browser {
    /// Creates a browser over a pre-configured S3 client
    #[must_use]
    pub const fn new(s3_client: Arc<S3Client>) -> Self {
        Self { s3_client }
    }

    /// Lists every bucket visible to the configured credentials
    ///
    /// # Errors
    ///
    /// Returns `BrowserError::S3Error` if the request fails
    pub async fn list_buckets(&self) -> BrowserResult<Vec<BucketSummary>> {
        let output = self
            .s3_client
            .list_buckets()
            .send()
            .await
            .map_err(|e| BrowserError::S3Error(DisplayErrorContext(&e).to_string()))?;

        let buckets: Vec<BucketSummary> = output.buckets().iter().map(BucketSummary::from).collect();
        debug!(count = buckets.len(), "Listed buckets");

        Ok(buckets)
    }

    /// Lists every object in `bucket`, following continuation tokens
    ///
    /// # Errors
    ///
    /// Returns `BrowserError::S3Error` if any page request fails
    pub async fn list_objects(&self, bucket: &str) -> BrowserResult<Vec<ObjectSummary>> {
        let mut pages = self
            .s3_client
            .list_objects_v2()
            .bucket(bucket)
            .into_paginator()
            .send();

        let mut objects = Vec::new();
        while let Some(page) = pages.next().await {
            let page = page.map_err(|e| BrowserError::S3Error(DisplayErrorContext(&e).to_string()))?;
            objects.extend(page.contents().iter().map(ObjectSummary::from));
        }
        debug!(bucket, count = objects.len(), "Listed objects");

        Ok(objects)
    }
}
