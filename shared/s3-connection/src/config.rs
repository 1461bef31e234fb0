//! S3 client configuration for S3-compatible endpoints

use std::fmt;
use std::time::Duration;

use aws_config::{retry::RetryConfig, timeout::TimeoutConfig, BehaviorVersion, Region};
use aws_credential_types::Credentials;
use aws_sdk_s3::Client as S3Client;
use tracing::debug;

use crate::{ConnectionError, ConnectionResult};

/// Region used when none is configured
pub const DEFAULT_REGION: &str = "garage";

const MAX_ATTEMPTS: u32 = 3;
const OPERATION_TIMEOUT_SECS: u64 = 30;
const CREDENTIALS_PROVIDER_NAME: &str = "s3-connection";

/// Endpoint, region and static credentials for an S3-compatible service
#[derive(Clone, PartialEq, Eq)]
pub struct ConnectionConfig {
    endpoint: String,
    region: String,
    access_key_id: String,
    secret_access_key: String,
}

impl ConnectionConfig {
    /// Creates a connection configuration
    ///
    /// # Errors
    ///
    /// Returns `ConnectionError::MissingCredentials` if either credential is empty
    pub fn new(
        endpoint: impl Into<String>,
        region: impl Into<String>,
        access_key_id: impl Into<String>,
        secret_access_key: impl Into<String>,
    ) -> ConnectionResult<Self> {
        let access_key_id = access_key_id.into();
        let secret_access_key = secret_access_key.into();

        if access_key_id.is_empty() || secret_access_key.is_empty() {
            return Err(ConnectionError::MissingCredentials);
        }

        Ok(Self {
            endpoint: endpoint.into(),
            region: region.into(),
            access_key_id,
            secret_access_key,
        })
    }

    /// The S3-compatible service endpoint
    #[must_use]
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// The signing region identifier
    #[must_use]
    pub fn region(&self) -> &str {
        &self.region
    }

    /// The access key ID used for signing
    #[must_use]
    pub fn access_key_id(&self) -> &str {
        &self.access_key_id
    }

    fn credentials(&self) -> Credentials {
        Credentials::new(
            self.access_key_id.clone(),
            self.secret_access_key.clone(),
            None,
            None,
            CREDENTIALS_PROVIDER_NAME,
        )
    }

    /// AWS configuration with retry and timeout settings
    pub async fn aws_config(&self) -> aws_config::SdkConfig {
        let retry_config = RetryConfig::standard()
            .with_max_attempts(MAX_ATTEMPTS)
            .with_initial_backoff(Duration::from_millis(50));

        let timeout_config = TimeoutConfig::builder()
            .operation_timeout(Duration::from_secs(OPERATION_TIMEOUT_SECS))
            .build();

        debug!(
            endpoint = %self.endpoint,
            region = %self.region,
            "Loading AWS configuration"
        );

        aws_config::defaults(BehaviorVersion::latest())
            .endpoint_url(self.endpoint.clone())
            .region(Region::new(self.region.clone()))
            .credentials_provider(self.credentials())
            .retry_config(retry_config)
            .timeout_config(timeout_config)
            .load()
            .await
    }

    /// AWS S3 service configuration
    pub async fn s3_client_config(&self) -> aws_sdk_s3::Config {
        let aws_config = self.aws_config().await;
        let s3_config: aws_sdk_s3::Config = (&aws_config).into();
        let mut builder = s3_config.to_builder();

        // Garage, MinIO and local test servers don't serve virtual-hosted buckets
        builder.set_force_path_style(Some(true));

        builder.build()
    }

    /// S3 client ready for use against the configured endpoint
    pub async fn s3_client(&self) -> S3Client {
        S3Client::from_conf(self.s3_client_config().await)
    }
}

impl fmt::Debug for ConnectionConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConnectionConfig")
            .field("endpoint", &self.endpoint)
            .field("region", &self.region)
            .field("access_key_id", &self.access_key_id)
            .field("secret_access_key", &"** redacted **")
            .finish()
    }
}
