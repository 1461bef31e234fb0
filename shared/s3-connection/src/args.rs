//! Command-line and environment sourced connection settings

use clap::Args;

use crate::{ConnectionConfig, ConnectionError, ConnectionResult, DEFAULT_REGION};

/// Connection flags shared by every binary, each backed by an environment variable
#[derive(Args, Clone, Default)]
pub struct ConnectionArgs {
    /// S3-compatible service endpoint
    #[arg(long, env = "S3_ENDPOINT", value_name = "URL")]
    pub endpoint: Option<String>,

    /// Signing region identifier [default: garage]
    #[arg(long, env = "S3_REGION")]
    pub region: Option<String>,

    /// Access key ID used to sign requests
    #[arg(long, env = "AWS_ACCESS_KEY_ID", hide_env_values = true)]
    pub access_key_id: Option<String>,

    /// Secret access key used to sign requests
    #[arg(long, env = "AWS_SECRET_ACCESS_KEY", hide_env_values = true)]
    pub secret_access_key: Option<String>,
}

impl ConnectionArgs {
    /// Resolves the flags into a connection configuration
    ///
    /// Empty values are treated as unset, so `S3_ENDPOINT=` falls back to
    /// `default_endpoint`.
    ///
    /// # Errors
    ///
    /// Returns `ConnectionError::MissingCredentials` if either credential is unset or empty
    pub fn into_config(self, default_endpoint: &str) -> ConnectionResult<ConnectionConfig> {
        let endpoint = non_empty(self.endpoint).unwrap_or_else(|| default_endpoint.to_string());
        let region = non_empty(self.region).unwrap_or_else(|| DEFAULT_REGION.to_string());

        let (Some(access_key_id), Some(secret_access_key)) = (
            non_empty(self.access_key_id),
            non_empty(self.secret_access_key),
        ) else {
            return Err(ConnectionError::MissingCredentials);
        };

        ConnectionConfig::new(endpoint, region, access_key_id, secret_access_key)
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}
