mod metrics;

use std::time::Duration;

use reqwest::{Client, StatusCode};
use thiserror::Error;
use tracing::{debug, warn};

pub use metrics::{parse_metrics, ClusterMetrics};

/// Admin API probes are best effort and must not hold up the report
const ADMIN_REQUEST_TIMEOUT_SECS: u64 = 2;

/// Errors raised while querying the admin API
#[derive(Debug, Error)]
pub enum AdminError {
    /// Transport or body decoding failure
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Admin API answered with something other than 200
    #[error("unexpected status {0}")]
    UnexpectedStatus(u16),
}

/// Outcome of the `/health` probe
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ServiceHealth {
    /// Admin API answered 200
    Healthy,
    /// Admin API answered with another status code
    Unhealthy(u16),
    /// Admin API could not be reached
    Unreachable(String),
}

/// Outcome of the `/metrics` probe
#[derive(Debug, Clone, PartialEq)]
pub enum MetricsStatus {
    /// No admin token configured
    TokenRequired,
    /// Metrics fetched and parsed
    Available(ClusterMetrics),
    /// Metrics could not be fetched
    Failed(String),
}

/// Client for the Garage admin API
pub struct AdminClient {
    admin_endpoint: String,
    http_client: Client,
}

impl AdminClient {
    /// Creates a client for the admin API at `admin_endpoint`
    ///
    /// # Errors
    ///
    /// Returns `AdminError::Http` if the HTTP client cannot be built
    pub fn new(admin_endpoint: impl Into<String>) -> Result<Self, AdminError> {
        let http_client = Client::builder()
            .timeout(Duration::from_secs(ADMIN_REQUEST_TIMEOUT_SECS))
            .build()?;

        Ok(Self {
            admin_endpoint: admin_endpoint.into(),
            http_client,
        })
    }

    /// The admin API endpoint
    #[must_use]
    pub fn endpoint(&self) -> &str {
        &self.admin_endpoint
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.admin_endpoint.trim_end_matches('/'))
    }

    /// Probes `GET /health`
    pub async fn health(&self) -> ServiceHealth {
        match self.http_client.get(self.url("/health")).send().await {
            Ok(response) if response.status() == StatusCode::OK => ServiceHealth::Healthy,
            Ok(response) => {
                debug!(status = %response.status(), "Admin health check failed");
                ServiceHealth::Unhealthy(response.status().as_u16())
            }
            Err(e) => {
                warn!("Could not reach admin API at {}: {}", self.admin_endpoint, e);
                ServiceHealth::Unreachable(e.to_string())
            }
        }
    }

    /// Fetches `GET /metrics` when an admin token is available
    pub async fn metrics(&self, admin_token: Option<&str>) -> MetricsStatus {
        let Some(token) = admin_token.filter(|token| !token.is_empty()) else {
            return MetricsStatus::TokenRequired;
        };

        match self.fetch_metrics(token).await {
            Ok(metrics) => MetricsStatus::Available(metrics),
            Err(e) => {
                warn!("Failed to fetch admin metrics: {}", e);
                MetricsStatus::Failed(e.to_string())
            }
        }
    }

    async fn fetch_metrics(&self, token: &str) -> Result<ClusterMetrics, AdminError> {
        let response = self
            .http_client
            .get(self.url("/metrics"))
            .bearer_auth(token)
            .send()
            .await?;

        if response.status() != StatusCode::OK {
            return Err(AdminError::UnexpectedStatus(response.status().as_u16()));
        }

        Ok(parse_metrics(&response.text().await?))
    }
}
