use clap::Parser;
use s3_connection::ConnectionArgs;

/// Endpoint used when `S3_ENDPOINT` is not set
pub const DEFAULT_ENDPOINT: &str = "http://s3:3900";

/// Print service health, cluster metrics, buckets and objects of a Garage S3 deployment
#[derive(Parser)]
#[command(name = "garage-dashboard", version)]
pub struct Cli {
    /// Bucket to browse [default: first bucket]
    #[arg(long)]
    pub bucket: Option<String>,

    /// Garage admin API endpoint
    #[arg(long, env = "ADMIN_ENDPOINT", default_value = "http://s3:3903")]
    pub admin_endpoint: String,

    /// Admin API bearer token, needed for cluster metrics
    #[arg(long, env = "ADMIN_TOKEN", hide_env_values = true)]
    pub admin_token: Option<String>,

    /// Endpoint, region and credentials
    #[command(flatten)]
    pub connection: ConnectionArgs,
}
