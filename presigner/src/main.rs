use std::process::ExitCode;
use std::sync::Arc;

use anyhow::Context;
use clap::{error::ErrorKind, Parser};
use presigner::{
    cli::{Cli, DEFAULT_ENDPOINT},
    render_banner, PresignedUrl, UrlGenerator, PRESIGNED_URL_EXPIRY_SECS,
};
use s3_connection::ConnectionConfig;
use tracing::{error, info};
use tracing_subscriber::{fmt, EnvFilter};

#[tokio::main]
async fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) if matches!(err.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            err.exit()
        }
        Err(err) => {
            // Usage errors share exit status 1 with the credential check
            let _ = err.print();
            return ExitCode::FAILURE;
        }
    };

    init_tracing();

    let config = match cli.connection.into_config(DEFAULT_ENDPOINT) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {e}");
            return ExitCode::FAILURE;
        }
    };

    match generate(&config, &cli.bucket, &cli.key).await {
        Ok(presigned) => {
            info!(expires_at = %presigned.expires_at, "Signed URL generated");
            print!("{}", render_banner(&presigned.url));
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!(error = ?e, "Failed to generate signed URL");
            eprintln!("Error generating signed URL: {e:#}");
            ExitCode::FAILURE
        }
    }
}

async fn generate(
    config: &ConnectionConfig,
    bucket: &str,
    key: &str,
) -> anyhow::Result<PresignedUrl> {
    let s3_client = Arc::new(config.s3_client().await);
    let generator = UrlGenerator::new(s3_client, PRESIGNED_URL_EXPIRY_SECS);

    generator
        .presign_get(bucket, key)
        .await
        .with_context(|| format!("s3://{bucket}/{key} via {}", config.endpoint()))
}

/// Logs go to stderr and stay off unless `RUST_LOG` is set, keeping stdout for the URL
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("off"));
    let builder = fmt().with_env_filter(filter).with_writer(std::io::stderr);

    if std::env::var("LOG_FORMAT").is_ok_and(|format| format.eq_ignore_ascii_case("json")) {
        builder.json().init();
    } else {
        builder.init();
    }
}
