use std::process::ExitCode;
use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use dashboard::{
    cli::{Cli, DEFAULT_ENDPOINT},
    collect_report, render_report, AdminClient, Browser,
};
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    // A missing .env file is fine, the environment may already be populated
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    init_tracing();

    let Ok(config) = cli.connection.into_config(DEFAULT_ENDPOINT) else {
        eprintln!("⚠️ Please provide AWS Credentials via flags or .env file.");
        return Ok(ExitCode::FAILURE);
    };
    info!("Connecting to {} as {}", config.endpoint(), config.access_key_id());

    let admin = AdminClient::new(cli.admin_endpoint).context("Failed to create admin API client")?;
    let browser = Browser::new(Arc::new(config.s3_client().await));

    let report = collect_report(
        &admin,
        &browser,
        cli.admin_token.as_deref(),
        cli.bucket.as_deref(),
    )
    .await;

    print!("{}", render_report(&report));

    if report.has_listing_error() {
        return Ok(ExitCode::FAILURE);
    }
    Ok(ExitCode::SUCCESS)
}

/// Logs go to stderr and stay off unless `RUST_LOG` is set
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("off"));
    let builder = fmt().with_env_filter(filter).with_writer(std::io::stderr);

    if std::env::var("LOG_FORMAT").is_ok_and(|format| format.eq_ignore_ascii_case("json")) {
        builder.json().init();
    } else {
        builder.init();
    }
}
