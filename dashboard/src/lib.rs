//! Console status report for a Garage S3 deployment

#![deny(
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    missing_docs,
    dead_code
)]

/// Garage admin API probes
pub mod admin;

/// Bucket and object listing
pub mod browser;

/// Command-line interface
pub mod cli;

/// Report collection and rendering
pub mod report;

pub use admin::{AdminClient, ClusterMetrics, MetricsStatus, ServiceHealth};
pub use browser::{Browser, BrowserError, BrowserResult, BucketSummary, ObjectSummary};
pub use report::{collect_report, render_report, DashboardReport, ObjectListing};
