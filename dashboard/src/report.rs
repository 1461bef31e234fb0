use std::fmt::Write as _;

use chrono::{DateTime, Utc};

use crate::admin::{AdminClient, MetricsStatus, ServiceHealth};
use crate::browser::{select_bucket, Browser, BrowserResult, BucketSummary, ObjectSummary};

const DATE_FORMAT: &str = "%Y-%m-%d %H:%M:%S UTC";

/// Objects of the browsed bucket
#[derive(Debug, Clone, PartialEq)]
pub struct ObjectListing {
    /// Browsed bucket
    pub bucket: String,
    /// Objects, or the listing failure
    pub objects: BrowserResult<Vec<ObjectSummary>>,
}

/// Everything the dashboard prints
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardReport {
    /// Admin API endpoint that was probed
    pub admin_endpoint: String,
    /// `/health` outcome
    pub health: ServiceHealth,
    /// `/metrics` outcome
    pub metrics: MetricsStatus,
    /// Buckets, or the listing failure
    pub buckets: BrowserResult<Vec<BucketSummary>>,
    /// Object listing, present when a bucket was available to browse
    pub objects: Option<ObjectListing>,
}

impl DashboardReport {
    /// Whether bucket or object listing failed
    #[must_use]
    pub fn has_listing_error(&self) -> bool {
        matches!(
            (&self.buckets, &self.objects),
            (Err(_), _)
                | (
                    _,
                    Some(ObjectListing {
                        objects: Err(_),
                        ..
                    })
                )
        )
    }
}

/// Probes the admin API and lists buckets, then objects of the selected bucket
pub async fn collect_report(
    admin: &AdminClient,
    browser: &Browser,
    admin_token: Option<&str>,
    requested_bucket: Option<&str>,
) -> DashboardReport {
    let health = admin.health().await;
    let metrics = admin.metrics(admin_token).await;
    let buckets = browser.list_buckets().await;

    let objects = match &buckets {
        Ok(buckets) if !buckets.is_empty() => match select_bucket(requested_bucket, buckets) {
            Some(bucket) => Some(ObjectListing {
                objects: browser.list_objects(&bucket).await,
                bucket,
            }),
            None => None,
        },
        _ => None,
    };

    DashboardReport {
        admin_endpoint: admin.endpoint().to_string(),
        health,
        metrics,
        buckets,
        objects,
    }
}

/// Renders the report as console text
#[must_use]
pub fn render_report(report: &DashboardReport) -> String {
    let mut out = String::new();

    out.push_str("🗄️  Garage S3 Dashboard\n\n");
    render_cluster_status(&mut out, report);
    render_buckets(&mut out, report);
    out.push_str("---\nGarage S3 Dashboard | aws-sdk-s3\n");

    out
}

fn render_cluster_status(out: &mut String, report: &DashboardReport) {
    out.push_str("📊 Cluster Status\n");

    let health = match &report.health {
        ServiceHealth::Healthy => "✅ Healthy".to_string(),
        ServiceHealth::Unhealthy(status) => format!("❌ {status}"),
        ServiceHealth::Unreachable(_) => "❓ Unreachable".to_string(),
    };
    let _ = writeln!(out, "  Service Health: {health}");
    if matches!(report.health, ServiceHealth::Unreachable(_)) {
        let _ = writeln!(out, "  Could not reach {}", report.admin_endpoint);
    }

    match &report.metrics {
        MetricsStatus::TokenRequired => out.push_str("  Nodes: Token Required\n"),
        MetricsStatus::Available(metrics) => {
            match metrics.connected_nodes {
                Some(nodes) => {
                    let _ = writeln!(out, "  Nodes Online: {nodes}");
                }
                None => out.push_str("  Nodes: ?\n"),
            }
            let _ = writeln!(out, "  Storage Used: {:.2} GB", metrics.used_space_gb());
        }
        MetricsStatus::Failed(reason) => {
            out.push_str("  Nodes: Error\n");
            let _ = writeln!(out, "  Metrics error: {reason}");
        }
    }
    out.push('\n');
}

fn render_buckets(out: &mut String, report: &DashboardReport) {
    out.push_str("📦 Buckets\n");

    match &report.buckets {
        Err(e) => {
            let _ = writeln!(out, "  Error listing buckets: {e}\n");
            return;
        }
        Ok(buckets) if buckets.is_empty() => {
            out.push_str("  No buckets found.\n\n");
            return;
        }
        Ok(buckets) => {
            let rows: Vec<Vec<String>> = buckets
                .iter()
                .map(|bucket| vec![bucket.name.clone(), format_date(bucket.created.as_ref())])
                .collect();
            render_table(out, &["Name", "Created"], &rows);
            out.push('\n');
        }
    }

    let Some(listing) = &report.objects else {
        return;
    };

    let _ = writeln!(out, "📂 Object Browser: {}", listing.bucket);
    match &listing.objects {
        Err(e) => {
            let _ = writeln!(out, "  Error listing buckets: {e}");
        }
        Ok(objects) if objects.is_empty() => out.push_str("  Bucket is empty.\n"),
        Ok(objects) => {
            let rows: Vec<Vec<String>> = objects
                .iter()
                .map(|object| {
                    vec![
                        object.key.clone(),
                        format!("{:.2}", object.size_kb()),
                        format_date(object.last_modified.as_ref()),
                    ]
                })
                .collect();
            render_table(out, &["Key", "Size (KB)", "Last Modified"], &rows);
            let _ = writeln!(out, "  Total Objects: {}", objects.len());
        }
    }
    out.push('\n');
}

fn format_date(instant: Option<&DateTime<Utc>>) -> String {
    instant.map_or_else(|| "-".to_string(), |instant| instant.format(DATE_FORMAT).to_string())
}

/// Left-aligned columns, two spaces apart, trailing padding trimmed
fn render_table(out: &mut String, headers: &[&str], rows: &[Vec<String>]) {
    let mut widths: Vec<usize> = headers.iter().map(|header| header.chars().count()).collect();
    for row in rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let _ = writeln!(out, "  {}", table_row(headers.iter().copied(), &widths));
    for row in rows {
        let _ = writeln!(out, "  {}", table_row(row.iter().map(String::as_str), &widths));
    }
}

fn table_row<'a>(cells: impl Iterator<Item = &'a str>, widths: &[usize]) -> String {
    cells
        .zip(widths)
        .map(|(cell, &width)| format!("{cell:<width$}"))
        .collect::<Vec<_>>()
        .join("  ")
        .trim_end()
        .to_string()
}
