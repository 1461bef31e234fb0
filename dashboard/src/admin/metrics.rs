//! Extraction of cluster figures from Garage's Prometheus metrics

const CONNECTED_NODES: &str = "cluster_connected_nodes";
const DATA_DIR_USED_SPACE: &str = "garage_data_dir_used_space_bytes";

/// Figures read from the admin `/metrics` endpoint
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ClusterMetrics {
    /// First `cluster_connected_nodes` sample, if exported
    pub connected_nodes: Option<u64>,
    /// Sum of every `garage_data_dir_used_space_bytes` sample
    pub used_space_bytes: f64,
}

impl ClusterMetrics {
    /// Used data-dir space in GiB, rounded to two decimals
    #[must_use]
    pub fn used_space_gb(&self) -> f64 {
        (self.used_space_bytes / 1024_f64.powi(3) * 100.0).round() / 100.0
    }
}

/// Parses Prometheus text exposition into [`ClusterMetrics`]
///
/// Comment lines, other metrics and samples with unparseable values are skipped.
#[must_use]
pub fn parse_metrics(text: &str) -> ClusterMetrics {
    let mut metrics = ClusterMetrics::default();

    for line in text.lines().map(str::trim) {
        if line.starts_with('#') {
            continue;
        }

        if metrics.connected_nodes.is_none() {
            if let Some(value) = sample_value(line, CONNECTED_NODES) {
                // Gauges are exported as floats
                #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
                let nodes = value as u64;
                metrics.connected_nodes = Some(nodes);
                continue;
            }
        }

        if let Some(value) = sample_value(line, DATA_DIR_USED_SPACE) {
            metrics.used_space_bytes += value;
        }
    }

    metrics
}

/// Value of a `name{labels} value [timestamp]` sample, when `line` is a sample of `name`
fn sample_value(line: &str, name: &str) -> Option<f64> {
    let rest = line.strip_prefix(name)?;

    let rest = if let Some(labelled) = rest.strip_prefix('{') {
        &labelled[labelled.find('}')? + 1..]
    } else if rest.starts_with(char::is_whitespace) {
        rest
    } else {
        // Another metric sharing the prefix
        return None;
    };

    rest.split_whitespace()
        .next()?
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite() && *value >= 0.0)
}
