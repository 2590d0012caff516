use crate::conf::error::ConfigError;
use crate::metrics::{ErrorRateMetric, LatencyMetric, RequestCountMetric};
use serde::Deserialize;
use std::fs;
use std::path::Path;
use tracing::info;

/// Metrics run when no config file is given.
pub const DEFAULT_METRICS: &[&str] = &[
    RequestCountMetric::NAME,
    ErrorRateMetric::NAME,
    LatencyMetric::NAME,
];

/// Which metrics to run, in dispatch order.
///
/// ```hcl
/// metrics = ["request_count", "error_rate", "latency", "parse_errors"]
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MetricsConfig {
    pub metrics: Vec<String>,
}

impl Default for MetricsConfig {
    fn default() -> Self {
        Self {
            metrics: DEFAULT_METRICS.iter().map(|m| m.to_string()).collect(),
        }
    }
}

/// Read and parse a metric-selection file.
///
/// Names are not checked here; that happens when the registry builds them.
pub fn load_config(path: &Path) -> Result<MetricsConfig, ConfigError> {
    let s = fs::read_to_string(path).map_err(|e| ConfigError::read_file(path, e))?;
    let config: MetricsConfig = hcl::from_str(&s).map_err(|e| ConfigError::parse(path, e))?;

    info!(
        path = %path.display(),
        metrics = ?config.metrics,
        "loaded metric config"
    );

    Ok(config)
}
