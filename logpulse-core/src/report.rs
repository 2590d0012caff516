use crate::error::ReportError;
use crate::metrics::{Metric, MetricValue};
use serde::Serialize;
use std::collections::BTreeMap;
use tracing::debug;

/// Every metric's result folded into one map.
///
/// Metrics are merged in the order given and a later metric overwrites an
/// earlier one on a shared key. Metric sets are expected to use disjoint
/// field names; the overwrite rule only decides what happens when they don't.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Report {
    fields: BTreeMap<String, MetricValue>,
}

impl Report {
    pub fn merge<M: AsRef<dyn Metric>>(metrics: &[M]) -> Self {
        let mut fields = BTreeMap::new();

        for metric in metrics {
            let metric = metric.as_ref();
            for (key, value) in metric.result() {
                if let Some(previous) = fields.insert(key.clone(), value) {
                    debug!(
                        key = %key,
                        metric = metric.name(),
                        previous = %previous,
                        "report field overwritten"
                    );
                }
            }
        }

        Self { fields }
    }

    pub fn get(&self, key: &str) -> Option<&MetricValue> {
        self.fields.get(key)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Fields in ascending key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &MetricValue)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v))
    }
}

/// How a report is written out.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// Two-space indented JSON object, keys sorted.
    #[default]
    Json,
}

impl OutputFormat {
    pub fn render(self, report: &Report) -> Result<String, ReportError> {
        match self {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(report)?),
        }
    }
}
