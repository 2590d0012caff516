use super::{Metric, MetricResult, MetricValue};
use crate::event::LogEvent;

/// Latency percentiles over every observed sample.
///
/// Keeps the raw samples: p50 is an exact median, and p95 uses a fixed
/// index rule (`sorted[max(floor(n * 0.95) - 1, 0)]`) with no interpolation,
/// so reports line up with existing consumers.
#[derive(Debug, Default)]
pub struct LatencyMetric {
    samples: Vec<u64>,
}

impl LatencyMetric {
    pub const NAME: &'static str = "latency";

    pub fn new() -> Self {
        Self::default()
    }
}

/// Median of an ascending, non-empty slice. Even lengths average the two
/// middle samples, which is the only case that yields a fraction.
fn median(sorted: &[u64]) -> MetricValue {
    let mid = sorted.len() / 2;
    if sorted.len() % 2 == 1 {
        MetricValue::from(sorted[mid])
    } else {
        let sum = u128::from(sorted[mid - 1]) + u128::from(sorted[mid]);
        MetricValue::from(sum as f64 / 2.0)
    }
}

/// Index-based p95 of an ascending, non-empty slice.
fn p95(sorted: &[u64]) -> u64 {
    let rank = (sorted.len() as f64 * 0.95).floor() as usize;
    sorted[rank.saturating_sub(1)]
}

impl Metric for LatencyMetric {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn consume(&mut self, event: &LogEvent) {
        self.samples.push(event.latency_ms());
    }

    fn result(&self) -> MetricResult {
        let mut sorted = self.samples.clone();
        sorted.sort_unstable();

        let Some(&max) = sorted.last() else {
            return MetricResult::new();
        };

        MetricResult::from([
            ("latency_p50_ms".to_string(), median(&sorted)),
            ("latency_p95_ms".to_string(), MetricValue::from(p95(&sorted))),
            ("latency_max_ms".to_string(), MetricValue::from(max)),
        ])
    }
}
