use super::value::round_to;
use super::{Metric, MetricResult, MetricValue};
use crate::event::LogEvent;

/// Share of requests that ended in a server error (status >= 500).
#[derive(Debug, Default)]
pub struct ErrorRateMetric {
    total: u64,
    errors: u64,
}

impl ErrorRateMetric {
    pub const NAME: &'static str = "error_rate";

    pub fn new() -> Self {
        Self::default()
    }

    fn rate_percent(&self) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        round_to(self.errors as f64 / self.total as f64 * 100.0, 2)
    }
}

impl Metric for ErrorRateMetric {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn consume(&mut self, event: &LogEvent) {
        self.total += 1;
        if event.is_server_error() {
            self.errors += 1;
        }
    }

    fn result(&self) -> MetricResult {
        MetricResult::from([
            ("error_count".to_string(), MetricValue::from(self.errors)),
            (
                "error_rate_percent".to_string(),
                MetricValue::from(self.rate_percent()),
            ),
        ])
    }
}
