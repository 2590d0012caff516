use super::{Metric, MetricResult, MetricValue};
use crate::event::LogEvent;

/// Counts every valid event.
#[derive(Debug, Default)]
pub struct RequestCountMetric {
    count: u64,
}

impl RequestCountMetric {
    pub const NAME: &'static str = "request_count";

    pub fn new() -> Self {
        Self::default()
    }
}

impl Metric for RequestCountMetric {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn consume(&mut self, _event: &LogEvent) {
        self.count += 1;
    }

    fn result(&self) -> MetricResult {
        MetricResult::from([(Self::NAME.to_string(), MetricValue::from(self.count))])
    }
}
