use super::{Metric, MetricResult, MetricValue, ParseErrorSink};
use crate::event::LogEvent;
use crate::parser::ParseFailure;

/// Counts lines the parser rejected. Valid events are ignored.
#[derive(Debug, Default)]
pub struct ParseErrorMetric {
    errors: u64,
}

impl ParseErrorMetric {
    pub const NAME: &'static str = "parse_errors";

    pub fn new() -> Self {
        Self::default()
    }
}

impl Metric for ParseErrorMetric {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn consume(&mut self, _event: &LogEvent) {}

    fn result(&self) -> MetricResult {
        MetricResult::from([(Self::NAME.to_string(), MetricValue::from(self.errors))])
    }

    fn as_error_sink(&mut self) -> Option<&mut dyn ParseErrorSink> {
        Some(self)
    }
}

impl ParseErrorSink for ParseErrorMetric {
    fn consume_error(&mut self, _failure: &ParseFailure) {
        self.errors += 1;
    }
}
