mod error_rate;
mod latency;
mod parse_errors;
mod registry;
mod request_count;
mod value;

#[cfg(test)]
mod tests;

pub use error_rate::ErrorRateMetric;
pub use latency::LatencyMetric;
pub use parse_errors::ParseErrorMetric;
pub use registry::{MetricBuilder, MetricRegistry};
pub use request_count::RequestCountMetric;
pub use value::{MetricResult, MetricValue};

use crate::event::LogEvent;
use crate::parser::ParseFailure;

/// A stateful aggregator fed by the engine.
///
/// A metric only ever sees the events (and, if it opts in, the parse
/// failures) handed to it, in file order. Its result depends on nothing else.
pub trait Metric {
    /// Registry name, used in config files and log fields.
    fn name(&self) -> &'static str;

    /// Fold one event into the running state. Never fails.
    fn consume(&mut self, event: &LogEvent);

    /// Snapshot of the computed values.
    ///
    /// Callable at any point, including before the first `consume`, and
    /// calling it does not change the state.
    fn result(&self) -> MetricResult;

    /// Opt in to parse failures.
    ///
    /// Metrics that want to hear about malformed lines return `Some(self)`;
    /// everyone else keeps the default and is skipped for those lines.
    fn as_error_sink(&mut self) -> Option<&mut dyn ParseErrorSink> {
        None
    }
}

/// Optional capability: receive lines the parser could not decode.
pub trait ParseErrorSink {
    fn consume_error(&mut self, failure: &ParseFailure);
}
