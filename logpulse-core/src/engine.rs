//! Dispatch loop
//!
//! Pulls outcomes off the parser one at a time and fans each one out to every
//! metric in registration order. Valid events go to `consume`; parse failures
//! go only to metrics that expose an error sink. A bad line never stops the
//! run. Only failing to open or read the file does.

use crate::error::PipelineError;
use crate::event::LogEvent;
use crate::metrics::Metric;
use crate::parser::{EventStream, LogParser, ParseFailure, ParseOutcome};
use std::io::{self, BufRead};
use std::path::Path;
use tracing::info;

/// What went through the loop during one run.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    pub events: u64,
    pub parse_failures: u64,
}

/// One pipeline run over one input. Build a fresh one (with fresh metrics)
/// for every run.
pub struct Pipeline {
    metrics: Vec<Box<dyn Metric>>,
}

impl Pipeline {
    pub fn new(metrics: Vec<Box<dyn Metric>>) -> Self {
        Self { metrics }
    }

    /// Run over the file at `path` and hand the metrics back, in the order
    /// they were registered, ready to be queried.
    pub fn run(self, path: impl AsRef<Path>) -> Result<Vec<Box<dyn Metric>>, PipelineError> {
        self.run_with_summary(path).map(|(metrics, _)| metrics)
    }

    pub fn run_with_summary(
        mut self,
        path: impl AsRef<Path>,
    ) -> Result<(Vec<Box<dyn Metric>>, RunSummary), PipelineError> {
        let path = path.as_ref();
        let stream = LogParser::parse(path)?;

        let summary = self
            .drive(stream)
            .map_err(|e| PipelineError::read(path, e))?;

        info!(
            path = %path.display(),
            events = summary.events,
            parse_failures = summary.parse_failures,
            metrics = self.metrics.len(),
            "pipeline run complete"
        );

        Ok((self.metrics, summary))
    }

    /// Same loop over any buffered reader.
    pub fn run_reader<R: BufRead>(
        mut self,
        reader: R,
    ) -> io::Result<(Vec<Box<dyn Metric>>, RunSummary)> {
        let summary = self.drive(EventStream::new(reader))?;
        Ok((self.metrics, summary))
    }

    fn drive<R: BufRead>(&mut self, stream: EventStream<R>) -> io::Result<RunSummary> {
        let mut summary = RunSummary::default();

        for outcome in stream {
            match outcome? {
                ParseOutcome::Event(event) => {
                    summary.events += 1;
                    self.dispatch_event(&event);
                }
                ParseOutcome::Failure(failure) => {
                    summary.parse_failures += 1;
                    self.dispatch_failure(&failure);
                }
            }
        }

        Ok(summary)
    }

    fn dispatch_event(&mut self, event: &LogEvent) {
        for metric in &mut self.metrics {
            metric.consume(event);
        }
    }

    fn dispatch_failure(&mut self, failure: &ParseFailure) {
        for metric in &mut self.metrics {
            if let Some(sink) = metric.as_error_sink() {
                sink.consume_error(failure);
            }
        }
    }
}

/// Run `metrics` over the log at `path` and return them with their state.
pub fn run_pipeline(
    path: impl AsRef<Path>,
    metrics: Vec<Box<dyn Metric>>,
) -> Result<Vec<Box<dyn Metric>>, PipelineError> {
    Pipeline::new(metrics).run(path)
}
