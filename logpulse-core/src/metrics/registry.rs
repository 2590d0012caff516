use super::{ErrorRateMetric, LatencyMetric, Metric, ParseErrorMetric, RequestCountMetric};
use crate::conf::ConfigError;
use std::collections::{HashMap, HashSet};
use tracing::debug;

pub type MetricBuilder = fn() -> Box<dyn Metric>;

fn build_request_count() -> Box<dyn Metric> {
    Box::new(RequestCountMetric::new())
}

fn build_error_rate() -> Box<dyn Metric> {
    Box::new(ErrorRateMetric::new())
}

fn build_latency() -> Box<dyn Metric> {
    Box::new(LatencyMetric::new())
}

fn build_parse_errors() -> Box<dyn Metric> {
    Box::new(ParseErrorMetric::new())
}

/// Maps metric names (as written in config files) to constructors.
pub struct MetricRegistry {
    builders: HashMap<&'static str, MetricBuilder>,
}

impl Default for MetricRegistry {
    fn default() -> Self {
        Self::builtin()
    }
}

impl MetricRegistry {
    /// A registry with nothing in it.
    pub fn empty() -> Self {
        Self {
            builders: HashMap::new(),
        }
    }

    /// Every metric that ships with logpulse.
    pub fn builtin() -> Self {
        let mut registry = Self::empty();

        registry.register(RequestCountMetric::NAME, build_request_count);
        registry.register(ErrorRateMetric::NAME, build_error_rate);
        registry.register(LatencyMetric::NAME, build_latency);
        registry.register(ParseErrorMetric::NAME, build_parse_errors);

        registry
    }

    /// Add (or replace) a constructor under `name`.
    pub fn register(&mut self, name: &'static str, builder: MetricBuilder) {
        self.builders.insert(name, builder);
    }

    pub fn contains(&self, name: &str) -> bool {
        self.builders.contains_key(name)
    }

    /// Registered names, sorted.
    pub fn names(&self) -> Vec<&'static str> {
        let mut names: Vec<_> = self.builders.keys().copied().collect();
        names.sort_unstable();
        names
    }

    pub fn build(&self, name: &str) -> Result<Box<dyn Metric>, ConfigError> {
        let builder = self
            .builders
            .get(name)
            .ok_or_else(|| ConfigError::UnknownMetric {
                name: name.to_string(),
                known: self.names().join(", "),
            })?;

        Ok(builder())
    }

    /// Build metrics in the order given. That order is the dispatch and
    /// merge order for the run.
    pub fn build_all<S: AsRef<str>>(&self, names: &[S]) -> Result<Vec<Box<dyn Metric>>, ConfigError> {
        let mut seen = HashSet::new();
        let mut metrics = Vec::with_capacity(names.len());

        for name in names {
            let name = name.as_ref();
            if !seen.insert(name) {
                return Err(ConfigError::DuplicateMetric {
                    name: name.to_string(),
                });
            }

            metrics.push(self.build(name)?);
            debug!(metric = name, "metric enabled");
        }

        Ok(metrics)
    }
}
