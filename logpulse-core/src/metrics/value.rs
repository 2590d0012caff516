use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt::{Display, Formatter};

/// Named values a metric reports, ordered by key.
pub type MetricResult = BTreeMap<String, MetricValue>;

/// A single reported number.
///
/// Integers and floats are kept apart so a count stays `5` in the report and
/// a rate stays `50.0`. The integer side is wide enough to hold any `u64`
/// or `i64` exactly.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(untagged)]
pub enum MetricValue {
    Int(i128),
    Float(f64),
}

impl MetricValue {
    pub fn as_f64(&self) -> f64 {
        match *self {
            MetricValue::Int(v) => v as f64,
            MetricValue::Float(v) => v,
        }
    }
}

impl From<u64> for MetricValue {
    fn from(v: u64) -> Self {
        MetricValue::Int(i128::from(v))
    }
}

impl From<i64> for MetricValue {
    fn from(v: i64) -> Self {
        MetricValue::Int(i128::from(v))
    }
}

impl From<f64> for MetricValue {
    fn from(v: f64) -> Self {
        MetricValue::Float(v)
    }
}

impl Display for MetricValue {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            MetricValue::Int(v) => write!(f, "{v}"),
            MetricValue::Float(v) => write!(f, "{v:?}"),
        }
    }
}

/// Round to `places` decimal places, ties to even on the exact binary value.
///
/// Goes through decimal formatting rather than `(v * 10^n).round()`, which
/// double-rounds and drifts on values like `2.675`.
pub(crate) fn round_to(value: f64, places: usize) -> f64 {
    format!("{value:.places$}").parse().unwrap_or(value)
}
