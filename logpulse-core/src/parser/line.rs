use super::parse_timestamp;
use crate::event::LogEvent;
use thiserror::Error;

/// `<timestamp> <method> <path> <status> <latency_ms>`
pub const FIELD_COUNT: usize = 5;

/// Why a single line could not be decoded into a [`LogEvent`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LineError {
    #[error("expected {expected} fields, found {found}", expected = FIELD_COUNT)]
    FieldCount { found: usize },

    #[error("invalid timestamp '{value}'")]
    Timestamp { value: String },

    #[error("invalid status '{value}'")]
    Status { value: String },

    #[error("invalid latency '{value}'")]
    Latency { value: String },

    #[error("line is not valid UTF-8")]
    Encoding,
}

/// Decode one log line. Surrounding whitespace is ignored and fields may be
/// separated by any run of whitespace.
pub fn parse_line(line: &str) -> Result<LogEvent, LineError> {
    let fields: Vec<&str> = line.split_whitespace().collect();

    let [timestamp, method, path, status, latency] = fields.as_slice() else {
        return Err(LineError::FieldCount {
            found: fields.len(),
        });
    };

    let timestamp = parse_timestamp(timestamp)?;

    let status = status.parse::<i64>().map_err(|_| LineError::Status {
        value: status.to_string(),
    })?;

    // latency is a duration; a negative value is as broken as a non-number
    let latency_ms = latency.parse::<u64>().map_err(|_| LineError::Latency {
        value: latency.to_string(),
    })?;

    Ok(LogEvent::new(timestamp, *method, *path, status, latency_ms))
}
