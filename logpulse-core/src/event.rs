use chrono::{DateTime, Utc};

/// One successfully decoded access-log record.
///
/// Fields are private so an event cannot be altered once the parser (or a
/// caller going through [`LogEvent::new`]) has built it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogEvent {
    timestamp: DateTime<Utc>,
    method: String,
    path: String,
    status: i64,
    latency_ms: u64,
}

impl LogEvent {
    pub fn new(
        timestamp: DateTime<Utc>,
        method: impl Into<String>,
        path: impl Into<String>,
        status: i64,
        latency_ms: u64,
    ) -> Self {
        Self {
            timestamp,
            method: method.into(),
            path: path.into(),
            status,
            latency_ms,
        }
    }

    pub fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }

    pub fn method(&self) -> &str {
        &self.method
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn status(&self) -> i64 {
        self.status
    }

    pub fn latency_ms(&self) -> u64 {
        self.latency_ms
    }

    /// True for 5xx (and anything above): the server failed the request.
    pub fn is_server_error(&self) -> bool {
        self.status >= 500
    }
}
