
use crate::event::LogEvent;
use chrono::Utc;

pub(super) fn event(status: i64, latency_ms: u64) -> LogEvent {
    LogEvent::new(Utc::now(), "GET", "/", status, latency_ms)
}
