pub mod fixtures;
pub mod tracing;

pub use self::fixtures::{sample_log, write_log};
pub use self::tracing::{CapturedEvent, captured_events};
