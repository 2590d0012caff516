//! Line parser
//!
//! Turns an access log into a lazy stream of [`ParseOutcome`]s, one per
//! non-blank line, in file order:
//!
//! file
//! EventStream (read one line, trim, skip blanks)
//! parse_line
//! ParseOutcome::Event | ParseOutcome::Failure
//!
//! A malformed line is a value, not an error: the stream keeps going and the
//! engine decides who gets to count it. Only I/O problems are fatal.

mod line;
mod stream;
mod timestamp;

#[cfg(test)]
mod tests;

pub use line::{FIELD_COUNT, LineError, parse_line};
pub use stream::{EventStream, LogParser, ParseFailure, ParseOutcome};
pub use timestamp::parse_timestamp;
