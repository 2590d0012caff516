use super::line::{LineError, parse_line};
use crate::error::PipelineError;
use crate::event::LogEvent;
use std::fmt::{Display, Formatter};
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;
use tracing::{debug, warn};

/// A line that could not be decoded, with enough context to point at it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseFailure {
    /// 1-based physical line number (blank lines are counted)
    pub line_number: usize,
    /// The offending line, trimmed
    pub line: String,
    pub reason: LineError,
}

impl Display for ParseFailure {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "failed to parse line {}: {} ({})",
            self.line_number, self.line, self.reason
        )
    }
}

/// What the parser produced for one non-blank line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseOutcome {
    Event(LogEvent),
    Failure(ParseFailure),
}

pub struct LogParser;

impl LogParser {
    /// Open `path` and return a lazy stream over its lines.
    ///
    /// A missing or unreadable file fails here, before any line is read.
    /// Calling this again with the same path starts over from the top.
    pub fn parse(path: impl AsRef<Path>) -> Result<EventStream<BufReader<File>>, PipelineError> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|e| PipelineError::open(path, e))?;

        debug!(path = %path.display(), "opened log file");

        Ok(EventStream::new(BufReader::new(file)))
    }
}

/// Forward-only stream of parse outcomes.
///
/// The stream owns its reader, so the file is closed as soon as the stream is
/// dropped, whether it ran to the end or was abandoned halfway.
pub struct EventStream<R> {
    reader: R,
    buf: Vec<u8>,
    line_number: usize,
    finished: bool,
}

impl<R: BufRead> EventStream<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            buf: Vec::new(),
            line_number: 0,
            finished: false,
        }
    }

    /// Number of physical lines read so far.
    pub fn lines_read(&self) -> usize {
        self.line_number
    }

    fn decode_current(&self) -> Option<ParseOutcome> {
        let text = match std::str::from_utf8(&self.buf) {
            Ok(text) => text,
            Err(_) => {
                let raw = String::from_utf8_lossy(&self.buf).trim().to_string();
                return Some(self.failure(raw, LineError::Encoding));
            }
        };

        let line = text.trim();
        if line.is_empty() {
            return None;
        }

        Some(match parse_line(line) {
            Ok(event) => ParseOutcome::Event(event),
            Err(reason) => self.failure(line.to_string(), reason),
        })
    }

    fn failure(&self, line: String, reason: LineError) -> ParseOutcome {
        warn!(
            line = self.line_number,
            reason = %reason,
            raw = %line,
            "skipping malformed log line"
        );

        ParseOutcome::Failure(ParseFailure {
            line_number: self.line_number,
            line,
            reason,
        })
    }
}

impl<R: BufRead> Iterator for EventStream<R> {
    type Item = io::Result<ParseOutcome>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }

        loop {
            self.buf.clear();

            match self.reader.read_until(b'\n', &mut self.buf) {
                Ok(0) => {
                    self.finished = true;
                    return None;
                }
                Ok(_) => {}
                Err(e) => {
                    self.finished = true;
                    return Some(Err(e));
                }
            }

            self.line_number += 1;

            if let Some(outcome) = self.decode_current() {
                return Some(Ok(outcome));
            }
        }
    }
}

impl<R: BufRead> std::iter::FusedIterator for EventStream<R> {}
