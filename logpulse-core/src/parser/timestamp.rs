//! ISO-8601 timestamp decoding.
//!
//! The accepted grammar is the one the existing producers and readers of these
//! logs agree on:
//!
//! date        YYYY-MM-DD | YYYYMMDD | YYYY-Www[-D] | YYYYWww[D]
//! separator   any single ASCII character (usually `T`)
//! time        HH[:MM[:SS[.fff]]] | HH[MM[SS[.fff]]]
//! fraction    `.` or `,`, up to 6 digits kept, further digits dropped
//! offset      `Z` | ±HH[:MM[:SS[.ffffff]]] | ±HH[MM[SS]]
//!
//! Date only means midnight. No offset means UTC. Only an uppercase `Z` is
//! Zulu, and second 60 is not a valid second.

use super::LineError;
use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime, NaiveTime, TimeDelta, Utc, Weekday};

/// Shortest input that can hold a date (`YYYYWww`).
const MIN_LEN: usize = 7;

/// An offset must stay strictly inside one day either way.
const MAX_OFFSET_MICROS: i64 = 86_400 * 1_000_000;

/// Parse an ISO-8601 timestamp into UTC.
///
/// Numeric offsets are normalized to UTC. A timestamp carrying no offset at
/// all is taken to already be UTC.
pub fn parse_timestamp(value: &str) -> Result<DateTime<Utc>, LineError> {
    decode(&value.replace('Z', "+00:00")).ok_or_else(|| LineError::Timestamp {
        value: value.to_string(),
    })
}

fn decode(value: &str) -> Option<DateTime<Utc>> {
    let bytes = value.as_bytes();
    if bytes.len() < MIN_LEN {
        return None;
    }

    let split = date_end(bytes)?;
    let date = parse_date(bytes, split)?;

    let (time, offset_micros) = match bytes.get(split + 1..) {
        Some(rest) => parse_time(rest)?,
        None => (NaiveTime::MIN, 0),
    };

    NaiveDateTime::new(date, time)
        .checked_sub_signed(TimeDelta::microseconds(offset_micros))
        .map(|naive| naive.and_utc())
}

/// Where the date part stops and the separator sits. Week dates make this
/// ambiguous when the time is written without separators; the shorter date
/// wins unless the digit run only fits the longer one.
fn date_end(b: &[u8]) -> Option<usize> {
    let len = b.len();
    if len == MIN_LEN {
        return Some(MIN_LEN);
    }

    match (b[4], b[5]) {
        (b'-', b'W') => {
            if len > 8 && b[8] == b'-' {
                if len == 9 {
                    return None;
                }
                if len > 10 && b[10].is_ascii_digit() {
                    return Some(8);
                }
                return Some(10);
            }
            Some(8)
        }
        (b'-', _) => Some(10),
        (b'W', _) => {
            let digits_end = (7..len)
                .find(|&i| !b[i].is_ascii_digit())
                .unwrap_or(len);
            match digits_end {
                end if end < 9 => Some(end),
                end if end % 2 == 0 => Some(7),
                _ => Some(8),
            }
        }
        _ => Some(8),
    }
}

fn parse_date(b: &[u8], end: usize) -> Option<NaiveDate> {
    let mut pos = 0;
    let year = digits(b, &mut pos, 4)? as i32;

    let dashed = b.get(pos) == Some(&b'-');
    if dashed {
        pos += 1;
    }

    let date = if b.get(pos) == Some(&b'W') {
        pos += 1;
        let week = digits(b, &mut pos, 2)?;
        let day = if pos < end {
            if dashed && !take(b, &mut pos, b'-') {
                return None;
            }
            digits(b, &mut pos, 1)?
        } else {
            1
        };
        NaiveDate::from_isoywd_opt(year, week, iso_weekday(day)?)?
    } else {
        let month = digits(b, &mut pos, 2)?;
        if dashed && !take(b, &mut pos, b'-') {
            return None;
        }
        let day = digits(b, &mut pos, 2)?;
        NaiveDate::from_ymd_opt(year, month, day)?
    };

    (1..=9999).contains(&date.year()).then_some(date)
}

fn iso_weekday(day: u32) -> Option<Weekday> {
    const WEEK: [Weekday; 7] = [
        Weekday::Mon,
        Weekday::Tue,
        Weekday::Wed,
        Weekday::Thu,
        Weekday::Fri,
        Weekday::Sat,
        Weekday::Sun,
    ];
    WEEK.get(day.checked_sub(1)? as usize).copied()
}

/// Clock time plus the offset east of UTC, in microseconds.
fn parse_time(t: &[u8]) -> Option<(NaiveTime, i64)> {
    let offset_at = t.iter().position(|&c| c == b'+' || c == b'-');

    let (clock, trailing) = parse_clock(t, offset_at.unwrap_or(t.len()))?;
    let time = clock.to_time()?;

    let Some(offset_at) = offset_at else {
        return (!trailing).then_some((time, 0));
    };

    let sign = if t[offset_at] == b'-' { -1 } else { 1 };
    let offset = &t[offset_at + 1..];
    let (offset, trailing) = parse_clock(offset, offset.len())?;
    if trailing {
        return None;
    }

    let micros = sign * offset.total_micros();
    (micros.abs() < MAX_OFFSET_MICROS).then_some((time, micros))
}

#[derive(Debug, Default, Clone, Copy)]
struct Clock {
    hour: u32,
    minute: u32,
    second: u32,
    micro: u32,
}

impl Clock {
    fn to_time(self) -> Option<NaiveTime> {
        NaiveTime::from_hms_micro_opt(self.hour, self.minute, self.second, self.micro)
    }

    /// Offsets are not range checked field by field, only as a whole.
    fn total_micros(self) -> i64 {
        let seconds =
            i64::from(self.hour) * 3600 + i64::from(self.minute) * 60 + i64::from(self.second);
        seconds * 1_000_000 + i64::from(self.micro)
    }
}

/// Read `HH[:MM[:SS]][.fff]` (or the compact form) from the front of `s`,
/// stopping at `end`. The flag is set when something other than the end of
/// input follows what was read; for a clock that is followed by an offset
/// this is expected.
fn parse_clock(s: &[u8], end: usize) -> Option<(Clock, bool)> {
    let at = |i: usize| s.get(i).copied().unwrap_or(0);

    let mut fields = [0u32; 3];
    let mut pos = 0;
    let mut colons = true;

    for i in 0..3 {
        fields[i] = digits(s, &mut pos, 2)?;
        let c = at(pos);
        pos += 1;

        if i == 0 {
            colons = c == b':';
        }
        if pos >= end {
            let [hour, minute, second] = fields;
            let clock = Clock { hour, minute, second, micro: 0 };
            return Some((clock, c != 0));
        }
        if colons && c == b':' {
            continue;
        }
        if c == b'.' || c == b',' {
            break;
        }
        if colons {
            return None;
        }
        pos -= 1;
    }

    let width = (end - pos).min(6);
    let micro = digits(s, &mut pos, width)? * 10u32.pow((6 - width) as u32);
    while at(pos).is_ascii_digit() {
        pos += 1;
    }

    let [hour, minute, second] = fields;
    Some((Clock { hour, minute, second, micro }, at(pos) != 0))
}

/// Exactly `count` ASCII digits.
fn digits(b: &[u8], pos: &mut usize, count: usize) -> Option<u32> {
    let run = b.get(*pos..*pos + count)?;
    if !run.iter().all(u8::is_ascii_digit) {
        return None;
    }
    *pos += count;
    Some(run.iter().fold(0, |acc, d| acc * 10 + u32::from(d - b'0')))
}

fn take(b: &[u8], pos: &mut usize, expected: u8) -> bool {
    let found = b.get(*pos) == Some(&expected);
    *pos += 1;
    found
}
