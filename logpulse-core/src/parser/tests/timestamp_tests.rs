use crate::parser::{LineError, parse_timestamp};
use chrono::{DateTime, TimeZone, Utc};
use pretty_assertions::assert_eq;

fn utc(h: u32, m: u32, s: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 9, 10, h, m, s).unwrap()
}

fn rejected(value: &str) -> bool {
    parse_timestamp(value)
        == Err(LineError::Timestamp {
            value: value.to_string(),
        })
}

#[test]
fn zulu_suffix_means_utc() {
    let ts = parse_timestamp("2024-09-10T10:15:30Z").unwrap();

    assert_eq!(ts, utc(10, 15, 30));
}

#[test]
fn numeric_offset_is_normalized_to_utc() {
    let ts = parse_timestamp("2024-09-10T12:15:30+02:00").unwrap();

    assert_eq!(ts, utc(10, 15, 30));
}

#[test]
fn negative_offset_moves_forward() {
    let ts = parse_timestamp("2024-09-10T05:45:30-04:30").unwrap();

    assert_eq!(ts, utc(10, 15, 30));
}

#[test]
fn fractional_seconds_are_kept() {
    let ts = parse_timestamp("2024-09-10T10:15:30.250Z").unwrap();

    assert_eq!(ts.timestamp_subsec_millis(), 250);
}

#[test]
fn comma_introduces_a_fraction_too() {
    let ts = parse_timestamp("2024-09-10T10:15:30,5Z").unwrap();

    assert_eq!(ts.timestamp_subsec_millis(), 500);
}

#[test]
fn fraction_beyond_microseconds_is_truncated() {
    let ts = parse_timestamp("2024-09-10T10:15:30.123456789Z").unwrap();

    assert_eq!(ts.timestamp_subsec_micros(), 123_456);
}

#[test]
fn timestamp_without_offset_is_read_as_utc() {
    let ts = parse_timestamp("2024-09-10T10:15:30").unwrap();

    assert_eq!(ts, utc(10, 15, 30));
}

#[test]
fn reduced_precision_times_are_accepted() {
    assert_eq!(parse_timestamp("2024-09-10T10:15Z").unwrap(), utc(10, 15, 0));
    assert_eq!(parse_timestamp("2024-09-10T10Z").unwrap(), utc(10, 0, 0));
}

#[test]
fn date_only_means_midnight() {
    assert_eq!(parse_timestamp("2024-09-10").unwrap(), utc(0, 0, 0));
    assert_eq!(parse_timestamp("20240910").unwrap(), utc(0, 0, 0));
}

#[test]
fn basic_format_is_accepted() {
    assert_eq!(
        parse_timestamp("20240910T101530Z").unwrap(),
        utc(10, 15, 30)
    );
    assert_eq!(
        parse_timestamp("20240910T121530+0200").unwrap(),
        utc(10, 15, 30)
    );
}

#[test]
fn week_dates_are_accepted() {
    // 2024-09-10 is the Tuesday of ISO week 37
    assert_eq!(
        parse_timestamp("2024-W37-2T10:15:30Z").unwrap(),
        utc(10, 15, 30)
    );
    assert_eq!(parse_timestamp("2024W372").unwrap(), utc(0, 0, 0));
}

#[test]
fn separator_may_be_any_single_character() {
    assert_eq!(
        parse_timestamp("2024-09-10t10:15:30Z").unwrap(),
        utc(10, 15, 30)
    );
    assert_eq!(
        parse_timestamp("2024-09-10_10:15:30").unwrap(),
        utc(10, 15, 30)
    );
}

#[test]
fn lowercase_zulu_is_rejected() {
    assert!(rejected("2024-09-10t10:15:30z"));
    assert!(rejected("2024-09-10T10:15:30z"));
}

#[test]
fn leap_second_is_rejected() {
    assert!(rejected("2024-09-10T10:15:60Z"));
}

#[test]
fn out_of_range_fields_are_rejected() {
    assert!(rejected("2024-13-10T10:15:30Z"));
    assert!(rejected("2024-02-30"));
    assert!(rejected("2024-09-10T24:00:00Z"));
    assert!(rejected("2024-W54-1"));
    assert!(rejected("0000-01-01"));
}

#[test]
fn offset_must_stay_within_a_day() {
    assert!(rejected("2024-09-10T10:15:30+24:00"));
    assert_eq!(
        parse_timestamp("2024-09-10T23:59:00+23:59").unwrap(),
        utc(0, 0, 0)
    );
}

#[test]
fn malformed_shapes_are_rejected() {
    assert!(rejected("yesterday"));
    assert!(rejected("2024-09"));
    assert!(rejected("2024-09-10T"));
    assert!(rejected("2024-0910"));
    assert!(rejected("2024-09-10T10:1530Z"));
    assert!(rejected("2024-09-10T10:15:30Zjunk"));
    assert!(rejected("2024-09-10T10:15:30+05:"));
}
