//! Comparison conformance for every primitive
//!
//! Each primitive must satisfy the same null-ordering table, equality and
//! hashing rules, regardless of the raw type it wraps.

use crate::common::{assert_conformance, hash_of};
use chrono::{Duration, TimeZone, Utc};
use domain_primitives::clock::FixedClock;
use domain_primitives::prelude::*;

#[test]
fn test_positive_integer_conformance() {
    let x = PositiveInteger::new(5).unwrap();
    let copy = PositiveInteger::new(5).unwrap();
    let greater = PositiveInteger::new(6).unwrap();
    let other = PositiveLong::new(5).unwrap();
    assert_conformance(&x, &copy, &greater, other.as_any());
}

#[test]
fn test_negative_integer_conformance() {
    let x = NegativeInteger::new(-10).unwrap();
    let copy = NegativeInteger::new(-10).unwrap();
    let greater = NegativeInteger::new(-1).unwrap();
    let other = NegativeLong::new(-10).unwrap();
    assert_conformance(&x, &copy, &greater, other.as_any());
}

#[test]
fn test_positive_long_conformance() {
    let x = PositiveLong::new(7_000_000_000).unwrap();
    let copy = PositiveLong::new(7_000_000_000).unwrap();
    let greater = PositiveLong::new(7_000_000_001).unwrap();
    let other = PositiveInteger::new(7).unwrap();
    assert_conformance(&x, &copy, &greater, other.as_any());
}

#[test]
fn test_negative_long_conformance() {
    let x = NegativeLong::new(-42).unwrap();
    let copy = NegativeLong::new(-42).unwrap();
    let greater = NegativeLong::new(-41).unwrap();
    let other = NegativeInteger::new(-42).unwrap();
    assert_conformance(&x, &copy, &greater, other.as_any());
}

#[test]
fn test_string_length_conformance() {
    let x = StringLength::new(3).unwrap();
    let copy = StringLength::new(3).unwrap();
    let greater = StringLength::new(4).unwrap();
    let other = PositiveInteger::new(3).unwrap();
    assert_conformance(&x, &copy, &greater, other.as_any());
}

#[test]
fn test_string_length_range_conformance() {
    let len = |raw| StringLength::new(raw).unwrap();
    let x = StringLengthRange::new(len(1), len(5)).unwrap();
    let copy = StringLengthRange::new(len(1), len(5)).unwrap();
    let greater = StringLengthRange::new(len(1), len(6)).unwrap();
    let other = StringLength::new(1).unwrap();
    assert_conformance(&x, &copy, &greater, other.as_any());
}

#[test]
fn test_timestamp_conformance() {
    let clock = FixedClock::new(Utc.with_ymd_and_hms(2031, 3, 1, 8, 30, 0).unwrap());
    let message = FutureTimestamp::DEFAULT_MESSAGE;
    let instant = clock.now() + Duration::days(1);

    let x = FutureTimestamp::with_clock(instant, &message, &clock).unwrap();
    let copy = FutureTimestamp::with_clock(instant, &message, &clock).unwrap();
    let greater =
        FutureTimestamp::with_clock(instant + Duration::seconds(1), &message, &clock).unwrap();

    let past_clock = FixedClock::new(instant);
    let other = PastOrPresentTimestamp::with_clock(
        instant,
        &PastOrPresentTimestamp::DEFAULT_MESSAGE,
        &past_clock,
    )
    .unwrap();
    assert_conformance(&x, &copy, &greater, other.as_any());
}

#[test]
fn test_past_or_present_timestamp_conformance() {
    let base = Utc.with_ymd_and_hms(2020, 1, 1, 0, 0, 0).unwrap();
    let x = PastOrPresentTimestamp::new(base).unwrap();
    let copy = PastOrPresentTimestamp::new(base).unwrap();
    let greater = PastOrPresentTimestamp::new(base + Duration::hours(1)).unwrap();
    let other = NonEmptyOrWhiteSpaceString::new("2020-01-01").unwrap();
    assert_conformance(&x, &copy, &greater, other.as_any());
}

#[test]
fn test_non_empty_string_conformance() {
    let x = NonEmptyOrWhiteSpaceString::new("alpha").unwrap();
    let copy = NonEmptyOrWhiteSpaceString::new("alpha").unwrap();
    let greater = NonEmptyOrWhiteSpaceString::new("beta").unwrap();
    let other = ConfigurableStringBuilder::new().build("alpha").unwrap();
    assert_conformance(&x, &copy, &greater, other.as_any());
}

#[test]
fn test_configurable_string_conformance() {
    let build = |value: &str| ConfigurableStringBuilder::new().build(value).unwrap();
    let x = build("alpha");
    let copy = build("alpha");
    let greater = build("beta");
    let other = NonEmptyOrWhiteSpaceString::new("alpha").unwrap();
    assert_conformance(&x, &copy, &greater, other.as_any());
}

#[test]
fn test_hash_matches_wrapped_value() {
    assert_eq!(hash_of(&PositiveInteger::new(9).unwrap()), hash_of(&9i32));
    assert_eq!(hash_of(&NegativeLong::new(-9).unwrap()), hash_of(&-9i64));
    assert_eq!(
        hash_of(&NonEmptyOrWhiteSpaceString::new("text").unwrap()),
        hash_of("text")
    );
}

#[test]
fn test_sorting_with_absent_values() {
    let mut values = vec![
        Some(PositiveInteger::new(3).unwrap()),
        None,
        Some(PositiveInteger::new(1).unwrap()),
    ];
    values.sort();
    let raw: Vec<Option<i32>> = values.iter().map(|v| v.map(|p| p.value())).collect();
    assert_eq!(raw, vec![None, Some(1), Some(3)]);
}
