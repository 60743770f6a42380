//! Timestamp boundary tests driven by an injected clock.

use crate::assert_error_starts_with;
use chrono::{DateTime, Duration, TimeZone, Utc};
use domain_primitives::prelude::*;

fn reading() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2032, 11, 5, 9, 15, 0).unwrap()
}

#[test]
fn test_future_rejects_the_clock_reading_itself() {
    let clock = FixedClock::new(reading());
    let result =
        FutureTimestamp::with_clock(reading(), &FutureTimestamp::DEFAULT_MESSAGE, &clock);
    assert_error_starts_with!(result, "The timestamp must be in the future.");
}

#[test]
fn test_past_or_present_accepts_the_clock_reading_itself() {
    let clock = FixedClock::new(reading());
    let value = PastOrPresentTimestamp::with_clock(
        reading(),
        &PastOrPresentTimestamp::DEFAULT_MESSAGE,
        &clock,
    )
    .unwrap();
    assert_eq!(value.value(), reading());
}

#[test]
fn test_custom_message_for_past_timestamp() {
    let clock = FixedClock::new(reading());
    let message = ErrorMessage::new("Birth dates cannot be in the future.").unwrap();
    let result =
        PastOrPresentTimestamp::with_clock(reading() + Duration::days(1), &message, &clock);
    assert_error_starts_with!(result, "Birth dates cannot be in the future.");
}

#[test]
fn test_clock_is_read_once_per_construction() {
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct CountingClock {
        reads: AtomicUsize,
    }

    impl Clock for CountingClock {
        fn now(&self) -> DateTime<Utc> {
            self.reads.fetch_add(1, Ordering::SeqCst);
            reading()
        }
    }

    let clock = CountingClock {
        reads: AtomicUsize::new(0),
    };
    let _ = FutureTimestamp::with_clock(
        reading() + Duration::minutes(1),
        &FutureTimestamp::DEFAULT_MESSAGE,
        &clock,
    );
    let _ = PastOrPresentTimestamp::with_clock(
        reading(),
        &PastOrPresentTimestamp::DEFAULT_MESSAGE,
        &clock,
    );
    assert_eq!(clock.reads.load(Ordering::SeqCst), 2);
}

#[test]
fn test_try_from_uses_system_clock() {
    let value = FutureTimestamp::try_from(Utc::now() + Duration::days(30)).unwrap();
    let raw: DateTime<Utc> = value.into();
    assert!(raw > Utc::now());

    assert!(PastOrPresentTimestamp::try_from(Utc::now() + Duration::days(30)).is_err());
}
