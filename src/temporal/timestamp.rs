//! Timestamps constrained relative to the construction instant.

use crate::clock::{Clock, SystemClock};
use crate::error::{PrimitiveError, PrimitiveResult};
use crate::error_message::ErrorMessage;
use crate::validated::{ValidatedValue, impl_domain_primitive};
use chrono::{DateTime, SecondsFormat, Utc};

/// A UTC instant strictly after the clock reading taken at construction.
///
/// ```rust
/// use chrono::{Duration, Utc};
/// use domain_primitives::temporal::FutureTimestamp;
///
/// fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let deadline = FutureTimestamp::new(Utc::now() + Duration::days(7))?;
///     assert!(deadline.value() > Utc::now());
///
///     assert!(FutureTimestamp::new(Utc::now() - Duration::days(1)).is_err());
///     Ok(())
/// }
/// ```
#[derive(Debug, Clone, Copy)]
pub struct FutureTimestamp(ValidatedValue<DateTime<Utc>>);

impl FutureTimestamp {
    /// Message used when no custom message is supplied.
    pub const DEFAULT_MESSAGE: ErrorMessage =
        ErrorMessage::from_static("The timestamp must be in the future.");

    /// Create a new FutureTimestamp against the system clock.
    pub fn new(value: DateTime<Utc>) -> PrimitiveResult<Self> {
        Self::with_message(value, &Self::DEFAULT_MESSAGE)
    }

    /// Create a new FutureTimestamp against the system clock with a custom
    /// error message.
    pub fn with_message(value: DateTime<Utc>, message: &ErrorMessage) -> PrimitiveResult<Self> {
        Self::with_clock(value, message, &SystemClock)
    }

    /// Create a new FutureTimestamp, reading "now" once from `clock`.
    pub fn with_clock<C>(
        value: DateTime<Utc>,
        message: &ErrorMessage,
        clock: &C,
    ) -> PrimitiveResult<Self>
    where
        C: Clock + ?Sized,
    {
        let now = clock.now();
        ValidatedValue::new(value, message, |raw, message| {
            if raw > now {
                Ok(raw)
            } else {
                Err(rejected(raw, message))
            }
        })
        .map(Self)
    }
}

impl_domain_primitive!(FutureTimestamp, DateTime<Utc>);

/// A UTC instant at or before the clock reading taken at construction.
#[derive(Debug, Clone, Copy)]
pub struct PastOrPresentTimestamp(ValidatedValue<DateTime<Utc>>);

impl PastOrPresentTimestamp {
    /// Message used when no custom message is supplied.
    pub const DEFAULT_MESSAGE: ErrorMessage =
        ErrorMessage::from_static("The timestamp must be in the past or present.");

    /// Create a new PastOrPresentTimestamp against the system clock.
    pub fn new(value: DateTime<Utc>) -> PrimitiveResult<Self> {
        Self::with_message(value, &Self::DEFAULT_MESSAGE)
    }

    pub fn with_message(value: DateTime<Utc>, message: &ErrorMessage) -> PrimitiveResult<Self> {
        Self::with_clock(value, message, &SystemClock)
    }

    /// Create a new PastOrPresentTimestamp, reading "now" once from `clock`.
    pub fn with_clock<C>(
        value: DateTime<Utc>,
        message: &ErrorMessage,
        clock: &C,
    ) -> PrimitiveResult<Self>
    where
        C: Clock + ?Sized,
    {
        let now = clock.now();
        ValidatedValue::new(value, message, |raw, message| {
            if raw <= now {
                Ok(raw)
            } else {
                Err(rejected(raw, message))
            }
        })
        .map(Self)
    }
}

impl_domain_primitive!(PastOrPresentTimestamp, DateTime<Utc>);

fn rejected(raw: DateTime<Utc>, message: &ErrorMessage) -> PrimitiveError {
    PrimitiveError::out_of_range(
        message.as_str(),
        "value",
        raw.to_rfc3339_opts(SecondsFormat::AutoSi, true),
    )
}
