//! Sign-constrained 64-bit integers.

use crate::error::{PrimitiveError, PrimitiveResult};
use crate::error_message::ErrorMessage;
use crate::validated::{ValidatedValue, impl_domain_primitive};

/// A 64-bit integer strictly greater than zero.
#[derive(Debug, Clone, Copy)]
pub struct PositiveLong(ValidatedValue<i64>);

impl PositiveLong {
    /// Message used when no custom message is supplied.
    pub const DEFAULT_MESSAGE: ErrorMessage =
        ErrorMessage::from_static("The value must be a positive long integer.");

    /// Create a new PositiveLong with the default error message.
    pub fn new(value: i64) -> PrimitiveResult<Self> {
        Self::with_message(value, &Self::DEFAULT_MESSAGE)
    }

    /// Create a new PositiveLong with a custom error message.
    pub fn with_message(value: i64, message: &ErrorMessage) -> PrimitiveResult<Self> {
        ValidatedValue::new(value, message, Self::validate).map(Self)
    }

    fn validate(raw: i64, message: &ErrorMessage) -> PrimitiveResult<i64> {
        if raw > 0 {
            Ok(raw)
        } else {
            Err(PrimitiveError::out_of_range(message.as_str(), "value", raw))
        }
    }
}

impl_domain_primitive!(PositiveLong, i64);

/// A 64-bit integer strictly less than zero.
#[derive(Debug, Clone, Copy)]
pub struct NegativeLong(ValidatedValue<i64>);

impl NegativeLong {
    /// Message used when no custom message is supplied.
    pub const DEFAULT_MESSAGE: ErrorMessage =
        ErrorMessage::from_static("The value must be a negative long integer.");

    /// Create a new NegativeLong with the default error message.
    pub fn new(value: i64) -> PrimitiveResult<Self> {
        Self::with_message(value, &Self::DEFAULT_MESSAGE)
    }

    /// Create a new NegativeLong with a custom error message.
    pub fn with_message(value: i64, message: &ErrorMessage) -> PrimitiveResult<Self> {
        ValidatedValue::new(value, message, Self::validate).map(Self)
    }

    fn validate(raw: i64, message: &ErrorMessage) -> PrimitiveResult<i64> {
        if raw < 0 {
            Ok(raw)
        } else {
            Err(PrimitiveError::out_of_range(message.as_str(), "value", raw))
        }
    }
}

impl_domain_primitive!(NegativeLong, i64);
