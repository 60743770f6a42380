//! Sign-constrained 32-bit integers.

use crate::error::{PrimitiveError, PrimitiveResult};
use crate::error_message::ErrorMessage;
use crate::validated::{ValidatedValue, impl_domain_primitive};

/// A 32-bit integer strictly greater than zero.
///
/// ```rust
/// use domain_primitives::numeric::PositiveInteger;
///
/// let quantity = PositiveInteger::new(3).unwrap();
/// assert_eq!(quantity.value(), 3);
/// assert!(PositiveInteger::new(0).is_err());
/// ```
#[derive(Debug, Clone, Copy)]
pub struct PositiveInteger(ValidatedValue<i32>);

impl PositiveInteger {
    /// Message used when no custom message is supplied.
    pub const DEFAULT_MESSAGE: ErrorMessage =
        ErrorMessage::from_static("The value must be a positive integer.");

    /// Create a new PositiveInteger with the default error message.
    pub fn new(value: i32) -> PrimitiveResult<Self> {
        Self::with_message(value, &Self::DEFAULT_MESSAGE)
    }

    /// Create a new PositiveInteger, failing with `message` when `value <= 0`.
    pub fn with_message(value: i32, message: &ErrorMessage) -> PrimitiveResult<Self> {
        ValidatedValue::new(value, message, Self::validate).map(Self)
    }

    fn validate(raw: i32, message: &ErrorMessage) -> PrimitiveResult<i32> {
        if raw > 0 {
            Ok(raw)
        } else {
            Err(PrimitiveError::out_of_range(message.as_str(), "value", raw))
        }
    }
}

impl_domain_primitive!(PositiveInteger, i32);

/// A 32-bit integer strictly less than zero.
#[derive(Debug, Clone, Copy)]
pub struct NegativeInteger(ValidatedValue<i32>);

impl NegativeInteger {
    /// Message used when no custom message is supplied.
    pub const DEFAULT_MESSAGE: ErrorMessage =
        ErrorMessage::from_static("The value must be a negative integer.");

    /// Create a new NegativeInteger with the default error message.
    pub fn new(value: i32) -> PrimitiveResult<Self> {
        Self::with_message(value, &Self::DEFAULT_MESSAGE)
    }

    /// Create a new NegativeInteger, failing with `message` when `value >= 0`.
    pub fn with_message(value: i32, message: &ErrorMessage) -> PrimitiveResult<Self> {
        ValidatedValue::new(value, message, Self::validate).map(Self)
    }

    fn validate(raw: i32, message: &ErrorMessage) -> PrimitiveResult<i32> {
        if raw < 0 {
            Ok(raw)
        } else {
            Err(PrimitiveError::out_of_range(message.as_str(), "value", raw))
        }
    }
}

impl_domain_primitive!(NegativeInteger, i32);
