//! String length bounds used by the configurable string builder.

use crate::error::{PrimitiveError, PrimitiveResult};
use crate::error_message::ErrorMessage;
use crate::relational;
use crate::validated::{DomainPrimitive, ValidatedValue, impl_domain_primitive};
use std::any::Any;
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};

/// A string length: an integer in `[0, i32::MAX]`.
#[derive(Debug, Clone, Copy)]
pub struct StringLength(ValidatedValue<i32>);

impl StringLength {
    /// Message used when no custom message is supplied.
    pub const DEFAULT_MESSAGE: ErrorMessage =
        ErrorMessage::from_static("The string length cannot be negative.");

    /// The shortest possible length.
    pub const ZERO: StringLength = StringLength(ValidatedValue::new_unchecked(0));

    /// The longest representable length.
    pub const MAX: StringLength = StringLength(ValidatedValue::new_unchecked(i32::MAX));

    /// Create a new StringLength with the default error message.
    pub fn new(value: i32) -> PrimitiveResult<Self> {
        Self::with_message(value, &Self::DEFAULT_MESSAGE)
    }

    /// Create a new StringLength with a custom error message.
    pub fn with_message(value: i32, message: &ErrorMessage) -> PrimitiveResult<Self> {
        ValidatedValue::new(value, message, Self::validate).map(Self)
    }

    /// Create a StringLength from a `usize`, rejecting values above `i32::MAX`.
    pub fn from_usize(value: usize) -> PrimitiveResult<Self> {
        let raw = i32::try_from(value).map_err(|_| {
            PrimitiveError::out_of_range(
                "The string length cannot exceed the maximum length.",
                "value",
                value,
            )
        })?;
        Self::new(raw)
    }

    /// The length as a `usize`.
    pub fn as_usize(&self) -> usize {
        // never negative
        self.value() as usize
    }

    fn validate(raw: i32, message: &ErrorMessage) -> PrimitiveResult<i32> {
        if raw >= 0 {
            Ok(raw)
        } else {
            Err(PrimitiveError::out_of_range(message.as_str(), "value", raw))
        }
    }
}

impl_domain_primitive!(StringLength, i32);

/// An inclusive length range with `min <= max`.
///
/// ```rust
/// use domain_primitives::numeric::{StringLength, StringLengthRange};
///
/// fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let range = StringLengthRange::new(StringLength::new(2)?, StringLength::new(4)?)?;
///     assert!(range.contains(3));
///     assert!(!range.contains(5));
///
///     let inverted = StringLengthRange::new(StringLength::new(4)?, StringLength::new(2)?);
///     assert!(inverted.is_err());
///     Ok(())
/// }
/// ```
#[derive(Debug, Clone, Copy)]
pub struct StringLengthRange(ValidatedValue<(StringLength, StringLength)>);

impl StringLengthRange {
    /// Message used when no custom message is supplied.
    pub const DEFAULT_MESSAGE: ErrorMessage = ErrorMessage::from_static(
        "The minimum length must be less than or equal to the maximum length.",
    );

    /// The range `[0, i32::MAX]` accepting every length.
    pub const FULL: StringLengthRange =
        StringLengthRange(ValidatedValue::new_unchecked((StringLength::ZERO, StringLength::MAX)));

    /// Create a new StringLengthRange with the default error message.
    pub fn new(min: StringLength, max: StringLength) -> PrimitiveResult<Self> {
        Self::with_message(min, max, &Self::DEFAULT_MESSAGE)
    }

    /// Create a new StringLengthRange with a custom error message.
    pub fn with_message(
        min: StringLength,
        max: StringLength,
        message: &ErrorMessage,
    ) -> PrimitiveResult<Self> {
        ValidatedValue::new((min, max), message, Self::validate).map(Self)
    }

    /// Create a range from a `(min, max)` pair.
    pub fn from_bounds(bounds: (StringLength, StringLength)) -> PrimitiveResult<Self> {
        Self::new(bounds.0, bounds.1)
    }

    pub fn min_length(&self) -> StringLength {
        self.0.value().0
    }

    pub fn max_length(&self) -> StringLength {
        self.0.value().1
    }

    /// Whether `length` lies within the inclusive range.
    pub fn contains(&self, length: usize) -> bool {
        self.min_length().as_usize() <= length && length <= self.max_length().as_usize()
    }

    fn validate(
        raw: (StringLength, StringLength),
        message: &ErrorMessage,
    ) -> PrimitiveResult<(StringLength, StringLength)> {
        let (min, max) = raw;
        if min <= max {
            Ok(raw)
        } else {
            Err(PrimitiveError::out_of_range(
                message.as_str(),
                "min",
                format!("{min} > {max}"),
            ))
        }
    }
}

impl Default for StringLengthRange {
    fn default() -> Self {
        Self::FULL
    }
}

impl PartialEq for StringLengthRange {
    fn eq(&self, other: &Self) -> bool {
        relational::equal(self, Some(other), |other| self.0 == other.0)
    }
}

impl Eq for StringLengthRange {}

impl PartialOrd for StringLengthRange {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for StringLengthRange {
    fn cmp(&self, other: &Self) -> Ordering {
        relational::compare(self, Some(other), |other| self.0.cmp(&other.0))
    }
}

impl Hash for StringLengthRange {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.0.hash(state);
    }
}

impl fmt::Display for StringLengthRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.min_length(), self.max_length())
    }
}

impl DomainPrimitive for StringLengthRange {
    type Raw = (StringLength, StringLength);

    fn type_name(&self) -> &'static str {
        "StringLengthRange"
    }

    fn raw(&self) -> &Self::Raw {
        self.0.value()
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

impl TryFrom<(StringLength, StringLength)> for StringLengthRange {
    type Error = PrimitiveError;

    fn try_from(bounds: (StringLength, StringLength)) -> PrimitiveResult<Self> {
        Self::from_bounds(bounds)
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for StringLengthRange {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serde::Serialize::serialize(self.0.value(), serializer)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for StringLengthRange {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let bounds = <(StringLength, StringLength) as serde::Deserialize>::deserialize(deserializer)?;
        Self::from_bounds(bounds).map_err(serde::de::Error::custom)
    }
}
