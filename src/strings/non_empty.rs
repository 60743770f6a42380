//! NonEmptyOrWhiteSpaceString value object.

use super::builder::ConfigurableStringBuilder;
use super::comparison::StringComparison;
use super::configurable::ConfigurableString;
use super::rule::StringRule;
use crate::error::{PrimitiveError, PrimitiveResult};
use crate::error_message::ErrorMessage;
use crate::numeric::StringLength;
use crate::relational;
use crate::validated::DomainPrimitive;
use std::any::Any;
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

/// A string with at least one non-white-space character.
///
/// ## Validation Rules
///
/// - Must not be empty (range error)
/// - Must not consist solely of white space (format error)
/// - Compared ordinally
///
/// ## Examples
///
/// ```rust
/// use domain_primitives::strings::NonEmptyOrWhiteSpaceString;
///
/// fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let greeting = NonEmptyOrWhiteSpaceString::new("Hello World!!!")?;
///     assert_eq!(greeting.as_str(), "Hello World!!!");
///
///     assert!(NonEmptyOrWhiteSpaceString::new("   ").is_err());
///     assert!(NonEmptyOrWhiteSpaceString::new("").is_err());
///     Ok(())
/// }
/// ```
#[derive(Debug, Clone)]
pub struct NonEmptyOrWhiteSpaceString(ConfigurableString);

impl NonEmptyOrWhiteSpaceString {
    /// Message used when no custom message is supplied.
    pub const DEFAULT_MESSAGE: ErrorMessage =
        ErrorMessage::from_static("The value cannot be empty or contain only white spaces.");

    /// Create a new NonEmptyOrWhiteSpaceString with the default error message.
    pub fn new(value: impl Into<String>) -> PrimitiveResult<Self> {
        Self::with_message(value, &Self::DEFAULT_MESSAGE)
    }

    /// Create a new NonEmptyOrWhiteSpaceString with a custom error message,
    /// used for both the empty and the white-space-only failure.
    pub fn with_message(value: impl Into<String>, message: &ErrorMessage) -> PrimitiveResult<Self> {
        ConfigurableStringBuilder::new()
            .with_min_length(StringLength::new(1)?)
            .with_allow_white_spaces_only(false)
            .with_comparison(StringComparison::Ordinal)
            .with_message(StringRule::TooShort, message.clone())
            .with_message(StringRule::WhiteSpaceOnly, message.clone())
            .build(value)
            .map(Self)
    }

    /// Get the string representation.
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }

    /// Get the owned string value.
    pub fn into_string(self) -> String {
        self.0.into_string()
    }
}

impl PartialEq for NonEmptyOrWhiteSpaceString {
    fn eq(&self, other: &Self) -> bool {
        relational::equal(self, Some(other), |other| self.0 == other.0)
    }
}

impl Eq for NonEmptyOrWhiteSpaceString {}

impl PartialOrd for NonEmptyOrWhiteSpaceString {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for NonEmptyOrWhiteSpaceString {
    fn cmp(&self, other: &Self) -> Ordering {
        relational::compare(self, Some(other), |other| self.0.cmp(&other.0))
    }
}

impl Hash for NonEmptyOrWhiteSpaceString {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.0.hash(state);
    }
}

impl fmt::Display for NonEmptyOrWhiteSpaceString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl AsRef<str> for NonEmptyOrWhiteSpaceString {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

impl DomainPrimitive for NonEmptyOrWhiteSpaceString {
    type Raw = str;

    fn type_name(&self) -> &'static str {
        "NonEmptyOrWhiteSpaceString"
    }

    fn raw(&self) -> &str {
        self.0.as_str()
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

impl FromStr for NonEmptyOrWhiteSpaceString {
    type Err = PrimitiveError;

    fn from_str(s: &str) -> PrimitiveResult<Self> {
        Self::new(s)
    }
}

impl TryFrom<String> for NonEmptyOrWhiteSpaceString {
    type Error = PrimitiveError;

    fn try_from(value: String) -> PrimitiveResult<Self> {
        Self::new(value)
    }
}

impl TryFrom<&str> for NonEmptyOrWhiteSpaceString {
    type Error = PrimitiveError;

    fn try_from(value: &str) -> PrimitiveResult<Self> {
        Self::new(value)
    }
}

impl From<NonEmptyOrWhiteSpaceString> for String {
    fn from(value: NonEmptyOrWhiteSpaceString) -> String {
        value.into_string()
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for NonEmptyOrWhiteSpaceString {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for NonEmptyOrWhiteSpaceString {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let value = <String as serde::Deserialize>::deserialize(deserializer)?;
        Self::new(value).map_err(serde::de::Error::custom)
    }
}
