//! ErrorMessage value object for validation failure text.
//!
//! Every validating constructor in this crate accepts an [`ErrorMessage`] to
//! customize the text of the failure it raises. An `ErrorMessage` is itself a
//! domain primitive: it is never empty and never consists solely of white space.

use crate::error::{PrimitiveError, PrimitiveResult};
use std::borrow::Cow;
use std::fmt;

/// A validated, non-blank message used as the leading text of validation errors.
///
/// ## Examples
///
/// ```rust
/// use domain_primitives::ErrorMessage;
///
/// fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let message = ErrorMessage::new("Quantity must be negative.")?;
///     assert_eq!(message.as_str(), "Quantity must be negative.");
///
///     assert!(ErrorMessage::new("   ").is_err());
///     Ok(())
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ErrorMessage(Cow<'static, str>);

impl ErrorMessage {
    const DEFAULT_TEXT: &'static str = "The error message cannot be empty or contain only white spaces.";

    /// Create a new ErrorMessage with validation.
    ///
    /// # Returns
    ///
    /// * `Ok(ErrorMessage)` - If the text contains at least one non-white-space character
    /// * `Err(PrimitiveError::InvalidFormat)` - If the text is empty or blank
    pub fn new(text: impl Into<String>) -> PrimitiveResult<Self> {
        let text = text.into();
        Self::validate_format(&text)?;
        Ok(Self(Cow::Owned(text)))
    }

    /// Build a message from static text known to be valid.
    ///
    /// Used for the built-in default messages of each primitive.
    pub(crate) const fn from_static(text: &'static str) -> Self {
        Self(Cow::Borrowed(text))
    }

    /// Get the message text.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Get the owned message text.
    pub fn into_string(self) -> String {
        self.0.into_owned()
    }

    fn validate_format(text: &str) -> PrimitiveResult<()> {
        if text.trim().is_empty() {
            return Err(PrimitiveError::invalid_format(
                Self::DEFAULT_TEXT,
                "text",
                text,
            ));
        }
        Ok(())
    }
}

impl fmt::Display for ErrorMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for ErrorMessage {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for ErrorMessage {
    type Error = PrimitiveError;

    fn try_from(value: String) -> PrimitiveResult<Self> {
        Self::new(value)
    }
}

impl TryFrom<&str> for ErrorMessage {
    type Error = PrimitiveError;

    fn try_from(value: &str) -> PrimitiveResult<Self> {
        Self::new(value)
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for ErrorMessage {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.0)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for ErrorMessage {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let value = <String as serde::Deserialize>::deserialize(deserializer)?;
        Self::new(value).map_err(serde::de::Error::custom)
    }
}
