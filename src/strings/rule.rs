//! Identifiers for the individual rules of the string builder.

use crate::error_message::ErrorMessage;
use std::fmt;

/// One rule applied by [`super::ConfigurableStringBuilder::build`].
///
/// Every rule has a built-in default message that can be replaced with
/// [`super::ConfigurableStringBuilder::with_message`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum StringRule {
    TooShort,
    TooLong,
    NotTrimmed,
    LeadingWhiteSpace,
    TrailingWhiteSpace,
    InvalidCharacters,
    InvalidFormat,
    WhiteSpaceOnly,
}

impl StringRule {
    /// Built-in message for this rule.
    pub fn default_message(self) -> ErrorMessage {
        let text = match self {
            Self::TooShort => "The value is too short.",
            Self::TooLong => "The value is too long.",
            Self::NotTrimmed => "The value cannot have leading or trailing white spaces.",
            Self::LeadingWhiteSpace => "The value cannot have leading white spaces.",
            Self::TrailingWhiteSpace => "The value cannot have trailing white spaces.",
            Self::InvalidCharacters => "The value contains invalid characters.",
            Self::InvalidFormat => "The value is not in a valid format.",
            Self::WhiteSpaceOnly => "The value cannot contain only white spaces.",
        };
        ErrorMessage::from_static(text)
    }

    /// Short kebab-case name used in log output.
    pub fn name(self) -> &'static str {
        match self {
            Self::TooShort => "too-short",
            Self::TooLong => "too-long",
            Self::NotTrimmed => "not-trimmed",
            Self::LeadingWhiteSpace => "leading-white-space",
            Self::TrailingWhiteSpace => "trailing-white-space",
            Self::InvalidCharacters => "invalid-characters",
            Self::InvalidFormat => "invalid-format",
            Self::WhiteSpaceOnly => "white-space-only",
        }
    }
}

impl fmt::Display for StringRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
