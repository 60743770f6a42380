//! Fluent, single-use builder for rule-validated strings.

use super::comparison::StringComparison;
use super::configurable::ConfigurableString;
use super::rule::StringRule;
use crate::error::{PrimitiveError, PrimitiveResult};
use crate::error_message::ErrorMessage;
use crate::numeric::{StringLength, StringLengthRange};
use log::{debug, trace};
use regex::Regex;
use std::collections::HashMap;
use std::fmt;

type CustomParser = Box<dyn Fn(String) -> PrimitiveResult<String> + Send + Sync>;

/// Builder that validates one input string against a set of configured rules.
///
/// The builder is consumed by [`build`](Self::build), so each instance
/// produces at most one [`ConfigurableString`]. Reusing a spent builder does
/// not compile:
///
/// ```compile_fail
/// use domain_primitives::strings::ConfigurableStringBuilder;
///
/// let builder = ConfigurableStringBuilder::new();
/// let first = builder.build("one");
/// let second = builder.build("two"); // use of moved value
/// ```
///
/// # Example
///
/// ```rust
/// use domain_primitives::numeric::StringLength;
/// use domain_primitives::strings::{ConfigurableStringBuilder, StringComparison};
///
/// fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let code = ConfigurableStringBuilder::new()
///         .with_min_length(StringLength::new(2)?)
///         .with_max_length(StringLength::new(4)?)
///         .with_requires_trimmed(true)
///         .with_valid_format_pattern("^[A-Z]+$")?
///         .with_comparison(StringComparison::OrdinalIgnoreCase)
///         .build("ABC")?;
///     assert_eq!(code.as_str(), "ABC");
///     Ok(())
/// }
/// ```
pub struct ConfigurableStringBuilder {
    comparison: StringComparison,
    min_length: Option<StringLength>,
    max_length: Option<StringLength>,
    requires_trimmed: bool,
    allow_leading_white_space: bool,
    allow_trailing_white_space: bool,
    allow_white_spaces_only: bool,
    invalid_characters: Option<Regex>,
    valid_format: Option<Regex>,
    custom_parser: Option<CustomParser>,
    messages: HashMap<StringRule, ErrorMessage>,
}

impl ConfigurableStringBuilder {
    /// Create a builder with no length bounds, all white space allowed and
    /// ordinal comparison.
    pub fn new() -> Self {
        Self {
            comparison: StringComparison::Ordinal,
            min_length: None,
            max_length: None,
            requires_trimmed: false,
            allow_leading_white_space: true,
            allow_trailing_white_space: true,
            allow_white_spaces_only: true,
            invalid_characters: None,
            valid_format: None,
            custom_parser: None,
            messages: HashMap::new(),
        }
    }

    /// Set the comparison strategy captured by the built value.
    pub fn with_comparison(mut self, comparison: StringComparison) -> Self {
        self.comparison = comparison;
        self
    }

    /// Set the minimum length (inclusive).
    pub fn with_min_length(mut self, min_length: StringLength) -> Self {
        self.min_length = Some(min_length);
        self
    }

    /// Set the maximum length (inclusive).
    pub fn with_max_length(mut self, max_length: StringLength) -> Self {
        self.max_length = Some(max_length);
        self
    }

    /// Set both length bounds from an already validated range.
    pub fn with_length_range(mut self, range: StringLengthRange) -> Self {
        self.min_length = Some(range.min_length());
        self.max_length = Some(range.max_length());
        self
    }

    /// Require the value to have no leading or trailing white space.
    ///
    /// Enabling this also disallows leading, trailing and white-space-only
    /// values.
    pub fn with_requires_trimmed(mut self, requires_trimmed: bool) -> Self {
        self.requires_trimmed = requires_trimmed;
        if requires_trimmed {
            self.allow_leading_white_space = false;
            self.allow_trailing_white_space = false;
            self.allow_white_spaces_only = false;
        }
        self
    }

    pub fn with_allow_leading_white_space(mut self, allow: bool) -> Self {
        self.allow_leading_white_space = allow;
        self
    }

    pub fn with_allow_trailing_white_space(mut self, allow: bool) -> Self {
        self.allow_trailing_white_space = allow;
        self
    }

    /// Allow or disallow values made only of white space.
    ///
    /// Enabling this also allows leading and trailing white space and clears
    /// the trim requirement. Disallowing only takes effect when a positive
    /// minimum length is configured.
    pub fn with_allow_white_spaces_only(mut self, allow: bool) -> Self {
        self.allow_white_spaces_only = allow;
        if allow {
            self.allow_leading_white_space = true;
            self.allow_trailing_white_space = true;
            self.requires_trimmed = false;
        }
        self
    }

    /// Reject values where `pattern` matches anywhere.
    pub fn with_invalid_characters_pattern(self, pattern: &str) -> PrimitiveResult<Self> {
        let regex = compile(pattern, "invalid_characters")?;
        Ok(self.with_invalid_characters_regex(regex))
    }

    pub fn with_invalid_characters_regex(mut self, regex: Regex) -> Self {
        self.invalid_characters = Some(regex);
        self
    }

    /// Reject values that `pattern` does not match.
    ///
    /// The pattern is used as given; anchor it with `^...$` to require a
    /// full match.
    pub fn with_valid_format_pattern(self, pattern: &str) -> PrimitiveResult<Self> {
        let regex = compile(pattern, "valid_format")?;
        Ok(self.with_valid_format_regex(regex))
    }

    pub fn with_valid_format_regex(mut self, regex: Regex) -> Self {
        self.valid_format = Some(regex);
        self
    }

    /// Run `parser` after every built-in rule has passed.
    ///
    /// The parser may transform the value. Its errors are returned to the
    /// caller unchanged.
    pub fn with_custom_parser<F>(mut self, parser: F) -> Self
    where
        F: Fn(String) -> PrimitiveResult<String> + Send + Sync + 'static,
    {
        self.custom_parser = Some(Box::new(parser));
        self
    }

    /// Replace the message raised when `rule` fails.
    pub fn with_message(mut self, rule: StringRule, message: ErrorMessage) -> Self {
        self.messages.insert(rule, message);
        self
    }

    /// Validate `value` against every configured rule and consume the builder.
    pub fn build(self, value: impl Into<String>) -> PrimitiveResult<ConfigurableString> {
        let value = value.into();

        self.check_length(&value)?;
        self.check_white_space_position(&value)?;
        self.check_invalid_characters(&value)?;
        self.check_valid_format(&value)?;
        self.check_white_space_only(&value)?;
        let value = self.parse(value)?;

        trace!("value accepted by configurable string builder: {:?}", value);
        Ok(ConfigurableString::new(value, self.comparison))
    }

    fn check_length(&self, value: &str) -> PrimitiveResult<()> {
        let range = StringLengthRange::new(
            self.min_length.unwrap_or(StringLength::ZERO),
            self.max_length.unwrap_or(StringLength::MAX),
        )?;

        let length = value.chars().count();
        if length < range.min_length().as_usize() {
            return Err(self.range_error(StringRule::TooShort, value, length));
        }
        if length > range.max_length().as_usize() {
            return Err(self.range_error(StringRule::TooLong, value, length));
        }
        Ok(())
    }

    fn check_white_space_position(&self, value: &str) -> PrimitiveResult<()> {
        if value.is_empty() {
            return Ok(());
        }

        let leading = value.starts_with(char::is_whitespace);
        let trailing = value.ends_with(char::is_whitespace);

        if self.requires_trimmed {
            if leading || trailing {
                return Err(self.format_error(StringRule::NotTrimmed, value));
            }
            return Ok(());
        }
        if !self.allow_leading_white_space && leading {
            return Err(self.format_error(StringRule::LeadingWhiteSpace, value));
        }
        if !self.allow_trailing_white_space && trailing {
            return Err(self.format_error(StringRule::TrailingWhiteSpace, value));
        }
        Ok(())
    }

    fn check_invalid_characters(&self, value: &str) -> PrimitiveResult<()> {
        match &self.invalid_characters {
            Some(regex) if regex.is_match(value) => {
                Err(self.format_error(StringRule::InvalidCharacters, value))
            }
            _ => Ok(()),
        }
    }

    fn check_valid_format(&self, value: &str) -> PrimitiveResult<()> {
        match &self.valid_format {
            Some(regex) if !regex.is_match(value) => {
                Err(self.format_error(StringRule::InvalidFormat, value))
            }
            _ => Ok(()),
        }
    }

    // Only enforced with a positive minimum length; without one, white-space-only
    // values pass even when disallowed.
    fn check_white_space_only(&self, value: &str) -> PrimitiveResult<()> {
        let has_min_length = self.min_length.is_some_and(|min| min.value() > 0);
        if !self.allow_white_spaces_only && has_min_length && value.chars().all(char::is_whitespace)
        {
            return Err(self.format_error(StringRule::WhiteSpaceOnly, value));
        }
        Ok(())
    }

    fn parse(&self, value: String) -> PrimitiveResult<String> {
        let Some(parser) = &self.custom_parser else {
            return Ok(value);
        };

        let input_was_empty = value.is_empty();
        let parsed = parser(value)?;
        if parsed.is_empty() && !input_was_empty {
            return Err(PrimitiveError::invariant(
                "custom parser returned an empty value for non-empty input",
            ));
        }
        Ok(parsed)
    }

    fn message(&self, rule: StringRule) -> ErrorMessage {
        self.messages
            .get(&rule)
            .cloned()
            .unwrap_or_else(|| rule.default_message())
    }

    fn range_error(&self, rule: StringRule, value: &str, length: usize) -> PrimitiveError {
        debug!("configurable string rejected by rule '{}'", rule);
        PrimitiveError::out_of_range(
            self.message(rule).into_string(),
            "value",
            format!("'{value}' (length {length})"),
        )
    }

    fn format_error(&self, rule: StringRule, value: &str) -> PrimitiveError {
        debug!("configurable string rejected by rule '{}'", rule);
        PrimitiveError::invalid_format(self.message(rule).into_string(), "value", value)
    }
}

impl Default for ConfigurableStringBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for ConfigurableStringBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConfigurableStringBuilder")
            .field("comparison", &self.comparison)
            .field("min_length", &self.min_length)
            .field("max_length", &self.max_length)
            .field("requires_trimmed", &self.requires_trimmed)
            .field("allow_leading_white_space", &self.allow_leading_white_space)
            .field("allow_trailing_white_space", &self.allow_trailing_white_space)
            .field("allow_white_spaces_only", &self.allow_white_spaces_only)
            .field("invalid_characters", &self.invalid_characters)
            .field("valid_format", &self.valid_format)
            .field("custom_parser", &self.custom_parser.is_some())
            .finish_non_exhaustive()
    }
}

fn compile(pattern: &str, parameter: &'static str) -> PrimitiveResult<Regex> {
    if pattern.is_empty() {
        return Err(PrimitiveError::missing(parameter));
    }
    Regex::new(pattern).map_err(|source| PrimitiveError::InvalidPattern { parameter, source })
}
