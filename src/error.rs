//! Error types for domain primitive construction.
//!
//! Every fallible operation in this crate returns [`PrimitiveResult`]. The
//! rendered text of an error always starts with the caller-supplied (or
//! default) message, followed by the parameter name and the offending value.

/// Error raised when a raw value cannot become a domain primitive.
#[derive(Debug, thiserror::Error)]
pub enum PrimitiveError {
    /// A required argument was absent
    #[error("Value cannot be null or empty. (Parameter '{parameter}')")]
    MissingArgument { parameter: &'static str },

    /// A numeric or length value violates its bound
    #[error("{message} (Parameter '{parameter}', Actual value was {actual}.)")]
    OutOfRange {
        message: String,
        parameter: &'static str,
        actual: String,
    },

    /// A string violates a structural rule
    #[error("{message} (Parameter '{parameter}', Actual value was '{actual}'.)")]
    InvalidFormat {
        message: String,
        parameter: &'static str,
        actual: String,
    },

    /// A regular expression handed to a builder did not compile
    #[error("Invalid regular expression for '{parameter}': {source}")]
    InvalidPattern {
        parameter: &'static str,
        #[source]
        source: regex::Error,
    },

    /// A validator or parser broke its own contract
    #[error("Internal invariant violated: {details}")]
    InvariantViolated { details: String },

    /// Failure produced by caller-written validation code
    #[error("{message}")]
    Custom { message: String },
}

/// Coarse classification of a [`PrimitiveError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    MissingArgument,
    Range,
    Format,
    Invariant,
    Custom,
}

// Convenience methods for creating common errors
impl PrimitiveError {
    /// Create a missing argument error
    pub fn missing(parameter: &'static str) -> Self {
        Self::MissingArgument { parameter }
    }

    /// Create a range error carrying the offending value
    pub fn out_of_range(
        message: impl Into<String>,
        parameter: &'static str,
        actual: impl ToString,
    ) -> Self {
        Self::OutOfRange {
            message: message.into(),
            parameter,
            actual: actual.to_string(),
        }
    }

    /// Create a format error carrying the offending value
    pub fn invalid_format(
        message: impl Into<String>,
        parameter: &'static str,
        actual: impl Into<String>,
    ) -> Self {
        Self::InvalidFormat {
            message: message.into(),
            parameter,
            actual: actual.into(),
        }
    }

    /// Create an internal invariant error
    pub fn invariant(details: impl Into<String>) -> Self {
        Self::InvariantViolated {
            details: details.into(),
        }
    }

    /// Create a custom validation error
    pub fn custom(message: impl Into<String>) -> Self {
        Self::Custom {
            message: message.into(),
        }
    }

    /// Classify the error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::MissingArgument { .. } => ErrorKind::MissingArgument,
            Self::OutOfRange { .. } => ErrorKind::Range,
            Self::InvalidFormat { .. } | Self::InvalidPattern { .. } => ErrorKind::Format,
            Self::InvariantViolated { .. } => ErrorKind::Invariant,
            Self::Custom { .. } => ErrorKind::Custom,
        }
    }

    /// The leading message of the error, without the diagnostic suffix.
    pub fn message(&self) -> &str {
        match self {
            Self::OutOfRange { message, .. }
            | Self::InvalidFormat { message, .. }
            | Self::Custom { message } => message,
            Self::InvariantViolated { details } => details,
            Self::MissingArgument { .. } => "Value cannot be null or empty.",
            Self::InvalidPattern { .. } => "Invalid regular expression.",
        }
    }
}

pub type PrimitiveResult<T> = Result<T, PrimitiveError>;
