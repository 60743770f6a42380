//! Immutable, self-validating domain primitives for Rust.
//!
//! A domain primitive wraps a raw value (an integer, a string, a timestamp)
//! and guarantees for its whole lifetime that the value satisfies a semantic
//! constraint. Validation happens exactly once, at construction; an invalid
//! value can never be observed.
//!
//! # Core Components
//!
//! - [`ValidatedValue`] - Generic holder that runs a validator at construction
//! - [`relational`] - Null-safe comparison rules shared by every primitive
//! - [`ConfigurableStringBuilder`] - Rule engine producing [`ConfigurableString`] values
//! - [`ErrorMessage`] - Caller-supplied failure text
//!
//! # Quick Start
//!
//! ```rust
//! use domain_primitives::prelude::*;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let count = PositiveInteger::new(3)?;
//!     let title = NonEmptyOrWhiteSpaceString::new("Quarterly report")?;
//!
//!     let message = ErrorMessage::new("Refunds are recorded as negative amounts.")?;
//!     let refund = NegativeLong::with_message(12, &message);
//!     assert!(refund.unwrap_err().to_string().starts_with(message.as_str()));
//!
//!     println!("{count} x {title}");
//!     Ok(())
//! }
//! ```

pub mod clock;
pub mod error;
pub mod error_message;
pub mod numeric;
pub mod prelude;
pub mod relational;
pub mod strings;
pub mod temporal;
pub mod validated;

// Re-export commonly used types for convenience
pub use error::{ErrorKind, PrimitiveError, PrimitiveResult};
pub use error_message::ErrorMessage;
pub use strings::{
    ConfigurableString, ConfigurableStringBuilder, NonEmptyOrWhiteSpaceString, StringComparison,
    StringRule,
};
pub use validated::{DomainPrimitive, ValidatedValue};
