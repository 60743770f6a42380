//! Numeric domain primitives.
//!
//! Each type wraps a scalar behind a single inequality invariant checked at
//! construction. All of them share the comparison contract of
//! [`crate::relational`] and hash exactly like their raw value.
//!
/// ```rust
/// use domain_primitives::numeric::{NegativeInteger, PositiveLong};
///
/// fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let debt = NegativeInteger::new(-250)?;
///     let balance = PositiveLong::new(9_000_000_000)?;
///     assert_eq!(debt.value(), -250);
///     assert_eq!(balance.value(), 9_000_000_000);
///
///     assert!(NegativeInteger::new(0).is_err());
///     Ok(())
/// }
/// ```
mod integer;
mod long;
mod string_length;

pub use integer::{NegativeInteger, PositiveInteger};
pub use long::{NegativeLong, PositiveLong};
pub use string_length::{StringLength, StringLengthRange};
