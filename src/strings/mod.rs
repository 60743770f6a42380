//! String domain primitives and the rule-based string builder.
//!
//! [`ConfigurableStringBuilder`] composes independent format rules (length
//! range, trim policy, white-space policy, character blacklist, format
//! whitelist, custom parser) into a single fail-fast validation pass that
//! produces an immutable [`ConfigurableString`].
//!
//! ## Rule order
//!
//! 1. Length range
//! 2. Trim / leading / trailing white space (skipped for empty input)
//! 3. Invalid-characters pattern
//! 4. Valid-format pattern
//! 5. White-space-only policy
//! 6. Custom parser
//!
//! The first failing rule wins; later rules are not evaluated.
mod builder;
mod comparison;
mod configurable;
mod non_empty;
mod rule;

pub use builder::ConfigurableStringBuilder;
pub use comparison::StringComparison;
pub use configurable::ConfigurableString;
pub use non_empty::NonEmptyOrWhiteSpaceString;
pub use rule::StringRule;
