//! Glob-importable set of every public primitive.

pub use crate::clock::{Clock, FixedClock, SystemClock};
pub use crate::error::{ErrorKind, PrimitiveError, PrimitiveResult};
pub use crate::error_message::ErrorMessage;
pub use crate::numeric::{
    NegativeInteger, NegativeLong, PositiveInteger, PositiveLong, StringLength, StringLengthRange,
};
pub use crate::strings::{
    ConfigurableString, ConfigurableStringBuilder, NonEmptyOrWhiteSpaceString, StringComparison,
    StringRule,
};
pub use crate::temporal::{FutureTimestamp, PastOrPresentTimestamp};
pub use crate::validated::{DomainPrimitive, ValidatedValue};
