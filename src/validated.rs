//! Core abstraction shared by every domain primitive.
//!
//! [`ValidatedValue`] wraps a raw value behind a validator that runs exactly
//! once, at construction. Equality, ordering, hashing and string conversion
//! are all derived from the wrapped value, with the null-safe rules of
//! [`crate::relational`].
//!
//! ## Design Principles
//!
//! - **Validate once**: the validator runs in the constructor and never again
//! - **No partial state**: construction yields a valid instance or an error
//! - **Composition over inheritance**: each primitive passes its own pure
//!   validation function, it does not subclass behavior

use crate::error::PrimitiveResult;
use crate::error_message::ErrorMessage;
use crate::relational;
use log::trace;
use std::any::Any;
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};

/// An immutable raw value that passed its validator.
///
/// ```rust
/// use domain_primitives::{ErrorMessage, PrimitiveError, ValidatedValue};
///
/// fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let message = ErrorMessage::new("Must be even.")?;
///     let even = ValidatedValue::new(4, &message, |raw, message| {
///         if raw % 2 == 0 {
///             Ok(raw)
///         } else {
///             Err(PrimitiveError::out_of_range(message.as_str(), "value", raw))
///         }
///     })?;
///     assert_eq!(*even.value(), 4);
///     Ok(())
/// }
/// ```
#[derive(Debug, Clone, Copy)]
pub struct ValidatedValue<T> {
    value: T,
}

impl<T> ValidatedValue<T> {
    /// Run `validator` against `raw` and keep the value it returns.
    ///
    /// The validator receives the message to embed in any failure it raises.
    /// Its error is returned unchanged.
    pub fn new<F>(raw: T, message: &ErrorMessage, validator: F) -> PrimitiveResult<Self>
    where
        F: FnOnce(T, &ErrorMessage) -> PrimitiveResult<T>,
    {
        let value = validator(raw, message).inspect_err(|error| {
            trace!("validator rejected raw value: {}", error);
        })?;
        Ok(Self { value })
    }

    /// Wrap a value known to satisfy its validator.
    pub(crate) const fn new_unchecked(value: T) -> Self {
        Self { value }
    }

    /// Get the validated value.
    pub fn value(&self) -> &T {
        &self.value
    }

    /// Unwrap the validated value.
    pub fn into_inner(self) -> T {
        self.value
    }
}

impl<T: PartialEq> PartialEq for ValidatedValue<T> {
    fn eq(&self, other: &Self) -> bool {
        relational::equal(self, Some(other), |other| self.value == other.value)
    }
}

impl<T: Eq> Eq for ValidatedValue<T> {}

impl<T: Ord> PartialOrd for ValidatedValue<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<T: Ord> Ord for ValidatedValue<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        relational::compare(self, Some(other), |other| self.value.cmp(&other.value))
    }
}

impl<T: Hash> Hash for ValidatedValue<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.value.hash(state);
    }
}

impl<T: fmt::Display> fmt::Display for ValidatedValue<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.value, f)
    }
}

/// Behavior common to every concrete domain primitive.
pub trait DomainPrimitive: fmt::Debug + fmt::Display + Send + Sync + 'static {
    /// The wrapped raw type.
    type Raw: ?Sized;

    /// Short name of the primitive type, e.g. `"NegativeInteger"`.
    fn type_name(&self) -> &'static str;

    /// Borrow the wrapped raw value.
    fn raw(&self) -> &Self::Raw;

    /// Get type information for downcasting.
    fn as_any(&self) -> &dyn Any;

    /// Dynamic equality: true iff `other` is present, is the same primitive
    /// type, and wraps an equal value.
    fn equals_object(&self, other: Option<&dyn Any>) -> bool
    where
        Self: Sized + PartialEq,
    {
        let other = other.and_then(|other| other.downcast_ref::<Self>());
        relational::equal(self, other, |other| self == other)
    }
}

/// Derive comparison, hashing, display and conversions for a newtype over
/// [`ValidatedValue`]. The type must provide `new(raw) -> PrimitiveResult<Self>`,
/// or the constructor named by the third argument.
macro_rules! impl_domain_primitive {
    ($type:ident, $raw:ty) => {
        impl_domain_primitive!($type, $raw, new);
    };
    ($type:ident, $raw:ty, $ctor:ident) => {
        impl $type {
            /// Get the validated value.
            pub fn value(&self) -> $raw {
                *self.0.value()
            }
        }

        impl PartialEq for $type {
            fn eq(&self, other: &Self) -> bool {
                $crate::relational::equal(self, Some(other), |other| self.0 == other.0)
            }
        }

        impl Eq for $type {}

        impl PartialOrd for $type {
            fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
                Some(self.cmp(other))
            }
        }

        impl Ord for $type {
            fn cmp(&self, other: &Self) -> std::cmp::Ordering {
                $crate::relational::compare(self, Some(other), |other| self.0.cmp(&other.0))
            }
        }

        impl std::hash::Hash for $type {
            fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
                std::hash::Hash::hash(&self.0, state);
            }
        }

        impl std::fmt::Display for $type {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                std::fmt::Display::fmt(&self.0, f)
            }
        }

        impl $crate::validated::DomainPrimitive for $type {
            type Raw = $raw;

            fn type_name(&self) -> &'static str {
                stringify!($type)
            }

            fn raw(&self) -> &$raw {
                self.0.value()
            }

            fn as_any(&self) -> &dyn std::any::Any {
                self
            }
        }

        impl TryFrom<$raw> for $type {
            type Error = $crate::error::PrimitiveError;

            fn try_from(value: $raw) -> $crate::error::PrimitiveResult<Self> {
                Self::$ctor(value)
            }
        }

        impl From<$type> for $raw {
            fn from(value: $type) -> $raw {
                value.0.into_inner()
            }
        }

        #[cfg(feature = "serde")]
        impl serde::Serialize for $type {
            fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
            where
                S: serde::Serializer,
            {
                serde::Serialize::serialize(self.0.value(), serializer)
            }
        }

        #[cfg(feature = "serde")]
        impl<'de> serde::Deserialize<'de> for $type {
            fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
            where
                D: serde::Deserializer<'de>,
            {
                let value = <$raw as serde::Deserialize>::deserialize(deserializer)?;
                Self::$ctor(value).map_err(serde::de::Error::custom)
            }
        }
    };
}

pub(crate) use impl_domain_primitive;
