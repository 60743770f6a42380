//! The immutable output of the string builder.

use super::comparison::StringComparison;
use crate::relational;
use crate::validated::DomainPrimitive;
use std::any::Any;
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};

/// A string that passed every rule of a [`super::ConfigurableStringBuilder`].
///
/// Equality, ordering and hashing use the [`StringComparison`] captured at
/// build time. Values built with different strategies are never equal; they
/// order by strategy first, then ordinally by value.
#[derive(Debug, Clone)]
pub struct ConfigurableString {
    value: String,
    comparison: StringComparison,
}

impl ConfigurableString {
    pub(crate) fn new(value: String, comparison: StringComparison) -> Self {
        Self { value, comparison }
    }

    /// Get the string representation.
    pub fn as_str(&self) -> &str {
        &self.value
    }

    /// Get the owned string value.
    pub fn into_string(self) -> String {
        self.value
    }

    /// The comparison strategy captured at build time.
    pub fn comparison(&self) -> StringComparison {
        self.comparison
    }

    /// Length in Unicode scalar values.
    pub fn len(&self) -> usize {
        self.value.chars().count()
    }

    pub fn is_empty(&self) -> bool {
        self.value.is_empty()
    }
}

impl PartialEq for ConfigurableString {
    fn eq(&self, other: &Self) -> bool {
        relational::equal(self, Some(other), |other| {
            self.comparison == other.comparison
                && self.comparison.equals(&self.value, &other.value)
        })
    }
}

impl Eq for ConfigurableString {}

impl PartialOrd for ConfigurableString {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for ConfigurableString {
    fn cmp(&self, other: &Self) -> Ordering {
        relational::compare(self, Some(other), |other| {
            if self.comparison == other.comparison {
                self.comparison.compare(&self.value, &other.value)
            } else {
                (self.comparison, &self.value).cmp(&(other.comparison, &other.value))
            }
        })
    }
}

impl Hash for ConfigurableString {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.comparison.hash_str(&self.value, state);
    }
}

impl fmt::Display for ConfigurableString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.value)
    }
}

impl AsRef<str> for ConfigurableString {
    fn as_ref(&self) -> &str {
        &self.value
    }
}

impl From<ConfigurableString> for String {
    fn from(value: ConfigurableString) -> String {
        value.value
    }
}

impl DomainPrimitive for ConfigurableString {
    type Raw = str;

    fn type_name(&self) -> &'static str {
        "ConfigurableString"
    }

    fn raw(&self) -> &str {
        &self.value
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

// No Deserialize: the rules that produced the value live in the builder.
#[cfg(feature = "serde")]
impl serde::Serialize for ConfigurableString {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.value)
    }
}
