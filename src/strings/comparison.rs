//! Comparison strategies for string primitives.

use icu_collator::{Collator, CollatorOptions, Strength};
use log::warn;
use std::cmp::Ordering;
use std::hash::{Hash, Hasher};
use std::thread::LocalKey;

/// Equality and ordering policy captured by a [`super::ConfigurableString`].
///
/// The ignore-case strategies fold each character to its simple uppercase
/// mapping (a character whose uppercase form is longer than one character is
/// kept as is), so `"A" < "_"` holds under `OrdinalIgnoreCase`.
///
/// The culture-aware strategies order with the root-locale Unicode collation.
/// Strings the collator considers equal but that are not equal under the
/// matching ordinal strategy are ordered ordinally, which keeps `compare`,
/// `equals` and `hash_str` in agreement for every strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub enum StringComparison {
    /// Code point by code point, case-sensitive
    #[default]
    Ordinal,
    /// Code point by code point after uppercase folding
    OrdinalIgnoreCase,
    /// Root-locale collation, case-sensitive
    InvariantCulture,
    /// Root-locale collation ignoring case differences
    InvariantCultureIgnoreCase,
}

impl StringComparison {
    /// Order two strings under this strategy.
    pub fn compare(self, left: &str, right: &str) -> Ordering {
        match self {
            Self::Ordinal => left.cmp(right),
            Self::OrdinalIgnoreCase => fold(left).cmp(fold(right)),
            Self::InvariantCulture => {
                if left == right {
                    return Ordering::Equal;
                }
                collate(&CASE_SENSITIVE, left, right).then_with(|| left.cmp(right))
            }
            Self::InvariantCultureIgnoreCase => {
                if fold(left).eq(fold(right)) {
                    return Ordering::Equal;
                }
                collate(&CASE_INSENSITIVE, left, right)
                    .then_with(|| fold(left).cmp(fold(right)))
            }
        }
    }

    /// Test two strings for equality under this strategy.
    pub fn equals(self, left: &str, right: &str) -> bool {
        if self.is_case_sensitive() {
            left == right
        } else {
            fold(left).eq(fold(right))
        }
    }

    /// Feed `value` into `state` so that strings equal under this strategy
    /// hash identically.
    pub fn hash_str<H: Hasher>(self, value: &str, state: &mut H) {
        if self.is_case_sensitive() {
            value.hash(state);
        } else {
            for c in fold(value) {
                c.hash(state);
            }
            state.write_u8(0xff);
        }
    }

    pub fn is_case_sensitive(self) -> bool {
        matches!(self, Self::Ordinal | Self::InvariantCulture)
    }

    pub fn is_culture_aware(self) -> bool {
        matches!(self, Self::InvariantCulture | Self::InvariantCultureIgnoreCase)
    }
}

thread_local! {
    static CASE_SENSITIVE: Option<Collator> = root_collator(Strength::Tertiary);
    static CASE_INSENSITIVE: Option<Collator> = root_collator(Strength::Secondary);
}

fn root_collator(strength: Strength) -> Option<Collator> {
    let mut options = CollatorOptions::new();
    options.strength = Some(strength);
    Collator::try_new(&Default::default(), options)
        .inspect_err(|error| warn!("root collator unavailable, ordering ordinally: {}", error))
        .ok()
}

// Falls back to ordinal order when no collator could be loaded.
fn collate(collator: &'static LocalKey<Option<Collator>>, left: &str, right: &str) -> Ordering {
    collator.with(|collator| match collator {
        Some(collator) => collator.compare(left, right),
        None => left.cmp(right),
    })
}

fn fold(value: &str) -> impl Iterator<Item = char> + '_ {
    value.chars().map(fold_char)
}

fn fold_char(c: char) -> char {
    let mut upper = c.to_uppercase();
    match (upper.next(), upper.next()) {
        (Some(folded), None) => folded,
        _ => c,
    }
}
