//! Common test utilities for domain primitive testing.

use domain_primitives::DomainPrimitive;
use domain_primitives::relational::{
    compare_nullable, equals_operator, greater_or_equal, greater_than, less_or_equal, less_than,
    not_equals_operator,
};
use std::any::Any;
use std::cmp::Ordering;
use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

/// Install env_logger once so `RUST_LOG` controls library output in tests.
pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

pub fn hash_of<T: Hash + ?Sized>(value: &T) -> u64 {
    let mut hasher = DefaultHasher::new();
    value.hash(&mut hasher);
    hasher.finish()
}

/// Assert the null-ordering table for a primitive.
///
/// `x` and `copy` must wrap equal values from separate constructions.
pub fn assert_null_ordering<T>(x: &T, copy: &T)
where
    T: Ord,
{
    let none: Option<&T> = None;

    assert_eq!(compare_nullable(Some(x), none), Ordering::Greater);
    assert_eq!(x.cmp(x), Ordering::Equal);
    assert_eq!(x.cmp(copy), Ordering::Equal);

    assert!(equals_operator(none, none));
    assert!(!equals_operator(Some(x), none));
    assert!(not_equals_operator(Some(x), none));

    assert!(less_than(none, Some(x)));
    assert!(!less_than(Some(x), none));

    assert!(less_or_equal(none, Some(x)));
    assert!(!less_or_equal(Some(x), none));
    assert!(less_or_equal(none, none));

    assert!(greater_than(Some(x), none));
    assert!(!greater_than(none, Some(x)));
    assert!(!greater_than(none, none));

    assert!(greater_or_equal(Some(x), none));
    assert!(!greater_or_equal(none, Some(x)));
    assert!(greater_or_equal(none, none));
}

/// Assert equality, ordering and hash rules for a primitive.
///
/// `greater` must wrap a strictly greater value than `x`; `other_type` is an
/// instance of a different type, ideally wrapping the same raw value.
pub fn assert_conformance<T>(x: &T, copy: &T, greater: &T, other_type: &dyn Any)
where
    T: DomainPrimitive + Ord + Hash + Sized,
{
    assert_null_ordering(x, copy);

    assert_eq!(x, x);
    assert_eq!(x, copy);
    assert_ne!(x, greater);
    assert!(x.equals_object(Some(x.as_any())));
    assert!(x.equals_object(Some(copy.as_any())));
    assert!(!x.equals_object(Some(other_type)));
    assert!(!x.equals_object(None));
    assert!(!x.equals_object(Some(&"not a primitive")));

    assert!(x < greater);
    assert!(x <= copy && x >= copy);
    assert!(greater > x);
    assert!(less_than(Some(x), Some(greater)));
    assert!(greater_or_equal(Some(greater), Some(x)));

    assert_eq!(hash_of(x), hash_of(copy));
    assert_ne!(hash_of(x), hash_of(greater));

    assert_eq!(x.to_string(), copy.to_string());
}

/// Assert that a result failed and its message starts with `expected`.
#[macro_export]
macro_rules! assert_error_starts_with {
    ($result:expr, $expected:expr) => {
        match $result {
            Ok(value) => panic!("expected failure, got {:?}", value),
            Err(error) => {
                let text = error.to_string();
                assert!(
                    text.starts_with($expected),
                    "error '{}' does not start with '{}'",
                    text,
                    $expected
                );
            }
        }
    };
}
