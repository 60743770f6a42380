//! Null-safe comparison routines shared by every domain primitive.
//!
//! An absent operand (`None`) is the unique minimum of the order: it sorts
//! below every present value, two absent operands are equal, and no routine
//! here ever fails on an absent operand.
//!
//! | expression        | result |
//! |-------------------|--------|
//! | `None == None`    | true   |
//! | `x == None`       | false  |
//! | `None < x`        | true   |
//! | `x < None`        | false  |
//! | `None <= None`    | true   |
//! | `x > None`        | true   |
//! | `None > None`     | false  |
//! | `None >= None`    | true   |
//! | `None >= x`       | false  |
//!
//! Concrete primitives implement [`Ord`] and [`PartialEq`] through [`compare`]
//! and [`equal`]; the free operator functions then give the table above for
//! `Option<&T>` operands.

use std::cmp::Ordering;

/// Compare `this` against an optional `other`.
///
/// Returns [`Ordering::Greater`] when `other` is absent and
/// [`Ordering::Equal`] when `other` is the very same instance; otherwise the
/// result of `comparator(other)`.
pub fn compare<T, F>(this: &T, other: Option<&T>, comparator: F) -> Ordering
where
    T: ?Sized,
    F: FnOnce(&T) -> Ordering,
{
    match other {
        None => Ordering::Greater,
        Some(other) if std::ptr::eq(this, other) => Ordering::Equal,
        Some(other) => comparator(other),
    }
}

/// Test `this` for equality against an optional `other`.
///
/// An absent `other` is never equal; the same instance always is.
pub fn equal<T, F>(this: &T, other: Option<&T>, comparator: F) -> bool
where
    T: ?Sized,
    F: FnOnce(&T) -> bool,
{
    match other {
        None => false,
        Some(other) if std::ptr::eq(this, other) => true,
        Some(other) => comparator(other),
    }
}

/// Total order over optional operands with `None` as the minimum.
pub fn compare_nullable<T>(left: Option<&T>, right: Option<&T>) -> Ordering
where
    T: Ord + ?Sized,
{
    match (left, right) {
        (None, None) => Ordering::Equal,
        (None, Some(_)) => Ordering::Less,
        (Some(left), right) => compare(left, right, |other| left.cmp(other)),
    }
}

/// `left == right`, where two absent operands are equal.
pub fn equals_operator<T>(left: Option<&T>, right: Option<&T>) -> bool
where
    T: PartialEq + ?Sized,
{
    match (left, right) {
        (None, None) => true,
        (None, Some(_)) => false,
        (Some(left), right) => equal(left, right, |other| left == other),
    }
}

/// `left != right`.
pub fn not_equals_operator<T>(left: Option<&T>, right: Option<&T>) -> bool
where
    T: PartialEq + ?Sized,
{
    !equals_operator(left, right)
}

/// `left < right`.
pub fn less_than<T>(left: Option<&T>, right: Option<&T>) -> bool
where
    T: Ord + ?Sized,
{
    compare_nullable(left, right) == Ordering::Less
}

/// `left <= right`.
pub fn less_or_equal<T>(left: Option<&T>, right: Option<&T>) -> bool
where
    T: Ord + ?Sized,
{
    compare_nullable(left, right) != Ordering::Greater
}

/// `left > right`.
pub fn greater_than<T>(left: Option<&T>, right: Option<&T>) -> bool
where
    T: Ord + ?Sized,
{
    compare_nullable(left, right) == Ordering::Greater
}

/// `left >= right`.
pub fn greater_or_equal<T>(left: Option<&T>, right: Option<&T>) -> bool
where
    T: Ord + ?Sized,
{
    compare_nullable(left, right) != Ordering::Less
}
