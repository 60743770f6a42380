//! Timestamp domain primitives.
//!
//! Validity is a construction-time guarantee only: "now" is read once from a
//! [`crate::clock::Clock`] when the value is created and never re-checked, so
//! a [`FutureTimestamp`] may lie in the past by the time it is read.
mod timestamp;

pub use timestamp::{FutureTimestamp, PastOrPresentTimestamp};
