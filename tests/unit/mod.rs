//! Unit-level integration tests grouped by area.

pub mod conformance;
pub mod properties;
pub mod serialization;
pub mod timestamps;
