//! Conformance validators, grouped by what they inspect.

pub mod artifact;
pub mod catalog;
