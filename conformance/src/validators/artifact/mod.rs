//! Validators over built artifacts.

pub mod json;
