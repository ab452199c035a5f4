//! Validators over the live catalog (no file I/O).

pub mod enums;
pub mod fixtures;
pub mod inventory;
pub mod schema;
