//! Schema export for the vehicle data catalog.
//!
//! One format is supported:
//! - **JSON** ([`json`]): enum members, record fields, units and bounds,
//!   written by `vd-build` to `public/vehicle-data.schema.json`
//!
//! This describes the vocabulary only. Encoding record instances is left to
//! the caller.

pub mod json;
