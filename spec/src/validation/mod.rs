//! Uniform validation of record instances.
//!
//! Every record declares its fields once as a table of [`FieldSpec`]s and
//! hands the [`Validator`] an [`Observed`] view of each field in the same
//! order. The walker checks enumeration membership, zone structure, numeric
//! bounds (with reset semantics), text formats and nested records, then runs
//! the record's cross-field rules. All violations are reported in one pass.

pub mod error;
pub mod field;
pub mod observe;
pub mod validator;

pub use error::{Reason, Rejected, ValidationError};
pub use field::{Bounds, FieldKind, FieldSpec, TextRule};
pub use observe::{Observe, Observed};
pub use validator::Validator;

use crate::record::Record;

/// Validates `record`, returning every violated invariant (empty when valid).
#[must_use]
pub fn validate<R: Record + ?Sized>(record: &R) -> Vec<ValidationError> {
    let mut validator = Validator::new();
    validator.check(record);
    let violations = validator.finish();
    tracing::trace!(
        record = record.schema().name,
        violations = violations.len(),
        "validated"
    );
    violations
}
