//! Vehicle data conformance suite.
//!
//! Mechanically checks that the catalog itself is well formed: the
//! inventory matches the published vocabulary, enumerations are numbered
//! densely from 1, every field declaration is internally consistent, the
//! sample fixtures validate the way they should, and the built schema
//! artifact agrees with the live catalog.
//!
//! # Conformance Scope
//!
//! | Validator | Checks |
//! |-----------|--------|
//! | `catalog/inventory` | 17 enumerations, 68 records, per-domain record counts |
//! | `catalog/enums` | dense numbering from 1, unique member names, 0 never a member |
//! | `catalog/schema` | field names, bounds, units, declared kinds match observed values |
//! | `catalog/fixtures` | valid samples pass, invalid samples fail with the expected reason |
//! | `artifact/json` | `vehicle-data.schema.json` matches the live catalog |
//!
//! # Entry Point
//!
//! ```no_run
//! use vehicle_data_conformance::{run_all, SuitePaths};
//! use std::path::PathBuf;
//!
//! let paths = SuitePaths {
//!     artifacts: PathBuf::from("public"),
//! };
//! let report = run_all(&paths).expect("Failed to run conformance");
//! assert!(report.all_passed());
//! ```

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

pub mod fixtures;
pub mod report;
pub mod validators;

use std::path::PathBuf;

pub use report::{CheckResult, Severity, SuiteReport};

/// Paths required by the conformance runner.
#[derive(Debug, Clone)]
pub struct SuitePaths {
    /// Directory containing built artifacts (`vehicle-data.schema.json`).
    pub artifacts: PathBuf,
}

/// Runs all conformance validators and returns the aggregated report.
///
/// Validators are run in this order:
/// 1. Catalog inventory
/// 2. Enumeration numbering
/// 3. Field metadata
/// 4. Fixture records
/// 5. Built schema artifact
///
/// # Errors
///
/// Returns an error only if a file system operation fails.
pub fn run_all(paths: &SuitePaths) -> anyhow::Result<SuiteReport> {
    let mut report = SuiteReport::new();

    collect(&mut report, validators::catalog::inventory::validate());
    collect(&mut report, validators::catalog::enums::validate());
    collect(&mut report, validators::catalog::schema::validate());
    collect(&mut report, validators::catalog::fixtures::validate());
    collect(&mut report, validators::artifact::json::validate(&paths.artifacts)?);

    tracing::debug!(
        results = report.results.len(),
        failures = report.failure_count(),
        "conformance suite finished"
    );
    Ok(report)
}

fn collect(report: &mut SuiteReport, part: SuiteReport) {
    if let Some(first) = part.results.first() {
        tracing::debug!(
            validator = %first.validator,
            results = part.results.len(),
            failures = part.failure_count(),
            "validator finished"
        );
    }
    report.extend(part);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_no_failures(report: &SuiteReport, label: &str) {
        let failures: Vec<_> = report.results.iter().filter(|r| r.is_failure()).collect();
        assert!(failures.is_empty(), "{label} failures: {failures:#?}");
    }

    #[test]
    fn inventory_passes() {
        assert_no_failures(&validators::catalog::inventory::validate(), "inventory");
    }

    #[test]
    fn enums_pass() {
        assert_no_failures(&validators::catalog::enums::validate(), "enum");
    }

    #[test]
    fn schema_passes() {
        assert_no_failures(&validators::catalog::schema::validate(), "schema");
    }

    #[test]
    fn fixtures_pass() {
        assert_no_failures(&validators::catalog::fixtures::validate(), "fixture");
    }

    #[test]
    fn missing_artifact_is_a_warning() {
        let paths = SuitePaths {
            artifacts: PathBuf::from("does-not-exist"),
        };
        let report = run_all(&paths).unwrap();
        assert!(report.all_passed());
        assert_eq!(report.for_validator("artifact/json").count(), 1);
        assert_eq!(report.count(Severity::Warning), 1);
    }
}
