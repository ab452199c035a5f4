//! Fixture validator.
//!
//! Runs every sample record through the validation layer and compares the
//! violations with the ones the fixture declares. A valid fixture must
//! produce none; an invalid one must produce exactly its expected field
//! paths and reason categories, in order.

use vehicle_data::Record;

use crate::fixtures::{self, Expected, Fixture};
use crate::report::{CheckResult, SuiteReport};

const VALIDATOR: &str = "catalog/fixtures";

/// Validates every fixture against its expected outcome.
#[must_use]
pub fn validate() -> SuiteReport {
    let mut report = SuiteReport::new();

    let fixtures = match fixtures::all() {
        Ok(fixtures) => fixtures,
        Err(err) => {
            report.push(CheckResult::fail(
                VALIDATOR,
                format!("Fixture set could not be built: {err:#}"),
            ));
            return report;
        }
    };

    let mut mismatches = Vec::new();
    for fixture in &fixtures {
        if let Some(problem) = check_fixture(fixture) {
            mismatches.push(problem);
        }
    }

    let (valid, invalid): (Vec<_>, Vec<_>) = fixtures.iter().partition(|f| f.is_valid());
    if mismatches.is_empty() {
        report.push(CheckResult::pass(
            VALIDATOR,
            format!(
                "{} valid and {} invalid fixtures behave as expected",
                valid.len(),
                invalid.len()
            ),
        ));
    } else {
        report.push(CheckResult::fail_with_details(
            VALIDATOR,
            format!("{} fixture(s) did not validate as expected", mismatches.len()),
            mismatches,
        ));
    }

    report
}

/// Returns a description of the mismatch, or `None` when the fixture
/// behaves as declared.
fn check_fixture(fixture: &Fixture) -> Option<String> {
    let errors = fixture.record.validate();
    let actual: Vec<(&str, &str)> = errors
        .iter()
        .map(|e| (e.field.as_str(), e.reason.category()))
        .collect();
    let expected: Vec<(&str, &str)> = fixture
        .expected
        .iter()
        .map(|e| (e.field, e.category))
        .collect();

    if actual == expected {
        tracing::trace!(fixture = fixture.name, violations = errors.len(), "fixture ok");
        return None;
    }

    let rendered = if errors.is_empty() {
        "no violations".to_owned()
    } else {
        errors
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join("; ")
    };
    Some(format!(
        "{} ({}): expected {}, got {rendered}",
        fixture.name,
        fixture.record.schema().name,
        describe(&fixture.expected)
    ))
}

fn describe(expected: &[Expected]) -> String {
    if expected.is_empty() {
        return "no violations".to_owned();
    }
    expected
        .iter()
        .map(|e| format!("{} {}", e.field, e.category))
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use vehicle_data::Fuel;

    #[test]
    fn every_fixture_behaves_as_declared() {
        for fixture in fixtures::all().unwrap() {
            assert_eq!(check_fixture(&fixture), None, "{}", fixture.name);
        }
    }

    #[test]
    fn wrong_expectation_is_reported() {
        let fixture = Fixture {
            name: "fuel-claimed-valid",
            record: Box::new(Fuel {
                level: 120,
                ..Fuel::default()
            }),
            expected: Vec::new(),
        };
        let problem = check_fixture(&fixture).unwrap();
        assert!(problem.starts_with("fuel-claimed-valid (Fuel): expected no violations"));
        assert!(problem.contains("Level"));
    }
}
