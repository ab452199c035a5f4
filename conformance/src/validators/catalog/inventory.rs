//! Catalog inventory validator.
//!
//! Verifies that the live catalog contains the published counts:
//! - 17 closed enumerations
//! - 68 records across 7 domains (6 / 26 / 9 / 7 / 8 / 9 / 3)

use vehicle_data::{Catalog, Domain};

use crate::report::{CheckResult, SuiteReport};

const VALIDATOR: &str = "catalog/inventory";

/// Expected inventory counts for the vehicle data catalog.
const EXPECTED_ENUMS: usize = 17;
const EXPECTED_RECORDS: usize = 68;
const EXPECTED_PER_DOMAIN: &[(Domain, usize)] = &[
    (Domain::Configuration, 6),
    (Domain::RunningStatus, 26),
    (Domain::Maintenance, 9),
    (Domain::Personalization, 7),
    (Domain::DrivingSafety, 8),
    (Domain::Climate, 9),
    (Domain::VisionAndParking, 3),
];

/// Validates inventory counts directly from the catalog.
#[must_use]
pub fn validate() -> SuiteReport {
    let mut report = SuiteReport::new();
    let catalog = Catalog::full();

    check_count(&mut report, "enumeration", catalog.enum_count(), EXPECTED_ENUMS);
    check_count(&mut report, "record", catalog.record_count(), EXPECTED_RECORDS);

    for &(domain, expected) in EXPECTED_PER_DOMAIN {
        let actual = catalog.domain(domain).map_or(0, |m| m.records.len());
        check_count(&mut report, domain.as_str(), actual, expected);
    }

    report
}

/// Checks a count matches the expected value.
fn check_count(report: &mut SuiteReport, label: &str, actual: usize, expected: usize) {
    if actual == expected {
        report.push(CheckResult::pass(
            VALIDATOR,
            format!("Correct {label} count: {actual}"),
        ));
    } else {
        report.push(CheckResult::fail(
            VALIDATOR,
            format!("Wrong {label} count: expected {expected}, got {actual}"),
        ));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn per_domain_counts_sum_to_total() {
        let sum: usize = EXPECTED_PER_DOMAIN.iter().map(|(_, n)| n).sum();
        assert_eq!(sum, EXPECTED_RECORDS);
        assert_eq!(EXPECTED_PER_DOMAIN.len(), Domain::ALL.len());
    }
}
