//! Enumeration numbering validator.
//!
//! Every closed enumeration must be numbered densely from 1 with unique,
//! non-empty member names, and code 0 must never be a member.

use std::collections::HashSet;

use vehicle_data::{Catalog, EnumKind};

use crate::report::{CheckResult, SuiteReport};

const VALIDATOR: &str = "catalog/enums";

/// Validates numbering and naming of every enumeration in the catalog.
#[must_use]
pub fn validate() -> SuiteReport {
    let mut report = SuiteReport::new();
    let mut problems = Vec::new();

    for &kind in Catalog::full().enums {
        check_kind(kind, &mut problems);
    }

    if problems.is_empty() {
        report.push(CheckResult::pass(
            VALIDATOR,
            format!(
                "{} enumerations numbered densely from 1",
                Catalog::full().enum_count()
            ),
        ));
    } else {
        report.push(CheckResult::fail_with_details(
            VALIDATOR,
            format!("{} enumeration numbering problem(s)", problems.len()),
            problems,
        ));
    }

    report
}

fn check_kind(kind: EnumKind, problems: &mut Vec<String>) {
    if kind.is_empty() {
        problems.push(format!("{kind} has no members"));
        return;
    }
    if kind.is_valid(0) {
        problems.push(format!("{kind} accepts the reserved code 0"));
    }
    let mut seen = HashSet::new();
    for (name, code) in kind.members().iter().zip(1_i32..) {
        if name.is_empty() {
            problems.push(format!("{kind} member {code} has an empty name"));
        }
        if !seen.insert(*name) {
            problems.push(format!("{kind} repeats member name {name}"));
        }
        if kind.code_of(name) != Some(code) {
            problems.push(format!("{kind}::{name} does not map back to code {code}"));
        }
        if kind.name_of(code).ok() != Some(*name) {
            problems.push(format!("{kind} code {code} does not name {name}"));
        }
    }
    let past_end = i32::try_from(kind.len()).map_or(i32::MAX, |n| n.saturating_add(1));
    if kind.is_valid(past_end) {
        problems.push(format!("{kind} accepts {past_end}, past its last member"));
    }
}
