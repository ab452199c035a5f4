//! Field metadata validator.
//!
//! Checks every record's field table for internal consistency:
//! - field names are PascalCase and unique within the record
//! - bounds are well ordered, and percentage/level bounds stay on their scales
//! - units and reset semantics only appear on numeric fields
//! - nested fields name a record that exists in the catalog
//! - a default instance observes exactly the declared fields, with the
//!   declared kinds (no `KindMismatch` or `UndeclaredValue`)

use std::collections::HashSet;

use vehicle_data::{Catalog, FieldKind, FieldSpec, Reason, Record, RecordSchema, Unit};

use crate::report::{CheckResult, SuiteReport};

const VALIDATOR: &str = "catalog/schema";

/// Validates the field tables of every record in the catalog.
#[must_use]
pub fn validate() -> SuiteReport {
    let mut report = SuiteReport::new();
    let catalog = Catalog::full();
    let mut problems = Vec::new();

    for schema in catalog.records() {
        check_fields(catalog, schema, &mut problems);
        check_observation(schema, &mut problems);
    }

    if problems.is_empty() {
        report.push(CheckResult::pass(
            VALIDATOR,
            format!(
                "{} fields across {} records are consistently declared",
                catalog.field_count(),
                catalog.record_count()
            ),
        ));
    } else {
        report.push(CheckResult::fail_with_details(
            VALIDATOR,
            format!("{} field declaration problem(s)", problems.len()),
            problems,
        ));
    }

    report
}

fn check_fields(catalog: &Catalog, schema: &RecordSchema, problems: &mut Vec<String>) {
    let mut names = HashSet::new();
    for field in schema.fields {
        let path = format!("{}.{}", schema.name, field.name);
        if !is_pascal_case(field.name) {
            problems.push(format!("{path}: name is not PascalCase"));
        }
        if !names.insert(field.name) {
            problems.push(format!("{path}: declared twice"));
        }
        check_bounds(field, &path, problems);
        if field.unit.is_numeric() && !field.kind.is_numeric() {
            problems.push(format!("{path}: unit {} on a {} field", field.unit.as_str(), field.kind));
        }
        if field.resettable && !field.kind.is_numeric() {
            problems.push(format!("{path}: reset semantics on a {} field", field.kind));
        }
        if let FieldKind::Nested(record) = field.kind {
            if catalog.find_record(record).is_none() {
                problems.push(format!("{path}: nested record {record} is not in the catalog"));
            }
        }
    }
    if schema.summary().is_empty() {
        problems.push(format!("{}: missing description", schema.name));
    }
}

fn check_bounds(field: &FieldSpec, path: &str, problems: &mut Vec<String>) {
    let Some(bounds) = field.bounds else {
        if matches!(field.unit, Unit::Percentage | Unit::Level) {
            problems.push(format!("{path}: {} field without bounds", field.unit.as_str()));
        }
        return;
    };
    if !field.kind.is_numeric() {
        problems.push(format!("{path}: bounds on a {} field", field.kind));
    }
    if bounds.min > bounds.max {
        problems.push(format!("{path}: empty bounds {bounds}"));
    }
    let scale = match field.unit {
        Unit::Percentage => Some((-100, 100)),
        Unit::Level => Some((0, 10)),
        _ => None,
    };
    if let Some((low, high)) = scale {
        if bounds.min < low || bounds.max > high {
            problems.push(format!(
                "{path}: bounds {bounds} leave the {} scale [{low}, {high}]",
                field.unit.as_str()
            ));
        }
    }
}

fn check_observation(schema: &RecordSchema, problems: &mut Vec<String>) {
    let blank = (schema.blank)();
    if blank.schema().name != schema.name {
        problems.push(format!(
            "{}: default instance reports schema {}",
            schema.name,
            blank.schema().name
        ));
    }
    let observed = blank.observe().len();
    if observed != schema.fields.len() {
        problems.push(format!(
            "{}: observes {observed} field(s), declares {}",
            schema.name,
            schema.fields.len()
        ));
    }
    for error in blank.validate() {
        if matches!(
            error.reason,
            Reason::KindMismatch { .. } | Reason::UndeclaredValue
        ) {
            problems.push(format!("{}.{error}", schema.name));
        }
    }
}

fn is_pascal_case(name: &str) -> bool {
    name.chars().next().is_some_and(|c| c.is_ascii_uppercase())
        && name.chars().all(|c| c.is_ascii_alphanumeric())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pascal_case_names() {
        assert!(is_pascal_case("DistanceWithMILOn"));
        assert!(is_pascal_case("X"));
        assert!(!is_pascal_case("level"));
        assert!(!is_pascal_case("Fuel_Level"));
        assert!(!is_pascal_case(""));
    }

    #[test]
    fn percentage_outside_scale_is_reported() {
        let field = FieldSpec::number("Level", Unit::Percentage).within(0, 255);
        let mut problems = Vec::new();
        check_bounds(&field, "Fuel.Level", &mut problems);
        assert_eq!(problems.len(), 1);
        assert!(problems[0].contains("leave the percentage scale"));
    }

    #[test]
    fn unbounded_level_is_reported() {
        let field = FieldSpec::number("FanSpeedLevel", Unit::Level);
        let mut problems = Vec::new();
        check_bounds(&field, "ClimateControl.FanSpeedLevel", &mut problems);
        assert_eq!(problems.len(), 1);
    }
}
