//! Schema artifact validator.
//!
//! Verifies that `public/vehicle-data.schema.json`, as written by
//! `vd-build`, matches the schema exported from the live catalog:
//! - same catalog version and source
//! - same enumerations, members and codes
//! - same records, in the same domains, with the same field tables
//!
//! A missing artifact is a warning, not a failure: the catalog itself is
//! still checked by the other validators.

use std::collections::BTreeMap;
use std::path::Path;

use anyhow::{Context, Result};
use serde_json::Value;
use vehicle_data::serializer::json::{to_json, ARTIFACT_NAME};
use vehicle_data::Catalog;

use crate::report::{CheckResult, SuiteReport};

const VALIDATOR: &str = "artifact/json";

/// Validates the built schema artifact against the live catalog.
///
/// # Errors
///
/// Returns an error if the file exists but cannot be read or parsed.
pub fn validate(artifacts: &Path) -> Result<SuiteReport> {
    let mut report = SuiteReport::new();

    let path = artifacts.join(ARTIFACT_NAME);
    if !path.exists() {
        report.push(CheckResult::warn(
            VALIDATOR,
            format!("{ARTIFACT_NAME} not found in {}, run vd-build first", artifacts.display()),
        ));
        return Ok(report);
    }

    let content = std::fs::read_to_string(&path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    let built: Value = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse {} as JSON", path.display()))?;

    report.push(compare(&built, &to_json(Catalog::full())));
    Ok(report)
}

/// Compares a built artifact with the live export.
fn compare(built: &Value, live: &Value) -> CheckResult {
    if built == live {
        let records = records_by_name(live).len();
        let enums = live["enums"].as_array().map_or(0, Vec::len);
        return CheckResult::pass(
            VALIDATOR,
            format!("{ARTIFACT_NAME} matches the catalog ({enums} enums, {records} records)"),
        );
    }

    let mut details = Vec::new();
    for key in ["version", "source"] {
        if built[key] != live[key] {
            details.push(format!("{key}: built {}, catalog {}", built[key], live[key]));
        }
    }

    let built_enums = enums_by_name(built);
    let live_enums = enums_by_name(live);
    diff_named("enum", &built_enums, &live_enums, &mut details);

    let built_records = records_by_name(built);
    let live_records = records_by_name(live);
    diff_named("record", &built_records, &live_records, &mut details);

    if details.is_empty() {
        details.push("documents differ in ordering or domain metadata".to_owned());
    }
    CheckResult::fail_with_details(
        VALIDATOR,
        format!("{ARTIFACT_NAME} is stale, rebuild with vd-build"),
        details,
    )
}

fn enums_by_name(doc: &Value) -> BTreeMap<&str, &Value> {
    doc["enums"]
        .as_array()
        .into_iter()
        .flatten()
        .filter_map(|e| Some((e["name"].as_str()?, e)))
        .collect()
}

fn records_by_name(doc: &Value) -> BTreeMap<&str, &Value> {
    doc["domains"]
        .as_array()
        .into_iter()
        .flatten()
        .filter_map(|d| d["records"].as_array())
        .flatten()
        .filter_map(|r| Some((r["name"].as_str()?, r)))
        .collect()
}

fn diff_named(
    label: &str,
    built: &BTreeMap<&str, &Value>,
    live: &BTreeMap<&str, &Value>,
    details: &mut Vec<String>,
) {
    for (name, value) in live {
        match built.get(name) {
            None => details.push(format!("{label} {name} missing from artifact")),
            Some(old) if old != value => details.push(format!("{label} {name} differs")),
            Some(_) => {}
        }
    }
    for name in built.keys().filter(|name| !live.contains_key(*name)) {
        details.push(format!("{label} {name} no longer in catalog"));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn live() -> Value {
        to_json(Catalog::full())
    }

    #[test]
    fn identical_export_passes() {
        let result = compare(&live(), &live());
        assert!(!result.is_failure());
        assert!(result.message.contains("17 enums, 68 records"));
    }

    #[test]
    fn dropped_record_is_named() {
        let mut built = live();
        if let Some(records) = built["domains"][6]["records"].as_array_mut() {
            records.retain(|r| r["name"] != "Alarm");
        }
        let result = compare(&built, &live());
        assert!(result.is_failure());
        assert_eq!(result.details, vec!["record Alarm missing from artifact"]);
    }

    #[test]
    fn version_drift_is_reported() {
        let mut built = live();
        built["version"] = Value::from("0.0.1");
        let result = compare(&built, &live());
        assert!(result.is_failure());
        assert!(result.details[0].starts_with("version: built \"0.0.1\""));
    }

    #[test]
    fn written_artifact_round_trips() {
        let dir = std::env::temp_dir().join(format!("vd-artifact-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        let text = serde_json::to_string_pretty(&live()).unwrap();
        std::fs::write(dir.join(ARTIFACT_NAME), text).unwrap();

        let report = validate(&dir).unwrap();
        assert!(report.all_passed());
        assert_eq!(report.count(crate::report::Severity::Pass), 1);

        std::fs::remove_dir_all(&dir).unwrap();
    }
}
