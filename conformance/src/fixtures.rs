//! Sample record instances with known validation outcomes.
//!
//! Valid fixtures must produce no violations. Invalid fixtures list the
//! exact violations they must produce, by field path and reason category,
//! in field order.

use anyhow::Context;
use chrono::{DateTime, Utc};
use serde_json::json;
use vehicle_data::{
    Door, DoorOpenStatus, EnumCode, Fuel, FuelConfiguration, FuelType, Identification,
    IgnitionTime, Mirror, Odometer, Record, SizeConfiguration, Trip, UnitsOfMeasure, VehicleType,
    Zone, ZoneType,
};

/// A violation an invalid fixture must produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Expected {
    /// Field path, e.g. `DoorsCount[1]`.
    pub field: &'static str,
    /// Reason category, e.g. `OutOfRange`.
    pub category: &'static str,
}

/// A named record instance and the violations it must produce.
#[derive(Debug)]
pub struct Fixture {
    /// Short identifier used in reports.
    pub name: &'static str,
    /// The instance under test.
    pub record: Box<dyn Record>,
    /// Expected violations; empty for valid fixtures.
    pub expected: Vec<Expected>,
}

impl Fixture {
    fn valid(name: &'static str, record: impl Record + 'static) -> Self {
        Self {
            name,
            record: Box::new(record),
            expected: Vec::new(),
        }
    }

    fn invalid(
        name: &'static str,
        record: impl Record + 'static,
        expected: &[(&'static str, &'static str)],
    ) -> Self {
        Self {
            name,
            record: Box::new(record),
            expected: expected
                .iter()
                .map(|&(field, category)| Expected { field, category })
                .collect(),
        }
    }

    /// True if the fixture is expected to validate cleanly.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.expected.is_empty()
    }
}

/// Builds every fixture.
///
/// # Errors
///
/// Returns an error if a fixture cannot be constructed, which means the
/// fixture set itself is broken.
pub fn all() -> anyhow::Result<Vec<Fixture>> {
    let front_left = Zone::from_axes(&[ZoneType::Front, ZoneType::Left], ZoneType::Front)?;
    let rear_right = Zone::from_axes(&[ZoneType::Rear, ZoneType::Right], ZoneType::Front)?;
    let ignition_on: DateTime<Utc> = "2026-03-14T08:30:00Z"
        .parse()
        .context("Failed to parse ignition timestamp")?;

    let mut fixtures = vec![
        Fixture::valid(
            "fuel",
            Fuel {
                level: 50,
                range: 300_000,
                instant_consumption: 650,
                average_consumption: 0,
                fuel_consumed_since_restart: 1_200,
                time_since_restart: 1_800,
            },
        ),
        Fixture::valid(
            "size-configuration",
            SizeConfiguration {
                width: 1_800,
                height: 1_450,
                length: 4_600,
                doors_count: vec![2, 2, 1],
                total_doors: 6,
            },
        ),
        Fixture::valid(
            "door",
            Door {
                status: DoorOpenStatus::Closed.into(),
                lock: true,
                zone: Some(front_left.clone()),
            },
        ),
        Fixture::valid(
            "identification",
            Identification {
                vin: "1HGCM82633A004352".into(),
                wmi: "1HG".into(),
                vehicle_type: VehicleType::PassengerCarMedium.into(),
                brand: "Honda".into(),
                model: "Accord".into(),
                year: 2003,
            },
        ),
        Fixture::valid(
            "fuel-configuration",
            FuelConfiguration {
                fuel_type: vec![FuelType::Gasoline.into(), FuelType::Ethanol.into()],
                refuel_position: Some(rear_right.clone()),
            },
        ),
        Fixture::valid(
            "trip-meters",
            Trip {
                distance: 12_000,
                average_speed: 48,
                fuel_consumption: 720,
                meters: vec![
                    Trip {
                        distance: 500,
                        ..Trip::default()
                    },
                    Trip::default(),
                ],
            },
        ),
        Fixture::valid(
            "ignition-time",
            IgnitionTime {
                ignition_on_time: ignition_on,
                ignition_off_time: ignition_on + chrono::Duration::minutes(45),
            },
        ),
        Fixture::valid(
            "mirror-signed",
            Mirror {
                mirror_tilt: -100,
                mirror_pan: 35,
                zone: Some(front_left.clone()),
            },
        ),
        Fixture::invalid(
            "fuel-overfull",
            Fuel {
                level: 101,
                ..Fuel::default()
            },
            &[("Level", "OutOfRange")],
        ),
        Fixture::invalid(
            "door-unknown-status",
            Door {
                status: EnumCode::from_raw(42),
                lock: true,
                zone: Some(front_left),
            },
            &[("Status", "UnknownEnumValue")],
        ),
        Fixture::invalid(
            "too-few-doors",
            SizeConfiguration {
                width: 1_800,
                height: 1_450,
                length: 4_600,
                doors_count: vec![2, 2],
                total_doors: 3,
            },
            &[("DoorsCount", "CrossFieldViolation")],
        ),
        Fixture::invalid(
            "doors-per-row",
            SizeConfiguration {
                doors_count: vec![4, 5],
                total_doors: 11,
                ..SizeConfiguration::default()
            },
            &[
                ("DoorsCount[0]", "OutOfRange"),
                ("DoorsCount[1]", "OutOfRange"),
                ("TotalDoors", "OutOfRange"),
            ],
        ),
        Fixture::invalid(
            "short-vin",
            Identification {
                vin: "1HGCM82633A00435".into(),
                wmi: "1HG".into(),
                vehicle_type: VehicleType::PassengerCarMedium.into(),
                ..Identification::default()
            },
            &[("VIN", "InvalidText")],
        ),
        Fixture::invalid(
            "odometer-behind-trip",
            Odometer {
                distance_since_start: 5_000,
                distance_total: 4_000,
            },
            &[("DistanceSinceStart", "CrossFieldViolation")],
        ),
        Fixture::invalid(
            "unknown-fuel-type",
            FuelConfiguration {
                fuel_type: vec![FuelType::Gasoline.into(), EnumCode::from_raw(99)],
                refuel_position: Some(rear_right),
            },
            &[("FuelType[1]", "UnknownEnumValue")],
        ),
        Fixture::invalid(
            "unknown-unit-token",
            UnitsOfMeasure {
                is_mks_system: false,
                units_fuel_volume: "gallon".into(),
                units_distance: "mile".into(),
                units_speed: "knots".into(),
                units_fuel_consumption: "mpg".into(),
            },
            &[("UnitsSpeed", "InvalidText")],
        ),
    ];

    // Zones with bad axes cannot be built through the constructor; they
    // only arrive through decoding.
    let roof: Door = serde_json::from_value(json!({
        "Status": 3,
        "Lock": false,
        "Zone": { "value": ["Front", "Roof"], "driver": 1 }
    }))
    .context("Failed to decode door fixture")?;
    fixtures.push(Fixture::invalid(
        "door-roof-axis",
        roof,
        &[("Zone", "InvalidZoneAxis")],
    ));

    let driver: Door = serde_json::from_value(json!({
        "Status": 1,
        "Lock": false,
        "Zone": { "value": ["Rear"], "driver": 0 }
    }))
    .context("Failed to decode door fixture")?;
    fixtures.push(Fixture::invalid(
        "door-unset-driver",
        driver,
        &[("Zone", "InvalidDriverZone")],
    ));

    Ok(fixtures)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixtures_build() {
        let fixtures = all().unwrap();
        assert!(fixtures.iter().any(Fixture::is_valid));
        assert!(fixtures.iter().any(|f| !f.is_valid()));
    }

    #[test]
    fn fixture_names_unique() {
        let fixtures = all().unwrap();
        let mut names = std::collections::HashSet::new();
        for fixture in &fixtures {
            assert!(names.insert(fixture.name), "Duplicate fixture: {}", fixture.name);
        }
    }
}
