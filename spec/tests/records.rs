//! Integration tests for record validation and the validated hand-off.

use vehicle_data::{
    Door, DoorOpenStatus, EnumCode, EnumKind, Fuel, Reason, Record, Signal, SizeConfiguration,
    Trip, Validated, Zone, ZoneType,
};

fn front_left() -> Zone {
    Zone::new(["Front", "Left"], ZoneType::Front).unwrap()
}

#[test]
fn fuel_level_examples() {
    for level in [0, 50, 100] {
        assert!(Fuel { level, ..Fuel::default() }.checked().is_ok());
    }
    for level in [101, -1] {
        let rejected = Fuel { level, ..Fuel::default() }.checked().unwrap_err();
        assert_eq!(rejected.record, "Fuel");
        assert_eq!(rejected.violations.len(), 1);
        assert_eq!(rejected.violations[0].field, "Level");
        assert!(matches!(
            rejected.violations[0].reason,
            Reason::OutOfRange { .. }
        ));
    }
}

#[test]
fn size_configuration_examples() {
    let ok = SizeConfiguration {
        doors_count: vec![2, 2],
        total_doors: 4,
        ..SizeConfiguration::default()
    };
    assert!(ok.checked().is_ok());

    let too_many = SizeConfiguration {
        doors_count: vec![2, 2],
        total_doors: 3,
        ..SizeConfiguration::default()
    };
    let rejected = too_many.checked().unwrap_err();
    assert_eq!(
        rejected.violations[0].reason,
        Reason::CrossFieldViolation {
            rule: "sum(DoorsCount) <= TotalDoors"
        }
    );
}

#[test]
fn door_examples() {
    let door = Door {
        status: DoorOpenStatus::Closed.into(),
        lock: true,
        zone: Some(front_left()),
    };
    let validated = door.clone().checked().unwrap();
    assert_eq!(validated.status, DoorOpenStatus::Closed);
    assert_eq!(validated.into_inner(), door);

    let bad = Door {
        status: EnumCode::from_raw(7),
        ..door
    };
    let rejected = bad.checked().unwrap_err();
    assert_eq!(rejected.violations.len(), 1);
    assert_eq!(rejected.violations[0].field, "Status");
    assert_eq!(
        rejected.violations[0].reason,
        Reason::UnknownEnumValue {
            kind: EnumKind::DoorOpenStatus
        }
    );
}

#[test]
fn average_consumption_reset_after_validation() {
    let fuel = Fuel {
        level: 62,
        average_consumption: 7_450,
        ..Fuel::default()
    }
    .checked()
    .unwrap();
    let reset = fuel.update(Fuel::reset_average_consumption).unwrap();
    assert_eq!(reset.average_consumption, 0);
}

#[test]
fn update_revalidates() {
    let fuel = Validated::new(Fuel {
        level: 10,
        ..Fuel::default()
    })
    .unwrap();
    let rejected = fuel.update(|f| f.level = 150).unwrap_err();
    assert_eq!(rejected.violations[0].field, "Level");
}

#[test]
fn nested_trip_meters_validate_recursively() {
    let trip = Trip {
        distance: 1_000,
        meters: vec![
            Trip::default(),
            Trip {
                meters: vec![Trip::default()],
                ..Trip::default()
            },
        ],
        ..Trip::default()
    };
    assert!(trip.validate().is_empty());
    assert_eq!(Trip::record_schema().field("Meters").map(|f| f.sequence), Some(true));
}

#[test]
fn every_violation_is_reported_in_one_pass() {
    let door = Door {
        status: EnumCode::from_raw(0),
        lock: false,
        zone: Some(Zone::new(["Front"], ZoneType::Front).unwrap()),
    };
    let mut errors = door.validate();
    assert_eq!(errors.len(), 1);

    let size = SizeConfiguration {
        doors_count: vec![4, 5],
        total_doors: 11,
        ..SizeConfiguration::default()
    };
    errors = size.validate();
    let fields: Vec<&str> = errors.iter().map(|e| e.field.as_str()).collect();
    assert_eq!(fields, ["DoorsCount[0]", "DoorsCount[1]", "TotalDoors"]);
}

#[test]
fn rejected_lists_violations_in_message() {
    let rejected = Door::default().checked().unwrap_err();
    let message = rejected.to_string();
    assert!(message.starts_with("Door rejected with 1 violation(s)"), "{message}");
    assert!(message.contains("Status: not a member of DoorOpenStatus"));
}

#[cfg(feature = "serde")]
mod serde_boundary {
    use super::*;
    use serde_json::json;

    #[test]
    fn records_use_published_field_names() {
        let door = Door {
            status: DoorOpenStatus::Ajar.into(),
            lock: false,
            zone: Some(front_left()),
        };
        let value = serde_json::to_value(&door).unwrap();
        assert_eq!(
            value,
            json!({
                "Status": 2,
                "Lock": false,
                "Zone": { "value": ["Front", "Left"], "driver": 1 }
            })
        );
    }

    #[test]
    fn deserializing_validated_rejects_bad_zone() {
        let input = json!({
            "Status": 3,
            "Lock": true,
            "Zone": { "value": ["Front", "Roof"], "driver": 1 }
        });
        let err = serde_json::from_value::<Validated<Door>>(input).unwrap_err();
        assert!(err.to_string().contains("invalid zone axis `Roof`"), "{err}");
    }

    #[test]
    fn deserializing_validated_accepts_good_record() {
        let input = json!({ "Level": 80, "AverageConsumption": 0 });
        let fuel = serde_json::from_value::<Validated<Fuel>>(input).unwrap();
        assert_eq!(fuel.level, 80);
    }

    #[test]
    fn out_of_catalog_codes_survive_decoding() {
        let door: Door = serde_json::from_value(json!({ "Status": 9 })).unwrap();
        assert_eq!(door.status.raw(), 9);
        assert_eq!(door.validate().len(), 1);
    }
}
