//! Identification & Configuration: static facts about the vehicle.

use crate::enums::{EnumCode, EnumKind, FuelType, TransmissionGearType, VehicleType};
use crate::model::{Domain, DomainModule};
use crate::record::Signal;
use crate::unit::{Percent, Unit};
use crate::validation::{TextRule, Validator};
use crate::zone::Zone;

/// Returns the Identification & Configuration domain module.
#[must_use]
pub fn module() -> DomainModule {
    DomainModule {
        domain: Domain::Configuration,
        comment: "Identity, dimensions and fitted equipment of the vehicle.",
        records: vec![
            Identification::record_schema(),
            SizeConfiguration::record_schema(),
            FuelConfiguration::record_schema(),
            TransmissionConfiguration::record_schema(),
            WheelConfiguration::record_schema(),
            SteeringWheelConfiguration::record_schema(),
        ],
    }
}

record! {
    /// Identification of the vehicle.
    Identification in Configuration {
        /// Vehicle Identification Number (ISO 3779), 17 characters.
        vin "VIN": String => text(TextRule::Iso3779 { len: 17 }),
        /// World Manufacturer Identifier (SAE), 3 characters.
        wmi "WMI": String => text(TextRule::Iso3779 { len: 3 }),
        /// Vehicle body class.
        vehicle_type "VehicleType": EnumCode<VehicleType> => code(EnumKind::VehicleType),
        /// Manufacturer name.
        brand "Brand": String => text(TextRule::Any),
        /// Model name.
        model "Model": String => text(TextRule::Any),
        /// Model year.
        year "Year": u16 => number(Unit::None),
    }
}

record! {
    /// Outer dimensions and door layout of the vehicle.
    SizeConfiguration in Configuration {
        /// Widest dimension, in mm.
        width "Width": u32 => number(Unit::Millimeters),
        /// Distance from ground to the highest point, in mm.
        height "Height": u32 => number(Unit::Millimeters),
        /// Distance from front bumper to rear bumper, in mm.
        length "Length": u32 => number(Unit::Millimeters),
        /// Doors per row, front row first.
        doors_count "DoorsCount": Vec<u16> => number(Unit::None).within(0, 3).repeated(),
        /// Total number of doors, including trunk and hood.
        total_doors "TotalDoors": u16 => number(Unit::None).within(0, 10),
    }
    check = size_rules;
}

fn size_rules(size: &SizeConfiguration, validator: &mut Validator) {
    let per_row: u32 = size.doors_count.iter().map(|&n| u32::from(n)).sum();
    if per_row > u32::from(size.total_doors) {
        validator.cross_field(
            "DoorsCount",
            "sum(DoorsCount) <= TotalDoors",
            format_args!("{per_row} > {}", size.total_doors),
        );
    }
}

record! {
    /// Fuels the vehicle accepts and where it is refueled.
    FuelConfiguration in Configuration {
        /// Accepted fuels.
        fuel_type "FuelType": Vec<EnumCode<FuelType>> => code(EnumKind::FuelType).repeated(),
        /// Location of the refuel port.
        refuel_position "RefuelPosition": Option<Zone> => zone(),
    }
}

record! {
    /// Kind of transmission fitted.
    TransmissionConfiguration in Configuration {
        /// Automatic or manual.
        transmission_gear_type "TransmissionGearType": EnumCode<TransmissionGearType> =>
            code(EnumKind::TransmissionGearType),
    }
}

record! {
    /// Wheel dimensions.
    WheelConfiguration in Configuration {
        /// Wheel radius, in mm.
        wheel_radius "WheelRadius": u16 => number(Unit::Millimeters),
        /// Wheel this reading applies to.
        zone "Zone": Option<Zone> => zone(),
    }
}

record! {
    /// Steering wheel placement and adjustment.
    SteeringWheelConfiguration in Configuration {
        /// True if the steering wheel is on the left side.
        steering_wheel_left "SteeringWheelLeft": bool => flag(),
        /// Telescoping position, 0: closest to driver, 100: furthest.
        steering_wheel_telescoping_position "SteeringWheelTelescopingPosition": Percent =>
            percent(),
        /// Tilt position, 0: lowest, 100: highest.
        steering_wheel_position_tilt "SteeringWheelPositionTilt": Percent => percent(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::Record;
    use crate::validation::Reason;

    #[test]
    fn six_records() {
        assert_eq!(module().records.len(), 6);
    }

    #[test]
    fn doors_within_total() {
        let size = SizeConfiguration {
            doors_count: vec![2, 2],
            total_doors: 4,
            ..SizeConfiguration::default()
        };
        assert!(size.validate().is_empty());
    }

    #[test]
    fn doors_exceeding_total_is_cross_field() {
        let size = SizeConfiguration {
            doors_count: vec![2, 2],
            total_doors: 3,
            ..SizeConfiguration::default()
        };
        let errors = size.validate();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field, "DoorsCount");
        assert!(matches!(errors[0].reason, Reason::CrossFieldViolation { .. }));
    }

    #[test]
    fn row_with_four_doors_is_out_of_range() {
        let size = SizeConfiguration {
            doors_count: vec![4],
            total_doors: 4,
            ..SizeConfiguration::default()
        };
        let errors = size.validate();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field, "DoorsCount[0]");
    }

    #[test]
    fn vin_must_be_seventeen_characters() {
        let id = Identification {
            vin: "1HGCM82633A00435".into(),
            wmi: "1HG".into(),
            vehicle_type: VehicleType::PassengerCarMedium.into(),
            ..Identification::default()
        };
        let errors = id.validate();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field, "VIN");
        assert!(matches!(errors[0].reason, Reason::InvalidText { .. }));
    }

    #[test]
    fn every_listed_fuel_is_checked() {
        let fuel = FuelConfiguration {
            fuel_type: vec![FuelType::Gasoline.into(), EnumCode::from_raw(8)],
            refuel_position: None,
        };
        let errors = fuel.validate();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field, "FuelType[1]");
    }
}
