//! Maintenance: wear, fluids and diagnostic counters.

use crate::model::{Domain, DomainModule};
use crate::record::Signal;
use crate::unit::{Percent, Unit};
use crate::validation::Validator;
use crate::zone::Zone;

/// Returns the Maintenance domain module.
#[must_use]
pub fn module() -> DomainModule {
    DomainModule {
        domain: Domain::Maintenance,
        comment: "Odometer, wear indicators, fluid levels and diagnostic counters.",
        records: vec![
            Odometer::record_schema(),
            TransmissionOil::record_schema(),
            TransmissionClutch::record_schema(),
            BrakeMaintenance::record_schema(),
            WasherFluid::record_schema(),
            MalfunctionIndicator::record_schema(),
            BatteryStatus::record_schema(),
            Tire::record_schema(),
            Diagnostic::record_schema(),
        ],
    }
}

record! {
    /// Distance travelled by the vehicle.
    Odometer in Maintenance {
        /// Distance since start, in m. 0 resets the counter.
        distance_since_start "DistanceSinceStart": u64 => number(Unit::Meters).resettable(),
        /// Total distance, in m.
        distance_total "DistanceTotal": u64 => number(Unit::Meters),
    }
    check = odometer_rules;
}

fn odometer_rules(odometer: &Odometer, validator: &mut Validator) {
    if odometer.distance_since_start > odometer.distance_total {
        validator.cross_field(
            "DistanceSinceStart",
            "DistanceSinceStart <= DistanceTotal",
            format_args!(
                "{} > {}",
                odometer.distance_since_start, odometer.distance_total
            ),
        );
    }
}

record! {
    /// Transmission oil state.
    TransmissionOil in Maintenance {
        /// Oil wear, 0: none, 100: completely worn.
        wear "Wear": Percent => percent(),
        /// Oil temperature, in °C.
        temperature "Temperature": i16 => number(Unit::Celsius),
    }
}

record! {
    /// Transmission clutch state.
    TransmissionClutch in Maintenance {
        /// Clutch wear, 0: none, 100: completely worn.
        wear "Wear": Percent => percent(),
    }
}

record! {
    /// Brake maintenance state.
    BrakeMaintenance in Maintenance {
        /// Brake fluid level, 0: empty, 100: full.
        fluid_level "FluidLevel": Percent => percent(),
        /// Brake fluid level is low.
        fluid_level_low "FluidLevelLow": bool => flag(),
        /// Pad wear, 0: none, 100: completely worn.
        pad_wear "PadWear": Percent => percent(),
        /// Brakes are worn.
        brakes_worn "BrakesWorn": bool => flag(),
        /// Brake this reading applies to.
        zone "Zone": Option<Zone> => zone(),
    }
}

record! {
    /// Washer fluid state.
    WasherFluid in Maintenance {
        /// Fluid level, 0: empty, 100: full.
        level "Level": Percent => percent(),
        /// Fluid level is low.
        level_low "LevelLow": bool => flag(),
    }
}

record! {
    /// Malfunction indicator lamp.
    MalfunctionIndicator in Maintenance {
        /// Lamp on.
        on "On": bool => flag(),
    }
}

record! {
    /// Battery state.
    BatteryStatus in Maintenance {
        /// Charge level, 0: empty, 100: full.
        charge_level "ChargeLevel": Percent => percent(),
        /// Voltage, in V.
        voltage "Voltage": u16 => number(Unit::Volts),
        /// Current, in A.
        current "Current": u16 => number(Unit::Amperes),
        /// Battery this reading applies to.
        zone "Zone": Option<Zone> => zone(),
    }
}

record! {
    /// Tire state.
    Tire in Maintenance {
        /// Pressure is low.
        pressure_low "PressureLow": bool => flag(),
        /// Pressure, in kPa.
        pressure "Pressure": u16 => number(Unit::Kilopascals),
        /// Temperature, in °C.
        temperature "Temperature": i16 => number(Unit::Celsius),
        /// Tire this reading applies to.
        zone "Zone": Option<Zone> => zone(),
    }
}

record! {
    /// Malfunction indicator counters.
    Diagnostic in Maintenance {
        /// Engine runtime, in s.
        accumulated_engine_runtime "AccumulatedEngineRuntime": u64 => number(Unit::Seconds),
        /// Distance with the malfunction lamp on, in m.
        distance_with_mil_on "DistanceWithMILOn": u64 => number(Unit::Meters),
        /// Distance since trouble codes were cleared, in m. 0 on clear.
        distance_since_code_cleared "DistanceSinceCodeCleared": u64 =>
            number(Unit::Meters).resettable(),
        /// Time with the malfunction lamp on, in s.
        time_run_mil_on "TimeRunMILOn": u64 => number(Unit::Seconds),
        /// Time since trouble codes were cleared, in s. 0 on clear.
        time_trouble_code_clear "TimeTroubleCodeClear": u64 =>
            number(Unit::Seconds).resettable(),
    }
}
