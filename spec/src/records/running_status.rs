//! Running Status: live state while the vehicle is in use.

use chrono::{DateTime, Utc};

use crate::enums::{
    ButtonEventType, EnumCode, EnumKind, TransmissionMode, VehiclePowerModeType,
};
use crate::model::{Domain, DomainModule};
use crate::record::Signal;
use crate::unit::{Percent, Unit};
use crate::zone::Zone;

/// Returns the Running Status domain module.
#[must_use]
pub fn module() -> DomainModule {
    DomainModule {
        domain: Domain::RunningStatus,
        comment: "Speeds, powertrain, lights, fuel and driver inputs while the vehicle runs.",
        records: vec![
            VehicleSpeed::record_schema(),
            WheelSpeed::record_schema(),
            EngineSpeed::record_schema(),
            VehiclePowerMode::record_schema(),
            PowertrainTorque::record_schema(),
            AcceleratorPedalPosition::record_schema(),
            ThrottlePosition::record_schema(),
            Trip::record_schema(),
            Transmission::record_schema(),
            CruiseControlStatus::record_schema(),
            LightStatus::record_schema(),
            InteriorLightStatus::record_schema(),
            Horn::record_schema(),
            Chime::record_schema(),
            Fuel::record_schema(),
            EngineOil::record_schema(),
            Acceleration::record_schema(),
            EngineCoolant::record_schema(),
            SteeringWheel::record_schema(),
            WheelTick::record_schema(),
            IgnitionTime::record_schema(),
            YawRate::record_schema(),
            BrakeOperation::record_schema(),
            ButtonEvent::record_schema(),
            DrivingMode::record_schema(),
            NightMode::record_schema(),
        ],
    }
}

record! {
    /// Vehicle speed.
    VehicleSpeed in RunningStatus {
        /// Vehicle speed, in m/h.
        speed "Speed": u32 => number(Unit::MetersPerHour),
    }
}

record! {
    /// Speed of a single wheel.
    WheelSpeed in RunningStatus {
        /// Wheel speed, in m/h.
        speed "Speed": u32 => number(Unit::MetersPerHour),
        /// Wheel this reading applies to.
        zone "Zone": Option<Zone> => zone(),
    }
}

record! {
    /// Engine speed.
    EngineSpeed in RunningStatus {
        /// Engine speed, in rpm.
        speed "Speed": u32 => number(Unit::RotationsPerMinute),
    }
}

record! {
    /// Position of the ignition switch.
    VehiclePowerMode in RunningStatus {
        /// Current power mode.
        value "Value": EnumCode<VehiclePowerModeType> => code(EnumKind::VehiclePowerModeType),
    }
}

record! {
    /// Powertrain torque.
    PowertrainTorque in RunningStatus {
        /// Torque, in N·m.
        value "Value": i16 => number(Unit::NewtonMeters),
    }
}

record! {
    /// Accelerator pedal position.
    AcceleratorPedalPosition in RunningStatus {
        /// 0: released, 100: fully depressed.
        value "Value": Percent => percent(),
    }
}

record! {
    /// Throttle position.
    ThrottlePosition in RunningStatus {
        /// 0: closed, 100: wide open.
        value "Value": Percent => percent(),
    }
}

record! {
    /// Trip meter.
    ///
    /// A trip may carry further trip meters in `Meters`; each is checked
    /// like a top-level trip and reported under `Meters[i].`.
    Trip in RunningStatus {
        /// Distance travelled, in m. 0 resets the meter.
        distance "Distance": u64 => number(Unit::Meters).resettable(),
        /// Average speed, in km/h. 0 resets the meter.
        average_speed "AverageSpeed": u16 => number(Unit::KilometersPerHour).resettable(),
        /// Fuel consumed, in mL/100km. 0 resets the meter.
        fuel_consumption "FuelConsumption": u16 =>
            number(Unit::MillilitersPer100Km).resettable(),
        /// Additional trip meters, in display order.
        meters "Meters": Vec<Trip> => nested("Trip").repeated(),
    }
}

impl Trip {
    /// Resets this meter's counters. Nested meters are independent and keep
    /// their values.
    pub fn reset(&mut self) {
        self.distance = 0;
        self.average_speed = 0;
        self.fuel_consumption = 0;
    }
}

record! {
    /// Current transmission gear and mode.
    Transmission in RunningStatus {
        /// Gear position.
        gear "Gear": u8 => number(Unit::None).within(0, 10),
        /// Transmission mode.
        mode "Mode": EnumCode<TransmissionMode> => code(EnumKind::TransmissionMode),
    }
}

record! {
    /// Cruise control settings.
    CruiseControlStatus in RunningStatus {
        /// True when cruise control is on.
        status "Status": bool => flag(),
        /// Target speed, in km/h.
        speed "Speed": u16 => number(Unit::KilometersPerHour),
    }
}

record! {
    /// Exterior light statuses.
    LightStatus in RunningStatus {
        /// Headlights on.
        head "Head": bool => flag(),
        /// Right turn signal on.
        right_turn "RightTurn": bool => flag(),
        /// Left turn signal on.
        left_turn "LeftTurn": bool => flag(),
        /// Brake lights on.
        brake "Brake": bool => flag(),
        /// Fog lights on.
        fog "Fog": bool => flag(),
        /// Hazard lights on.
        hazard "Hazard": bool => flag(),
        /// Parking lights on.
        parking "Parking": bool => flag(),
        /// High beam on.
        high_beam "HighBeam": bool => flag(),
        /// Automatic headlights activated.
        automatic_head_lights "AutomaticHeadLights": bool => flag(),
        /// Dynamic high beam activated.
        dynamic_high_beam "DynamicHighBeam": bool => flag(),
        /// Lights this reading applies to.
        zone "Zone": Option<Zone> => zone(),
    }
}

record! {
    /// Interior light status.
    InteriorLightStatus in RunningStatus {
        /// Light on.
        status "Status": bool => flag(),
        /// Cabin zone of the light.
        zone "Zone": Option<Zone> => zone(),
    }
}

record! {
    /// Horn status.
    Horn in RunningStatus {
        /// Horn sounding.
        status "Status": bool => flag(),
    }
}

record! {
    /// Door-open chime status.
    Chime in RunningStatus {
        /// Chime sounding.
        status "Status": bool => flag(),
    }
}

record! {
    /// Fuel level and consumption.
    Fuel in RunningStatus {
        /// Fuel level, 0: empty, 100: full.
        level "Level": Percent => percent(),
        /// Estimated range, in m.
        range "Range": u64 => number(Unit::Meters),
        /// Instant consumption, in mL/100km.
        instant_consumption "InstantConsumption": u64 => number(Unit::MillilitersPer100Km),
        /// Average consumption, in mL/100km. 0 resets the average.
        average_consumption "AverageConsumption": u64 =>
            number(Unit::MillilitersPer100Km).resettable(),
        /// Fuel consumed since the engine started, in mL. Resets on each restart.
        fuel_consumed_since_restart "FuelConsumedSinceRestart": u64 =>
            number(Unit::Milliliters).resettable(),
        /// Time since the engine started, in s. Resets on each restart.
        time_since_restart "TimeSinceRestart": u64 => number(Unit::Seconds).resettable(),
    }
}

impl Fuel {
    /// Resets the average consumption counter.
    pub fn reset_average_consumption(&mut self) {
        self.average_consumption = 0;
    }
}

record! {
    /// Engine oil status.
    EngineOil in RunningStatus {
        /// Oil level, 0: empty, 100: full.
        level "Level": Percent => percent(),
        /// Remaining oil life, 0: none, 100: full life.
        life_remaining "LifeRemaining": Percent => percent(),
        /// Oil temperature, in °C.
        temperature "Temperature": i64 => number(Unit::Celsius),
        /// Oil pressure, in kPa.
        pressure "Pressure": u16 => number(Unit::Kilopascals),
        /// Oil change indicator.
        change "Change": bool => flag(),
    }
}

record! {
    /// Vehicle acceleration on three axes.
    Acceleration in RunningStatus {
        /// Longitudinal, in cm/s².
        x "X": i64 => number(Unit::CentimetersPerSecondSquared),
        /// Lateral, in cm/s².
        y "Y": i64 => number(Unit::CentimetersPerSecondSquared),
        /// Vertical, in cm/s².
        z "Z": i64 => number(Unit::CentimetersPerSecondSquared),
    }
}

record! {
    /// Engine coolant status.
    EngineCoolant in RunningStatus {
        /// Coolant level, 0: empty, 100: full.
        level "Level": Percent => percent(),
        /// Coolant temperature, in °C.
        temperature "Temperature": i16 => number(Unit::Celsius),
    }
}

record! {
    /// Steering wheel angle.
    SteeringWheel in RunningStatus {
        /// Angle off centerline, in degrees. Negative: left, positive: right.
        angle "Angle": i16 => number(Unit::Degrees),
    }
}

record! {
    /// Wheel tick rate.
    WheelTick in RunningStatus {
        /// Ticks per second.
        value "Value": u64 => number(Unit::TicksPerSecond),
        /// Wheel this reading applies to.
        zone "Zone": Option<Zone> => zone(),
    }
}

record! {
    /// Ignition on and off times.
    IgnitionTime in RunningStatus {
        /// Time of the last ignition on.
        ignition_on_time "IgnitionOnTime": DateTime<Utc> => timestamp(),
        /// Time of the last ignition off.
        ignition_off_time "IgnitionOffTime": DateTime<Utc> => timestamp(),
    }
}

record! {
    /// Vehicle yaw rate.
    YawRate in RunningStatus {
        /// Yaw rate, in °/s.
        value "Value": i16 => number(Unit::DegreesPerSecond),
    }
}

record! {
    /// Brake pedal state.
    BrakeOperation in RunningStatus {
        /// True while the brake pedal is depressed.
        brake_pedal_depressed "BrakePedalDepressed": bool => flag(),
    }
}

record! {
    /// Button press from the steering wheel or another source.
    ButtonEvent in RunningStatus {
        /// The event.
        state "State": EnumCode<ButtonEventType> => code(EnumKind::ButtonEventType),
    }
}

record! {
    /// Whether the vehicle is driving.
    ///
    /// Typically used to disable functions that would distract the driver.
    DrivingMode in RunningStatus {
        /// True while driving.
        mode "Mode": bool => flag(),
    }
}

record! {
    /// Whether it is night time.
    NightMode in RunningStatus {
        /// True at night.
        mode "Mode": bool => flag(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::Record;
    use crate::validation::Reason;

    #[test]
    fn twenty_six_records() {
        assert_eq!(module().records.len(), 26);
    }

    #[test]
    fn fuel_level_bounds() {
        for level in [0, 50, 100] {
            let fuel = Fuel {
                level,
                ..Fuel::default()
            };
            assert!(fuel.validate().is_empty(), "level {level}");
        }
        for level in [101, -1, 255] {
            let fuel = Fuel {
                level,
                ..Fuel::default()
            };
            let errors = fuel.validate();
            assert_eq!(errors.len(), 1, "level {level}");
            assert_eq!(errors[0].field, "Level");
            assert!(matches!(errors[0].reason, Reason::OutOfRange { .. }));
        }
    }

    #[test]
    fn average_consumption_reset_is_valid() {
        let mut fuel = Fuel {
            level: 40,
            average_consumption: 6_800,
            ..Fuel::default()
        };
        fuel.reset_average_consumption();
        assert_eq!(fuel.average_consumption, 0);
        assert!(fuel.validate().is_empty());
    }

    #[test]
    fn trip_reset_keeps_nested_meters() {
        let mut trip = Trip {
            distance: 12_000,
            average_speed: 48,
            fuel_consumption: 700,
            meters: vec![Trip {
                distance: 500,
                ..Trip::default()
            }],
        };
        trip.reset();
        assert_eq!((trip.distance, trip.average_speed, trip.fuel_consumption), (0, 0, 0));
        assert_eq!(trip.meters[0].distance, 500);
        assert!(trip.validate().is_empty());
    }

    #[test]
    fn gear_above_ten_is_out_of_range() {
        let transmission = Transmission {
            gear: 11,
            mode: TransmissionMode::Drive.into(),
        };
        let errors = transmission.validate();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field, "Gear");
    }

    #[test]
    fn power_mode_uses_power_mode_codes() {
        let mode = VehiclePowerMode {
            value: VehiclePowerModeType::Running.into(),
        };
        assert!(mode.validate().is_empty());
        let mode = VehiclePowerMode {
            value: EnumCode::from_raw(5),
        };
        assert!(matches!(
            mode.validate()[0].reason,
            Reason::UnknownEnumValue {
                kind: EnumKind::VehiclePowerModeType
            }
        ));
    }
}
