//! Climate: cabin and exterior climate.

use crate::enums::{AirflowDirection, ConvertibleRoofStatus, EnumCode, EnumKind, WiperControl};
use crate::model::{Domain, DomainModule};
use crate::record::Signal;
use crate::unit::{Percent, Unit};
use crate::zone::Zone;

/// Returns the Climate domain module.
#[must_use]
pub fn module() -> DomainModule {
    DomainModule {
        domain: Domain::Climate,
        comment: "Temperatures, rain, wipers, defrost, openings and climate control.",
        records: vec![
            Temperature::record_schema(),
            RainSensor::record_schema(),
            WiperStatus::record_schema(),
            Defrost::record_schema(),
            Sunroof::record_schema(),
            ConvertibleRoof::record_schema(),
            SideWindow::record_schema(),
            ClimateControl::record_schema(),
            AtmosphericPressure::record_schema(),
        ],
    }
}

record! {
    /// Interior and exterior air temperature.
    Temperature in Climate {
        /// Cabin air, in °C.
        interior_temperature "InteriorTemperature": f64 => real(Unit::Celsius),
        /// Outside air, in °C.
        exterior_temperature "ExteriorTemperature": f64 => real(Unit::Celsius),
    }
}

record! {
    /// Rain sensor.
    RainSensor in Climate {
        /// Rain intensity, 0: no rain, 10: heaviest.
        rain_intensity "RainIntensity": u8 => level(),
        /// Sensor this reading applies to.
        zone "Zone": Option<Zone> => zone(),
    }
}

record! {
    /// Wiper operation.
    WiperStatus in Climate {
        /// Current wiping interval.
        wiper_speed "WiperSpeed": EnumCode<WiperControl> => code(EnumKind::WiperControl),
        /// Current controller setting; also used to request a change.
        wiper_setting "WiperSetting": EnumCode<WiperControl> => code(EnumKind::WiperControl),
    }
}

record! {
    /// Defrost switches.
    Defrost in Climate {
        /// Window defrost on.
        defrost_window "DefrostWindow": bool => flag(),
        /// Mirror defrost on.
        defrost_mirrors "DefrostMirrors": bool => flag(),
        /// Window or mirror this reading applies to.
        zone "Zone": Option<Zone> => zone(),
    }
}

record! {
    /// Sunroof position.
    Sunroof in Climate {
        /// Openness, 0: closed, 100: fully open.
        openness "Openness": Percent => percent(),
        /// Tilt, 0: closed, 100: maximum tilt.
        tilt "Tilt": Percent => percent(),
        /// Sunroof this reading applies to.
        zone "Zone": Option<Zone> => zone(),
    }
}

record! {
    /// Convertible roof.
    ConvertibleRoof in Climate {
        /// Current roof state.
        status "Status": EnumCode<ConvertibleRoofStatus> => code(EnumKind::ConvertibleRoofStatus),
        /// Requested state, true: open, false: closed.
        setting "Setting": bool => flag(),
    }
}

record! {
    /// Side window.
    SideWindow in Climate {
        /// Window locked.
        lock "Lock": bool => flag(),
        /// Openness, 0: closed, 100: fully open.
        openness "Openness": Percent => percent(),
        /// Window this reading applies to.
        zone "Zone": Option<Zone> => zone(),
    }
}

record! {
    /// Climate control settings.
    ClimateControl in Climate {
        /// Air flow direction.
        airflow_direction "AirflowDirection": EnumCode<AirflowDirection> =>
            code(EnumKind::AirflowDirection),
        /// Fan speed, 0: off, 10: strongest.
        fan_speed_level "FanSpeedLevel": u8 => level(),
        /// Desired temperature, in °C.
        target_temperature "TargetTemperature": i16 => number(Unit::Celsius),
        /// Air conditioning on.
        air_conditioning "AirConditioning": bool => flag(),
        /// Heater on.
        heater "Heater": bool => flag(),
        /// Seat heater, 0: off, 10: warmest.
        seat_heater "SeatHeater": u8 => level(),
        /// Seat ventilation, 0: off, 10: strongest.
        seat_cooler "SeatCooler": u8 => level(),
        /// Recirculating cabin air instead of pulling in outside air.
        air_recirculation "AirRecirculation": bool => flag(),
        /// Steering wheel heater, 0: off, 10: warmest.
        steering_wheel_heater "SteeringWheelHeater": u8 => level(),
        /// Climate zone this reading applies to.
        zone "Zone": Option<Zone> => zone(),
    }
}

record! {
    /// Outside atmospheric pressure.
    AtmosphericPressure in Climate {
        /// Pressure, in hPa.
        pressure "Pressure": u16 => number(Unit::Hectopascals),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::Record;
    use crate::validation::Reason;

    #[test]
    fn nine_records() {
        assert_eq!(module().records.len(), 9);
    }

    #[test]
    fn temperature_must_be_finite() {
        let temperature = Temperature {
            interior_temperature: 21.5,
            exterior_temperature: f64::NAN,
        };
        let errors = temperature.validate();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field, "ExteriorTemperature");
        assert!(matches!(errors[0].reason, Reason::OutOfRange { bounds: None, .. }));
    }

    #[test]
    fn levels_stop_at_ten() {
        let climate = ClimateControl {
            airflow_direction: AirflowDirection::BiLevel.into(),
            fan_speed_level: 10,
            seat_heater: 11,
            ..ClimateControl::default()
        };
        let errors = climate.validate();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field, "SeatHeater");
    }

    #[test]
    fn rain_intensity_is_a_level() {
        let rain = RainSensor {
            rain_intensity: 7,
            zone: None,
        };
        assert!(rain.validate().is_empty());
    }
}
