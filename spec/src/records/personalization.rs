//! Personalization: per-occupant preferences.

use crate::enums::{DriveModeType, EnumCode, EnumKind};
use crate::model::{Domain, DomainModule};
use crate::record::Signal;
use crate::unit::Percent;
use crate::validation::TextRule;
use crate::zone::Zone;

/// Returns the Personalization domain module.
#[must_use]
pub fn module() -> DomainModule {
    DomainModule {
        domain: Domain::Personalization,
        comment: "Language, units, mirror and seat positions, drive mode and sound settings.",
        records: vec![
            LanguageConfiguration::record_schema(),
            UnitsOfMeasure::record_schema(),
            Mirror::record_schema(),
            SeatAdjustment::record_schema(),
            DriveMode::record_schema(),
            DashboardIllumination::record_schema(),
            VehicleSound::record_schema(),
        ],
    }
}

record! {
    /// Display language.
    LanguageConfiguration in Personalization {
        /// ISO 639-1 two-letter code, e.g. `en`.
        language "Language": String => text(TextRule::Iso639),
    }
}

record! {
    /// Measurement system and display units.
    ///
    /// Describes how values are shown to occupants; stored values stay in
    /// their canonical units.
    UnitsOfMeasure in Personalization {
        /// True for metric (km, liter), false for US customary (mile, gallon).
        is_mks_system "IsMKSSystem": bool => flag(),
        /// Fuel volume unit.
        units_fuel_volume "UnitsFuelVolume": String =>
            text(TextRule::OneOf(&["liter", "gallon"])),
        /// Distance unit.
        units_distance "UnitsDistance": String => text(TextRule::OneOf(&["km", "mile"])),
        /// Speed unit.
        units_speed "UnitsSpeed": String => text(TextRule::OneOf(&["km/h", "mph"])),
        /// Fuel consumption unit.
        units_fuel_consumption "UnitsFuelConsumption": String =>
            text(TextRule::OneOf(&["l/100", "mpg", "km/l"])),
    }
}

record! {
    /// Mirror position.
    Mirror in Personalization {
        /// Tilt, 0: center, -100: fully down, 100: fully up.
        mirror_tilt "MirrorTilt": Percent => signed_percent(),
        /// Pan, 0: center, -100: fully left, 100: fully right.
        mirror_pan "MirrorPan": Percent => signed_percent(),
        /// Mirror this reading applies to.
        zone "Zone": Option<Zone> => zone(),
    }
}

record! {
    /// Seat position.
    SeatAdjustment in Personalization {
        /// Back recline, 0: fully forward, 100: fully reclined.
        recline_seat_back "ReclineSeatBack": Percent => percent(),
        /// Slide, 0: farthest forward, 100: farthest back.
        seat_slide "SeatSlide": Percent => percent(),
        /// Cushion height, 0: lowest, 100: highest.
        seat_cushion_height "SeatCushionHeight": Percent => percent(),
        /// Headrest height, 0: lowest, 100: highest.
        seat_headrest "SeatHeadrest": Percent => percent(),
        /// Lumbar curvature, 0: flat, 100: maximum.
        seat_back_cushion "SeatBackCushion": Percent => percent(),
        /// Side cushion curvature, 0: flat, 100: maximum.
        seat_side_cushion "SeatSideCushion": Percent => percent(),
        /// Seat this reading applies to.
        zone "Zone": Option<Zone> => zone(),
    }
}

record! {
    /// Selected drive mode.
    DriveMode in Personalization {
        /// The drive mode.
        drive_mode "DriveMode": EnumCode<DriveModeType> => code(EnumKind::DriveModeType),
    }
}

record! {
    /// Dashboard illumination.
    DashboardIllumination in Personalization {
        /// 0: none, 100: maximum.
        dashboard_illumination "DashboardIllumination": Percent => percent(),
    }
}

record! {
    /// Vehicle sound settings.
    VehicleSound in Personalization {
        /// Active noise control on.
        active_noise_control_mode "ActiveNoiseControlMode": bool => flag(),
        /// Engine sound enhancement; empty when off, otherwise a manufacturer setting.
        engine_sound_enhancement_mode "EngineSoundEnhancementMode": String =>
            text(TextRule::Any),
        /// Available sounds, highest priority first.
        available_sounds "AvailableSounds": Vec<String> => text(TextRule::Any).repeated(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::Record;
    use crate::validation::Reason;

    #[test]
    fn seven_records() {
        assert_eq!(module().records.len(), 7);
    }

    #[test]
    fn mirror_accepts_full_signed_range() {
        let mirror = Mirror {
            mirror_tilt: -100,
            mirror_pan: 100,
            zone: None,
        };
        assert!(mirror.validate().is_empty());

        let mirror = Mirror {
            mirror_tilt: -101,
            ..mirror
        };
        assert_eq!(mirror.validate()[0].field, "MirrorTilt");
    }

    #[test]
    fn units_must_be_known_tokens() {
        let units = UnitsOfMeasure {
            is_mks_system: true,
            units_fuel_volume: "liter".into(),
            units_distance: "km".into(),
            units_speed: "km/h".into(),
            units_fuel_consumption: "l/km".into(),
        };
        let errors = units.validate();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field, "UnitsFuelConsumption");
        assert!(matches!(errors[0].reason, Reason::InvalidText { .. }));
    }

    #[test]
    fn available_sounds_keep_priority_order() {
        let sound = VehicleSound {
            active_noise_control_mode: true,
            engine_sound_enhancement_mode: "sport".into(),
            available_sounds: vec!["sport".into(), "classic".into(), "quiet".into()],
        };
        assert!(sound.validate().is_empty());
        assert_eq!(sound.available_sounds[0], "sport");
    }
}
