//! Vision & Parking: driver assistance and parking.

use crate::enums::{AlarmStatus, EnumCode, EnumKind, LaneDepartureStatus, ParkingBrakeStatus};
use crate::model::{Domain, DomainModule};
use crate::record::Signal;

/// Returns the Vision & Parking domain module.
#[must_use]
pub fn module() -> DomainModule {
    DomainModule {
        domain: Domain::VisionAndParking,
        comment: "Lane departure warning, alarm and parking brake.",
        records: vec![
            LaneDepartureDetection::record_schema(),
            Alarm::record_schema(),
            ParkingBrake::record_schema(),
        ],
    }
}

record! {
    /// Lane departure warning function.
    LaneDepartureDetection in VisionAndParking {
        /// Function state.
        status "Status": EnumCode<LaneDepartureStatus> => code(EnumKind::LaneDepartureStatus),
    }
}

record! {
    /// Vehicle alarm system.
    Alarm in VisionAndParking {
        /// Alarm state.
        status "Status": EnumCode<AlarmStatus> => code(EnumKind::AlarmStatus),
    }
}

record! {
    /// Parking brake.
    ParkingBrake in VisionAndParking {
        /// Brake state.
        status "Status": EnumCode<ParkingBrakeStatus> => code(EnumKind::ParkingBrakeStatus),
    }
}
