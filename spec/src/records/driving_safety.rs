//! Driving Safety: active and passive safety systems.

use crate::enums::{DoorOpenStatus, EnumCode, EnumKind, IdentificationType, OccupantStatus};
use crate::model::{Domain, DomainModule};
use crate::record::Signal;
use crate::unit::Unit;
use crate::validation::TextRule;
use crate::zone::Zone;

/// Returns the Driving Safety domain module.
#[must_use]
pub fn module() -> DomainModule {
    DomainModule {
        domain: Domain::DrivingSafety,
        comment: "Stability systems, speed limit, airbags, doors, locks and seat occupancy.",
        records: vec![
            AntilockBrakingSystem::record_schema(),
            TractionControlSystem::record_schema(),
            ElectronicStabilityControl::record_schema(),
            TopSpeedLimit::record_schema(),
            AirbagStatus::record_schema(),
            Door::record_schema(),
            ChildSafetyLock::record_schema(),
            Seat::record_schema(),
        ],
    }
}

record! {
    /// Antilock braking system.
    AntilockBrakingSystem in DrivingSafety {
        /// Setting enabled.
        enabled "Enabled": bool => flag(),
        /// Currently engaged.
        engaged "Engaged": bool => flag(),
    }
}

record! {
    /// Traction control system.
    TractionControlSystem in DrivingSafety {
        /// Setting enabled.
        enabled "Enabled": bool => flag(),
        /// Currently engaged.
        engaged "Engaged": bool => flag(),
    }
}

record! {
    /// Electronic stability control.
    ElectronicStabilityControl in DrivingSafety {
        /// Setting enabled.
        enabled "Enabled": bool => flag(),
        /// Currently engaged.
        engaged "Engaged": bool => flag(),
    }
}

record! {
    /// Top speed limit setting.
    TopSpeedLimit in DrivingSafety {
        /// Limit, in km/h.
        speed "Speed": u16 => number(Unit::KilometersPerHour),
    }
}

record! {
    /// Airbag status.
    AirbagStatus in DrivingSafety {
        /// Airbag activated.
        activated "Activated": bool => flag(),
        /// Airbag deployed.
        deployed "Deployed": bool => flag(),
        /// Seat position of the airbag.
        zone "Zone": Option<Zone> => zone(),
    }
}

record! {
    /// Door status.
    Door in DrivingSafety {
        /// Open state.
        status "Status": EnumCode<DoorOpenStatus> => code(EnumKind::DoorOpenStatus),
        /// Door locked.
        lock "Lock": bool => flag(),
        /// Door this reading applies to.
        zone "Zone": Option<Zone> => zone(),
    }
}

record! {
    /// Child safety lock.
    ChildSafetyLock in DrivingSafety {
        /// Lock engaged.
        lock "Lock": bool => flag(),
        /// Door this lock belongs to.
        zone "Zone": Option<Zone> => zone(),
    }
}

record! {
    /// Seat occupancy and seat belt status.
    Seat in DrivingSafety {
        /// Occupant classification.
        occupant "Occupant": EnumCode<OccupantStatus> => code(EnumKind::OccupantStatus),
        /// Seat belt fastened.
        seat_belt "SeatBelt": bool => flag(),
        /// Occupant identifier.
        occupant_name "OccupantName": String => text(TextRule::Any),
        /// How the occupant was identified.
        identification_type "IdentificationType": EnumCode<IdentificationType> =>
            code(EnumKind::IdentificationType),
        /// Seat this reading applies to.
        zone "Zone": Option<Zone> => zone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::enums::ZoneType;
    use crate::record::Record;
    use crate::validation::Reason;

    fn front_left() -> Zone {
        Zone::from_axes(&[ZoneType::Front, ZoneType::Left], ZoneType::Front).unwrap()
    }

    #[test]
    fn eight_records() {
        assert_eq!(module().records.len(), 8);
    }

    #[test]
    fn closed_locked_door_is_valid() {
        let door = Door {
            status: DoorOpenStatus::Closed.into(),
            lock: true,
            zone: Some(front_left()),
        };
        assert!(door.validate().is_empty());
    }

    #[test]
    fn unknown_door_status_is_the_only_violation() {
        let door = Door {
            status: EnumCode::from_raw(42),
            lock: true,
            zone: Some(front_left()),
        };
        let errors = door.validate();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field, "Status");
        assert_eq!(
            errors[0].reason,
            Reason::UnknownEnumValue {
                kind: EnumKind::DoorOpenStatus
            }
        );
        assert_eq!(errors[0].observed, "42");
    }

    #[test]
    fn unset_occupant_is_rejected() {
        let seat = Seat {
            identification_type: IdentificationType::Keyfob.into(),
            ..Seat::default()
        };
        let errors = seat.validate();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field, "Occupant");
    }
}
