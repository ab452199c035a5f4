//! W3C vehicle data catalog encoded as typed Rust data.
//!
//! The `vehicle-data` crate provides the vehicle signal vocabulary modeled
//! on the W3C Vehicle Information Access data vocabulary: 17 closed
//! enumerations, the zone addressing scheme, and 68 signal records in seven
//! domains, each declared once with its units, bounds and reset semantics.
//! Every record is checked by the same validation layer, and
//! [`Validated<T>`] is the only way to hand a record to a consumer.
//!
//! # Entry Point
//!
//! ```
//! let catalog = vehicle_data::Catalog::full();
//! assert_eq!(catalog.domains.len(), 7);
//! assert_eq!(catalog.record_count(), 68);
//! ```
//!
//! # Validation
//!
//! ```
//! use vehicle_data::{Fuel, Signal};
//!
//! let fuel = Fuel { level: 101, ..Fuel::default() };
//! let rejected = fuel.checked().unwrap_err();
//! assert_eq!(rejected.violations[0].field, "Level");
//! ```
//!
//! Encoding record instances for a transport is left to the caller; with
//! the `serde` feature every enum, zone and record implements
//! `Serialize`/`Deserialize`.

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

pub mod enums;
pub mod model;
pub mod record;
pub mod records;
#[cfg(feature = "serializers")]
pub mod serializer;
pub mod unit;
pub mod validation;
pub mod zone;

pub use enums::{
    AirflowDirection, AlarmStatus, ButtonEventType, ClosedEnum, ConvertibleRoofStatus,
    DoorOpenStatus, DriveModeType, EnumCode, EnumKind, FuelType, IdentificationType,
    LaneDepartureStatus, OccupantStatus, ParkingBrakeStatus, TransmissionGearType,
    TransmissionMode, UnknownEnumValue, VehiclePowerModeType, VehicleType, WiperControl, ZoneType,
};
pub use model::{Catalog, Domain, DomainModule, RecordSchema};
pub use record::{Record, Signal, Validated};
pub use records::*;
pub use unit::{Percent, Unit};
pub use validation::{FieldKind, FieldSpec, Reason, Rejected, ValidationError, Validator};
pub use zone::{Zone, ZoneError};

impl Catalog {
    /// Returns the complete catalog with all seven domains.
    ///
    /// Built once on first use and shared read-only afterwards.
    #[must_use]
    pub fn full() -> &'static Catalog {
        static CATALOG: std::sync::OnceLock<Catalog> = std::sync::OnceLock::new();
        CATALOG.get_or_init(|| {
            let catalog = Catalog {
                version: env!("CARGO_PKG_VERSION"),
                source: "https://www.w3.org/TR/vehicle-data/",
                enums: EnumKind::ALL,
                domains: vec![
                    records::configuration::module(),
                    records::running_status::module(),
                    records::maintenance::module(),
                    records::personalization::module(),
                    records::driving_safety::module(),
                    records::climate::module(),
                    records::vision_and_parking::module(),
                ],
            };
            tracing::debug!(
                enums = catalog.enum_count(),
                records = catalog.record_count(),
                fields = catalog.field_count(),
                "vehicle data catalog assembled"
            );
            catalog
        })
    }
}
