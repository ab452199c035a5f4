//! The signal record catalog, one module per domain.
//!
//! Each record is declared exactly once with the [`record!`] macro: the
//! struct, its published field names, and its field table come from the
//! same declaration, so the schema and the type cannot drift apart.

/// Declares a record type, its schema and its trait impls.
///
/// ```text
/// record! {
///     /// Doc.
///     Name in Domain {
///         /// Field doc.
///         rust_name "PublishedName": Type => constructor(args).modifier(args),
///     }
///     check = cross_field_rules;
/// }
/// ```
///
/// `constructor` is a [`FieldSpec`](crate::validation::FieldSpec) builder;
/// the published name is passed to it as the first argument.
macro_rules! record {
    (
        $(#[doc = $doc:literal])*
        $name:ident in $domain:ident {
            $(
                $(#[$fmeta:meta])*
                $field:ident $published:literal : $ty:ty =>
                    $ctor:ident ( $( $arg:expr ),* ) $( . $modifier:ident ( $( $marg:expr ),* ) )*
            ),+ $(,)?
        }
        $( check = $check:path; )?
    ) => {
        $(#[doc = $doc])*
        #[derive(Debug, Clone, PartialEq, Default)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        #[cfg_attr(feature = "serde", serde(default))]
        pub struct $name {
            $(
                $(#[$fmeta])*
                #[cfg_attr(feature = "serde", serde(rename = $published))]
                pub $field: $ty,
            )+
        }

        impl $crate::record::Signal for $name {
            fn record_schema() -> &'static $crate::model::RecordSchema {
                fn blank() -> Box<dyn $crate::record::Record> {
                    Box::<$name>::default()
                }
                static SCHEMA: $crate::model::RecordSchema = $crate::model::RecordSchema {
                    name: stringify!($name),
                    comment: concat!($( $doc, "\n" ),*),
                    domain: $crate::model::Domain::$domain,
                    fields: &[
                        $(
                            $crate::validation::FieldSpec::$ctor($published $(, $arg)*)
                                $( .$modifier($( $marg ),*) )*,
                        )+
                    ],
                    blank,
                };
                &SCHEMA
            }
        }

        impl $crate::record::Record for $name {
            fn schema(&self) -> &'static $crate::model::RecordSchema {
                <Self as $crate::record::Signal>::record_schema()
            }

            fn observe(&self) -> Vec<$crate::validation::Observed<'_>> {
                vec![ $( $crate::validation::Observe::view(&self.$field), )+ ]
            }

            $(
                fn cross_check(&self, validator: &mut $crate::validation::Validator) {
                    $check(self, validator);
                }
            )?
        }

        impl $crate::validation::Observe for $name {
            fn view(&self) -> $crate::validation::Observed<'_> {
                $crate::validation::Observed::Record(self)
            }
        }
    };
}

pub mod climate;
pub mod configuration;
pub mod driving_safety;
pub mod maintenance;
pub mod personalization;
pub mod running_status;
pub mod vision_and_parking;

pub use climate::{
    AtmosphericPressure, ClimateControl, ConvertibleRoof, Defrost, RainSensor, SideWindow, Sunroof,
    Temperature, WiperStatus,
};
pub use configuration::{
    FuelConfiguration, Identification, SizeConfiguration, SteeringWheelConfiguration,
    TransmissionConfiguration, WheelConfiguration,
};
pub use driving_safety::{
    AirbagStatus, AntilockBrakingSystem, ChildSafetyLock, Door, ElectronicStabilityControl, Seat,
    TopSpeedLimit, TractionControlSystem,
};
pub use maintenance::{
    BatteryStatus, BrakeMaintenance, Diagnostic, MalfunctionIndicator, Odometer, Tire,
    TransmissionClutch, TransmissionOil, WasherFluid,
};
pub use personalization::{
    DashboardIllumination, DriveMode, LanguageConfiguration, Mirror, SeatAdjustment, UnitsOfMeasure,
    VehicleSound,
};
pub use running_status::{
    Acceleration, AcceleratorPedalPosition, BrakeOperation, ButtonEvent, Chime, CruiseControlStatus,
    DrivingMode, EngineCoolant, EngineOil, EngineSpeed, Fuel, Horn, IgnitionTime,
    InteriorLightStatus, LightStatus, NightMode, PowertrainTorque, SteeringWheel, ThrottlePosition,
    Transmission, Trip, VehiclePowerMode, VehicleSpeed, WheelSpeed, WheelTick, YawRate,
};
pub use vision_and_parking::{Alarm, LaneDepartureDetection, ParkingBrake};
