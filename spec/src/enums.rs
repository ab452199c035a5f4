//! Closed enumerations of the vehicle data catalog.
//!
//! Every enumeration is integer-backed and numbered densely from 1. Code 0 is
//! reserved for "absent / uninitialized" and is never a member, so a zeroed
//! field is always caught by validation.
//!
//! Record fields do not store these enums directly: they store an
//! [`EnumCode`], which keeps the raw code a producer supplied. That way an
//! out-of-catalog value survives until [`crate::Record::validate`] reports it
//! instead of being silently coerced.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::marker::PhantomData;

/// A closed, stably numbered set of named values.
pub trait ClosedEnum: Copy + Eq + fmt::Debug + Send + Sync + 'static {
    /// Registry entry for this enumeration.
    const KIND: EnumKind;
    /// All members, ordered by code (`VARIANTS[i]` has code `i + 1`).
    const VARIANTS: &'static [Self];

    /// Integer code of this member.
    fn code(self) -> i32;

    /// Canonical name of this member.
    fn name(self) -> &'static str;

    /// Returns the member with the given code, if any.
    fn from_code(code: i32) -> Option<Self> {
        usize::try_from(code)
            .ok()
            .and_then(|c| c.checked_sub(1))
            .and_then(|i| Self::VARIANTS.get(i))
            .copied()
    }

    /// Returns the member with the given canonical (case-sensitive) name.
    fn from_name(name: &str) -> Option<Self> {
        Self::VARIANTS.iter().copied().find(|v| v.name() == name)
    }

    /// Membership test against the declared set.
    fn is_valid(code: i32) -> bool {
        Self::KIND.is_valid(code)
    }
}

/// Raised when an integer code is not a member of a closed enumeration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("{value} is not a member of {kind}")]
pub struct UnknownEnumValue {
    /// The enumeration that was consulted.
    pub kind: EnumKind,
    /// The rejected code.
    pub value: i32,
}

macro_rules! closed_enum {
    (
        $(#[$meta:meta])*
        $name:ident {
            $( $(#[$vmeta:meta])* $variant:ident = $code:literal => $label:literal, )+
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        #[repr(i32)]
        pub enum $name {
            $( $(#[$vmeta])* $variant = $code, )+
        }

        impl $name {
            const NAMES: &'static [&'static str] = &[$( $label, )+];
        }

        impl ClosedEnum for $name {
            const KIND: EnumKind = EnumKind::$name;
            const VARIANTS: &'static [Self] = &[$( $name::$variant, )+];

            fn code(self) -> i32 {
                self as i32
            }

            fn name(self) -> &'static str {
                match self {
                    $( $name::$variant => $label, )+
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(ClosedEnum::name(*self))
            }
        }
    };
}

macro_rules! enum_kinds {
    ( $( $name:ident ),+ $(,)? ) => {
        /// Registry of every closed enumeration in the catalog.
        ///
        /// Lets validation and tooling reason about an enumeration by value
        /// (e.g. from field metadata) without knowing its Rust type.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        pub enum EnumKind {
            $(
                #[doc = concat!("[`", stringify!($name), "`]")]
                $name,
            )+
        }

        impl EnumKind {
            /// All registered enumerations, in catalog order.
            pub const ALL: &'static [EnumKind] = &[$( EnumKind::$name, )+];

            /// Rust type name of the enumeration.
            #[must_use]
            pub fn as_str(self) -> &'static str {
                match self {
                    $( EnumKind::$name => stringify!($name), )+
                }
            }

            /// Canonical member names, ordered by code.
            #[must_use]
            pub fn members(self) -> &'static [&'static str] {
                match self {
                    $( EnumKind::$name => $name::NAMES, )+
                }
            }

            /// Looks up an enumeration by its type name.
            #[must_use]
            pub fn from_name(name: &str) -> Option<EnumKind> {
                Self::ALL.iter().copied().find(|k| k.as_str() == name)
            }
        }
    };
}

enum_kinds!(
    AirflowDirection,
    AlarmStatus,
    ButtonEventType,
    ConvertibleRoofStatus,
    DoorOpenStatus,
    DriveModeType,
    FuelType,
    IdentificationType,
    LaneDepartureStatus,
    OccupantStatus,
    ParkingBrakeStatus,
    TransmissionGearType,
    TransmissionMode,
    VehiclePowerModeType,
    VehicleType,
    WiperControl,
    ZoneType,
);

impl EnumKind {
    /// Number of members.
    #[must_use]
    pub fn len(self) -> usize {
        self.members().len()
    }

    /// Always false: no catalog enumeration is empty.
    #[must_use]
    pub fn is_empty(self) -> bool {
        self.members().is_empty()
    }

    /// Membership test. Codes are dense from 1, so this is a range check.
    #[must_use]
    pub fn is_valid(self, code: i32) -> bool {
        code >= 1 && usize::try_from(code).is_ok_and(|c| c <= self.len())
    }

    /// Canonical name of `code`.
    ///
    /// # Errors
    ///
    /// Returns [`UnknownEnumValue`] if `code` is not a member.
    pub fn name_of(self, code: i32) -> Result<&'static str, UnknownEnumValue> {
        usize::try_from(code)
            .ok()
            .and_then(|c| c.checked_sub(1))
            .and_then(|i| self.members().get(i))
            .copied()
            .ok_or(UnknownEnumValue { kind: self, value: code })
    }

    /// Code of the member named `name`, if any.
    #[must_use]
    pub fn code_of(self, name: &str) -> Option<i32> {
        self.members()
            .iter()
            .position(|m| *m == name)
            .and_then(|i| i32::try_from(i + 1).ok())
    }
}

impl fmt::Display for EnumKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Raw code of a closed enumeration as carried by a record field.
///
/// Holds whatever integer the producer supplied; [`EnumCode::get`] resolves
/// it against the catalog. Code 0 is the "unset" default.
pub struct EnumCode<E> {
    code: i32,
    marker: PhantomData<fn() -> E>,
}

impl<E: ClosedEnum> EnumCode<E> {
    /// Wraps a catalog member.
    #[must_use]
    pub fn new(value: E) -> Self {
        Self::from_raw(value.code())
    }

    /// Resolves the code to a member.
    ///
    /// # Errors
    ///
    /// Returns [`UnknownEnumValue`] if the code is not in the catalog.
    pub fn get(self) -> Result<E, UnknownEnumValue> {
        E::from_code(self.code).ok_or(UnknownEnumValue {
            kind: E::KIND,
            value: self.code,
        })
    }

    /// True if the code is a member of `E`.
    #[must_use]
    pub fn is_valid(self) -> bool {
        E::KIND.is_valid(self.code)
    }

    /// Canonical name of the member.
    ///
    /// # Errors
    ///
    /// Returns [`UnknownEnumValue`] if the code is not in the catalog.
    pub fn name(self) -> Result<&'static str, UnknownEnumValue> {
        E::KIND.name_of(self.code)
    }
}

impl<E> EnumCode<E> {
    /// Wraps an arbitrary code, e.g. one read off the wire.
    #[must_use]
    pub const fn from_raw(code: i32) -> Self {
        Self {
            code,
            marker: PhantomData,
        }
    }

    /// The raw code.
    #[must_use]
    pub const fn raw(self) -> i32 {
        self.code
    }

    /// True for the reserved code 0.
    #[must_use]
    pub const fn is_unset(self) -> bool {
        self.code == 0
    }
}

impl<E> Clone for EnumCode<E> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<E> Copy for EnumCode<E> {}

impl<E> PartialEq for EnumCode<E> {
    fn eq(&self, other: &Self) -> bool {
        self.code == other.code
    }
}

impl<E> Eq for EnumCode<E> {}

impl<E> Hash for EnumCode<E> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.code.hash(state);
    }
}

impl<E> Default for EnumCode<E> {
    fn default() -> Self {
        Self::from_raw(0)
    }
}

impl<E: ClosedEnum> PartialEq<E> for EnumCode<E> {
    fn eq(&self, other: &E) -> bool {
        self.code == other.code()
    }
}

impl<E: ClosedEnum> From<E> for EnumCode<E> {
    fn from(value: E) -> Self {
        Self::new(value)
    }
}

impl<E> From<i32> for EnumCode<E> {
    fn from(code: i32) -> Self {
        Self::from_raw(code)
    }
}

impl<E: ClosedEnum> fmt::Debug for EnumCode<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match E::from_code(self.code) {
            Some(value) => write!(f, "{}::{}", E::KIND, value.name()),
            None => write!(f, "{}({})", E::KIND, self.code),
        }
    }
}

#[cfg(feature = "serde")]
impl<E> serde::Serialize for EnumCode<E> {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_i32(self.code)
    }
}

#[cfg(feature = "serde")]
impl<'de, E> serde::Deserialize<'de> for EnumCode<E> {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        <i32 as serde::Deserialize>::deserialize(deserializer).map(Self::from_raw)
    }
}

closed_enum! {
    /// Direction of the air flow through the ventilation system.
    AirflowDirection {
        /// Air flow is directed to the instrument panel outlets.
        FrontPanel = 1 => "FrontPanel",
        /// Air flow is directed to the floor outlets.
        FloorDuct = 2 => "FloorDuct",
        /// Air flow is directed to the instrument panel and floor outlets.
        BiLevel = 3 => "BiLevel",
        /// Air flow is directed to the floor outlets and the windshield.
        DefrostFloor = 4 => "DefrostFloor",
    }
}

closed_enum! {
    /// Status of the vehicle alarm system.
    AlarmStatus {
        /// The alarm is not armed.
        Disarmed = 1 => "Disarmed",
        /// The alarm is about to be armed.
        PreArmed = 2 => "PreArmed",
        /// The alarm is armed.
        Armed = 3 => "Armed",
        /// The alarm has been triggered.
        Alarmed = 4 => "Alarmed",
    }
}

closed_enum! {
    /// Button press events from the steering wheel or another source.
    ButtonEventType {
        /// Home button.
        Home = 1 => "Home",
        /// Back button.
        Back = 2 => "Back",
        /// Search button.
        Search = 3 => "Search",
        /// Call button.
        Call = 4 => "Call",
        /// End-call button.
        EndCall = 5 => "EndCall",
        /// Media play.
        MediaPlay = 6 => "MediaPlay",
        /// Media next track.
        MediaNext = 7 => "MediaNext",
        /// Media previous track.
        MediaPrevious = 8 => "MediaPrevious",
        /// Media pause.
        MediaPause = 9 => "MediaPause",
        /// Voice recognition.
        VoiceRecognize = 10 => "VoiceRecognize",
        /// Enter.
        Enter = 11 => "Enter",
        /// Left.
        Left = 12 => "Left",
        /// Right.
        Right = 13 => "Right",
        /// Up.
        Up = 14 => "Up",
        /// Down.
        Down = 15 => "Down",
        /// Short press.
        Press = 16 => "Press",
        /// Long press.
        LongPress = 17 => "LongPress",
        /// Button released.
        Release = 18 => "Release",
    }
}

closed_enum! {
    /// Status of a convertible roof.
    ConvertibleRoofStatus {
        /// The roof is closed.
        Closed = 1 => "Closed",
        /// The roof is closing.
        Closing = 2 => "Closing",
        /// The roof is opening.
        Opening = 3 => "Opening",
        /// The roof is open.
        Opened = 4 => "Opened",
    }
}

closed_enum! {
    /// Open state of a door.
    DoorOpenStatus {
        /// Door is open.
        Open = 1 => "Open",
        /// Door is ajar.
        Ajar = 2 => "Ajar",
        /// Door is closed.
        Closed = 3 => "Closed",
    }
}

closed_enum! {
    /// Vehicle drive mode.
    DriveModeType {
        /// Comfort.
        Comfort = 1 => "Comfort",
        /// Automatic.
        Auto = 2 => "Auto",
        /// Sport.
        Sport = 3 => "Sport",
        /// Economy.
        Eco = 4 => "Eco",
        /// Manual.
        Manual = 5 => "Manual",
        /// Winter.
        Winter = 6 => "Winter",
    }
}

closed_enum! {
    /// Fuel used by the vehicle.
    FuelType {
        /// Gasoline.
        Gasoline = 1 => "Gasoline",
        /// Methanol.
        Methanol = 2 => "Methanol",
        /// Ethanol.
        Ethanol = 3 => "Ethanol",
        /// Diesel.
        Diesel = 4 => "Diesel",
        /// Liquefied petroleum gas.
        Lpg = 5 => "LPG",
        /// Compressed natural gas.
        Cng = 6 => "CNG",
        /// Battery electric.
        Electric = 7 => "Electric",
    }
}

closed_enum! {
    /// How a seat occupant was identified.
    IdentificationType {
        /// Four digit pin entered by the user.
        Pin = 1 => "Pin",
        /// Key fob.
        Keyfob = 2 => "Keyfob",
        /// Bluetooth device.
        Bluetooth = 3 => "Bluetooth",
        /// NFC device.
        Nfc = 4 => "NFC",
        /// Fingerprint.
        Fingerprint = 5 => "Fingerprint",
        /// Camera.
        Camera = 6 => "Camera",
        /// Voice.
        Voice = 7 => "Voice",
    }
}

closed_enum! {
    /// Status of the lane departure warning function.
    LaneDepartureStatus {
        /// Function is off.
        Off = 1 => "Off",
        /// Function is paused.
        Pause = 2 => "Pause",
        /// Function is running.
        Running = 3 => "Running",
    }
}

closed_enum! {
    /// Seat occupant classification.
    OccupantStatus {
        /// Occupant is an adult.
        Adult = 1 => "Adult",
        /// Occupant is a child.
        Child = 2 => "Child",
        /// Seat is vacant.
        Vacant = 3 => "Vacant",
    }
}

closed_enum! {
    /// Status of the parking brake.
    ParkingBrakeStatus {
        /// Not engaged (driving position).
        Inactive = 1 => "Inactive",
        /// Engaged (parking position).
        Active = 2 => "Active",
        /// The parking brake system reports a fault.
        Error = 3 => "Error",
    }
}

closed_enum! {
    /// Transmission gear type.
    TransmissionGearType {
        /// Automatic transmission.
        Automatic = 1 => "Automatic",
        /// Manual transmission.
        Manual = 2 => "Manual",
    }
}

closed_enum! {
    /// Current transmission mode.
    TransmissionMode {
        /// Park.
        Park = 1 => "Park",
        /// Reverse.
        Reverse = 2 => "Reverse",
        /// Neutral.
        Neutral = 3 => "Neutral",
        /// Low.
        Low = 4 => "Low",
        /// Drive.
        Drive = 5 => "Drive",
        /// Overdrive.
        Overdrive = 6 => "Overdrive",
    }
}

closed_enum! {
    /// Position of the ignition switch.
    VehiclePowerModeType {
        /// No power.
        Off = 1 => "Off",
        /// Accessory power 1.
        Accessory1 = 2 => "Accessory1",
        /// Accessory power 2.
        Accessory2 = 3 => "Accessory2",
        /// Running power.
        Running = 4 => "Running",
    }
}

closed_enum! {
    /// Vehicle body class.
    VehicleType {
        /// Mini passenger car.
        PassengerCarMini = 1 => "PassengerCarMini",
        /// Light passenger car.
        PassengerCarLight = 2 => "PassengerCarLight",
        /// Compact passenger car.
        PassengerCarCompact = 3 => "PassengerCarCompact",
        /// Medium passenger car.
        PassengerCarMedium = 4 => "PassengerCarMedium",
        /// Heavy passenger car.
        PassengerCarHeavy = 5 => "PassengerCarHeavy",
        /// Sport utility vehicle.
        SportUtilityVehicle = 6 => "SportUtilityVehicle",
        /// Pickup truck.
        PickupTruck = 7 => "PickupTruck",
        /// Van.
        Van = 8 => "Van",
    }
}

closed_enum! {
    /// Wiper operation.
    WiperControl {
        /// Wiper is not in operation.
        Off = 1 => "Off",
        /// Single wipe; transient, returns to `Off`.
        Once = 2 => "Once",
        /// Slowest speed.
        Slowest = 3 => "Slowest",
        /// Slow speed.
        Slow = 4 => "Slow",
        /// Middle speed.
        Middle = 5 => "Middle",
        /// Fast speed.
        Fast = 6 => "Fast",
        /// Fastest speed.
        Fastest = 7 => "Fastest",
        /// Speed follows the amount of rain.
        Auto = 8 => "Auto",
    }
}

closed_enum! {
    /// Single-axis physical or logical zone tag.
    ZoneType {
        /// Front row.
        Front = 1 => "Front",
        /// Middle position of a row.
        Middle = 2 => "Middle",
        /// Right side.
        Right = 3 => "Right",
        /// Left side.
        Left = 4 => "Left",
        /// Rear row.
        Rear = 5 => "Rear",
        /// Center row.
        Center = 6 => "Center",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seventeen_enumerations() {
        assert_eq!(EnumKind::ALL.len(), 17);
    }

    #[test]
    fn zero_is_never_a_member() {
        for kind in EnumKind::ALL {
            assert!(!kind.is_valid(0), "{kind} accepts 0");
            assert!(kind.name_of(0).is_err());
        }
    }

    #[test]
    fn door_status_round_trips_by_code_and_name() {
        assert_eq!(DoorOpenStatus::from_code(3), Some(DoorOpenStatus::Closed));
        assert_eq!(DoorOpenStatus::Closed.code(), 3);
        assert_eq!(DoorOpenStatus::from_name("Ajar"), Some(DoorOpenStatus::Ajar));
        assert_eq!(DoorOpenStatus::from_name("ajar"), None);
        assert_eq!(DoorOpenStatus::from_code(4), None);
    }

    #[test]
    fn name_of_reports_the_kind() {
        let err = EnumKind::WiperControl.name_of(9).unwrap_err();
        assert_eq!(err.kind, EnumKind::WiperControl);
        assert_eq!(err.value, 9);
        assert_eq!(err.to_string(), "9 is not a member of WiperControl");
    }

    #[test]
    fn canonical_names_keep_acronyms() {
        assert_eq!(FuelType::Lpg.name(), "LPG");
        assert_eq!(EnumKind::FuelType.code_of("CNG"), Some(6));
        assert_eq!(IdentificationType::Nfc.to_string(), "NFC");
    }

    #[test]
    fn enum_code_keeps_out_of_catalog_values() {
        let code: EnumCode<AlarmStatus> = EnumCode::from_raw(42);
        assert!(!code.is_valid());
        assert_eq!(code.raw(), 42);
        assert_eq!(format!("{code:?}"), "AlarmStatus(42)");
        assert!(code.get().is_err());

        let armed = EnumCode::new(AlarmStatus::Armed);
        assert_eq!(armed, AlarmStatus::Armed);
        assert_eq!(armed.name(), Ok("Armed"));
        assert_eq!(format!("{armed:?}"), "AlarmStatus::Armed");
    }

    #[test]
    fn default_code_is_unset() {
        let code = EnumCode::<ZoneType>::default();
        assert!(code.is_unset());
        assert!(!code.is_valid());
    }
}
