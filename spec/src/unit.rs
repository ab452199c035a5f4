//! Canonical units of measure.
//!
//! Every numeric field is stored and validated in exactly one unit. Nothing
//! in this crate converts between units.

use std::fmt;

/// Percentage, normalized to a single representation across the catalog.
///
/// Bounded to `[0, 100]` (or `[-100, 100]` for signed positions) by field
/// metadata, not by the storage type.
pub type Percent = i16;

/// Unit of a numeric field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Unit {
    /// Dimensionless or non-numeric.
    None,
    /// Millimeters.
    Millimeters,
    /// Meters.
    Meters,
    /// Meters per hour.
    MetersPerHour,
    /// Kilometers per hour.
    KilometersPerHour,
    /// Rotations per minute.
    RotationsPerMinute,
    /// Newton meters.
    NewtonMeters,
    /// Percentage.
    Percentage,
    /// Milliliters.
    Milliliters,
    /// Milliliters per 100 kilometers.
    MillilitersPer100Km,
    /// Seconds.
    Seconds,
    /// Degrees Celsius.
    Celsius,
    /// Kilopascals.
    Kilopascals,
    /// Hectopascals.
    Hectopascals,
    /// Volts.
    Volts,
    /// Amperes.
    Amperes,
    /// Centimeters per second squared.
    CentimetersPerSecondSquared,
    /// Degrees.
    Degrees,
    /// Degrees per second.
    DegreesPerSecond,
    /// Ticks per second.
    TicksPerSecond,
    /// Discrete intensity level (0: off, 10: maximum).
    Level,
}

impl Unit {
    /// Lowercase unit name used in the schema export.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Unit::None => "none",
            Unit::Millimeters => "millimeters",
            Unit::Meters => "meters",
            Unit::MetersPerHour => "meters-per-hour",
            Unit::KilometersPerHour => "kilometers-per-hour",
            Unit::RotationsPerMinute => "rotations-per-minute",
            Unit::NewtonMeters => "newton-meters",
            Unit::Percentage => "percentage",
            Unit::Milliliters => "milliliters",
            Unit::MillilitersPer100Km => "milliliters-per-100-kilometers",
            Unit::Seconds => "seconds",
            Unit::Celsius => "celsius",
            Unit::Kilopascals => "kilopascals",
            Unit::Hectopascals => "hectopascals",
            Unit::Volts => "volts",
            Unit::Amperes => "amperes",
            Unit::CentimetersPerSecondSquared => "centimeters-per-second-squared",
            Unit::Degrees => "degrees",
            Unit::DegreesPerSecond => "degrees-per-second",
            Unit::TicksPerSecond => "ticks-per-second",
            Unit::Level => "level",
        }
    }

    /// Short symbol for messages.
    #[must_use]
    pub fn symbol(self) -> &'static str {
        match self {
            Unit::None => "",
            Unit::Millimeters => "mm",
            Unit::Meters => "m",
            Unit::MetersPerHour => "m/h",
            Unit::KilometersPerHour => "km/h",
            Unit::RotationsPerMinute => "rpm",
            Unit::NewtonMeters => "N·m",
            Unit::Percentage => "%",
            Unit::Milliliters => "mL",
            Unit::MillilitersPer100Km => "mL/100km",
            Unit::Seconds => "s",
            Unit::Celsius => "°C",
            Unit::Kilopascals => "kPa",
            Unit::Hectopascals => "hPa",
            Unit::Volts => "V",
            Unit::Amperes => "A",
            Unit::CentimetersPerSecondSquared => "cm/s²",
            Unit::Degrees => "°",
            Unit::DegreesPerSecond => "°/s",
            Unit::TicksPerSecond => "ticks/s",
            Unit::Level => "level",
        }
    }

    /// True for units that only make sense on numeric fields.
    #[must_use]
    pub fn is_numeric(self) -> bool {
        self != Unit::None
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}
