//! Zone addressing: where on the vehicle a signal applies.
//!
//! A [`Zone`] is an ordered sequence of axis tokens (the canonical names of
//! [`ZoneType`] members, e.g. `["Front", "Left"]`) plus the zone that maps to
//! the driver's position. Equality is structural and order-sensitive:
//! `["Front", "Left"]` and `["Left", "Front"]` are different zones. Use
//! [`Zone::canonical`] or [`Zone::same_location`] when order should not
//! matter.
//!
//! Canonical axis order puts row axes (`Front`, `Center`, `Rear`) before side
//! axes (`Left`, `Middle`, `Right`).

use std::fmt;

use crate::enums::{ClosedEnum, EnumCode, ZoneType};

/// A malformed zone aggregate.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ZoneError {
    /// An axis token is not the name of a [`ZoneType`] member.
    #[error("invalid zone axis `{axis}`: not a ZoneType name")]
    InvalidZoneAxis {
        /// The offending token.
        axis: String,
    },
    /// The driver code is not a [`ZoneType`] member.
    #[error("driver zone {0} is not a ZoneType")]
    InvalidDriverZone(i32),
}

/// Compound physical location of a signal.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Zone {
    #[cfg_attr(feature = "serde", serde(rename = "value"))]
    axes: Vec<String>,
    driver: EnumCode<ZoneType>,
}

impl Zone {
    /// Builds a zone from axis tokens and the driver zone.
    ///
    /// # Errors
    ///
    /// Returns [`ZoneError::InvalidZoneAxis`] for the first unrecognized
    /// axis token, or [`ZoneError::InvalidDriverZone`] if `driver`
    /// is not a [`ZoneType`] code.
    pub fn new<I, S>(axes: I, driver: impl Into<EnumCode<ZoneType>>) -> Result<Self, ZoneError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let zone = Self {
            axes: axes.into_iter().map(Into::into).collect(),
            driver: driver.into(),
        };
        match zone.violations().into_iter().next() {
            Some(err) => Err(err),
            None => Ok(zone),
        }
    }

    /// Builds a zone from typed axes.
    ///
    /// # Errors
    ///
    /// Same as [`Zone::new`]; typed axes and a typed driver always pass.
    pub fn from_axes(axes: &[ZoneType], driver: ZoneType) -> Result<Self, ZoneError> {
        Self::new(axes.iter().map(|a| a.name()), driver)
    }

    /// Axis tokens in construction order.
    #[must_use]
    pub fn axes(&self) -> &[String] {
        &self.axes
    }

    /// Axis tokens resolved to [`ZoneType`]; unrecognized tokens are skipped.
    pub fn axis_types(&self) -> impl Iterator<Item = ZoneType> + '_ {
        self.axes.iter().filter_map(|a| ZoneType::from_name(a))
    }

    /// The zone that maps to the driver's position.
    #[must_use]
    pub fn driver(&self) -> EnumCode<ZoneType> {
        self.driver
    }

    /// True if `axis` is one of this zone's axes.
    #[must_use]
    pub fn contains(&self, axis: ZoneType) -> bool {
        self.axes.iter().any(|a| a == axis.name())
    }

    /// True if some axis token appears more than once.
    ///
    /// Informational only: a repeated axis does not make a zone invalid.
    #[must_use]
    pub fn has_repeated_axes(&self) -> bool {
        self.axes
            .iter()
            .enumerate()
            .any(|(i, axis)| self.axes[..i].contains(axis))
    }

    /// Every structural problem with this zone.
    ///
    /// Always empty for a zone built by [`Zone::new`]; a zone obtained some
    /// other way (e.g. deserialized) may carry problems.
    #[must_use]
    pub fn violations(&self) -> Vec<ZoneError> {
        let mut errors = Vec::new();
        for axis in &self.axes {
            if ZoneType::from_name(axis).is_none() {
                errors.push(ZoneError::InvalidZoneAxis { axis: axis.clone() });
            }
        }
        if !self.driver.is_valid() {
            errors.push(ZoneError::InvalidDriverZone(self.driver.raw()));
        }
        errors
    }

    /// The same zone with its axes in canonical order.
    ///
    /// Unrecognized tokens keep their relative order after the known axes.
    #[must_use]
    pub fn canonical(&self) -> Zone {
        let mut axes = self.axes.clone();
        axes.sort_by_key(|a| ZoneType::from_name(a).map_or(usize::MAX, canonical_rank));
        Zone {
            axes,
            driver: self.driver,
        }
    }

    /// Order-insensitive comparison: same axes (in any order), same driver.
    #[must_use]
    pub fn same_location(&self, other: &Zone) -> bool {
        self.canonical() == other.canonical()
    }
}

fn canonical_rank(axis: ZoneType) -> usize {
    match axis {
        ZoneType::Front => 0,
        ZoneType::Center => 1,
        ZoneType::Rear => 2,
        ZoneType::Left => 3,
        ZoneType::Middle => 4,
        ZoneType::Right => 5,
    }
}

impl fmt::Display for Zone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}]", self.axes.join(","))?;
        match self.driver.name() {
            Ok(name) => write!(f, " driver={name}"),
            Err(_) => write!(f, " driver=#{}", self.driver.raw()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_axis_order() {
        let zone = Zone::new(["Rear", "Right"], ZoneType::Front).unwrap();
        assert_eq!(zone.axes(), ["Rear", "Right"]);
        assert_eq!(
            zone.axis_types().collect::<Vec<_>>(),
            vec![ZoneType::Rear, ZoneType::Right]
        );
    }

    #[test]
    fn rejects_unknown_axis() {
        let err = Zone::new(["Front", "Roof"], ZoneType::Front).unwrap_err();
        assert_eq!(
            err,
            ZoneError::InvalidZoneAxis {
                axis: "Roof".into()
            }
        );
    }

    #[test]
    fn axis_tokens_are_case_sensitive() {
        assert!(Zone::new(["front"], ZoneType::Front).is_err());
    }

    #[test]
    fn repeated_axes_are_kept() {
        let zone = Zone::new(["Left", "Left"], ZoneType::Front).unwrap();
        assert_eq!(zone.axes(), ["Left", "Left"]);
        assert!(zone.violations().is_empty());
        assert!(zone.has_repeated_axes());
        assert!(!Zone::new(["Front", "Left"], ZoneType::Front)
            .unwrap()
            .has_repeated_axes());
    }

    #[test]
    fn rejects_invalid_driver() {
        assert_eq!(
            Zone::new(["Front"], 0).unwrap_err(),
            ZoneError::InvalidDriverZone(0)
        );
        assert_eq!(
            Zone::new(["Front"], 7).unwrap_err(),
            ZoneError::InvalidDriverZone(7)
        );
    }

    #[test]
    fn empty_axes_are_allowed() {
        let zone = Zone::new(Vec::<String>::new(), ZoneType::Front).unwrap();
        assert!(zone.axes().is_empty());
    }

    #[test]
    fn canonical_puts_rows_before_sides() {
        let zone = Zone::new(["Left", "Front"], ZoneType::Front).unwrap();
        assert_eq!(zone.canonical().axes(), ["Front", "Left"]);
        assert_eq!(zone.canonical().canonical(), zone.canonical());
    }

    #[test]
    fn same_location_ignores_order_but_not_driver() {
        let a = Zone::new(["Front", "Left"], ZoneType::Front).unwrap();
        let b = Zone::new(["Left", "Front"], ZoneType::Front).unwrap();
        let c = Zone::new(["Left", "Front"], ZoneType::Rear).unwrap();
        assert_ne!(a, b);
        assert!(a.same_location(&b));
        assert!(!a.same_location(&c));
    }

    #[test]
    fn display_lists_axes_and_driver() {
        let zone = Zone::from_axes(&[ZoneType::Front, ZoneType::Left], ZoneType::Front).unwrap();
        assert_eq!(zone.to_string(), "[Front,Left] driver=Front");
    }
}
