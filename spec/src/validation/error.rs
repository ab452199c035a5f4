//! Structured validation failures.

use std::fmt;

use crate::enums::EnumKind;
use crate::unit::Unit;
use crate::validation::field::{Bounds, FieldKind, TextRule};

/// Why a field was rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reason {
    /// The code is not a member of the declared enumeration.
    UnknownEnumValue {
        /// The declared enumeration.
        kind: EnumKind,
    },
    /// A zone axis token is not the name of a `ZoneType` member.
    InvalidZoneAxis {
        /// The offending token.
        axis: String,
    },
    /// A zone's driver code is not a `ZoneType`.
    InvalidDriverZone,
    /// A numeric value lies outside its bounds, or a float is not finite.
    OutOfRange {
        /// Declared bounds; `None` when the field is unbounded but the value is not finite.
        bounds: Option<Bounds>,
        /// Canonical unit of the field.
        unit: Unit,
    },
    /// A multi-field rule does not hold.
    CrossFieldViolation {
        /// The rule, stated as the invariant that should hold.
        rule: &'static str,
    },
    /// Text does not match its format rule.
    InvalidText {
        /// The rule the text must satisfy.
        rule: TextRule,
    },
    /// The value handed to the validator does not have the declared kind.
    KindMismatch {
        /// The declared kind.
        expected: FieldKind,
    },
    /// The record observes a value past the end of its field table.
    UndeclaredValue,
}

impl Reason {
    /// Name of the failure category.
    #[must_use]
    pub fn category(&self) -> &'static str {
        match self {
            Reason::UnknownEnumValue { .. } => "UnknownEnumValue",
            Reason::InvalidZoneAxis { .. } => "InvalidZoneAxis",
            Reason::InvalidDriverZone => "InvalidDriverZone",
            Reason::OutOfRange { .. } => "OutOfRange",
            Reason::CrossFieldViolation { .. } => "CrossFieldViolation",
            Reason::InvalidText { .. } => "InvalidText",
            Reason::KindMismatch { .. } => "KindMismatch",
            Reason::UndeclaredValue => "UndeclaredValue",
        }
    }
}

impl fmt::Display for Reason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Reason::UnknownEnumValue { kind } => write!(f, "not a member of {kind}"),
            Reason::InvalidZoneAxis { axis } => {
                write!(f, "invalid zone axis `{axis}`: not a ZoneType name")
            }
            Reason::InvalidDriverZone => f.write_str("driver zone is not a ZoneType"),
            Reason::OutOfRange {
                bounds: Some(bounds),
                unit,
            } => write!(f, "outside {bounds} {unit}"),
            Reason::OutOfRange { bounds: None, unit } => write!(f, "not a finite {unit} value"),
            Reason::CrossFieldViolation { rule } => write!(f, "requires {rule}"),
            Reason::InvalidText { rule } => write!(f, "expected {rule}"),
            Reason::KindMismatch { expected } => write!(f, "declared as {expected}"),
            Reason::UndeclaredValue => f.write_str("no field declared at this position"),
        }
    }
}

/// One violated invariant.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{field}: {reason} (observed {observed})")]
pub struct ValidationError {
    /// Field path, e.g. `Level`, `DoorsCount[1]`, `Meters[0].AverageSpeed`.
    pub field: String,
    /// What went wrong.
    pub reason: Reason,
    /// Rendering of the offending value.
    pub observed: String,
}

/// A record that failed validation, with every violation found.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{record} rejected with {} violation(s): {}", .violations.len(), summarize(.violations))]
pub struct Rejected {
    /// Record type name.
    pub record: &'static str,
    /// Every violated invariant, in field order.
    pub violations: Vec<ValidationError>,
}

fn summarize(violations: &[ValidationError]) -> String {
    violations
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn out_of_range_message_names_bounds_and_unit() {
        let err = ValidationError {
            field: "Level".into(),
            reason: Reason::OutOfRange {
                bounds: Some(Bounds { min: 0, max: 100 }),
                unit: Unit::Percentage,
            },
            observed: "101".into(),
        };
        assert_eq!(err.to_string(), "Level: outside [0, 100] % (observed 101)");
    }

    #[test]
    fn rejected_lists_every_violation() {
        let rejected = Rejected {
            record: "Door",
            violations: vec![
                ValidationError {
                    field: "Status".into(),
                    reason: Reason::UnknownEnumValue {
                        kind: EnumKind::DoorOpenStatus,
                    },
                    observed: "9".into(),
                },
                ValidationError {
                    field: "Zone".into(),
                    reason: Reason::InvalidDriverZone,
                    observed: "0".into(),
                },
            ],
        };
        let message = rejected.to_string();
        assert!(message.starts_with("Door rejected with 2 violation(s)"));
        assert!(message.contains("Status: not a member of DoorOpenStatus"));
        assert!(message.contains("Zone: driver zone is not a ZoneType"));
    }

    #[test]
    fn categories_match_taxonomy() {
        assert_eq!(
            Reason::CrossFieldViolation { rule: "x" }.category(),
            "CrossFieldViolation"
        );
        assert_eq!(Reason::InvalidDriverZone.category(), "InvalidDriverZone");
    }
}
