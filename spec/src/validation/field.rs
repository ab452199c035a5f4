//! Field metadata: the single declaration every record field is checked against.

use std::fmt;

use crate::enums::EnumKind;
use crate::unit::Unit;

/// Inclusive numeric bounds, in the field's canonical unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Bounds {
    /// Smallest accepted value.
    pub min: i64,
    /// Largest accepted value.
    pub max: i64,
}

impl fmt::Display for Bounds {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.min, self.max)
    }
}

/// Format rule for text fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextRule {
    /// Any string, including empty.
    Any,
    /// ISO 3779 identifier: exactly `len` digits or uppercase letters, excluding `I`, `O`, `Q`.
    Iso3779 {
        /// Required length.
        len: usize,
    },
    /// ISO 639-1 language code: two lowercase ASCII letters.
    Iso639,
    /// One of a fixed set of tokens.
    OneOf(&'static [&'static str]),
}

impl TextRule {
    /// True if `text` satisfies the rule.
    #[must_use]
    pub fn accepts(self, text: &str) -> bool {
        match self {
            TextRule::Any => true,
            TextRule::Iso3779 { len } => {
                text.len() == len
                    && text.bytes().all(|b| {
                        b.is_ascii_digit() || (b.is_ascii_uppercase() && !matches!(b, b'I' | b'O' | b'Q'))
                    })
            }
            TextRule::Iso639 => text.len() == 2 && text.bytes().all(|b| b.is_ascii_lowercase()),
            TextRule::OneOf(tokens) => tokens.iter().any(|t| *t == text),
        }
    }
}

impl fmt::Display for TextRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TextRule::Any => f.write_str("any text"),
            TextRule::Iso3779 { len } => write!(f, "{len} ISO 3779 characters"),
            TextRule::Iso639 => f.write_str("an ISO 639-1 language code"),
            TextRule::OneOf(tokens) => write!(f, "one of {}", tokens.join(", ")),
        }
    }
}

/// Semantic type of a field (of each element, for sequence fields).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// True binary flag.
    Flag,
    /// Integer quantity.
    Integer,
    /// Floating-point quantity; must be finite.
    Float,
    /// Text with a format rule.
    Text(TextRule),
    /// Member of a closed enumeration.
    Code(EnumKind),
    /// Optional zone reference.
    Zone,
    /// Point in time (UTC).
    Timestamp,
    /// Nested record of the named type.
    Nested(&'static str),
}

impl FieldKind {
    /// Short name used in the schema export.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            FieldKind::Flag => "flag",
            FieldKind::Integer => "integer",
            FieldKind::Float => "float",
            FieldKind::Text(_) => "text",
            FieldKind::Code(_) => "enum",
            FieldKind::Zone => "zone",
            FieldKind::Timestamp => "timestamp",
            FieldKind::Nested(_) => "record",
        }
    }

    /// True for integer and float kinds.
    #[must_use]
    pub fn is_numeric(self) -> bool {
        matches!(self, FieldKind::Integer | FieldKind::Float)
    }
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldKind::Code(kind) => write!(f, "enum {kind}"),
            FieldKind::Nested(record) => write!(f, "record {record}"),
            FieldKind::Text(rule) => write!(f, "text ({rule})"),
            other => f.write_str(other.as_str()),
        }
    }
}

/// Declared constraints of one record field.
///
/// Built with the `const fn` constructors so a record's whole field table
/// is a compile-time constant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    /// Field name as published in the catalog (PascalCase).
    pub name: &'static str,
    /// Semantic type.
    pub kind: FieldKind,
    /// Canonical unit ([`Unit::None`] for non-numeric fields).
    pub unit: Unit,
    /// Accepted range, if bounded.
    pub bounds: Option<Bounds>,
    /// An explicit 0 is a reset and always accepted.
    pub resettable: bool,
    /// The field is an ordered sequence of `kind` values.
    pub sequence: bool,
}

impl FieldSpec {
    /// Field of the given kind with no unit or bounds.
    #[must_use]
    pub const fn new(name: &'static str, kind: FieldKind) -> Self {
        Self {
            name,
            kind,
            unit: Unit::None,
            bounds: None,
            resettable: false,
            sequence: false,
        }
    }

    /// Boolean flag.
    #[must_use]
    pub const fn flag(name: &'static str) -> Self {
        Self::new(name, FieldKind::Flag)
    }

    /// Unbounded integer quantity.
    #[must_use]
    pub const fn number(name: &'static str, unit: Unit) -> Self {
        Self {
            unit,
            ..Self::new(name, FieldKind::Integer)
        }
    }

    /// Unbounded float quantity.
    #[must_use]
    pub const fn real(name: &'static str, unit: Unit) -> Self {
        Self {
            unit,
            ..Self::new(name, FieldKind::Float)
        }
    }

    /// Percentage in `[0, 100]`.
    #[must_use]
    pub const fn percent(name: &'static str) -> Self {
        Self::number(name, Unit::Percentage).within(0, 100)
    }

    /// Signed percentage in `[-100, 100]`.
    #[must_use]
    pub const fn signed_percent(name: &'static str) -> Self {
        Self::number(name, Unit::Percentage).within(-100, 100)
    }

    /// Intensity level in `[0, 10]`.
    #[must_use]
    pub const fn level(name: &'static str) -> Self {
        Self::number(name, Unit::Level).within(0, 10)
    }

    /// Member of a closed enumeration.
    #[must_use]
    pub const fn code(name: &'static str, kind: EnumKind) -> Self {
        Self::new(name, FieldKind::Code(kind))
    }

    /// Text field.
    #[must_use]
    pub const fn text(name: &'static str, rule: TextRule) -> Self {
        Self::new(name, FieldKind::Text(rule))
    }

    /// Optional zone reference.
    #[must_use]
    pub const fn zone(name: &'static str) -> Self {
        Self::new(name, FieldKind::Zone)
    }

    /// UTC timestamp.
    #[must_use]
    pub const fn timestamp(name: &'static str) -> Self {
        Self::new(name, FieldKind::Timestamp)
    }

    /// Nested record.
    #[must_use]
    pub const fn nested(name: &'static str, record: &'static str) -> Self {
        Self::new(name, FieldKind::Nested(record))
    }

    /// Restricts the field to `[min, max]`.
    #[must_use]
    pub const fn within(self, min: i64, max: i64) -> Self {
        Self {
            bounds: Some(Bounds { min, max }),
            ..self
        }
    }

    /// Marks the field as accepting an explicit 0 reset.
    #[must_use]
    pub const fn resettable(self) -> Self {
        Self {
            resettable: true,
            ..self
        }
    }

    /// Turns the field into an ordered sequence of its kind.
    #[must_use]
    pub const fn repeated(self) -> Self {
        Self {
            sequence: true,
            ..self
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn percent_is_bounded_to_one_hundred() {
        let spec = FieldSpec::percent("Level");
        assert_eq!(spec.unit, Unit::Percentage);
        assert_eq!(spec.bounds, Some(Bounds { min: 0, max: 100 }));
        assert!(!spec.resettable);
    }

    #[test]
    fn builders_compose() {
        const SPEC: FieldSpec = FieldSpec::number("DoorsCount", Unit::None)
            .within(0, 3)
            .repeated();
        assert!(SPEC.sequence);
        assert_eq!(SPEC.bounds, Some(Bounds { min: 0, max: 3 }));
    }

    #[test]
    fn vin_rule_excludes_ambiguous_letters() {
        let rule = TextRule::Iso3779 { len: 17 };
        assert!(rule.accepts("1HGCM82633A004352"));
        assert!(!rule.accepts("1HGCM82633A00435"));
        assert!(!rule.accepts("1HGCM82633A00435O"));
        assert!(!rule.accepts("1hgcm82633a004352"));
    }

    #[test]
    fn language_rule_is_two_lowercase_letters() {
        assert!(TextRule::Iso639.accepts("en"));
        assert!(!TextRule::Iso639.accepts("EN"));
        assert!(!TextRule::Iso639.accepts("eng"));
    }

    #[test]
    fn one_of_matches_exact_tokens() {
        let rule = TextRule::OneOf(&["km", "mile"]);
        assert!(rule.accepts("km"));
        assert!(!rule.accepts("KM"));
        assert_eq!(rule.to_string(), "one of km, mile");
    }
}
