//! Core catalog model types.
//!
//! These types describe the vehicle data vocabulary itself: which domains
//! exist, which records each domain declares, and the field table of every
//! record. All schemas are `'static`; the top-level entry point is
//! [`Catalog::full()`](crate::Catalog::full).

use std::fmt;

use crate::enums::EnumKind;
use crate::record::Record;
use crate::validation::FieldSpec;

/// Functional grouping of records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Domain {
    /// Static facts about the vehicle.
    Configuration,
    /// Live state while the vehicle is in use.
    RunningStatus,
    /// Wear, fluids and diagnostic counters.
    Maintenance,
    /// Per-occupant preferences.
    Personalization,
    /// Active and passive safety systems.
    DrivingSafety,
    /// Cabin and exterior climate.
    Climate,
    /// Driver assistance and parking.
    VisionAndParking,
}

impl Domain {
    /// All domains, in catalog order.
    pub const ALL: &'static [Domain] = &[
        Domain::Configuration,
        Domain::RunningStatus,
        Domain::Maintenance,
        Domain::Personalization,
        Domain::DrivingSafety,
        Domain::Climate,
        Domain::VisionAndParking,
    ];

    /// Kebab-case identifier used in the schema export and on the command line.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Domain::Configuration => "configuration",
            Domain::RunningStatus => "running-status",
            Domain::Maintenance => "maintenance",
            Domain::Personalization => "personalization",
            Domain::DrivingSafety => "driving-safety",
            Domain::Climate => "climate",
            Domain::VisionAndParking => "vision-and-parking",
        }
    }

    /// Human-readable label.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Domain::Configuration => "Identification & Configuration",
            Domain::RunningStatus => "Running Status",
            Domain::Maintenance => "Maintenance",
            Domain::Personalization => "Personalization",
            Domain::DrivingSafety => "Driving Safety",
            Domain::Climate => "Climate",
            Domain::VisionAndParking => "Vision & Parking",
        }
    }
}

impl fmt::Display for Domain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Declared shape of one record type.
#[derive(Clone, Copy)]
pub struct RecordSchema {
    /// Record type name (e.g. `"Fuel"`).
    pub name: &'static str,
    /// Description.
    pub comment: &'static str,
    /// Domain the record belongs to.
    pub domain: Domain,
    /// Field table, in declaration order.
    pub fields: &'static [FieldSpec],
    /// Builds a default instance, for tooling that needs one without
    /// knowing the Rust type.
    pub blank: fn() -> Box<dyn Record>,
}

impl RecordSchema {
    /// First line of the description.
    #[must_use]
    pub fn summary(&self) -> &'static str {
        self.comment
            .lines()
            .map(str::trim)
            .find(|l| !l.is_empty())
            .unwrap_or("")
    }

    /// Looks up a field by its published name.
    #[must_use]
    pub fn field(&self, name: &str) -> Option<&'static FieldSpec> {
        self.fields.iter().find(|f| f.name == name)
    }

    /// True if any field is a zone reference.
    #[must_use]
    pub fn is_zoned(&self) -> bool {
        self.fields
            .iter()
            .any(|f| f.kind == crate::validation::FieldKind::Zone)
    }
}

impl fmt::Debug for RecordSchema {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RecordSchema")
            .field("name", &self.name)
            .field("domain", &self.domain)
            .field("fields", &self.fields.len())
            .finish_non_exhaustive()
    }
}

/// A domain together with the schemas of its records.
#[derive(Debug, Clone)]
pub struct DomainModule {
    /// The domain.
    pub domain: Domain,
    /// Description.
    pub comment: &'static str,
    /// Record schemas, in catalog order.
    pub records: Vec<&'static RecordSchema>,
}

/// The complete vehicle data catalog.
#[derive(Debug)]
pub struct Catalog {
    /// Catalog version.
    pub version: &'static str,
    /// The vocabulary this catalog is modeled on.
    pub source: &'static str,
    /// Every closed enumeration.
    pub enums: &'static [EnumKind],
    /// All seven domain modules in catalog order.
    pub domains: Vec<DomainModule>,
}

impl Catalog {
    /// Iterates over every record schema, in catalog order.
    pub fn records(&self) -> impl Iterator<Item = &'static RecordSchema> + '_ {
        self.domains.iter().flat_map(|m| m.records.iter().copied())
    }

    /// Looks up a record schema by type name. Returns `None` if not found.
    #[must_use]
    pub fn find_record(&self, name: &str) -> Option<&'static RecordSchema> {
        self.records().find(|r| r.name == name)
    }

    /// Looks up an enumeration by type name. Returns `None` if not found.
    #[must_use]
    pub fn find_enum(&self, name: &str) -> Option<EnumKind> {
        self.enums.iter().copied().find(|k| k.as_str() == name)
    }

    /// Looks up a domain module. Returns `None` if the catalog omits it.
    #[must_use]
    pub fn domain(&self, domain: Domain) -> Option<&DomainModule> {
        self.domains.iter().find(|m| m.domain == domain)
    }

    /// Returns the total number of records across all domains.
    #[must_use]
    pub fn record_count(&self) -> usize {
        self.domains.iter().map(|m| m.records.len()).sum()
    }

    /// Returns the number of closed enumerations.
    #[must_use]
    pub fn enum_count(&self) -> usize {
        self.enums.len()
    }

    /// Returns the total number of declared fields across all records.
    #[must_use]
    pub fn field_count(&self) -> usize {
        self.records().map(|r| r.fields.len()).sum()
    }
}
