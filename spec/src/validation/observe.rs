//! Uniform view of field values for the validator.

use std::fmt;

use chrono::{DateTime, Utc};

use crate::enums::{ClosedEnum, EnumCode, EnumKind};
use crate::record::Record;
use crate::zone::Zone;

/// A field value as seen by the [`Validator`](crate::validation::Validator).
#[derive(Clone)]
pub enum Observed<'a> {
    /// Boolean.
    Flag(bool),
    /// Any integer, widened.
    Integer(i128),
    /// Float.
    Float(f64),
    /// Text.
    Text(&'a str),
    /// Raw enumeration code with its declared enumeration.
    Code(EnumKind, i32),
    /// Zone reference, absent or present.
    Zone(Option<&'a Zone>),
    /// UTC timestamp.
    Timestamp(DateTime<Utc>),
    /// Nested record.
    Record(&'a dyn Record),
    /// Ordered sequence.
    Sequence(Vec<Observed<'a>>),
}

impl Observed<'_> {
    /// Kind name of the observed value, for diagnostics.
    #[must_use]
    pub fn shape(&self) -> &'static str {
        match self {
            Observed::Flag(_) => "flag",
            Observed::Integer(_) => "integer",
            Observed::Float(_) => "float",
            Observed::Text(_) => "text",
            Observed::Code(..) => "enum",
            Observed::Zone(_) => "zone",
            Observed::Timestamp(_) => "timestamp",
            Observed::Record(_) => "record",
            Observed::Sequence(_) => "sequence",
        }
    }
}

impl fmt::Display for Observed<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Observed::Flag(b) => write!(f, "{b}"),
            Observed::Integer(n) => write!(f, "{n}"),
            Observed::Float(x) => write!(f, "{x}"),
            Observed::Text(s) => write!(f, "{s:?}"),
            Observed::Code(_, code) => write!(f, "{code}"),
            Observed::Zone(Some(zone)) => write!(f, "{zone}"),
            Observed::Zone(None) => f.write_str("no zone"),
            Observed::Timestamp(t) => write!(f, "{}", t.to_rfc3339()),
            Observed::Record(r) => write!(f, "{}", r.schema().name),
            Observed::Sequence(items) => write!(f, "{} item(s)", items.len()),
        }
    }
}

impl fmt::Debug for Observed<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({self})", self.shape())
    }
}

/// Produces the validator's view of a field.
pub trait Observe {
    /// The value as the validator sees it.
    fn view(&self) -> Observed<'_>;
}

macro_rules! observe_integer {
    ( $( $ty:ty ),+ ) => {
        $(
            impl Observe for $ty {
                fn view(&self) -> Observed<'_> {
                    Observed::Integer(i128::from(*self))
                }
            }
        )+
    };
}

observe_integer!(u8, u16, u32, u64, i8, i16, i32, i64);

impl Observe for bool {
    fn view(&self) -> Observed<'_> {
        Observed::Flag(*self)
    }
}

impl Observe for f64 {
    fn view(&self) -> Observed<'_> {
        Observed::Float(*self)
    }
}

impl Observe for String {
    fn view(&self) -> Observed<'_> {
        Observed::Text(self)
    }
}

impl<E: ClosedEnum> Observe for EnumCode<E> {
    fn view(&self) -> Observed<'_> {
        Observed::Code(E::KIND, self.raw())
    }
}

impl Observe for Option<Zone> {
    fn view(&self) -> Observed<'_> {
        Observed::Zone(self.as_ref())
    }
}

impl Observe for DateTime<Utc> {
    fn view(&self) -> Observed<'_> {
        Observed::Timestamp(*self)
    }
}

impl<T: Observe> Observe for Vec<T> {
    fn view(&self) -> Observed<'_> {
        Observed::Sequence(self.iter().map(Observe::view).collect())
    }
}
