//! Record traits and the validated hand-off wrapper.

use std::fmt;
use std::ops::Deref;

use crate::model::RecordSchema;
use crate::validation::{self, Observed, Rejected, ValidationError, Validator};

/// A structured bundle of signal fields with a declared schema.
///
/// Object safe, so tooling can walk any record through `&dyn Record`.
pub trait Record: fmt::Debug + Send + Sync {
    /// The record's declared schema.
    fn schema(&self) -> &'static RecordSchema;

    /// The validator's view of each field, in schema order.
    fn observe(&self) -> Vec<Observed<'_>>;

    /// Multi-field rules. Most records have none.
    fn cross_check(&self, _validator: &mut Validator) {}

    /// Every violated invariant; empty when the record is valid.
    fn validate(&self) -> Vec<ValidationError> {
        validation::validate(self)
    }
}

/// A concrete record type.
pub trait Signal: Record + Clone + Default + Sized + 'static {
    /// The declared schema of this record type.
    fn record_schema() -> &'static RecordSchema;

    /// Validates `self` and wraps it for hand-off.
    ///
    /// # Errors
    ///
    /// Returns [`Rejected`] listing every violation if the record is invalid.
    fn checked(self) -> Result<Validated<Self>, Rejected> {
        Validated::new(self)
    }
}

/// A record that passed validation.
///
/// The only value a producer hands to a consumer. Immutable: changing a
/// field goes through [`Validated::update`] or [`Validated::into_inner`],
/// and the result must be validated again.
#[derive(Debug, Clone, PartialEq)]
pub struct Validated<T>(T);

impl<T: Signal> Validated<T> {
    /// Validates `record`. Never partially succeeds.
    ///
    /// # Errors
    ///
    /// Returns [`Rejected`] listing every violation if the record is invalid.
    pub fn new(record: T) -> Result<Self, Rejected> {
        let violations = record.validate();
        if violations.is_empty() {
            return Ok(Self(record));
        }
        let name = T::record_schema().name;
        tracing::debug!(
            record = name,
            violations = violations.len(),
            first = %violations[0],
            "record rejected"
        );
        Err(Rejected {
            record: name,
            violations,
        })
    }

    /// Applies `change` to a copy of the record and validates the result.
    ///
    /// # Errors
    ///
    /// Returns [`Rejected`] if the changed record is invalid; `self` is
    /// consumed either way.
    pub fn update(self, change: impl FnOnce(&mut T)) -> Result<Self, Rejected> {
        let mut record = self.0;
        change(&mut record);
        Self::new(record)
    }
}

impl<T> Validated<T> {
    /// Borrows the validated record.
    #[must_use]
    pub fn get(&self) -> &T {
        &self.0
    }

    /// Unwraps the record, giving up the validity guarantee.
    #[must_use]
    pub fn into_inner(self) -> T {
        self.0
    }
}

impl<T> Deref for Validated<T> {
    type Target = T;

    fn deref(&self) -> &T {
        &self.0
    }
}

impl<T> AsRef<T> for Validated<T> {
    fn as_ref(&self) -> &T {
        &self.0
    }
}

#[cfg(feature = "serde")]
impl<T: serde::Serialize> serde::Serialize for Validated<T> {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.0.serialize(serializer)
    }
}

#[cfg(feature = "serde")]
impl<'de, T> serde::Deserialize<'de> for Validated<T>
where
    T: Signal + serde::Deserialize<'de>,
{
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let record = T::deserialize(deserializer)?;
        Self::new(record).map_err(serde::de::Error::custom)
    }
}
