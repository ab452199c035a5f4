//! The shared walker that checks a record against its field table.

use std::fmt;

use crate::record::Record;
use crate::validation::error::{Reason, ValidationError};
use crate::validation::field::{FieldKind, FieldSpec};
use crate::validation::observe::Observed;
use crate::zone::{Zone, ZoneError};

/// Accumulates every violation found in a record, including nested records.
///
/// Field paths are built as the walker descends: sequence elements are
/// addressed as `Field[i]` and fields of nested records as `Field[i].Sub`.
#[derive(Debug, Default)]
pub struct Validator {
    prefix: String,
    violations: Vec<ValidationError>,
}

impl Validator {
    /// Empty validator.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Checks every declared field of `record`, then its cross-field rules.
    ///
    /// A declared field with no observed value is a `KindMismatch`; an
    /// observed value past the end of the field table is an
    /// `UndeclaredValue` addressed by its position.
    pub fn check<R: Record + ?Sized>(&mut self, record: &R) {
        let schema = record.schema();
        let values = record.observe();
        if values.len() != schema.fields.len() {
            tracing::warn!(
                record = schema.name,
                declared = schema.fields.len(),
                observed = values.len(),
                "record observes a different number of fields than it declares"
            );
        }
        for (spec, value) in schema.fields.iter().zip(&values) {
            self.field(spec, value);
        }
        for spec in schema.fields.iter().skip(values.len()) {
            let expected = spec.kind;
            self.push(spec.name, Reason::KindMismatch { expected }, "nothing");
        }
        for (i, value) in values.iter().enumerate().skip(schema.fields.len()) {
            self.push(&format!("#{i}"), Reason::UndeclaredValue, value);
        }
        record.cross_check(self);
    }

    /// Records a violated multi-field rule against `field`.
    pub fn cross_field(&mut self, field: &str, rule: &'static str, observed: impl fmt::Display) {
        self.push(field, Reason::CrossFieldViolation { rule }, observed);
    }

    /// Violations found so far.
    #[must_use]
    pub fn violations(&self) -> &[ValidationError] {
        &self.violations
    }

    /// Consumes the validator, returning every violation in field order.
    #[must_use]
    pub fn finish(self) -> Vec<ValidationError> {
        self.violations
    }

    fn field(&mut self, spec: &FieldSpec, value: &Observed<'_>) {
        if !spec.sequence {
            self.value(spec, spec.name, value);
            return;
        }
        match value {
            Observed::Sequence(items) => {
                for (i, item) in items.iter().enumerate() {
                    self.value(spec, &format!("{}[{i}]", spec.name), item);
                }
            }
            other => self.mismatch(spec, spec.name, other),
        }
    }

    fn value(&mut self, spec: &FieldSpec, path: &str, value: &Observed<'_>) {
        match (spec.kind, value) {
            (FieldKind::Flag, Observed::Flag(_)) | (FieldKind::Timestamp, Observed::Timestamp(_)) => {}
            (FieldKind::Integer, Observed::Integer(n)) => self.integer(spec, path, *n),
            (FieldKind::Float, Observed::Float(x)) => self.float(spec, path, *x),
            (FieldKind::Text(rule), Observed::Text(text)) => {
                if !rule.accepts(text) {
                    self.push(path, Reason::InvalidText { rule }, value);
                }
            }
            (FieldKind::Code(kind), Observed::Code(actual, code)) if kind == *actual => {
                if !kind.is_valid(*code) {
                    self.push(path, Reason::UnknownEnumValue { kind }, code);
                }
            }
            (FieldKind::Zone, Observed::Zone(zone)) => {
                if let Some(zone) = zone {
                    self.zone(path, zone);
                }
            }
            (FieldKind::Nested(name), Observed::Record(inner)) if inner.schema().name == name => {
                let mark = self.prefix.len();
                self.prefix.push_str(path);
                self.prefix.push('.');
                self.check(*inner);
                self.prefix.truncate(mark);
            }
            (_, other) => self.mismatch(spec, path, other),
        }
    }

    fn integer(&mut self, spec: &FieldSpec, path: &str, n: i128) {
        if spec.resettable && n == 0 {
            return;
        }
        if let Some(bounds) = spec.bounds {
            if n < i128::from(bounds.min) || n > i128::from(bounds.max) {
                let reason = Reason::OutOfRange {
                    bounds: Some(bounds),
                    unit: spec.unit,
                };
                self.push(path, reason, n);
            }
        }
    }

    #[allow(clippy::cast_precision_loss)]
    fn float(&mut self, spec: &FieldSpec, path: &str, x: f64) {
        if !x.is_finite() {
            let reason = Reason::OutOfRange {
                bounds: None,
                unit: spec.unit,
            };
            self.push(path, reason, x);
            return;
        }
        if spec.resettable && x == 0.0 {
            return;
        }
        if let Some(bounds) = spec.bounds {
            if x < bounds.min as f64 || x > bounds.max as f64 {
                let reason = Reason::OutOfRange {
                    bounds: Some(bounds),
                    unit: spec.unit,
                };
                self.push(path, reason, x);
            }
        }
    }

    fn zone(&mut self, path: &str, zone: &Zone) {
        for err in zone.violations() {
            match err {
                ZoneError::InvalidZoneAxis { axis } => {
                    let observed = format!("{zone}");
                    self.push(path, Reason::InvalidZoneAxis { axis }, observed);
                }
                ZoneError::InvalidDriverZone(code) => {
                    self.push(path, Reason::InvalidDriverZone, code);
                }
            }
        }
    }

    fn mismatch(&mut self, spec: &FieldSpec, path: &str, value: &Observed<'_>) {
        let expected = spec.kind;
        self.push(path, Reason::KindMismatch { expected }, format!("{value:?}"));
    }

    fn push(&mut self, field: &str, reason: Reason, observed: impl fmt::Display) {
        self.violations.push(ValidationError {
            field: format!("{}{field}", self.prefix),
            reason,
            observed: observed.to_string(),
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Domain, RecordSchema};
    use crate::validation::Observe;

    // Minimal records with a bounded field, so nested violations are reachable.

    #[derive(Debug, Default)]
    struct Gauge {
        level: i16,
    }

    fn blank_gauge() -> Box<dyn Record> {
        Box::<Gauge>::default()
    }

    static GAUGE: RecordSchema = RecordSchema {
        name: "Gauge",
        comment: "Bounded gauge.",
        domain: Domain::Maintenance,
        fields: &[FieldSpec::percent("Level")],
        blank: blank_gauge,
    };

    impl Record for Gauge {
        fn schema(&self) -> &'static RecordSchema {
            &GAUGE
        }

        fn observe(&self) -> Vec<Observed<'_>> {
            vec![self.level.view()]
        }
    }

    impl Observe for Gauge {
        fn view(&self) -> Observed<'_> {
            Observed::Record(self)
        }
    }

    #[derive(Debug, Default)]
    struct Panel {
        before: i16,
        gauges: Vec<Gauge>,
        after: i16,
    }

    fn blank_panel() -> Box<dyn Record> {
        Box::<Panel>::default()
    }

    static PANEL: RecordSchema = RecordSchema {
        name: "Panel",
        comment: "Gauges between two bounded fields.",
        domain: Domain::Maintenance,
        fields: &[
            FieldSpec::percent("Before"),
            FieldSpec::nested("Gauges", "Gauge").repeated(),
            FieldSpec::percent("After"),
        ],
        blank: blank_panel,
    };

    impl Record for Panel {
        fn schema(&self) -> &'static RecordSchema {
            &PANEL
        }

        fn observe(&self) -> Vec<Observed<'_>> {
            vec![self.before.view(), self.gauges.view(), self.after.view()]
        }
    }

    /// Declares `Panel`'s fields but observes fewer or more values.
    #[derive(Debug)]
    struct Misdeclared {
        observed: usize,
    }

    impl Record for Misdeclared {
        fn schema(&self) -> &'static RecordSchema {
            &PANEL
        }

        fn observe(&self) -> Vec<Observed<'_>> {
            (0..self.observed).map(|_| Observed::Integer(200)).collect()
        }
    }

    fn run<R: Record>(record: &R) -> Vec<(String, &'static str)> {
        let mut validator = Validator::new();
        validator.check(record);
        validator
            .finish()
            .into_iter()
            .map(|e| (e.field, e.reason.category()))
            .collect()
    }

    #[test]
    fn nested_violation_is_addressed_by_index() {
        let panel = Panel {
            before: 10,
            gauges: vec![Gauge { level: 50 }, Gauge { level: 120 }],
            after: 10,
        };
        let errors = run(&panel);
        assert_eq!(errors, vec![("Gauges[1].Level".to_owned(), "OutOfRange")]);
    }

    #[test]
    fn parent_and_nested_violations_share_one_pass() {
        let panel = Panel {
            before: 150,
            gauges: vec![Gauge { level: -1 }, Gauge { level: 20 }, Gauge { level: 101 }],
            after: 101,
        };
        let errors = run(&panel);
        assert_eq!(
            errors,
            vec![
                ("Before".to_owned(), "OutOfRange"),
                ("Gauges[0].Level".to_owned(), "OutOfRange"),
                ("Gauges[2].Level".to_owned(), "OutOfRange"),
                ("After".to_owned(), "OutOfRange"),
            ]
        );
    }

    #[test]
    fn prefix_is_restored_after_nested_record() {
        let panel = Panel {
            before: 0,
            gauges: vec![Gauge { level: 101 }],
            after: 101,
        };
        let errors = run(&panel);
        assert_eq!(errors[1].0, "After");
    }

    #[test]
    fn missing_observed_value_is_a_kind_mismatch() {
        let errors = run(&Misdeclared { observed: 2 });
        assert_eq!(
            errors,
            vec![
                ("Before".to_owned(), "OutOfRange"),
                ("Gauges".to_owned(), "KindMismatch"),
                ("After".to_owned(), "KindMismatch"),
            ]
        );
    }

    #[test]
    fn extra_observed_value_is_undeclared() {
        let errors = run(&Misdeclared { observed: 4 });
        assert_eq!(errors.len(), 4);
        assert_eq!(errors[3], ("#3".to_owned(), "UndeclaredValue"));
    }
}
