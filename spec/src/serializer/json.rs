//! JSON serializer for the vehicle data catalog.
//!
//! Produces a single document with an `enums` array (every closed
//! enumeration with its members and codes) and a `domains` array (every
//! record with its field table), in catalog order.

use serde_json::{json, Map, Value};

use crate::enums::EnumKind;
use crate::model::{Catalog, RecordSchema};
use crate::validation::{FieldKind, FieldSpec, TextRule};

/// File name of the exported schema artifact.
pub const ARTIFACT_NAME: &str = "vehicle-data.schema.json";

/// Serializes the catalog schema to a JSON `Value`.
///
/// The returned value can be pretty-printed with [`serde_json::to_string_pretty`].
#[must_use]
pub fn to_json(catalog: &Catalog) -> Value {
    let enums: Vec<Value> = catalog.enums.iter().map(|&kind| enum_to_json(kind)).collect();
    let domains: Vec<Value> = catalog
        .domains
        .iter()
        .map(|module| {
            let records: Vec<Value> = module.records.iter().copied().map(record_to_json).collect();
            json!({
                "id": module.domain.as_str(),
                "label": module.domain.label(),
                "comment": module.comment,
                "records": records
            })
        })
        .collect();
    json!({
        "version": catalog.version,
        "source": catalog.source,
        "enums": enums,
        "domains": domains
    })
}

fn enum_to_json(kind: EnumKind) -> Value {
    let members: Vec<Value> = kind
        .members()
        .iter()
        .zip(1_i32..)
        .map(|(name, code)| json!({ "name": name, "code": code }))
        .collect();
    json!({
        "name": kind.as_str(),
        "members": members
    })
}

fn record_to_json(record: &RecordSchema) -> Value {
    let fields: Vec<Value> = record.fields.iter().map(field_to_json).collect();
    json!({
        "name": record.name,
        "comment": record.summary(),
        "fields": fields
    })
}

fn field_to_json(field: &FieldSpec) -> Value {
    let mut node = Map::new();
    node.insert("name".to_owned(), json!(field.name));
    node.insert("kind".to_owned(), json!(field.kind.as_str()));
    match field.kind {
        FieldKind::Code(kind) => {
            node.insert("enum".to_owned(), json!(kind.as_str()));
        }
        FieldKind::Nested(record) => {
            node.insert("record".to_owned(), json!(record));
        }
        FieldKind::Text(rule) => {
            if let Some(format) = text_format(rule) {
                node.insert("format".to_owned(), format);
            }
        }
        _ => {}
    }
    if field.unit.is_numeric() {
        node.insert("unit".to_owned(), json!(field.unit.as_str()));
    }
    if let Some(bounds) = field.bounds {
        node.insert("minimum".to_owned(), json!(bounds.min));
        node.insert("maximum".to_owned(), json!(bounds.max));
    }
    if field.resettable {
        node.insert("resettable".to_owned(), json!(true));
    }
    if field.sequence {
        node.insert("sequence".to_owned(), json!(true));
    }
    Value::Object(node)
}

fn text_format(rule: TextRule) -> Option<Value> {
    match rule {
        TextRule::Any => None,
        TextRule::Iso3779 { len } => Some(json!({ "standard": "ISO 3779", "length": len })),
        TextRule::Iso639 => Some(json!({ "standard": "ISO 639-1" })),
        TextRule::OneOf(tokens) => Some(json!({ "oneOf": tokens })),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exports_every_enum_and_record() {
        let value = to_json(Catalog::full());
        assert_eq!(value["enums"].as_array().map(Vec::len), Some(17));
        let records: usize = value["domains"]
            .as_array()
            .into_iter()
            .flatten()
            .filter_map(|d| d["records"].as_array())
            .map(Vec::len)
            .sum();
        assert_eq!(records, 68);
    }

    #[test]
    fn fuel_level_carries_unit_and_bounds() {
        let value = to_json(Catalog::full());
        let level = value["domains"][1]["records"]
            .as_array()
            .and_then(|records| records.iter().find(|r| r["name"] == "Fuel"))
            .map(|fuel| fuel["fields"][0].clone())
            .unwrap();
        assert_eq!(level["name"], "Level");
        assert_eq!(level["unit"], "percentage");
        assert_eq!(level["minimum"], 0);
        assert_eq!(level["maximum"], 100);
    }

    #[test]
    fn enum_members_are_numbered_from_one() {
        let value = to_json(Catalog::full());
        let zone = value["enums"]
            .as_array()
            .and_then(|enums| enums.iter().find(|e| e["name"] == "ZoneType"))
            .unwrap();
        assert_eq!(zone["members"][0], json!({ "name": "Front", "code": 1 }));
        assert_eq!(zone["members"][5], json!({ "name": "Center", "code": 6 }));
    }
}
