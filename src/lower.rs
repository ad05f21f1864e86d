//! Untyped schema node → [`Shape`].
//!
//! Schema nodes carry no explicit tag; the shape is recomputed from which
//! keys are present. Shapes overlap (a node may carry both `enum` and
//! `type`), so the checks run in a fixed priority order:
//!
//! empty → enum → `$ref` → object → array → anyOf → primitive → type-list → unrecognized
//!
//! Reordering these changes the output for ambiguous schemas.
use indexmap::IndexSet;
use serde_json::Value;

use crate::ir::{Primitive, Shape};

pub fn classify(node: &Value) -> Shape<'_> {
    let map = match node {
        // boolean schemas (`true` / `false`) and null carry no structure
        Value::Null | Value::Bool(_) => return Shape::Empty,
        Value::Object(map) if map.is_empty() => return Shape::Empty,
        Value::Object(map) => map,
        _ => return Shape::Unrecognized,
    };

    if let Some(values) = map.get("enum") {
        return match values {
            Value::Array(xs) => Shape::Enum(xs),
            _ => Shape::Unrecognized,
        };
    }

    if let Some(pointer) = map.get("$ref") {
        return match pointer {
            Value::String(s) => Shape::Reference(s),
            _ => Shape::Unrecognized,
        };
    }

    let ty = map.get("type");

    if ty.and_then(Value::as_str) == Some("object") {
        let properties = map.get("properties").and_then(Value::as_object);
        let required = map
            .get("required")
            .and_then(Value::as_array)
            .map(|xs| xs.iter().filter_map(Value::as_str).collect())
            .unwrap_or_else(IndexSet::new);
        return Shape::Object { properties, required };
    }

    if ty.and_then(Value::as_str) == Some("array") {
        return Shape::Array { items: map.get("items") };
    }

    if let Some(alternatives) = map.get("anyOf") {
        return match alternatives {
            Value::Array(xs) => Shape::AnyOf(xs),
            _ => Shape::Unrecognized,
        };
    }

    if let Some(p) = ty.and_then(Value::as_str).and_then(Primitive::from_name) {
        return Shape::Primitive(p);
    }

    if let Some(Value::Array(names)) = ty {
        return Shape::Union(names);
    }

    Shape::Unrecognized
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn empty_and_boolean_schemas() {
        assert_eq!(classify(&json!({})), Shape::Empty);
        assert_eq!(classify(&json!(true)), Shape::Empty);
        assert_eq!(classify(&json!(null)), Shape::Empty);
    }

    #[test]
    fn enum_beats_type() {
        let node = json!({"type": "string", "enum": ["a", "b"]});
        assert!(matches!(classify(&node), Shape::Enum(xs) if xs.len() == 2));
    }

    #[test]
    fn enum_beats_ref() {
        let node = json!({"$ref": "#/definitions/X", "enum": ["a"]});
        assert!(matches!(classify(&node), Shape::Enum(_)));
    }

    #[test]
    fn ref_beats_object_type() {
        let node = json!({"$ref": "#/definitions/Widget", "type": "object"});
        assert_eq!(classify(&node), Shape::Reference("#/definitions/Widget"));
    }

    #[test]
    fn array_beats_any_of() {
        let node = json!({"type": "array", "anyOf": [{"type": "string"}]});
        assert_eq!(classify(&node), Shape::Array { items: None });
    }

    #[test]
    fn any_of_beats_primitive() {
        let node = json!({"type": "string", "anyOf": []});
        assert!(matches!(classify(&node), Shape::AnyOf(xs) if xs.is_empty()));
    }

    #[test]
    fn object_collects_required_names() {
        let node = json!({
            "type": "object",
            "properties": {"a": {"type": "string"}},
            "required": ["a", 3]
        });
        match classify(&node) {
            Shape::Object { properties, required } => {
                assert_eq!(properties.map(|p| p.len()), Some(1));
                assert!(required.contains("a"));
                assert_eq!(required.len(), 1);
            }
            other => panic!("expected object, got {other:?}"),
        }
    }

    #[test]
    fn object_without_properties() {
        let node = json!({"type": "object"});
        assert!(matches!(classify(&node), Shape::Object { properties: None, .. }));
    }

    #[test]
    fn primitives_and_type_lists() {
        assert_eq!(classify(&json!({"type": "number"})), Shape::Primitive(Primitive::Number));
        assert_eq!(classify(&json!({"type": "null"})), Shape::Primitive(Primitive::Null));
        assert!(matches!(classify(&json!({"type": ["string", "null"]})), Shape::Union(xs) if xs.len() == 2));
    }

    #[test]
    fn unrecognized_nodes() {
        assert_eq!(classify(&json!({"type": "tuple"})), Shape::Unrecognized);
        assert_eq!(classify(&json!({"description": "no type"})), Shape::Unrecognized);
        assert_eq!(classify(&json!({"enum": "nope"})), Shape::Unrecognized);
        assert_eq!(classify(&json!({"$ref": 12})), Shape::Unrecognized);
        assert_eq!(classify(&json!(42)), Shape::Unrecognized);
    }
}
