use json_typeddict::{convert_str, schema_to_typeddicts, Error, Options, RootAlias};
use pretty_assertions::assert_eq;
use serde_json::json;

const HEADER: &str = "from typing import Any, TypedDict, Union, Literal, List\nfrom typing_extensions import NotRequired\n\n";

fn convert(doc: serde_json::Value) -> String {
    schema_to_typeddicts(&doc, &Options::default()).unwrap()
}

#[test]
fn status_object_round_trip() {
    let out = convert(json!({
        "type": "object",
        "properties": {"status": {"enum": ["ok", "fail"]}},
        "required": ["status"]
    }));
    let expected = format!(
        "{HEADER}\n\n{}\n\n{}",
        "Status = Literal[\n    \"ok\",\n    \"fail\",\n]",
        "class Root(TypedDict):\n    status: Status",
    );
    assert_eq!(out, expected);
}

#[test]
fn empty_document_is_just_the_header() {
    assert_eq!(convert(json!({})), HEADER);
}

#[test]
fn array_of_objects_is_named_after_the_property() {
    let out = convert(json!({
        "type": "object",
        "properties": {
            "pets": {
                "type": "array",
                "items": {"type": "object", "properties": {"name": {"type": "string"}}}
            }
        },
        "required": ["pets"]
    }));
    assert!(out.contains("class Pets(TypedDict):\n    name: NotRequired[str]"), "{out}");
    assert!(out.contains("    pets: List[Pets]"), "{out}");
    assert!(!out.contains("PetsItem"));
}

#[test]
fn definitions_are_emitted_in_reverse_order() {
    let out = convert(json!({
        "definitions": {
            "A": {"type": "object", "properties": {"x": {"type": "string"}}},
            "B": {"type": "object", "properties": {"a": {"$ref": "#/definitions/A"}}}
        },
        "$ref": "#/definitions/B"
    }));
    let a = out.find("class A(TypedDict)").unwrap();
    let b = out.find("class B(TypedDict)").unwrap();
    assert!(b < a, "{out}");
}

#[test]
fn reference_root_gets_no_alias_in_bracket_mode() {
    let doc = json!({"$ref": "#/definitions/Widget"});
    assert_eq!(convert(doc.clone()), HEADER);

    let shape = Options { root_alias: RootAlias::Shape, ..Options::default() };
    let out = schema_to_typeddicts(&doc, &shape).unwrap();
    assert_eq!(out, format!("{HEADER}\n\nRoot = Widget"));
}

#[test]
fn union_root_gets_an_alias() {
    let out = convert(json!({"type": ["string", "integer"]}));
    assert_eq!(out, format!("{HEADER}\n\nRoot = Union[str, int]"));
}

#[test]
fn custom_root_name() {
    let options = Options { root_name: "document".into(), ..Options::default() };
    let out = schema_to_typeddicts(&json!({"type": "object", "properties": {}}), &options).unwrap();
    assert!(out.ends_with("class Document(TypedDict):\n    pass"), "{out}");
}

#[test]
fn petstore_fixture() {
    let src = include_str!("fixtures/petstore.schema.json");
    let expected = include_str!("fixtures/petstore.expected.py");
    let out = convert_str(src, &Options::default()).unwrap();
    assert_eq!(format!("{out}\n"), expected);
}

#[test]
fn conversion_is_deterministic() {
    let src = include_str!("fixtures/petstore.schema.json");
    let first = convert_str(src, &Options::default()).unwrap();
    let second = convert_str(src, &Options::default()).unwrap();
    assert_eq!(first, second);
}

#[test]
fn malformed_json_is_fatal() {
    let err = convert_str("{\"type\": \"object\",", &Options::default()).unwrap_err();
    assert!(matches!(err, Error::Parse(_)), "{err:?}");
}

#[test]
fn definitions_must_be_an_object() {
    let err = convert_str(r#"{"definitions": ["A"]}"#, &Options::default()).unwrap_err();
    match err {
        Error::Document { path, .. } => assert_eq!(path, "definitions"),
        other => panic!("unexpected error {other:?}"),
    }
}
