//! Fluent builder tests for the public API

use deepstruct::prelude::*;
use serde::Serialize;
use serde_json::json;

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

#[derive(Serialize)]
struct Hero {
    name: String,
    #[serde(rename = "secretIdentity")]
    secret_identity: String,
    powers: Vec<String>,
}

#[test]
fn test_wrap_and_find() {
    let data = deepstruct::wrap(json!({
        "object": { "a": "bau bau", "c": "boo boo" },
        "array": [{ "one": 1, "two": 2, "three": 3 }],
        "two words": "Foo bar"
    }))
    .expect("Failed to wrap json");

    assert_eq!(deepstruct::find(&data, "//a"), Some(Value::from("bau bau")));
    assert_eq!(deepstruct::find(&data, "array//two"), Some(Value::from(2)));
    assert_eq!(deepstruct::find(&data, "//four"), None);
    assert!(deepstruct::wrap(json!("text")).is_err());
}

#[test]
fn test_wrap_shallow() {
    let data = deepstruct::wrap_shallow(json!({ "outer": { "inner": 1 } })).expect("Failed to wrap json");

    assert!(!data.is_deep());
    assert_eq!(data.find("outer/inner"), None);
}

#[test]
fn test_struct_builder() {
    init_logging();
    let person = StructBuilder::new()
        .with_json(json!({ "name": "Barry Allen" }))
        .attr("byLightning", json!({ "be": "The Flash" }))
        .attr("speed", 9000)
        .build()
        .expect("Failed to build struct");

    assert_eq!(person.keys(), vec!["name", "by_lightning", "speed"]);
    assert_eq!(person.find("by_lightning/be"), Some(Value::from("The Flash")));
    assert!(person.responds_to("by_lightning="));
}

#[test]
fn test_struct_builder_shallow() {
    let data = Deep::builder()
        .with_json(json!({ "outer": { "inner": 1 } }))
        .attr("extra", json!([1, 2]))
        .shallow()
        .build()
        .expect("Failed to build struct");

    assert!(matches!(data.get("outer"), Some(Value::Primitive(Primitive::Json(_)))));
    assert!(matches!(data.get("extra"), Some(Value::Primitive(Primitive::Json(_)))));
}

#[test]
fn test_struct_builder_from_serializable() {
    let hero = Hero {
        name: "Barry".into(),
        secret_identity: "The Flash".into(),
        powers: vec!["speed".into(), "phasing".into()],
    };

    let data = StructBuilder::new()
        .with_serialized(&hero)
        .expect("Failed to serialize hero")
        .build()
        .expect("Failed to build struct");

    assert_eq!(data.get("secret_identity"), Some(Value::from("The Flash")));
    assert_eq!(data.find("powers/-1"), Some(Value::from("phasing")));
}

#[test]
fn test_struct_builder_rejects_non_mapping() {
    let error = StructBuilder::new()
        .with_json(json!([1, 2, 3]))
        .build()
        .expect_err("arrays are not mappings");

    assert!(matches!(error, StructError::Type { found: "array" }));
    assert!(StructBuilder::default().build().expect("empty builder builds").is_empty());
}

#[test]
fn test_export_builder() {
    let data = Deep::wrap(json!({
        "firstName": "Barry",
        "nickname": "",
        "score": 0,
        "team": { "team_name": "Justice League", "base": null }
    }))
    .expect("Failed to wrap json");

    let plain = data.export().to_plain().expect("Failed to export");
    assert_eq!(plain["first_name"], json!("Barry"));
    assert_eq!(plain["nickname"], json!(""));

    let plain = data
        .export()
        .camelize_keys()
        .exclude_blank_values()
        .exclude_value(&0)
        .to_plain()
        .expect("Failed to export");
    assert_eq!(
        plain,
        json!({ "firstName": "Barry", "team": { "teamName": "Justice League" } })
    );

    let text = data.export().json_defaults().keep_key_case().to_json().expect("Failed to serialize");
    assert_eq!(text, r#"{"first_name":"Barry","team":{"team_name":"Justice League"}}"#);
}

#[test]
fn test_export_builder_options() {
    let data = Deep::wrap(json!({ "a": 1 })).expect("Failed to wrap json");

    let builder = data.export().json_defaults().keep_blank_values();
    assert!(builder.current_options().camelize_keys);
    assert!(!builder.current_options().exclude_blank_values);

    let builder = data.export().options(ExportOptions::new().exclude_value(1));
    assert_eq!(builder.to_plain().expect("Failed to export"), json!({}));
}

#[test]
fn test_query_builder() {
    init_logging();
    let data = Deep::wrap(json!({
        "object": { "a": "bau bau" },
        "array": [{ "two": 2 }]
    }))
    .expect("Failed to wrap json");

    assert_eq!(data.query("//a").first(), Some(Value::from("bau bau")));
    assert_eq!(data.query("array::::two").separator("::").first(), Some(Value::from(2)));
    assert!(data.query("object/a").exists());
    assert!(!data.query("object/b").exists());

    assert_eq!(data.query("object.a").separator(".").try_first().expect("valid separator"), Some(Value::from("bau bau")));
    let error = data
        .query("object a")
        .separator(" ")
        .try_first()
        .expect_err("whitespace separator must fail");
    assert!(matches!(error, StructError::InvalidSeparator { .. }));
    assert_eq!(data.query("object a").separator(" ").first(), None);
}
