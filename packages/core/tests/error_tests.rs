//! Error kinds and messages

use deepstruct_core::{DeepStruct, StructError};
use serde_json::json;

#[test]
fn test_error_messages() {
    let error = DeepStruct::try_from_json(&json!([1])).expect_err("arrays are not mappings");
    assert_eq!(error.to_string(), "cannot build a struct from array: expected a mapping");

    assert_eq!(StructError::not_found("speed").to_string(), "no field `speed` in struct");
    assert_eq!(
        StructError::argument("speed=", 2).to_string(),
        "wrong number of arguments for `speed=` (2 for 1)"
    );
    assert_eq!(
        StructError::invalid_separator(" ").to_string(),
        "invalid path separator \" \""
    );
}

#[test]
fn test_json_errors_convert() {
    let json_error = serde_json::from_str::<serde_json::Value>("{").expect_err("truncated JSON must fail");
    let error = StructError::from(json_error);

    assert!(matches!(error, StructError::Json(_)));
    assert!(!error.is_not_found());
    assert!(error.to_string().starts_with("JSON serialization failed"));
}

#[test]
fn test_failed_mutations_leave_struct_untouched() {
    let data = DeepStruct::try_from_json(&json!({ "name": "Barry" })).expect("Failed to wrap json");
    let before = data.deep_clone();

    assert!(data.delete("missing").is_err());
    assert!(data.call_accessor("name=", &[]).is_err());
    assert!(data.set_attribute("two words", 1).is_err());

    assert_eq!(data, before);
    assert_eq!(
        data.original().expect("Failed to read original"),
        before.original().expect("Failed to read original")
    );
}
