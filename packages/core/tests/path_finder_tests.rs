//! Path query and deep search tests
//!
//! Exact digging, depth-first deep search and the `find` path language,
//! including any-depth groups, custom separators and self-references.

use deepstruct_core::prelude::*;
use serde_json::{Value as JsonValue, json};

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn fixture() -> DeepStruct {
    DeepStruct::try_from_json(&json!({
        "object": { "a": "bau bau", "c": "boo boo" },
        "array": [{ "one": 1, "two": 2, "three": 3 }],
        "two words": "Foo bar"
    }))
    .expect("Failed to wrap fixture")
}

fn wrap(json: &JsonValue) -> DeepStruct {
    DeepStruct::try_from_json(json).expect("Failed to wrap json")
}

#[test]
fn test_find_with_xpath_like_syntax() {
    init_logging();
    let data = fixture();

    assert_eq!(data.find("//a"), Some(Value::from("bau bau")));
    assert_eq!(data.find("///a"), Some(Value::from("bau bau")));
    assert_eq!(data.find("object/b"), None);
    assert_eq!(data.find("object/c"), Some(Value::from("boo boo")));
    assert_eq!(data.find("object//a"), Some(Value::from("bau bau")));
    assert_eq!(data.find("//one"), Some(Value::from(1)));
    assert_eq!(data.find("//four"), None);
    assert_eq!(data.find("array//two"), Some(Value::from(2)));
    assert_eq!(data.find("//two words"), Some(Value::from("Foo bar")));
}

#[test]
fn test_find_leading_and_trailing_separators() {
    let data = fixture();

    assert_eq!(data.find("/object/c"), Some(Value::from("boo boo")));
    assert_eq!(data.find("object/c/"), Some(Value::from("boo boo")));
    assert_eq!(data.find("object/c///"), Some(Value::from("boo boo")));
}

#[test]
fn test_find_empty_path() {
    let data = fixture();

    assert_eq!(data.find(""), None);
    assert_eq!(data.find("/"), None);
    assert_eq!(data.find("////"), None);
}

#[test]
fn test_find_indices() {
    let data = wrap(&json!({ "items": [10, 20, 30, 40], "nested": [[1, 2], [3, 4]] }));

    assert_eq!(data.find("items/0"), Some(Value::from(10)));
    assert_eq!(data.find("items/-1"), Some(Value::from(40)));
    assert_eq!(data.find("items/ -2 "), Some(Value::from(30)));
    assert_eq!(data.find("items/4"), None);
    assert_eq!(data.find("items/-5"), None);
    assert_eq!(data.find("nested/1/0"), Some(Value::from(3)));
    assert_eq!(data.find("items/first"), None);
}

#[test]
fn test_numeric_segments_never_match_keys() {
    let data = wrap(&json!({ "codes": { "200": "ok" } }));

    assert_eq!(data.find("codes/200"), None);
    assert_eq!(data.get_exact("codes").and_then(|v| v.as_struct().and_then(|s| s.get("200"))), Some(Value::from("ok")));
}

#[test]
fn test_find_canonicalizes_segments() {
    let data = wrap(&json!({ "homeTown": { "countryName": "Japan" }, "Title": "Matz" }));

    assert_eq!(data.find("homeTown/countryName"), Some(Value::from("Japan")));
    assert_eq!(data.find("home_town/country_name"), Some(Value::from("Japan")));
    assert_eq!(data.find("//countryName"), Some(Value::from("Japan")));
    assert_eq!(data.find("Title"), Some(Value::from("Matz")));
    assert_eq!(data.find("title"), None);
}

#[test]
fn test_find_returns_containers() {
    let data = fixture();

    let object = data.find("object").expect("object is found");
    let object = object.as_struct().expect("object is a struct");
    assert_eq!(object.len(), 2);

    let array = data.find("array").expect("array is found");
    assert_eq!(array.as_sequence().map(<[Value]>::len), Some(1));
}

#[test]
fn test_deep_search_is_depth_first() {
    let data = wrap(&json!({
        "a": { "x": { "target": "deep" } },
        "b": { "target": "shallow" }
    }));

    // the first child is exhausted before the second is tried
    assert_eq!(data.find("//target"), Some(Value::from("deep")));
}

#[test]
fn test_deep_search_retries_full_path() {
    let data = wrap(&json!({
        "left": { "user": { "name": "no id" } },
        "right": [{ "user": { "id": 7 } }]
    }));

    assert_eq!(data.find("//user/id"), Some(Value::from(7)));
    assert_eq!(data.find("//user/name"), Some(Value::from("no id")));
    assert_eq!(data.find("//user/email"), None);
}

#[test]
fn test_present_nil_stops_search() {
    let data = wrap(&json!({
        "first": { "value": null },
        "second": { "value": 1 }
    }));

    assert_eq!(data.find("//value"), Some(Value::Nil));
    assert_eq!(data.find("second//value"), Some(Value::from(1)));
}

#[test]
fn test_non_searchable_result_falls_back_to_whole_struct() {
    init_logging();
    let data = fixture();

    // "object/a" is a string, so `one` is searched from the top
    assert_eq!(data.find("object/a//one"), Some(Value::from(1)));
    // a missing root group also searches from the top
    assert_eq!(data.find("missing//one"), Some(Value::from(1)));
    // a searchable result narrows the search
    assert_eq!(data.find("object//one"), None);
}

#[test]
fn test_multiple_any_depth_groups() {
    let data = wrap(&json!({
        "store": {
            "books": [
                { "meta": { "author": { "name": "Le Guin" } } },
                { "meta": { "author": { "name": "Banks" } } }
            ]
        }
    }));

    assert_eq!(data.find("store//author//name"), Some(Value::from("Le Guin")));
    assert_eq!(data.find("store/books/1//name"), Some(Value::from("Banks")));
    assert_eq!(data.find("//books/-1//author/name"), Some(Value::from("Banks")));
}

#[test]
fn test_custom_separator() {
    init_logging();
    let data = fixture();

    let dots = FindOptions::new(".");
    assert_eq!(data.find_with("object.c", &dots), Some(Value::from("boo boo")));
    assert_eq!(data.find_with("array..two", &dots), Some(Value::from(2)));

    let colons = FindOptions::default().with_separator("::");
    assert_eq!(data.find_with("::::a", &colons), Some(Value::from("bau bau")));
    assert_eq!(data.find_with("array::0::three", &colons), Some(Value::from(3)));
}

#[test]
fn test_invalid_separator_finds_nothing() {
    init_logging();
    let data = fixture();

    assert_eq!(data.find_with("object c", &FindOptions::new(" ")), None);
    assert_eq!(data.find_with("object/c", &FindOptions::new("")), None);

    let error = PathQuery::parse_with("object/c", &FindOptions::new("")).expect_err("empty separator must fail");
    assert!(matches!(error, StructError::InvalidSeparator { .. }));
}

#[test]
fn test_find_options_deserialize_with_defaults() {
    let options: FindOptions = serde_json::from_value(json!({})).expect("Failed to deserialize options");
    assert_eq!(options, FindOptions::default());
    assert_eq!(options.separator, "/");

    let options: FindOptions = serde_json::from_value(json!({ "separator": "." })).expect("Failed to deserialize options");
    assert!(options.validate().is_ok());
}

#[test]
fn test_parsed_query_is_reusable() {
    let query = PathQuery::parse("array//two");
    let first = fixture();
    let second = wrap(&json!({ "array": [{ "two": "zwei" }] }));

    assert_eq!(first.find_query(&query), Some(Value::from(2)));
    assert_eq!(second.find_query(&query), Some(Value::from("zwei")));
    assert_eq!(query.groups().len(), 2);
}

#[test]
fn test_dig_is_exact() {
    let data = fixture();

    let path = [PathSegment::key("array"), PathSegment::index(0), PathSegment::key("two")];
    assert_eq!(data.dig(&path), Some(Value::from(2)));
    assert_eq!(data.dig(&[PathSegment::key("two")]), None);
    assert_eq!(data.dig(&[]), None);
}

#[test]
fn test_dig_deep_on_sequences() {
    let data = fixture();
    let array = data.get("array").expect("array is present");
    let searchable = array.as_searchable().expect("sequences are searchable");

    assert_eq!(searchable.dig(&[PathSegment::index(0)]).map(|v| v.as_struct().is_some()), Some(true));
    assert_eq!(searchable.dig_deep(&[PathSegment::key("three")]), Some(Value::from(3)));
    assert_eq!(searchable.dig_deep(&[]), None);

    assert!(Value::from("leaf").as_searchable().is_none());
    assert!(Value::Nil.as_searchable().is_none());
}

#[test]
fn test_opaque_json_is_not_searched() {
    let data = DeepStruct::try_from_json_with(&json!({ "outer": { "inner": 1 } }), false)
        .expect("Failed to wrap shallowly");

    assert_eq!(data.find("//inner"), None);
    assert!(data.find("outer").is_some());
}

#[test]
fn test_self_reference_search_terminates() {
    init_logging();
    let data = wrap(&json!({ "x": 1 }));
    data.set("me", data.clone());

    assert_eq!(data.find("//missing"), None);
    assert_eq!(data.find("//x"), Some(Value::from(1)));
    assert_eq!(data.find("me/me/me/x"), Some(Value::from(1)));

    let other = wrap(&json!({ "back": null }));
    data.set("other", other.clone());
    other.set("back", data.clone());
    assert_eq!(data.find("//nowhere"), None);
    assert_eq!(other.find("back//x"), Some(Value::from(1)));
}
