//! Integration tests for the data tree node type.

use quilt::{Path, Thunk, Value, data};

// =============================================================================
// Display
// =============================================================================

#[test]
fn display_stringifies_by_node_kind() {
    assert_eq!(Value::Null.to_string(), "");
    assert_eq!(Value::Bool(true).to_string(), "true");
    assert_eq!(Value::Number(42).to_string(), "42");
    assert_eq!(Value::from("text").to_string(), "text");
    assert_eq!(Value::from(vec!["a", "b"]).to_string(), "ab");
}

#[test]
fn display_renders_mappings_as_compact_json() {
    let v = data! { "a" => 1, "b" => "x" };
    assert_eq!(v.to_string(), r#"{"a":1,"b":"x"}"#);
}

// =============================================================================
// Descriptor Recognition
// =============================================================================

#[test]
fn descriptor_recognition() {
    assert!(data! { "__render" => "p/p" }.is_descriptor());
    assert_eq!(data! { "__render" => "p/p" }.render_id(), Some("p/p"));
    assert!(!data! { "other" => "p/p" }.is_descriptor());
    // A non-string __render value is not an identifier.
    assert!(!data! { "__render" => 3 }.is_descriptor());
    assert!(!Value::from("p/p").is_descriptor());
}

// =============================================================================
// Conversions
// =============================================================================

#[test]
fn conversions_cover_primitives() {
    assert_eq!(Value::from(7u32), Value::Number(7));
    assert_eq!(Value::from(7usize), Value::Number(7));
    assert_eq!(Value::from(1.5f32), Value::Float(1.5));
    assert_eq!(Value::from(String::from("s")), Value::from("s"));
    assert_eq!(Value::from(false), Value::Bool(false));
}

#[test]
fn from_serde_json_value_preserves_key_order() {
    let json: serde_json::Value = serde_json::from_str(r#"{"z": 1, "a": 2}"#).unwrap();
    let v = Value::from(json);
    let keys: Vec<&str> = v.as_object().unwrap().keys().map(String::as_str).collect();
    assert_eq!(keys, ["z", "a"]);
}

// =============================================================================
// JSON Parsing and Serialization
// =============================================================================

#[test]
fn json_parsing_preserves_key_order() {
    let v: Value = r#"{"z": 1, "a": [true, null, 1.5], "m": {"k": "v"}}"#.parse().unwrap();
    let keys: Vec<&str> = v.as_object().unwrap().keys().map(String::as_str).collect();
    assert_eq!(keys, ["z", "a", "m"]);
    assert_eq!(
        v.at_path(&Path::parse("$.a[0]").unwrap()),
        Some(&Value::Bool(true))
    );
    assert_eq!(
        v.at_path(&Path::parse("$.a[1]").unwrap()),
        Some(&Value::Null)
    );
    assert_eq!(
        v.at_path(&Path::parse("$.a[2]").unwrap()),
        Some(&Value::Float(1.5))
    );
}

#[test]
fn serialization_round_trips_without_thunks() {
    let original = data! {
        "n" => 1,
        "list" => vec!["a"],
        "nested" => data! { "b" => true },
    };
    let json = serde_json::to_string(&original).unwrap();
    let back: Value = json.parse().unwrap();
    assert_eq!(back, original);
}

#[test]
fn thunks_serialize_as_their_display_text() {
    let thunk = Thunk::new("pre ", "name", Path::root());
    let v = data! { "t" => thunk.clone() };
    assert_eq!(serde_json::to_string(&v).unwrap(), r#"{"t":"pre %{name}"}"#);

    // Forcing any clone fills the shared cell; the tree copy sees it too.
    thunk
        .force_with(|| -> Result<String, ()> { Ok("resolved".to_string()) })
        .unwrap();
    assert_eq!(serde_json::to_string(&v).unwrap(), r#"{"t":"pre resolved"}"#);
}

// =============================================================================
// Thunk Identity
// =============================================================================

#[test]
fn thunk_equality_is_cell_identity() {
    let a = Thunk::new("", "x", Path::root());
    let b = Thunk::new("", "x", Path::root());
    assert_ne!(Value::Thunk(a.clone()), Value::Thunk(b));
    assert_eq!(Value::Thunk(a.clone()), Value::Thunk(a));
}

#[test]
fn thunk_reports_resolution_state() {
    let thunk = Thunk::new("", "v", Path::root());
    assert!(!thunk.is_resolved());
    assert_eq!(thunk.cached(), None);
    assert_eq!(thunk.to_string(), "%{v}");

    thunk
        .force_with(|| -> Result<String, ()> { Ok("done".to_string()) })
        .unwrap();
    assert!(thunk.is_resolved());
    assert_eq!(thunk.cached(), Some("done".to_string()));
    assert_eq!(thunk.to_string(), "done");
}
