//! Integration tests for saving and reloading records
//!
//! Writes stay in memory until the record is dumped back to its column.

use std::sync::Arc;

use prefset_codec::{JsonCodec, dump, load, reload};
use prefset_foundation::{ErrorKind, RawStore, Value};
use prefset_schema::{ColumnKind, PreferenceOptions, SchemaRegistry, StaticCatalog};
use prefset_store::{HasPreferences, PreferenceRecord};

fn registry() -> SchemaRegistry {
    let catalog = StaticCatalog::new().with_column("User", "preferences", ColumnKind::Text);
    let mut builder = SchemaRegistry::builder();
    builder
        .has_preferences(&catalog, "User")
        .unwrap()
        .declare("foo", PreferenceOptions::new().with_default("bar"))
        .unwrap();
    builder.build()
}

fn fresh_user(codec: &JsonCodec) -> PreferenceRecord {
    load(registry().require("User").unwrap(), "", codec).unwrap()
}

// =============================================================================
// Add
// =============================================================================

#[test]
fn added_preference_survives_save() {
    let codec = JsonCodec::new();
    let mut user = fresh_user(&codec);

    user.add_preference("foo2", "bar2");
    let column = dump(&user, &codec).unwrap();
    reload(&mut user, &column, &codec).unwrap();

    assert_eq!(user.preferences().get("foo2"), Some(&Value::from("bar2")));
}

#[test]
fn unsaved_add_is_lost() {
    let codec = JsonCodec::new();
    let mut user = fresh_user(&codec);
    let column = dump(&user, &codec).unwrap();

    user.add_preference("foo2", "bar2");
    reload(&mut user, &column, &codec).unwrap();

    assert!(!user.preferences().contains_key("foo2"));
    assert_eq!(user.preferences().get("foo"), Some(&Value::from("bar")));
}

// =============================================================================
// Delete
// =============================================================================

#[test]
fn saved_delete_survives_reload() {
    let codec = JsonCodec::new();
    let mut user = load(
        registry().require("User").unwrap(),
        r#"{"one":"foo"}"#,
        &codec,
    )
    .unwrap();

    user.delete_preference("one");
    let column = dump(&user, &codec).unwrap();
    reload(&mut user, &column, &codec).unwrap();

    assert!(!user.preferences().contains_key("one"));
}

#[test]
fn unsaved_delete_is_undone() {
    let codec = JsonCodec::new();
    let column = r#"{"one":"foo"}"#;
    let mut user = load(registry().require("User").unwrap(), column, &codec).unwrap();

    user.delete_preference("one");
    reload(&mut user, column, &codec).unwrap();

    assert_eq!(user.preferences().get("one"), Some(&Value::from("foo")));
}

// =============================================================================
// Defaults and Errors
// =============================================================================

#[test]
fn defaults_are_not_persisted() {
    let codec = JsonCodec::new();
    let user = fresh_user(&codec);

    assert_eq!(user.pref("foo"), Some(Value::from("bar")));
    assert_eq!(dump(&user, &codec).unwrap(), "{}");
}

#[test]
fn overwritten_default_is_persisted() {
    let codec = JsonCodec::new();
    let mut user = fresh_user(&codec);
    user.set_pref("foo", "baz");

    let reloaded = load(Arc::clone(user.schema()), &dump(&user, &codec).unwrap(), &codec).unwrap();
    assert_eq!(reloaded.raw_preferences(), &RawStore::new().with("foo", "baz"));
    assert!(reloaded.has_pref("foo"));
}

#[test]
fn load_error_names_entity_type() {
    let codec = JsonCodec::new();
    let err = load(registry().require("User").unwrap(), "[1]", &codec).unwrap_err();

    assert!(matches!(err.kind, ErrorKind::SerializationError(_)));
    assert_eq!(
        err.context.and_then(|c| c.entity_type).as_deref(),
        Some("User")
    );
}

#[test]
fn unencodable_value_fails_save_without_touching_record() {
    let codec = JsonCodec::new();
    let mut user = fresh_user(&codec);
    user.set_pref("foo", f64::INFINITY);

    let err = dump(&user, &codec).unwrap_err();
    assert!(matches!(err.kind, ErrorKind::SerializationError(_)));
    assert_eq!(user.pref("foo"), Some(Value::Float(f64::INFINITY)));
}
