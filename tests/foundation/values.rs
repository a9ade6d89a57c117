//! Integration tests for Value and PrefKey
//!
//! Tests value conversions, equality, and key normalization.

use std::sync::Arc;

use prefset_foundation::{LtMap, PrefKey, Value};

// =============================================================================
// Value
// =============================================================================

#[test]
fn conversions() {
    assert_eq!(Value::from(true), Value::Bool(true));
    assert_eq!(Value::from(7i32), Value::Int(7));
    assert_eq!(Value::from(7i64), Value::Int(7));
    assert_eq!(Value::from(0.5), Value::Float(0.5));
    assert_eq!(Value::from(String::from("s")), Value::from("s"));
    assert_eq!(Value::from(Arc::<str>::from("s")), Value::from("s"));
}

#[test]
fn falsy_values_are_still_values() {
    for v in [Value::Bool(false), Value::from(""), Value::Int(0), Value::Nil] {
        assert_eq!(v.clone(), v);
    }
    assert!(!Value::Bool(false).is_truthy());
    assert!(Value::Int(0).is_truthy());
}

#[test]
fn nested_map_value() {
    let inner = LtMap::new().insert(PrefKey::from("size"), Value::Int(12));
    let v = Value::from(inner);
    assert_eq!(
        v.as_map().and_then(|m| m.get("size")),
        Some(&Value::Int(12))
    );
    assert_eq!(v.kind_name(), "map");
}

// =============================================================================
// PrefKey
// =============================================================================

#[test]
fn keys_from_all_string_forms_compare_equal() {
    let owned = String::from("locale");
    let keys = [
        PrefKey::from("locale"),
        PrefKey::from(owned.clone()),
        PrefKey::from(&owned),
        PrefKey::from(Arc::<str>::from("locale")),
    ];
    assert!(keys.iter().all(|k| *k == keys[0]));
}

#[test]
fn key_display_and_deref() {
    let key = PrefKey::from("locale");
    assert_eq!(key.to_string(), "locale");
    assert_eq!(key.len(), 6);
    assert!(key.starts_with("loc"));
}
