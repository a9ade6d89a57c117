//! Integration tests for RawStore
//!
//! Tests copy-and-replace writes, presence, and bulk merging.

use prefset_foundation::{RawStore, Value};

#[test]
fn empty_by_default() {
    let store = RawStore::default();
    assert!(store.is_empty());
    assert_eq!(store.get("anything"), None);
}

#[test]
fn earlier_snapshot_unaffected_by_writes() {
    let v1 = RawStore::new().with("one", "foo");
    let v2 = v1.with("one", "bar").with("two", "baz");
    let v3 = v2.without("one");

    assert_eq!(v1.get("one"), Some(&Value::from("foo")));
    assert_eq!(v2.get("one"), Some(&Value::from("bar")));
    assert!(!v3.contains_key("one"));
    assert_eq!(v3.len(), 1);
}

#[test]
fn explicit_nil_is_present() {
    let store = RawStore::new().with("cleared", Value::Nil);
    assert!(store.contains_key("cleared"));
    assert_eq!(store.get("cleared"), Some(&Value::Nil));
}

#[test]
fn keys_are_case_sensitive() {
    let store = RawStore::new().with("Theme", "dark");
    assert!(!store.contains_key("theme"));
    assert_eq!(store.without("theme").len(), 1);
}

#[test]
fn merged_writes_many_keys_at_once() {
    let base = RawStore::new().with("a", 1i64);
    let patch: RawStore = [("b", 2i64), ("c", 3i64)].into_iter().collect();
    let merged = base.merged(&patch);

    let mut keys: Vec<_> = merged.keys().map(ToString::to_string).collect();
    keys.sort();
    assert_eq!(keys, ["a", "b", "c"]);
    assert_eq!(base.len(), 1);
}
