//! Integration tests for the schema registry
//!
//! Tests opt-in, declaration through the builder, and the frozen registry.

use std::sync::Arc;
use std::thread;

use prefset_foundation::{ErrorKind, Value};
use prefset_schema::{
    ColumnKind, PreferenceOptions, RegistryConfig, SchemaRegistry, SchemaRegistryBuilder,
    StaticCatalog,
};

fn catalog() -> StaticCatalog {
    StaticCatalog::new()
        .with_column("User", "preferences", ColumnKind::Text)
        .with_column("User", "preferences2", ColumnKind::Text)
        .with_column("Team", "settings", ColumnKind::Text)
}

#[test]
fn default_column_name() {
    let mut builder = SchemaRegistry::builder();
    builder.has_preferences(&catalog(), "User").unwrap();
    let registry = builder.build();
    assert_eq!(registry.schema("User").unwrap().column(), "preferences");
}

#[test]
fn specified_column_name() {
    let mut builder = SchemaRegistry::builder();
    builder
        .has_preferences_in(&catalog(), "User", "preferences2")
        .unwrap();
    assert_eq!(builder.build().schema("User").unwrap().column(), "preferences2");
}

#[test]
fn configured_default_column() {
    let config = RegistryConfig::default().with_default_column("settings");
    let mut builder = SchemaRegistryBuilder::with_config(config);
    builder.has_preferences(&catalog(), "Team").unwrap();
    assert_eq!(builder.config().default_column, "settings");
    assert_eq!(builder.build().schema("Team").unwrap().column(), "settings");
}

#[test]
fn reserved_column_aborts_opt_in() {
    let mut builder = SchemaRegistry::builder();
    let err = builder
        .has_preferences_in(&catalog(), "User", "prefs")
        .unwrap_err();
    assert!(matches!(err.kind, ErrorKind::ReservedName { .. }));
    assert!(err.is_declaration_error());
}

#[test]
fn empty_schema_has_no_defaults() {
    let mut builder = SchemaRegistry::builder();
    builder.has_preferences(&catalog(), "User").unwrap();
    let registry = builder.build();
    assert!(registry.require("User").unwrap().defaults().is_empty());
}

#[test]
fn declarations_through_builder() {
    let mut builder = SchemaRegistry::builder();
    let schema = builder.has_preferences(&catalog(), "User").unwrap();
    schema
        .declare("foo", PreferenceOptions::new().with_default("bar"))
        .unwrap();
    schema.declare("foo2", PreferenceOptions::new()).unwrap();

    let err = builder
        .schema_mut("User")
        .unwrap()
        .declare("foo", PreferenceOptions::new())
        .unwrap_err();
    assert!(matches!(err.kind, ErrorKind::DuplicateDeclaration { .. }));

    let registry = builder.build();
    let schema = registry.require("User").unwrap();
    assert_eq!(schema.len(), 2);
    assert_eq!(
        schema.accessor("foo").unwrap().default_value(),
        Some(&Value::from("bar"))
    );
}

#[test]
fn schema_mut_unknown_type() {
    let mut builder = SchemaRegistry::builder();
    let err = builder.schema_mut("Ghost").unwrap_err();
    assert!(matches!(err.kind, ErrorKind::UnknownEntityType(_)));
}

#[test]
fn frozen_registry_read_from_many_threads() {
    let mut builder = SchemaRegistry::builder();
    builder
        .has_preferences(&catalog(), "User")
        .unwrap()
        .declare("theme", PreferenceOptions::new().with_default("light"))
        .unwrap();
    let registry = Arc::new(builder.build());

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let registry = Arc::clone(&registry);
            thread::spawn(move || {
                registry
                    .require("User")
                    .unwrap()
                    .defaults()
                    .get("theme")
                    .cloned()
            })
        })
        .collect();

    for handle in handles {
        assert_eq!(handle.join().unwrap(), Some(Some(Value::from("light"))));
    }
}
