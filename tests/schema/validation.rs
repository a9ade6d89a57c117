//! Integration tests for storage contract validation
//!
//! Tests reserved names, missing and mistyped columns, and the
//! pending-migration skip.

use prefset_foundation::{ErrorKind, LtMap};
use prefset_schema::{
    ColumnKind, EntityCatalog, RegistryConfig, StaticCatalog, ValidationOutcome, validate_column,
};

fn user_catalog() -> StaticCatalog {
    StaticCatalog::new()
        .with_column("User", "name", ColumnKind::String)
        .with_column("User", "preferences", ColumnKind::Text)
        .with_column("User", "preferences2", ColumnKind::Text)
        .with_column("User", "preferences4", ColumnKind::Integer)
}

/// A catalog whose migrations are always pending and which knows no tables.
struct MigratingCatalog;

impl EntityCatalog for MigratingCatalog {
    fn columns(&self, _entity_type: &str) -> Option<LtMap<String, ColumnKind>> {
        None
    }

    fn pending_structural_migrations(&self) -> bool {
        true
    }
}

#[test]
fn valid_columns() {
    let config = RegistryConfig::default();
    for column in ["preferences", "preferences2"] {
        assert_eq!(
            validate_column(&user_catalog(), "User", column, &config).unwrap(),
            ValidationOutcome::Validated
        );
    }
}

#[test]
fn reserved_name_has_fixed_message() {
    for entity_type in ["User", "Account"] {
        let err = validate_column(&user_catalog(), entity_type, "prefs", &RegistryConfig::default())
            .unwrap_err();
        assert_eq!(err.to_string(), "Preference column name cannot be named 'prefs'.");
    }
}

#[test]
fn column_that_does_not_exist() {
    let err = validate_column(&user_catalog(), "User", "preferences3", &RegistryConfig::default())
        .unwrap_err();
    assert!(matches!(err.kind, ErrorKind::MissingColumn { .. }));
    assert_eq!(err.to_string(), "User must have column 'preferences3'.");
}

#[test]
fn column_that_is_not_text() {
    let err = validate_column(&user_catalog(), "User", "preferences4", &RegistryConfig::default())
        .unwrap_err();
    assert_eq!(err.to_string(), "preferences4 must be of type 'text'.");

    let err = validate_column(&user_catalog(), "User", "name", &RegistryConfig::default())
        .unwrap_err();
    assert!(matches!(err.kind, ErrorKind::WrongColumnType { .. }));
}

#[test]
fn configured_column_kind() {
    let catalog = StaticCatalog::new().with_column("User", "settings", ColumnKind::Json);
    let config = RegistryConfig::default().with_expected_column_kind(ColumnKind::Json);
    assert!(validate_column(&catalog, "User", "settings", &config).is_ok());

    let err = validate_column(&user_catalog(), "User", "preferences", &config).unwrap_err();
    assert_eq!(err.to_string(), "preferences must be of type 'json'.");
}

#[test]
fn pending_migrations_skip_both_branches() {
    assert_eq!(
        validate_column(&MigratingCatalog, "User", "preferences", &RegistryConfig::default())
            .unwrap(),
        ValidationOutcome::SkippedPendingMigrations
    );

    let err = validate_column(&MigratingCatalog, "User", "preferences", &RegistryConfig::strict())
        .unwrap_err();
    assert!(matches!(err.kind, ErrorKind::MissingColumn { .. }));
}
