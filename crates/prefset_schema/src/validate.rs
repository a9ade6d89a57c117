//! Storage contract validation for entity types opting in to preferences.

use prefset_foundation::{Error, ErrorContext, RESERVED_COLUMN, Result};
use tracing::warn;

use crate::catalog::EntityCatalog;
use crate::config::RegistryConfig;

/// What validation did for an opt-in.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ValidationOutcome {
    /// The column exists and has the expected kind.
    Validated,
    /// Migrations were pending, so the column was not inspected.
    SkippedPendingMigrations,
}

/// Checks that `entity_type` can hold preferences in `column`.
///
/// The reserved-name check depends only on the name and always runs. The
/// column itself is only inspected when the catalog has no pending
/// migrations, or when `config` disables the skip.
///
/// # Errors
///
/// Returns `ReservedName`, `MissingColumn`, or `WrongColumnType`.
pub fn validate_column(
    catalog: &dyn EntityCatalog,
    entity_type: &str,
    column: &str,
    config: &RegistryConfig,
) -> Result<ValidationOutcome> {
    let context = || ErrorContext::new().with_entity_type(entity_type);

    if column == RESERVED_COLUMN {
        return Err(Error::reserved_name(column).with_context(context()));
    }

    if config.skip_validation_when_pending && catalog.pending_structural_migrations() {
        warn!(
            entity_type,
            column, "Skipping preference column validation: migrations pending"
        );
        return Ok(ValidationOutcome::SkippedPendingMigrations);
    }

    let kind = catalog
        .columns(entity_type)
        .and_then(|columns| columns.get(column).copied())
        .ok_or_else(|| Error::missing_column(entity_type, column).with_context(context()))?;

    if kind != config.expected_column_kind {
        return Err(Error::wrong_column_type(
            column,
            config.expected_column_kind.name(),
            kind.name(),
        )
        .with_context(context()));
    }

    Ok(ValidationOutcome::Validated)
}
