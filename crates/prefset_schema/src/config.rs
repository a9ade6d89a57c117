//! Configuration for schema registration.

use crate::column::ColumnKind;

/// Column name used when an entity type opts in without naming one.
pub const DEFAULT_COLUMN: &str = "preferences";

/// Configuration for the schema registry.
///
/// Controls the default storage column and how strictly storage is validated.
#[derive(Clone, Debug)]
pub struct RegistryConfig {
    /// Column name used by `has_preferences` when none is given.
    pub default_column: String,

    /// Column kind a preference column must have.
    pub expected_column_kind: ColumnKind,

    /// Skip storage validation while the host reports pending migrations.
    pub skip_validation_when_pending: bool,
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            default_column: DEFAULT_COLUMN.to_string(),
            expected_column_kind: ColumnKind::Text,
            skip_validation_when_pending: true,
        }
    }
}

impl RegistryConfig {
    /// Creates a configuration that validates storage even with pending migrations.
    #[must_use]
    pub fn strict() -> Self {
        Self {
            skip_validation_when_pending: false,
            ..Self::default()
        }
    }

    /// Builder method to set the default column name.
    #[must_use]
    pub fn with_default_column(mut self, column: impl Into<String>) -> Self {
        self.default_column = column.into();
        self
    }

    /// Builder method to set the required column kind.
    #[must_use]
    pub fn with_expected_column_kind(mut self, kind: ColumnKind) -> Self {
        self.expected_column_kind = kind;
        self
    }

    /// Builder method to enable/disable the pending-migration skip.
    #[must_use]
    pub fn with_skip_validation_when_pending(mut self, skip: bool) -> Self {
        self.skip_validation_when_pending = skip;
        self
    }
}
