//! The host's view of entity storage.
//!
//! Validation only needs two questions answered: which columns an entity type
//! has, and whether structural migrations are still pending.

use std::collections::HashMap;

use prefset_foundation::LtMap;

use crate::column::ColumnKind;

/// Storage introspection supplied by the host persistence layer.
pub trait EntityCatalog {
    /// Returns the columns of `entity_type`, or `None` if the host does not know it.
    fn columns(&self, entity_type: &str) -> Option<LtMap<String, ColumnKind>>;

    /// Returns true if structural migrations have not yet been applied.
    fn pending_structural_migrations(&self) -> bool;
}

impl<C: EntityCatalog + ?Sized> EntityCatalog for &C {
    fn columns(&self, entity_type: &str) -> Option<LtMap<String, ColumnKind>> {
        (**self).columns(entity_type)
    }

    fn pending_structural_migrations(&self) -> bool {
        (**self).pending_structural_migrations()
    }
}

/// An in-memory catalog for hosts with a fixed storage layout.
#[derive(Clone, Debug, Default)]
pub struct StaticCatalog {
    tables: HashMap<String, LtMap<String, ColumnKind>>,
    pending_migrations: bool,
}

impl StaticCatalog {
    /// Creates an empty catalog with no pending migrations.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder method to register an entity type with no columns yet.
    #[must_use]
    pub fn with_table(mut self, entity_type: impl Into<String>) -> Self {
        self.tables.entry(entity_type.into()).or_default();
        self
    }

    /// Builder method to add a column to an entity type, registering the type if needed.
    #[must_use]
    pub fn with_column(
        mut self,
        entity_type: impl Into<String>,
        column: impl Into<String>,
        kind: ColumnKind,
    ) -> Self {
        let table = self.tables.entry(entity_type.into()).or_default();
        *table = table.insert(column.into(), kind);
        self
    }

    /// Builder method to set whether migrations are pending.
    #[must_use]
    pub fn with_pending_migrations(mut self, pending: bool) -> Self {
        self.pending_migrations = pending;
        self
    }
}

impl EntityCatalog for StaticCatalog {
    fn columns(&self, entity_type: &str) -> Option<LtMap<String, ColumnKind>> {
        self.tables.get(entity_type).cloned()
    }

    fn pending_structural_migrations(&self) -> bool {
        self.pending_migrations
    }
}
