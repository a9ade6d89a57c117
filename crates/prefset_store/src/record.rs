//! Host entities that carry preferences.
//!
//! [`HasPreferences`] is implemented by any entity that owns a raw store and
//! knows its schema. Every write replaces the store as a whole.

use std::sync::Arc;

use prefset_foundation::{LtMap, PrefKey, RawStore, Result, Value};
use prefset_schema::{PreferenceSchema, SchemaRegistry};
use tracing::trace;

use crate::view::{MergedView, compute_view};

/// An entity with a preference schema and a raw store.
pub trait HasPreferences {
    /// Returns the schema of this entity's type.
    fn preference_schema(&self) -> &PreferenceSchema;

    /// Returns the current raw store.
    fn raw_preferences(&self) -> &RawStore;

    /// Replaces the raw store.
    fn replace_raw_preferences(&mut self, store: RawStore);

    /// Computes the merged view of declared and undeclared preferences.
    fn preferences(&self) -> MergedView {
        compute_view(self.preference_schema(), self.raw_preferences())
    }

    /// Stores `value` under `key`, declared or not.
    fn add_preference(&mut self, key: impl Into<PrefKey>, value: impl Into<Value>)
    where
        Self: Sized,
    {
        let key = key.into();
        trace!(key = %key, "add preference");
        let store = self.raw_preferences().with(key, value);
        self.replace_raw_preferences(store);
    }

    /// Removes any stored value for `key`.
    ///
    /// A declared preference falls back to its default afterwards.
    fn delete_preference(&mut self, key: impl Into<PrefKey>)
    where
        Self: Sized,
    {
        let key = key.into();
        trace!(key = %key, "delete preference");
        let store = self.raw_preferences().without(&key);
        self.replace_raw_preferences(store);
    }

    /// Returns the value of preference `name`: stored, else declared default.
    fn pref(&self, name: &str) -> Option<Value> {
        match self.preference_schema().accessor(name) {
            Some(accessor) => accessor.get(self.raw_preferences()),
            None => self.raw_preferences().get(name).cloned(),
        }
    }

    /// Sets preference `name` to `value`.
    fn set_pref(&mut self, name: impl Into<PrefKey>, value: impl Into<Value>)
    where
        Self: Sized,
    {
        let name = name.into();
        trace!(key = %name, "set preference");
        let store = match self.preference_schema().accessor(&name) {
            Some(accessor) => accessor.set(self.raw_preferences(), value),
            None => self.raw_preferences().with(name, value),
        };
        self.replace_raw_preferences(store);
    }

    /// Returns true if a value is stored for `name`, ignoring defaults.
    fn has_pref(&self, name: &str) -> bool {
        match self.preference_schema().accessor(name) {
            Some(accessor) => accessor.has(self.raw_preferences()),
            None => self.raw_preferences().contains_key(name),
        }
    }

    /// Returns the names declared for this entity's type.
    fn declared_preferences(&self) -> Vec<PrefKey> {
        self.preference_schema().declared_names()
    }

    /// Returns the declared defaults for this entity's type.
    fn default_preferences(&self) -> LtMap<PrefKey, Option<Value>> {
        self.preference_schema().defaults()
    }
}

/// A standalone entity holding a schema reference and a raw store.
#[derive(Clone, Debug)]
pub struct PreferenceRecord {
    schema: Arc<PreferenceSchema>,
    store: RawStore,
}

impl PreferenceRecord {
    /// Creates a record with an empty store.
    #[must_use]
    pub fn new(schema: Arc<PreferenceSchema>) -> Self {
        Self::with_store(schema, RawStore::new())
    }

    /// Creates a record over an existing store.
    #[must_use]
    pub fn with_store(schema: Arc<PreferenceSchema>, store: RawStore) -> Self {
        Self { schema, store }
    }

    /// Creates an empty record for an entity type in `registry`.
    ///
    /// # Errors
    ///
    /// Returns `UnknownEntityType` if the type never opted in.
    pub fn for_type(registry: &SchemaRegistry, entity_type: &str) -> Result<Self> {
        Ok(Self::new(registry.require(entity_type)?))
    }

    /// Returns the shared schema.
    #[must_use]
    pub fn schema(&self) -> &Arc<PreferenceSchema> {
        &self.schema
    }
}

impl HasPreferences for PreferenceRecord {
    fn preference_schema(&self) -> &PreferenceSchema {
        &self.schema
    }

    fn raw_preferences(&self) -> &RawStore {
        &self.store
    }

    fn replace_raw_preferences(&mut self, store: RawStore) {
        self.store = store;
    }
}
