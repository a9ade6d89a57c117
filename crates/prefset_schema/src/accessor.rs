//! Per-preference get/set/has accessors.
//!
//! Each declaration builds one [`PreferenceAccessor`]. Together they form the
//! schema's accessor table, looked up by name instead of by method dispatch.

use prefset_foundation::{PrefKey, RawStore, Value};

/// Reads and writes a single declared preference through a raw store.
#[derive(Clone, Debug, PartialEq)]
pub struct PreferenceAccessor {
    key: PrefKey,
    default: Option<Value>,
}

impl PreferenceAccessor {
    /// Creates an accessor for `key` falling back to `default`.
    #[must_use]
    pub fn new(key: PrefKey, default: Option<Value>) -> Self {
        Self { key, default }
    }

    /// Returns the preference key.
    #[must_use]
    pub fn key(&self) -> &PrefKey {
        &self.key
    }

    /// Returns the declared default, if any.
    #[must_use]
    pub fn default_value(&self) -> Option<&Value> {
        self.default.as_ref()
    }

    /// Returns the stored value, or the default when nothing is stored.
    #[must_use]
    pub fn get(&self, store: &RawStore) -> Option<Value> {
        store
            .get(&self.key)
            .or(self.default.as_ref())
            .cloned()
    }

    /// Returns a replacement store holding `value` for this preference.
    #[must_use]
    pub fn set(&self, store: &RawStore, value: impl Into<Value>) -> RawStore {
        store.with(&self.key, value)
    }

    /// Returns true if the store holds a value for this preference.
    ///
    /// Defaults never count as presence.
    #[must_use]
    pub fn has(&self, store: &RawStore) -> bool {
        store.contains_key(&self.key)
    }
}
