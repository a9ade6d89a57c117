//! The raw key/value map an entity persists.
//!
//! A [`RawStore`] holds only values that were explicitly written. It is never
//! modified in place: every write produces a new store that shares structure
//! with the old one, so a reader holding an earlier store never observes a
//! later write.

use std::fmt;

use crate::collections::LtMap;
use crate::key::PrefKey;
use crate::value::Value;

/// Flat, string-keyed map of explicitly stored preference values.
///
/// Absence of a key is the only representation of "unset".
#[derive(Clone, Default, PartialEq, Eq)]
pub struct RawStore {
    entries: LtMap<PrefKey, Value>,
}

impl RawStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of stored entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if nothing is stored.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Gets the stored value for `key`, if any.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.entries.get(key)
    }

    /// Returns true if `key` has a stored value, whatever that value is.
    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Returns a new store equal to this one merged with `{key: value}`.
    #[must_use]
    pub fn with(&self, key: impl Into<PrefKey>, value: impl Into<Value>) -> Self {
        Self {
            entries: self.entries.insert(key.into(), value.into()),
        }
    }

    /// Returns a new store with every entry whose key equals `key` dropped.
    #[must_use]
    pub fn without(&self, key: &str) -> Self {
        Self {
            entries: self.entries.remove(key),
        }
    }

    /// Returns a new store holding this store's entries overlaid by `other`'s.
    ///
    /// Use this to apply several keys in a single replacement.
    #[must_use]
    pub fn merged(&self, other: &RawStore) -> Self {
        Self {
            entries: self.entries.overlay(&other.entries),
        }
    }

    /// Returns an iterator over stored entries.
    pub fn iter(&self) -> impl Iterator<Item = (&PrefKey, &Value)> {
        self.entries.iter()
    }

    /// Returns an iterator over stored keys.
    pub fn keys(&self) -> impl Iterator<Item = &PrefKey> {
        self.entries.keys()
    }

    /// Returns the underlying persistent map.
    #[must_use]
    pub fn as_map(&self) -> &LtMap<PrefKey, Value> {
        &self.entries
    }
}

impl fmt::Debug for RawStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.entries.iter()).finish()
    }
}

impl<K: Into<PrefKey>, V: Into<Value>> FromIterator<(K, V)> for RawStore {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            entries: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

impl From<LtMap<PrefKey, Value>> for RawStore {
    fn from(entries: LtMap<PrefKey, Value>) -> Self {
        Self { entries }
    }
}
