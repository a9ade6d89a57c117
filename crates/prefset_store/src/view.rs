//! The merged preference view.
//!
//! A view combines every declared preference (stored value, else default) with
//! every undeclared key in the raw store. It is recomputed on each request and
//! never cached, so it always reflects the latest store.

use std::fmt;

use prefset_foundation::{LtMap, PrefKey, RawStore, Value};
use prefset_schema::PreferenceSchema;

/// The result of merging a schema with a raw store.
///
/// Declared names are always present. A declared name with no stored value
/// and no default maps to `None`.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct MergedView {
    entries: LtMap<PrefKey, Option<Value>>,
}

impl MergedView {
    /// Returns the resolved value for `name`.
    ///
    /// `None` if the name is absent or resolved to no value.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.entries.get(name).and_then(Option::as_ref)
    }

    /// Returns the entry for `name`: `None` if absent, `Some(None)` if present
    /// without a value.
    #[must_use]
    pub fn entry(&self, name: &str) -> Option<Option<&Value>> {
        self.entries.get(name).map(Option::as_ref)
    }

    /// Returns true if `name` appears in the view.
    #[must_use]
    pub fn contains_key(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    /// Returns an iterator over entries.
    pub fn iter(&self) -> impl Iterator<Item = (&PrefKey, Option<&Value>)> {
        self.entries.iter().map(|(k, v)| (k, v.as_ref()))
    }

    /// Returns an iterator over keys.
    pub fn keys(&self) -> impl Iterator<Item = &PrefKey> {
        self.entries.keys()
    }

    /// Returns the number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the view has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl fmt::Debug for MergedView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.entries.iter()).finish()
    }
}

impl<K: Into<PrefKey>> FromIterator<(K, Option<Value>)> for MergedView {
    fn from_iter<I: IntoIterator<Item = (K, Option<Value>)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().map(|(k, v)| (k.into(), v)).collect(),
        }
    }
}

/// Computes the merged view of `schema` over `store`.
#[must_use]
pub fn compute_view(schema: &PreferenceSchema, store: &RawStore) -> MergedView {
    let mut entries = Vec::with_capacity(schema.len() + store.len());

    for accessor in schema.accessors() {
        entries.push((accessor.key().clone(), accessor.get(store)));
    }

    for (key, value) in store.iter() {
        if !schema.is_declared(key) {
            entries.push((key.clone(), Some(value.clone())));
        }
    }

    MergedView {
        entries: entries.into_iter().collect(),
    }
}
