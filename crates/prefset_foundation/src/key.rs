//! Canonical preference keys.
//!
//! Every key that crosses the public API is normalized to a [`PrefKey`] first,
//! so declared names, stored keys, and lookups all compare as plain strings.

use std::borrow::Borrow;
use std::fmt;
use std::ops::Deref;
use std::sync::Arc;

/// A preference key in canonical string form.
///
/// Comparison is exact and case-sensitive. Cloning is O(1).
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PrefKey(Arc<str>);

impl PrefKey {
    /// Creates a key from anything string-like.
    #[must_use]
    pub fn new(name: impl AsRef<str>) -> Self {
        Self(Arc::from(name.as_ref()))
    }

    /// Returns the key as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns true if the key carries no usable name (empty or whitespace only).
    #[must_use]
    pub fn is_blank(&self) -> bool {
        self.0.trim().is_empty()
    }
}

impl Deref for PrefKey {
    type Target = str;

    fn deref(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for PrefKey {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for PrefKey {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for PrefKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", &*self.0)
    }
}

impl fmt::Display for PrefKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for PrefKey {
    fn from(s: &str) -> Self {
        Self(Arc::from(s))
    }
}

impl From<String> for PrefKey {
    fn from(s: String) -> Self {
        Self(Arc::from(s))
    }
}

impl From<&String> for PrefKey {
    fn from(s: &String) -> Self {
        Self(Arc::from(s.as_str()))
    }
}

impl From<Arc<str>> for PrefKey {
    fn from(s: Arc<str>) -> Self {
        Self(s)
    }
}

impl From<&PrefKey> for PrefKey {
    fn from(key: &PrefKey) -> Self {
        key.clone()
    }
}

impl PartialEq<str> for PrefKey {
    fn eq(&self, other: &str) -> bool {
        &*self.0 == other
    }
}

impl PartialEq<&str> for PrefKey {
    fn eq(&self, other: &&str) -> bool {
        &*self.0 == *other
    }
}
