//! Column kinds reported by a host entity catalog.

use std::fmt;

/// The storage kind of a host entity column.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ColumnKind {
    /// Unbounded text, able to hold an encoded preference map.
    Text,
    /// Bounded string.
    String,
    /// Integer.
    Integer,
    /// Floating point.
    Float,
    /// Boolean.
    Boolean,
    /// Raw bytes.
    Binary,
    /// Date and time.
    Timestamp,
    /// Native structured document.
    Json,
}

impl ColumnKind {
    /// Returns the lowercase name of this kind.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::String => "string",
            Self::Integer => "integer",
            Self::Float => "float",
            Self::Boolean => "boolean",
            Self::Binary => "binary",
            Self::Timestamp => "timestamp",
            Self::Json => "json",
        }
    }
}

impl fmt::Display for ColumnKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
