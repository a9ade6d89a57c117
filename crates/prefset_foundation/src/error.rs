//! Error types for prefset.
//!
//! Uses `thiserror` for ergonomic error definition. Every declaration-time
//! failure carries a fixed message so hosts can surface it verbatim.

use std::fmt;

use thiserror::Error;

/// The column name reserved for the merged preference view.
pub const RESERVED_COLUMN: &str = "prefs";

/// The main error type for prefset operations.
#[derive(Debug, Error)]
#[error("{kind}")]
pub struct Error {
    /// The kind of error that occurred.
    pub kind: ErrorKind,
    /// Optional context about where the error occurred.
    pub context: Option<ErrorContext>,
}

impl Error {
    /// Creates a new error with the given kind.
    #[must_use]
    pub fn new(kind: ErrorKind) -> Self {
        Self {
            kind,
            context: None,
        }
    }

    /// Adds context to this error.
    #[must_use]
    pub fn with_context(mut self, context: ErrorContext) -> Self {
        self.context = Some(context);
        self
    }

    /// Creates a reserved column name error.
    #[must_use]
    pub fn reserved_name(column: impl Into<String>) -> Self {
        Self::new(ErrorKind::ReservedName {
            column: column.into(),
        })
    }

    /// Creates a missing column error.
    #[must_use]
    pub fn missing_column(entity_type: impl Into<String>, column: impl Into<String>) -> Self {
        Self::new(ErrorKind::MissingColumn {
            entity_type: entity_type.into(),
            column: column.into(),
        })
    }

    /// Creates a wrong column type error.
    #[must_use]
    pub fn wrong_column_type(
        column: impl Into<String>,
        expected: impl Into<String>,
        actual: impl Into<String>,
    ) -> Self {
        Self::new(ErrorKind::WrongColumnType {
            column: column.into(),
            expected: expected.into(),
            actual: actual.into(),
        })
    }

    /// Creates an invalid declaration error (no usable name).
    #[must_use]
    pub fn invalid_declaration() -> Self {
        Self::new(ErrorKind::InvalidDeclaration)
    }

    /// Creates a duplicate declaration error.
    #[must_use]
    pub fn duplicate_declaration(name: impl Into<String>) -> Self {
        Self::new(ErrorKind::DuplicateDeclaration { name: name.into() })
    }

    /// Creates an error for an entity type opting in twice.
    #[must_use]
    pub fn already_opted_in(entity_type: impl Into<String>) -> Self {
        Self::new(ErrorKind::AlreadyOptedIn {
            entity_type: entity_type.into(),
        })
    }

    /// Creates an unknown entity type error.
    #[must_use]
    pub fn unknown_entity_type(entity_type: impl Into<String>) -> Self {
        Self::new(ErrorKind::UnknownEntityType(entity_type.into()))
    }

    /// Creates a serialization error.
    #[must_use]
    pub fn serialization(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::SerializationError(message.into()))
    }

    /// Returns true if this error was raised while declaring a type or preference.
    #[must_use]
    pub fn is_declaration_error(&self) -> bool {
        matches!(
            self.kind,
            ErrorKind::ReservedName { .. }
                | ErrorKind::MissingColumn { .. }
                | ErrorKind::WrongColumnType { .. }
                | ErrorKind::InvalidDeclaration
                | ErrorKind::DuplicateDeclaration { .. }
                | ErrorKind::AlreadyOptedIn { .. }
        )
    }
}

/// Categorized error kinds for pattern matching.
#[derive(Debug, Error)]
pub enum ErrorKind {
    /// The storage column was given the reserved name.
    #[error("Preference column name cannot be named 'prefs'.")]
    ReservedName {
        /// The rejected column name.
        column: String,
    },

    /// The host entity type has no column with the declared name.
    #[error("{entity_type} must have column '{column}'.")]
    MissingColumn {
        /// The entity type that opted in.
        entity_type: String,
        /// The column that was not found.
        column: String,
    },

    /// The column exists but cannot hold an encoded map.
    #[error("{column} must be of type '{expected}'.")]
    WrongColumnType {
        /// The offending column.
        column: String,
        /// The column kind that is required.
        expected: String,
        /// The column kind the host actually reported.
        actual: String,
    },

    /// A preference was declared without a name.
    #[error("Preference name must be specified.")]
    InvalidDeclaration,

    /// A preference name was declared twice on the same entity type.
    #[error("{name} has already been specified.")]
    DuplicateDeclaration {
        /// The repeated preference name.
        name: String,
    },

    /// An entity type declared its preference column twice.
    #[error("{entity_type} has already declared a preference column.")]
    AlreadyOptedIn {
        /// The entity type.
        entity_type: String,
    },

    /// No schema exists for the requested entity type.
    #[error("no preference schema registered for '{0}'")]
    UnknownEntityType(String),

    /// Encoding or decoding a raw store failed.
    #[error("serialization error: {0}")]
    SerializationError(String),
}

/// Context about where an error occurred.
#[derive(Debug, Clone, Default)]
pub struct ErrorContext {
    /// Entity type being declared or loaded.
    pub entity_type: Option<String>,
    /// Preference name involved, if any.
    pub preference: Option<String>,
}

impl ErrorContext {
    /// Creates a new empty context.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the entity type.
    #[must_use]
    pub fn with_entity_type(mut self, entity_type: impl Into<String>) -> Self {
        self.entity_type = Some(entity_type.into());
        self
    }

    /// Sets the preference name.
    #[must_use]
    pub fn with_preference(mut self, preference: impl Into<String>) -> Self {
        self.preference = Some(preference.into());
        self
    }
}

impl fmt::Display for ErrorContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (&self.entity_type, &self.preference) {
            (Some(ty), Some(pref)) => write!(f, "in {ty}.{pref}"),
            (Some(ty), None) => write!(f, "in {ty}"),
            (None, Some(pref)) => write!(f, "in preference {pref}"),
            (None, None) => Ok(()),
        }
    }
}
