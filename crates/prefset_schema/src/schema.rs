//! Preference schemas.
//!
//! A schema belongs to one entity type and lists the preferences that type
//! declares, each with an optional default. Declarations are checked when they
//! are made, so a misconfigured type fails during bootstrap.

use prefset_foundation::{Error, ErrorContext, LtMap, PrefKey, Result, Value};
use tracing::debug;

use crate::accessor::PreferenceAccessor;

/// A declared preference.
#[derive(Clone, Debug, PartialEq)]
pub struct PreferenceDefinition {
    /// Preference name.
    pub name: PrefKey,
    /// Default value used while nothing is stored. `None` means no default.
    pub default: Option<Value>,
}

/// Options accepted when declaring a preference.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PreferenceOptions {
    /// Default value, if any.
    pub default: Option<Value>,
}

impl PreferenceOptions {
    /// Creates options with no default.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the default value.
    #[must_use]
    pub fn with_default(mut self, default: impl Into<Value>) -> Self {
        self.default = Some(default.into());
        self
    }
}

/// The declared preferences of one entity type.
#[derive(Clone, Debug)]
pub struct PreferenceSchema {
    entity_type: String,
    column: String,
    /// Definitions in declaration order.
    definitions: Vec<PreferenceDefinition>,
    defaults: LtMap<PrefKey, Option<Value>>,
    accessors: LtMap<PrefKey, PreferenceAccessor>,
}

impl PreferenceSchema {
    /// Creates an empty schema for `entity_type`, stored in `column`.
    #[must_use]
    pub fn new(entity_type: impl Into<String>, column: impl Into<String>) -> Self {
        Self {
            entity_type: entity_type.into(),
            column: column.into(),
            definitions: Vec::new(),
            defaults: LtMap::new(),
            accessors: LtMap::new(),
        }
    }

    /// Returns the entity type this schema belongs to.
    #[must_use]
    pub fn entity_type(&self) -> &str {
        &self.entity_type
    }

    /// Returns the column holding the raw store.
    #[must_use]
    pub fn column(&self) -> &str {
        &self.column
    }

    /// Declares a preference.
    ///
    /// # Errors
    ///
    /// Returns `InvalidDeclaration` if the name is blank, or
    /// `DuplicateDeclaration` if it was already declared.
    pub fn declare(&mut self, name: impl Into<PrefKey>, options: PreferenceOptions) -> Result<()> {
        let name = name.into();
        let context = || ErrorContext::new().with_entity_type(&self.entity_type);

        if name.is_blank() {
            return Err(Error::invalid_declaration().with_context(context()));
        }
        if self.is_declared(&name) {
            return Err(Error::duplicate_declaration(name.as_str())
                .with_context(context().with_preference(name.as_str())));
        }

        debug!(
            entity_type = %self.entity_type,
            preference = %name,
            has_default = options.default.is_some(),
            "Declared preference"
        );

        self.defaults = self.defaults.insert(name.clone(), options.default.clone());
        self.accessors = self.accessors.insert(
            name.clone(),
            PreferenceAccessor::new(name.clone(), options.default.clone()),
        );
        self.definitions.push(PreferenceDefinition {
            name,
            default: options.default,
        });
        Ok(())
    }

    /// Builder form of [`declare`](Self::declare).
    ///
    /// # Errors
    ///
    /// Same as [`declare`](Self::declare).
    pub fn with_preference(
        mut self,
        name: impl Into<PrefKey>,
        options: PreferenceOptions,
    ) -> Result<Self> {
        self.declare(name, options)?;
        Ok(self)
    }

    /// Returns declared names in declaration order.
    #[must_use]
    pub fn declared_names(&self) -> Vec<PrefKey> {
        self.definitions.iter().map(|d| d.name.clone()).collect()
    }

    /// Returns a snapshot of `name -> default` for every declared preference.
    #[must_use]
    pub fn defaults(&self) -> LtMap<PrefKey, Option<Value>> {
        self.defaults.clone()
    }

    /// Returns the definitions in declaration order.
    #[must_use]
    pub fn definitions(&self) -> &[PreferenceDefinition] {
        &self.definitions
    }

    /// Returns the definition for `name`.
    #[must_use]
    pub fn definition(&self, name: &str) -> Option<&PreferenceDefinition> {
        self.definitions.iter().find(|d| d.name == *name)
    }

    /// Returns the accessor for a declared preference.
    #[must_use]
    pub fn accessor(&self, name: &str) -> Option<&PreferenceAccessor> {
        self.accessors.get(name)
    }

    /// Returns an iterator over accessors in declaration order.
    pub fn accessors(&self) -> impl Iterator<Item = &PreferenceAccessor> {
        self.definitions
            .iter()
            .filter_map(|d| self.accessors.get(d.name.as_str()))
    }

    /// Returns true if `name` is declared.
    #[must_use]
    pub fn is_declared(&self, name: &str) -> bool {
        self.defaults.contains_key(name)
    }

    /// Returns the number of declared preferences.
    #[must_use]
    pub fn len(&self) -> usize {
        self.definitions.len()
    }

    /// Returns true if nothing is declared.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.definitions.is_empty()
    }
}
