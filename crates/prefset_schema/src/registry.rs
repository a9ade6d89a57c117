//! The process-wide table of preference schemas.
//!
//! Registration happens through [`SchemaRegistryBuilder`] during bootstrap.
//! [`build`](SchemaRegistryBuilder::build) freezes the result into a
//! [`SchemaRegistry`], which has no mutating methods and can be shared freely
//! across threads.

use std::collections::HashMap;
use std::sync::Arc;

use prefset_foundation::{Error, ErrorContext, Result};
use tracing::info;

use crate::catalog::EntityCatalog;
use crate::config::RegistryConfig;
use crate::schema::PreferenceSchema;
use crate::validate::{ValidationOutcome, validate_column};

/// Bootstrap-time registry under construction.
#[derive(Debug, Default)]
pub struct SchemaRegistryBuilder {
    config: RegistryConfig,
    schemas: HashMap<String, PreferenceSchema>,
    /// Entity types in opt-in order.
    order: Vec<String>,
}

impl SchemaRegistryBuilder {
    /// Creates a builder with the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a builder with the given configuration.
    #[must_use]
    pub fn with_config(config: RegistryConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    /// Returns the configuration in use.
    #[must_use]
    pub fn config(&self) -> &RegistryConfig {
        &self.config
    }

    /// Opts `entity_type` in, storing preferences in the configured default column.
    ///
    /// # Errors
    ///
    /// See [`has_preferences_in`](Self::has_preferences_in).
    pub fn has_preferences(
        &mut self,
        catalog: &dyn EntityCatalog,
        entity_type: &str,
    ) -> Result<&mut PreferenceSchema> {
        let column = self.config.default_column.clone();
        self.has_preferences_in(catalog, entity_type, &column)
    }

    /// Opts `entity_type` in, storing preferences in `column`.
    ///
    /// Returns the new, empty schema so preferences can be declared on it.
    ///
    /// # Errors
    ///
    /// Returns `AlreadyOptedIn` if the type already has a schema, or any
    /// storage validation error.
    pub fn has_preferences_in(
        &mut self,
        catalog: &dyn EntityCatalog,
        entity_type: &str,
        column: &str,
    ) -> Result<&mut PreferenceSchema> {
        if self.schemas.contains_key(entity_type) {
            return Err(Error::already_opted_in(entity_type)
                .with_context(ErrorContext::new().with_entity_type(entity_type)));
        }

        let outcome = validate_column(catalog, entity_type, column, &self.config)?;
        info!(
            entity_type,
            column,
            validated = outcome == ValidationOutcome::Validated,
            "Entity type opted in to preferences"
        );

        self.order.push(entity_type.to_string());
        Ok(self
            .schemas
            .entry(entity_type.to_string())
            .or_insert_with(|| PreferenceSchema::new(entity_type, column)))
    }

    /// Returns the schema under construction for `entity_type`.
    ///
    /// # Errors
    ///
    /// Returns `UnknownEntityType` if the type has not opted in.
    pub fn schema_mut(&mut self, entity_type: &str) -> Result<&mut PreferenceSchema> {
        self.schemas
            .get_mut(entity_type)
            .ok_or_else(|| Error::unknown_entity_type(entity_type))
    }

    /// Freezes the registry.
    #[must_use]
    pub fn build(self) -> SchemaRegistry {
        let mut schemas = self.schemas;
        let entries = self
            .order
            .into_iter()
            .filter_map(|ty| {
                let schema = schemas.remove(&ty)?;
                Some((ty, Arc::new(schema)))
            })
            .collect::<Vec<_>>();

        SchemaRegistry {
            config: self.config,
            index: entries
                .iter()
                .enumerate()
                .map(|(i, (ty, _))| (ty.clone(), i))
                .collect(),
            schemas: entries,
        }
    }
}

/// Frozen table of preference schemas, keyed by entity type.
#[derive(Clone, Debug, Default)]
pub struct SchemaRegistry {
    config: RegistryConfig,
    /// Schemas in opt-in order.
    schemas: Vec<(String, Arc<PreferenceSchema>)>,
    index: HashMap<String, usize>,
}

impl SchemaRegistry {
    /// Starts building a registry with the default configuration.
    #[must_use]
    pub fn builder() -> SchemaRegistryBuilder {
        SchemaRegistryBuilder::new()
    }

    /// Returns the configuration the registry was built with.
    #[must_use]
    pub fn config(&self) -> &RegistryConfig {
        &self.config
    }

    /// Returns the schema for `entity_type`, if it opted in.
    #[must_use]
    pub fn schema(&self, entity_type: &str) -> Option<Arc<PreferenceSchema>> {
        self.index
            .get(entity_type)
            .map(|&i| Arc::clone(&self.schemas[i].1))
    }

    /// Returns the schema for `entity_type`.
    ///
    /// # Errors
    ///
    /// Returns `UnknownEntityType` if the type never opted in.
    pub fn require(&self, entity_type: &str) -> Result<Arc<PreferenceSchema>> {
        self.schema(entity_type)
            .ok_or_else(|| Error::unknown_entity_type(entity_type))
    }

    /// Returns registered entity types in opt-in order.
    pub fn entity_types(&self) -> impl Iterator<Item = &str> {
        self.schemas.iter().map(|(ty, _)| ty.as_str())
    }

    /// Returns the number of registered entity types.
    #[must_use]
    pub fn len(&self) -> usize {
        self.schemas.len()
    }

    /// Returns true if no entity type opted in.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.schemas.is_empty()
    }
}
