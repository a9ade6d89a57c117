//! Preference declarations and the schema registry for prefset.
//!
//! This crate provides:
//! - [`PreferenceSchema`] - Per-entity-type declarations with defaults
//! - [`PreferenceAccessor`] - The get/set/has triad built for each declaration
//! - [`SchemaRegistry`] - Frozen, shareable table of schemas by entity type
//! - [`validate_column`] - Storage contract checks run when a type opts in
//! - [`EntityCatalog`] - Storage introspection supplied by the host

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod accessor;
pub mod catalog;
pub mod column;
pub mod config;
pub mod registry;
pub mod schema;
pub mod validate;

pub use accessor::PreferenceAccessor;
pub use catalog::{EntityCatalog, StaticCatalog};
pub use column::ColumnKind;
pub use config::{DEFAULT_COLUMN, RegistryConfig};
pub use registry::{SchemaRegistry, SchemaRegistryBuilder};
pub use schema::{PreferenceDefinition, PreferenceOptions, PreferenceSchema};
pub use validate::{ValidationOutcome, validate_column};
