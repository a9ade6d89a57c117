//! Moving preference records in and out of their storage column.
//!
//! Changes made through a record live only in memory until [`dump`] writes
//! them out; [`reload`] discards anything not yet dumped.

use std::sync::Arc;

use prefset_foundation::{ErrorContext, Result};
use prefset_schema::PreferenceSchema;
use prefset_store::{HasPreferences, PreferenceRecord};

use crate::codec::PreferenceCodec;

/// Encodes an entity's raw store as column text.
///
/// # Errors
///
/// Returns a `SerializationError` if encoding fails.
pub fn dump<E: HasPreferences + ?Sized>(
    entity: &E,
    codec: &dyn PreferenceCodec,
) -> Result<String> {
    codec
        .encode(entity.raw_preferences())
        .map_err(|e| e.with_context(entity_context(entity)))
}

/// Builds a record for `schema` from column text.
///
/// # Errors
///
/// Returns a `SerializationError` if the text cannot be decoded.
pub fn load(
    schema: Arc<PreferenceSchema>,
    text: &str,
    codec: &dyn PreferenceCodec,
) -> Result<PreferenceRecord> {
    let store = codec
        .decode(text)
        .map_err(|e| e.with_context(ErrorContext::new().with_entity_type(schema.entity_type())))?;
    Ok(PreferenceRecord::with_store(schema, store))
}

/// Replaces an entity's raw store with the one decoded from column text.
///
/// # Errors
///
/// Returns a `SerializationError` if the text cannot be decoded; the entity
/// is left unchanged.
pub fn reload<E: HasPreferences + ?Sized>(
    entity: &mut E,
    text: &str,
    codec: &dyn PreferenceCodec,
) -> Result<()> {
    let store = codec
        .decode(text)
        .map_err(|e| e.with_context(entity_context(entity)))?;
    entity.replace_raw_preferences(store);
    Ok(())
}

fn entity_context<E: HasPreferences + ?Sized>(entity: &E) -> ErrorContext {
    ErrorContext::new().with_entity_type(entity.preference_schema().entity_type())
}
