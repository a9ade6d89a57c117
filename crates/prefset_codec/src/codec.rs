//! Encoding raw stores to and from a text column.

use prefset_foundation::{Error, RawStore, Result};
use tracing::debug;

/// Converts a raw store to and from the text held in an entity's column.
pub trait PreferenceCodec {
    /// Encodes `store` as column text.
    ///
    /// # Errors
    ///
    /// Returns a `SerializationError` if the store cannot be encoded.
    fn encode(&self, store: &RawStore) -> Result<String>;

    /// Decodes column text into a store.
    ///
    /// # Errors
    ///
    /// Returns a `SerializationError` if the text is not a valid encoded map.
    fn decode(&self, text: &str) -> Result<RawStore>;
}

/// Stores preferences as a JSON object.
///
/// A blank column or a literal `null` decodes to an empty store, matching a
/// freshly created row. A document that repeats a key is rejected, as is any
/// float that JSON cannot represent (NaN or infinity).
#[derive(Clone, Copy, Debug, Default)]
pub struct JsonCodec {
    pretty: bool,
}

impl JsonCodec {
    /// Creates a codec producing compact JSON.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a codec producing indented JSON.
    #[must_use]
    pub fn pretty() -> Self {
        Self { pretty: true }
    }
}

impl PreferenceCodec for JsonCodec {
    fn encode(&self, store: &RawStore) -> Result<String> {
        let encoded = if self.pretty {
            serde_json::to_string_pretty(store)
        } else {
            serde_json::to_string(store)
        }
        .map_err(|e| Error::serialization(e.to_string()))?;
        debug!(entries = store.len(), "Encoded preference column");
        Ok(encoded)
    }

    fn decode(&self, text: &str) -> Result<RawStore> {
        let trimmed = text.trim();
        if trimmed.is_empty() || trimmed == "null" {
            return Ok(RawStore::new());
        }

        let store: RawStore =
            serde_json::from_str(trimmed).map_err(|e| Error::serialization(e.to_string()))?;
        debug!(entries = store.len(), "Decoded preference column");
        Ok(store)
    }
}
