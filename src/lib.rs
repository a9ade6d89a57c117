//! prefset - Declared preferences merged over an entity's raw key/value store
//!
//! This crate re-exports all layers of the prefset system for convenient access.
//! For detailed documentation, see the individual layer crates.
//!
//! # Architecture
//!
//! ```text
//! Layer 3: prefset_codec      Text column encoding, load/dump/reload
//! Layer 2: prefset_store      Merged views, HasPreferences, PreferenceRecord
//! Layer 1: prefset_schema     Declarations, accessors, validation, registry
//! Layer 0: prefset_foundation Core types (Value, PrefKey, RawStore, Error)
//! ```

pub use prefset_codec as codec;
pub use prefset_foundation as foundation;
pub use prefset_schema as schema;
pub use prefset_store as store;
