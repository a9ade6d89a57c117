//! Core values, keys, and raw stores for prefset.
//!
//! This crate provides:
//! - [`Value`] - The value type stored in preferences and used as defaults
//! - [`PrefKey`] - Canonical string form of every preference key
//! - [`RawStore`] - The flat map an entity persists, replaced wholesale on write
//! - [`Error`] - Declaration-time error taxonomy with fixed messages
//! - Persistent collections ([`LtVec`], [`LtMap`])

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod collections;
pub mod error;
pub mod key;
pub mod store;
pub mod value;

#[cfg(feature = "serde")]
mod serde_support;

pub use collections::{LtMap, LtVec};
pub use error::{Error, ErrorContext, ErrorKind, RESERVED_COLUMN};
pub use key::PrefKey;
pub use store::RawStore;
pub use value::Value;

/// Result type for prefset operations.
pub type Result<T> = std::result::Result<T, Error>;
