//! Text column encoding for prefset raw stores.
//!
//! The host persistence layer owns the column; this crate only turns a
//! [`RawStore`](prefset_foundation::RawStore) into column text and back.
//!
//! This crate provides:
//! - [`PreferenceCodec`] - The encode/decode hook
//! - [`JsonCodec`] - JSON object encoding
//! - [`dump`], [`load`], [`reload`] - Record-level helpers

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod codec;
pub mod column;

pub use codec::{JsonCodec, PreferenceCodec};
pub use column::{dump, load, reload};
