//! Merged preference views and raw-store mutation for prefset.
//!
//! This crate provides:
//! - [`compute_view`] / [`MergedView`] - Declared preferences resolved against a raw store
//! - [`HasPreferences`] - Get/set/has, add/delete, and the merged view for a host entity
//! - [`PreferenceRecord`] - A ready-made host entity

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod record;
pub mod view;

pub use record::{HasPreferences, PreferenceRecord};
pub use view::{MergedView, compute_view};
