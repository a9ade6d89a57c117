//! Integration tests for Layer 1: Schema
//!
//! Tests preference declarations, storage validation, and the registry.

mod registry;
mod validation;
