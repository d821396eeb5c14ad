// src/filtering/mod.rs

//! Provides standalone functions for language filtering logic.
//!
//! These functions are used by the plugin hooks to label pages and to decide
//! which navigation entries and search entries belong to the default
//! language. They are exposed publicly to allow for their use in other
//! contexts.

mod language;

pub use language::{matches_language, page_language};
