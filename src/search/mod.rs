//! Query generation module
//!
//! Expands presets into queries, merges custom queries,
//! deduplicates, and pairs each query with a search URL.

mod executor;
mod models;

pub use executor::{generate, Generator};
pub use models::*;
