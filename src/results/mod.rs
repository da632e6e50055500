//! Result types and container for generated queries

mod container;
mod types;

pub use container::{dedup_preserving_order, QueryContainer};
pub use types::*;
