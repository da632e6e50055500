//! Search engine module
//!
//! Builds percent-encoded result-page URLs for the supported engines.

mod registry;
mod traits;

// Engine implementations
pub mod bing;
pub mod duckduckgo;
pub mod google;

pub use registry::{EngineRegistry, ENGINES};
pub use traits::*;

use crate::error::ConfigError;
use std::fmt;
use std::sync::Arc;

/// Target search engine
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum SearchEngine {
    Google,
    Bing,
    DuckDuckGo,
    /// Any engine without a URL shape; queries pass through unencoded
    Other(String),
}

impl SearchEngine {
    /// Match `google`, `bing` or `ddg` exactly; anything else becomes `Other`
    pub fn from_name(name: &str) -> Self {
        match name {
            "google" => Self::Google,
            "bing" => Self::Bing,
            "ddg" => Self::DuckDuckGo,
            _ => Self::Other(name.to_string()),
        }
    }

    /// Like `from_name`, but rejects engines without a URL shape
    pub fn parse_known(name: &str) -> Result<Self, ConfigError> {
        match Self::from_name(name) {
            Self::Other(name) => Err(ConfigError::UnknownEngine(name)),
            engine => Ok(engine),
        }
    }

    /// Canonical name
    pub fn as_str(&self) -> &str {
        match self {
            Self::Google => "google",
            Self::Bing => "bing",
            Self::DuckDuckGo => "ddg",
            Self::Other(name) => name,
        }
    }

    /// Console label, e.g. `GOOGLE`
    pub fn label(&self) -> String {
        match self.engine() {
            Some(engine) => engine.label(),
            None => self.as_str().to_uppercase(),
        }
    }

    /// Engine implementation, if this is a built-in engine
    pub fn engine(&self) -> Option<&'static Arc<dyn Engine>> {
        match self {
            Self::Other(_) => None,
            known => ENGINES.get(known.as_str()),
        }
    }

    /// Build the search URL for `query`
    pub fn build_url(&self, query: &str) -> String {
        build_url(self, query)
    }
}

impl Default for SearchEngine {
    fn default() -> Self {
        Self::Google
    }
}

impl fmt::Display for SearchEngine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Build the result-page URL for `query` on `engine`.
///
/// Engines without a URL shape return the query unchanged.
pub fn build_url(engine: &SearchEngine, query: &str) -> String {
    match engine.engine() {
        Some(engine) => engine.search_url(query),
        None => query.to_string(),
    }
}
