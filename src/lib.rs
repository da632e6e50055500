//! gquery-rs: advanced search-engine query generator
//!
//! Builds pre-formatted Google, Bing and DuckDuckGo queries ("dorks") from
//! named presets for OSINT and security auditing. Queries are only
//! constructed, never sent.

pub mod cli;
pub mod config;
pub mod engines;
pub mod error;
pub mod export;
pub mod presets;
pub mod query;
pub mod results;
pub mod search;

pub use config::Settings;
pub use engines::{build_url, Engine, SearchEngine};
pub use error::{ConfigError, Error, Result, TemplateError};
pub use presets::{Preset, PresetRegistry};
pub use query::{resolve, DateRange, TemplateResolver};
pub use results::{QueryContainer, ResultRecord};
pub use search::{generate, GenerateRequest, Generator};

/// Application version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
