//! Generation request and related data models

use crate::engines::SearchEngine;
use crate::error::ConfigError;
use crate::presets::DEFAULT_PRESET;
use crate::query::DateRange;

/// Everything needed to generate one batch of queries
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerateRequest {
    /// Organization name substituted for `{org}`
    pub org: String,
    /// Domain substituted for `{domain}`
    pub domain: String,
    /// Presets to expand, in order
    pub presets: Vec<String>,
    /// Literal queries appended after the preset queries
    pub custom: Vec<String>,
    /// Optional date bounds
    pub dates: DateRange,
    /// Target engine for URL construction
    pub engine: SearchEngine,
}

impl GenerateRequest {
    /// Create a request using the default preset and engine
    pub fn new(org: impl Into<String>, domain: impl Into<String>) -> Self {
        Self {
            org: org.into(),
            domain: domain.into(),
            presets: vec![DEFAULT_PRESET.to_string()],
            custom: Vec::new(),
            dates: DateRange::default(),
            engine: SearchEngine::default(),
        }
    }

    /// Replace the preset selection
    pub fn with_presets<I, S>(mut self, presets: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.presets = presets.into_iter().map(Into::into).collect();
        self
    }

    /// Append literal custom queries
    pub fn with_custom<I, S>(mut self, custom: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.custom.extend(custom.into_iter().map(Into::into));
        self
    }

    /// Set lower date bound
    pub fn with_after(mut self, after: impl Into<String>) -> Self {
        self.dates.after = Some(after.into());
        self
    }

    /// Set upper date bound
    pub fn with_before(mut self, before: impl Into<String>) -> Self {
        self.dates.before = Some(before.into());
        self
    }

    /// Set target engine
    pub fn with_engine(mut self, engine: SearchEngine) -> Self {
        self.engine = engine;
        self
    }

    /// Check required values
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.org.trim().is_empty() {
            return Err(ConfigError::MissingValue("org"));
        }
        if self.domain.trim().is_empty() {
            return Err(ConfigError::MissingValue("domain"));
        }
        if self.presets.is_empty() {
            return Err(ConfigError::EmptyPresetSelection);
        }
        Ok(())
    }
}
