//! Settings structures for gquery-rs configuration

use crate::engines::SearchEngine;
use crate::error::{ConfigError, Result};
use crate::presets::{PresetRegistry, DEFAULT_PRESET};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;

/// Main settings structure matching `gquery.yml`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub general: GeneralSettings,
    pub search: SearchSettings,
    /// User-defined presets: name -> ordered templates
    pub presets: HashMap<String, Vec<String>>,
}

impl Settings {
    /// Load settings from a YAML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_yaml(&content)
    }

    /// Parse settings from YAML text
    pub fn from_yaml(content: &str) -> Result<Self> {
        let settings: Settings = serde_yaml::from_str(content)?;
        Ok(settings)
    }

    /// Merge with environment variables (GQUERY_* prefix)
    pub fn merge_env(&mut self) {
        if let Ok(val) = std::env::var("GQUERY_DEBUG") {
            self.general.debug = val.parse().unwrap_or(false);
        }
        if let Ok(val) = std::env::var("GQUERY_ENGINE") {
            if !val.trim().is_empty() {
                self.search.default_engine = val;
            }
        }
    }

    /// Engine used when none is given on the command line
    pub fn default_engine(&self) -> std::result::Result<SearchEngine, ConfigError> {
        SearchEngine::parse_known(&self.search.default_engine)
    }

    /// Built-in presets plus the presets defined here
    pub fn preset_registry(&self) -> std::result::Result<PresetRegistry, ConfigError> {
        PresetRegistry::with_user_presets(&self.presets)
    }
}

/// General settings
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneralSettings {
    /// Enable debug logging
    pub debug: bool,
}

/// Generation defaults
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchSettings {
    /// Engine name: google, bing or ddg
    pub default_engine: String,
    /// Presets used when none are requested
    pub default_presets: Vec<String>,
}

impl Default for SearchSettings {
    fn default() -> Self {
        Self {
            default_engine: "google".to_string(),
            default_presets: vec![DEFAULT_PRESET.to_string()],
        }
    }
}
