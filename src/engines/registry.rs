//! Engine registry for looking up engines by name

use super::traits::Engine;
use super::{bing, duckduckgo, google};
use once_cell::sync::Lazy;
use std::collections::HashMap;
use std::sync::Arc;

/// Process-wide registry of the built-in engines
pub static ENGINES: Lazy<EngineRegistry> = Lazy::new(EngineRegistry::with_defaults);

/// Registry of all available search engines
pub struct EngineRegistry {
    /// Engines by name
    engines: HashMap<String, Arc<dyn Engine>>,
}

impl EngineRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        Self {
            engines: HashMap::new(),
        }
    }

    /// Registry holding google, bing and ddg
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        registry.register(Arc::new(google::Google::new()));
        registry.register(Arc::new(bing::Bing::new()));
        registry.register(Arc::new(duckduckgo::DuckDuckGo::new()));
        registry
    }

    /// Register an engine under its name
    pub fn register(&mut self, engine: Arc<dyn Engine>) {
        self.engines.insert(engine.name().to_string(), engine);
    }

    /// Get an engine by exact name
    pub fn get(&self, name: &str) -> Option<&Arc<dyn Engine>> {
        self.engines.get(name)
    }
}

impl Default for EngineRegistry {
    fn default() -> Self {
        Self::new()
    }
}
