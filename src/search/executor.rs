//! Query generation and orchestration

use super::models::GenerateRequest;
use crate::error::Result;
use crate::presets::PresetRegistry;
use crate::query::TemplateResolver;
use crate::results::{QueryContainer, ResultRecord};
use tracing::{debug, info};

/// Expands presets into deduplicated query/URL records
#[derive(Debug, Clone, Default)]
pub struct Generator {
    /// Preset lookup table
    presets: PresetRegistry,
}

impl Generator {
    /// Create a generator over the given presets
    pub fn new(presets: PresetRegistry) -> Self {
        Self { presets }
    }

    pub fn presets(&self) -> &PresetRegistry {
        &self.presets
    }

    /// Resolve, merge and deduplicate the queries for a request.
    ///
    /// Every preset name is checked before any template is resolved.
    pub fn collect_queries(&self, request: &GenerateRequest) -> Result<QueryContainer> {
        request.validate()?;
        self.presets.validate(request.presets.as_slice())?;

        let resolver = TemplateResolver::new(request.org.as_str(), request.domain.as_str())
            .with_date_range(request.dates.clone());
        let mut container = QueryContainer::new();

        for name in &request.presets {
            let preset = self.presets.get(name)?;
            debug!("Expanding preset {} ({} templates)", name, preset.templates.len());

            for template in &preset.templates {
                let query = resolver.resolve(template)?;
                container.add_query(query);
            }
        }

        container.extend_queries(request.custom.iter().cloned());

        info!(
            "Generated {} queries ({} duplicates dropped)",
            container.len(),
            container.duplicate_count()
        );
        Ok(container)
    }

    /// Generate one record per surviving query
    pub fn generate(&self, request: &GenerateRequest) -> Result<Vec<ResultRecord>> {
        let container = self.collect_queries(request)?;

        Ok(container
            .into_queries()
            .into_iter()
            .map(|query| {
                let url = request.engine.build_url(&query);
                ResultRecord { query, url }
            })
            .collect())
    }
}

/// Generate records using only the built-in presets
pub fn generate(request: &GenerateRequest) -> Result<Vec<ResultRecord>> {
    Generator::default().generate(request)
}
