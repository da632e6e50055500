//! Query presets
//!
//! A preset is a named, ordered group of templates covering one
//! reconnaissance strategy. The built-in table is fixed at build time;
//! settings files may add further presets on top of it.

use crate::error::ConfigError;
use crate::query::{self, PLACEHOLDERS};
use std::collections::HashMap;
use tracing::debug;

/// Built-in presets, in listing order
pub const BUILTIN_PRESETS: &[(&str, &[&str])] = &[
    (
        "quick",
        &[
            "site:{domain}",
            "\"{org}\" site:{domain}",
            "\"{org}\" \"{domain}\"",
        ],
    ),
    (
        "site_mapping",
        &[
            "site:{domain} -www.{domain}",
            "site:*.{domain}",
            "intitle:index.of site:{domain}",
        ],
    ),
    (
        "public_docs",
        &[
            "site:{domain} filetype:pdf OR filetype:docx OR filetype:xlsx",
            "site:{domain} ext:txt OR ext:log",
        ],
    ),
    (
        "exposed_dirs",
        &[
            "intitle:\"index of\" \"{domain}\"",
            "site:{domain} inurl:backup OR inurl:old OR inurl:archive",
        ],
    ),
    (
        "code_sharing",
        &[
            "site:pastebin.com \"{domain}\"",
            "site:github.com \"{org}\"",
            "\"{org}\" \"api_key\" OR \"password\"",
        ],
    ),
    (
        "login_admin",
        &[
            "site:{domain} inurl:admin",
            "site:{domain} intitle:\"login\"",
            "\"{org}\" intitle:\"portal\"",
        ],
    ),
    (
        "public_contacts",
        &[
            "\"{org}\" email",
            "\"{org}\" contact us\" site:{domain}",
            "\"{org}\" phone site:{domain}",
        ],
    ),
    (
        "leaks_news",
        &["\"{org}\" \"data leak\"", "\"{org}\" \"breach\""],
    ),
    (
        "cloud_storage",
        &[
            "site:s3.amazonaws.com \"{org}\"",
            "site:blob.core.windows.net \"{org}\"",
            "site:drive.google.com \"{org}\"",
        ],
    ),
];

/// Preset used when none is requested
pub const DEFAULT_PRESET: &str = "quick";

/// Look up a built-in preset
pub fn builtin(name: &str) -> Option<&'static [&'static str]> {
    BUILTIN_PRESETS
        .iter()
        .find(|(preset, _)| *preset == name)
        .map(|(_, templates)| *templates)
}

/// A named list of templates
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Preset {
    pub name: String,
    pub templates: Vec<String>,
    pub builtin: bool,
}

/// Registry of built-in and user-defined presets
#[derive(Debug, Clone)]
pub struct PresetRegistry {
    presets: HashMap<String, Preset>,
    /// Names in listing order: built-ins first, then user presets sorted
    order: Vec<String>,
}

impl PresetRegistry {
    /// Registry holding only the built-in presets
    pub fn builtin() -> Self {
        let mut registry = Self {
            presets: HashMap::new(),
            order: Vec::new(),
        };

        for (name, templates) in BUILTIN_PRESETS {
            registry.insert(Preset {
                name: name.to_string(),
                templates: templates.iter().map(|t| t.to_string()).collect(),
                builtin: true,
            });
        }

        registry
    }

    /// Built-in presets extended with user presets.
    ///
    /// User presets may only reference known placeholders and may not
    /// replace a built-in preset.
    pub fn with_user_presets(user: &HashMap<String, Vec<String>>) -> Result<Self, ConfigError> {
        let mut registry = Self::builtin();

        let mut names: Vec<&String> = user.keys().collect();
        names.sort();

        for name in names {
            let templates = &user[name];
            validate_user_preset(name, templates)?;
            if builtin(name).is_some() {
                return Err(ConfigError::InvalidPreset {
                    name: name.clone(),
                    reason: "name is already used by a built-in preset".to_string(),
                });
            }

            debug!("Registered user preset: {} ({} templates)", name, templates.len());
            registry.insert(Preset {
                name: name.clone(),
                templates: templates.clone(),
                builtin: false,
            });
        }

        Ok(registry)
    }

    fn insert(&mut self, preset: Preset) {
        self.order.push(preset.name.clone());
        self.presets.insert(preset.name.clone(), preset);
    }

    /// Get a preset by name
    pub fn get(&self, name: &str) -> Result<&Preset, ConfigError> {
        self.presets
            .get(name)
            .ok_or_else(|| ConfigError::UnknownPreset {
                name: name.to_string(),
                available: self.order.clone(),
            })
    }

    /// Check that every name exists, failing on the first unknown one
    pub fn validate<S: AsRef<str>>(&self, names: &[S]) -> Result<(), ConfigError> {
        if names.is_empty() {
            return Err(ConfigError::EmptyPresetSelection);
        }
        for name in names {
            self.get(name.as_ref())?;
        }
        Ok(())
    }

    /// All presets in listing order
    pub fn iter(&self) -> impl Iterator<Item = &Preset> {
        self.order.iter().filter_map(|name| self.presets.get(name))
    }

    /// Preset names in listing order
    pub fn names(&self) -> Vec<&str> {
        self.order.iter().map(|s| s.as_str()).collect()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.presets.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.presets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.presets.is_empty()
    }
}

impl Default for PresetRegistry {
    fn default() -> Self {
        Self::builtin()
    }
}

fn validate_user_preset(name: &str, templates: &[String]) -> Result<(), ConfigError> {
    let invalid = |reason: String| ConfigError::InvalidPreset {
        name: name.to_string(),
        reason,
    };

    if name.trim().is_empty() {
        return Err(invalid("preset name is empty".to_string()));
    }
    if templates.is_empty() {
        return Err(invalid("preset has no templates".to_string()));
    }

    for template in templates {
        let names = query::placeholders(template).map_err(|e| invalid(e.to_string()))?;
        if let Some(unknown) = names.iter().find(|n| !PLACEHOLDERS.contains(&n.as_str())) {
            return Err(invalid(format!(
                "template `{}` references undefined placeholder `{}`",
                template, unknown
            )));
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_table() {
        let registry = PresetRegistry::builtin();
        assert_eq!(registry.len(), 9);
        assert_eq!(registry.names()[0], "quick");
        assert_eq!(registry.names()[8], "cloud_storage");
        assert_eq!(registry.get("quick").unwrap().templates.len(), 3);
        assert!(registry.get("leaks_news").unwrap().builtin);
    }

    #[test]
    fn test_builtin_templates_only_use_known_placeholders() {
        for (name, templates) in BUILTIN_PRESETS {
            for template in *templates {
                let names = query::placeholders(template).unwrap();
                assert!(
                    names.iter().all(|n| PLACEHOLDERS.contains(&n.as_str())),
                    "{name}: {template}"
                );
            }
        }
    }

    #[test]
    fn test_unknown_preset() {
        let registry = PresetRegistry::builtin();
        match registry.get("nope") {
            Err(ConfigError::UnknownPreset { name, available }) => {
                assert_eq!(name, "nope");
                assert!(available.contains(&"quick".to_string()));
            }
            other => panic!("unexpected: {other:?}"),
        }
    }

    #[test]
    fn test_validate_selection() {
        let registry = PresetRegistry::builtin();
        assert!(registry.validate(&["quick", "leaks_news"]).is_ok());
        assert!(matches!(
            registry.validate(&["quick", "bogus"]),
            Err(ConfigError::UnknownPreset { .. })
        ));
        let empty: [&str; 0] = [];
        assert_eq!(
            registry.validate(&empty),
            Err(ConfigError::EmptyPresetSelection)
        );
    }

    #[test]
    fn test_user_presets() {
        let mut user = HashMap::new();
        user.insert(
            "jobs".to_string(),
            vec!["\"{org}\" careers site:{domain}".to_string()],
        );

        let registry = PresetRegistry::with_user_presets(&user).unwrap();
        assert_eq!(registry.len(), 10);
        assert_eq!(registry.names().last(), Some(&"jobs"));
        assert!(!registry.get("jobs").unwrap().builtin);
    }

    #[test]
    fn test_user_preset_unknown_placeholder() {
        let mut user = HashMap::new();
        user.insert("bad".to_string(), vec!["site:{tld}".to_string()]);

        assert!(matches!(
            PresetRegistry::with_user_presets(&user),
            Err(ConfigError::InvalidPreset { name, .. }) if name == "bad"
        ));
    }

    #[test]
    fn test_user_preset_cannot_shadow_builtin() {
        let mut user = HashMap::new();
        user.insert("quick".to_string(), vec!["site:{domain}".to_string()]);

        assert!(matches!(
            PresetRegistry::with_user_presets(&user),
            Err(ConfigError::InvalidPreset { .. })
        ));
    }
}
