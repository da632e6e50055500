//! Error types for query generation and export

use thiserror::Error;

/// Crate-wide result alias
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised while resolving a template into a query
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TemplateError {
    /// The template references a placeholder with no value
    #[error("template `{template}` references undefined placeholder `{name}`")]
    MissingValue { template: String, name: String },

    /// Unbalanced braces
    #[error("malformed template `{template}` at byte {position}: {message}")]
    Malformed {
        template: String,
        position: usize,
        message: String,
    },
}

/// Invalid arguments or settings, reported before any query is generated
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("unknown preset `{name}` (available: {})", .available.join(", "))]
    UnknownPreset {
        name: String,
        available: Vec<String>,
    },

    #[error("at least one preset must be selected")]
    EmptyPresetSelection,

    #[error("missing required value: {0}")]
    MissingValue(&'static str),

    #[error("unsupported export file `{path}`: expected a .json or .csv suffix")]
    UnsupportedFormat { path: String },

    #[error("invalid preset `{name}`: {reason}")]
    InvalidPreset { name: String, reason: String },

    #[error("unknown search engine `{0}` (expected google, bing or ddg)")]
    UnknownEngine(String),
}

/// Top-level error type
#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Template(#[from] TemplateError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON export failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("CSV export failed: {0}")]
    Csv(#[from] csv::Error),

    #[error("invalid settings file: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_preset_message_lists_choices() {
        let err = ConfigError::UnknownPreset {
            name: "nope".to_string(),
            available: vec!["quick".to_string(), "leaks_news".to_string()],
        };
        assert_eq!(
            err.to_string(),
            "unknown preset `nope` (available: quick, leaks_news)"
        );
    }

    #[test]
    fn test_config_error_converts_transparently() {
        let err: Error = ConfigError::EmptyPresetSelection.into();
        assert_eq!(err.to_string(), "at least one preset must be selected");
        assert!(matches!(err, Error::Config(_)));
    }
}
