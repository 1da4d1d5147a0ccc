//! Top-level lexgraph configuration with layered resolution.

use std::path::Path;

use serde::{Deserialize, Serialize};

use super::{defaults, ArtifactConfig, ExpansionConfig, ExtractorConfig};
use crate::errors::ConfigError;

/// Top-level configuration aggregating all sub-configs.
///
/// Resolution order (highest priority first):
/// 1. Environment variables (`LEXGRAPH_*`)
/// 2. Project config (`lexgraph.toml` in the project root)
/// 3. Compiled defaults
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct LexGraphConfig {
    pub extractor: ExtractorConfig,
    pub expansion: ExpansionConfig,
    pub artifacts: ArtifactConfig,
}

impl LexGraphConfig {
    /// Load configuration for the project rooted at `root`.
    pub fn load(root: &Path) -> Result<Self, ConfigError> {
        let project_config_path = root.join(defaults::DEFAULT_CONFIG_FILENAME);
        let mut config = if project_config_path.exists() {
            Self::from_file(&project_config_path)?
        } else {
            Self::default()
        };

        Self::apply_env_overrides(&mut config);
        Self::validate(&config)?;

        Ok(config)
    }

    /// Load configuration from a TOML file. Missing keys take their defaults.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
            path: path.display().to_string(),
        })?;
        toml::from_str(&content).map_err(|e| ConfigError::ParseError {
            path: path.display().to_string(),
            message: e.to_string(),
        })
    }

    /// Load configuration from a TOML string (for testing).
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
            path: "<string>".to_string(),
            message: e.to_string(),
        })
    }

    /// Validate the configuration values.
    pub fn validate(config: &LexGraphConfig) -> Result<(), ConfigError> {
        let expansion = &config.expansion;
        if expansion.max_hops == 0 {
            return Err(invalid("expansion.max_hops", "must be at least 1"));
        }
        if expansion.max_nodes_added == 0 {
            return Err(invalid("expansion.max_nodes_added", "must be at least 1"));
        }
        for (field, value) in [
            ("expansion.decay_per_hop", expansion.decay_per_hop),
            ("expansion.priority_weight", expansion.priority_weight),
            ("expansion.default_primary_score", expansion.default_primary_score),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(invalid(field, "must be a finite, non-negative number"));
            }
        }
        if config.extractor.exception_window == 0 {
            return Err(invalid("extractor.exception_window", "must be greater than 0"));
        }
        if config.extractor.exception_signals.iter().any(|s| s.trim().is_empty()) {
            return Err(invalid(
                "extractor.exception_signals",
                "signal phrases must not be blank",
            ));
        }
        if config
            .extractor
            .postpositional_exception_signals
            .iter()
            .any(|s| s.trim().is_empty())
        {
            return Err(invalid(
                "extractor.postpositional_exception_signals",
                "signal phrases must not be blank",
            ));
        }
        if config.extractor.definition_signals.iter().any(|s| s.trim().is_empty()) {
            return Err(invalid(
                "extractor.definition_signals",
                "signal phrases must not be blank",
            ));
        }
        Ok(())
    }

    /// Apply environment variable overrides.
    /// Pattern: `LEXGRAPH_MAX_HOPS`, `LEXGRAPH_DECAY_PER_HOP`, etc.
    fn apply_env_overrides(config: &mut LexGraphConfig) {
        if let Ok(val) = std::env::var("LEXGRAPH_MAX_HOPS") {
            if let Ok(v) = val.parse::<usize>() {
                config.expansion.max_hops = v;
            }
        }
        if let Ok(val) = std::env::var("LEXGRAPH_MAX_NODES_ADDED") {
            if let Ok(v) = val.parse::<usize>() {
                config.expansion.max_nodes_added = v;
            }
        }
        if let Ok(val) = std::env::var("LEXGRAPH_DECAY_PER_HOP") {
            if let Ok(v) = val.parse::<f64>() {
                config.expansion.decay_per_hop = v;
            }
        }
        if let Ok(val) = std::env::var("LEXGRAPH_EXCEPTION_WINDOW") {
            if let Ok(v) = val.parse::<usize>() {
                config.extractor.exception_window = v;
            }
        }
    }

    /// Serialize the config back to TOML.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::ParseError {
            path: "<serialization>".to_string(),
            message: e.to_string(),
        })
    }
}

fn invalid(field: &str, message: &str) -> ConfigError {
    ConfigError::ValidationFailed {
        field: field.to_string(),
        message: message.to_string(),
    }
}
