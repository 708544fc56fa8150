//! Converter configuration
//!
//! ```rust,ignore
//! use logicform_ir::config::{ConverterConfig, Preset};
//!
//! // preset only
//! let config = ConverterConfig::preset(Preset::Canonical).build()?;
//!
//! // preset + overrides
//! let config = ConverterConfig::preset(Preset::Compact)
//!     .batch(BatchConfig::default().skip_failures(false))
//!     .build()?;
//!
//! // YAML
//! let config = ConverterConfig::from_yaml("logicform.yaml")?;
//! ```

use serde::{Deserialize, Serialize};
use std::path::Path;

use super::error::{ConfigError, ConfigResult};
use super::io::{ConfigExportV1, ConfigOverrides};
use super::preset::Preset;
use crate::features::serializer::Connectives;

const SUPPORTED_VERSIONS: [u32; 1] = [1];
const MAX_WORKERS: usize = 256;

/// Batch driver settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BatchConfig {
    /// Convert questions on the rayon pool (requires the `parallel` feature)
    pub parallel: bool,

    /// Record failing questions and keep going instead of aborting the batch
    pub skip_failures: bool,

    /// Worker threads; `None` uses 75% of the available cores
    #[serde(skip_serializing_if = "Option::is_none")]
    pub num_workers: Option<usize>,
}

impl Default for BatchConfig {
    fn default() -> Self {
        Self {
            parallel: false,
            skip_failures: true,
            num_workers: None,
        }
    }
}

impl BatchConfig {
    pub fn parallel(mut self, enabled: bool) -> Self {
        self.parallel = enabled;
        self
    }

    pub fn skip_failures(mut self, enabled: bool) -> Self {
        self.skip_failures = enabled;
        self
    }

    pub fn num_workers(mut self, workers: usize) -> Self {
        self.num_workers = Some(workers);
        self
    }

    pub fn validate(&self) -> ConfigResult<()> {
        if let Some(workers) = self.num_workers {
            if workers == 0 || workers > MAX_WORKERS {
                return Err(ConfigError::range_with_hint(
                    "batch.num_workers",
                    workers,
                    1,
                    MAX_WORKERS,
                    "Omit the field to size the pool from the core count",
                ));
            }
        }
        Ok(())
    }
}

/// Configuration builder
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConverterConfig {
    preset: Preset,
    connectives: Option<Connectives>,
    batch: BatchConfig,
}

impl Default for ConverterConfig {
    fn default() -> Self {
        Self::preset(Preset::default())
    }
}

impl ConverterConfig {
    pub fn preset(preset: Preset) -> Self {
        Self {
            preset,
            connectives: None,
            batch: BatchConfig::default(),
        }
    }

    /// Replace the preset's connectives
    pub fn connectives(mut self, connectives: Connectives) -> Self {
        self.connectives = Some(connectives);
        self
    }

    pub fn batch(mut self, batch: BatchConfig) -> Self {
        self.batch = batch;
        self
    }

    pub fn get_preset(&self) -> Preset {
        self.preset
    }

    /// Validate and freeze
    pub fn build(self) -> ConfigResult<ValidatedConfig> {
        let connectives = self
            .connectives
            .clone()
            .unwrap_or_else(|| self.preset.connectives());
        validate_connectives(&connectives)?;
        self.batch.validate()?;

        Ok(ValidatedConfig {
            preset: self.preset,
            connectives,
            batch: self.batch,
        })
    }

    /// Load and validate a v1 YAML file
    pub fn from_yaml(path: impl AsRef<Path>) -> ConfigResult<ValidatedConfig> {
        let content = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&content)
    }

    pub fn from_yaml_str(content: &str) -> ConfigResult<ValidatedConfig> {
        let export: ConfigExportV1 = serde_yaml::from_str(content)?;

        let version = export.version.ok_or(ConfigError::MissingVersion)?;
        if !SUPPORTED_VERSIONS.contains(&version) {
            return Err(ConfigError::UnsupportedVersion {
                found: version,
                supported: SUPPORTED_VERSIONS.to_vec(),
            });
        }

        let preset = Preset::from_str(&export.preset)
            .map_err(|_| ConfigError::UnknownPreset(export.preset.clone()))?;

        let mut config = Self::preset(preset);
        if let Some(overrides) = export.overrides {
            if let Some(connectives) = overrides.connectives {
                config = config.connectives(connectives);
            }
            if let Some(batch) = overrides.batch {
                config = config.batch(batch);
            }
        }
        config.build()
    }
}

fn validate_connectives(connectives: &Connectives) -> ConfigResult<()> {
    if connectives.conjunction.is_empty() || connectives.disjunction.is_empty() {
        return Err(ConfigError::Validation(
            "connectives must not be empty".to_string(),
        ));
    }
    if connectives.conjunction == connectives.disjunction {
        return Err(ConfigError::Validation(format!(
            "conjunction and disjunction connectives are both '{}'",
            connectives.conjunction
        )));
    }
    Ok(())
}

/// Validated configuration, ready for the converter
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedConfig {
    preset: Preset,
    connectives: Connectives,
    batch: BatchConfig,
}

impl Default for ValidatedConfig {
    fn default() -> Self {
        Self {
            preset: Preset::Canonical,
            connectives: Connectives::canonical(),
            batch: BatchConfig::default(),
        }
    }
}

impl ValidatedConfig {
    pub fn preset(&self) -> Preset {
        self.preset
    }

    pub fn connectives(&self) -> &Connectives {
        &self.connectives
    }

    pub fn batch(&self) -> &BatchConfig {
        &self.batch
    }

    /// Export as a v1 YAML document
    pub fn to_yaml(&self) -> ConfigResult<String> {
        let overrides = ConfigOverrides {
            connectives: (self.connectives != self.preset.connectives())
                .then(|| self.connectives.clone()),
            batch: Some(self.batch.clone()),
        };
        let export = ConfigExportV1 {
            version: Some(1),
            preset: self.preset.to_string(),
            overrides: Some(overrides),
        };
        serde_yaml::to_string(&export).map_err(ConfigError::Yaml)
    }
}
