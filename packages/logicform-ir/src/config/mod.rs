//! Configuration System
//!
//! Two tiers:
//! - Preset: `canonical` (default) or `compact` connectives
//! - YAML v1: preset plus connective / batch overrides
//!
//! Configuration only affects how a flattened expression is joined and how a
//! batch is driven; node renderings are fixed.

pub mod converter_config;
pub mod error;
pub mod io;
pub mod preset;

// Re-exports
pub use converter_config::{BatchConfig, ConverterConfig, ValidatedConfig};
pub use error::{ConfigError, ConfigResult};
pub use io::{ConfigExportV1, ConfigOverrides};
pub use preset::Preset;
pub use crate::features::serializer::Connectives;
