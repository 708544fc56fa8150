//! Preset configurations
//!
//! A preset fixes the connectives the serializer joins a flattened expression
//! with. Node renderings never depend on the preset.

use serde::{Deserialize, Serialize};

use crate::features::serializer::Connectives;

/// Configuration preset
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Preset {
    /// `" and "` / `" or "`, the reference output format
    Canonical,

    /// `", "` / `"; "`
    Compact,
}

impl Preset {
    pub fn connectives(&self) -> Connectives {
        match self {
            Self::Canonical => Connectives::canonical(),
            Self::Compact => Connectives::compact(),
        }
    }

    /// Parse preset from string
    pub fn from_str(s: &str) -> Result<Self, String> {
        match s.to_lowercase().as_str() {
            "canonical" => Ok(Self::Canonical),
            "compact" => Ok(Self::Compact),
            _ => Err(format!(
                "Unknown preset '{}'. Valid presets: canonical, compact",
                s
            )),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Canonical => "canonical",
            Self::Compact => "compact",
        }
    }
}

impl Default for Preset {
    fn default() -> Self {
        Self::Canonical
    }
}

impl std::fmt::Display for Preset {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
