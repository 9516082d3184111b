//! Options for an extraction run.
//!
//! Options come from CLI flags, optionally layered over a TOML file passed
//! with `--config`. There is no default config location.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Options controlling how episodes are scanned.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ExtractConfig {
    /// Annotated variant: also open on `discussion` fences and emit an
    /// `### Exercise: ` header whenever a block opens.
    pub annotate_exercise_headers: bool,
    /// Require exactly one `: ` separator on title lines.
    pub strict_titles: bool,
}

impl Default for ExtractConfig {
    fn default() -> Self {
        Self {
            annotate_exercise_headers: false,
            strict_titles: true,
        }
    }
}

impl ExtractConfig {
    /// Basic variant: `challenge` blocks only, no exercise headers.
    pub fn basic() -> Self {
        Self::default()
    }

    /// Annotated variant: `challenge` and `discussion` blocks with headers.
    pub fn annotated() -> Self {
        Self {
            annotate_exercise_headers: true,
            ..Self::default()
        }
    }

    /// Load options from a TOML file. Missing keys keep their defaults.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    fn from_toml(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }
}
