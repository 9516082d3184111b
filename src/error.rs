//! Extraction errors.

use std::path::PathBuf;

/// Errors that abort an extraction run.
#[derive(Debug, thiserror::Error)]
pub enum ExtractError {
    #[error("Failed to read episode {}: {source}", path.display())]
    FileAccess {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed title metadata at {}:{line_number}: {line:?}", path.display())]
    MalformedTitle {
        path: PathBuf,
        line_number: usize,
        line: String,
    },

    #[error("Failed to write extracted output: {0}")]
    Write(#[source] std::io::Error),
}

impl ExtractError {
    /// The episode file the error refers to, if any.
    pub fn path(&self) -> Option<&std::path::Path> {
        match self {
            Self::FileAccess { path, .. } | Self::MalformedTitle { path, .. } => Some(path),
            Self::Write(_) => None,
        }
    }
}

/// Errors raised while loading an options file.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid config {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}
