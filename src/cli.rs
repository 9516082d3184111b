//! Command-line interface definition.
//!
//! Lives in the library so `xtask` can render man pages and completions
//! from the same definition the binary parses.

use std::path::PathBuf;

use clap::{ArgAction, Parser};

use crate::config::ExtractConfig;
use crate::error::ConfigError;

/// Version string with build metadata appended.
#[cfg(not(feature = "release"))]
const LONG_VERSION: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    " (",
    env!("VERGEN_GIT_SHA"),
    " ",
    env!("EXTRACT_EXERCISES_BUILD_DATE"),
    ")"
);

#[cfg(feature = "release")]
const LONG_VERSION: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    " (",
    env!("EXTRACT_EXERCISES_BUILD_DATE"),
    ")"
);

/// Collect challenge and discussion blocks from lesson episodes.
///
/// Run from an episodes folder as:
///   extract-exercises *.md > all_exercises.md
#[derive(Debug, Parser)]
#[command(name = "extract-exercises")]
#[command(version, long_version = LONG_VERSION)]
#[command(about = "Collect challenge and discussion blocks from lesson episodes")]
pub struct Cli {
    /// Episode files to scan, in output order
    #[arg(required = true, value_name = "FILE")]
    pub files: Vec<PathBuf>,

    /// Also extract discussion blocks and mark each block with an "### Exercise: " header
    #[arg(short, long)]
    pub annotate: bool,

    /// Take everything after the first ": " as the title instead of rejecting extra separators
    #[arg(long)]
    pub lenient_titles: bool,

    /// Write to this file instead of standard output
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Load options from a TOML file (flags override it)
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Increase log verbosity on stderr (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    /// Resolve the extraction options: config file first, then flags.
    pub fn extract_config(&self) -> Result<ExtractConfig, ConfigError> {
        let mut config = match &self.config {
            Some(path) => ExtractConfig::load(path)?,
            None => ExtractConfig::default(),
        };
        if self.annotate {
            config.annotate_exercise_headers = true;
        }
        if self.lenient_titles {
            config.strict_titles = false;
        }
        Ok(config)
    }
}
