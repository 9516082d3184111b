//! Collect exercise blocks from Markdown lesson episodes.
//!
//! Lesson episodes mark exercises with colon fences:
//!
//! ```text
//! ::: challenge
//! Do this.
//! ::: solution
//! Answer.
//! :::
//! ```
//!
//! [`ExerciseExtractor`] scans episodes in order and writes an
//! `## Episode: <title>` header for every `title:` line plus the verbatim
//! body of every exercise block.

pub mod cli;
pub mod config;
pub mod error;
pub mod extractor;
pub mod logging;

pub use config::ExtractConfig;
pub use error::{ConfigError, ExtractError};
pub use extractor::{ExerciseExtractor, ExtractionStats, Fragment};
