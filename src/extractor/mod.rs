//! Exercise extraction from Markdown lesson episodes.
//!
//! Episodes are scanned one after another in the order given. Each scan
//! starts outside any exercise block with no title; only the destination
//! writer carries over from one episode to the next.
//!
//! # Module Structure
//!
//! - [`markers`] - Title and fence predicates
//! - [`fragment`] - Output fragments and their rendering
//! - [`scanner`] - Per-episode scan state and fragment iterator

pub mod fragment;
pub mod markers;
pub mod scanner;

use std::io::{BufRead, Write};
use std::path::Path;

use crate::config::ExtractConfig;
use crate::error::ExtractError;

pub use fragment::Fragment;
pub use markers::{is_closing_marker, is_opening_marker};
pub use scanner::{EpisodeScanner, ScanState};

/// Counters collected over an extraction run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ExtractionStats {
    pub files: usize,
    pub episode_headers: usize,
    pub blocks_opened: usize,
    pub lines: usize,
}

impl ExtractionStats {
    fn record(&mut self, fragment: &Fragment) {
        match fragment {
            Fragment::EpisodeHeader(_) => self.episode_headers += 1,
            Fragment::Line(_) => self.lines += 1,
            Fragment::ExerciseHeader => {}
        }
    }

    fn absorb(&mut self, other: ExtractionStats) {
        self.files += other.files;
        self.episode_headers += other.episode_headers;
        self.blocks_opened += other.blocks_opened;
        self.lines += other.lines;
    }
}

/// Writes the exercise blocks of a set of episodes to a destination.
#[derive(Debug, Clone, Default)]
pub struct ExerciseExtractor {
    config: ExtractConfig,
}

impl ExerciseExtractor {
    pub fn new(config: ExtractConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ExtractConfig {
        &self.config
    }

    /// Extract every episode in order, stopping at the first error.
    ///
    /// Whatever was written before a failure stays in `out`.
    pub fn extract_paths<P, W>(
        &self,
        paths: &[P],
        out: &mut W,
    ) -> Result<ExtractionStats, ExtractError>
    where
        P: AsRef<Path>,
        W: Write + ?Sized,
    {
        let mut stats = ExtractionStats::default();
        for path in paths {
            stats.absorb(self.extract_file(path.as_ref(), out)?);
        }
        tracing::info!(
            files = stats.files,
            headers = stats.episode_headers,
            blocks = stats.blocks_opened,
            lines = stats.lines,
            "extraction finished"
        );
        Ok(stats)
    }

    /// Extract one episode file.
    pub fn extract_file<W: Write + ?Sized>(
        &self,
        path: &Path,
        out: &mut W,
    ) -> Result<ExtractionStats, ExtractError> {
        tracing::debug!(path = %path.display(), "scanning episode");
        let scanner = EpisodeScanner::open(path, &self.config)?;
        self.drain(scanner, out)
    }

    /// Extract from an already-open reader; `path` labels error reports.
    pub fn extract_reader<R, W>(
        &self,
        reader: R,
        path: &Path,
        out: &mut W,
    ) -> Result<ExtractionStats, ExtractError>
    where
        R: BufRead,
        W: Write + ?Sized,
    {
        self.drain(EpisodeScanner::new(reader, path, &self.config), out)
    }

    fn drain<R, W>(
        &self,
        mut scanner: EpisodeScanner<R>,
        out: &mut W,
    ) -> Result<ExtractionStats, ExtractError>
    where
        R: BufRead,
        W: Write + ?Sized,
    {
        let mut stats = ExtractionStats {
            files: 1,
            ..ExtractionStats::default()
        };

        for fragment in scanner.by_ref() {
            let fragment = fragment?;
            fragment.write_to(out).map_err(ExtractError::Write)?;
            stats.record(&fragment);
        }

        let state = scanner.state();
        stats.blocks_opened = state.blocks_opened();
        if state.inside_exercise() {
            tracing::debug!(path = %scanner.path().display(), "episode ended inside an exercise block");
        }
        Ok(stats)
    }
}
