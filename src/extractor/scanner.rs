//! Per-episode scan: a lazy iterator of fragments over one document.
//!
//! Each line is classified in precedence order: title metadata, opening
//! fence, closing fence, then block content. Matching looks at the trimmed
//! line; anything emitted is the line exactly as read, terminator included.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

use super::fragment::Fragment;
use super::markers::{is_closing_marker, is_opening_marker, is_title_line, title_value};
use crate::config::ExtractConfig;
use crate::error::ExtractError;

/// Mutable state for one document. Starts outside any exercise block.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScanState {
    title: Option<String>,
    inside_exercise: bool,
    blocks_opened: usize,
}

impl ScanState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Most recent title value, terminator included.
    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    pub fn inside_exercise(&self) -> bool {
        self.inside_exercise
    }

    /// Number of opening fences seen so far.
    pub fn blocks_opened(&self) -> usize {
        self.blocks_opened
    }
}

/// Iterates the fragments of a single episode.
///
/// Lines are pulled from the reader one at a time, so output can be written
/// as soon as each fragment is produced. The iterator ends after the last
/// line or after the first error.
pub struct EpisodeScanner<R> {
    reader: R,
    path: PathBuf,
    config: ExtractConfig,
    state: ScanState,
    line: String,
    line_number: usize,
    done: bool,
}

impl EpisodeScanner<BufReader<File>> {
    /// Open an episode file for scanning.
    ///
    /// The file handle lives as long as the scanner and is closed when it
    /// is dropped, whether the scan finished or failed.
    pub fn open(path: &Path, config: &ExtractConfig) -> Result<Self, ExtractError> {
        let file = File::open(path).map_err(|source| ExtractError::FileAccess {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(Self::new(BufReader::new(file), path, config))
    }
}

impl<R: BufRead> EpisodeScanner<R> {
    /// Scan an already-open reader. `path` is only used in error reports.
    pub fn new(reader: R, path: impl Into<PathBuf>, config: &ExtractConfig) -> Self {
        Self {
            reader,
            path: path.into(),
            config: config.clone(),
            state: ScanState::new(),
            line: String::new(),
            line_number: 0,
            done: false,
        }
    }

    pub fn state(&self) -> &ScanState {
        &self.state
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Classify the line currently in the buffer.
    fn classify(&mut self) -> Result<Option<Fragment>, ExtractError> {
        let raw = self.line.as_str();
        let trimmed = raw.trim();

        if is_title_line(trimmed) {
            let value = title_value(raw, self.config.strict_titles).ok_or_else(|| {
                ExtractError::MalformedTitle {
                    path: self.path.clone(),
                    line_number: self.line_number,
                    line: raw.trim_end_matches(['\r', '\n']).to_string(),
                }
            })?;
            self.state.title = Some(value.to_string());
            return Ok(Some(Fragment::EpisodeHeader(value.to_string())));
        }

        if is_opening_marker(trimmed, self.config.annotate_exercise_headers) {
            tracing::trace!(path = %self.path.display(), line = self.line_number, "exercise opened");
            self.state.inside_exercise = true;
            self.state.blocks_opened += 1;
            return Ok(self
                .config
                .annotate_exercise_headers
                .then_some(Fragment::ExerciseHeader));
        }

        if is_closing_marker(trimmed) {
            self.state.inside_exercise = false;
            return Ok(None);
        }

        if self.state.inside_exercise {
            return Ok(Some(Fragment::Line(raw.to_string())));
        }

        Ok(None)
    }
}

impl<R: BufRead> Iterator for EpisodeScanner<R> {
    type Item = Result<Fragment, ExtractError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        loop {
            self.line.clear();
            match self.reader.read_line(&mut self.line) {
                Ok(0) => {
                    self.done = true;
                    return None;
                }
                Ok(_) => {
                    self.line_number += 1;
                    match self.classify() {
                        Ok(Some(fragment)) => return Some(Ok(fragment)),
                        Ok(None) => continue,
                        Err(e) => {
                            self.done = true;
                            return Some(Err(e));
                        }
                    }
                }
                Err(source) => {
                    self.done = true;
                    return Some(Err(ExtractError::FileAccess {
                        path: self.path.clone(),
                        source,
                    }));
                }
            }
        }
    }
}
