//! Output fragments produced by the scanner.

use std::fmt;
use std::io::{self, Write};

/// Literal emitted ahead of each block in the annotated variant.
///
/// No exercise label is appended after the separator.
pub const EXERCISE_HEADER: &str = "\n### Exercise: ";

/// Prefix of the header emitted for every title line.
pub const EPISODE_HEADER_PREFIX: &str = "## Episode: ";

/// One chunk of extracted output, written in scan order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Fragment {
    /// `## Episode: {title}`; the title carries its own line terminator.
    EpisodeHeader(String),
    /// Blank line followed by `### Exercise: `.
    ExerciseHeader,
    /// An untrimmed line from inside an exercise block.
    Line(String),
}

impl Fragment {
    /// Write the fragment to `out` exactly as rendered.
    pub fn write_to<W: Write + ?Sized>(&self, out: &mut W) -> io::Result<()> {
        match self {
            Self::EpisodeHeader(title) => {
                out.write_all(EPISODE_HEADER_PREFIX.as_bytes())?;
                out.write_all(title.as_bytes())
            }
            Self::ExerciseHeader => out.write_all(EXERCISE_HEADER.as_bytes()),
            Self::Line(line) => out.write_all(line.as_bytes()),
        }
    }

    pub fn is_episode_header(&self) -> bool {
        matches!(self, Self::EpisodeHeader(_))
    }
}

impl fmt::Display for Fragment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EpisodeHeader(title) => write!(f, "{EPISODE_HEADER_PREFIX}{title}"),
            Self::ExerciseHeader => f.write_str(EXERCISE_HEADER),
            Self::Line(line) => f.write_str(line),
        }
    }
}
