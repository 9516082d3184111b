//! Line predicates for title metadata and colon fences.
//!
//! All predicates take a line that has already been trimmed of surrounding
//! whitespace. A fence is three or more colons; the label may follow with
//! any number of spaces in between.

use std::sync::LazyLock;

use regex::Regex;

/// Prefix that marks an episode title line.
pub const TITLE_PREFIX: &str = "title: ";

/// Separator between the metadata key and its value.
const TITLE_SEPARATOR: &str = ": ";

static CHALLENGE_FENCE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r":{3,} *challenge$").expect("valid challenge pattern"));

// Not anchored: `::: discussion Why?` still opens a block.
static DISCUSSION_FENCE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r":{3,} *discussion").expect("valid discussion pattern"));

static BARE_FENCE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r":::$").expect("valid bare fence pattern"));

static SOLUTION_FENCE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r":{3,} *solution$").expect("valid solution pattern"));

/// Whether the line carries episode title metadata.
pub fn is_title_line(trimmed: &str) -> bool {
    trimmed.starts_with(TITLE_PREFIX)
}

/// Whether the line opens an exercise block.
///
/// `challenge` fences always open. With `include_discussion`, any fence
/// followed by `discussion` opens too, whatever comes after the label.
pub fn is_opening_marker(trimmed: &str, include_discussion: bool) -> bool {
    CHALLENGE_FENCE.is_match(trimmed) || (include_discussion && DISCUSSION_FENCE.is_match(trimmed))
}

/// Whether the line closes an exercise block: a line ending in a bare fence,
/// or a `solution` fence.
pub fn is_closing_marker(trimmed: &str) -> bool {
    BARE_FENCE.is_match(trimmed) || SOLUTION_FENCE.is_match(trimmed)
}

/// Extract the title value from an untrimmed title line.
///
/// The value keeps whatever follows the separator verbatim, line terminator
/// included. In strict mode the line must split into exactly a key and a
/// value; a second `: ` makes it malformed. Returns `None` when malformed.
pub fn title_value(raw: &str, strict: bool) -> Option<&str> {
    let (_, value) = raw.split_once(TITLE_SEPARATOR)?;
    if strict && value.contains(TITLE_SEPARATOR) {
        return None;
    }
    Some(value)
}
