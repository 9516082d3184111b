//! Diagnostic logging to stderr.
//!
//! Standard output carries extracted text only, so every log line goes to
//! stderr. Default level is WARN; each `-v` raises it one step.

use tracing::Level;

/// Map a `-v` count to a log level.
pub fn level_for_verbosity(verbose: u8) -> Level {
    match verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    }
}

/// Install the global subscriber. Later calls are ignored.
pub fn init(verbose: u8) {
    let _ = tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_max_level(level_for_verbosity(verbose))
        .with_target(false)
        .try_init();
}
