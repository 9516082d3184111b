//! Shared fixtures and runners for integration tests.

use std::path::{Path, PathBuf};
use std::process::Command;

use tempfile::TempDir;

/// Directory holding the episode fixtures.
pub fn fixtures_dir() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("tests").join("fixtures")
}

/// Path to a fixture by file name.
pub fn fixture(name: &str) -> PathBuf {
    fixtures_dir().join(name)
}

/// Copy a fixture into a fresh temp dir. Keep the `TempDir` alive while
/// the path is in use.
pub fn temp_fixture(name: &str) -> (TempDir, PathBuf) {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = dir.path().join(name);
    std::fs::copy(fixture(name), &path).expect("Failed to copy fixture");
    (dir, path)
}

/// Run the binary and capture (stdout, stderr, exit code).
pub fn run_extract(args: &[&str]) -> (String, String, i32) {
    let output = Command::new(env!("CARGO_BIN_EXE_extract-exercises"))
        .args(args)
        .output()
        .expect("Failed to execute extract-exercises");

    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    let exit_code = output.status.code().unwrap_or(-1);

    (stdout, stderr, exit_code)
}

/// Basic-variant output for `01-introduction.md`.
pub const INTRO_BASIC: &str = "## Episode: Introduction\n\
\n\
## Swapping values\n\
\n\
What is printed?\n\
\n\
```python\n\
x = 1\n\
y = x\n\
print(y)\n\
```\n\
\n";

/// Annotated-variant output for `01-introduction.md`.
pub const INTRO_ANNOTATED: &str = "## Episode: Introduction\n\
\n\
### Exercise: \n\
## Swapping values\n\
\n\
What is printed?\n\
\n\
```python\n\
x = 1\n\
y = x\n\
print(y)\n\
```\n\
\n\
\n\
### Exercise: \n\
Where have you seen variables before?\n\
\n";

/// Basic-variant output for `02-loops.md`.
pub const LOOPS_BASIC: &str = "## Episode: \"For Loops\"\nWrite a loop that prints 1 to 3.\n";

/// Annotated-variant output for `02-loops.md`.
pub const LOOPS_ANNOTATED: &str = "## Episode: \"For Loops\"\n\
\n\
### Exercise: Write a loop that prints 1 to 3.\n\
\n\
### Exercise: When would you use a while loop instead?\n";
