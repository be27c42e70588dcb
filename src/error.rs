use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Exit status for a failed scan.
pub const EXIT_RUNTIME: i32 = 1;
/// Exit status for bad or missing command-line input.
pub const EXIT_USAGE: i32 = 2;

/// Failures while reading the cookie log. Malformed lines are never errors.
#[derive(Debug, Error)]
pub enum ScanError {
    #[error("failed to open {}: {source}", path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to read line {line}: {source}")]
    Read {
        line: usize,
        #[source]
        source: io::Error,
    },
}
