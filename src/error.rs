use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Library error type for image discovery operations.
#[derive(Debug, Error)]
pub enum Error {
    /// One or more configured image directories are missing or unreadable.
    #[error("invalid image directory: {0}")]
    BadDir(String),

    /// The recursive include pattern is not a valid regular expression.
    #[error("invalid include pattern {pattern:?}")]
    BadPattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },

    /// A cache file exists but its contents cannot be parsed.
    #[error("unreadable image cache at {}", path.display())]
    CacheRead {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// The cache file could not be written.
    #[error("failed to write image cache at {}", path.display())]
    CacheWrite {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Underlying IO error during traversal.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// Error surfaced by the recursive directory walker.
    #[error(transparent)]
    Walk(#[from] walkdir::Error),
}
