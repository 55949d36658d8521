//! Predicates deciding whether a directory entry counts as an image.

use regex::Regex;

use crate::error::Error;

/// Return `true` if the lowercased `filename` ends with one of the
/// comma-separated `extensions`.
///
/// Only the filename side is lowercased; list entries are compared verbatim,
/// so an uppercase entry like `JPG` never matches. No dot normalization is
/// performed either, and an empty list entry matches every name.
#[must_use]
pub fn has_listed_extension(filename: &str, extensions: &str) -> bool {
    let lowered = filename.to_lowercase();
    extensions.split(',').any(|ext| lowered.ends_with(ext))
}

/// Compiled filename filter for recursive traversal.
#[derive(Debug)]
pub struct IncludePattern {
    regex: Regex,
}

impl IncludePattern {
    /// Compile `pattern`, failing with [`Error::BadPattern`] if it is not a
    /// valid regular expression.
    pub fn new(pattern: &str) -> Result<Self, Error> {
        let regex = Regex::new(pattern).map_err(|source| Error::BadPattern {
            pattern: pattern.to_owned(),
            source,
        })?;
        Ok(Self { regex })
    }

    /// Hidden files (leading `.`) are rejected unconditionally; everything
    /// else is accepted on a partial match of the pattern.
    #[must_use]
    pub fn permits(&self, filename: &str) -> bool {
        !filename.starts_with('.') && self.regex.is_match(filename)
    }
}
