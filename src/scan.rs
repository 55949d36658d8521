//! Directory traversal producing candidate image entries.

use std::fs;
use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::config::Configuration;
use crate::error::Error;
use crate::filter::{self, IncludePattern};

/// One discovered file, kept as a (directory, filename) pair until the final
/// flattening step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageEntry {
    pub directory: PathBuf,
    pub filename: String,
}

impl ImageEntry {
    /// Join directory and filename into the externally visible path string.
    #[must_use]
    pub fn full_path(&self) -> String {
        self.directory.join(&self.filename).to_string_lossy().into_owned()
    }
}

/// Traversal strategy for one request, fixed by the configuration.
#[derive(Debug)]
pub enum Traversal {
    /// Single-level listing matched against a comma-separated suffix list.
    Flat { extensions: String },
    /// Depth-first walk matched against a filename pattern.
    Recursive { pattern: IncludePattern },
}

impl Traversal {
    /// Pick the strategy for `cfg`, compiling the include pattern up front in
    /// recursive mode.
    pub fn from_config(cfg: &Configuration) -> Result<Self, Error> {
        if cfg.include_recursive {
            Ok(Self::Recursive {
                pattern: IncludePattern::new(&cfg.pattern_to_include)?,
            })
        } else {
            Ok(Self::Flat {
                extensions: cfg.valid_image_file_extensions.clone(),
            })
        }
    }

    pub fn scan_root(&self, root: &Path) -> Result<Vec<ImageEntry>, Error> {
        match self {
            Self::Flat { extensions } => list_flat(root, extensions),
            Self::Recursive { pattern } => walk_recursive(root, pattern),
        }
    }
}

/// List the direct children of `root`, keeping names with a listed suffix.
///
/// Known quirk: entries are judged by name alone, with no file-type check, so
/// a subdirectory named like `vacation.png` is reported as an image.
pub fn list_flat(root: &Path, extensions: &str) -> Result<Vec<ImageEntry>, Error> {
    let mut entries = Vec::new();
    for child in fs::read_dir(root)? {
        let child = child?;
        let filename = child.file_name().to_string_lossy().into_owned();
        if filter::has_listed_extension(&filename, extensions) {
            entries.push(ImageEntry {
                directory: root.to_path_buf(),
                filename,
            });
        }
    }
    Ok(entries)
}

/// Walk the whole subtree under `root` depth-first, keeping files the pattern
/// permits.
///
/// Directories are always descended into, dot-directories included; only
/// files are subject to the hidden-name exclusion. Within a directory the
/// listing order is whatever the filesystem reports; callers impose the final
/// order afterwards.
pub fn walk_recursive(root: &Path, pattern: &IncludePattern) -> Result<Vec<ImageEntry>, Error> {
    let mut entries = Vec::new();
    for item in WalkDir::new(root).follow_links(true).min_depth(1) {
        let item = item?;
        if item.file_type().is_dir() {
            continue;
        }
        let filename = item.file_name().to_string_lossy().into_owned();
        if pattern.permits(&filename) {
            let directory = item.path().parent().unwrap_or(root).to_path_buf();
            entries.push(ImageEntry {
                directory,
                filename,
            });
        }
    }
    Ok(entries)
}
