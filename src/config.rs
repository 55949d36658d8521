use std::path::{Path, PathBuf};

use anyhow::{Context, Result, ensure};
use serde::Deserialize;

/// Per-request slideshow configuration.
///
/// Supplied once per registration and never mutated by the discovery engine.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct Configuration {
    /// Root directories searched for images, in presentation order.
    pub image_paths: Vec<PathBuf>,
    /// Descend into subdirectories instead of listing a single level.
    pub include_recursive: bool,
    /// Comma-separated filename suffixes accepted in flat mode. Entries are
    /// matched verbatim against the lowercased filename, so spell them the
    /// way they appear on disk (`jpg,png` or `.jpg,.png`).
    pub valid_image_file_extensions: String,
    /// Filename regular expression accepted in recursive mode.
    pub pattern_to_include: String,
    /// Shuffle the list instead of sorting it by filename.
    pub randomize_image_order: bool,
    /// Optional deterministic seed for the shuffle.
    pub randomize_seed: Option<u64>,
    /// Order the union of all roots at once rather than each root on its own.
    pub treat_all_paths_as_one: bool,
    /// Persist the discovered list and serve it on later requests.
    pub cache_found_images: bool,
    /// File name of the persisted list inside the system temp directory.
    pub cache_filename: String,
    /// Opaque correlation token echoed back with the response.
    pub identifier: String,
}

impl Configuration {
    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let s = std::fs::read_to_string(path)
            .with_context(|| format!("reading {}", path.display()))?;
        serde_yaml::from_str(&s).context("parsing configuration YAML")
    }

    /// Validate runtime invariants that cannot be expressed via serde defaults alone.
    pub fn validated(self) -> Result<Self> {
        ensure!(
            !self.image_paths.is_empty(),
            "image-paths must name at least one directory"
        );
        if self.cache_found_images {
            ensure!(
                !self.cache_filename.trim().is_empty(),
                "cache-filename must not be blank when cache-found-images is set"
            );
        }
        Ok(self)
    }
}

impl Default for Configuration {
    fn default() -> Self {
        Self {
            image_paths: Vec::new(),
            include_recursive: false,
            valid_image_file_extensions: "bmp,jpg,gif,png".into(),
            pattern_to_include: ".*".into(),
            randomize_image_order: false,
            randomize_seed: None,
            treat_all_paths_as_one: false,
            cache_found_images: false,
            cache_filename: "image-slideshow-cache.json".into(),
            identifier: String::new(),
        }
    }
}
