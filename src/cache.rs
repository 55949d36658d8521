//! Write-once on-disk cache for discovered image lists.
//!
//! The record is a single JSON array of absolute path strings stored under
//! the system temporary directory. Once a cache file exists it is never
//! refreshed by this module; invalidation is an out-of-band deletion.

use std::env;
use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;

use tempfile::NamedTempFile;
use tracing::debug;

use crate::error::Error;

/// Cache bound to one directory. Production code uses [`ImageCache::system`];
/// tests point it at a scratch directory.
#[derive(Debug, Clone)]
pub struct ImageCache {
    dir: PathBuf,
}

impl ImageCache {
    /// Cache rooted at the platform temporary-files directory.
    #[must_use]
    pub fn system() -> Self {
        Self {
            dir: env::temp_dir(),
        }
    }

    #[must_use]
    pub fn in_dir(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    fn record_path(&self, cache_filename: &str) -> PathBuf {
        self.dir.join(cache_filename)
    }

    /// Read a previously persisted list.
    ///
    /// An absent file yields an empty list, which callers treat as a cache
    /// miss; a persisted empty list is therefore indistinguishable from no
    /// cache at all. A present but unparsable file is an error, not a miss.
    pub fn load(&self, cache_filename: &str) -> Result<Vec<String>, Error> {
        let path = self.record_path(cache_filename);
        if !path.exists() {
            return Ok(Vec::new());
        }
        let raw = fs::read_to_string(&path)?;
        serde_json::from_str(&raw).map_err(|source| Error::CacheRead { path, source })
    }

    /// Persist `image_list` unless a record already exists.
    ///
    /// The write goes through a temp file renamed into place without
    /// clobbering, so concurrent readers never observe a partial record and a
    /// lost race against another writer degrades to a no-op.
    pub fn save(&self, cache_filename: &str, image_list: &[String]) -> Result<(), Error> {
        let path = self.record_path(cache_filename);
        if path.exists() {
            debug!(path = %path.display(), "image cache already populated; leaving it as is");
            return Ok(());
        }

        let body = serde_json::to_string(image_list).map_err(|source| Error::CacheWrite {
            path: path.clone(),
            source: io::Error::other(source),
        })?;
        let mut staged = NamedTempFile::new_in(&self.dir).map_err(|source| Error::CacheWrite {
            path: path.clone(),
            source,
        })?;
        staged
            .write_all(body.as_bytes())
            .map_err(|source| Error::CacheWrite {
                path: path.clone(),
                source,
            })?;
        match staged.persist_noclobber(&path) {
            Ok(_) => {
                debug!(count = image_list.len(), path = %path.display(), "persisted image cache");
                Ok(())
            }
            // Another request won the race; its list stands.
            Err(err) if err.error.kind() == io::ErrorKind::AlreadyExists => Ok(()),
            Err(err) => Err(Error::CacheWrite {
                path,
                source: err.error,
            }),
        }
    }
}
