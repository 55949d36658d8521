//! Discovery engine: orchestrates traversal, filtering, ordering and the
//! cache short-circuit for one request.

use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::{debug, info, warn};

use crate::cache::ImageCache;
use crate::config::Configuration;
use crate::error::Error;
use crate::events::ImageListReady;
use crate::order;
use crate::scan::{ImageEntry, Traversal};

/// Discover images for `cfg`, caching under the system temp directory.
pub fn discover(cfg: &Configuration) -> Result<ImageListReady, Error> {
    discover_with(cfg, &ImageCache::system())
}

/// Discover images for `cfg` against an explicit cache location.
///
/// On a cache hit the filesystem is not touched at all. On a miss, each root
/// is scanned in configuration order; ordering is applied per root or once to
/// the merged list per `treat-all-paths-as-one`. A cache write failure is
/// logged and otherwise ignored, since the freshly discovered list is already
/// in hand.
pub fn discover_with(cfg: &Configuration, cache: &ImageCache) -> Result<ImageListReady, Error> {
    if cfg.cache_found_images {
        let cached = cache.load(&cfg.cache_filename)?;
        if !cached.is_empty() {
            debug!(count = cached.len(), "serving image list from cache");
            return Ok(ImageListReady {
                identifier: cfg.identifier.clone(),
                image_list: cached,
            });
        }
        // An empty record reads the same as an absent one; both fall through
        // to a fresh scan.
    }

    // Validate inputs first (collect all bad ones).
    let mut bad = Vec::new();
    for p in &cfg.image_paths {
        if !p.exists() || !p.is_dir() {
            bad.push(p.clone());
        }
    }
    if !bad.is_empty() {
        let joined = bad
            .iter()
            .map(|p| p.to_string_lossy())
            .collect::<Vec<_>>()
            .join(", ");
        return Err(Error::BadDir(joined));
    }

    let traversal = Traversal::from_config(cfg)?;
    let mut rng = match cfg.randomize_seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };

    let mut entries: Vec<ImageEntry> = Vec::new();
    for root in &cfg.image_paths {
        let mut found = traversal.scan_root(root)?;
        debug!(root = %root.display(), found = found.len(), "scanned root");
        if !cfg.treat_all_paths_as_one {
            order::apply(&mut found, cfg.randomize_image_order, &mut rng);
        }
        entries.extend(found);
    }
    if cfg.treat_all_paths_as_one {
        order::apply(&mut entries, cfg.randomize_image_order, &mut rng);
    }

    let image_list: Vec<String> = entries.iter().map(ImageEntry::full_path).collect();
    info!(
        identifier = %cfg.identifier,
        count = image_list.len(),
        "image discovery complete"
    );

    if cfg.cache_found_images {
        if let Err(err) = cache.save(&cfg.cache_filename, &image_list) {
            warn!(error = %err, "failed to persist discovered image list");
        }
    }

    Ok(ImageListReady {
        identifier: cfg.identifier.clone(),
        image_list,
    })
}
