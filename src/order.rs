//! Ordering policies applied to discovered entries.

use rand::Rng;
use rand::seq::SliceRandom;

use crate::scan::ImageEntry;

/// Apply the configured ordering policy in place: an unbiased shuffle, or a
/// case-insensitive ascending sort by filename.
pub fn apply<R: Rng + ?Sized>(entries: &mut [ImageEntry], randomize: bool, rng: &mut R) {
    if randomize {
        entries.shuffle(rng);
    } else {
        sort_by_filename(entries);
    }
}

/// Sort by lowercased filename, ignoring the directory. The sort is stable,
/// so names differing only in case keep their input order; the stored
/// filename itself is untouched.
pub fn sort_by_filename(entries: &mut [ImageEntry]) {
    entries.sort_by_cached_key(|e| e.filename.to_lowercase());
}
