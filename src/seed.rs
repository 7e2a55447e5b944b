//! Seed strings to numeric seeds

use rustc_hash::FxHasher;
use std::hash::Hasher;

/// Fold an arbitrary string into a 64-bit seed.
///
/// The same string always yields the same seed, so a board can be
/// reproduced from the string alone.
pub fn hash_seed(s: &str) -> u64 {
    let mut hasher = FxHasher::default();
    hasher.write(s.as_bytes());
    hasher.write_usize(s.len());
    hasher.finish()
}
