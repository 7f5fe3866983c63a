//! Seed hierarchy for reproducible candle generation.
//!
//! A master seed generates a sub-seed for each `(symbol, selection)` pair.
//! Sub-seeds are derived via BLAKE3 hashing, so repeated selections of the
//! same symbol get fresh candles while a whole session stays reproducible.
//! Without a master seed every generator is drawn from OS entropy.

use rand::rngs::StdRng;
use rand::SeedableRng;

/// Deterministic seed hierarchy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeedHierarchy {
    master_seed: u64,
}

impl SeedHierarchy {
    pub fn new(master_seed: u64) -> Self {
        Self { master_seed }
    }

    /// Derive the sub-seed for the `selection`-th analysis of `symbol`.
    ///
    /// Independent of derivation order.
    pub fn sub_seed(&self, symbol: &str, selection: u64) -> u64 {
        let mut hasher = blake3::Hasher::new();
        hasher.update(&self.master_seed.to_le_bytes());
        hasher.update(symbol.as_bytes());
        hasher.update(&selection.to_le_bytes());
        let hash = hasher.finalize();
        let mut bytes = [0u8; 8];
        bytes.copy_from_slice(&hash.as_bytes()[..8]);
        u64::from_le_bytes(bytes)
    }

    /// Create a seeded StdRng for one selection.
    pub fn rng_for(&self, symbol: &str, selection: u64) -> StdRng {
        StdRng::seed_from_u64(self.sub_seed(symbol, selection))
    }
}

/// RNG for one candle generation: seeded when a master seed is configured,
/// otherwise from entropy.
pub fn selection_rng(seed: Option<u64>, symbol: &str, selection: u64) -> StdRng {
    match seed {
        Some(master) => SeedHierarchy::new(master).rng_for(symbol, selection),
        None => StdRng::from_entropy(),
    }
}
