//! Per-pixel random sources.
//!
//! Every pixel gets its own generator derived from the render seed and its
//! coordinates, so a render is reproducible regardless of the order (or the
//! thread) pixels are traced on.

use rand::{rngs::StdRng, SeedableRng};
use std::hash::{DefaultHasher, Hash, Hasher};

/// Generator for pixel (x, y) of a render seeded with `seed`.
pub fn pixel_rng(seed: u64, x: u32, y: u32) -> StdRng {
    let mut hasher = DefaultHasher::new();
    (seed, x, y).hash(&mut hasher);
    StdRng::seed_from_u64(hasher.finish())
}

/// A fresh, non-reproducible render seed.
pub fn random_seed() -> u64 {
    rand::random()
}
