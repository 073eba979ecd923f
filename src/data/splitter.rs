// ============================================================
// Layer 4 — Train/Dev Splitter
// ============================================================
// Cuts an ordered sequence into a train prefix and a dev suffix:
//
//   N items, dev_ratio r
//   dev_len  = floor(r * N)
//   train    = items[0 .. N - dev_len]
//   dev      = items[N - dev_len .. N]
//
// Example with N = 25, r = 0.1:
//   dev_len = 2 → train = items[0..23], dev = items[23..25]
//
// The default split does NOT shuffle. The corpus is grouped by
// category, so the dev suffix is drawn from the last category
// only. shuffle_then_split is the explicit opt-in that mixes
// the items with a seeded RNG before cutting.
//
// Reference: Rust Book §8 (Vectors)
//            rand crate documentation

use anyhow::{bail, Result};
use rand::{rngs::StdRng, seq::SliceRandom, SeedableRng};

/// Fraction of the training directory held out for validation.
pub const DEFAULT_DEV_RATIO: f64 = 0.1;

/// Number of items that go to the dev suffix: floor(dev_ratio * total).
pub fn dev_len(total: usize, dev_ratio: f64) -> Result<usize> {
    if !(0.0..=1.0).contains(&dev_ratio) {
        bail!("dev ratio must be within [0, 1], got {}", dev_ratio);
    }
    let len = ((total as f64) * dev_ratio).floor() as usize;
    Ok(len.min(total))
}

/// Split `items` into (train, dev) without reordering.
pub fn split_dev<T>(mut items: Vec<T>, dev_ratio: f64) -> Result<(Vec<T>, Vec<T>)> {
    let total = items.len();
    let cut   = total - dev_len(total, dev_ratio)?;

    // split_off(n) leaves [0..n) in `items` and returns [n..total)
    let dev = items.split_off(cut);

    tracing::debug!("Dev split: {} train, {} dev", items.len(), dev.len());
    Ok((items, dev))
}

/// Shuffle `items` with a seeded RNG, then split like `split_dev`.
pub fn shuffle_then_split<T>(
    mut items: Vec<T>,
    dev_ratio: f64,
    seed:      u64,
) -> Result<(Vec<T>, Vec<T>)> {
    let mut rng = StdRng::seed_from_u64(seed);
    items.shuffle(&mut rng);
    split_dev(items, dev_ratio)
}
