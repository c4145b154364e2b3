use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rectree::Rect;

/// Fixed-seed rng so a failing run reproduces exactly.
pub fn seeded_rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

/// Random rectangle with its lower-left corner in `[-spread, spread)` and
/// edges up to `max_extent` long. `spread + max_extent` must stay well away
/// from the `i64` limits.
pub fn random_rect(rng: &mut StdRng, spread: i64, max_extent: i64) -> Rect {
    let x = rng.gen_range(-spread..spread);
    let y = rng.gen_range(-spread..spread);
    let width = rng.gen_range(1..=max_extent);
    let height = rng.gen_range(1..=max_extent);
    Rect::of(x, y, x + width, y + height).unwrap()
}

/// Sorts query results by key so two stores can be compared directly.
pub fn sorted_by_key<K: Ord>(mut found: Vec<(K, Rect)>) -> Vec<(K, Rect)> {
    found.sort_by(|(a, _), (b, _)| a.cmp(b));
    found
}
