//! Data generators for benchmarks

use rand::Rng;
use rectree::Rect;

/// Generate rectangles scattered uniformly over a `2 * world` square.
pub fn scattered_rects(count: usize, world: i64, max_extent: i64) -> Vec<Rect> {
    let mut rng = rand::thread_rng();
    (0..count)
        .map(|_| {
            let x = rng.gen_range(-world..world);
            let y = rng.gen_range(-world..world);
            let width = rng.gen_range(1..=max_extent);
            let height = rng.gen_range(1..=max_extent);
            Rect::of(x, y, x + width, y + height).unwrap()
        })
        .collect()
}

/// Generate rectangles bunched into tight clusters, the layout where
/// subtree pruning pays off most.
pub fn clustered_rects(clusters: usize, per_cluster: usize, world: i64, radius: i64) -> Vec<Rect> {
    let mut rng = rand::thread_rng();
    let mut rects = Vec::with_capacity(clusters * per_cluster);
    for _ in 0..clusters {
        let cx = rng.gen_range(-world..world);
        let cy = rng.gen_range(-world..world);
        for _ in 0..per_cluster {
            let x = cx + rng.gen_range(-radius..radius);
            let y = cy + rng.gen_range(-radius..radius);
            let width = rng.gen_range(1..=radius);
            let height = rng.gen_range(1..=radius);
            rects.push(Rect::of(x, y, x + width, y + height).unwrap());
        }
    }
    rects
}

/// Generate square query windows of a fixed edge length.
pub fn query_windows(count: usize, world: i64, edge: i64) -> Vec<Rect> {
    let mut rng = rand::thread_rng();
    (0..count)
        .map(|_| {
            let x = rng.gen_range(-world..world);
            let y = rng.gen_range(-world..world);
            Rect::of(x, y, x + edge, y + edge).unwrap()
        })
        .collect()
}
