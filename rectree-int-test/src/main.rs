use rand::Rng;
use rectree::{Rect, RectIndex, RectreeResult};
use rectree_int_test::test_util::{random_rect, seeded_rng};

fn main() -> RectreeResult<()> {
    println!("Starting stress test...");
    let index: RectIndex<u64> = RectIndex::new();
    let mut rng = seeded_rng(99);

    let count = 1_000_000u64;
    let start = std::time::Instant::now();
    for key in 0..count {
        index.add(key, random_rect(&mut rng, 1_000_000, 2_000));
    }
    println!("Inserted {} rectangles in {:?}", count, start.elapsed());

    let queries = 1_000;
    let start = std::time::Instant::now();
    let mut hits = 0usize;
    for _ in 0..queries {
        let x = rng.gen_range(-1_000_000..900_000);
        let y = rng.gen_range(-1_000_000..900_000);
        let query = Rect::of(x, y, x + 100_000, y + 100_000)?;
        hits += index.find_all_inside(&query).len();
    }
    println!(
        "Ran {} containment queries in {:?} ({} total hits)",
        queries,
        start.elapsed(),
        hits
    );

    let start = std::time::Instant::now();
    for key in 0..count / 2 {
        index.remove(&key);
    }
    println!("Removed {} rectangles in {:?}", count / 2, start.elapsed());

    println!("Final shape: {:?}", index.stats());
    index.verify()
}
