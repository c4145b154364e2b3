//! End-to-end containment behavior through the public API.

use rectree::{Rect, RectIndex, RectTree, RectreeError};
use rectree_int_test::test_util::sorted_by_key;
use uuid::Uuid;

#[ctor::ctor]
fn init() {
    colog::init();
}

fn rect(x: i64, y: i64, x2: i64, y2: i64) -> Rect {
    Rect::of(x, y, x2, y2).unwrap()
}

#[test]
fn test_three_rectangle_scenario() {
    let index: RectIndex<&str> = RectIndex::new();
    assert!(index.add("a", rect(0, 0, 10, 10)));
    assert!(index.add("b", rect(20, 20, 30, 30)));
    assert!(index.add("c", rect(0, 0, 40, 40)));

    // A generous query swallows everything.
    let all = sorted_by_key(index.find_all_inside(&rect(-100, -100, 100, 100)));
    assert_eq!(
        all,
        vec![
            ("a", rect(0, 0, 10, 10)),
            ("b", rect(20, 20, 30, 30)),
            ("c", rect(0, 0, 40, 40)),
        ]
    );

    // Tight queries pick out single rectangles.
    assert_eq!(
        index.find_all_inside(&rect(0, 0, 15, 15)),
        vec![("a", rect(0, 0, 10, 10))]
    );
    assert_eq!(
        index.find_all_inside(&rect(15, 15, 35, 35)),
        vec![("b", rect(20, 20, 30, 30))]
    );

    // Boundary-exact query: containment is closed, so "c" itself counts.
    let exact = sorted_by_key(index.find_all_inside(&rect(0, 0, 40, 40)));
    assert_eq!(exact.len(), 3);

    // Nothing fits in a query smaller than every rectangle.
    assert!(index.find_all_inside(&rect(1, 1, 9, 9)).is_empty());

    index.verify().unwrap();
}

#[test]
fn test_remove_and_reinsert() {
    let index: RectIndex<&str> = RectIndex::new();
    index.add("a", rect(0, 0, 10, 10));
    index.add("b", rect(20, 20, 30, 30));

    assert!(index.remove(&"b"));
    assert!(index.find_all_inside(&rect(15, 15, 35, 35)).is_empty());

    // Same geometry under a fresh key is fully findable again.
    assert!(index.add("b2", rect(20, 20, 30, 30)));
    assert_eq!(
        index.find_all_inside(&rect(15, 15, 35, 35)),
        vec![("b2", rect(20, 20, 30, 30))]
    );
    index.verify().unwrap();
}

#[test]
fn test_duplicate_key_leaves_first_rectangle() {
    let index: RectIndex<&str> = RectIndex::new();
    assert!(index.add("a", rect(0, 0, 10, 10)));
    assert!(!index.add("a", rect(100, 100, 110, 110)));
    assert_eq!(index.get(&"a"), Some(rect(0, 0, 10, 10)));
    assert!(index
        .find_all_inside(&rect(90, 90, 120, 120))
        .is_empty());
    index.verify().unwrap();
}

#[test]
fn test_remove_unknown_key_is_a_noop() {
    let index: RectIndex<&str> = RectIndex::new();
    index.add("a", rect(0, 0, 10, 10));
    assert!(!index.remove(&"ghost"));
    assert_eq!(index.len(), 1);
    index.verify().unwrap();
}

#[test]
fn test_empty_index() {
    let index: RectIndex<&str> = RectIndex::new();
    assert!(index.is_empty());
    assert!(index
        .find_all_inside(&rect(i64::MIN, i64::MIN, i64::MAX, i64::MAX))
        .is_empty());
    assert!(!index.remove(&"anything"));
    index.verify().unwrap();
}

#[test]
fn test_degenerate_rectangles_are_rejected() {
    assert!(matches!(
        Rect::of(10, 0, 10, 5),
        Err(RectreeError::InvalidRectangle(_))
    ));
    assert!(matches!(
        Rect::of(0, 5, 10, 5),
        Err(RectreeError::InvalidRectangle(_))
    ));
    assert!(matches!(
        Rect::of(10, 10, 0, 0),
        Err(RectreeError::InvalidRectangle(_))
    ));
}

#[test]
fn test_extreme_coordinate_rectangles() {
    let mut tree: RectTree<u64> = RectTree::new();
    let west_half = rect(i64::MIN, 0, 0, i64::MAX);
    let plane = rect(i64::MIN, i64::MIN, i64::MAX, i64::MAX);

    // Half-plane sized rectangles used to overflow 64-bit area math; they
    // must index and query exactly.
    assert!(tree.add(1, west_half));
    assert!(tree.add(2, plane));
    assert_eq!(
        sorted_by_key(tree.find_all_inside(&plane)),
        vec![(1, west_half), (2, plane)]
    );
    assert_eq!(tree.find_all_inside(&west_half), vec![(1, west_half)]);

    assert!(tree.remove(&2));
    assert_eq!(tree.find_all_inside(&plane), vec![(1, west_half)]);
    tree.verify().unwrap();
}

#[test]
fn test_uuid_keyed_index() {
    let index: RectIndex<Uuid> = RectIndex::new();
    let key = Uuid::new_v4();
    assert!(index.add(key, rect(-50, -50, 50, 50)));
    assert!(!index.add(key, rect(0, 0, 1, 1)));
    assert_eq!(
        index.find_all_inside(&rect(-60, -60, 60, 60)),
        vec![(key, rect(-50, -50, 50, 50))]
    );
    assert!(index.remove(&key));
    assert!(index.is_empty());
    index.verify().unwrap();
}

#[test]
fn test_partial_overlap_is_not_containment() {
    let index: RectIndex<&str> = RectIndex::new();
    index.add("a", rect(0, 0, 10, 10));

    // Overlaps but sticks out on two sides.
    assert!(index.find_all_inside(&rect(5, 5, 20, 20)).is_empty());
    // Shares an edge and stays inside.
    assert_eq!(index.find_all_inside(&rect(0, 0, 10, 10)).len(), 1);
}
