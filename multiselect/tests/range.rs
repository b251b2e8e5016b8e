use multiselect::Range;

#[test]
fn test_range_normalizes_endpoint_order() {
    let forward = Range::new(3, 9);
    let backward = Range::new(9, 3);
    assert_eq!(forward, backward);
    assert_eq!(forward.begin(), 3);
    assert_eq!(forward.end(), 9);
}

#[test]
fn test_range_contains_is_inclusive() {
    let range = Range::new(3, 9);
    assert!(range.contains(3));
    assert!(range.contains(9));
    assert!(range.contains(6));
    assert!(!range.contains(2));
    assert!(!range.contains(10));
}

#[test]
fn test_range_positions_cover_single_item() {
    let range = Range::new(5, 5);
    assert_eq!(range.positions().collect::<Vec<_>>(), vec![5]);
}

#[test]
fn test_diff_without_previous_selects_all() {
    let (select, deselect) = Range::diff(None, Range::new(7, 11));
    assert_eq!(select, vec![7, 8, 9, 10, 11]);
    assert!(deselect.is_empty());
}

#[test]
fn test_diff_growing_range_selects_only_new_tail() {
    let (select, deselect) = Range::diff(Some(Range::new(7, 11)), Range::new(7, 17));
    assert_eq!(select, (12..=17).collect::<Vec<_>>());
    assert!(deselect.is_empty());
}

#[test]
fn test_diff_shrinking_range_deselects_only_old_tail() {
    let (select, deselect) = Range::diff(Some(Range::new(7, 17)), Range::new(7, 10));
    assert!(select.is_empty());
    assert_eq!(deselect, (11..=17).collect::<Vec<_>>());
}

#[test]
fn test_diff_reversing_range_keeps_anchor() {
    // Anchor at 7: the old range ran forward to 17, the new one runs
    // backward to 0. Position 7 is in both and must be untouched.
    let (select, deselect) = Range::diff(Some(Range::new(7, 17)), Range::new(0, 7));
    assert_eq!(select, (0..=6).collect::<Vec<_>>());
    assert_eq!(deselect, (8..=17).collect::<Vec<_>>());
}

#[test]
fn test_diff_identical_range_is_empty() {
    let range = Range::new(4, 8);
    let (select, deselect) = Range::diff(Some(range), range);
    assert!(select.is_empty());
    assert!(deselect.is_empty());
}
