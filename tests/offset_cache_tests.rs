// Offset cache properties: anchor, monotonicity, idempotency, eviction.

use wide_grid::data::RowSample;
use wide_grid::grid::{ColumnOffsetCache, WidthEstimator};

/// Build a 50-row sample (header + 49 data rows) where every cell in
/// column `c` has `chars_for(c)` characters.
fn build_sample(columns: usize, chars_for: impl Fn(usize) -> usize) -> RowSample {
    let mut rows: Vec<Vec<String>> = vec![(0..columns).map(|i| format!("field_{}", i)).collect()];
    for _ in 0..49 {
        rows.push((0..columns).map(|c| "x".repeat(chars_for(c))).collect());
    }
    RowSample::new(rows, "field_").unwrap()
}

fn new_cache() -> ColumnOffsetCache {
    // min 200px, 10px per character: the documented test scenario.
    ColumnOffsetCache::new(WidthEstimator::new(200.0, 10.0))
}

#[test]
fn anchor_offset_is_zero_and_survives_pruning() {
    let sample = build_sample(40, |_| 10);
    let mut cache = new_cache();

    cache.extend(&sample, 0..16);
    assert_eq!(cache.offset_of(0), Some(0.0));

    cache.prune(25..31);
    assert_eq!(cache.offset_of(0), Some(0.0));

    cache.prune(1..2);
    assert_eq!(cache.offset_of(0), Some(0.0));
}

#[test]
fn offsets_are_monotonic_in_column_index() {
    // Widths vary per column: 5..44 chars, some below the 200px floor.
    let sample = build_sample(30, |c| 5 + (c * 7) % 40);
    let mut cache = new_cache();
    cache.extend(&sample, 0..30);

    let resolved: Vec<usize> = cache.resolved_indices().collect();
    assert_eq!(resolved.len(), 30);
    for pair in resolved.windows(2) {
        let (i, j) = (pair[0], pair[1]);
        assert!(
            cache.offset_of(i).unwrap() <= cache.offset_of(j).unwrap(),
            "offset({}) > offset({})",
            i,
            j
        );
    }
}

#[test]
fn extension_is_idempotent() {
    let sample = build_sample(25, |c| 3 + c % 30);
    let mut cache = new_cache();

    cache.extend(&sample, 0..20);
    let first: Vec<(usize, f64)> = cache
        .resolved_indices()
        .map(|i| (i, cache.offset_of(i).unwrap()))
        .collect();

    cache.extend(&sample, 0..20);
    let second: Vec<(usize, f64)> = cache
        .resolved_indices()
        .map(|i| (i, cache.offset_of(i).unwrap()))
        .collect();

    assert_eq!(first, second);
}

#[test]
fn rightward_derivation_adds_the_entered_columns_width() {
    // Columns 1..=3 hold 25-char cells: width max(25 * 10, 200) = 250px.
    // offset(2) = 250 + 250 = 500, and column 3 extends it by its own
    // estimated width: offset(3) = 750.
    let sample = build_sample(20, |c| if (1..=3).contains(&c) { 25 } else { 10 });
    let mut cache = new_cache();
    cache.extend(&sample, 0..16);

    assert_eq!(cache.offset_of(2), Some(500.0));
    assert_eq!(cache.offset_of(3), Some(750.0));
}

#[test]
fn leftward_pass_rebuilds_evicted_columns_from_the_right() {
    let sample = build_sample(40, |_| 25); // uniform 250px
    let mut cache = new_cache();
    cache.extend(&sample, 0..21);
    cache.prune(15..21);

    // Columns 10..15 were evicted; only entries 15..=20 (and the anchor)
    // remain, so re-extension must chain leftward off column 15.
    cache.extend(&sample, 10..15);
    for index in 10..15 {
        assert_eq!(cache.offset_of(index), Some(index as f64 * 250.0));
    }
}

#[test]
fn both_directions_resolve_in_a_single_extend_call() {
    let sample = build_sample(40, |_| 25);
    let mut cache = new_cache();
    cache.extend(&sample, 0..21);
    cache.prune(9..12);

    // 5..=8 resolves leftward off column 9, 12..=17 rightward off column 11,
    // all within one call.
    cache.extend(&sample, 5..18);
    for index in 5..18 {
        assert_eq!(cache.offset_of(index), Some(index as f64 * 250.0));
    }
}

#[test]
fn non_adjacent_range_stays_unresolved_until_bridged() {
    let sample = build_sample(60, |_| 10);
    let mut cache = new_cache();

    cache.extend(&sample, 30..35);
    for index in 30..35 {
        assert_eq!(cache.offset_of(index), None);
    }
    assert_eq!(cache.len(), 1); // anchor only

    cache.extend(&sample, 0..35);
    assert_eq!(cache.offset_of(34), Some(34.0 * 200.0));
}

#[test]
fn prune_bounds_every_retained_non_anchor_index() {
    let sample = build_sample(50, |c| c % 20);
    let mut cache = new_cache();
    cache.extend(&sample, 0..31);

    let retain = 10..36;
    cache.prune(retain.clone());
    assert_eq!(cache.retained_range(), retain.clone());
    for index in cache.resolved_indices() {
        assert!(
            index == 0 || retain.contains(&index),
            "index {} escaped the retained neighborhood",
            index
        );
    }
}

#[test]
fn malformed_column_name_stays_unresolved() {
    let mut rows: Vec<Vec<String>> = vec![(0..10).map(|i| format!("field_{}", i)).collect()];
    rows[0][4] = "totally-wrong".to_string();
    for _ in 0..5 {
        rows.push((0..10).map(|c| format!("cell{}", c)).collect());
    }
    let sample = RowSample::new(rows, "field_").unwrap();

    let mut cache = new_cache();
    cache.extend(&sample, 0..10);
    assert!(cache.offset_of(3).is_some());
    assert_eq!(cache.offset_of(4), None);
}
