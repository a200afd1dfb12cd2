use point_ops::{split, BatchConfig, OpError, RemainderPolicy};
use point_types::{PointRecord, UnitTag};
use proptest::prelude::*;

/// Points along the X axis: (0,0,0), (1,0,0), ...
fn line_points(n: usize) -> Vec<PointRecord> {
    (0..n)
        .map(|i| PointRecord::new(i as f64, 0.0, 0.0, UnitTag::Centimeters).unwrap())
        .collect()
}

#[test]
fn three_points_make_one_batch_with_two_segments() {
    let plan = split(&line_points(3), &BatchConfig::default()).unwrap();
    assert_eq!(plan.batches.len(), 1);
    assert_eq!(plan.batches[0].len(), 3);

    let segments: Vec<_> = plan.batches[0].segments().collect();
    assert_eq!(segments.len(), 2);
    assert_eq!(segments[0].start.coords(), [0.0, 0.0, 0.0]);
    assert_eq!(segments[0].end.coords(), [1.0, 0.0, 0.0]);
    assert_eq!(segments[1].start.coords(), [1.0, 0.0, 0.0]);
    assert_eq!(segments[1].end.coords(), [2.0, 0.0, 0.0]);
}

#[test]
fn single_point_remainder_is_dropped_by_default() {
    let points = line_points(101);
    let plan = split(&points, &BatchConfig::default()).unwrap();

    assert_eq!(plan.batches.len(), 1);
    assert_eq!(plan.batches[0].len(), 100);
    assert_eq!(plan.point_count(), 100);
    assert_eq!(plan.dropped, vec![points[100]]);
    assert_eq!(plan.segment_count(), 99);
}

#[test]
fn two_point_remainder_forms_its_own_batch() {
    let points = line_points(102);
    let plan = split(&points, &BatchConfig::default()).unwrap();

    assert_eq!(plan.batches.len(), 2);
    assert_eq!(plan.batches[0].len(), 100);
    assert_eq!(plan.batches[1].len(), 2);
    assert_eq!(plan.batches[1].index, 1);
    assert_eq!(plan.segment_count(), 99 + 1);
    assert!(plan.dropped.is_empty());
    // No segment bridges the two batches
    assert_eq!(plan.batches[1].points[0], points[100]);
}

#[test]
fn exact_multiple_has_no_partial_batch() {
    let plan = split(&line_points(300), &BatchConfig::default()).unwrap();
    assert_eq!(plan.batches.len(), 3);
    assert!(plan.batches.iter().all(|b| b.len() == 100));
    assert!(plan.dropped.is_empty());
}

#[test]
fn empty_input_yields_no_batches() {
    let plan = split(&[], &BatchConfig::default()).unwrap();
    assert!(plan.batches.is_empty());
    assert!(plan.dropped.is_empty());
}

#[test]
fn lone_point_is_dropped_even_when_merging() {
    let points = line_points(1);
    let plan = split(&points, &BatchConfig::merging()).unwrap();
    assert!(plan.batches.is_empty());
    assert_eq!(plan.dropped, points);
}

#[test]
fn merge_policy_appends_trailing_point_to_previous_batch() {
    let points = line_points(201);
    let plan = split(&points, &BatchConfig::merging()).unwrap();

    assert_eq!(plan.batches.len(), 2);
    assert_eq!(plan.batches[0].len(), 100);
    assert_eq!(plan.batches[1].len(), 101);
    assert_eq!(plan.batches[1].points.last(), Some(&points[200]));
    assert!(plan.dropped.is_empty());
    assert_eq!(plan.point_count(), 201);
}

#[test]
fn batches_preserve_input_order() {
    let points = line_points(250);
    let plan = split(&points, &BatchConfig::default()).unwrap();
    let flattened: Vec<PointRecord> = plan
        .batches
        .iter()
        .flat_map(|b| b.points.iter().copied())
        .collect();
    assert_eq!(flattened, points);
    for (i, batch) in plan.batches.iter().enumerate() {
        assert_eq!(batch.index, i);
    }
}

#[test]
fn custom_batch_size_is_honoured() {
    let plan = split(&line_points(7), &BatchConfig::with_batch_size(3)).unwrap();
    let sizes: Vec<usize> = plan.batches.iter().map(|b| b.len()).collect();
    // 7 = 3 + 3 + 1, trailing point dropped
    assert_eq!(sizes, vec![3, 3]);
    assert_eq!(plan.dropped.len(), 1);
}

#[test]
fn batch_size_below_two_is_rejected() {
    for size in [0, 1] {
        let err = split(&line_points(5), &BatchConfig::with_batch_size(size)).unwrap_err();
        assert!(matches!(err, OpError::InvalidParameter { .. }), "size {}", size);
    }
}

#[test]
fn remainder_policy_reads_from_snake_case() {
    let config: BatchConfig =
        serde_json::from_str(r#"{"remainder": "merge_into_previous"}"#).unwrap();
    assert_eq!(config.batch_size, 100);
    assert_eq!(config.remainder, RemainderPolicy::MergeIntoPrevious);
}

proptest! {
    #[test]
    fn batch_sizes_follow_remainder_rule(n in 0usize..1200) {
        let plan = split(&line_points(n), &BatchConfig::default()).unwrap();
        let expected_total = n - usize::from(n % 100 == 1);
        prop_assert_eq!(plan.point_count(), expected_total);
        prop_assert_eq!(plan.dropped.len(), usize::from(n % 100 == 1));

        let expected_batches = n / 100 + usize::from(n % 100 >= 2);
        prop_assert_eq!(plan.batches.len(), expected_batches);

        if let Some((last, rest)) = plan.batches.split_last() {
            prop_assert!(rest.iter().all(|b| b.len() == 100));
            prop_assert!((2..=100).contains(&last.len()));
        }
    }
}
