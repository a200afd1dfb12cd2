//! Tests for verification oracles and assertion helpers.

use host_bridge::{MockHost, SketchHost};
use point_types::{PointRecord, UnitTag};
use test_harness::assertions::*;
use test_harness::helpers::*;
use test_harness::oracle::*;

/// A host with one sketch drawn through `vertices` as a polyline.
fn host_with_polyline(vertices: &[[f64; 3]]) -> MockHost {
    let mut host = MockHost::new();
    let plane = host.xy_construction_plane();
    let sketch = host.add_sketch(plane).unwrap();
    for pair in vertices.windows(2) {
        host.add_line(sketch, pair[0], pair[1]).unwrap();
    }
    host
}

fn cm(coords: &[[f64; 3]]) -> Vec<PointRecord> {
    coords
        .iter()
        .map(|c| PointRecord::from_coords(*c, UnitTag::Centimeters).unwrap())
        .collect()
}

// ── Sketch Oracle Tests ─────────────────────────────────────────────────

#[test]
fn continuity_passes_for_polyline() {
    let host = host_with_polyline(&line_points(5));
    let verdict = check_polyline_continuity(&host);
    assert!(verdict.passed, "{}", verdict.detail);
}

#[test]
fn continuity_fails_for_gap() {
    let mut host = MockHost::new();
    let plane = host.xy_construction_plane();
    let sketch = host.add_sketch(plane).unwrap();
    host.add_line(sketch, [0., 0., 0.], [1., 0., 0.]).unwrap();
    host.add_line(sketch, [2., 0., 0.], [3., 0., 0.]).unwrap();

    let verdict = check_polyline_continuity(&host);
    assert!(!verdict.passed);
    assert!(verdict.detail.contains("line 1"), "{}", verdict.detail);
}

#[test]
fn capacity_reports_largest_sketch() {
    let host = host_with_polyline(&line_points(7));
    let verdict = check_sketch_capacity(&host, 7);
    assert!(verdict.passed);
    assert_eq!(verdict.value, Some(7.0));
    assert!(!check_sketch_capacity(&host, 6).passed);
}

#[test]
fn point_order_accepts_dropped_tail() {
    let rows = line_points(4);
    let host = host_with_polyline(&rows[..3]);
    let verdict = check_point_order(&host, &cm(&rows), 1e-12);
    assert!(verdict.passed, "{}", verdict.detail);
}

#[test]
fn point_order_rejects_swapped_points() {
    let mut rows = line_points(4);
    let host = host_with_polyline(&rows);
    rows.swap(1, 2);
    let verdict = check_point_order(&host, &cm(&rows), 1e-12);
    assert!(!verdict.passed);
    assert!(verdict.detail.starts_with("point 1"), "{}", verdict.detail);
}

// ── Round-Trip Oracle Tests ─────────────────────────────────────────────

#[test]
fn round_trip_detects_length_change() {
    let a = cm(&line_points(3));
    let b = cm(&line_points(2));
    assert!(!check_round_trip(&a, &b, 0.0).passed);
}

#[test]
fn round_trip_within_tolerance() {
    let a = cm(&[[1.0, 2.0, 3.0]]);
    let b = cm(&[[1.0 + 1e-10, 2.0, 3.0]]);
    assert!(check_round_trip(&a, &b, 1e-9).passed);
    assert!(!check_round_trip(&a, &b, 1e-11).passed);
}

// ── Assertion Helper Tests ──────────────────────────────────────────────

#[test]
fn sketch_size_assertion_reports_both_sides() {
    let host = host_with_polyline(&line_points(3));
    assert!(assert_sketch_sizes(&host, &[3], "ok").is_ok());
    let err = assert_sketch_sizes(&host, &[4], "ctx").unwrap_err();
    assert!(err.to_string().contains("[ctx] sketch sizes: expected [4], got [3]"));
}

#[test]
fn point_close_assertion_names_axis() {
    let p = PointRecord::new(1.0, 2.0, 3.0, UnitTag::Centimeters).unwrap();
    assert!(assert_point_close(&p, [1.0, 2.0, 3.0], 0.0, "exact").is_ok());
    let err = assert_point_close(&p, [1.0, 2.5, 3.0], 0.1, "y").unwrap_err();
    assert!(err.to_string().contains("axis 1"));
}

#[test]
fn failed_verdict_becomes_oracle_failure() {
    let host = host_with_polyline(&line_points(5));
    let err = assert_verdict(&check_sketch_capacity(&host, 2)).unwrap_err();
    assert!(matches!(err, HarnessError::OracleFailure { .. }));
}

#[test]
fn csv_text_renders_one_row_per_point() {
    assert_eq!(csv_text(&[[1.0, 2.5, -3.0]]), "1,2.5,-3\n");
    assert_eq!(sketch_vertices(&host_with_polyline(&line_points(4)).sketches()[0]).len(), 4);
}
