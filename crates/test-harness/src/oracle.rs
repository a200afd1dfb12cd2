//! Verification oracles: pure functions returning pass/fail verdicts.
//!
//! Each oracle returns an `OracleVerdict` with diagnostic detail, not panics.
//! This lets a test collect all failures in one pass.

use host_bridge::MockHost;
use point_types::PointRecord;

use crate::helpers::{max_axis_delta, sketch_vertices};

/// The result of a single oracle check.
#[derive(Debug, Clone)]
pub struct OracleVerdict {
    pub oracle_name: String,
    pub passed: bool,
    pub detail: String,
    pub value: Option<f64>,
}

impl OracleVerdict {
    fn pass(name: &str, detail: String) -> Self {
        Self {
            oracle_name: name.to_string(),
            passed: true,
            detail,
            value: None,
        }
    }

    fn pass_val(name: &str, detail: String, value: f64) -> Self {
        Self {
            oracle_name: name.to_string(),
            passed: true,
            detail,
            value: Some(value),
        }
    }

    fn fail(name: &str, detail: String) -> Self {
        Self {
            oracle_name: name.to_string(),
            passed: false,
            detail,
            value: None,
        }
    }

    fn fail_val(name: &str, detail: String, value: f64) -> Self {
        Self {
            oracle_name: name.to_string(),
            passed: false,
            detail,
            value: Some(value),
        }
    }
}

// ── Sketch Oracles ──────────────────────────────────────────────────────────

/// Every line in a sketch starts where the previous one ended.
pub fn check_polyline_continuity(host: &MockHost) -> OracleVerdict {
    for (k, sketch) in host.sketches().iter().enumerate() {
        for (i, pair) in sketch.lines.windows(2).enumerate() {
            if pair[0].1 != pair[1].0 {
                return OracleVerdict::fail(
                    "polyline_continuity",
                    format!(
                        "sketch {} line {} ends at {:?} but line {} starts at {:?}",
                        k,
                        i,
                        pair[0].1,
                        i + 1,
                        pair[1].0
                    ),
                );
            }
        }
    }
    OracleVerdict::pass(
        "polyline_continuity",
        format!("{} sketches continuous", host.sketches().len()),
    )
}

/// No sketch holds more than `max_points` points.
pub fn check_sketch_capacity(host: &MockHost, max_points: usize) -> OracleVerdict {
    let largest = host
        .sketches()
        .iter()
        .map(|s| sketch_vertices(s).len())
        .max()
        .unwrap_or(0);
    if largest <= max_points {
        OracleVerdict::pass_val(
            "sketch_capacity",
            format!("largest sketch has {} points (max {})", largest, max_points),
            largest as f64,
        )
    } else {
        OracleVerdict::fail_val(
            "sketch_capacity",
            format!("sketch with {} points exceeds max {}", largest, max_points),
            largest as f64,
        )
    }
}

/// The sketch vertices, read in creation order, are a prefix of `expected`
/// (centimeters). Each sketch starts at the point after the previous
/// sketch's last point. Trailing dropped points may be missing.
pub fn check_point_order(host: &MockHost, expected: &[PointRecord], tol: f64) -> OracleVerdict {
    let drawn: Vec<[f64; 3]> = host.sketches().iter().flat_map(sketch_vertices).collect();
    if drawn.len() > expected.len() {
        return OracleVerdict::fail(
            "point_order",
            format!(
                "{} points drawn but only {} expected",
                drawn.len(),
                expected.len()
            ),
        );
    }
    let mut worst = 0.0_f64;
    for (i, (got, want)) in drawn.iter().zip(expected).enumerate() {
        let delta = max_axis_delta(*got, want.coords());
        if delta > tol {
            return OracleVerdict::fail_val(
                "point_order",
                format!(
                    "point {}: expected {:?}, drawn {:?} (delta {:.3e})",
                    i,
                    want.coords(),
                    got,
                    delta
                ),
                delta,
            );
        }
        worst = worst.max(delta);
    }
    OracleVerdict::pass_val(
        "point_order",
        format!("{} points in order, max delta {:.3e}", drawn.len(), worst),
        worst,
    )
}

// ── Round-Trip Oracles ──────────────────────────────────────────────────────

/// Two point lists have the same length and agree coordinate-wise within `tol`.
pub fn check_round_trip(original: &[PointRecord], read_back: &[PointRecord], tol: f64) -> OracleVerdict {
    if original.len() != read_back.len() {
        return OracleVerdict::fail(
            "round_trip",
            format!(
                "length changed: {} written, {} read back",
                original.len(),
                read_back.len()
            ),
        );
    }
    let worst = original
        .iter()
        .zip(read_back)
        .map(|(a, b)| max_axis_delta(a.coords(), b.coords()))
        .fold(0.0, f64::max);
    if worst <= tol {
        OracleVerdict::pass_val(
            "round_trip",
            format!("{} points, max delta {:.3e}", original.len(), worst),
            worst,
        )
    } else {
        OracleVerdict::fail_val(
            "round_trip",
            format!("max delta {:.3e} exceeds tol {:.3e}", worst, tol),
            worst,
        )
    }
}

/// Run the sketch oracles that apply to any import.
pub fn run_sketch_oracles(host: &MockHost, max_points: usize) -> Vec<OracleVerdict> {
    vec![
        check_polyline_continuity(host),
        check_sketch_capacity(host, max_points),
    ]
}
