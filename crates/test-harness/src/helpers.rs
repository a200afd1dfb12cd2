//! Helper functions: error type, tracing setup, CSV fixtures, sketch math.

use std::fs;
use std::path::{Path, PathBuf};

use host_bridge::MockSketch;
use tracing_subscriber::EnvFilter;

// ── Error Type ──────────────────────────────────────────────────────────────

/// Unified error type for the test harness.
#[derive(Debug, thiserror::Error)]
pub enum HarnessError {
    #[error("surface not found: {name}")]
    SurfaceNotFound { name: String },

    #[error("duplicate name: {name}")]
    DuplicateName { name: String },

    #[error("dispatch error: {message}")]
    DispatchError { message: String },

    #[error("assertion failed: {detail}")]
    AssertionFailed { detail: String },

    #[error("oracle failure ({oracle}): {detail}")]
    OracleFailure { oracle: String, detail: String },

    #[error("fixture error: {reason}")]
    Fixture { reason: String },
}

// ── Tracing ─────────────────────────────────────────────────────────────────

/// Route `tracing` output to the test writer. Safe to call from every test.
///
/// The filter comes from `RUST_LOG`, defaulting to `info`.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    // A second call fails because a global subscriber is already set.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_test_writer()
        .try_init();
}

// ── CSV Fixtures ────────────────────────────────────────────────────────────

/// `n` points along a diagonal: (i, 2i, 3i).
pub fn line_points(n: usize) -> Vec<[f64; 3]> {
    (0..n)
        .map(|i| {
            let t = i as f64;
            [t, 2.0 * t, 3.0 * t]
        })
        .collect()
}

/// Render coordinates as CSV text, one `x,y,z` row per point.
pub fn csv_text(points: &[[f64; 3]]) -> String {
    points
        .iter()
        .map(|[x, y, z]| format!("{},{},{}\n", x, y, z))
        .collect()
}

/// Write `text` to `dir/name` and return the full path.
pub fn write_fixture(dir: &Path, name: &str, text: &str) -> Result<PathBuf, HarnessError> {
    let path = dir.join(name);
    fs::write(&path, text).map_err(|e| HarnessError::Fixture {
        reason: format!("cannot write {}: {}", path.display(), e),
    })?;
    Ok(path)
}

// ── Sketch Math ─────────────────────────────────────────────────────────────

/// The polyline vertices a sketch was drawn through: the first start point
/// followed by every end point.
pub fn sketch_vertices(sketch: &MockSketch) -> Vec<[f64; 3]> {
    let mut vertices = Vec::with_capacity(sketch.lines.len() + 1);
    if let Some((start, _)) = sketch.lines.first() {
        vertices.push(*start);
    }
    vertices.extend(sketch.lines.iter().map(|(_, end)| *end));
    vertices
}

/// Largest per-axis distance between two points.
pub fn max_axis_delta(a: [f64; 3], b: [f64; 3]) -> f64 {
    a.iter()
        .zip(b.iter())
        .map(|(p, q)| (p - q).abs())
        .fold(0.0, f64::max)
}
