//! Rich assertion helpers with diagnostic output.
//!
//! Every failure includes expected vs actual and the context label passed in.

use approx::abs_diff_eq;
use host_bridge::MockHost;
use point_types::PointRecord;

use crate::helpers::{sketch_vertices, HarnessError};
use crate::oracle::OracleVerdict;

/// Assert the number of points drawn into each sketch, in creation order.
pub fn assert_sketch_sizes(host: &MockHost, expected: &[usize], ctx: &str) -> Result<(), HarnessError> {
    let actual: Vec<usize> = host
        .sketches()
        .iter()
        .map(|s| sketch_vertices(s).len())
        .collect();
    if actual == expected {
        Ok(())
    } else {
        Err(HarnessError::AssertionFailed {
            detail: format!(
                "[{}] sketch sizes: expected {:?}, got {:?}",
                ctx, expected, actual
            ),
        })
    }
}

/// Assert two points agree on every axis within `tol`.
pub fn assert_point_close(
    actual: &PointRecord,
    expected: [f64; 3],
    tol: f64,
    ctx: &str,
) -> Result<(), HarnessError> {
    let got = actual.coords();
    for axis in 0..3 {
        if !abs_diff_eq!(got[axis], expected[axis], epsilon = tol) {
            return Err(HarnessError::AssertionFailed {
                detail: format!(
                    "[{}] axis {}: expected {}, got {} (tol={})",
                    ctx, axis, expected[axis], got[axis], tol
                ),
            });
        }
    }
    Ok(())
}

/// Assert the last message box had `title` and contains `needle`.
pub fn assert_last_message(
    host: &MockHost,
    title: &str,
    needle: &str,
    ctx: &str,
) -> Result<(), HarnessError> {
    let (got_title, text) = host.messages().last().ok_or_else(|| HarnessError::AssertionFailed {
        detail: format!("[{}] no message box shown", ctx),
    })?;
    if got_title != title || !text.contains(needle) {
        return Err(HarnessError::AssertionFailed {
            detail: format!(
                "[{}] expected '{}' message containing {:?}, got '{}': {:?}",
                ctx, title, needle, got_title, text
            ),
        });
    }
    Ok(())
}

/// Turn a failed verdict into an error.
pub fn assert_verdict(verdict: &OracleVerdict) -> Result<(), HarnessError> {
    if verdict.passed {
        Ok(())
    } else {
        Err(HarnessError::OracleFailure {
            oracle: verdict.oracle_name.clone(),
            detail: verdict.detail.clone(),
        })
    }
}
