use serde::{Deserialize, Serialize};

use crate::point::PointRecord;

/// Default number of points placed in one sketch.
pub const DEFAULT_BATCH_SIZE: usize = 100;

/// An ordered run of points that becomes one sketch on import.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PointBatch {
    /// Zero-based position of this batch in the split sequence.
    pub index: usize,
    /// Points in original file order.
    pub points: Vec<PointRecord>,
}

/// A straight segment between two consecutive points of a batch.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LineSegment {
    pub start: PointRecord,
    pub end: PointRecord,
}

impl PointBatch {
    pub fn new(index: usize, points: Vec<PointRecord>) -> Self {
        Self { index, points }
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Number of line segments this batch yields (`len - 1`, zero for fewer than two points).
    pub fn segment_count(&self) -> usize {
        self.points.len().saturating_sub(1)
    }

    /// Segments joining point `i` and point `i + 1`, in order.
    pub fn segments(&self) -> impl Iterator<Item = LineSegment> + '_ {
        self.points.windows(2).map(|pair| LineSegment {
            start: pair[0],
            end: pair[1],
        })
    }
}
