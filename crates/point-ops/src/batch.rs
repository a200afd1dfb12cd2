use point_types::{PointBatch, PointRecord};
use tracing::warn;

use crate::config::{BatchConfig, RemainderPolicy};
use crate::types::OpError;

/// Result of partitioning a point sequence.
#[derive(Debug, Clone, PartialEq)]
pub struct BatchPlan {
    /// Batches in order; every one has at least two points.
    pub batches: Vec<PointBatch>,
    /// Points left out of every batch by the remainder policy.
    pub dropped: Vec<PointRecord>,
}

impl BatchPlan {
    /// Points that made it into a batch.
    pub fn point_count(&self) -> usize {
        self.batches.iter().map(PointBatch::len).sum()
    }

    /// Line segments the batches yield in total.
    pub fn segment_count(&self) -> usize {
        self.batches.iter().map(PointBatch::segment_count).sum()
    }
}

/// Partition points into ordered batches of at most `config.batch_size`.
///
/// `n / batch_size` full batches are emitted, followed by one partial batch
/// when the remainder is two or more. A remainder of exactly one is handled
/// by `config.remainder`. Batches never share points, so consecutive batches
/// are not joined by a segment.
pub fn split(points: &[PointRecord], config: &BatchConfig) -> Result<BatchPlan, OpError> {
    let size = config.batch_size;
    if size < 2 {
        return Err(OpError::InvalidParameter {
            reason: format!("batch size must be at least 2, got {}", size),
        });
    }

    let full = points.len() / size;
    let (head, tail) = points.split_at(full * size);

    let mut batches: Vec<PointBatch> = head
        .chunks_exact(size)
        .enumerate()
        .map(|(index, chunk)| PointBatch::new(index, chunk.to_vec()))
        .collect();
    let mut dropped = Vec::new();

    match tail {
        [] => {}
        [single] => match (config.remainder, batches.last_mut()) {
            (RemainderPolicy::MergeIntoPrevious, Some(last)) => last.points.push(*single),
            _ => {
                warn!(
                    total = points.len(),
                    batch_size = size,
                    point = ?single.coords(),
                    "dropping single trailing point"
                );
                dropped.push(*single);
            }
        },
        partial => batches.push(PointBatch::new(batches.len(), partial.to_vec())),
    }

    Ok(BatchPlan { batches, dropped })
}
