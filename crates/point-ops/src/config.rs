//! Run configuration for the export and import pipelines.

use point_types::DEFAULT_BATCH_SIZE;
use serde::{Deserialize, Serialize};

/// Fixed name of the exported point file inside the chosen folder.
pub const EXPORT_FILE_NAME: &str = "surface_points.csv";

/// What to do with a single point left over after the last full batch.
///
/// One point cannot form a line segment, so it never becomes a batch of its own.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RemainderPolicy {
    /// Discard the trailing point.
    #[default]
    Drop,
    /// Append it to the previous batch, which then holds `batch_size + 1` points.
    MergeIntoPrevious,
}

/// How points are partitioned into sketches.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BatchConfig {
    /// Maximum points per batch. Must be at least 2.
    pub batch_size: usize,
    pub remainder: RemainderPolicy,
}

impl Default for BatchConfig {
    fn default() -> Self {
        Self {
            batch_size: DEFAULT_BATCH_SIZE,
            remainder: RemainderPolicy::Drop,
        }
    }
}

impl BatchConfig {
    /// Default batch size, keeping a lone trailing point.
    pub fn merging() -> Self {
        Self {
            remainder: RemainderPolicy::MergeIntoPrevious,
            ..Self::default()
        }
    }

    pub fn with_batch_size(batch_size: usize) -> Self {
        Self {
            batch_size,
            ..Self::default()
        }
    }
}

/// Settings for the surface-to-CSV export.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExportConfig {
    /// File name written inside the chosen folder.
    pub file_name: String,
    /// Add the tessellated mesh to the design as a mesh body.
    pub create_mesh_body: bool,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            file_name: EXPORT_FILE_NAME.to_string(),
            create_mesh_body: true,
        }
    }
}

/// Settings for the CSV-to-sketch import.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ImportConfig {
    pub batch: BatchConfig,
}
