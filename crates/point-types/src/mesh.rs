use serde::{Deserialize, Serialize};

use crate::point::{PointError, PointRecord, UnitTag};

/// Tessellation quality levels offered by the export dialog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum MeshQuality {
    Low,
    Normal,
    High,
    #[default]
    VeryHigh,
}

impl MeshQuality {
    /// All levels in dropdown order.
    pub const ALL: [MeshQuality; 4] = [
        MeshQuality::Low,
        MeshQuality::Normal,
        MeshQuality::High,
        MeshQuality::VeryHigh,
    ];

    /// Map a dropdown index back to a quality level.
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Position of this level in the dropdown.
    pub fn index(self) -> usize {
        match self {
            MeshQuality::Low => 0,
            MeshQuality::Normal => 1,
            MeshQuality::High => 2,
            MeshQuality::VeryHigh => 3,
        }
    }

    /// Label shown to the user.
    pub fn label(self) -> &'static str {
        match self {
            MeshQuality::Low => "Low",
            MeshQuality::Normal => "Normal",
            MeshQuality::High => "High",
            MeshQuality::VeryHigh => "Very High",
        }
    }
}

impl std::fmt::Display for MeshQuality {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Structural defects in a [`MeshSample`].
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum MeshError {
    #[error("coordinate list length {len} is not a multiple of 3")]
    RaggedCoordinates { len: usize },

    #[error("index list length {len} is not a multiple of 3")]
    RaggedIndices { len: usize },

    #[error("{normals} normal values for {coordinates} coordinate values")]
    NormalsMismatch { coordinates: usize, normals: usize },

    #[error("triangle index {index} out of range for {vertex_count} vertices")]
    IndexOutOfRange { index: u32, vertex_count: usize },

    #[error("vertex {vertex}: {source}")]
    InvalidVertex {
        vertex: usize,
        #[source]
        source: PointError,
    },
}

/// Triangle mesh produced by the host tessellator.
///
/// All coordinates are in the host base unit (centimeters).
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct MeshSample {
    /// Flat vertex positions [x0, y0, z0, x1, y1, z1, ...].
    pub coordinates: Vec<f64>,
    /// Triangle vertex-index triples, flattened.
    pub indices: Vec<u32>,
    /// Flat per-vertex normals, parallel to `coordinates`.
    pub normals: Vec<f64>,
}

impl MeshSample {
    pub fn vertex_count(&self) -> usize {
        self.coordinates.len() / 3
    }

    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    /// Check that the three buffers describe one consistent mesh.
    pub fn validate(&self) -> Result<(), MeshError> {
        self.check_coordinates()?;
        if self.normals.len() != self.coordinates.len() {
            return Err(MeshError::NormalsMismatch {
                coordinates: self.coordinates.len(),
                normals: self.normals.len(),
            });
        }
        if self.indices.len() % 3 != 0 {
            return Err(MeshError::RaggedIndices {
                len: self.indices.len(),
            });
        }
        let vertex_count = self.vertex_count();
        match self.indices.iter().find(|&&i| i as usize >= vertex_count) {
            Some(&index) => Err(MeshError::IndexOutOfRange {
                index,
                vertex_count,
            }),
            None => Ok(()),
        }
    }

    /// Vertex positions as point records, in vertex order.
    pub fn points(&self) -> Result<Vec<PointRecord>, MeshError> {
        self.check_coordinates()?;
        self.coordinates
            .chunks_exact(3)
            .enumerate()
            .map(|(vertex, c)| {
                PointRecord::new(c[0], c[1], c[2], UnitTag::Centimeters)
                    .map_err(|source| MeshError::InvalidVertex { vertex, source })
            })
            .collect()
    }

    fn check_coordinates(&self) -> Result<(), MeshError> {
        if self.coordinates.len() % 3 == 0 {
            Ok(())
        } else {
            Err(MeshError::RaggedCoordinates {
                len: self.coordinates.len(),
            })
        }
    }
}
