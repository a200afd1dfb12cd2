use serde::{Deserialize, Serialize};

/// Reference to a surface body selected in the host document.
/// Valid only for the current host session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SurfaceRef(pub u64);

/// Reference to a planar construction surface (e.g. the XY plane).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PlaneRef(pub u64);

/// Reference to a sketch created in the host document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SketchRef(pub u64);

/// Reference to a mesh body added to the host document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MeshBodyRef(pub u64);

/// Errors reported by host capabilities.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum HostError {
    #[error("cannot convert from '{from}' to '{to}': {reason}")]
    UnitConversion {
        from: String,
        to: String,
        reason: String,
    },

    #[error("tessellation failed: {reason}")]
    TessellationFailed { reason: String },

    #[error("sketch operation failed: {reason}")]
    SketchFailed { reason: String },

    #[error("mesh body creation failed: {reason}")]
    MeshBodyFailed { reason: String },

    #[error("{kind} not found: {id}")]
    EntityNotFound { kind: &'static str, id: u64 },
}

impl HostError {
    /// Whether this error came from the unit converter rather than a geometry or UI call.
    pub fn is_unit_conversion(&self) -> bool {
        matches!(self, HostError::UnitConversion { .. })
    }
}
