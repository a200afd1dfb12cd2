use host_bridge::HostError;
use point_csv::CsvError;
use point_types::{MeshError, PointError};

/// Errors from the export and import pipelines.
#[derive(Debug, Clone, thiserror::Error)]
pub enum OpError {
    #[error("invalid point: {0}")]
    InvalidPoint(#[from] PointError),

    #[error("invalid mesh: {0}")]
    InvalidMesh(#[from] MeshError),

    #[error("CSV error: {0}")]
    Csv(#[from] CsvError),

    #[error("unit conversion failed: {0}")]
    UnitConversion(HostError),

    #[error("host operation failed: {0}")]
    Host(HostError),

    #[error("invalid parameter: {reason}")]
    InvalidParameter { reason: String },
}

impl From<HostError> for OpError {
    fn from(err: HostError) -> Self {
        if err.is_unit_conversion() {
            OpError::UnitConversion(err)
        } else {
            OpError::Host(err)
        }
    }
}
