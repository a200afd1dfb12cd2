use std::path::Path;

use point_types::{PointRecord, UnitTag};
use tracing::info;

use crate::decode::decode;
use crate::encode::encode;
use crate::errors::CsvError;

/// Read and decode a point list from disk.
pub fn read_points_file(path: &Path, unit: UnitTag) -> Result<Vec<PointRecord>, CsvError> {
    let text = std::fs::read_to_string(path).map_err(|e| CsvError::Io {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })?;
    let points = decode(&text, unit)?;
    info!(path = %path.display(), points = points.len(), "read point file");
    Ok(points)
}

/// Encode and write a point list, replacing any existing file.
///
/// Encoding happens before the file is opened, so an encode failure never
/// truncates an existing file.
pub fn write_points_file(path: &Path, points: &[PointRecord]) -> Result<(), CsvError> {
    let text = encode(points)?;
    std::fs::write(path, text).map_err(|e| CsvError::Io {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })?;
    info!(path = %path.display(), points = points.len(), "wrote point file");
    Ok(())
}
