use csv::{Terminator, WriterBuilder};
use point_types::PointRecord;

use crate::errors::CsvError;

/// Serialize points as `x,y,z` rows, one per point, no header.
///
/// Floats are written in shortest round-trip form, so decoding the output
/// yields exactly the same coordinates. The unit tag is not written.
pub fn encode(points: &[PointRecord]) -> Result<String, CsvError> {
    let mut writer = WriterBuilder::new()
        .has_headers(false)
        .terminator(Terminator::Any(b'\n'))
        .from_writer(Vec::with_capacity(points.len() * 24));

    for point in points {
        writer
            .serialize(point.coords())
            .map_err(|e| CsvError::Encode {
                reason: e.to_string(),
            })?;
    }

    let bytes = writer.into_inner().map_err(|e| CsvError::Encode {
        reason: e.to_string(),
    })?;
    String::from_utf8(bytes).map_err(|e| CsvError::Encode {
        reason: e.to_string(),
    })
}
