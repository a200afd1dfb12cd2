use csv::{ReaderBuilder, StringRecord, Trim};
use point_types::{PointRecord, UnitTag};
use tracing::debug;

use crate::errors::CsvError;

/// Parse CSV text into points, in file order.
///
/// Every row needs at least three numeric fields; extra columns are ignored.
/// `row` in errors is the zero-based line number in the file. A blank line
/// before the last record is a row with no fields and fails like any other
/// short row. The first bad row fails the whole decode, so a partial list is
/// never returned.
pub fn decode(text: &str, unit: UnitTag) -> Result<Vec<PointRecord>, CsvError> {
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(Trim::All)
        .from_reader(text.as_bytes());

    // The reader skips empty lines, so map each record back to its file line.
    let record_lines: Vec<usize> = text
        .lines()
        .enumerate()
        .filter(|(_, line)| !line.is_empty())
        .map(|(i, _)| i)
        .collect();

    let mut points = Vec::new();
    let mut next_row = 0usize;
    for (k, record) in reader.records().enumerate() {
        let row = record_lines.get(k).copied().unwrap_or(next_row);
        if row > next_row {
            return Err(CsvError::MalformedRow {
                row: next_row,
                reason: "expected at least 3 fields, found 0".to_string(),
            });
        }
        let record = record.map_err(|e| CsvError::MalformedRow {
            row,
            reason: e.to_string(),
        })?;
        points.push(parse_row(row, &record, unit)?);
        next_row = row + 1;
    }

    debug!(points = points.len(), ?unit, "decoded CSV point list");
    Ok(points)
}

fn parse_row(row: usize, record: &StringRecord, unit: UnitTag) -> Result<PointRecord, CsvError> {
    if record.len() < 3 {
        return Err(CsvError::MalformedRow {
            row,
            reason: format!("expected at least 3 fields, found {}", record.len()),
        });
    }

    let mut coords = [0.0f64; 3];
    for (i, slot) in coords.iter_mut().enumerate() {
        let field = &record[i];
        *slot = field.parse::<f64>().map_err(|_| CsvError::MalformedRow {
            row,
            reason: format!("field {} is not a number: '{}'", i + 1, field),
        })?;
    }

    PointRecord::from_coords(coords, unit).map_err(|source| CsvError::InvalidPoint { row, source })
}
