use std::path::PathBuf;

use host_bridge::{HostBundle, PlaneRef, SketchRef};
use point_csv::read_points_file;
use point_types::{PointRecord, UnitTag};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

use crate::batch::split;
use crate::config::ImportConfig;
use crate::types::OpError;

/// Inputs collected by the import command.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImportRequest {
    pub csv_path: PathBuf,
    /// Construction plane the sketches are created on.
    pub plane: PlaneRef,
}

/// Outcome of a successful import.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImportReport {
    pub csv_path: PathBuf,
    /// Points read from the file.
    pub point_count: usize,
    pub sketch_count: usize,
    pub segment_count: usize,
    /// `point_count % batch_size`.
    pub remainder: usize,
    /// Points left out by the remainder policy.
    pub dropped: usize,
    pub sketches: Vec<SketchRef>,
}

impl ImportReport {
    /// Human-readable summary shown after the run.
    pub fn summary(&self) -> String {
        let mut text = format!(
            "CSV file name: {}.\nNumber of points: {}.\nNumber of sketches: {}\nRemainder points: {}",
            self.csv_path.display(),
            self.point_count,
            self.sketch_count,
            self.remainder,
        );
        if self.dropped > 0 {
            text.push_str(&format!("\nDropped trailing points: {}", self.dropped));
        }
        text
    }
}

/// Read a CSV point list and draw it as line segments, one sketch per batch.
///
/// File coordinates are in the display unit and are converted to centimeters
/// before any sketch is created. A failure part way through leaves the
/// sketches already created in the design.
#[instrument(skip(host, request, config), fields(path = %request.csv_path.display()))]
pub fn import_csv_points(
    host: &mut dyn HostBundle,
    request: &ImportRequest,
    config: &ImportConfig,
) -> Result<ImportReport, OpError> {
    let file_points = read_points_file(&request.csv_path, UnitTag::FileUnits)?;
    let points = file_points
        .iter()
        .map(|p| host.convert_point(p, UnitTag::Centimeters))
        .collect::<Result<Vec<PointRecord>, _>>()?;

    let plan = split(&points, &config.batch)?;
    info!(
        points = points.len(),
        batches = plan.batches.len(),
        dropped = plan.dropped.len(),
        "points split into batches"
    );

    let mut sketches = Vec::with_capacity(plan.batches.len());
    let mut segment_count = 0;
    for batch in &plan.batches {
        let sketch = host.add_sketch(request.plane)?;
        sketches.push(sketch);
        for segment in batch.segments() {
            host.add_line(sketch, segment.start.coords(), segment.end.coords())?;
            segment_count += 1;
        }
        debug!(batch = batch.index, points = batch.len(), sketch = sketch.0, "batch sketched");
    }

    info!(sketches = sketches.len(), segments = segment_count, "CSV points imported");
    Ok(ImportReport {
        csv_path: request.csv_path.clone(),
        point_count: points.len(),
        sketch_count: sketches.len(),
        segment_count,
        remainder: points.len() % config.batch.batch_size,
        dropped: plan.dropped.len(),
        sketches,
    })
}
