use std::path::PathBuf;

use host_bridge::{HostBundle, MeshBodyRef, SurfaceRef};
use point_csv::write_points_file;
use point_types::{MeshQuality, PointRecord, UnitTag};
use serde::{Deserialize, Serialize};
use tracing::{info, instrument};

use crate::config::ExportConfig;
use crate::types::OpError;

/// Inputs collected by the export dialog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExportRequest {
    pub surface: SurfaceRef,
    pub quality: MeshQuality,
    /// Folder the CSV file is written into.
    pub folder: PathBuf,
}

/// Outcome of a successful export.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExportReport {
    pub face_count: usize,
    pub quality: MeshQuality,
    pub output_path: PathBuf,
    pub point_count: usize,
    pub triangle_count: usize,
    /// Unit the CSV coordinates are written in.
    pub display_unit: String,
    pub mesh_body: Option<MeshBodyRef>,
}

impl ExportReport {
    /// Human-readable summary shown after the run.
    pub fn summary(&self) -> String {
        format!(
            "The selected surface has: {} faces.\n\n\
             Mesh generated with {} quality ({} points, {} triangles).\n\n\
             Exported CSV file: \"{}\" (units: {}).",
            self.face_count,
            self.quality,
            self.point_count,
            self.triangle_count,
            self.output_path.display(),
            self.display_unit,
        )
    }
}

/// Tessellate a surface and write its mesh vertices to a CSV file.
///
/// Vertices come out of the host in centimeters and are written in the
/// user's display unit. The file is overwritten if it exists. On failure
/// nothing is undone: a mesh body added before the failing step stays.
#[instrument(skip(host, request, config), fields(surface = request.surface.0, quality = %request.quality))]
pub fn export_surface_points(
    host: &mut dyn HostBundle,
    request: &ExportRequest,
    config: &ExportConfig,
) -> Result<ExportReport, OpError> {
    let face_count = host.face_count(request.surface)?;

    let mesh = host.tessellate(request.surface, request.quality)?;
    info!(
        faces = face_count,
        vertices = mesh.vertex_count(),
        triangles = mesh.triangle_count(),
        "surface tessellated"
    );
    mesh.validate()?;

    let mesh_body = if config.create_mesh_body {
        Some(host.add_mesh_body(&mesh)?)
    } else {
        None
    };

    let display_unit = host.display_unit();
    let points = mesh
        .points()?
        .iter()
        .map(|p| host.convert_point(p, UnitTag::FileUnits))
        .collect::<Result<Vec<PointRecord>, _>>()?;

    let output_path = request.folder.join(&config.file_name);
    write_points_file(&output_path, &points)?;
    info!(path = %output_path.display(), points = points.len(), unit = %display_unit, "surface points exported");

    Ok(ExportReport {
        face_count,
        quality: request.quality,
        output_path,
        point_count: points.len(),
        triangle_count: mesh.triangle_count(),
        display_unit,
        mesh_body,
    })
}
