//! Dialog inputs and their validation.
//!
//! The host renders the dialogs; these types hold what the user entered and
//! turn it into pipeline requests.

use std::path::PathBuf;

use host_bridge::{PlaneRef, SketchHost, SurfaceRef};
use point_ops::{ExportRequest, ImportRequest};
use point_types::MeshQuality;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum DialogError {
    #[error("select exactly one surface body, got {count}")]
    SelectionCount { count: usize },

    #[error("quality index {index} out of range (0..{max})")]
    QualityOutOfRange { index: usize, max: usize },

    #[error("no {what} chosen")]
    Cancelled { what: &'static str },
}

/// Inputs of the "Surface to Points" dialog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExportDialog {
    /// Selected bodies. Exactly one is required.
    pub selection: Vec<SurfaceRef>,
    /// Index into [`MeshQuality::ALL`].
    pub quality_index: usize,
    /// Output folder. `None` when the folder picker was cancelled.
    pub folder: Option<PathBuf>,
}

impl ExportDialog {
    /// A dialog with `surface` selected and the default quality preselected.
    pub fn new(surface: SurfaceRef, folder: impl Into<PathBuf>) -> Self {
        Self {
            selection: vec![surface],
            quality_index: MeshQuality::default().index(),
            folder: Some(folder.into()),
        }
    }

    pub fn with_quality(mut self, quality: MeshQuality) -> Self {
        self.quality_index = quality.index();
        self
    }

    pub fn quality(&self) -> Result<MeshQuality, DialogError> {
        MeshQuality::from_index(self.quality_index).ok_or(DialogError::QualityOutOfRange {
            index: self.quality_index,
            max: MeshQuality::ALL.len(),
        })
    }

    pub fn into_request(self) -> Result<ExportRequest, DialogError> {
        let surface = match self.selection.as_slice() {
            [single] => *single,
            other => {
                return Err(DialogError::SelectionCount { count: other.len() });
            }
        };
        let quality = self.quality()?;
        let folder = self.folder.ok_or(DialogError::Cancelled { what: "folder" })?;
        Ok(ExportRequest {
            surface,
            quality,
            folder,
        })
    }
}

/// Inputs of the "CSV to Points" dialog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImportDialog {
    /// Chosen file. `None` when the file picker was cancelled.
    pub csv_path: Option<PathBuf>,
    /// Target plane. `None` means the root XY construction plane.
    pub plane: Option<PlaneRef>,
}

impl ImportDialog {
    pub fn new(csv_path: impl Into<PathBuf>) -> Self {
        Self {
            csv_path: Some(csv_path.into()),
            plane: None,
        }
    }

    pub fn on_plane(mut self, plane: PlaneRef) -> Self {
        self.plane = Some(plane);
        self
    }

    pub fn into_request<H>(self, host: &H) -> Result<ImportRequest, DialogError>
    where
        H: SketchHost + ?Sized,
    {
        let csv_path = self.csv_path.ok_or(DialogError::Cancelled { what: "CSV file" })?;
        let plane = self.plane.unwrap_or_else(|| host.xy_construction_plane());
        Ok(ImportRequest { csv_path, plane })
    }
}

/// Validation rule for numeric value inputs: finite values at or above zero.
pub fn validate_non_negative(value: f64) -> bool {
    value >= 0.0 && value.is_finite()
}
