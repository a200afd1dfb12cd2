//! PipelineBuilder: fluent API for scripting add-in runs in tests.
//!
//! Wraps `addin_commands::dispatch()` to test the real command path, not a
//! simulation. Surfaces are addressed by name for readability, and every
//! file lives in a scratch directory removed when the builder is dropped.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use addin_commands::{
    dispatch, AddinConfig, AddinSession, CommandRequest, CommandResponse, ExportDialog,
    ImportDialog,
};
use host_bridge::{MockHost, PlaneRef, SurfaceRef};
use point_types::{MeshQuality, PointRecord, UnitTag};
use tempfile::TempDir;
use tracing::debug;

use crate::helpers::*;
use crate::oracle::{self, OracleVerdict};

/// A fluent builder for running export and import commands in tests.
///
/// Owns the mock host, a started add-in session and a scratch directory.
pub struct PipelineBuilder {
    pub host: MockHost,
    session: AddinSession,
    dir: TempDir,
    surfaces: HashMap<String, SurfaceRef>,
    history: Vec<CommandResponse>,
}

impl PipelineBuilder {
    /// A builder on a fresh MockHost with the default add-in config.
    pub fn mock() -> Result<Self, HarnessError> {
        Self::with_config(AddinConfig::default())
    }

    pub fn with_config(config: AddinConfig) -> Result<Self, HarnessError> {
        init_tracing();
        let session = AddinSession::start(config).map_err(|e| HarnessError::Fixture {
            reason: e.to_string(),
        })?;
        let dir = tempfile::tempdir().map_err(|e| HarnessError::Fixture {
            reason: format!("cannot create scratch dir: {}", e),
        })?;
        Ok(Self {
            host: MockHost::new(),
            session,
            dir,
            surfaces: HashMap::new(),
            history: Vec::new(),
        })
    }

    /// Switch the host's display unit.
    pub fn display_unit(mut self, unit: &str) -> Self {
        self.host.set_display_unit(unit);
        self
    }

    pub fn dir(&self) -> &Path {
        self.dir.path()
    }

    pub fn config(&self) -> &AddinConfig {
        &self.session.config
    }

    /// Every response so far, in dispatch order.
    pub fn history(&self) -> &[CommandResponse] {
        &self.history
    }

    // ── Setup ───────────────────────────────────────────────────────────

    /// Add a named rectangular surface (dimensions in centimeters).
    pub fn surface(
        &mut self,
        name: &str,
        face_count: usize,
        width: f64,
        height: f64,
    ) -> Result<SurfaceRef, HarnessError> {
        if self.surfaces.contains_key(name) {
            return Err(HarnessError::DuplicateName {
                name: name.to_string(),
            });
        }
        let surface = self.host.add_surface(face_count, width, height);
        self.surfaces.insert(name.to_string(), surface);
        Ok(surface)
    }

    /// Write a CSV fixture with the given rows into the scratch directory.
    pub fn csv_file(&self, name: &str, points: &[[f64; 3]]) -> Result<PathBuf, HarnessError> {
        write_fixture(self.dir(), name, &csv_text(points))
    }

    /// Write raw text into the scratch directory.
    pub fn text_file(&self, name: &str, text: &str) -> Result<PathBuf, HarnessError> {
        write_fixture(self.dir(), name, text)
    }

    fn surface_ref(&self, name: &str) -> Result<SurfaceRef, HarnessError> {
        self.surfaces
            .get(name)
            .copied()
            .ok_or_else(|| HarnessError::SurfaceNotFound {
                name: name.to_string(),
            })
    }

    // ── Commands ────────────────────────────────────────────────────────

    /// Dispatch a raw request and record the response.
    pub fn run(&mut self, request: CommandRequest) -> CommandResponse {
        let response = dispatch(&self.session, request, &mut self.host);
        debug!(step = self.history.len(), completed = response.is_completed(), "harness dispatch");
        self.history.push(response.clone());
        response
    }

    /// Export a named surface into the scratch directory.
    /// Returns the path of the written CSV file.
    pub fn export(&mut self, surface: &str, quality: MeshQuality) -> Result<PathBuf, HarnessError> {
        let surface = self.surface_ref(surface)?;
        let dialog = ExportDialog::new(surface, self.dir()).with_quality(quality);
        let response = self.run(CommandRequest::SurfaceToCsv { dialog });
        expect_completed(response)?;
        Ok(self.dir().join(&self.session.config.export.file_name))
    }

    /// Import a CSV file onto the XY plane. Returns the summary text.
    pub fn import(&mut self, csv_path: &Path) -> Result<String, HarnessError> {
        let dialog = ImportDialog::new(csv_path);
        expect_completed(self.run(CommandRequest::CsvToPoints { dialog }))
    }

    /// Import a CSV file onto a given plane. Returns the summary text.
    pub fn import_on(&mut self, csv_path: &Path, plane: PlaneRef) -> Result<String, HarnessError> {
        let dialog = ImportDialog::new(csv_path).on_plane(plane);
        expect_completed(self.run(CommandRequest::CsvToPoints { dialog }))
    }

    // ── Inspection ──────────────────────────────────────────────────────

    /// Read a CSV file back as display-unit points.
    pub fn read_points(&self, path: &Path) -> Result<Vec<PointRecord>, HarnessError> {
        point_csv::read_points_file(path, UnitTag::FileUnits).map_err(|e| HarnessError::Fixture {
            reason: e.to_string(),
        })
    }

    /// Run the sketch oracles against everything imported so far.
    pub fn check_sketches(&self) -> Vec<OracleVerdict> {
        oracle::run_sketch_oracles(&self.host, self.max_points_per_sketch())
    }

    /// Most points a single sketch may hold under the current batch config.
    pub fn max_points_per_sketch(&self) -> usize {
        let batch = &self.session.config.import.batch;
        match batch.remainder {
            point_ops::RemainderPolicy::Drop => batch.batch_size,
            point_ops::RemainderPolicy::MergeIntoPrevious => batch.batch_size + 1,
        }
    }

    /// Fail if any dispatched command did not complete.
    pub fn assert_no_failures(&self) -> Result<(), HarnessError> {
        match self.history.iter().find(|r| !r.is_completed()) {
            None => Ok(()),
            Some(response) => Err(HarnessError::AssertionFailed {
                detail: format!("command did not complete: {:?}", response),
            }),
        }
    }
}

fn expect_completed(response: CommandResponse) -> Result<String, HarnessError> {
    match response {
        CommandResponse::Completed { summary, .. } => Ok(summary),
        CommandResponse::Skipped { reason, .. } => Err(HarnessError::DispatchError { message: reason }),
        CommandResponse::Failed { message, .. } => Err(HarnessError::DispatchError { message }),
    }
}
