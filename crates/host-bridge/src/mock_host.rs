//! MockHost: deterministic test double implementing every host capability.
//!
//! Surfaces are flat rectangles in the XY plane, tessellated into a regular
//! grid whose density grows with the requested quality. Sketches and lines
//! are recorded so tests can inspect exactly what an import produced.

use std::collections::HashMap;

use point_types::{MeshQuality, MeshSample};
use tracing::debug;

use crate::traits::{HostUi, MeshHost, SketchHost, UnitConverter};
use crate::types::*;

/// Centimeters per unit for the symbols the mock understands.
const UNIT_TABLE: [(&str, f64); 5] = [
    ("mm", 0.1),
    ("cm", 1.0),
    ("m", 100.0),
    ("in", 2.54),
    ("ft", 30.48),
];

/// A synthetic planar surface body.
#[derive(Debug, Clone)]
struct MockSurface {
    face_count: usize,
    width: f64,
    height: f64,
}

/// A sketch recorded by the mock, with its lines in creation order.
#[derive(Debug, Clone, PartialEq)]
pub struct MockSketch {
    pub id: SketchRef,
    pub plane: PlaneRef,
    pub lines: Vec<([f64; 3], [f64; 3])>,
}

/// Deterministic test double for the CAD host.
pub struct MockHost {
    next_id: u64,
    display_unit: String,
    active_design: bool,
    xy_plane: PlaneRef,
    planes: Vec<PlaneRef>,
    surfaces: HashMap<u64, MockSurface>,
    sketches: Vec<MockSketch>,
    mesh_bodies: Vec<(MeshBodyRef, MeshSample)>,
    messages: Vec<(String, String)>,
    tessellation_fault: Option<String>,
    canned_mesh: Option<MeshSample>,
    sketch_limit: Option<usize>,
}

impl MockHost {
    /// A host with an active design, millimeter display units and an XY plane.
    pub fn new() -> Self {
        let mut host = Self {
            next_id: 1,
            display_unit: "mm".to_string(),
            active_design: true,
            xy_plane: PlaneRef(0),
            planes: Vec::new(),
            surfaces: HashMap::new(),
            sketches: Vec::new(),
            mesh_bodies: Vec::new(),
            messages: Vec::new(),
            tessellation_fault: None,
            canned_mesh: None,
            sketch_limit: None,
        };
        let plane = PlaneRef(host.alloc_id());
        host.xy_plane = plane;
        host.planes.push(plane);
        host
    }

    /// Same as [`MockHost::new`] with a different display unit.
    pub fn with_display_unit(unit: &str) -> Self {
        let mut host = Self::new();
        host.display_unit = unit.to_string();
        host
    }

    fn alloc_id(&mut self) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// Register a flat rectangular surface body (dimensions in centimeters).
    pub fn add_surface(&mut self, face_count: usize, width: f64, height: f64) -> SurfaceRef {
        let id = self.alloc_id();
        self.surfaces.insert(
            id,
            MockSurface {
                face_count,
                width,
                height,
            },
        );
        SurfaceRef(id)
    }

    pub fn set_display_unit(&mut self, unit: &str) {
        self.display_unit = unit.to_string();
    }

    pub fn set_active_design(&mut self, active: bool) {
        self.active_design = active;
    }

    /// Make every subsequent tessellation fail with `reason`.
    pub fn fail_tessellation(&mut self, reason: &str) {
        self.tessellation_fault = Some(reason.to_string());
    }

    /// Return `mesh` from every subsequent tessellation instead of a grid.
    pub fn tessellate_as(&mut self, mesh: MeshSample) {
        self.canned_mesh = Some(mesh);
    }

    /// Allow `count` more sketches, then fail every `add_sketch` call.
    pub fn fail_sketches_after(&mut self, count: usize) {
        self.sketch_limit = Some(self.sketches.len() + count);
    }

    pub fn sketches(&self) -> &[MockSketch] {
        &self.sketches
    }

    /// Total number of lines across all recorded sketches.
    pub fn line_count(&self) -> usize {
        self.sketches.iter().map(|s| s.lines.len()).sum()
    }

    pub fn mesh_bodies(&self) -> &[(MeshBodyRef, MeshSample)] {
        &self.mesh_bodies
    }

    /// Messages shown through `message_box`, as (title, text).
    pub fn messages(&self) -> &[(String, String)] {
        &self.messages
    }

    fn cm_per_unit(unit: &str) -> Option<f64> {
        UNIT_TABLE
            .iter()
            .find(|(symbol, _)| *symbol == unit)
            .map(|(_, factor)| *factor)
    }

    fn surface(&self, surface: SurfaceRef) -> Result<&MockSurface, HostError> {
        self.surfaces
            .get(&surface.0)
            .ok_or(HostError::EntityNotFound {
                kind: "surface",
                id: surface.0,
            })
    }

    /// Grid divisions per side for a quality level.
    fn divisions(quality: MeshQuality) -> usize {
        match quality {
            MeshQuality::Low => 1,
            MeshQuality::Normal => 2,
            MeshQuality::High => 4,
            MeshQuality::VeryHigh => 8,
        }
    }
}

impl Default for MockHost {
    fn default() -> Self {
        Self::new()
    }
}

impl UnitConverter for MockHost {
    fn display_unit(&self) -> String {
        self.display_unit.clone()
    }

    fn convert(&self, value: f64, from: &str, to: &str) -> Result<f64, HostError> {
        let unknown = |symbol: &str| HostError::UnitConversion {
            from: from.to_string(),
            to: to.to_string(),
            reason: format!("unknown unit '{}'", symbol),
        };
        let from_factor = Self::cm_per_unit(from).ok_or_else(|| unknown(from))?;
        let to_factor = Self::cm_per_unit(to).ok_or_else(|| unknown(to))?;
        Ok(value * from_factor / to_factor)
    }
}

impl MeshHost for MockHost {
    fn face_count(&self, surface: SurfaceRef) -> Result<usize, HostError> {
        Ok(self.surface(surface)?.face_count)
    }

    fn tessellate(
        &mut self,
        surface: SurfaceRef,
        quality: MeshQuality,
    ) -> Result<MeshSample, HostError> {
        if let Some(reason) = &self.tessellation_fault {
            return Err(HostError::TessellationFailed {
                reason: reason.clone(),
            });
        }
        let surf = self.surface(surface)?;
        if let Some(mesh) = &self.canned_mesh {
            return Ok(mesh.clone());
        }
        let n = Self::divisions(quality);
        let stride = n + 1;

        let mut coordinates = Vec::with_capacity(stride * stride * 3);
        let mut normals = Vec::with_capacity(stride * stride * 3);
        for row in 0..stride {
            for col in 0..stride {
                let x = surf.width * col as f64 / n as f64;
                let y = surf.height * row as f64 / n as f64;
                coordinates.extend_from_slice(&[x, y, 0.0]);
                normals.extend_from_slice(&[0.0, 0.0, 1.0]);
            }
        }

        // Two triangles per grid cell, counter-clockwise seen from +Z
        let mut indices = Vec::with_capacity(n * n * 6);
        for row in 0..n {
            for col in 0..n {
                let a = (row * stride + col) as u32;
                let b = a + 1;
                let c = a + stride as u32;
                let d = c + 1;
                indices.extend_from_slice(&[a, b, d, a, d, c]);
            }
        }

        debug!(surface = surface.0, %quality, vertices = stride * stride, "mock tessellation");
        Ok(MeshSample {
            coordinates,
            indices,
            normals,
        })
    }

    fn add_mesh_body(&mut self, mesh: &MeshSample) -> Result<MeshBodyRef, HostError> {
        if mesh.indices.is_empty() {
            return Err(HostError::MeshBodyFailed {
                reason: "mesh has no triangles".to_string(),
            });
        }
        let body = MeshBodyRef(self.alloc_id());
        self.mesh_bodies.push((body, mesh.clone()));
        Ok(body)
    }
}

impl SketchHost for MockHost {
    fn xy_construction_plane(&self) -> PlaneRef {
        self.xy_plane
    }

    fn add_sketch(&mut self, plane: PlaneRef) -> Result<SketchRef, HostError> {
        if !self.planes.contains(&plane) {
            return Err(HostError::EntityNotFound {
                kind: "plane",
                id: plane.0,
            });
        }
        if let Some(limit) = self.sketch_limit {
            if self.sketches.len() >= limit {
                return Err(HostError::SketchFailed {
                    reason: format!("sketch limit of {} reached", limit),
                });
            }
        }
        let id = SketchRef(self.alloc_id());
        self.sketches.push(MockSketch {
            id,
            plane,
            lines: Vec::new(),
        });
        Ok(id)
    }

    fn add_line(
        &mut self,
        sketch: SketchRef,
        start: [f64; 3],
        end: [f64; 3],
    ) -> Result<(), HostError> {
        let target = self
            .sketches
            .iter_mut()
            .find(|s| s.id == sketch)
            .ok_or(HostError::EntityNotFound {
                kind: "sketch",
                id: sketch.0,
            })?;
        target.lines.push((start, end));
        Ok(())
    }
}

impl HostUi for MockHost {
    fn has_active_design(&self) -> bool {
        self.active_design
    }

    fn message_box(&mut self, text: &str, title: &str) {
        self.messages.push((title.to_string(), text.to_string()));
    }
}
