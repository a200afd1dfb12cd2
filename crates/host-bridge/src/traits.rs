use point_types::{MeshQuality, MeshSample, PointRecord, UnitTag, BASE_UNIT};

use crate::types::*;

/// Length-unit conversion, delegated to the host's units manager.
pub trait UnitConverter {
    /// Symbol of the user's active display length unit (e.g. "mm").
    fn display_unit(&self) -> String;

    /// Convert a single value between two unit symbols.
    fn convert(&self, value: f64, from: &str, to: &str) -> Result<f64, HostError>;

    /// Resolve a unit tag to the symbol the host understands.
    fn unit_symbol(&self, tag: UnitTag) -> String {
        match tag {
            UnitTag::FileUnits => self.display_unit(),
            UnitTag::Centimeters => BASE_UNIT.to_string(),
        }
    }

    /// Convert every coordinate of a point to the target unit.
    /// A point already in the target unit is returned as-is without calling the host.
    fn convert_point(&self, point: &PointRecord, to: UnitTag) -> Result<PointRecord, HostError> {
        if point.unit() == to {
            return Ok(*point);
        }
        let from_sym = self.unit_symbol(point.unit());
        let to_sym = self.unit_symbol(to);

        let [x, y, z] = point.coords();
        let x = self.convert(x, &from_sym, &to_sym)?;
        let y = self.convert(y, &from_sym, &to_sym)?;
        let z = self.convert(z, &from_sym, &to_sym)?;

        PointRecord::new(x, y, z, to).map_err(|e| HostError::UnitConversion {
            from: from_sym,
            to: to_sym,
            reason: e.to_string(),
        })
    }
}

/// Surface tessellation and mesh body creation.
pub trait MeshHost {
    /// Number of B-Rep faces on a surface body.
    fn face_count(&self, surface: SurfaceRef) -> Result<usize, HostError>;

    /// Triangulate a surface body at the given quality.
    fn tessellate(
        &mut self,
        surface: SurfaceRef,
        quality: MeshQuality,
    ) -> Result<MeshSample, HostError>;

    /// Add a mesh body built from triangle data to the active design.
    fn add_mesh_body(&mut self, mesh: &MeshSample) -> Result<MeshBodyRef, HostError>;
}

/// Sketch and sketch-curve creation. Coordinates are in the host base unit.
pub trait SketchHost {
    /// The root component's XY construction plane.
    fn xy_construction_plane(&self) -> PlaneRef;

    /// Create a new, empty sketch on a planar construction surface.
    fn add_sketch(&mut self, plane: PlaneRef) -> Result<SketchRef, HostError>;

    /// Add a line segment between two points to a sketch.
    fn add_line(
        &mut self,
        sketch: SketchRef,
        start: [f64; 3],
        end: [f64; 3],
    ) -> Result<(), HostError>;
}

/// The small slice of host UI the commands talk to directly.
pub trait HostUi {
    /// Whether a design document is open and active.
    fn has_active_design(&self) -> bool;

    /// Show a modal message to the user.
    fn message_box(&mut self, text: &str, title: &str);
}

/// Everything a command run needs from the host, on one object.
pub trait HostBundle: UnitConverter + MeshHost + SketchHost + HostUi {}

impl<T: UnitConverter + MeshHost + SketchHost + HostUi> HostBundle for T {}
