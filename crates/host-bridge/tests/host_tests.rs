use approx::assert_relative_eq;
use proptest::prelude::*;

use host_bridge::{
    HostError, HostUi, MeshHost, MockHost, PlaneRef, SketchHost, SurfaceRef, UnitConverter,
};
use point_types::{MeshQuality, PointRecord, UnitTag};

const UNITS: [&str; 5] = ["mm", "cm", "m", "in", "ft"];

// ── Unit conversion ──────────────────────────────────────────────────────

#[test]
fn converts_between_known_units() {
    let host = MockHost::new();
    assert_relative_eq!(host.convert(1.0, "cm", "mm").unwrap(), 10.0);
    assert_relative_eq!(host.convert(1.0, "in", "cm").unwrap(), 2.54);
    assert_relative_eq!(host.convert(250.0, "cm", "m").unwrap(), 2.5);
}

#[test]
fn unknown_unit_is_a_conversion_error() {
    let host = MockHost::new();
    let err = host.convert(1.0, "cm", "furlong").unwrap_err();
    assert!(err.is_unit_conversion());
    assert!(err.to_string().contains("furlong"), "got: {}", err);
}

#[test]
fn convert_point_resolves_file_units_to_display_unit() {
    let host = MockHost::with_display_unit("mm");
    let p = PointRecord::new(10.0, 20.0, -5.0, UnitTag::FileUnits).unwrap();
    let cm = host.convert_point(&p, UnitTag::Centimeters).unwrap();
    assert_eq!(cm.unit(), UnitTag::Centimeters);
    assert_relative_eq!(cm.x(), 1.0);
    assert_relative_eq!(cm.y(), 2.0);
    assert_relative_eq!(cm.z(), -0.5);
}

#[test]
fn convert_point_to_same_tag_is_identity() {
    // Unknown display unit would fail if the host were called
    let host = MockHost::with_display_unit("parsec");
    let p = PointRecord::new(1.0, 2.0, 3.0, UnitTag::FileUnits).unwrap();
    assert_eq!(host.convert_point(&p, UnitTag::FileUnits).unwrap(), p);
    assert!(host.convert_point(&p, UnitTag::Centimeters).is_err());
}

proptest! {
    #[test]
    fn conversion_round_trips(
        value in -1.0e6f64..1.0e6,
        a in 0usize..UNITS.len(),
        b in 0usize..UNITS.len(),
    ) {
        let host = MockHost::new();
        let there = host.convert(value, UNITS[a], UNITS[b]).unwrap();
        let back = host.convert(there, UNITS[b], UNITS[a]).unwrap();
        prop_assert!((back - value).abs() <= 1e-9 * value.abs().max(1.0),
            "{} -> {} -> {}", value, there, back);
    }
}

// ── Tessellation ─────────────────────────────────────────────────────────

#[test]
fn tessellation_density_grows_with_quality() {
    let mut host = MockHost::new();
    let surface = host.add_surface(1, 10.0, 5.0);

    let low = host.tessellate(surface, MeshQuality::Low).unwrap();
    let very_high = host.tessellate(surface, MeshQuality::VeryHigh).unwrap();

    assert_eq!(low.vertex_count(), 4);
    assert_eq!(low.triangle_count(), 2);
    assert_eq!(very_high.vertex_count(), 81);
    assert_eq!(very_high.triangle_count(), 128);
    assert_eq!(very_high.normals.len(), very_high.coordinates.len());
}

#[test]
fn tessellation_indices_stay_in_range() {
    let mut host = MockHost::new();
    let surface = host.add_surface(2, 3.0, 3.0);
    for quality in MeshQuality::ALL {
        let mesh = host.tessellate(surface, quality).unwrap();
        let n = mesh.vertex_count() as u32;
        assert!(mesh.indices.iter().all(|&i| i < n), "{:?}", quality);
    }
}

#[test]
fn tessellating_unknown_surface_fails() {
    let mut host = MockHost::new();
    let err = host.tessellate(SurfaceRef(999), MeshQuality::Low).unwrap_err();
    assert_eq!(
        err,
        HostError::EntityNotFound {
            kind: "surface",
            id: 999
        }
    );
}

#[test]
fn injected_tessellation_fault_is_reported() {
    let mut host = MockHost::new();
    let surface = host.add_surface(1, 1.0, 1.0);
    host.fail_tessellation("kernel busy");
    let err = host.tessellate(surface, MeshQuality::Normal).unwrap_err();
    assert!(matches!(err, HostError::TessellationFailed { .. }));
}

#[test]
fn mesh_bodies_are_recorded() {
    let mut host = MockHost::new();
    let surface = host.add_surface(1, 1.0, 1.0);
    let mesh = host.tessellate(surface, MeshQuality::Low).unwrap();
    let body = host.add_mesh_body(&mesh).unwrap();
    assert_eq!(host.mesh_bodies().len(), 1);
    assert_eq!(host.mesh_bodies()[0].0, body);
}

// ── Sketches ─────────────────────────────────────────────────────────────

#[test]
fn sketches_record_lines_in_order() {
    let mut host = MockHost::new();
    let plane = host.xy_construction_plane();
    let sketch = host.add_sketch(plane).unwrap();
    host.add_line(sketch, [0.0; 3], [1.0, 0.0, 0.0]).unwrap();
    host.add_line(sketch, [1.0, 0.0, 0.0], [2.0, 0.0, 0.0]).unwrap();

    assert_eq!(host.sketches().len(), 1);
    assert_eq!(host.sketches()[0].plane, plane);
    assert_eq!(host.line_count(), 2);
    assert_eq!(host.sketches()[0].lines[1].1, [2.0, 0.0, 0.0]);
}

#[test]
fn sketch_on_unknown_plane_fails() {
    let mut host = MockHost::new();
    assert!(host.add_sketch(PlaneRef(4242)).is_err());
}

#[test]
fn sketch_limit_fails_after_count() {
    let mut host = MockHost::new();
    let plane = host.xy_construction_plane();
    host.fail_sketches_after(1);
    assert!(host.add_sketch(plane).is_ok());
    let err = host.add_sketch(plane).unwrap_err();
    assert!(matches!(err, HostError::SketchFailed { .. }));
    assert_eq!(host.sketches().len(), 1);
}

// ── UI ───────────────────────────────────────────────────────────────────

#[test]
fn message_boxes_are_captured() {
    let mut host = MockHost::new();
    assert!(host.has_active_design());
    host.message_box("hello", "Title");
    assert_eq!(host.messages(), &[("Title".to_string(), "hello".to_string())]);
}

#[test]
fn only_conversion_errors_are_unit_conversion() {
    let errors = [
        HostError::UnitConversion {
            from: "mm".to_string(),
            to: "parsec".to_string(),
            reason: "unknown unit".to_string(),
        },
        HostError::TessellationFailed {
            reason: "x".to_string(),
        },
        HostError::SketchFailed {
            reason: "x".to_string(),
        },
        HostError::MeshBodyFailed {
            reason: "x".to_string(),
        },
        HostError::EntityNotFound {
            kind: "surface",
            id: 9,
        },
    ];
    for err in &errors {
        // Exhaustive: a new variant must be classified here.
        let expected = match err {
            HostError::UnitConversion { .. } => true,
            HostError::TessellationFailed { .. }
            | HostError::SketchFailed { .. }
            | HostError::MeshBodyFailed { .. }
            | HostError::EntityNotFound { .. } => false,
        };
        assert_eq!(err.is_unit_conversion(), expected, "{}", err);
    }
}
