use serde::{Deserialize, Serialize};

/// Symbol the host uses for its internal base length unit.
pub const BASE_UNIT: &str = "cm";

/// Which unit convention a point's coordinates are expressed in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum UnitTag {
    /// The user's active display length unit (what CSV files carry).
    FileUnits,
    /// The host's internal base unit.
    Centimeters,
}

/// Coordinate axis, used for error reporting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Axis {
    X,
    Y,
    Z,
}

impl std::fmt::Display for Axis {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Axis::X => write!(f, "x"),
            Axis::Y => write!(f, "y"),
            Axis::Z => write!(f, "z"),
        }
    }
}

/// Errors from point construction.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum PointError {
    #[error("invalid {axis} coordinate: {value}")]
    InvalidCoordinate { axis: Axis, value: f64 },
}

/// A single 3D point tagged with the unit its coordinates are in.
///
/// Fields are private so a record can only be built through [`PointRecord::new`],
/// which guarantees every coordinate is finite. Deserialization goes through the same check.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawPoint")]
pub struct PointRecord {
    x: f64,
    y: f64,
    z: f64,
    unit: UnitTag,
}

impl PointRecord {
    pub fn new(x: f64, y: f64, z: f64, unit: UnitTag) -> Result<Self, PointError> {
        for (axis, value) in [(Axis::X, x), (Axis::Y, y), (Axis::Z, z)] {
            if !value.is_finite() {
                return Err(PointError::InvalidCoordinate { axis, value });
            }
        }
        Ok(Self { x, y, z, unit })
    }

    /// Build a record from an `[x, y, z]` array.
    pub fn from_coords(coords: [f64; 3], unit: UnitTag) -> Result<Self, PointError> {
        Self::new(coords[0], coords[1], coords[2], unit)
    }

    pub fn x(&self) -> f64 {
        self.x
    }

    pub fn y(&self) -> f64 {
        self.y
    }

    pub fn z(&self) -> f64 {
        self.z
    }

    pub fn unit(&self) -> UnitTag {
        self.unit
    }

    pub fn coords(&self) -> [f64; 3] {
        [self.x, self.y, self.z]
    }
}

#[derive(Deserialize)]
struct RawPoint {
    x: f64,
    y: f64,
    z: f64,
    unit: UnitTag,
}

impl TryFrom<RawPoint> for PointRecord {
    type Error = PointError;

    fn try_from(raw: RawPoint) -> Result<Self, Self::Error> {
        PointRecord::new(raw.x, raw.y, raw.z, raw.unit)
    }
}
