use std::fmt;

use thiserror::Error;

use crate::view::UnsupportedKind;

/// Host-contract violations. These indicate malformed view geometry rather
/// than a bad pick, so they are returned as `Err` instead of a `CropResult`.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum CropError {
    #[error("Plane normal has zero length")]
    ZeroNormal,

    #[error("Crop box transform is singular and cannot be inverted")]
    SingularTransform,
}

/// Why a rectangular loop is not a usable crop boundary.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum RectangleDefect {
    #[error("Edge {index} is shorter than the minimum length ({length_mm:.3} mm)")]
    DegenerateEdge { index: usize, length_mm: f64 },

    #[error("Loop is open at corner {corner} (gap {gap_mm:.3} mm)")]
    OpenLoop { corner: usize, gap_mm: f64 },

    #[error("Edge {index} leaves the view plane (angle to normal {angle:.6} rad)")]
    OutOfPlane { index: usize, angle: f64 },

    #[error("Corner {corner} is not a right angle ({angle:.6} rad)")]
    NotPerpendicular { corner: usize, angle: f64 },
}

/// User-correctable reason a pick produced no crop.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum Rejection {
    #[error("Picked corners are only {distance_mm:.3} mm apart")]
    DegeneratePick { distance_mm: f64 },

    #[error("Could not obtain a valid rectangular region: {0}")]
    InvalidRectangle(RectangleDefect),

    #[error("Cropping is not available in {0} views")]
    UnsupportedView(UnsupportedKind),
}

impl Rejection {
    /// The host aborts without telling the user.
    pub fn is_silent(&self) -> bool {
        matches!(self, Rejection::DegeneratePick { .. })
    }
}

impl fmt::Display for UnsupportedKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            UnsupportedKind::Template => "template",
            UnsupportedKind::Legend => "legend",
            UnsupportedKind::Schedule => "schedule",
            UnsupportedKind::Drafting => "drafting",
        };
        f.write_str(name)
    }
}
