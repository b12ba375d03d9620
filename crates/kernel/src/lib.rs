//! Geometry kernel for cropping a drawing view to a picked rectangle.
//!
//! The host snapshots its active view into an [`ActiveView`], passes the two
//! picked corners as a [`PickRegion`] and commits the returned
//! [`CropResult`] in its own transaction. Nothing here touches host state.

pub mod crop;
pub mod error;
pub mod geometry;
pub mod overlap;
pub mod rectangle;
pub mod rectangularity;
pub mod units;
pub mod view;

pub use crop::{crop_view, CropActivation, CropResult, CropTarget};
pub use error::{CropError, RectangleDefect, Rejection};
pub use overlap::{best_match, to_axis_rect, AxisRect, Match, Outline};
pub use rectangle::{build_rect, RectLoop};
pub use rectangularity::{check_rectangular, is_rectangular};
pub use units::UnitConverter;
pub use view::{
    ActiveView, CropBox, PickRegion, PlanarView, UnsupportedKind, View3d, ViewClass, ViewId,
    Viewport,
};

use serde::{Deserialize, Serialize};

/// Tolerances for crop geometry, expressed against the document's unit.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tolerance {
    /// Picks and edges shorter than this are degenerate (millimeters).
    pub min_length_mm: f64,
    /// Endpoints closer than this are the same corner (millimeters).
    pub coincidence_mm: f64,
    /// Angles smaller than this (radians) are considered zero.
    pub angular: f64,
    /// Document length unit.
    pub units: UnitConverter,
}

impl Default for Tolerance {
    fn default() -> Self {
        Self {
            min_length_mm: 1.0,
            coincidence_mm: 1e-3,
            angular: 1e-6,
            units: UnitConverter::feet(),
        }
    }
}

impl Tolerance {
    /// Document stored in decimal feet.
    pub fn feet() -> Self {
        Self::default()
    }

    pub fn millimeters() -> Self {
        Self {
            units: UnitConverter::millimeters(),
            ..Self::default()
        }
    }

    pub fn meters() -> Self {
        Self {
            units: UnitConverter::meters(),
            ..Self::default()
        }
    }

    /// Minimum pick/edge length in document units.
    pub fn min_length(&self) -> f64 {
        self.units.to_internal_units(self.min_length_mm)
    }

    /// Corner coincidence distance in document units.
    pub fn coincidence(&self) -> f64 {
        self.units.to_internal_units(self.coincidence_mm)
    }
}
