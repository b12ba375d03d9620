//! Crop application: picks a policy from the view class and returns the
//! geometry the host should commit.

mod planar;
mod sheet;
mod three_d;

pub use planar::crop_planar;
pub use sheet::crop_sheet;
pub use three_d::crop_3d;

use tracing::{debug, info, instrument};

use crate::error::{CropError, Rejection};
use crate::rectangle::RectLoop;
use crate::view::{ActiveView, CropBox, PickRegion, ViewId};
use crate::Tolerance;

/// Which view a curve-loop crop applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CropTarget {
    ActiveView,
    /// A view placed on the active sheet.
    SubView(ViewId),
}

/// Crop-region visibility changes to make alongside the new boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CropActivation {
    /// Switch the crop region on.
    pub enable_crop: bool,
    /// Hide the crop boundary in the view.
    pub hide_boundary: bool,
}

impl CropActivation {
    /// A view whose crop is off gets it switched on with the boundary hidden;
    /// an already cropped view is left as the user configured it.
    pub fn for_view(crop_active: bool) -> Self {
        Self {
            enable_crop: !crop_active,
            hide_boundary: !crop_active,
        }
    }
}

/// Outcome of one crop invocation.
#[derive(Debug, Clone, PartialEq)]
pub enum CropResult {
    /// New crop box for a 3D view; the transform is unchanged.
    BoundingBoxCrop {
        crop_box: CropBox,
        activation: CropActivation,
    },
    /// New rectangular crop shape for a planar view.
    CurveLoopCrop {
        target: CropTarget,
        rect: RectLoop,
        activation: CropActivation,
    },
    /// Nothing on the sheet lies under the pick.
    NoTarget,
    Rejected(Rejection),
}

impl CropResult {
    fn kind(&self) -> &'static str {
        match self {
            CropResult::BoundingBoxCrop { .. } => "bounding_box",
            CropResult::CurveLoopCrop { .. } => "curve_loop",
            CropResult::NoTarget => "no_target",
            CropResult::Rejected(_) => "rejected",
        }
    }
}

/// Crop `view` to the picked rectangle.
///
/// Unsupported view kinds and picks shorter than the minimum length are
/// rejected before any geometry is built.
#[instrument(skip(view, tol), fields(class = ?view.class()))]
pub fn crop_view(
    view: &ActiveView,
    pick: &PickRegion,
    tol: &Tolerance,
) -> Result<CropResult, CropError> {
    let result = match view {
        ActiveView::Unsupported(kind) => {
            debug!(?kind, "view kind does not support cropping");
            CropResult::Rejected(Rejection::UnsupportedView(*kind))
        }
        ActiveView::ThreeD(view3d) => unless_degenerate(pick, tol, || crop_3d(view3d, pick))?,
        ActiveView::Sheet(viewports) => {
            unless_degenerate(pick, tol, || crop_sheet(viewports, pick, tol))?
        }
        ActiveView::Planar(planar) => {
            unless_degenerate(pick, tol, || crop_planar(planar, pick, CropTarget::ActiveView, tol))?
        }
    };

    info!(result = result.kind(), "crop decided");
    Ok(result)
}

/// Run `policy` only when the picked corners are at least the minimum length
/// apart.
fn unless_degenerate(
    pick: &PickRegion,
    tol: &Tolerance,
    policy: impl FnOnce() -> Result<CropResult, CropError>,
) -> Result<CropResult, CropError> {
    let diagonal = pick.diagonal();
    if diagonal.is_nan() || diagonal < tol.min_length() {
        let distance_mm = tol.units.to_millimeters(diagonal);
        debug!(distance_mm, "pick too small");
        return Ok(CropResult::Rejected(Rejection::DegeneratePick { distance_mm }));
    }
    policy()
}
