use tracing::{debug, instrument};

use super::{CropActivation, CropResult};
use crate::error::CropError;
use crate::geometry::Point3d;
use crate::view::{CropBox, PickRegion, View3d};

/// Resize the 3D crop box to the pick in the box's own frame.
///
/// Only X and Y follow the pick; the box keeps its depth range and transform.
#[instrument(level = "debug", skip(view))]
pub fn crop_3d(view: &View3d, pick: &PickRegion) -> Result<CropResult, CropError> {
    let current = &view.crop_box;
    let to_local = current
        .transform
        .inverse()
        .ok_or(CropError::SingularTransform)?;

    let local = pick.transformed(&to_local);
    let lo = local.min.component_min(&local.max);
    let hi = local.min.component_max(&local.max);

    let crop_box = CropBox {
        transform: current.transform,
        min: Point3d::new(lo.x, lo.y, current.min.z),
        max: Point3d::new(hi.x, hi.y, current.max.z),
    };
    debug!(min = ?crop_box.min, max = ?crop_box.max, "new crop box");

    Ok(CropResult::BoundingBoxCrop {
        crop_box,
        activation: CropActivation::for_view(view.crop_active),
    })
}
