use tracing::{info, instrument, warn};

use super::{crop_planar, CropResult, CropTarget};
use crate::error::CropError;
use crate::geometry::Plane;
use crate::overlap::{best_match, Outline};
use crate::view::{PickRegion, Viewport};
use crate::Tolerance;

/// Crop the viewport on a sheet that the pick covers most.
///
/// Viewport outlines and the pick are compared on the global top-down plane.
/// When the viewport carries a placement transform the pick is mapped into
/// the placed view before cropping; otherwise sheet coordinates are used
/// as-is.
#[instrument(level = "debug", skip_all, fields(viewports = viewports.len()))]
pub fn crop_sheet(
    viewports: &[Viewport],
    pick: &PickRegion,
    tol: &Tolerance,
) -> Result<CropResult, CropError> {
    let candidates: Vec<(usize, Outline)> = viewports
        .iter()
        .enumerate()
        .map(|(i, vp)| (i, Outline::new(vp.outline_min, vp.outline_max)))
        .collect();

    let pick_outline = Outline::from(*pick);
    let Some(found) = best_match(&candidates, &pick_outline, &Plane::xy(), &tol.units) else {
        info!("no viewport under pick");
        return Ok(CropResult::NoTarget);
    };

    let viewport = &viewports[found.id];
    info!(view_id = viewport.view_id.0, area_mm2 = found.area(), "viewport selected");

    let local_pick = match &viewport.placement {
        Some(placement) => pick.transformed(placement),
        None => {
            warn!(
                view_id = viewport.view_id.0,
                "viewport has no placement transform, cropping with sheet coordinates"
            );
            *pick
        }
    };

    crop_planar(&viewport.view, &local_pick, CropTarget::SubView(viewport.view_id), tol)
}
