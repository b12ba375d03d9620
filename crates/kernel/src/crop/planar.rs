use tracing::{debug, instrument};

use super::{CropActivation, CropResult, CropTarget};
use crate::error::{CropError, Rejection};
use crate::geometry::{Plane, UnitVec3};
use crate::rectangle::build_rect;
use crate::rectangularity::check_rectangular;
use crate::view::{PickRegion, PlanarView};
use crate::Tolerance;

/// Turn the pick into a rectangular crop shape for a planar view.
#[instrument(level = "debug", skip(view, tol))]
pub fn crop_planar(
    view: &PlanarView,
    pick: &PickRegion,
    target: CropTarget,
    tol: &Tolerance,
) -> Result<CropResult, CropError> {
    let up = UnitVec3::new(view.up).ok_or(CropError::ZeroNormal)?;
    let view_plane = Plane::from_normal_and_origin(view.view_direction, view.origin)
        .ok_or(CropError::ZeroNormal)?;

    let rect = match build_rect(pick.min, pick.max, up, tol) {
        Ok(rect) => rect,
        Err(defect) => return Ok(CropResult::Rejected(Rejection::InvalidRectangle(defect))),
    };

    if let Err(defect) = check_rectangular(&rect, &view_plane, tol) {
        debug!(%defect, "picked loop is not a rectangle in the view plane");
        return Ok(CropResult::Rejected(Rejection::InvalidRectangle(defect)));
    }

    Ok(CropResult::CurveLoopCrop {
        target,
        rect,
        activation: CropActivation::for_view(view.crop_active),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::RectangleDefect;
    use crate::geometry::{Point3d, Vec3};

    fn section_view(crop_active: bool) -> PlanarView {
        // Section looking along -Y with Z up.
        PlanarView {
            up: Vec3::Z,
            view_direction: -Vec3::Y,
            origin: Point3d::new(0.0, 4.0, 0.0),
            crop_active,
        }
    }

    #[test]
    fn test_section_crop() {
        let tol = Tolerance::feet();
        let pick = PickRegion::new(Point3d::new(-3.0, 4.0, 0.0), Point3d::new(5.0, 4.0, 12.0));
        let result = crop_planar(&section_view(true), &pick, CropTarget::ActiveView, &tol).unwrap();
        match result {
            CropResult::CurveLoopCrop { target, rect, activation } => {
                assert_eq!(target, CropTarget::ActiveView);
                assert_eq!(activation, CropActivation::default());
                assert_eq!(
                    rect.corners(),
                    [
                        Point3d::new(-3.0, 4.0, 0.0),
                        Point3d::new(-3.0, 4.0, 12.0),
                        Point3d::new(5.0, 4.0, 12.0),
                        Point3d::new(5.0, 4.0, 0.0),
                    ]
                );
            }
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn test_degenerate_edge_rejected() {
        let tol = Tolerance::feet();
        let pick = PickRegion::new(Point3d::new(-3.0, 4.0, 2.0), Point3d::new(5.0, 4.0, 2.0));
        let result =
            crop_planar(&section_view(false), &pick, CropTarget::ActiveView, &tol).unwrap();
        assert!(matches!(
            result,
            CropResult::Rejected(Rejection::InvalidRectangle(RectangleDefect::DegenerateEdge {
                index: 0,
                ..
            }))
        ));
    }

    #[test]
    fn test_pick_across_depth_rejected() {
        let tol = Tolerance::feet();
        let pick = PickRegion::new(Point3d::new(-3.0, 4.0, 0.0), Point3d::new(5.0, 9.0, 12.0));
        let result =
            crop_planar(&section_view(false), &pick, CropTarget::ActiveView, &tol).unwrap();
        assert!(matches!(
            result,
            CropResult::Rejected(Rejection::InvalidRectangle(RectangleDefect::OutOfPlane { .. }))
        ));
    }

    #[test]
    fn test_zero_up_is_error() {
        let view = PlanarView {
            up: Vec3::ZERO,
            ..section_view(true)
        };
        let pick = PickRegion::new(Point3d::ORIGIN, Point3d::new(1.0, 0.0, 1.0));
        assert_eq!(
            crop_planar(&view, &pick, CropTarget::ActiveView, &Tolerance::feet()),
            Err(CropError::ZeroNormal)
        );
    }
}
