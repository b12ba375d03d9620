//! Rectangularity validator for four-edge crop loops.

use tracing::debug;

use crate::error::RectangleDefect;
use crate::geometry::Plane;
use crate::rectangle::RectLoop;
use crate::Tolerance;

/// Check that `rect` is a closed rectangle lying parallel to `view_plane`.
///
/// Checks run in order: edge length, closure at every corner, every edge
/// perpendicular to the plane normal, every corner a right angle. The first
/// failure is returned.
pub fn check_rectangular(
    rect: &RectLoop,
    view_plane: &Plane,
    tol: &Tolerance,
) -> Result<(), RectangleDefect> {
    let segments = rect.segments();
    let min_length = tol.min_length();

    for (index, segment) in segments.iter().enumerate() {
        let length = segment.length();
        if length < min_length {
            return Err(RectangleDefect::DegenerateEdge {
                index,
                length_mm: tol.units.to_millimeters(length),
            });
        }
    }

    for (index, segment) in segments.iter().enumerate() {
        let corner = (index + 1) % 4;
        let gap = segment.end.distance_to(&segments[corner].start);
        if gap > tol.coincidence() {
            return Err(RectangleDefect::OpenLoop {
                corner,
                gap_mm: tol.units.to_millimeters(gap),
            });
        }
    }

    for (index, segment) in segments.iter().enumerate() {
        if !segment.direction().is_perpendicular_to(&view_plane.normal, tol.angular) {
            let angle = segment.direction().angle_to(&view_plane.normal);
            debug!(index, angle, "edge leaves view plane");
            return Err(RectangleDefect::OutOfPlane { index, angle });
        }
    }

    for (index, segment) in segments.iter().enumerate() {
        let corner = (index + 1) % 4;
        let next = segments[corner].direction();
        if !segment.direction().is_perpendicular_to(&next, tol.angular) {
            let angle = segment.direction().angle_to(&next);
            debug!(corner, angle, "corner is not square");
            return Err(RectangleDefect::NotPerpendicular { corner, angle });
        }
    }

    Ok(())
}

/// Whether `rect` is a right-angled rectangle when viewed along the normal of
/// `view_plane`.
pub fn is_rectangular(rect: &RectLoop, view_plane: &Plane, tol: &Tolerance) -> bool {
    check_rectangular(rect, view_plane, tol).is_ok()
}
