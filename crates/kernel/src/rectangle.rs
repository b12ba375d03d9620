//! Rectangle builder: two diagonal picks to a closed four-edge loop.

use serde::Serialize;
use tracing::{debug, instrument};

use crate::error::RectangleDefect;
use crate::geometry::{Plane, Point3d, Segment, UnitVec3};
use crate::Tolerance;

/// Four segments forming a closed path, in order.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RectLoop {
    segments: [Segment; 4],
}

impl RectLoop {
    /// Wrap four already-built segments. Closure and rectangularity are not
    /// checked here; see [`crate::rectangularity::check_rectangular`].
    pub fn from_segments(segments: [Segment; 4]) -> Self {
        Self { segments }
    }

    pub fn segments(&self) -> &[Segment; 4] {
        &self.segments
    }

    /// Start point of each segment.
    pub fn corners(&self) -> [Point3d; 4] {
        self.segments.map(|s| s.start)
    }
}

/// Derive the rectangle spanned by diagonal corners `pt1` and `pt3`.
///
/// The two missing corners come from projecting each pick onto the plane
/// through the other pick with normal `up`, so the result follows the view's
/// orientation rather than the global axes.
#[instrument(level = "debug", skip(tol))]
pub fn build_rect(
    pt1: Point3d,
    pt3: Point3d,
    up: UnitVec3,
    tol: &Tolerance,
) -> Result<RectLoop, RectangleDefect> {
    let pt2 = Plane::new(pt3, up).project_point(&pt1);
    let pt4 = Plane::new(pt1, up).project_point(&pt3);
    let corners = [pt1, pt2, pt3, pt4];
    let min_length = tol.min_length();

    let edge = |index: usize| {
        let (start, end) = (corners[index], corners[(index + 1) % 4]);
        Segment::try_new(start, end, min_length).ok_or_else(|| {
            let length_mm = tol.units.to_millimeters(start.distance_to(&end));
            debug!(index, length_mm, "degenerate rectangle edge");
            RectangleDefect::DegenerateEdge { index, length_mm }
        })
    };

    Ok(RectLoop {
        segments: [edge(0)?, edge(1)?, edge(2)?, edge(3)?],
    })
}
