//! Overlap resolver: picks the sub-view whose outline is most covered by the
//! user's selection.

use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use crate::geometry::{Plane, Point3d};
use crate::units::UnitConverter;
use crate::view::PickRegion;

/// Two opposite corners of an axis-aligned 3D box, not necessarily ordered.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Outline {
    pub min: Point3d,
    pub max: Point3d,
}

impl Outline {
    pub fn new(min: Point3d, max: Point3d) -> Self {
        Self { min, max }
    }
}

impl From<PickRegion> for Outline {
    fn from(pick: PickRegion) -> Self {
        Self::new(pick.min, pick.max)
    }
}

/// Axis-aligned integer rectangle in whole millimeters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AxisRect {
    pub x: i64,
    pub y: i64,
    pub width: i64,
    pub height: i64,
}

impl AxisRect {
    /// Rectangle spanning two corners in either order.
    pub fn from_corners(x0: i64, y0: i64, x1: i64, y1: i64) -> Self {
        let (x, right) = (x0.min(x1), x0.max(x1));
        let (y, top) = (y0.min(y1), y0.max(y1));
        Self {
            x,
            y,
            width: right.saturating_sub(x),
            height: top.saturating_sub(y),
        }
    }

    pub fn right(&self) -> i64 {
        self.x.saturating_add(self.width)
    }

    pub fn top(&self) -> i64 {
        self.y.saturating_add(self.height)
    }

    /// Area in square millimeters, widened so huge outlines cannot overflow.
    pub fn area(&self) -> i128 {
        i128::from(self.width) * i128::from(self.height)
    }

    /// Common part of two rectangles, `None` when they do not overlap with
    /// positive area.
    pub fn intersect(&self, other: &Self) -> Option<Self> {
        let x = self.x.max(other.x);
        let right = self.right().min(other.right());
        let y = self.y.max(other.y);
        let top = self.top().min(other.top());
        if right <= x || top <= y {
            return None;
        }
        Some(Self {
            x,
            y,
            width: right.saturating_sub(x),
            height: top.saturating_sub(y),
        })
    }
}

/// Project `outline` onto `plane` and round its in-plane X/Y extent to whole
/// millimeters.
///
/// Projection can swap which corner is smaller on an axis, so min/max are
/// re-derived after rounding.
pub fn to_axis_rect(outline: &Outline, plane: &Plane, units: &UnitConverter) -> AxisRect {
    let to_mm = |v: f64| units.to_millimeters(v).round_ties_even() as i64;
    let min = plane.project_point(&outline.min);
    let max = plane.project_point(&outline.max);
    AxisRect::from_corners(to_mm(min.x), to_mm(min.y), to_mm(max.x), to_mm(max.y))
}

/// The winning candidate of [`best_match`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Match<I> {
    pub id: I,
    pub overlap: AxisRect,
}

impl<I> Match<I> {
    pub fn area(&self) -> i128 {
        self.overlap.area()
    }
}

/// Candidate whose outline overlaps `pick` by the largest area.
///
/// Candidates without a positive-area overlap are skipped. Ties keep the
/// earliest candidate. `None` means nothing overlaps.
#[instrument(level = "debug", skip_all, fields(candidates = candidates.len()))]
pub fn best_match<I: Copy + fmt::Debug>(
    candidates: &[(I, Outline)],
    pick: &Outline,
    plane: &Plane,
    units: &UnitConverter,
) -> Option<Match<I>> {
    let pick_rect = to_axis_rect(pick, plane, units);
    let mut best: Option<Match<I>> = None;

    for (id, outline) in candidates {
        let rect = to_axis_rect(outline, plane, units);
        let Some(overlap) = rect.intersect(&pick_rect) else {
            debug!(?id, "candidate does not overlap pick");
            continue;
        };
        debug!(?id, area = overlap.area(), "candidate overlaps pick");
        if best.is_none_or(|b| overlap.area() > b.area()) {
            best = Some(Match { id: *id, overlap });
        }
    }

    best
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mm_outline(x0: f64, y0: f64, x1: f64, y1: f64) -> Outline {
        Outline::new(Point3d::new(x0, y0, 0.0), Point3d::new(x1, y1, 0.0))
    }

    fn mm() -> UnitConverter {
        UnitConverter::millimeters()
    }

    #[test]
    fn test_axis_rect_normalizes_flipped_corners() {
        let rect = to_axis_rect(&mm_outline(100.0, 20.0, 10.0, 80.0), &Plane::xy(), &mm());
        assert_eq!(rect, AxisRect::from_corners(10, 20, 100, 80));
    }

    #[test]
    fn test_axis_rect_rounds_feet_to_mm() {
        let outline = Outline::new(Point3d::new(0.0, 0.0, 3.0), Point3d::new(1.0, 0.5, -2.0));
        let rect = to_axis_rect(&outline, &Plane::xy(), &UnitConverter::feet());
        assert_eq!(rect, AxisRect::from_corners(0, 0, 305, 152));
    }

    #[test]
    fn test_axis_rect_rounds_half_to_even() {
        let rect = to_axis_rect(&mm_outline(2.5, 3.5, 10.5, 0.5), &Plane::xy(), &mm());
        assert_eq!(
            rect,
            AxisRect {
                x: 2,
                y: 0,
                width: 8,
                height: 4,
            }
        );
    }

    #[test]
    fn test_extreme_corners_saturate() {
        let rect = AxisRect::from_corners(i64::MIN, 0, i64::MAX, 1);
        assert_eq!(rect.width, i64::MAX);
        assert_eq!(rect.area(), i128::from(i64::MAX));

        let far = to_axis_rect(&mm_outline(-1.0e30, 0.0, 1.0e30, 1.0e30), &Plane::xy(), &mm());
        assert_eq!(far.x, i64::MIN);
        assert_eq!(far.width, i64::MAX);
        assert!(far.intersect(&far).is_some());
    }

    #[test]
    fn test_intersect() {
        let a = AxisRect::from_corners(0, 0, 100, 100);
        let b = AxisRect::from_corners(50, 50, 150, 150);
        assert_eq!(a.intersect(&b), Some(AxisRect::from_corners(50, 50, 100, 100)));
        let touching = AxisRect::from_corners(100, 0, 200, 100);
        assert_eq!(a.intersect(&touching), None);
    }

    #[test]
    fn test_best_match_partial_overlap() {
        let candidates = [(7u64, mm_outline(0.0, 0.0, 100.0, 100.0))];
        let pick = mm_outline(50.0, 50.0, 150.0, 150.0);
        let m = best_match(&candidates, &pick, &Plane::xy(), &mm()).unwrap();
        assert_eq!(m.id, 7);
        assert_eq!(m.area(), 2500);
    }

    #[test]
    fn test_best_match_no_overlap() {
        let candidates = [(1u64, mm_outline(0.0, 0.0, 10.0, 10.0))];
        let pick = mm_outline(20.0, 20.0, 30.0, 30.0);
        assert!(best_match(&candidates, &pick, &Plane::xy(), &mm()).is_none());
    }

    #[test]
    fn test_best_match_prefers_larger_area_in_any_order() {
        let small = (1u64, mm_outline(0.0, 0.0, 10.0, 10.0));
        let large = (2u64, mm_outline(10.0, 0.0, 30.0, 20.0));
        let pick = mm_outline(0.0, 0.0, 40.0, 20.0);
        for candidates in [[small, large], [large, small]] {
            let m = best_match(&candidates, &pick, &Plane::xy(), &mm()).unwrap();
            assert_eq!(m.id, 2);
            assert_eq!(m.area(), 400);
        }
    }

    #[test]
    fn test_best_match_huge_viewports() {
        let full = (1u64, mm_outline(0.0, 0.0, 1.0e10, 1.0e10));
        let half = (2u64, mm_outline(0.0, 0.0, 5.0e9, 1.0e10));
        let pick = mm_outline(0.0, 0.0, 1.0e10, 1.0e10);
        for candidates in [[full, half], [half, full]] {
            let m = best_match(&candidates, &pick, &Plane::xy(), &mm()).unwrap();
            assert_eq!(m.id, 1);
            assert_eq!(m.area(), 100_000_000_000_000_000_000);
        }
    }

    #[test]
    fn test_best_match_tie_keeps_first() {
        let a = (1u64, mm_outline(0.0, 0.0, 10.0, 10.0));
        let b = (2u64, mm_outline(10.0, 0.0, 20.0, 10.0));
        let pick = mm_outline(0.0, 0.0, 20.0, 10.0);
        assert_eq!(best_match(&[a, b], &pick, &Plane::xy(), &mm()).unwrap().id, 1);
        assert_eq!(best_match(&[b, a], &pick, &Plane::xy(), &mm()).unwrap().id, 2);
    }
}
