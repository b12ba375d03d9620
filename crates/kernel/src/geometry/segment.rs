use serde::{Deserialize, Serialize};

use super::point::Point3d;
use super::vector::Vec3;

/// A bounded line from `start` to `end`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Segment {
    pub start: Point3d,
    pub end: Point3d,
}

impl Segment {
    /// Build a segment, or `None` if the endpoints are closer than `min_length`.
    pub fn try_new(start: Point3d, end: Point3d, min_length: f64) -> Option<Self> {
        if !start.is_finite() || !end.is_finite() {
            return None;
        }
        if start.distance_to(&end) < min_length {
            return None;
        }
        Some(Self { start, end })
    }

    pub fn length(&self) -> f64 {
        self.start.distance_to(&self.end)
    }

    /// Unnormalized direction `end - start`.
    pub fn direction(&self) -> Vec3 {
        self.end - self.start
    }
}
