use serde::{Deserialize, Serialize};

use super::point::Point3d;
use super::vector::{UnitVec3, Vec3};

/// An infinite plane given by an origin and a unit normal.
///
/// Only used for projection, so no in-plane basis is stored.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Plane {
    pub origin: Point3d,
    pub normal: Vec3,
}

impl Plane {
    pub fn new(origin: Point3d, normal: UnitVec3) -> Self {
        Self {
            origin,
            normal: normal.get(),
        }
    }

    /// Build a plane through `origin`, normalizing `normal`.
    ///
    /// Returns `None` when the normal has no direction.
    pub fn from_normal_and_origin(normal: Vec3, origin: Point3d) -> Option<Self> {
        UnitVec3::new(normal).map(|normal| Self::new(origin, normal))
    }

    /// The global top-down plane (normal +Z through the origin).
    pub fn xy() -> Self {
        Self {
            origin: Point3d::ORIGIN,
            normal: Vec3::Z,
        }
    }

    /// Signed distance of `p` from the plane along the normal.
    pub fn distance_to_point(&self, p: &Point3d) -> f64 {
        (*p - self.origin).dot(&self.normal)
    }

    /// Orthogonal projection of `p` onto the plane.
    pub fn project_point(&self, p: &Point3d) -> Point3d {
        *p - self.normal * self.distance_to_point(p)
    }
}
