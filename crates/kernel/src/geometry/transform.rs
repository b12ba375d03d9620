use nalgebra::{Matrix4, Vector3, Vector4};

use super::point::Point3d;
use super::vector::Vec3;

/// A 4x4 affine transformation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    pub m: Matrix4<f64>,
}

impl Transform {
    pub fn identity() -> Self {
        Self {
            m: Matrix4::identity(),
        }
    }

    pub fn translation(dx: f64, dy: f64, dz: f64) -> Self {
        Self {
            m: Matrix4::new_translation(&Vector3::new(dx, dy, dz)),
        }
    }

    /// Rotation around the Z axis by `angle` radians.
    pub fn rotation_z(angle: f64) -> Self {
        Self {
            m: Matrix4::from_axis_angle(&Vector3::z_axis(), angle),
        }
    }

    /// Local frame with the given basis vectors as columns, placed at `origin`.
    pub fn from_basis(origin: Point3d, basis_x: Vec3, basis_y: Vec3, basis_z: Vec3) -> Self {
        #[rustfmt::skip]
        let m = Matrix4::new(
            basis_x.x, basis_y.x, basis_z.x, origin.x,
            basis_x.y, basis_y.y, basis_z.y, origin.y,
            basis_x.z, basis_y.z, basis_z.z, origin.z,
            0.0,       0.0,       0.0,       1.0,
        );
        Self { m }
    }

    /// Transform a point (applies translation).
    pub fn transform_point(&self, p: &Point3d) -> Point3d {
        let v = self.m * Vector4::new(p.x, p.y, p.z, 1.0);
        Point3d::new(v.x, v.y, v.z)
    }

    /// Compose two transforms: `self` applied after `other`.
    pub fn then(&self, other: &Transform) -> Transform {
        Transform {
            m: self.m * other.m,
        }
    }

    /// Compute the inverse transform. Returns None if the matrix is singular.
    pub fn inverse(&self) -> Option<Self> {
        if self.m.determinant().abs() < 1e-15 {
            return None;
        }
        self.m.try_inverse().map(|m| Self { m })
    }
}

impl Default for Transform {
    fn default() -> Self {
        Self::identity()
    }
}
