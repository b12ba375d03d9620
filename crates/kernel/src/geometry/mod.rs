pub mod plane;
pub mod point;
pub mod segment;
pub mod transform;
pub mod vector;

pub use plane::Plane;
pub use point::Point3d;
pub use segment::Segment;
pub use transform::Transform;
pub use vector::{UnitVec3, Vec3};
