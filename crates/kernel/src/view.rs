//! Snapshot of the host's view state consumed by the crop policies.

use serde::{Deserialize, Serialize};

use crate::geometry::{Point3d, Transform, Vec3};

/// Host element id of a view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ViewId(pub u64);

/// The two opposite corners of the user's selection box, in model space.
///
/// `min` and `max` are positional labels only; they are not ordered per axis.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PickRegion {
    pub min: Point3d,
    pub max: Point3d,
}

impl PickRegion {
    pub fn new(min: Point3d, max: Point3d) -> Self {
        Self { min, max }
    }

    /// Distance between the two corners.
    pub fn diagonal(&self) -> f64 {
        self.min.distance_to(&self.max)
    }

    /// Both corners mapped through `transform`.
    pub fn transformed(&self, transform: &Transform) -> Self {
        Self {
            min: transform.transform_point(&self.min),
            max: transform.transform_point(&self.max),
        }
    }
}

/// Orientation of a planar (plan, section, elevation, ...) view.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlanarView {
    pub up: Vec3,
    pub view_direction: Vec3,
    pub origin: Point3d,
    /// Whether the view's crop region is currently switched on.
    pub crop_active: bool,
}

/// The 3D crop volume: bounds in the box's local frame plus that frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CropBox {
    /// Local-to-model transform.
    pub transform: Transform,
    pub min: Point3d,
    pub max: Point3d,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct View3d {
    pub crop_box: CropBox,
    pub crop_active: bool,
}

/// A view placed on a sheet.
#[derive(Debug, Clone, PartialEq)]
pub struct Viewport {
    pub view_id: ViewId,
    /// Placement outline on the sheet, as reported by the host.
    pub outline_min: Point3d,
    pub outline_max: Point3d,
    pub view: PlanarView,
    /// Sheet space to the placed view's model space, when the host knows it.
    pub placement: Option<Transform>,
}

/// View kinds the command refuses to work in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum UnsupportedKind {
    Template,
    Legend,
    Schedule,
    Drafting,
}

/// Which crop policy applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ViewClass {
    ThreeD,
    Sheet,
    OtherPlanar,
}

/// The host's active view, classified.
#[derive(Debug, Clone, PartialEq)]
pub enum ActiveView {
    ThreeD(View3d),
    Sheet(Vec<Viewport>),
    Planar(PlanarView),
    Unsupported(UnsupportedKind),
}

impl ActiveView {
    pub fn class(&self) -> Option<ViewClass> {
        match self {
            ActiveView::ThreeD(_) => Some(ViewClass::ThreeD),
            ActiveView::Sheet(_) => Some(ViewClass::Sheet),
            ActiveView::Planar(_) => Some(ViewClass::OtherPlanar),
            ActiveView::Unsupported(_) => None,
        }
    }
}
