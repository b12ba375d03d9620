//! Conversion between the document's internal length unit and millimeters.

use serde::{Deserialize, Serialize};

/// Scale between one document length unit and millimeters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct UnitConverter {
    /// Millimeters in one internal unit.
    pub mm_per_unit: f64,
}

impl UnitConverter {
    /// Documents stored in decimal feet.
    pub const fn feet() -> Self {
        Self { mm_per_unit: 304.8 }
    }

    pub const fn millimeters() -> Self {
        Self { mm_per_unit: 1.0 }
    }

    pub const fn meters() -> Self {
        Self {
            mm_per_unit: 1000.0,
        }
    }

    /// Arbitrary scale. `None` unless it is finite and positive.
    pub fn custom(mm_per_unit: f64) -> Option<Self> {
        (mm_per_unit.is_finite() && mm_per_unit > 0.0).then_some(Self { mm_per_unit })
    }

    pub fn to_millimeters(&self, length: f64) -> f64 {
        length * self.mm_per_unit
    }

    pub fn to_internal_units(&self, length_mm: f64) -> f64 {
        length_mm / self.mm_per_unit
    }
}

impl Default for UnitConverter {
    fn default() -> Self {
        Self::feet()
    }
}
