//! Outcome of a ray/shape test.

use crate::{Color, Material, Shape};
use donut_math::Vec3;

/// Record of a ray-shape intersection.
///
/// A miss is encoded as an infinite `distance`; use [`is_valid`](Self::is_valid)
/// rather than comparing fields directly. Results are created fresh by every
/// `intersect` call and borrow the material and shape they came from.
#[derive(Clone, Copy)]
pub struct IntersectionResult<'a> {
    /// Point of intersection in world space
    pub point: Vec3,
    /// Distance along the (unit) ray direction
    pub distance: f32,
    /// Unit surface normal at the hit point
    pub normal: Vec3,
    /// Surface color at the hit point
    pub color: Color,
    pub material: Option<&'a Material>,
    pub shape: Option<&'a dyn Shape>,
}

impl<'a> IntersectionResult<'a> {
    /// The "no hit" result.
    pub const MISS: IntersectionResult<'static> = IntersectionResult {
        point: Vec3::ZERO,
        distance: f32::INFINITY,
        normal: Vec3::ZERO,
        color: Color::ONE,
        material: None,
        shape: None,
    };

    /// True if this result describes an actual hit.
    #[inline]
    pub fn is_valid(&self) -> bool {
        self.distance < f32::INFINITY
    }
}

impl Default for IntersectionResult<'_> {
    fn default() -> Self {
        IntersectionResult::MISS
    }
}

impl std::fmt::Debug for IntersectionResult<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("IntersectionResult")
            .field("point", &self.point)
            .field("distance", &self.distance)
            .field("normal", &self.normal)
            .field("color", &self.color)
            .field("material", &self.material)
            .field("has_shape", &self.shape.is_some())
            .finish()
    }
}
