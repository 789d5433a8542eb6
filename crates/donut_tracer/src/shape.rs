//! Shape trait for ray intersection.

use crate::{IntersectionResult, Ray};

/// Trait for objects that can be hit by rays.
///
/// Shapes are immutable once built; `intersect` reports everything through
/// the returned [`IntersectionResult`] so a scene can be traced from many
/// threads at once.
pub trait Shape: Send + Sync {
    /// Find the nearest intersection of `ray` with this shape in front of
    /// the ray origin, or [`IntersectionResult::MISS`].
    fn intersect(&self, ray: &Ray) -> IntersectionResult<'_>;
}
