//! Infinite checkerboard plane.

use crate::{Color, IntersectionResult, Material, Ray, Shape};
use donut_math::{dot, normalize, Vec3};

/// Below this |n . d| the ray is treated as parallel to the plane.
const PARALLEL_EPSILON: f32 = 1e-6;

/// An infinite plane tiled with two alternating colors.
///
/// Tiles are squares of side `checker_size` aligned with the world X and Z
/// axes, regardless of the plane's orientation.
pub struct Checkerboard {
    point: Vec3,
    normal: Vec3,
    checker_size: f32,
    material: Material,
    color1: Color,
    color2: Color,
}

impl Checkerboard {
    /// Create a new checkerboard plane through `point`.
    ///
    /// `normal` is normalized here and fixed for the life of the plane.
    pub fn new(
        point: Vec3,
        normal: Vec3,
        checker_size: f32,
        material: Material,
        color1: Color,
        color2: Color,
    ) -> Self {
        Self {
            point,
            normal: normalize(normal),
            checker_size,
            material,
            color1,
            color2,
        }
    }

    pub fn normal(&self) -> Vec3 {
        self.normal
    }

    /// Tile color at a point on the plane.
    pub fn color_at(&self, p: Vec3) -> Color {
        let iu = (p.x / self.checker_size).floor() as i64;
        let iv = (p.z / self.checker_size).floor() as i64;

        // Saturated casts at extreme scales must not overflow the sum
        if iu.wrapping_add(iv).rem_euclid(2) == 0 {
            self.color1
        } else {
            self.color2
        }
    }
}

impl Shape for Checkerboard {
    fn intersect(&self, ray: &Ray) -> IntersectionResult<'_> {
        let denom = dot(self.normal, ray.direction());
        if denom.abs() < PARALLEL_EPSILON {
            return IntersectionResult::MISS;
        }

        let t = dot(self.point - ray.origin, self.normal) / denom;
        if t < 0.0 {
            // Behind the ray origin
            return IntersectionResult::MISS;
        }

        let point = ray.at(t);
        IntersectionResult {
            point,
            distance: t,
            normal: self.normal,
            color: self.color_at(point),
            material: Some(&self.material),
            shape: Some(self),
        }
    }
}
