//! Rectangular area light for soft shadows.

use crate::Color;
use donut_math::Vec3;
use rand::{Rng, RngCore};

/// A square emitter of side `size` centered at `position`, lying in the
/// X-Z plane.
///
/// Shading integrates visibility over `sample_count` random points on the
/// patch. A `sample_count` of zero is allowed and leaves every point in
/// full shadow.
#[derive(Debug, Clone, PartialEq)]
pub struct AreaLight {
    pub position: Vec3,
    pub size: f32,
    pub sample_count: u32,
    pub diffuse: Color,
    pub specular: Color,
    pub ambient: Color,
}

impl AreaLight {
    /// Create a white light with a dim (0.1) ambient term.
    pub fn new(position: Vec3, size: f32, sample_count: u32) -> Self {
        Self {
            position,
            size,
            sample_count,
            diffuse: Color::ONE,
            specular: Color::ONE,
            ambient: Color::splat(0.1),
        }
    }

    /// Set the light's diffuse, specular and ambient colors.
    pub fn with_colors(mut self, diffuse: Color, specular: Color, ambient: Color) -> Self {
        self.diffuse = diffuse;
        self.specular = specular;
        self.ambient = ambient;
        self
    }

    /// Draw a fresh set of `sample_count` points, uniformly distributed
    /// over the patch.
    pub fn sample_points(&self, rng: &mut dyn RngCore) -> Vec<Vec3> {
        (0..self.sample_count)
            .map(|_| {
                let u: f32 = rng.gen();
                let v: f32 = rng.gen();
                self.position + Vec3::new((u - 0.5) * self.size, 0.0, (v - 0.5) * self.size)
            })
            .collect()
    }
}
