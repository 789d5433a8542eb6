//! Surface reflectance parameters.

use donut_math::Vec3;

/// Color type alias (RGB values typically 0-1)
pub type Color = Vec3;

/// Phong-style reflectance coefficients shared by every point of a shape.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Material {
    pub diffuse: Color,
    pub specular: Color,
    pub ambient: Color,
    /// Phong exponent. Only read when the renderer is configured with
    /// `SpecularExponent::Material`.
    pub shininess: f32,
}

impl Material {
    pub fn new(diffuse: Color, specular: Color, ambient: Color, shininess: f32) -> Self {
        Self {
            diffuse,
            specular,
            ambient,
            shininess,
        }
    }
}

impl Default for Material {
    fn default() -> Self {
        Self {
            diffuse: Color::ONE,
            specular: Color::ONE,
            ambient: Color::ONE,
            shininess: 32.0,
        }
    }
}
