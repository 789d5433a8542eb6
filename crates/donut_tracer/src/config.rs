//! Render settings, loadable from JSON.

use std::path::Path;

use crate::{Camera, Color, Material, RenderResult, DEFAULT_BUCKET_SIZE};
use serde::{Deserialize, Serialize};

/// Phong exponent used for the specular highlight.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SpecularExponent {
    /// Same exponent for every surface, ignoring `Material::shininess`.
    Fixed(f32),
    /// Each material's own `shininess`.
    Material,
}

impl SpecularExponent {
    #[inline]
    pub fn for_material(&self, material: &Material) -> f32 {
        match self {
            SpecularExponent::Fixed(exponent) => *exponent,
            SpecularExponent::Material => material.shininess,
        }
    }
}

impl Default for SpecularExponent {
    fn default() -> Self {
        SpecularExponent::Fixed(32.0)
    }
}

/// Render configuration.
///
/// Missing fields in a JSON config fall back to the defaults, which
/// reproduce the reference render at 800x600.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    pub width: u32,
    pub height: u32,
    /// Rays at this depth or deeper return black
    pub max_depth: u32,
    /// Color for rays that hit nothing
    pub background: Color,
    pub specular: SpecularExponent,
    /// Seed for light sampling; `None` draws from OS entropy
    pub seed: Option<u64>,
    /// Side length of a render bucket in pixels
    pub bucket_size: u32,
    pub camera: Camera,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            width: 800,
            height: 600,
            max_depth: 2,
            background: Color::new(0.3, 0.4, 0.5),
            specular: SpecularExponent::default(),
            seed: None,
            bucket_size: DEFAULT_BUCKET_SIZE,
            camera: Camera::default(),
        }
    }
}

impl RenderConfig {
    /// Parse a config from a JSON string.
    pub fn from_json(json: &str) -> RenderResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load a config from a JSON file.
    pub fn load(path: impl AsRef<Path>) -> RenderResult<Self> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Set image resolution.
    pub fn with_resolution(mut self, width: u32, height: u32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    /// Seed light sampling for repeatable renders.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}
