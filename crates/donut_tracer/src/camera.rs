//! Fixed pinhole camera for primary ray generation.

use crate::Ray;
use donut_math::{normalize, Vec3};
use serde::{Deserialize, Serialize};

/// Camera looking from `position` towards `look_at`.
///
/// `right` and `up` are not derived from the view direction; they stay
/// whatever world axes they were set to (+X and +Y by default), so the
/// image plane is only orthogonal to the view for level cameras.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Camera {
    pub position: Vec3,
    pub look_at: Vec3,
    pub right: Vec3,
    pub up: Vec3,
}

impl Camera {
    /// Create a camera with world-axis `right` (+X) and `up` (+Y).
    pub fn new(position: Vec3, look_at: Vec3) -> Self {
        Self {
            position,
            look_at,
            right: Vec3::X,
            up: Vec3::Y,
        }
    }

    /// Override the image plane basis.
    pub fn with_basis(mut self, right: Vec3, up: Vec3) -> Self {
        self.right = right;
        self.up = up;
        self
    }

    /// Unit view direction.
    pub fn forward(&self) -> Vec3 {
        normalize(self.look_at - self.position)
    }

    /// Primary ray through pixel `(x, y)` of a `width` x `height` image.
    ///
    /// Pixel corners map to NDC in [-1, 1]; row 0 is the top of the image.
    pub fn primary_ray(&self, x: u32, y: u32, width: u32, height: u32) -> Ray {
        let ndc_x = (2.0 * x as f32 / width as f32) - 1.0;
        let ndc_y = 1.0 - (2.0 * y as f32 / height as f32);

        let direction = self.forward() + self.right * ndc_x + self.up * ndc_y;
        Ray::new(self.position, direction)
    }
}

impl Default for Camera {
    fn default() -> Self {
        Self::new(Vec3::new(0.0, 1.0, 3.0), Vec3::new(0.0, 0.0, -5.0))
    }
}
