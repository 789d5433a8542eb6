//! 8-bit RGB output image.

use std::path::Path;

use crate::{BucketResult, Color, RenderResult};
use donut_math::clamp;

/// Convert a linear color to 8-bit RGB, clamping to [0, 1] and truncating.
pub fn color_to_rgb(color: Color) -> [u8; 3] {
    [
        (255.0 * clamp(color.x, 0.0, 1.0)) as u8,
        (255.0 * clamp(color.y, 0.0, 1.0)) as u8,
        (255.0 * clamp(color.z, 0.0, 1.0)) as u8,
    ]
}

/// Row-major RGB pixels, top row first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Framebuffer {
    pub width: u32,
    pub height: u32,
    pixels: Vec<[u8; 3]>,
}

impl Framebuffer {
    /// Create a new framebuffer filled with black.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![[0; 3]; width as usize * height as usize],
        }
    }

    #[inline]
    fn index(&self, x: u32, y: u32) -> usize {
        y as usize * self.width as usize + x as usize
    }

    /// Get the pixel at (x, y).
    pub fn get(&self, x: u32, y: u32) -> [u8; 3] {
        self.pixels[self.index(x, y)]
    }

    /// Set the pixel at (x, y).
    pub fn set(&mut self, x: u32, y: u32, rgb: [u8; 3]) {
        let index = self.index(x, y);
        self.pixels[index] = rgb;
    }

    pub fn pixels(&self) -> &[[u8; 3]] {
        &self.pixels
    }

    /// Flat `r, g, b, r, g, b, ...` view of the pixels.
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.pixels)
    }

    /// Copy a rendered bucket into place.
    pub fn write_bucket(&mut self, result: &BucketResult) {
        let bucket = &result.bucket;
        for local_y in 0..bucket.height {
            for local_x in 0..bucket.width {
                let rgb = result.pixels[(local_y * bucket.width + local_x) as usize];
                self.set(bucket.x + local_x, bucket.y + local_y, rgb);
            }
        }
    }

    /// Encode as PNG.
    pub fn save_png(&self, path: impl AsRef<Path>) -> RenderResult<()> {
        image::save_buffer(
            path,
            self.as_bytes(),
            self.width,
            self.height,
            image::ColorType::Rgb8,
        )?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Bucket;

    #[test]
    fn test_new_is_black() {
        let fb = Framebuffer::new(4, 3);
        assert_eq!(fb.pixels().len(), 12);
        assert!(fb.as_bytes().iter().all(|&b| b == 0));
        assert_eq!(fb.as_bytes().len(), 36);
    }

    #[test]
    fn test_row_major_layout() {
        let mut fb = Framebuffer::new(3, 2);
        fb.set(2, 1, [1, 2, 3]);

        assert_eq!(fb.get(2, 1), [1, 2, 3]);
        assert_eq!(fb.pixels()[5], [1, 2, 3]);
        assert_eq!(&fb.as_bytes()[15..18], &[1, 2, 3]);
    }

    #[test]
    fn test_color_to_rgb() {
        assert_eq!(color_to_rgb(Color::ZERO), [0, 0, 0]);
        assert_eq!(color_to_rgb(Color::ONE), [255, 255, 255]);
        assert_eq!(color_to_rgb(Color::new(-1.0, 2.0, 0.5)), [0, 255, 127]);
    }

    #[test]
    fn test_write_bucket() {
        let mut fb = Framebuffer::new(4, 4);
        let bucket = Bucket::new(2, 1, 2, 2, 0);
        let result = BucketResult::new(bucket, vec![[1; 3], [2; 3], [3; 3], [4; 3]]);
        fb.write_bucket(&result);

        assert_eq!(fb.get(2, 1), [1; 3]);
        assert_eq!(fb.get(3, 1), [2; 3]);
        assert_eq!(fb.get(2, 2), [3; 3]);
        assert_eq!(fb.get(3, 2), [4; 3]);
        assert_eq!(fb.get(0, 0), [0; 3]);
    }

    #[test]
    fn test_save_png() {
        let mut fb = Framebuffer::new(5, 2);
        fb.set(4, 1, [200, 100, 50]);

        let path = std::env::temp_dir().join(format!("donut_fb_{}.png", std::process::id()));
        fb.save_png(&path).unwrap();

        let loaded = image::open(&path).unwrap().to_rgb8();
        std::fs::remove_file(&path).ok();

        assert_eq!(loaded.dimensions(), (5, 2));
        assert_eq!(loaded.get_pixel(4, 1).0, [200, 100, 50]);
    }
}
