//! Bucket-based tile rendering.
//!
//! The image is cut into square tiles that render independently. Each tile
//! owns its RNG, so a seeded render gives the same bytes on one thread or
//! many.

use rand::rngs::StdRng;
use rand::SeedableRng;

/// A tile of the image, in pixel coordinates with the origin top-left.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bucket {
    pub x: u32,
    pub y: u32,
    /// Cropped to the image on the right edge
    pub width: u32,
    /// Cropped to the image on the bottom edge
    pub height: u32,
    /// Position in render order
    pub index: usize,
}

impl Bucket {
    pub fn new(x: u32, y: u32, width: u32, height: u32, index: usize) -> Self {
        Self {
            x,
            y,
            width,
            height,
            index,
        }
    }

    pub fn pixel_count(&self) -> u32 {
        self.width * self.height
    }

    fn distance_sq_to(&self, (cx, cy): (f32, f32)) -> f32 {
        let dx = self.x as f32 + self.width as f32 / 2.0 - cx;
        let dy = self.y as f32 + self.height as f32 / 2.0 - cy;
        dx * dx + dy * dy
    }

    /// RNG for light sampling inside this bucket.
    ///
    /// With a seed, the stream depends only on the seed and the bucket's
    /// position, so output does not depend on which thread renders it or
    /// in what order.
    pub(crate) fn rng(&self, seed: Option<u64>, image_width: u32) -> StdRng {
        match seed {
            Some(seed) => {
                let corner = self.y as u64 * image_width as u64 + self.x as u64;
                StdRng::seed_from_u64(seed.wrapping_add(corner))
            }
            None => StdRng::from_entropy(),
        }
    }
}

/// Side length of a bucket when the config does not set one.
pub const DEFAULT_BUCKET_SIZE: u32 = 64;

/// Split a `width` x `height` image into buckets, nearest the center first.
///
/// Buckets on the right and bottom edges are cropped to the image. A
/// `bucket_size` of zero is treated as one. `Bucket::index` is the position
/// in the returned order.
pub fn generate_buckets(width: u32, height: u32, bucket_size: u32) -> Vec<Bucket> {
    let step = bucket_size.max(1);

    let mut buckets: Vec<Bucket> = (0..height)
        .step_by(step as usize)
        .flat_map(|y| {
            (0..width)
                .step_by(step as usize)
                .map(move |x| Bucket::new(x, y, step.min(width - x), step.min(height - y), 0))
        })
        .collect();

    let center = (width as f32 / 2.0, height as f32 / 2.0);
    // Stable, so equidistant buckets stay in scanline order
    buckets.sort_by(|a, b| a.distance_sq_to(center).total_cmp(&b.distance_sq_to(center)));

    for (i, bucket) in buckets.iter_mut().enumerate() {
        bucket.index = i;
    }
    buckets
}

/// Quantized pixels of one finished bucket, row-major within the bucket.
#[derive(Debug, Clone)]
pub struct BucketResult {
    pub bucket: Bucket,
    pub pixels: Vec<[u8; 3]>,
}

impl BucketResult {
    pub fn new(bucket: Bucket, pixels: Vec<[u8; 3]>) -> Self {
        Self { bucket, pixels }
    }
}
