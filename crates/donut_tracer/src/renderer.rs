//! Core ray tracing renderer.
//!
//! Implements Whitted-style direct lighting with:
//! - A single rectangular area light sampled for soft shadows
//! - Lambertian diffuse and Phong specular terms
//! - Bucketed rendering, sequential or parallel with rayon

use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Instant;

use crate::{
    color_to_rgb, generate_buckets, AreaLight, Bucket, BucketResult, Color, Framebuffer,
    IntersectionResult, Ray, RenderConfig, RenderError, RenderResult, Scene,
};
use donut_math::{clamp_vec, dot, length, normalize, reflect, Vec3};
use rand::RngCore;
use rayon::prelude::*;

/// Offset along the normal for shadow ray origins, to avoid self-shadowing.
const SHADOW_EPSILON: f32 = 0.001;

/// Cooperative cancellation flag, checked before each bucket starts.
#[derive(Debug, Clone, Default)]
pub struct CancelToken(Arc<AtomicBool>);

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.0.store(true, Ordering::Relaxed);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }
}

/// A scene plus the settings to render it.
pub struct RayTracer {
    scene: Scene,
    config: RenderConfig,
}

impl RayTracer {
    pub fn new(scene: Scene, config: RenderConfig) -> Self {
        match scene.lights().len() {
            0 => log::warn!("Scene has no lights; surfaces will be ambient only"),
            1 => {}
            n => log::warn!("Scene has {} lights; only the first is used for shading", n),
        }
        Self { scene, config }
    }

    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    pub fn config(&self) -> &RenderConfig {
        &self.config
    }

    /// Compute the color seen along `ray`.
    ///
    /// `depth` counts bounces from the camera. Only direct lighting is
    /// evaluated, so nothing recurses past the primary hit today, but a ray
    /// at or beyond `max_depth` still terminates as black.
    pub fn trace_ray(&self, ray: &Ray, depth: u32, rng: &mut dyn RngCore) -> Color {
        if depth >= self.config.max_depth {
            return Color::ZERO;
        }

        let hit = self.scene.intersect(ray);
        if !hit.is_valid() {
            return self.config.background;
        }

        self.shade(ray, &hit, rng)
    }

    fn shade(&self, ray: &Ray, hit: &IntersectionResult<'_>, rng: &mut dyn RngCore) -> Color {
        let material = hit.material.copied().unwrap_or_default();

        let Some(light) = self.scene.lights().first() else {
            return hit.color * material.ambient;
        };

        let samples = light.sample_points(rng);
        let exponent = self.config.specular.for_material(&material);
        let view_dir = normalize(-ray.direction());

        let mut visible_samples = 0u32;
        let mut total_diffuse = Color::ZERO;
        let mut total_specular = Color::ZERO;

        for &sample in &samples {
            if self.is_occluded(hit.point, hit.normal, sample) {
                continue;
            }
            visible_samples += 1;

            let light_dir = normalize(sample - hit.point);

            let diffuse_intensity = dot(hit.normal, light_dir).max(0.0);
            total_diffuse += hit.color * material.diffuse * light.diffuse * diffuse_intensity;

            let reflect_dir = reflect(-light_dir, hit.normal);
            let spec_intensity = dot(view_dir, reflect_dir).max(0.0).powf(exponent);
            total_specular += hit.color * material.specular * light.specular * spec_intensity;
        }

        if visible_samples == 0 {
            // Full shadow
            return hit.color * light.ambient;
        }

        let visibility = visible_samples as f32 / samples.len() as f32;
        let diffuse = total_diffuse / visible_samples as f32;
        let specular = total_specular / visible_samples as f32;
        let ambient = hit.color * light.ambient * material.ambient;

        clamp_vec((diffuse + specular) * visibility + ambient, 0.0, 1.0)
    }

    /// True if something in the scene lies between `point` and `target`.
    fn is_occluded(&self, point: Vec3, normal: Vec3, target: Vec3) -> bool {
        let to_target = target - point;
        let shadow_ray = Ray::new(point + normal * SHADOW_EPSILON, to_target);
        let blocker = self.scene.intersect(&shadow_ray);

        blocker.is_valid() && blocker.distance < length(to_target)
    }

    /// Fraction of a fresh set of `light` samples visible from `point`.
    ///
    /// Returns 0 for a light with no samples.
    pub fn visibility(
        &self,
        point: Vec3,
        normal: Vec3,
        light: &AreaLight,
        rng: &mut dyn RngCore,
    ) -> f32 {
        let samples = light.sample_points(rng);
        if samples.is_empty() {
            return 0.0;
        }

        let visible = samples
            .iter()
            .filter(|&&sample| !self.is_occluded(point, normal, sample))
            .count();
        visible as f32 / samples.len() as f32
    }

    /// Linear color of pixel `(x, y)`.
    pub fn render_pixel(&self, x: u32, y: u32, rng: &mut dyn RngCore) -> Color {
        let ray = self
            .config
            .camera
            .primary_ray(x, y, self.config.width, self.config.height);
        self.trace_ray(&ray, 0, rng)
    }

    /// Render a single bucket.
    ///
    /// Returns pixels in row-major order within the bucket.
    pub fn render_bucket(&self, bucket: &Bucket) -> BucketResult {
        let mut rng = bucket.rng(self.config.seed, self.config.width);
        let mut pixels = Vec::with_capacity(bucket.pixel_count() as usize);

        for local_y in 0..bucket.height {
            for local_x in 0..bucket.width {
                let color = self.render_pixel(bucket.x + local_x, bucket.y + local_y, &mut rng);
                pixels.push(color_to_rgb(color));
            }
        }

        BucketResult::new(*bucket, pixels)
    }

    /// Render the whole image on the calling thread.
    pub fn render(&self) -> Framebuffer {
        let (width, height) = (self.config.width, self.config.height);
        let buckets = generate_buckets(width, height, self.config.bucket_size);
        log::info!("Rendering {}x{} in {} buckets (single-threaded)", width, height, buckets.len());

        let start = Instant::now();
        let mut image = Framebuffer::new(width, height);
        for bucket in &buckets {
            image.write_bucket(&self.render_bucket(bucket));
        }

        log::info!("Rendered in {:?}", start.elapsed());
        image
    }

    /// Render the whole image across the rayon thread pool.
    ///
    /// Produces the same bytes as [`render`](Self::render) for a seeded
    /// config. Fails only if `cancel` is triggered before every bucket has
    /// started.
    pub fn render_parallel(&self, cancel: &CancelToken) -> RenderResult<Framebuffer> {
        let (width, height) = (self.config.width, self.config.height);
        let buckets = generate_buckets(width, height, self.config.bucket_size);
        let total_buckets = buckets.len();
        let total_pixels = width as usize * height as usize;
        log::info!("Rendering {}x{} in {} buckets", width, height, total_buckets);

        let start = Instant::now();
        let completed = AtomicUsize::new(0);
        let rendered_pixels = AtomicUsize::new(0);

        let results: Vec<Option<BucketResult>> = buckets
            .par_iter()
            .map(|bucket| {
                if cancel.is_cancelled() {
                    return None;
                }

                let result = self.render_bucket(bucket);

                completed.fetch_add(1, Ordering::Relaxed);
                let pixels = bucket.pixel_count() as usize;
                let done = rendered_pixels.fetch_add(pixels, Ordering::Relaxed) + pixels;
                log::debug!(
                    "Rendered {}/{} pixels ({:.1}%)",
                    done,
                    total_pixels,
                    100.0 * done as f64 / total_pixels as f64
                );

                Some(result)
            })
            .collect();

        let completed = completed.into_inner();
        if completed < total_buckets {
            log::info!("Render cancelled after {} of {} buckets", completed, total_buckets);
            return Err(RenderError::Cancelled {
                completed,
                total: total_buckets,
            });
        }

        let mut image = Framebuffer::new(width, height);
        for result in results.iter().flatten() {
            image.write_bucket(result);
        }

        log::info!("Rendered in {:?}", start.elapsed());
        Ok(image)
    }
}
