//! Donut tracer - CPU ray tracing of a torus over a checkerboard.
//!
//! Direct illumination from a single rectangular area light with soft
//! shadows. Shapes are tested analytically (plane) or by numerically
//! bracketing the roots of a quartic (torus).

mod error;
mod material;
mod intersection;
mod shape;
mod plane;
mod quartic;
mod torus;
mod light;
mod scene;
mod camera;
mod config;
mod framebuffer;
mod renderer;
mod bucket;

pub use error::{RenderError, RenderResult};
pub use material::{Color, Material};
pub use intersection::IntersectionResult;
pub use shape::Shape;
pub use plane::Checkerboard;
pub use quartic::{solve_quartic, solve_quartic_on_interval, Quartic};
pub use torus::{NormalModel, RootSolver, Torus};
pub use light::AreaLight;
pub use scene::{reference_scene, Scene};
pub use camera::Camera;
pub use config::{RenderConfig, SpecularExponent};
pub use framebuffer::{color_to_rgb, Framebuffer};
pub use renderer::{CancelToken, RayTracer};
pub use bucket::{generate_buckets, Bucket, BucketResult, DEFAULT_BUCKET_SIZE};

/// Re-export Vec3 and the ray type from donut_math
pub use donut_math::{Ray, Vec3};
