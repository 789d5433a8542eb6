// Re-export glam for convenience
pub use glam::*;

// Donut math types
mod ray;
mod vector;

pub use ray::Ray;
pub use vector::{clamp, clamp_vec, cross, distance, dot, length, lerp, normalize, reflect};
