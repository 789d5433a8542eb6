//! Free-function vector helpers.
//!
//! Thin wrappers over `glam` where it already has the operation, plus the
//! few places where the renderer wants different degenerate-input behaviour
//! than glam provides (e.g. normalizing a zero vector).

use std::ops::{Add, Mul, Sub};

use crate::Vec3;

/// Normalize `v` to unit length.
///
/// A zero-length vector is returned unchanged instead of producing NaNs.
#[inline]
pub fn normalize(v: Vec3) -> Vec3 {
    let len = v.length();
    if len == 0.0 {
        v
    } else {
        v / len
    }
}

#[inline]
pub fn dot(a: Vec3, b: Vec3) -> f32 {
    a.dot(b)
}

#[inline]
pub fn cross(a: Vec3, b: Vec3) -> Vec3 {
    a.cross(b)
}

/// Reflect `incident` about `normal`.
///
/// `normal` is expected to be unit length: `incident - 2 (incident . normal) normal`.
#[inline]
pub fn reflect(incident: Vec3, normal: Vec3) -> Vec3 {
    incident - 2.0 * incident.dot(normal) * normal
}

#[inline]
pub fn length(v: Vec3) -> f32 {
    v.length()
}

/// Euclidean distance between two points.
#[inline]
pub fn distance(a: Vec3, b: Vec3) -> f32 {
    (b - a).length()
}

/// Clamp a scalar to `[lo, hi]`.
///
/// Unlike `f32::clamp` this never panics when `lo > hi`; `lo` wins.
#[inline]
pub fn clamp(value: f32, lo: f32, hi: f32) -> f32 {
    lo.max(value.min(hi))
}

/// Component-wise clamp of a vector to `[lo, hi]`.
#[inline]
pub fn clamp_vec(v: Vec3, lo: f32, hi: f32) -> Vec3 {
    Vec3::new(clamp(v.x, lo, hi), clamp(v.y, lo, hi), clamp(v.z, lo, hi))
}

/// Linear interpolation: `a + (b - a) * t`.
///
/// Works for scalars and vectors alike; `t` is not clamped.
#[inline]
pub fn lerp<T>(a: T, b: T, t: f32) -> T
where
    T: Copy + Add<Output = T> + Sub<Output = T> + Mul<f32, Output = T>,
{
    a + (b - a) * t
}
