//! Torus primitive, intersected as an implicit quartic surface.
//!
//! In the torus's local frame (origin at `center`, axis along +Y):
//!
//! ```text
//! (x² + y² + z² + R² - r²)² = 4R²(x² + z²)
//! ```
//!
//! Substituting `p = o + t d` gives a quartic in `t` whose smallest positive
//! root is the hit distance.

use crate::quartic::{solve_quartic, solve_quartic_on_interval, Quartic};
use crate::{Color, IntersectionResult, Material, Ray, Shape};
use donut_math::{normalize, DVec3, Vec3};

/// Roots closer than this are treated as the ray leaving its own surface.
const SELF_INTERSECTION_EPSILON: f64 = 0.001;

/// How the intersection quartic is solved.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RootSolver {
    /// Sample `steps` intervals over `[0, max_t]` and bisect sign changes.
    /// Rays longer than `max_t` miss.
    Bracketing { steps: u32, max_t: f32 },
    /// Closed-form Ferrari solution, unbounded in `t`.
    Analytic,
}

impl Default for RootSolver {
    fn default() -> Self {
        RootSolver::Bracketing {
            steps: 100,
            max_t: 20.0,
        }
    }
}

/// Which surface normal the torus reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NormalModel {
    /// `(4x·k, 4y·k - 4R²y, 4z·k)` with `k = |p|² - R² - r²`.
    ///
    /// Matches the outward normal on the outer and inner equators but flips
    /// towards -Y on the top of the tube (and +Y underneath).
    #[default]
    Literal,
    /// True gradient of the implicit function: `(4x·k, 4y·k + 8R²y, 4z·k)`.
    Gradient,
}

/// A torus lying in the X-Z plane around `center`.
///
/// `major_radius` should exceed `minor_radius`; this is not checked.
pub struct Torus {
    center: Vec3,
    major_radius: f32,
    minor_radius: f32,
    material: Material,
    color: Color,
    solver: RootSolver,
    normal_model: NormalModel,
}

impl Torus {
    /// Create a new torus.
    pub fn new(
        center: Vec3,
        major_radius: f32,
        minor_radius: f32,
        material: Material,
        color: Color,
    ) -> Self {
        Self {
            center,
            major_radius,
            minor_radius,
            material,
            color,
            solver: RootSolver::default(),
            normal_model: NormalModel::default(),
        }
    }

    pub fn with_solver(mut self, solver: RootSolver) -> Self {
        self.solver = solver;
        self
    }

    pub fn with_normal_model(mut self, normal_model: NormalModel) -> Self {
        self.normal_model = normal_model;
        self
    }

    /// Intersection polynomial for a ray with local origin `o` and direction `d`.
    fn quartic(&self, o: DVec3, d: DVec3) -> Quartic {
        let r2_major = (self.major_radius as f64).powi(2);
        let r2_minor = (self.minor_radius as f64).powi(2);

        let dd = d.dot(d);
        let oo = o.dot(o);
        let od = o.dot(d);
        // |p(t)|² - R² - r² = dd t² + 2 od t + k
        let k = oo - r2_major - r2_minor;

        Quartic::new(
            dd * dd,
            4.0 * dd * od,
            2.0 * dd * k + 4.0 * od * od + 4.0 * r2_major * d.y * d.y,
            4.0 * od * k + 8.0 * r2_major * o.y * d.y,
            k * k - 4.0 * r2_major * (r2_minor - o.y * o.y),
        )
    }

    /// Surface normal at a point given relative to `center`.
    pub fn normal_at(&self, local: Vec3) -> Vec3 {
        let r2_major = self.major_radius * self.major_radius;
        let r2_minor = self.minor_radius * self.minor_radius;
        let k = local.length_squared() - r2_major - r2_minor;

        let y_term = match self.normal_model {
            NormalModel::Literal => -4.0 * r2_major * local.y,
            NormalModel::Gradient => 8.0 * r2_major * local.y,
        };

        normalize(Vec3::new(
            4.0 * local.x * k,
            4.0 * local.y * k + y_term,
            4.0 * local.z * k,
        ))
    }
}

impl Shape for Torus {
    fn intersect(&self, ray: &Ray) -> IntersectionResult<'_> {
        let local_origin = ray.origin - self.center;
        let quartic = self.quartic(local_origin.as_dvec3(), ray.direction().as_dvec3());

        let roots = match self.solver {
            RootSolver::Bracketing { steps, max_t } => {
                solve_quartic_on_interval(&quartic, 0.0, max_t as f64, steps)
            }
            RootSolver::Analytic => solve_quartic(&quartic),
        };

        let closest = roots
            .into_iter()
            .filter(|&t| t > SELF_INTERSECTION_EPSILON)
            .fold(f64::INFINITY, f64::min);
        if !closest.is_finite() {
            return IntersectionResult::MISS;
        }

        let t = closest as f32;
        let local_point = local_origin + ray.direction() * t;

        IntersectionResult {
            point: local_point + self.center,
            distance: t,
            normal: self.normal_at(local_point),
            color: self.color,
            material: Some(&self.material),
            shape: Some(self),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ring() -> Torus {
        Torus::new(Vec3::ZERO, 0.8, 0.2, Material::default(), Color::new(0.7, 0.2, 0.2))
    }

    #[test]
    fn test_ray_through_hole_misses() {
        let torus = ring();
        let ray = Ray::new(Vec3::new(0.0, 10.0, 0.0), Vec3::NEG_Y);
        assert!(!torus.intersect(&ray).is_valid());
    }

    #[test]
    fn test_ray_over_tube_hits_top() {
        let torus = ring();
        let ray = Ray::new(Vec3::new(0.8, 10.0, 0.0), Vec3::NEG_Y);

        let hit = torus.intersect(&ray);
        assert!(hit.is_valid());
        assert!((hit.point.y - 0.2).abs() < 0.02, "hit at {:?}", hit.point);
        assert!((hit.distance - 9.8).abs() < 0.02);
        assert_eq!(hit.color, Color::new(0.7, 0.2, 0.2));
        assert!(hit.material.is_some());
    }

    #[test]
    fn test_side_hit_on_outer_equator() {
        let torus = ring();
        let ray = Ray::new(Vec3::new(5.0, 0.0, 0.0), Vec3::NEG_X);

        let hit = torus.intersect(&ray);
        assert!(hit.is_valid());
        assert!((hit.distance - 4.0).abs() < 0.02);
        assert!((hit.normal - Vec3::X).length() < 1e-3, "normal {:?}", hit.normal);
    }

    #[test]
    fn test_offset_center() {
        let center = Vec3::new(0.0, 0.0, -3.0);
        let torus = Torus::new(center, 0.8, 0.2, Material::default(), Color::ONE);

        let through_hole = Ray::new(Vec3::new(0.0, 10.0, -3.0), Vec3::NEG_Y);
        assert!(!torus.intersect(&through_hole).is_valid());

        let over_tube = Ray::new(Vec3::new(0.0, 10.0, -2.2), Vec3::NEG_Y);
        let hit = torus.intersect(&over_tube);
        assert!(hit.is_valid());
        assert!((hit.point.y - 0.2).abs() < 0.02);
        assert!((hit.point.z + 2.2).abs() < 1e-4);
    }

    #[test]
    fn test_beyond_max_t_misses() {
        let torus = ring();
        let ray = Ray::new(Vec3::new(0.8, 30.0, 0.0), Vec3::NEG_Y);
        assert!(!torus.intersect(&ray).is_valid());

        // The analytic solver has no range limit
        let analytic = ring().with_solver(RootSolver::Analytic);
        assert!(analytic.intersect(&ray).is_valid());
    }

    #[test]
    fn test_ray_pointing_away_misses() {
        let torus = ring();
        let ray = Ray::new(Vec3::new(5.0, 0.0, 0.0), Vec3::X);
        assert!(!torus.intersect(&ray).is_valid());
    }

    #[test]
    fn test_normal_models_on_tube_top() {
        let top = Vec3::new(0.8, 0.2, 0.0);

        let literal = ring().normal_at(top);
        assert!((literal - Vec3::NEG_Y).length() < 1e-4, "{:?}", literal);

        let gradient = ring().with_normal_model(NormalModel::Gradient).normal_at(top);
        assert!((gradient - Vec3::Y).length() < 1e-4, "{:?}", gradient);
    }

    #[test]
    fn test_normal_models_agree_on_equator() {
        for p in [Vec3::new(1.0, 0.0, 0.0), Vec3::new(0.0, 0.0, -0.6), Vec3::new(0.0, 0.0, 1.0)] {
            let literal = ring().normal_at(p);
            let gradient = ring().with_normal_model(NormalModel::Gradient).normal_at(p);
            assert!((literal - gradient).length() < 1e-5);
            assert!((literal.length() - 1.0).abs() < 1e-5);
        }
    }

    #[test]
    fn test_solvers_agree_on_hits() {
        let bracketing = ring();
        let analytic = ring().with_solver(RootSolver::Analytic);

        let rays = [
            Ray::new(Vec3::new(0.8, 10.0, 0.0), Vec3::NEG_Y),
            Ray::new(Vec3::new(5.0, 0.1, 0.0), Vec3::NEG_X),
            Ray::new(Vec3::new(5.0, -0.15, 0.0), Vec3::NEG_X),
            Ray::new(Vec3::new(0.0, 0.05, 8.0), Vec3::NEG_Z),
        ];

        for ray in rays {
            let a = bracketing.intersect(&ray);
            let b = analytic.intersect(&ray);
            assert!(a.is_valid() && b.is_valid());
            assert!(
                (a.distance - b.distance).abs() < 0.01,
                "bracketing {} vs analytic {}",
                a.distance,
                b.distance
            );
        }
    }
}
