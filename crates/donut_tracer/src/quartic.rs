//! Real-root finding for quartic polynomials.
//!
//! Two solvers are provided:
//! - [`solve_quartic_on_interval`]: sample the polynomial at fixed steps,
//!   bisect every sign change. Approximate and can miss tangent (double)
//!   roots, but never produces garbage from catastrophic cancellation.
//! - [`solve_quartic`]: Ferrari's method through a resolvent cubic. Exact up
//!   to floating point, used to cross-check the bracketing solver.

/// Bisection iterations applied to each bracketed sign change.
const BISECTION_ITERATIONS: u32 = 5;

/// Bisection stops early once |f(t)| drops below this.
const CONVERGENCE_TOLERANCE: f64 = 0.001;

/// A refined bracket is only accepted as a root if |f(t)| is below this.
const RESIDUAL_TOLERANCE: f64 = 0.01;

/// Coefficients of `a t^4 + b t^3 + c t^2 + d t + e`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Quartic {
    pub a: f64,
    pub b: f64,
    pub c: f64,
    pub d: f64,
    pub e: f64,
}

impl Quartic {
    pub fn new(a: f64, b: f64, c: f64, d: f64, e: f64) -> Self {
        Self { a, b, c, d, e }
    }

    /// Evaluate the polynomial at `t` (Horner form).
    #[inline]
    pub fn eval(&self, t: f64) -> f64 {
        (((self.a * t + self.b) * t + self.c) * t + self.d) * t + self.e
    }
}

/// Find roots of `quartic` in `[t_min, t_max]` by sampling `steps` evenly
/// spaced intervals and bisecting those whose endpoints change sign.
///
/// Roots come back in increasing order. A sample landing exactly on a root
/// brackets it from both sides, so the same root may appear twice.
pub fn solve_quartic_on_interval(
    quartic: &Quartic,
    t_min: f64,
    t_max: f64,
    steps: u32,
) -> Vec<f64> {
    let mut roots = Vec::new();
    if steps == 0 {
        return roots;
    }

    let step = (t_max - t_min) / steps as f64;
    let mut prev_value = quartic.eval(t_min);

    for i in 1..=steps {
        let t = t_min + i as f64 * step;
        let value = quartic.eval(t);

        if prev_value * value <= 0.0 {
            let root = bisect(quartic, t - step, t);
            if quartic.eval(root).abs() < RESIDUAL_TOLERANCE {
                roots.push(root);
            }
        }

        prev_value = value;
    }

    roots
}

/// Shrink a sign-change bracket `[lo, hi]` towards the root.
fn bisect(quartic: &Quartic, mut lo: f64, mut hi: f64) -> f64 {
    let mut mid = (lo + hi) * 0.5;

    for _ in 0..BISECTION_ITERATIONS {
        mid = (lo + hi) * 0.5;
        let value = quartic.eval(mid);

        if value.abs() < CONVERGENCE_TOLERANCE {
            return mid;
        }

        if quartic.eval(lo) * value < 0.0 {
            hi = mid;
        } else {
            lo = mid;
        }
    }

    mid
}

/// All real roots of `quartic`, sorted ascending.
///
/// Degenerate leading coefficients fall back to the cubic/quadratic/linear
/// case.
pub fn solve_quartic(quartic: &Quartic) -> Vec<f64> {
    const EPS: f64 = 1e-12;

    let Quartic { a, b, c, d, e } = *quartic;
    if a.abs() < EPS {
        let mut roots = solve_cubic(b, c, d, e);
        sort_roots(&mut roots);
        return roots;
    }

    // Monic form, then depress with t = y - b/4
    let (b, c, d, e) = (b / a, c / a, d / a, e / a);
    let bb = b * b;
    let p = c - 3.0 * bb / 8.0;
    let q = d - b * c / 2.0 + bb * b / 8.0;
    let r = e - b * d / 4.0 + bb * c / 16.0 - 3.0 * bb * bb / 256.0;
    let shift = -b / 4.0;

    let mut roots = Vec::with_capacity(4);

    if q.abs() < EPS {
        // Biquadratic in y^2
        for z in solve_quadratic(1.0, p, r) {
            if z >= 0.0 {
                let s = z.sqrt();
                roots.push(s + shift);
                roots.push(-s + shift);
            }
        }
    } else {
        // 8m^3 + 8p m^2 + (2p^2 - 8r) m - q^2 = 0 always has a positive root
        // when q != 0, which splits the quartic into two quadratics.
        let m = solve_cubic(8.0, 8.0 * p, 2.0 * p * p - 8.0 * r, -q * q)
            .into_iter()
            .fold(f64::NEG_INFINITY, f64::max);
        if m <= 0.0 {
            return roots;
        }

        let s = (2.0 * m).sqrt();
        let k = q / (2.0 * s);
        for y in solve_quadratic(1.0, -s, p / 2.0 + m + k) {
            roots.push(y + shift);
        }
        for y in solve_quadratic(1.0, s, p / 2.0 + m - k) {
            roots.push(y + shift);
        }
    }

    sort_roots(&mut roots);
    roots
}

fn sort_roots(roots: &mut [f64]) {
    roots.sort_by(|x, y| x.partial_cmp(y).unwrap_or(std::cmp::Ordering::Equal));
}

/// Real roots of `a x^3 + b x^2 + c x + d`.
fn solve_cubic(a: f64, b: f64, c: f64, d: f64) -> Vec<f64> {
    const EPS: f64 = 1e-12;

    if a.abs() < EPS {
        return solve_quadratic(b, c, d);
    }

    let (b, c, d) = (b / a, c / a, d / a);
    let shift = -b / 3.0;
    let p = c - b * b / 3.0;
    let q = 2.0 * b * b * b / 27.0 - b * c / 3.0 + d;
    let disc = (q / 2.0).powi(2) + (p / 3.0).powi(3);

    if disc > EPS {
        let sqrt_disc = disc.sqrt();
        let u = (-q / 2.0 + sqrt_disc).cbrt();
        let v = (-q / 2.0 - sqrt_disc).cbrt();
        vec![u + v + shift]
    } else if disc.abs() <= EPS {
        let u = (-q / 2.0).cbrt();
        vec![2.0 * u + shift, -u + shift]
    } else {
        // Three distinct real roots
        let rho = (-p / 3.0).sqrt();
        let phi = (-q / (2.0 * rho * rho * rho)).clamp(-1.0, 1.0).acos();
        (0..3)
            .map(|k| {
                let angle = (phi + 2.0 * std::f64::consts::PI * k as f64) / 3.0;
                2.0 * rho * angle.cos() + shift
            })
            .collect()
    }
}

/// Real roots of `a x^2 + b x + c`.
fn solve_quadratic(a: f64, b: f64, c: f64) -> Vec<f64> {
    const EPS: f64 = 1e-12;

    if a.abs() < EPS {
        if b.abs() < EPS {
            return Vec::new();
        }
        return vec![-c / b];
    }

    let disc = b * b - 4.0 * a * c;
    if disc < 0.0 {
        return Vec::new();
    }

    // Avoid cancellation between -b and sqrt(disc)
    let sqrt_disc = disc.sqrt();
    let q = -0.5 * (b + b.signum() * sqrt_disc);
    if q == 0.0 {
        return vec![0.0, 0.0];
    }
    vec![q / a, c / q]
}

#[cfg(test)]
mod tests {
    use super::*;

    /// scale * (t - r1)(t - r2)(t - r3)(t - r4)
    ///
    /// The bracketing solver's tolerances are absolute, so test polynomials
    /// are scaled to keep |f'| near 1 at their roots, like the torus quartic.
    fn from_roots(r: [f64; 4], scale: f64) -> Quartic {
        let [r1, r2, r3, r4] = r;
        Quartic::new(
            scale,
            -scale * (r1 + r2 + r3 + r4),
            scale * (r1 * r2 + r1 * r3 + r1 * r4 + r2 * r3 + r2 * r4 + r3 * r4),
            -scale * (r1 * r2 * r3 + r1 * r2 * r4 + r1 * r3 * r4 + r2 * r3 * r4),
            scale * r1 * r2 * r3 * r4,
        )
    }

    fn assert_roots_near(found: &[f64], expected: &[f64], tol: f64) {
        assert_eq!(found.len(), expected.len(), "found {:?}, expected {:?}", found, expected);
        for (f, e) in found.iter().zip(expected) {
            assert!((f - e).abs() < tol, "found {:?}, expected {:?}", found, expected);
        }
    }

    #[test]
    fn test_eval() {
        let q = Quartic::new(1.0, 2.0, 3.0, 4.0, 5.0);
        assert_eq!(q.eval(0.0), 5.0);
        assert_eq!(q.eval(1.0), 15.0);
        assert_eq!(q.eval(2.0), 16.0 + 16.0 + 12.0 + 8.0 + 5.0);
    }

    #[test]
    fn test_bracketing_finds_simple_roots() {
        let q = from_roots([2.05, 3.13, 4.27, 5.41], 0.1);
        let roots = solve_quartic_on_interval(&q, 0.0, 20.0, 100);
        assert_roots_near(&roots, &[2.05, 3.13, 4.27, 5.41], 0.01);
    }

    #[test]
    fn test_bracketing_ignores_roots_outside_interval() {
        let q = from_roots([-3.0, 1.27, 4.13, 25.0], 1.0 / 400.0);
        let roots = solve_quartic_on_interval(&q, 0.0, 20.0, 100);
        assert_roots_near(&roots, &[1.27, 4.13], 0.01);
    }

    #[test]
    fn test_bracketing_rejects_steep_residuals() {
        // Same roots, but |f'| is in the hundreds: five bisections leave a
        // residual above tolerance and the roots are dropped.
        let q = from_roots([-3.0, 1.27, 4.13, 25.0], 1.0);
        assert!(solve_quartic_on_interval(&q, 0.0, 20.0, 100).is_empty());
    }

    #[test]
    fn test_bracketing_misses_tangent_root() {
        // (t - 3.1)^2 (t^2 + 1) touches zero without changing sign
        let q = Quartic::new(1.0, -6.2, 10.61, -6.2, 9.61);
        assert!(solve_quartic_on_interval(&q, 0.0, 20.0, 100).is_empty());
    }

    #[test]
    fn test_no_real_roots() {
        // t^4 + 1
        let q = Quartic::new(1.0, 0.0, 0.0, 0.0, 1.0);
        assert!(solve_quartic_on_interval(&q, 0.0, 20.0, 100).is_empty());
        assert!(solve_quartic(&q).is_empty());
    }

    #[test]
    fn test_zero_steps_finds_nothing() {
        let q = from_roots([1.1, 2.1, 3.1, 4.1], 1.0);
        assert!(solve_quartic_on_interval(&q, 0.0, 20.0, 0).is_empty());
    }

    #[test]
    fn test_ferrari_distinct_roots() {
        let expected = [-2.5, 0.75, 3.0, 9.25];
        let roots = solve_quartic(&from_roots(expected, 1.0));
        assert_roots_near(&roots, &expected, 1e-6);
    }

    #[test]
    fn test_ferrari_biquadratic() {
        // (t^2 - 1)(t^2 - 4)
        let q = Quartic::new(1.0, 0.0, -5.0, 0.0, 4.0);
        assert_roots_near(&solve_quartic(&q), &[-2.0, -1.0, 1.0, 2.0], 1e-9);
    }

    #[test]
    fn test_ferrari_scaled_leading_coefficient() {
        let q = from_roots([0.5, 1.5, 2.5, 3.5], 3.0);
        assert_roots_near(&solve_quartic(&q), &[0.5, 1.5, 2.5, 3.5], 1e-6);
    }

    #[test]
    fn test_solvers_agree_inside_interval() {
        let cases = [
            ([0.45, 2.25, 6.85, 11.9], 1.0 / 500.0),
            ([-1.0, 3.3, 3.9, 30.0], 1.0 / 80.0),
            ([5.5, 6.65, 17.25, 19.1], 1.0 / 300.0),
        ];

        for (roots, scale) in cases {
            let q = from_roots(roots, scale);
            let bracketed = solve_quartic_on_interval(&q, 0.0, 20.0, 100);
            let exact: Vec<f64> = solve_quartic(&q)
                .into_iter()
                .filter(|t| (0.0..=20.0).contains(t))
                .collect();
            assert_roots_near(&bracketed, &exact, 0.01);
        }
    }

    #[test]
    fn test_cubic_and_quadratic_fallbacks() {
        // Leading coefficient zero: (t - 1)(t - 2)(t - 3)
        let q = Quartic::new(0.0, 1.0, -6.0, 11.0, -6.0);
        assert_roots_near(&solve_quartic(&q), &[1.0, 2.0, 3.0], 1e-9);

        let mut quad = solve_quadratic(1.0, -3.0, 2.0);
        sort_roots(&mut quad);
        assert_roots_near(&quad, &[1.0, 2.0], 1e-12);
    }
}
