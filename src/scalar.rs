//! Smoothing for plain `f32` values.

use crate::blend::*;
use crate::math::lerp;

/// Move `from` toward `to`, covering half the remaining distance every
/// `half_life` seconds.
#[inline]
pub fn smooth_half_life(from: f32, to: f32, half_life: f32, dt: f32) -> f32 {
    lerp(from, to, blend_half_life(half_life, dt))
}

/// Move `from` toward `to`, leaving `smoothing` of the distance after one
/// second. A factor of 0.1 closes 90% of the gap each second.
#[inline]
pub fn smooth_factor(from: f32, to: f32, smoothing: f32, dt: f32) -> f32 {
    lerp(from, to, blend_factor(smoothing, dt))
}

/// Move `from` toward `to` with continuous decay rate `lambda` (1/s).
#[inline]
pub fn smooth_lambda(from: f32, to: f32, lambda: f32, dt: f32) -> f32 {
    lerp(from, to, blend_lambda(lambda, dt))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn no_time_no_movement() {
        assert_eq!(smooth_half_life(3., 8., 0.5, 0.), 3.);
        assert_eq!(smooth_factor(3., 8., 0.25, 0.), 3.);
        assert_eq!(smooth_lambda(3., 8., 2., 0.), 3.);
    }

    #[test]
    fn half_life_halves_the_gap() {
        assert_relative_eq!(smooth_half_life(0., 10., 1., 1.), 5., epsilon = 1e-5);
        assert_relative_eq!(smooth_half_life(0., 10., 1., 2.), 7.5, epsilon = 1e-5);
    }

    #[test]
    fn zero_half_life_snaps_to_target() {
        assert_eq!(smooth_half_life(2., 10., 0., 0.016), 10.);
    }

    #[test]
    fn factor_leaves_that_fraction_after_one_second() {
        let out = smooth_factor(0., 10., 0.1, 1.);
        assert_relative_eq!(10. - out, 0.1 * 10., max_relative = 1e-5);
    }

    #[test]
    fn factor_of_one_never_moves() {
        assert_eq!(smooth_factor(-4., 9., 1., 100.), -4.);
    }

    #[test]
    fn lambda_matches_the_exponential() {
        let out = smooth_lambda(0., 1., 1., 1.);
        assert_relative_eq!(out, 1. - (-1_f32).exp(), max_relative = 1e-6);
    }

    #[test]
    fn lambda_converges_for_large_dt() {
        assert!((smooth_lambda(0., 1., 1., 50.) - 1.).abs() < 1e-6);
    }

    #[test]
    fn zero_lambda_never_moves() {
        assert_eq!(smooth_lambda(5., -5., 0., 10.), 5.);
    }

    #[test]
    fn convergence_is_monotonic_in_dt() {
        let mut last_half = f32::INFINITY;
        let mut last_lambda = f32::INFINITY;
        for i in 1..60 {
            let dt = i as f32 * 0.1;
            let half = (smooth_half_life(0., 1., 0.4, dt) - 1.).abs();
            let lambda = (smooth_lambda(0., 1., 1.7, dt) - 1.).abs();
            assert!(half < last_half, "dt={dt}");
            assert!(lambda < last_lambda, "dt={dt}");
            last_half = half;
            last_lambda = lambda;
        }
    }
}
