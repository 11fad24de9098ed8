//! Smoothing for glam vectors.
//!
//! One scalar fraction per call, shared by every axis, so the smoothing
//! rate is uniform and results are component-wise identical to the scalar
//! functions in [`crate::scalar`].

use crate::blend::*;
use crate::math::{Vec2, Vec3};

/// Move `from` toward `to`, covering half the remaining distance every
/// `half_life` seconds.
#[inline]
pub fn smooth_half_life_vec3(from: Vec3, to: Vec3, half_life: f32, dt: f32) -> Vec3 {
    from.lerp(to, blend_half_life(half_life, dt))
}

/// Move `from` toward `to`, leaving `smoothing` of the distance after one
/// second.
#[inline]
pub fn smooth_factor_vec3(from: Vec3, to: Vec3, smoothing: f32, dt: f32) -> Vec3 {
    from.lerp(to, blend_factor(smoothing, dt))
}

/// Move `from` toward `to` with continuous decay rate `lambda` (1/s).
#[inline]
pub fn smooth_lambda_vec3(from: Vec3, to: Vec3, lambda: f32, dt: f32) -> Vec3 {
    from.lerp(to, blend_lambda(lambda, dt))
}

#[inline]
pub fn smooth_half_life_vec2(from: Vec2, to: Vec2, half_life: f32, dt: f32) -> Vec2 {
    from.lerp(to, blend_half_life(half_life, dt))
}

#[inline]
pub fn smooth_factor_vec2(from: Vec2, to: Vec2, smoothing: f32, dt: f32) -> Vec2 {
    from.lerp(to, blend_factor(smoothing, dt))
}

#[inline]
pub fn smooth_lambda_vec2(from: Vec2, to: Vec2, lambda: f32, dt: f32) -> Vec2 {
    from.lerp(to, blend_lambda(lambda, dt))
}
