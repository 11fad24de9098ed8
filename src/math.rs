// Re-export the glam types the smoothing functions are written against
pub use glam::{vec2, vec3, Vec2, Vec3};

/// Unclamped linear interpolation. `t` outside [0, 1] extrapolates.
#[inline]
pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + t * (b - a)
}
