//! Framerate-independent exponential smoothing.
//!
//! Classic `pos += (target - pos) * 0.1` chase code speeds up and slows down
//! with the frame rate. These helpers fold the elapsed time into the blend
//! fraction so the motion looks the same at 30 fps and 240 fps. Call one of
//! them once per frame and feed the result back in as the next `from`:
//!
//! ```
//! use dampen::prelude::*;
//!
//! let cam = smooth_half_life_vec2(Vec2::ZERO, vec2(4., 2.), 0.25, 1. / 60.);
//! assert!(cam.x > 0. && cam.x < 4.);
//! ```
//!
//! Three ways to say how fast: a half-life in seconds, a per-second
//! smoothing factor, or a decay rate. All three reduce to the same lerp,
//! just parameterized differently. Nothing is clamped or validated; feeding
//! in a negative half-life or a smoothing factor outside (0, 1) gives you
//! the raw floating-point consequences.

pub mod blend;
pub mod math;
pub mod scalar;
pub mod vector;

pub mod prelude {
    pub use crate::blend::*;
    pub use crate::math::*;
    pub use crate::scalar::*;
    pub use crate::vector::*;
}
