//! Core/common math for walking points around the unit circle.
mod base_math;
mod rotation;
mod vector2;

pub use base_math::*;
pub use rotation::RotationStep;
pub use vector2::{Vector2, vec2};
