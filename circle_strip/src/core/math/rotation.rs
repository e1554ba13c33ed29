use super::{Vector2, angle_increment, vec2};
use crate::core::traits::Real;

/// Fixed angle rotation about the origin with its cosine and sine computed once up front.
///
/// Applying the step to a point `(x, y)` gives
///
/// ```text
/// x' =  cos(a) * x + sin(a) * y
/// y' = -sin(a) * x + cos(a) * y
/// ```
///
/// so a positive angle rotates clockwise. Repeated application walks a point around the circle
/// with a single trigonometric evaluation in total. There is no re-normalization, error grows
/// linearly with the number of steps applied.
///
/// # Examples
///
/// ```
/// # use circle_strip::core::math::*;
/// use std::f64::consts::FRAC_PI_2;
/// let step = RotationStep::new(FRAC_PI_2);
/// // quarter turn clockwise from the right most point lands at the bottom
/// assert!(step.apply(vec2(1.0, 0.0)).fuzzy_eq(vec2(0.0, -1.0)));
/// ```
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct RotationStep<T> {
    pub cos: T,
    pub sin: T,
}

impl<T> RotationStep<T>
where
    T: Real,
{
    /// Rotation step for `angle` in radians.
    #[inline]
    pub fn new(angle: T) -> Self {
        let (sin, cos) = angle.sin_cos();
        Self { cos, sin }
    }

    /// Rotation step dividing the full circle into `count` equal parts in the winding direction
    /// given. Returns `None` if `count` is zero.
    #[inline]
    pub fn for_count(count: usize, clockwise: bool) -> Option<Self> {
        angle_increment(count, clockwise).map(Self::new)
    }

    /// Returns the step rotating in the opposite direction.
    #[inline]
    pub fn inverse(&self) -> Self {
        Self {
            cos: self.cos,
            sin: -self.sin,
        }
    }

    /// Rotate `point` about the origin by this step.
    #[inline]
    pub fn apply(&self, point: Vector2<T>) -> Vector2<T> {
        // both components computed from the unmodified point
        vec2(
            self.cos * point.x + self.sin * point.y,
            -self.sin * point.x + self.cos * point.y,
        )
    }
}
