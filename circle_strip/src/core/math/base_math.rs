use super::Vector2;
use crate::core::traits::Real;

/// Returns `true` if `count` is odd.
///
/// # Examples
///
/// ```
/// # use circle_strip::core::math::*;
/// assert!(is_odd(5));
/// assert!(!is_odd(4));
/// assert!(!is_odd(0));
/// ```
#[inline]
pub fn is_odd(count: usize) -> bool {
    count % 2 == 1
}

/// Returns the signed angle step between consecutive points when dividing the full circle into
/// `count` equal parts.
///
/// The step is positive when `clockwise` is true (see [RotationStep](super::RotationStep) for
/// the rotation direction convention). Returns `None` if `count` is zero or cannot be converted
/// to `T`.
///
/// # Examples
///
/// ```
/// # use circle_strip::core::math::*;
/// # use circle_strip::core::traits::*;
/// use std::f64::consts::FRAC_PI_2;
/// assert!(angle_increment::<f64>(4, true).unwrap().fuzzy_eq(FRAC_PI_2));
/// assert!(angle_increment::<f64>(4, false).unwrap().fuzzy_eq(-FRAC_PI_2));
/// assert!(angle_increment::<f64>(0, true).is_none());
/// ```
#[inline]
pub fn angle_increment<T>(count: usize, clockwise: bool) -> Option<T>
where
    T: Real,
{
    if count == 0 {
        return None;
    }

    let n = T::from_count(count)?;
    let step = T::tau() / n;
    Some(if clockwise { step } else { -step })
}

/// Signed area of the parallelogram spanned by the triangle `p0`, `p1`, `p2` (twice the triangle
/// area). Negative for clockwise ordered triangles and positive for counter clockwise ordered
/// triangles.
///
/// # Examples
///
/// ```
/// # use circle_strip::core::math::*;
/// let ccw = triangle_signed_area2(vec2(0.0, 0.0), vec2(1.0, 0.0), vec2(0.0, 1.0));
/// assert!(ccw > 0.0);
/// let cw = triangle_signed_area2(vec2(0.0, 0.0), vec2(0.0, 1.0), vec2(1.0, 0.0));
/// assert!(cw < 0.0);
/// ```
#[inline]
pub fn triangle_signed_area2<T>(p0: Vector2<T>, p1: Vector2<T>, p2: Vector2<T>) -> T
where
    T: Real,
{
    (p1 - p0).perp_dot(p2 - p0)
}
