//! Unit circle point generation in triangle strip order.
//!
//! The generators fill a caller owned buffer with `count` interleaved `(x, y)` points on the
//! circle of radius 1 centered at the origin. Only one sine/cosine pair is evaluated per call, the
//! points are produced by repeatedly rotating a seed point by a fixed angle and mirroring rotated
//! points across the axes of symmetry of the circle.
//!
//! The resulting order zig-zags across the circle so that any three consecutive points form a
//! triangle, every triangle of the strip having the winding direction requested. Scale and
//! translate the points afterwards for other radii or centers.
mod circle_types;
mod half;
mod points;
mod quarter;

pub use circle_types::*;
pub use half::create_circle_half;
pub use points::{iter_points, max_radius_error, point_count};
pub use quarter::create_circle_quarter;

use crate::core::traits::Real;

/// Generate `count` unit circle points into `points_out` using the symmetry and winding given by
/// `options`. See [create_circle_half] and [create_circle_quarter].
///
/// `points_out` must have a length of exactly `2 * count`, `count` must be at least 1.
///
/// # Examples
///
/// ```
/// # use circle_strip::circle::*;
/// let mut points = vec![0.0f32; 2 * 5];
/// create_circle(5, &mut points, &CircleOptions::default()).unwrap();
/// assert_eq!(&points[..2], &[0.0, 1.0]);
/// assert!(max_radius_error(&points) < 1e-5);
///
/// let err = create_circle(5, &mut points[..8], &CircleOptions::default()).unwrap_err();
/// assert_eq!(err, CircleError::SizeMismatch { expected: 10, actual: 8 });
/// ```
#[inline]
pub fn create_circle<T>(
    count: usize,
    points_out: &mut [T],
    options: &CircleOptions,
) -> Result<(), CircleError>
where
    T: Real,
{
    match options.symmetry {
        CircleSymmetry::Half => create_circle_half(count, points_out, options),
        CircleSymmetry::Quarter => create_circle_quarter(count, points_out, options),
    }
}
