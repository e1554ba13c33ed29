use super::{
    CircleError, CircleOptions,
    points::{StripWriter, prepare},
};
use crate::core::{
    math::{RotationStep, is_odd, vec2},
    traits::Real,
};
use log::trace;

/// Generate `count` points on the unit circle (radius 1, centered at the origin) in triangle
/// strip order, rotating through half of the circle and mirroring each rotated point into the
/// other half.
///
/// `points_out` receives the points interleaved as `[x0, y0, x1, y1, ...]` and must have a length
/// of exactly `2 * count`. Only `options.clockwise` is used, `options.symmetry` is ignored.
///
/// * Odd `count`: starts at the top `(0, 1)`, each rotated point is followed by its mirror across
///   the vertical axis `(-x, y)`.
/// * Even `count`: starts at the right most point `(1, 0)`, each rotated point is followed by its
///   mirror across the horizontal axis `(x, -y)`, and the strip ends at the left most point
///   `(-1, 0)`.
///
/// Nothing is written if an error is returned.
///
/// # Examples
///
/// ```
/// # use circle_strip::circle::*;
/// # use circle_strip::core::math::vec2;
/// let mut points = [0.0f64; 8];
/// create_circle_half(4, &mut points, &CircleOptions::new()).unwrap();
/// let expected = [vec2(1.0, 0.0), vec2(0.0, -1.0), vec2(0.0, 1.0), vec2(-1.0, 0.0)];
/// for (p, e) in iter_points(&points).zip(expected) {
///     assert!(p.fuzzy_eq(e));
/// }
///
/// assert_eq!(
///     create_circle_half(0, &mut [0.0f64; 0], &CircleOptions::new()),
///     Err(CircleError::DegenerateCount)
/// );
/// ```
pub fn create_circle_half<T>(
    count: usize,
    points_out: &mut [T],
    options: &CircleOptions,
) -> Result<(), CircleError>
where
    T: Real,
{
    let step = prepare(count, points_out.len(), options.clockwise)?;
    let mut writer = StripWriter::new(points_out);
    let half_count = count / 2;

    if is_odd(count) {
        write_odd_strip(&mut writer, step, half_count);
    } else {
        write_right_seeded_pairs(&mut writer, step, half_count - 1);
        writer.push(vec2(-T::one(), T::zero()));
    }

    writer.finish();
    trace!(
        "generated {count} circle points from {} rotation steps (half symmetry)",
        super::CircleSymmetry::Half.rotation_steps(count)
    );
    Ok(())
}

/// Odd point count strip: top seed followed by `half_count` rotated points, each followed by its
/// mirror across the vertical axis. Shared by both symmetries since odd counts only have the one
/// mirror axis through the seed.
pub(super) fn write_odd_strip<T>(
    writer: &mut StripWriter<'_, T>,
    step: RotationStep<T>,
    half_count: usize,
) where
    T: Real,
{
    let seed = vec2(T::zero(), T::one());
    writer.push(seed);

    let mut point = seed;
    for _ in 0..half_count {
        point = step.apply(point);
        writer.push_pair(point, point.mirror_x());
    }
}

/// Right most seed followed by `steps` rotated points, each followed by its mirror across the
/// horizontal axis.
pub(super) fn write_right_seeded_pairs<T>(
    writer: &mut StripWriter<'_, T>,
    step: RotationStep<T>,
    steps: usize,
) where
    T: Real,
{
    let seed = vec2(T::one(), T::zero());
    writer.push(seed);

    let mut point = seed;
    for _ in 0..steps {
        point = step.apply(point);
        writer.push_pair(point, point.mirror_y());
    }
}
