//! Reading and writing the interleaved `[x0, y0, x1, y1, ...]` point buffer.

use super::CircleError;
use crate::core::{
    math::{RotationStep, Vector2, vec2},
    traits::Real,
};
use log::debug;

/// Number of points held by the interleaved `points` buffer (a trailing odd value is ignored).
#[inline]
pub fn point_count<T>(points: &[T]) -> usize {
    points.len() / 2
}

/// Iterate the interleaved `points` buffer as [Vector2] points without allocating.
///
/// # Examples
///
/// ```
/// # use circle_strip::circle::*;
/// # use circle_strip::core::math::vec2;
/// let buffer = [1.0, 0.0, -1.0, 0.0];
/// let points: Vec<_> = iter_points(&buffer).collect();
/// assert_eq!(points, vec![vec2(1.0, 0.0), vec2(-1.0, 0.0)]);
/// ```
#[inline]
pub fn iter_points<T>(points: &[T]) -> impl DoubleEndedIterator<Item = Vector2<T>> + '_
where
    T: Real,
{
    points.chunks_exact(2).map(|xy| vec2(xy[0], xy[1]))
}

/// Largest deviation `|x² + y² - 1|` of any point in `points` from the unit circle, zero if
/// `points` is empty.
///
/// Useful for measuring the drift accumulated by incremental rotation at large point counts.
///
/// # Examples
///
/// ```
/// # use circle_strip::circle::*;
/// let mut buffer = vec![0.0f64; 2 * 1000];
/// create_circle(1000, &mut buffer, &CircleOptions::default()).unwrap();
/// assert!(max_radius_error(&buffer) < 1e-12);
/// ```
pub fn max_radius_error<T>(points: &[T]) -> T
where
    T: Real,
{
    iter_points(points)
        .map(|p| (p.length_squared() - T::one()).abs())
        .fold(T::zero(), |acc, e| if e > acc { e } else { acc })
}

/// Validate the point count against the output length and compute the rotation step for the
/// winding direction.
pub(super) fn prepare<T>(
    count: usize,
    output_len: usize,
    clockwise: bool,
) -> Result<RotationStep<T>, CircleError>
where
    T: Real,
{
    if count == 0 {
        debug!("rejecting circle with zero points");
        return Err(CircleError::DegenerateCount);
    }

    let expected = count.checked_mul(2).ok_or_else(|| {
        debug!("rejecting circle point count {count}, buffer length overflows");
        CircleError::CountOverflow { count }
    })?;

    if output_len != expected {
        debug!("rejecting circle output buffer of length {output_len}, expected {expected}");
        return Err(CircleError::SizeMismatch {
            expected,
            actual: output_len,
        });
    }

    RotationStep::for_count(count, clockwise).ok_or(CircleError::DegenerateCount)
}

/// Forward write cursor over the interleaved output buffer, indexes are in points (not values).
pub(super) struct StripWriter<'a, T> {
    buffer: &'a mut [T],
    write_index: usize,
}

impl<'a, T> StripWriter<'a, T>
where
    T: Real,
{
    pub fn new(buffer: &'a mut [T]) -> Self {
        Self {
            buffer,
            write_index: 0,
        }
    }

    /// Number of points written so far.
    #[inline]
    pub fn written(&self) -> usize {
        self.write_index
    }

    #[inline]
    pub fn push(&mut self, point: Vector2<T>) {
        let i = 2 * self.write_index;
        self.buffer[i] = point.x;
        self.buffer[i + 1] = point.y;
        self.write_index += 1;
    }

    /// Push `point` followed by `mirror`.
    #[inline]
    pub fn push_pair(&mut self, point: Vector2<T>, mirror: Vector2<T>) {
        self.push(point);
        self.push(mirror);
    }

    /// Read back an already written point.
    #[inline]
    pub fn point(&self, index: usize) -> Vector2<T> {
        debug_assert!(index < self.write_index, "reading unwritten point {index}");
        vec2(self.buffer[2 * index], self.buffer[2 * index + 1])
    }

    /// Finish writing, every value in the buffer must have been written exactly once.
    #[inline]
    pub fn finish(self) {
        debug_assert_eq!(
            2 * self.write_index,
            self.buffer.len(),
            "circle strip write index does not match the output length"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prepare_rejects_bad_input() {
        assert_eq!(
            prepare::<f64>(0, 0, true).unwrap_err(),
            CircleError::DegenerateCount
        );
        assert_eq!(
            prepare::<f64>(3, 4, true).unwrap_err(),
            CircleError::SizeMismatch {
                expected: 6,
                actual: 4
            }
        );
        assert_eq!(
            prepare::<f32>(usize::MAX, 0, true).unwrap_err(),
            CircleError::CountOverflow { count: usize::MAX }
        );
        assert!(prepare::<f32>(3, 6, false).is_ok());
    }

    #[test]
    fn writer_tracks_points() {
        let mut buffer = [0.0f64; 6];
        let mut writer = StripWriter::new(&mut buffer);
        writer.push(vec2(1.0, 2.0));
        writer.push_pair(vec2(3.0, 4.0), vec2(-3.0, 4.0));
        assert_eq!(writer.written(), 3);
        assert_eq!(writer.point(1), vec2(3.0, 4.0));
        writer.finish();
        assert_eq!(buffer, [1.0, 2.0, 3.0, 4.0, -3.0, 4.0]);
    }

    #[test]
    fn radius_error_of_points() {
        let buffer = [1.0f64, 0.0, 0.0, 2.0, 0.5, 0.0];
        assert_eq!(point_count(&buffer), 3);
        // (0, 2) is furthest off the unit circle
        assert_eq!(max_radius_error(&buffer), 3.0);
        assert_eq!(max_radius_error::<f64>(&[]), 0.0);
    }
}
