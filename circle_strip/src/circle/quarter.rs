use super::{
    CircleError, CircleOptions, CircleSymmetry,
    half::{write_odd_strip, write_right_seeded_pairs},
    points::{StripWriter, prepare},
};
use crate::core::{
    math::{is_odd, vec2},
    traits::Real,
};
use log::trace;

/// Generate `count` points on the unit circle in triangle strip order, rotating through only a
/// quarter of the circle.
///
/// Output is the same as [create_circle_half](super::create_circle_half) (same order, same values
/// within floating point tolerance) with the same buffer requirements. Only `options.clockwise`
/// is used.
///
/// For even `count` the points of the lower right quarter are rotated into place, the left half
/// is then filled by walking back over the rotated points already written and flipping their
/// signs. The flipped points are exact copies of rotated points so they carry no extra error.
/// Odd `count` has no second mirror axis and is generated the same way as the half symmetry.
///
/// # Examples
///
/// ```
/// # use circle_strip::circle::*;
/// let mut half = [0.0f64; 2 * 12];
/// let mut quarter = [0.0f64; 2 * 12];
/// let options = CircleOptions::new();
/// create_circle_half(12, &mut half, &options).unwrap();
/// create_circle_quarter(12, &mut quarter, &options).unwrap();
/// for (h, q) in iter_points(&half).zip(iter_points(&quarter)) {
///     assert!(h.fuzzy_eq(q));
/// }
/// ```
pub fn create_circle_quarter<T>(
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
        // rotated points land at odd indexes 1, 3, 5, ... (each followed by its mirror), the
        // last one at index `half_count - 1` is the bottom pole when `half_count` is even
        write_right_seeded_pairs(&mut writer, step, half_count / 2);

        let mirror_steps = if is_odd(half_count) {
            (half_count - 1) / 2
        } else {
            (half_count - 2) / 2
        };

        if mirror_steps > 0 {
            // half_count - 2 when odd, half_count - 3 when even (skips the pole)
            let first_read = 2 * mirror_steps - 1;
            debug_assert!(first_read < writer.written());
            for i in 0..mirror_steps {
                let read_cursor = first_read - 2 * i;
                debug_assert!(is_odd(read_cursor), "read cursor must be on a rotated point");
                let p = writer.point(read_cursor);
                writer.push_pair(p.mirror_x(), -p);
            }
        }

        writer.push(vec2(-T::one(), T::zero()));
    }

    writer.finish();
    trace!(
        "generated {count} circle points from {} rotation steps (quarter symmetry)",
        CircleSymmetry::Quarter.rotation_steps(count)
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::circle::create_circle_half;

    fn assert_matches_half(count: usize, clockwise: bool) {
        let options = CircleOptions::new().with_clockwise(clockwise);
        let mut half = vec![0.0f64; 2 * count];
        let mut quarter = vec![f64::NAN; 2 * count];
        create_circle_half(count, &mut half, &options).unwrap();
        create_circle_quarter(count, &mut quarter, &options).unwrap();
        for (i, (h, q)) in half.iter().zip(&quarter).enumerate() {
            assert!(
                (h - q).abs() < 1e-12,
                "count {count} value {i}: half {h} quarter {q}"
            );
        }
    }

    #[test]
    fn small_even_counts() {
        for count in [2, 4, 6, 8, 10, 12, 14] {
            assert_matches_half(count, true);
            assert_matches_half(count, false);
        }
    }

    #[test]
    fn odd_counts_are_exact() {
        for count in [1, 3, 5, 7] {
            let options = CircleOptions::new();
            let mut half = vec![0.0f32; 2 * count];
            let mut quarter = vec![0.0f32; 2 * count];
            create_circle_half(count, &mut half, &options).unwrap();
            create_circle_quarter(count, &mut quarter, &options).unwrap();
            assert_eq!(half, quarter);
        }
    }

    #[test]
    fn eight_points_reflected() {
        let mut points = [0.0f64; 16];
        create_circle_quarter(8, &mut points, &CircleOptions::new()).unwrap();
        let r = std::f64::consts::FRAC_1_SQRT_2;
        // 5 and 6 are sign flips of 1
        let expected = [
            1.0, 0.0, r, -r, r, r, 0.0, -1.0, 0.0, 1.0, -r, -r, -r, r, -1.0, 0.0,
        ];
        for (v, e) in points.iter().zip(expected) {
            assert!((v - e).abs() < 1e-12, "{points:?}");
        }
        assert_eq!(points[10], -points[2]);
        assert_eq!(points[11], points[3]);
        assert_eq!(points[12], -points[2]);
        assert_eq!(points[13], -points[3]);
    }
}
