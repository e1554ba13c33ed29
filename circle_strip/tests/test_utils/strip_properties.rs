use circle_strip::{
    circle::{CircleOptions, CircleSymmetry, create_circle, iter_points},
    core::{
        math::{RotationStep, Vector2, triangle_signed_area2, vec2},
        traits::Real,
    },
};

/// Generate `count` points with the options given into a freshly allocated buffer.
pub fn generate<T: Real>(count: usize, clockwise: bool, symmetry: CircleSymmetry) -> Vec<T> {
    // unwritten values would fail the unit circle checks
    let mut points = vec![T::max_value(); 2 * count];
    let options = CircleOptions::new()
        .with_clockwise(clockwise)
        .with_symmetry(symmetry);
    create_circle(count, &mut points, &options).unwrap();
    points
}

/// Assert every triangle of the strip winds in the direction given. Triangle `i` is
/// `(v[i], v[i + 1], v[i + 2])`, odd triangles are flipped as the strip alternates order.
pub fn assert_strip_winding<T: Real>(points: &[T], clockwise: bool) {
    let vertexes: Vec<Vector2<T>> = iter_points(points).collect();
    for (i, tri) in vertexes.windows(3).enumerate() {
        let area = triangle_signed_area2(tri[0], tri[1], tri[2]);
        let area = if i % 2 == 1 { -area } else { area };
        let ok = if clockwise {
            area < T::zero()
        } else {
            area > T::zero()
        };
        assert!(
            ok,
            "triangle {i} of {} point strip has wrong winding (area {area:?}, clockwise {clockwise})",
            vertexes.len()
        );
    }
}

/// Assert no two points of the strip coincide, points on a circle of `count` points are at least
/// `2 * sin(PI / count)` apart.
pub fn assert_distinct_points(points: &[f64]) {
    let vertexes: Vec<Vector2<f64>> = iter_points(points).collect();
    let count = vertexes.len();
    if count < 2 {
        return;
    }

    let min_chord = 2.0 * (std::f64::consts::PI / count as f64).sin();
    for i in 0..count {
        for j in (i + 1)..count {
            let d = (vertexes[i] - vertexes[j]).length();
            assert!(
                d > 0.5 * min_chord,
                "points {i} and {j} of {count} coincide: {:?} {:?}",
                vertexes[i],
                vertexes[j]
            );
        }
    }
}

/// Seed point used for a point count (top for odd counts, right most for even counts).
pub fn seed_point(count: usize) -> Vector2<f64> {
    if count % 2 == 1 {
        vec2(0.0, 1.0)
    } else {
        vec2(1.0, 0.0)
    }
}

/// All points visited walking `count` rotation steps from the seed in the direction given, in
/// walk order.
pub fn walk_points(count: usize, clockwise: bool) -> Vec<Vector2<f64>> {
    let step = RotationStep::for_count(count, clockwise).unwrap();
    let mut p = seed_point(count);
    let mut result = Vec::with_capacity(count);
    for _ in 0..count {
        result.push(p);
        p = step.apply(p);
    }
    result
}
