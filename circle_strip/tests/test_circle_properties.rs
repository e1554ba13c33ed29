mod test_utils;

use circle_strip::{
    assert_fuzzy_eq,
    circle::{CircleSymmetry, iter_points, max_radius_error},
    core::math::Vector2,
};
use test_utils::{assert_distinct_points, assert_strip_winding, generate, walk_points};

const MAX_EXHAUSTIVE_COUNT: usize = 64;

#[test]
fn points_on_unit_circle() {
    for count in 1..=MAX_EXHAUSTIVE_COUNT {
        for clockwise in [true, false] {
            for symmetry in [CircleSymmetry::Half, CircleSymmetry::Quarter] {
                let points = generate::<f64>(count, clockwise, symmetry);
                assert!(max_radius_error(&points) < 1e-12, "count {count}");
                let points = generate::<f32>(count, clockwise, symmetry);
                assert!(max_radius_error(&points) < 1e-5, "count {count}");
            }
        }
    }
}

#[test]
fn half_and_quarter_match() {
    for count in 1..=MAX_EXHAUSTIVE_COUNT {
        for clockwise in [true, false] {
            let half = generate::<f64>(count, clockwise, CircleSymmetry::Half);
            let quarter = generate::<f64>(count, clockwise, CircleSymmetry::Quarter);
            assert_eq!(half.len(), quarter.len());
            for (h, q) in half.iter().zip(&quarter) {
                assert_fuzzy_eq!(*h, *q, 1e-12);
            }

            let half = generate::<f32>(count, clockwise, CircleSymmetry::Half);
            let quarter = generate::<f32>(count, clockwise, CircleSymmetry::Quarter);
            for (h, q) in half.iter().zip(&quarter) {
                assert_fuzzy_eq!(*h, *q, 1e-4);
            }
        }
    }
}

#[test]
fn strips_wind_consistently() {
    for count in 3..=MAX_EXHAUSTIVE_COUNT {
        for clockwise in [true, false] {
            for symmetry in [CircleSymmetry::Half, CircleSymmetry::Quarter] {
                let points = generate::<f64>(count, clockwise, symmetry);
                assert_strip_winding(&points, clockwise);
            }
        }
    }
}

#[test]
fn points_are_distinct() {
    for count in 1..=MAX_EXHAUSTIVE_COUNT {
        for symmetry in [CircleSymmetry::Half, CircleSymmetry::Quarter] {
            assert_distinct_points(&generate::<f64>(count, true, symmetry));
        }
    }
}

#[test]
fn strip_visits_every_rotation_position() {
    for count in 1..=MAX_EXHAUSTIVE_COUNT {
        for clockwise in [true, false] {
            let walk = walk_points(count, clockwise);
            let points = generate::<f64>(count, clockwise, CircleSymmetry::Quarter);
            for p in iter_points(&points) {
                assert!(
                    walk.iter().any(|w| w.fuzzy_eq_eps(p, 1e-9)),
                    "count {count}: {p:?} is not a rotation of the seed"
                );
            }
        }
    }
}

#[test]
fn reversed_winding_reverses_traversal() {
    for count in 1..=MAX_EXHAUSTIVE_COUNT {
        let cw = walk_points(count, true);
        let ccw = walk_points(count, false);
        for k in 0..count {
            assert!(cw[k].fuzzy_eq_eps(ccw[(count - k) % count], 1e-9));
        }

        // in the strip the counter clockwise points are the clockwise points reflected across the
        // axis through the seed
        let mirror = |p: Vector2<f64>| {
            if count % 2 == 1 {
                p.mirror_x()
            } else {
                p.mirror_y()
            }
        };
        for symmetry in [CircleSymmetry::Half, CircleSymmetry::Quarter] {
            let cw = generate::<f64>(count, true, symmetry);
            let ccw = generate::<f64>(count, false, symmetry);
            for (a, b) in iter_points(&cw).zip(iter_points(&ccw)) {
                assert_fuzzy_eq!(mirror(a), b);
            }
        }
    }
}

#[test]
fn rotation_steps_count() {
    assert_eq!(CircleSymmetry::Half.rotation_steps(1), 0);
    assert_eq!(CircleSymmetry::Quarter.rotation_steps(1), 0);
    assert_eq!(CircleSymmetry::Half.rotation_steps(2), 0);
    assert_eq!(CircleSymmetry::Quarter.rotation_steps(2), 0);
    assert_eq!(CircleSymmetry::Half.rotation_steps(1000), 499);
    assert_eq!(CircleSymmetry::Quarter.rotation_steps(1000), 250);
    for count in 1..=MAX_EXHAUSTIVE_COUNT {
        assert!(
            CircleSymmetry::Quarter.rotation_steps(count)
                <= CircleSymmetry::Half.rotation_steps(count)
        );
    }
}
