/// Macro used for test assertions, compares with [FuzzyEq](crate::core::traits::FuzzyEq) or
/// the inherent `fuzzy_eq` methods of [Vector2](crate::core::math::Vector2).
///
/// # Examples
///
/// ```
/// # use circle_strip::assert_fuzzy_eq;
/// # use circle_strip::core::math::vec2;
/// assert_fuzzy_eq!(0.1f64 + 0.2, 0.3);
/// assert_fuzzy_eq!(vec2(1.0f64, 0.0), vec2(1.0, 1e-3), 1e-2);
/// ```
#[macro_export]
macro_rules! assert_fuzzy_eq {
    ($left:expr, $right:expr) => {{
        match (&$left, &$right) {
            (left_val, right_val) => {
                #[allow(unused_imports)]
                use $crate::core::traits::FuzzyEq;
                if !(left_val.fuzzy_eq(*right_val)) {
                    panic!(
                        r#"assertion failed: `left.fuzzy_eq(right)`
  left: `{:?}`,
 right: `{:?}`"#,
                        &*left_val, &*right_val
                    )
                }
            }
        }
    }};
    ($left:expr, $right:expr, $eps:expr) => {{
        match (&$left, &$right, &$eps) {
            (left_val, right_val, eps_val) => {
                #[allow(unused_imports)]
                use $crate::core::traits::FuzzyEq;
                if !(left_val.fuzzy_eq_eps(*right_val, *eps_val)) {
                    panic!(
                        r#"assertion failed: `left.fuzzy_eq_eps(right, eps)`
  left: `{:?}`,
 right: `{:?}`
 eps: `{:?}`"#,
                        &*left_val, &*right_val, &*eps_val
                    )
                }
            }
        }
    }};
}
