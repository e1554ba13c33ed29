/// Trait for fuzzy equality comparisons with floating point numbers.
///
/// Points produced by incremental rotation drift slightly from their exact positions, so
/// generated coordinates are compared against expected values with a tolerance (epsilon) rather
/// than exactly.
///
/// # Examples
///
/// ```
/// # use circle_strip::core::traits::*;
/// // x coordinate of (1, 0) rotated by a sixth of the circle
/// let x = std::f64::consts::FRAC_PI_3.cos();
/// assert_ne!(x, 0.5);
/// assert!(x.fuzzy_eq(0.5));
/// ```
pub trait FuzzyEq: Sized + Copy {
    /// Returns the default epsilon value for fuzzy comparisons.
    fn fuzzy_epsilon() -> Self;

    /// Returns `true` is this object is approximately equal to the other one, using
    /// a provided epsilon value.
    fn fuzzy_eq_eps(&self, other: Self, fuzzy_epsilon: Self) -> bool;

    /// Returns `true` is this object is approximately equal to the other one, using
    /// the implemented [FuzzyEq::fuzzy_epsilon] value.
    #[inline]
    fn fuzzy_eq(&self, other: Self) -> bool {
        self.fuzzy_eq_eps(other, Self::fuzzy_epsilon())
    }

    /// Returns `true` if this value is approximately equal to zero, using a provided epsilon
    /// value. Used for residuals such as `x² + y² - 1` of a generated point.
    fn fuzzy_eq_zero_eps(&self, fuzzy_epsilon: Self) -> bool;
}

macro_rules! impl_fuzzy_eq {
    ($ty:ty, $eps:expr) => {
        impl FuzzyEq for $ty {
            #[inline]
            fn fuzzy_epsilon() -> Self {
                $eps
            }
            #[inline]
            fn fuzzy_eq_eps(&self, other: Self, fuzzy_epsilon: Self) -> bool {
                (*self - other).abs() < fuzzy_epsilon
            }
            #[inline]
            fn fuzzy_eq_zero_eps(&self, fuzzy_epsilon: Self) -> bool {
                self.abs() < fuzzy_epsilon
            }
        }
    };
}

// single precision only carries ~7 significant digits
impl_fuzzy_eq!(f32, 1.0e-5);
impl_fuzzy_eq!(f64, 1.0e-8);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn epsilons() {
        assert!(1.0e-6f32.fuzzy_eq(0.0));
        assert!(!1.0e-4f32.fuzzy_eq(0.0));
        assert!(1.0e-9f64.fuzzy_eq(0.0));
        assert!(!1.0e-7f64.fuzzy_eq(0.0));
        assert!((-1.0e-10f64).fuzzy_eq_zero_eps(1e-9));
        assert!(!(-1.0e-8f64).fuzzy_eq_zero_eps(1e-9));
    }
}
