use super::FuzzyEq;

/// Trait representing a floating point real number (`f32` or `f64`) that circle points can be
/// generated with.
///
/// Integral types do not implement [num_traits::real::Real] so they are rejected at compile time.
pub trait Real:
    num_traits::real::Real + FuzzyEq + std::default::Default + std::fmt::Debug + 'static
{
    /// Full turn in radians (2π).
    fn tau() -> Self;

    /// Convert a point count to this type, `None` if it cannot be represented.
    #[inline]
    fn from_count(count: usize) -> Option<Self> {
        Self::from(count)
    }
}

impl Real for f32 {
    #[inline]
    fn tau() -> Self {
        std::f32::consts::TAU
    }
}

impl Real for f64 {
    #[inline]
    fn tau() -> Self {
        std::f64::consts::TAU
    }
}
