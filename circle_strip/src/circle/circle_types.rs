//! Supporting public types used by the circle generators.

use crate::core::math::is_odd;
use thiserror::Error;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Which mirror symmetry of the circle is exploited to avoid rotation steps.
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(rename_all = "camelCase")
)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CircleSymmetry {
    /// Rotate through half the circle, mirror every rotated point into the other half.
    Half,
    /// Rotate through a quarter of the circle, fill the rest by sign flips of points already
    /// written. Same output as [CircleSymmetry::Half] for odd point counts.
    #[default]
    Quarter,
}

impl CircleSymmetry {
    /// Number of rotation steps (applications of the rotation primitive) performed to generate
    /// `count` points.
    ///
    /// # Examples
    ///
    /// ```
    /// # use circle_strip::circle::CircleSymmetry;
    /// assert_eq!(CircleSymmetry::Half.rotation_steps(16), 7);
    /// assert_eq!(CircleSymmetry::Quarter.rotation_steps(16), 4);
    /// // odd counts have no quarter symmetry to exploit
    /// assert_eq!(CircleSymmetry::Half.rotation_steps(9), 4);
    /// assert_eq!(CircleSymmetry::Quarter.rotation_steps(9), 4);
    /// ```
    pub fn rotation_steps(&self, count: usize) -> usize {
        let half_count = count / 2;
        if is_odd(count) {
            return half_count;
        }

        match self {
            CircleSymmetry::Half => half_count.saturating_sub(1),
            CircleSymmetry::Quarter => half_count / 2,
        }
    }
}

/// Struct to hold options parameters when generating circle points.
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(rename_all = "camelCase")
)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CircleOptions {
    /// If true the points are generated walking clockwise around the circle, otherwise counter
    /// clockwise. Decides the winding of every triangle in the strip.
    pub clockwise: bool,
    /// Symmetry exploited by [create_circle](super::create_circle). Does not change the output
    /// beyond floating point tolerance.
    pub symmetry: CircleSymmetry,
}

impl CircleOptions {
    #[inline]
    pub fn new() -> Self {
        Self {
            clockwise: true,
            symmetry: CircleSymmetry::default(),
        }
    }

    /// Same options with the winding direction given.
    #[inline]
    pub fn with_clockwise(mut self, clockwise: bool) -> Self {
        self.clockwise = clockwise;
        self
    }

    /// Same options with the symmetry given.
    #[inline]
    pub fn with_symmetry(mut self, symmetry: CircleSymmetry) -> Self {
        self.symmetry = symmetry;
        self
    }
}

impl Default for CircleOptions {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

/// Errors returned when circle points cannot be generated. Nothing is written to the output
/// buffer when an error is returned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CircleError {
    /// Point count of zero was given.
    #[error("point count must be at least 1")]
    DegenerateCount,
    /// Output buffer length is not twice the point count.
    #[error("output buffer holds {actual} values but {expected} are required")]
    SizeMismatch { expected: usize, actual: usize },
    /// Twice the point count does not fit in `usize`.
    #[error("point count {count} is too large to address its output buffer")]
    CountOverflow { count: usize },
}
