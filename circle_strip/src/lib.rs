//! Generates the points of a unit circle in triangle strip order for rendering discs and circular
//! polygons, using one sine/cosine evaluation and the mirror symmetry of the circle.
//!
//! # Examples
//!
//! ```
//! use circle_strip::circle::{CircleOptions, CircleSymmetry, create_circle, iter_points};
//!
//! let count = 16;
//! let mut points = vec![0.0f32; 2 * count];
//! let options = CircleOptions::new()
//!     .with_clockwise(false)
//!     .with_symmetry(CircleSymmetry::Quarter);
//! create_circle(count, &mut points, &options).unwrap();
//!
//! // scale and move the unit circle to radius 3 around (10, 5)
//! let disc: Vec<_> = iter_points(&points)
//!     .map(|p| (10.0 + 3.0 * p.x, 5.0 + 3.0 * p.y))
//!     .collect();
//! assert_eq!(disc[0], (13.0, 5.0));
//! ```
#[macro_use]
mod macros;

pub mod circle;
pub mod core;

pub use crate::circle::{CircleError, CircleOptions, CircleSymmetry, create_circle};
