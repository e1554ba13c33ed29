#![allow(dead_code)]
mod strip_properties;

pub use strip_properties::*;
