//! This module contains the C foreign function interface for circle_strip.
//!
//! All functions return an `i32` error code: 0 on success, -1 if a panic was caught, otherwise a
//! function specific code listed in the function docs. When a function specific code is returned
//! a message describing the failure is available from [circ_last_error_msg].
#![allow(non_camel_case_types)]
use circle_strip::{
    circle::{create_circle, CircleError, CircleOptions, CircleSymmetry},
    core::traits::Real,
};
use core::slice;
use std::{ffi::c_char, panic, ptr};

pub mod error_handling;

use error_handling::{clear_last_error, set_last_error, LAST_ERROR};

/// Helper macro to catch unwind and return -1 if panic was caught otherwise returns whatever the
/// expression returned.
macro_rules! ffi_catch_unwind {
    ($body: expr) => {
        match panic::catch_unwind(move || $body) {
            Ok(r) => r,
            Err(_) => -1,
        }
    };
}

/// FFI representation of [CircleOptions].
///
/// `symmetry` is 0 for [CircleSymmetry::Half] and 1 for [CircleSymmetry::Quarter].
#[repr(C)]
#[derive(Debug, Copy, Clone)]
pub struct circ_circle_o {
    pub clockwise: u8,
    pub symmetry: u32,
}

impl circ_circle_o {
    /// Convert FFI circle options type to internal type, `None` if `symmetry` is not a known
    /// value.
    pub fn to_internal(&self) -> Option<CircleOptions> {
        Some(CircleOptions {
            clockwise: self.clockwise != 0,
            symmetry: symmetry_from_u32(self.symmetry)?,
        })
    }
}

impl Default for circ_circle_o {
    fn default() -> Self {
        let d = CircleOptions::default();
        Self {
            clockwise: d.clockwise as u8,
            symmetry: symmetry_to_u32(d.symmetry),
        }
    }
}

fn symmetry_from_u32(i: u32) -> Option<CircleSymmetry> {
    match i {
        0 => Some(CircleSymmetry::Half),
        1 => Some(CircleSymmetry::Quarter),
        _ => None,
    }
}

fn symmetry_to_u32(symmetry: CircleSymmetry) -> u32 {
    match symmetry {
        CircleSymmetry::Half => 0,
        CircleSymmetry::Quarter => 1,
    }
}

/// Write default option values to a [circ_circle_o].
///
/// ## Specific Error Codes
/// * 1 = `options` is null.
///
/// # Safety
///
/// `options` must point to a valid place in memory to be written.
#[no_mangle]
#[must_use]
pub unsafe extern "C" fn circ_circle_o_init(options: *mut circ_circle_o) -> i32 {
    ffi_catch_unwind!({
        if options.is_null() {
            set_last_error("options is null", "circ_circle_o_init");
            return 1;
        }

        options.write(Default::default());
        0
    })
}

/// Shared implementation of the typed create circle functions.
///
/// # Safety
///
/// See [circ_create_circle_f64].
unsafe fn create_circle_ffi<T: Real>(
    fn_name: &str,
    count: u32,
    points_out: *mut T,
    points_len: usize,
    options: *const circ_circle_o,
) -> i32 {
    let report = || {
        format!(
            "{fn_name}(count: {count}, points_out: {points_out:p}, points_len: {points_len}, options: {options:p})"
        )
    };

    if points_out.is_null() {
        set_last_error("points_out is null".to_string(), report());
        return 1;
    }

    let ffi_options = options.as_ref().copied().unwrap_or_default();
    let Some(options) = ffi_options.to_internal() else {
        set_last_error(
            format!("unknown symmetry value {}", ffi_options.symmetry),
            report(),
        );
        return 4;
    };

    let points = slice::from_raw_parts_mut(points_out, points_len);
    match create_circle(count as usize, points, &options) {
        Ok(()) => 0,
        Err(err) => {
            set_last_error(err.to_string(), report());
            match err {
                CircleError::DegenerateCount => 2,
                CircleError::SizeMismatch { .. } | CircleError::CountOverflow { .. } => 3,
            }
        }
    }
}

/// Fill `points_out` with `count` double precision points on the unit circle in triangle strip
/// order, interleaved as `[x0, y0, x1, y1, ...]`. Wraps [create_circle].
///
/// `options` may be null, default options are used in that case (see [circ_circle_o_init]).
///
/// ## Specific Error Codes
/// * 1 = `points_out` is null.
/// * 2 = `count` is zero.
/// * 3 = `points_len` is not `2 * count`.
/// * 4 = `options` has an unknown `symmetry` value.
///
/// Nothing is written to `points_out` when an error code is returned.
///
/// # Safety
///
/// `points_out` must be null or point to a valid contiguous buffer of at least `points_len`
/// doubles that is not accessed by anything else for the duration of the call.
/// `options` must be null or point to a valid [circ_circle_o].
#[no_mangle]
#[must_use]
pub unsafe extern "C" fn circ_create_circle_f64(
    count: u32,
    points_out: *mut f64,
    points_len: usize,
    options: *const circ_circle_o,
) -> i32 {
    ffi_catch_unwind!(create_circle_ffi(
        "circ_create_circle_f64",
        count,
        points_out,
        points_len,
        options
    ))
}

/// Same as [circ_create_circle_f64] with single precision points.
///
/// ## Specific Error Codes
/// * 1 = `points_out` is null.
/// * 2 = `count` is zero.
/// * 3 = `points_len` is not `2 * count`.
/// * 4 = `options` has an unknown `symmetry` value.
///
/// # Safety
///
/// `points_out` must be null or point to a valid contiguous buffer of at least `points_len`
/// floats that is not accessed by anything else for the duration of the call.
/// `options` must be null or point to a valid [circ_circle_o].
#[no_mangle]
#[must_use]
pub unsafe extern "C" fn circ_create_circle_f32(
    count: u32,
    points_out: *mut f32,
    points_len: usize,
    options: *const circ_circle_o,
) -> i32 {
    ffi_catch_unwind!(create_circle_ffi(
        "circ_create_circle_f32",
        count,
        points_out,
        points_len,
        options
    ))
}

/// Returns the message of the last error set on the current thread, null if there is none.
///
/// The returned string is owned by the library and remains valid until another error is set or
/// [circ_clear_last_error] is called on the same thread.
#[no_mangle]
pub extern "C" fn circ_last_error_msg() -> *const c_char {
    LAST_ERROR.with(|last_error| {
        last_error
            .borrow()
            .as_ref()
            .map_or(ptr::null(), |e| e.error_msg.as_ptr())
    })
}

/// Returns the report (function called and inputs received) of the last error set on the current
/// thread, null if there is none. Same lifetime as [circ_last_error_msg].
#[no_mangle]
pub extern "C" fn circ_last_error_report() -> *const c_char {
    LAST_ERROR.with(|last_error| {
        last_error
            .borrow()
            .as_ref()
            .map_or(ptr::null(), |e| e.error_report_data.as_ptr())
    })
}

/// Clear the last error set on the current thread.
#[no_mangle]
pub extern "C" fn circ_clear_last_error() {
    clear_last_error();
}
