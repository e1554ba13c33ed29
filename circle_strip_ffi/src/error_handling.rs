use std::{cell::RefCell, ffi::CString};

/// Holds last error information data.
pub struct LastErrorData {
    /// Human readable error message.
    pub error_msg: CString,
    /// Data associated with the last error that occurred, has the function called and the inputs
    /// received.
    pub error_report_data: CString,
}

impl LastErrorData {
    pub fn new(error_msg: CString, error_report_data: CString) -> Self {
        LastErrorData {
            error_msg,
            error_report_data,
        }
    }
}

// Storage for last error set
thread_local!(pub static LAST_ERROR: RefCell<Option<LastErrorData>> = const { RefCell::new(None) });

fn to_c_string<T: Into<Vec<u8>>>(bytes: T, fallback: &'static str) -> CString {
    CString::new(bytes).unwrap_or_else(|_| {
        CString::new(fallback).expect("fallback error string must not contain nulls")
    })
}

/// Set last error information.
///
/// `error_msg` and `error_report` are turned into CStrings from bytes, bytes must not include any
/// nulls (a fixed message is stored instead if they do).
pub fn set_last_error<T: Into<Vec<u8>>>(error_msg: T, error_report: T) {
    let msg = to_c_string(error_msg, "Failed to create error message string!");
    let report = to_c_string(error_report, "Failed to create error report string!");

    LAST_ERROR.with(|last_result| {
        *last_result.borrow_mut() = Some(LastErrorData::new(msg, report));
    });
}

/// Clear the last error information for the current thread.
pub fn clear_last_error() {
    LAST_ERROR.with(|last_result| {
        *last_result.borrow_mut() = None;
    });
}
