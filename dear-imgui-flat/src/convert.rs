//! Representation conversions between the C boundary and the core library
//!
//! Everything here is call-scoped. Nothing borrowed from the caller outlives
//! the closure or the call it was borrowed for.

use std::any::Any;
use std::ffi::{CStr, c_char, c_int};
use std::panic::{AssertUnwindSafe, catch_unwind};
use std::ptr::NonNull;

use crate::error::{FlatError, FlatResult};
use crate::sys;

/// Encode a native boolean as the boundary's `1`/`0`.
#[inline]
pub const fn c_bool(value: bool) -> c_int {
    if value { 1 } else { 0 }
}

/// Run `f` with the caller's optional in/out open flag.
///
/// A non-null `flag` is read into a local `bool` (any non-zero value is
/// true), `f` sees `Some(&mut local)`, and the possibly updated local is
/// written back as `0` or `1`. A null `flag` reaches `f` as `None`, which the
/// core library reads as "no close button".
///
/// # Safety
///
/// `flag` must be null or valid for reads and writes of one `c_int`.
pub unsafe fn with_open_flag<R>(flag: *mut c_int, f: impl FnOnce(Option<&mut bool>) -> R) -> R {
    match NonNull::new(flag) {
        Some(flag) => unsafe { with_int_bool(flag, |open| f(Some(open))) },
        None => f(None),
    }
}

/// Like [`with_open_flag`] for a flag the core library requires.
///
/// # Safety
///
/// `value` must be valid for reads and writes of one `c_int`.
pub unsafe fn with_int_bool<R>(value: NonNull<c_int>, f: impl FnOnce(&mut bool) -> R) -> R {
    let mut local = unsafe { value.read() } != 0;
    let result = f(&mut local);
    unsafe { value.write(c_bool(local)) };
    result
}

/// Assemble two boundary scalars into the core's 2-component vector.
#[inline]
pub const fn vec2(x: f32, y: f32) -> sys::ImVec2 {
    sys::ImVec2 { x, y }
}

#[inline]
pub const fn vec4(x: f32, y: f32, z: f32, w: f32) -> sys::ImVec4 {
    sys::ImVec4 { x, y, z, w }
}

/// Borrow caller text, `None` for a null pointer.
///
/// # Safety
///
/// `text` must be null or point to a NUL-terminated string that stays valid
/// and unmodified for `'a`.
pub unsafe fn c_text<'a>(text: *const c_char) -> Option<&'a CStr> {
    if text.is_null() {
        None
    } else {
        Some(unsafe { CStr::from_ptr(text) })
    }
}

/// Borrow caller text the operation cannot do without.
///
/// # Safety
///
/// Same as [`c_text`].
pub unsafe fn required_text<'a>(
    text: *const c_char,
    operation: &'static str,
    argument: &'static str,
) -> FlatResult<&'a CStr> {
    unsafe { c_text(text) }.ok_or(FlatError::null_argument(operation, argument))
}

/// Reject a null pointer the operation cannot do without.
pub fn required<T>(
    ptr: *mut T,
    operation: &'static str,
    argument: &'static str,
) -> FlatResult<NonNull<T>> {
    NonNull::new(ptr).ok_or(FlatError::null_argument(operation, argument))
}

/// View the caller's RGB storage as a fixed-size array at the same address.
///
/// # Safety
///
/// `color` must point to 3 contiguous, writable `f32` values not aliased
/// elsewhere for `'a`.
pub unsafe fn color3<'a>(color: NonNull<f32>) -> &'a mut [f32; 3] {
    unsafe { color.cast::<[f32; 3]>().as_mut() }
}

/// View the caller's RGBA storage as a fixed-size array at the same address.
///
/// # Safety
///
/// `color` must point to 4 contiguous, writable `f32` values not aliased
/// elsewhere for `'a`.
pub unsafe fn color4<'a>(color: NonNull<f32>) -> &'a mut [f32; 4] {
    unsafe { color.cast::<[f32; 4]>().as_mut() }
}

/// Run an exported operation, collapsing every way it can fail into `failure`.
///
/// Errors are logged and mapped to `failure`. A panic is caught here so it
/// never unwinds into the C caller, and is mapped the same way.
pub fn guard<R>(operation: &'static str, failure: R, f: impl FnOnce() -> FlatResult<R>) -> R {
    match catch_unwind(AssertUnwindSafe(f)) {
        Ok(Ok(value)) => value,
        Ok(Err(err)) => {
            err.reject();
            failure
        }
        Err(payload) => {
            let message = panic_message(&*payload);
            flat_error!("{}: panicked: {}", operation, message);
            #[cfg(not(feature = "tracing"))]
            let _ = (operation, message);
            failure
        }
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> &str {
    if let Some(msg) = payload.downcast_ref::<&'static str>() {
        msg
    } else if let Some(msg) = payload.downcast_ref::<String>() {
        msg.as_str()
    } else {
        "non-string panic payload"
    }
}
