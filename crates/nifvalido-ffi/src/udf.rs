//! C entry point for database engines that load scalar UDFs from a shared
//! library.
//!
//! ```c
//! void nifvalido(const char *doc, char *result, char sqlstate[6]);
//! ```
//!
//! The host owns all three buffers. `result` receives the nine-character
//! code (or nine blanks) plus a NUL terminator. `sqlstate` is always set to
//! `"00000"`: an invalid NIF is a blank result, not a SQL error.

use std::borrow::Cow;
use std::ffi::{CStr, c_char};

use nifvalido_engine::CODE_LEN;

/// Size of the `result` buffer the host must provide.
pub const RESULT_BUF_LEN: usize = CODE_LEN + 1;

/// SQLSTATE written on every call, NUL terminated.
pub const SQLSTATE_SUCCESS: &[u8; 6] = b"00000\0";

/// Validate and canonicalize one value.
///
/// A null `doc` is treated as empty input. Invalid UTF-8 in `doc` is
/// replaced before validation; it can only ever be noise. Null `result` or
/// `sqlstate` pointers are skipped.
///
/// # Safety
///
/// - `doc` must be null or point to a NUL-terminated string.
/// - `result` must be null or point to at least [`RESULT_BUF_LEN`] writable bytes.
/// - `sqlstate` must be null or point to at least 6 writable bytes.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn nifvalido(doc: *const c_char, result: *mut c_char, sqlstate: *mut c_char) {
    let input = if doc.is_null() {
        Cow::Borrowed("")
    } else {
        unsafe { CStr::from_ptr(doc) }.to_string_lossy()
    };
    let output = nifvalido_engine::nif_valido(&input);

    if !result.is_null() {
        let bytes = output.as_bytes();
        unsafe {
            std::ptr::copy_nonoverlapping(bytes.as_ptr().cast::<c_char>(), result, bytes.len());
            *result.add(bytes.len()) = 0;
        }
    }

    if !sqlstate.is_null() {
        unsafe {
            std::ptr::copy_nonoverlapping(
                SQLSTATE_SUCCESS.as_ptr().cast::<c_char>(),
                sqlstate,
                SQLSTATE_SUCCESS.len(),
            );
        }
    }
}
