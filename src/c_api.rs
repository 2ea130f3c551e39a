//! C ABI for hosts that embed the engine.
//!
//! Strings go in as NUL-terminated UTF-8 (a null pointer reads as "") and
//! come out as Rust-owned buffers that must be released with
//! [`lipi_free_string`]. No entry point lets a panic cross the boundary.
use crate::calendar::{self, CalendarSystem, DateField};
use crate::core::converter::Transliterator;
use libc::c_char;
use once_cell::sync::OnceCell;
use std::ffi::{CStr, CString};
use std::panic::{catch_unwind, AssertUnwindSafe};

static ENGINE: OnceCell<Transliterator> = OnceCell::new();

fn engine() -> &'static Transliterator {
    ENGINE.get_or_init(|| {
        tracing::info!("transliteration engine initialised");
        Transliterator::new()
    })
}

fn guarded<T>(name: &str, fallback: T, f: impl FnOnce() -> T) -> T {
    catch_unwind(AssertUnwindSafe(f)).unwrap_or_else(|_| {
        tracing::error!(entry_point = name, "panic caught at the C boundary");
        fallback
    })
}

/// # Safety
/// `ptr` must be null or point to a NUL-terminated string that outlives `'a`.
unsafe fn read_str<'a>(ptr: *const c_char) -> &'a str {
    if ptr.is_null() {
        return "";
    }
    CStr::from_ptr(ptr).to_str().unwrap_or("")
}

fn into_c_string(s: String) -> *mut c_char {
    CString::new(s).unwrap_or_default().into_raw()
}

fn read_format(s: &str) -> Option<CalendarSystem> {
    s.parse()
        .map_err(|err| tracing::warn!(%err, "rejecting calendar name from host"))
        .ok()
}

/// Builds the shared tables ahead of the first call. Optional.
#[no_mangle]
pub extern "C" fn lipi_engine_init() {
    guarded("lipi_engine_init", (), || {
        engine();
    });
}

/// # Safety
/// `text` must be null or a valid NUL-terminated string.
#[no_mangle]
pub unsafe extern "C" fn lipi_transliterate(text: *const c_char) -> *mut c_char {
    let text = read_str(text);
    into_c_string(guarded("lipi_transliterate", String::new(), || engine().transliterate(text)))
}

/// # Safety
/// `buffer` must be null or a valid NUL-terminated string.
#[no_mangle]
pub unsafe extern "C" fn lipi_commit_word(buffer: *const c_char) -> *mut c_char {
    let buffer = read_str(buffer);
    into_c_string(guarded("lipi_commit_word", String::new(), || engine().commit_word(buffer)))
}

/// # Safety
/// `date` must be null or a valid NUL-terminated string.
#[no_mangle]
pub unsafe extern "C" fn lipi_convert_bs_to_ad(date: *const c_char) -> *mut c_char {
    let date = read_str(date);
    into_c_string(guarded("lipi_convert_bs_to_ad", date.to_string(), || calendar::convert_bs_to_ad(date)))
}

/// # Safety
/// `date` must be null or a valid NUL-terminated string.
#[no_mangle]
pub unsafe extern "C" fn lipi_convert_ad_to_bs(date: *const c_char) -> *mut c_char {
    let date = read_str(date);
    into_c_string(guarded("lipi_convert_ad_to_bs", date.to_string(), || calendar::convert_ad_to_bs(date)))
}

/// # Safety
/// `date` must be null or a valid NUL-terminated string.
#[no_mangle]
pub unsafe extern "C" fn lipi_calculate_age(date: *const c_char, is_bs: bool) -> u32 {
    let date = read_str(date);
    guarded("lipi_calculate_age", 0, || calendar::calculate_age(date, is_bs))
}

/// `format` is "BS" or "AD"; anything else yields an empty string.
///
/// # Safety
/// Both arguments must be null or valid NUL-terminated strings.
#[no_mangle]
pub unsafe extern "C" fn lipi_format_date(date: *const c_char, format: *const c_char) -> *mut c_char {
    let date = read_str(date);
    let format = read_str(format);
    into_c_string(guarded("lipi_format_date", String::new(), || {
        read_format(format)
            .map(|f| calendar::format_date_display(date, f))
            .unwrap_or_default()
    }))
}

/// JSON [`DateView`](crate::calendar::DateView) for `date` written in
/// `format`, or `{}` when `format` is not a calendar name.
///
/// # Safety
/// Both string arguments must be null or valid NUL-terminated strings.
#[no_mangle]
pub unsafe extern "C" fn lipi_date_view_json(
    date: *const c_char,
    format: *const c_char,
    show_age: bool,
) -> *mut c_char {
    let date = read_str(date);
    let format = read_str(format);
    let json = guarded("lipi_date_view_json", "{}".to_string(), || {
        let Some(format) = read_format(format) else {
            return "{}".to_string();
        };
        let view = DateField::with_value(date, format).view(show_age);
        serde_json::to_string(&view).unwrap_or_else(|_| "{}".to_string())
    });
    into_c_string(json)
}

/// The phonetic table as a JSON array, longest keys first.
#[no_mangle]
pub extern "C" fn lipi_phonetic_table_json() -> *mut c_char {
    let json = guarded("lipi_phonetic_table_json", "[]".to_string(), || {
        engine().table().to_json().unwrap_or_else(|_| "[]".to_string())
    });
    into_c_string(json)
}

/// # Safety
/// `s` must be null or a pointer returned by this library that has not been
/// freed yet.
#[no_mangle]
pub unsafe extern "C" fn lipi_free_string(s: *mut c_char) {
    if !s.is_null() {
        drop(CString::from_raw(s));
    }
}
