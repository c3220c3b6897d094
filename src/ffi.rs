//! C-ABI FFI bindings for cross-language integration.
//!
//! Records are passed as JSON strings (the same shape
//! [`ResumeRecord::from_json`] accepts), so hosts such as C#, Python or
//! Node.js only need to marshal strings.

use std::ffi::{c_char, CStr, CString};
use std::ptr;

use crate::export::today;
use crate::model::ResumeRecord;
use crate::render::{self, RenderOptions};

/// Result structure returned by FFI functions.
#[repr(C)]
pub struct HarvardcvResult {
    /// Whether the operation succeeded.
    pub success: bool,
    /// The result data (null if failed). Must be freed with `harvardcv_free_result`.
    pub data: *mut c_char,
    /// Error message (null if succeeded). Must be freed with `harvardcv_free_result`.
    pub error: *mut c_char,
}

impl HarvardcvResult {
    fn success(data: String) -> Self {
        match CString::new(data) {
            Ok(data) => Self {
                success: true,
                data: data.into_raw(),
                error: ptr::null_mut(),
            },
            Err(e) => Self::error(format!(
                "Output contains a NUL byte at position {}",
                e.nul_position()
            )),
        }
    }

    fn error(message: String) -> Self {
        // Messages may echo input; drop NUL bytes rather than the whole message.
        let message = CString::new(message.replace('\0', "")).unwrap_or_default();
        Self {
            success: false,
            data: ptr::null_mut(),
            error: message.into_raw(),
        }
    }
}

unsafe fn read_str<'a>(ptr: *const c_char, what: &str) -> Result<&'a str, String> {
    if ptr.is_null() {
        return Err(format!("{} cannot be null", what));
    }
    CStr::from_ptr(ptr)
        .to_str()
        .map_err(|_| format!("Invalid UTF-8 {}", what))
}

fn load(record_json: &str) -> crate::Result<ResumeRecord> {
    let record = ResumeRecord::from_json(record_json)?;
    record.validate()?;
    Ok(record)
}

/// Render the preview fragment for a JSON record.
///
/// # Safety
///
/// `record_json` must be a valid null-terminated UTF-8 string.
/// The returned result must be freed with `harvardcv_free_result`.
#[no_mangle]
pub unsafe extern "C" fn harvardcv_preview(record_json: *const c_char) -> HarvardcvResult {
    let json = match read_str(record_json, "record") {
        Ok(s) => s,
        Err(e) => return HarvardcvResult::error(e),
    };

    match load(json).and_then(|r| crate::generate_preview(&r, &RenderOptions::default())) {
        Ok(html) => HarvardcvResult::success(html),
        Err(e) => HarvardcvResult::error(e.to_string()),
    }
}

/// Render the standalone Word-compatible document for a JSON record.
///
/// # Safety
///
/// `record_json` must be a valid null-terminated UTF-8 string.
/// The returned result must be freed with `harvardcv_free_result`.
#[no_mangle]
pub unsafe extern "C" fn harvardcv_word_document(record_json: *const c_char) -> HarvardcvResult {
    let json = match read_str(record_json, "record") {
        Ok(s) => s,
        Err(e) => return HarvardcvResult::error(e),
    };

    match load(json) {
        Ok(record) => {
            let options = RenderOptions::default();
            let doc = render::render(&record, &options);
            HarvardcvResult::success(render::to_word_document(&doc, &options))
        }
        Err(e) => HarvardcvResult::error(e.to_string()),
    }
}

/// Build the download file name for a person's name, dated today.
///
/// # Safety
///
/// `name` must be a valid null-terminated UTF-8 string.
/// The returned result must be freed with `harvardcv_free_result`.
#[no_mangle]
pub unsafe extern "C" fn harvardcv_file_name(name: *const c_char) -> HarvardcvResult {
    let name = match read_str(name, "name") {
        Ok(s) => s,
        Err(e) => return HarvardcvResult::error(e),
    };
    let options = RenderOptions::default();
    HarvardcvResult::success(crate::filename::file_name(
        name,
        today(),
        &options.file_prefix,
        options.max_file_name_length,
    ))
}

/// Free a result returned by any harvardcv function.
///
/// # Safety
///
/// The `result` must have been returned by a harvardcv function.
/// This function should only be called once per result.
#[no_mangle]
pub unsafe extern "C" fn harvardcv_free_result(result: HarvardcvResult) {
    if !result.data.is_null() {
        drop(CString::from_raw(result.data));
    }
    if !result.error.is_null() {
        drop(CString::from_raw(result.error));
    }
}

/// Free a string allocated by harvardcv.
///
/// # Safety
///
/// The `ptr` must have been allocated by harvardcv.
/// This function should only be called once per pointer.
#[no_mangle]
pub unsafe extern "C" fn harvardcv_free_string(ptr: *mut c_char) {
    if !ptr.is_null() {
        drop(CString::from_raw(ptr));
    }
}

/// Get the version of the harvardcv library.
///
/// The returned string is statically allocated and should not be freed.
#[no_mangle]
pub extern "C" fn harvardcv_version() -> *const c_char {
    static VERSION: &[u8] = concat!(env!("CARGO_PKG_VERSION"), "\0").as_bytes();
    VERSION.as_ptr() as *const c_char
}
