//! UTF-8 / UTF-16 conversions and OS error code formatting.

use crate::{traced, Result, UtilsError};

/// Encode `s` as UTF-16 code units.
pub fn widen(s: &str) -> Vec<u16> {
    s.encode_utf16().collect()
}

/// Decode UTF-16 code units, failing on unpaired surrogates.
pub fn narrow(wide: &[u16]) -> Result<String> {
    String::from_utf16(wide).map_err(|e| {
        traced!(
            UtilsError,
            "Error on string narrow, length: [{}], error: [{}]",
            wide.len(),
            e
        )
    })
}

/// Describe an OS error code, e.g. `code: [2], message: [No such file or
/// directory]`. Zero maps to an empty string.
pub fn errcode_to_string(code: i32) -> String {
    if code == 0 {
        return String::new();
    }
    let text = std::io::Error::from_raw_os_error(code).to_string();
    let suffix = format!(" (os error {})", code);
    let message = text.strip_suffix(suffix.as_str()).unwrap_or(&text);
    format!("code: [{}], message: [{}]", code, message)
}
