//! Contact-number helpers shared by the desk forms.

use std::fmt::Display;
use std::sync::LazyLock;

use regex::Regex;

/// Mainland mobile number: 11 digits, `1` then `3`–`9`.
pub const MOBILE_PATTERN: &str = r"^1[3-9][0-9]{9}$";

static MOBILE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(MOBILE_PATTERN).expect("valid regex"));

/// Whether `mobile` is a well-formed mobile number.
pub fn is_valid_mobile(mobile: &str) -> bool {
    MOBILE_RE.is_match(mobile)
}

/// Click-to-call link for a phone number, e.g. `tel:13800138000`.
///
/// Accepts numbers stored either as text or as integers.
pub fn tel_uri(mobile: impl Display) -> String {
    format!("tel:{mobile}")
}
