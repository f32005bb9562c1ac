//! License-plate number format.
//!
//! A plate is a province abbreviation, an issuing-authority letter, then five
//! (standard) or six (new-energy) letters or digits. `I` and `O` are never
//! issued, so they are excluded from the letter positions.

use std::sync::LazyLock;

use regex::Regex;

/// Single-character province abbreviations that start a plate number.
pub const PROVINCE_ABBREVIATIONS: &str =
    "京津沪渝冀豫云辽黑湘皖鲁新苏浙赣鄂桂甘晋蒙陕吉闽贵粤青藏川宁琼";

static PLATE_RE: LazyLock<Regex> = LazyLock::new(|| {
    let pattern = format!("^[{PROVINCE_ABBREVIATIONS}][A-HJ-NP-Z][A-HJ-NP-Z0-9]{{5,6}}$");
    Regex::new(&pattern).expect("valid regex")
});

/// Whether `plate` is a well-formed plate number (uppercase, no separator).
pub fn is_valid_plate_number(plate: &str) -> bool {
    PLATE_RE.is_match(plate)
}

/// Uppercase and strip the separators people commonly type (`·`, `-`, spaces).
pub fn normalize_plate_number(raw: &str) -> String {
    raw.chars()
        .filter(|c| !matches!(c, '·' | '•' | '-' | ' '))
        .flat_map(char::to_uppercase)
        .collect()
}
