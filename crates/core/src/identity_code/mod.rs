//! Resident identity-code validation.
//!
//! Two layouts are accepted:
//!
//! - **Legacy, 15 characters**: all digits. Region prefix, then a two-digit
//!   year (century `19`), month and day. No check character.
//! - **Current, 18 characters**: 17 digits and a check character (digit or
//!   `X`). Region prefix, four-digit year, month, day, then a weighted
//!   mod-11 checksum over all 18 positions.
//!
//! [`validate`] is the boolean form-level check. [`inspect`] runs the same
//! pipeline and reports which step rejected the code, or the decoded fields
//! when it is accepted.

mod birth_date;
mod checksum;
mod region;

use std::str::FromStr;
use std::sync::LazyLock;

use chrono::NaiveDate;
use regex::Regex;
use serde::Serialize;

use crate::types::RegionCode;

pub use region::{region_name, regions, REGIONS};

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// Length of a legacy identity code.
pub const LEGACY_LEN: usize = 15;

/// Length of a current identity code.
pub const CURRENT_LEN: usize = 18;

/// Shape of a current code: 17 ASCII digits and a digit or `x`/`X`.
const CURRENT_PATTERN: &str = r"^[0-9]{17}[0-9xX]$";

static CURRENT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(CURRENT_PATTERN).expect("valid regex"));

// ---------------------------------------------------------------------------
// Types
// ---------------------------------------------------------------------------

/// Which of the two layouts a code uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CodeFormat {
    Legacy15,
    Current18,
}

/// Fields decoded from an accepted identity code.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IdentityCodeInfo {
    pub format: CodeFormat,
    pub region_code: RegionCode,
    pub region_name: &'static str,
    pub birth_date: NaiveDate,
}

/// The step at which an identity code was rejected.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum IdentityCodeError {
    #[error("identity code must be 15 or 18 characters, got {0}")]
    InvalidLength(usize),

    #[error("legacy identity code must contain only digits")]
    NonDigit,

    #[error("identity code must be 17 digits followed by a digit or 'X'")]
    Malformed,

    #[error("unknown region prefix {0:02}")]
    UnknownRegion(RegionCode),

    #[error("birth date {0} is not a calendar date")]
    InvalidBirthDate(String),

    #[error("checksum mismatch: weighted sum mod 11 is {remainder}, expected 1")]
    ChecksumMismatch { remainder: u32 },
}

impl IdentityCodeError {
    /// Short stable tag for logs and machine-readable output.
    pub fn reason(&self) -> &'static str {
        match self {
            Self::InvalidLength(_) => "length",
            Self::NonDigit => "non_digit",
            Self::Malformed => "malformed",
            Self::UnknownRegion(_) => "region",
            Self::InvalidBirthDate(_) => "birth_date",
            Self::ChecksumMismatch { .. } => "checksum",
        }
    }
}

impl FromStr for IdentityCodeInfo {
    type Err = IdentityCodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        inspect(s)
    }
}

// ---------------------------------------------------------------------------
// Validation
// ---------------------------------------------------------------------------

/// Whether `code` is a valid resident identity code.
///
/// Never panics; every malformed input is simply `false`.
///
/// ```
/// use platedesk_core::identity_code::validate;
///
/// assert!(validate("110101199003078515"));
/// assert!(!validate("110101199013078515"));
/// assert!(!validate("12345"));
/// ```
pub fn validate(code: &str) -> bool {
    match inspect(code) {
        Ok(_) => true,
        Err(err) => {
            tracing::debug!(reason = err.reason(), error = %err, "Identity code rejected");
            false
        }
    }
}

/// Run the full validation pipeline and report the first failing step.
pub fn inspect(code: &str) -> Result<IdentityCodeInfo, IdentityCodeError> {
    match code.chars().count() {
        LEGACY_LEN => inspect_legacy(code),
        CURRENT_LEN => inspect_current(code),
        other => Err(IdentityCodeError::InvalidLength(other)),
    }
}

fn inspect_legacy(code: &str) -> Result<IdentityCodeInfo, IdentityCodeError> {
    if !code.bytes().all(|b| b.is_ascii_digit()) {
        return Err(IdentityCodeError::NonDigit);
    }

    let (region_code, region_name) = region::lookup(&code[0..2])?;

    let year = format!("{}{}", birth_date::LEGACY_CENTURY, &code[6..8]);
    let birth_date = birth_date::resolve(&year, &code[8..10], &code[10..12])?;

    Ok(IdentityCodeInfo {
        format: CodeFormat::Legacy15,
        region_code,
        region_name,
        birth_date,
    })
}

fn inspect_current(code: &str) -> Result<IdentityCodeInfo, IdentityCodeError> {
    if !CURRENT_RE.is_match(code) {
        return Err(IdentityCodeError::Malformed);
    }
    let normalized = normalize_check_character(code);

    let (region_code, region_name) = region::lookup(&normalized[0..2])?;
    let birth_date =
        birth_date::resolve(&normalized[6..10], &normalized[10..12], &normalized[12..14])?;

    // CURRENT_RE admits only base-11 digits after normalization, so this is always Some.
    let remainder = checksum::remainder(&normalized);
    debug_assert!(remainder.is_some(), "shape-checked code has a non-digit");
    let remainder = remainder.ok_or(IdentityCodeError::Malformed)?;
    if remainder != checksum::EXPECTED_REMAINDER {
        return Err(IdentityCodeError::ChecksumMismatch { remainder });
    }

    Ok(IdentityCodeInfo {
        format: CodeFormat::Current18,
        region_code,
        region_name,
        birth_date,
    })
}

/// Replace a trailing `x`/`X` with `a`, its base-11 spelling.
fn normalize_check_character(code: &str) -> String {
    match code.strip_suffix(['x', 'X']) {
        Some(head) => format!("{head}a"),
        None => code.to_string(),
    }
}
