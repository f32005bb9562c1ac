//! Birth-date segment of an identity code.
//!
//! The date must be a real day on the proleptic Gregorian calendar and the
//! year must be written without a leading zero, so that the date renders
//! back as the same `YYYY-M-D` text it was read from.

use chrono::NaiveDate;

use super::IdentityCodeError;

/// Century assumed for the two-digit year of a 15-character code.
pub(super) const LEGACY_CENTURY: &str = "19";

/// Parse the year / month / day digit groups into a calendar date.
///
/// Month and day may carry a leading zero (`"03"`); the year may not.
pub(super) fn resolve(year: &str, month: &str, day: &str) -> Result<NaiveDate, IdentityCodeError> {
    let invalid = || IdentityCodeError::InvalidBirthDate(render(year, month, day));

    if year.starts_with('0') {
        return Err(invalid());
    }
    let y: i32 = year.parse().map_err(|_| invalid())?;
    let m: u32 = month.parse().map_err(|_| invalid())?;
    let d: u32 = day.parse().map_err(|_| invalid())?;

    NaiveDate::from_ymd_opt(y, m, d).ok_or_else(invalid)
}

/// `YYYY-M-D` rendering with month and day stripped of leading zeros.
fn render(year: &str, month: &str, day: &str) -> String {
    format!("{year}-{}-{}", strip_zeros(month), strip_zeros(day))
}

fn strip_zeros(digits: &str) -> &str {
    match digits.trim_start_matches('0') {
        "" => "0",
        trimmed => trimmed,
    }
}
