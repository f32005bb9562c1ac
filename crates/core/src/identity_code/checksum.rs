//! Weighted mod-11 checksum of the 18-character form.
//!
//! Position `p` (0-based from the left) carries weight `2^(17 - p) mod 11`.
//! Characters are read as base-11 digits, so a check character normalized
//! to `a` counts as 10. The weighted sum of all 18 positions must leave a
//! remainder of 1.

use super::CURRENT_LEN;

pub(super) const MODULUS: u32 = 11;

/// Remainder the weighted sum must leave for the code to be valid.
pub(super) const EXPECTED_REMAINDER: u32 = 1;

/// Weight applied to the character at `position`.
pub(super) fn weight(position: usize) -> u32 {
    let exponent = (CURRENT_LEN - 1 - position) as u32;
    2u32.pow(exponent) % MODULUS
}

/// Weighted sum modulo 11, or `None` if a character is not a base-11 digit.
///
/// `normalized` must already have its trailing `x`/`X` replaced by `a`.
pub(super) fn remainder(normalized: &str) -> Option<u32> {
    let mut sum = 0u32;
    for i in (0..CURRENT_LEN).rev() {
        let position = CURRENT_LEN - 1 - i;
        let digit = normalized.chars().nth(position)?.to_digit(MODULUS)?;
        sum += weight(position) * digit;
    }
    Some(sum % MODULUS)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn weights_follow_powers_of_two() {
        let weights: Vec<u32> = (0..CURRENT_LEN).map(weight).collect();
        assert_eq!(
            weights,
            vec![7, 9, 10, 5, 8, 4, 2, 1, 6, 3, 7, 9, 10, 5, 8, 4, 2, 1]
        );
    }

    #[test]
    fn remainder_of_known_codes() {
        assert_eq!(remainder("110101199003078515"), Some(1));
        assert_eq!(remainder("11010519491231002a"), Some(1));
        assert_eq!(remainder("11010119900307851a"), Some(6));
    }

    #[test]
    fn every_shape_checked_code_has_a_remainder() {
        for last in ['0', '5', '9', 'a'] {
            let code = format!("11010519491231002{last}");
            assert!(remainder(&code).is_some(), "{code}");
        }
        assert_eq!(remainder("11010519491231002x"), None);
    }

    #[test]
    fn normalized_check_character_counts_as_ten() {
        // Same first 17 digits; only the last term differs, by 10 * 1.
        let with_zero = remainder("110105194912310020").unwrap();
        let with_a = remainder("11010519491231002a").unwrap();
        assert_eq!((with_zero + 10) % MODULUS, with_a);
    }

    #[test]
    fn non_base11_character_yields_none() {
        assert_eq!(remainder("11010519491231002b"), None);
        assert_eq!(remainder("1101051949123100"), None);
    }
}
