// src/domain/fields.rs
//
// Per-keystroke field normalization and derivation for the registration
// form. Every function here is total and pure: invalid or partial input
// yields an empty/absent derived value, never an error.

use chrono::{Datelike, NaiveDate};
use rand::Rng;

/// Earliest birth year the form accepts.
pub const MIN_BIRTH_YEAR: i32 = 1800;

/// Maximum digits in a local contact number.
pub const PHONE_MAX_DIGITS: usize = 11;

/// Lowercase the input, then capitalize the first letter of every
/// whitespace-separated word. Whitespace is preserved as typed.
pub fn normalize_name_fragment(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut at_word_start = true;

    for c in raw.chars() {
        if c.is_whitespace() {
            out.push(c);
            at_word_start = true;
        } else if at_word_start {
            out.extend(c.to_uppercase());
            at_word_start = false;
        } else {
            out.extend(c.to_lowercase());
        }
    }

    out
}

/// Strip every non-digit character and truncate to at most 11 digits.
pub fn normalize_phone_digits(raw: &str) -> String {
    raw.chars()
        .filter(|c| c.is_ascii_digit())
        .take(PHONE_MAX_DIGITS)
        .collect()
}

/// Streaming input mask for a birth date typed as digits (MMDDYYYY).
///
/// Strips non-digits, truncates to 8 digits, then re-inserts `/` so the
/// rendering grows `MM` -> `MM/DD` -> `MM/DD/YYYY` as the user types.
/// Stripping the slashes from the output always reproduces the digit
/// sequence unchanged.
pub fn mask_birth_date(raw: &str) -> String {
    let digits: String = raw.chars().filter(|c| c.is_ascii_digit()).take(8).collect();

    match digits.len() {
        0..=2 => digits,
        3..=4 => format!("{}/{}", &digits[..2], &digits[2..]),
        _ => format!("{}/{}/{}", &digits[..2], &digits[2..4], &digits[4..]),
    }
}

/// Age in whole years as of `as_of`, derived from a fully masked
/// `MM/DD/YYYY` string.
///
/// Returns `None` unless the string is a complete mask, the month/day/year
/// form a real calendar date (leap years included), the year is within
/// `[1800, as_of.year]`, and the date is not after `as_of`. A future date
/// yields `None` rather than a negative age.
pub fn derive_age(masked_date: &str, as_of: NaiveDate) -> Option<u32> {
    let birth = parse_masked_date(masked_date)?;

    if birth.year() < MIN_BIRTH_YEAR || birth > as_of {
        return None;
    }

    let mut age = as_of.year() - birth.year();
    if (as_of.month(), as_of.day()) < (birth.month(), birth.day()) {
        age -= 1;
    }

    // birth <= as_of already guarantees this, but the contract is explicit.
    if age < 0 {
        return None;
    }

    Some(age as u32)
}

/// Strict parse of the mask's final form. Anything shorter or malformed
/// is treated as still-in-progress input.
fn parse_masked_date(masked: &str) -> Option<NaiveDate> {
    let bytes = masked.as_bytes();
    if bytes.len() != 10 || bytes[2] != b'/' || bytes[5] != b'/' {
        return None;
    }

    let digits_ok = masked
        .char_indices()
        .all(|(i, c)| if i == 2 || i == 5 { c == '/' } else { c.is_ascii_digit() });
    if !digits_ok {
        return None;
    }

    let month: u32 = masked[..2].parse().ok()?;
    let day: u32 = masked[3..5].parse().ok()?;
    let year: i32 = masked[6..].parse().ok()?;

    // from_ymd_opt rejects month 0/13+, day 0, and day-out-of-month
    // (including Feb 29 on non-leap years).
    NaiveDate::from_ymd_opt(year, month, day)
}

/// Generated username: lowercase first initial + lowercase last name with
/// whitespace removed + a numeric suffix in [100, 1000).
///
/// `None` if either name is empty once whitespace is removed. The suffix is
/// drawn from `suffix_source` on every call, so the username changes each
/// time either source name changes; the original system behaves this way
/// and it is kept as-is.
pub fn derive_username<F>(first_name: &str, last_name: &str, mut suffix_source: F) -> Option<String>
where
    F: FnMut() -> u32,
{
    let first: String = first_name.chars().filter(|c| !c.is_whitespace()).collect();
    let last: String = last_name.chars().filter(|c| !c.is_whitespace()).collect();

    if first.is_empty() || last.is_empty() {
        return None;
    }

    let initial: String = first.chars().take(1).flat_map(char::to_lowercase).collect();
    let suffix = 100 + suffix_source() % 900;

    Some(format!("{}{}{}", initial, last.to_lowercase(), suffix))
}

/// Production variant: suffix from the thread RNG.
pub fn derive_username_random(first_name: &str, last_name: &str) -> Option<String> {
    let mut rng = rand::thread_rng();
    derive_username(first_name, last_name, || rng.gen_range(0..900))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn name_fragment_capitalizes_each_word() {
        assert_eq!(normalize_name_fragment("juan"), "Juan");
        assert_eq!(normalize_name_fragment("dela cruz"), "Dela Cruz");
        assert_eq!(normalize_name_fragment("MARIA CLARA"), "Maria Clara");
        assert_eq!(normalize_name_fragment(""), "");
        assert_eq!(normalize_name_fragment("  jose  "), "  Jose  ");
    }

    #[test]
    fn phone_strips_and_truncates() {
        assert_eq!(normalize_phone_digits("0917-123-4567"), "09171234567");
        assert_eq!(normalize_phone_digits("09171234567890"), "09171234567");
        assert_eq!(normalize_phone_digits("abc"), "");
    }

    #[test]
    fn mask_grows_with_input() {
        assert_eq!(mask_birth_date(""), "");
        assert_eq!(mask_birth_date("0"), "0");
        assert_eq!(mask_birth_date("01"), "01");
        assert_eq!(mask_birth_date("013"), "01/3");
        assert_eq!(mask_birth_date("0130"), "01/30");
        assert_eq!(mask_birth_date("01301"), "01/30/1");
        assert_eq!(mask_birth_date("01301999"), "01/30/1999");
    }

    #[test]
    fn mask_ignores_non_digits_and_extra_input() {
        assert_eq!(mask_birth_date("01/30/1999"), "01/30/1999");
        assert_eq!(mask_birth_date("01-30-1999-99"), "01/30/1999");
    }

    #[test]
    fn mask_round_trips_digits() {
        for d in ["", "1", "12", "123", "1234", "12345", "123456", "1234567", "12345678"] {
            let masked = mask_birth_date(d);
            let stripped: String = masked.chars().filter(|c| *c != '/').collect();
            assert_eq!(stripped, d);
        }
    }

    #[test]
    fn mask_is_prefix_stable() {
        // Masking a digit prefix agrees with the longer mask truncated to
        // the same digits.
        let full = mask_birth_date("06152001");
        for n in 0..=8 {
            let prefix = &"06152001"[..n];
            let masked = mask_birth_date(prefix);
            assert!(full.starts_with(masked.trim_end_matches('/')));
        }
    }

    #[test]
    fn age_on_exact_examples() {
        assert_eq!(derive_age("01/01/2000", date(2025, 6, 15)), Some(25));
        assert_eq!(derive_age("01/01/2000", date(2000, 1, 1)), Some(0));
    }

    #[test]
    fn age_decrements_before_birthday() {
        assert_eq!(derive_age("06/15/2000", date(2025, 6, 14)), Some(24));
        assert_eq!(derive_age("06/15/2000", date(2025, 6, 15)), Some(25));
    }

    #[test]
    fn age_rejects_invalid_dates() {
        assert_eq!(derive_age("02/30/2020", date(2025, 1, 1)), None);
        assert_eq!(derive_age("13/01/2020", date(2025, 1, 1)), None);
        assert_eq!(derive_age("00/10/2020", date(2025, 1, 1)), None);
        assert_eq!(derive_age("02/29/2021", date(2025, 1, 1)), None);
        // leap day on an actual leap year is fine
        assert_eq!(derive_age("02/29/2020", date(2025, 1, 1)), Some(4));
    }

    #[test]
    fn age_rejects_future_and_ancient_dates() {
        assert_eq!(derive_age("01/01/2030", date(2025, 1, 1)), None);
        assert_eq!(derive_age("01/02/2025", date(2025, 1, 1)), None);
        assert_eq!(derive_age("12/31/1799", date(2025, 1, 1)), None);
        assert_eq!(derive_age("01/01/1800", date(2025, 1, 1)), Some(225));
    }

    #[test]
    fn age_rejects_partial_masks() {
        assert_eq!(derive_age("01/01/200", date(2025, 1, 1)), None);
        assert_eq!(derive_age("01/01", date(2025, 1, 1)), None);
        assert_eq!(derive_age("", date(2025, 1, 1)), None);
        assert_eq!(derive_age("aa/bb/cccc", date(2025, 1, 1)), None);
    }

    #[test]
    fn username_from_names_and_suffix() {
        assert_eq!(
            derive_username("Juan", "Dela Cruz", || 42),
            Some("jdelacruz142".to_string())
        );
        assert_eq!(
            derive_username("maria", "Reyes", || 0),
            Some("mreyes100".to_string())
        );
    }

    #[test]
    fn username_requires_both_names() {
        assert_eq!(derive_username("", "Cruz", || 42), None);
        assert_eq!(derive_username("Juan", "   ", || 42), None);
    }

    #[test]
    fn username_changes_with_suffix_source() {
        let a = derive_username("Juan", "Cruz", || 1);
        let b = derive_username("Juan", "Cruz", || 2);
        assert_ne!(a, b);
    }
}
