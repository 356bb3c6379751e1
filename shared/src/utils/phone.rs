//! Phone number utilities

use once_cell::sync::Lazy;
use regex::Regex;

// International phone number regex (E.164 format)
static E164_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\+[1-9]\d{1,14}$").expect("E.164 pattern is valid")
});

/// Normalize a phone number as entered on the issuance form.
///
/// Only hyphens are stripped; the stored value is otherwise what the
/// operator typed (after trimming surrounding whitespace).
pub fn normalize_phone_number(phone: &str) -> String {
    phone.trim().chars().filter(|c| *c != '-').collect()
}

/// Check if a phone number is in E.164 format
pub fn is_e164(phone: &str) -> bool {
    E164_REGEX.is_match(phone)
}

/// Convert a locally formatted number into E.164 using `default_country_code`.
///
/// Numbers already in E.164 are returned unchanged. A single national trunk
/// prefix `0` is dropped before the country code is prepended.
pub fn to_e164(phone: &str, default_country_code: &str) -> Option<String> {
    let digits: String = phone
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '+')
        .collect();

    if is_e164(&digits) {
        return Some(digits);
    }

    let national = digits.trim_start_matches('+');
    let national = national.strip_prefix('0').unwrap_or(national);
    let country = default_country_code.trim_start_matches('+');
    let candidate = format!("+{}{}", country, national);

    is_e164(&candidate).then_some(candidate)
}

/// Mask a phone number for display (e.g., 010****5678)
pub fn mask_phone_number(phone: &str) -> String {
    let normalized: String = phone
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '+')
        .collect();
    if normalized.len() >= 7 {
        format!(
            "{}****{}",
            &normalized[0..3],
            &normalized[normalized.len() - 4..]
        )
    } else {
        "****".to_string()
    }
}
