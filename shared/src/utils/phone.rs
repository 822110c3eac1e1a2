//! Phone number helpers
//!
//! Validation guards the mock provider against malformed input; masking keeps
//! full numbers out of logs.

use once_cell::sync::Lazy;
use regex::Regex;

// Mainland China mobile: 11 digits starting with 13-19
static CHINA_MOBILE_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^1[3-9]\d{9}$").expect("mobile pattern is valid"));

// E.164
static E164_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\+[1-9]\d{1,14}$").expect("E.164 pattern is valid"));

/// Strip everything except digits and `+`
pub fn normalize_phone_number(phone: &str) -> String {
    phone
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '+')
        .collect()
}

pub fn is_valid_chinese_mobile(phone: &str) -> bool {
    CHINA_MOBILE_REGEX.is_match(&normalize_phone_number(phone))
}

pub fn is_valid_international_phone(phone: &str) -> bool {
    E164_REGEX.is_match(&normalize_phone_number(phone))
}

/// Accepts a mainland mobile or any E.164 number
pub fn is_valid_phone(phone: &str) -> bool {
    let normalized = normalize_phone_number(phone);
    CHINA_MOBILE_REGEX.is_match(&normalized) || E164_REGEX.is_match(&normalized)
}

/// Keep the first three and last four characters, e.g. `138****5678`
///
/// Numbers shorter than seven characters are masked entirely.
pub fn mask_phone_number(phone: &str) -> String {
    let normalized = normalize_phone_number(phone);
    match normalized.len() {
        len if len >= 7 => format!("{}****{}", &normalized[..3], &normalized[len - 4..]),
        _ => "****".to_string(),
    }
}
