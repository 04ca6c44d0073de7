// SPDX-License-Identifier: MPL-2.0
//! Non-blocking field checks for the request form.
//!
//! A failed check only changes the field's border color; submission is
//! never prevented.

use regex::Regex;
use std::sync::LazyLock;

/// Border color applied to a field that fails its check.
pub const INVALID_BORDER_COLOR: &str = "#f44336";

/// Digits a phone number needs at minimum.
pub const MIN_PHONE_DIGITS: usize = 10;

static EMAIL_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is valid"));

static PHONE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9\s\-+()]+$").expect("phone pattern is valid"));

#[must_use]
pub fn validate_email(email: &str) -> bool {
    EMAIL_PATTERN.is_match(email)
}

/// ASCII digits, spaces, `-`, `+` and parentheses, with at least ten digits.
#[must_use]
pub fn validate_phone(phone: &str) -> bool {
    PHONE_PATTERN.is_match(phone)
        && phone.chars().filter(char::is_ascii_digit).count() >= MIN_PHONE_DIGITS
}

/// Visual state of a checked field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldCue {
    Neutral,
    Invalid,
}

impl FieldCue {
    /// Border color to apply, or `None` to reset to the stylesheet default.
    #[must_use]
    pub fn border_color(self) -> Option<&'static str> {
        match self {
            FieldCue::Neutral => None,
            FieldCue::Invalid => Some(INVALID_BORDER_COLOR),
        }
    }
}

/// Cue for a field when it loses focus. Empty fields are never flagged.
#[must_use]
pub fn field_cue(value: &str, validator: fn(&str) -> bool) -> FieldCue {
    if value.is_empty() || validator(value) {
        FieldCue::Neutral
    } else {
        FieldCue::Invalid
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn email_check() {
        assert!(validate_email("amina@example.ma"));
        assert!(validate_email("a.b+c@d.co.uk"));
        assert!(!validate_email("no-at-sign.com"));
        assert!(!validate_email("two@@example.com"));
        assert!(!validate_email("spaces in@example.com"));
        assert!(!validate_email("user@localhost"));
    }

    #[test]
    fn phone_check() {
        assert!(validate_phone("+212 6 12 34 56 78"));
        assert!(validate_phone("(0522) 123-456"));
        assert!(!validate_phone("0612 345"));
        assert!(!validate_phone("06-12-34-56-7x"));
        assert!(!validate_phone(""));
    }

    #[test]
    fn phone_check_rejects_non_ascii_digits() {
        assert!(!validate_phone("0612345678\u{0663}"));
        assert!(!validate_phone("٠٦١٢٣٤٥٦٧٨"));
        assert_eq!(field_cue("0612345678٣", validate_phone), FieldCue::Invalid);
    }

    #[test]
    fn empty_fields_stay_neutral() {
        assert_eq!(field_cue("", validate_email), FieldCue::Neutral);
        assert_eq!(field_cue("", validate_phone), FieldCue::Neutral);
    }

    #[test]
    fn invalid_fields_get_red_border() {
        let cue = field_cue("not-an-email", validate_email);
        assert_eq!(cue, FieldCue::Invalid);
        assert_eq!(cue.border_color(), Some("#f44336"));
        assert_eq!(field_cue("0612345678", validate_phone).border_color(), None);
    }
}
