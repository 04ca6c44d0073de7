// SPDX-License-Identifier: MPL-2.0
//! Synthetic request reference numbers (`DOC-YYYY-NNNNN`).

use crate::error::{Error, Result};
use chrono::Datelike;
use regex::Regex;
use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

/// Smallest five-digit suffix.
pub const SUFFIX_MIN: u32 = 10_000;
/// Largest five-digit suffix.
pub const SUFFIX_MAX: u32 = 99_999;

static REFERENCE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^DOC-(\d{4})-(\d{5})$").expect("reference pattern is valid"));

/// Identifier handed back after a simulated document request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ReferenceNumber {
    year: i32,
    suffix: u32,
}

impl ReferenceNumber {
    /// Builds a reference, or `None` if the suffix is not five digits or the
    /// year is not four.
    #[must_use]
    pub fn new(year: i32, suffix: u32) -> Option<Self> {
        ((1000..=9999).contains(&year) && (SUFFIX_MIN..=SUFFIX_MAX).contains(&suffix))
            .then_some(Self { year, suffix })
    }

    /// Generates a reference for the current local year with a random suffix.
    pub fn generate() -> Result<Self> {
        let mut bytes = [0u8; 4];
        getrandom::getrandom(&mut bytes)
            .map_err(|err| Error::Io(format!("random source unavailable: {err}")))?;
        Ok(Self::from_random(
            chrono::Local::now().year(),
            u32::from_le_bytes(bytes),
        ))
    }

    /// Maps an arbitrary random value onto the five-digit suffix range.
    #[must_use]
    pub fn from_random(year: i32, random: u32) -> Self {
        Self {
            year,
            suffix: SUFFIX_MIN + random % (SUFFIX_MAX - SUFFIX_MIN + 1),
        }
    }

    #[must_use]
    pub fn year(&self) -> i32 {
        self.year
    }

    #[must_use]
    pub fn suffix(&self) -> u32 {
        self.suffix
    }
}

impl fmt::Display for ReferenceNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "DOC-{}-{}", self.year, self.suffix)
    }
}

impl FromStr for ReferenceNumber {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let invalid = || Error::Config(format!("invalid reference number: {s}"));
        let captures = REFERENCE_PATTERN.captures(s.trim()).ok_or_else(invalid)?;
        let year = captures[1].parse().map_err(|_| invalid())?;
        let suffix = captures[2].parse().map_err(|_| invalid())?;
        Self::new(year, suffix).ok_or_else(invalid)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generated_reference_matches_pattern_for_current_year() {
        let year = chrono::Local::now().year();
        for _ in 0..200 {
            let reference = ReferenceNumber::generate().expect("random source");
            let text = reference.to_string();
            assert!(REFERENCE_PATTERN.is_match(&text), "{text}");
            assert!(text.starts_with(&format!("DOC-{year}-")));
            assert!((SUFFIX_MIN..=SUFFIX_MAX).contains(&reference.suffix()));
        }
    }

    #[test]
    fn from_random_covers_range_edges() {
        assert_eq!(ReferenceNumber::from_random(2024, 0).suffix(), SUFFIX_MIN);
        assert_eq!(ReferenceNumber::from_random(2024, 89_999).suffix(), SUFFIX_MAX);
        assert_eq!(ReferenceNumber::from_random(2024, 90_000).suffix(), SUFFIX_MIN);
        let max = ReferenceNumber::from_random(2024, u32::MAX).suffix();
        assert!((SUFFIX_MIN..=SUFFIX_MAX).contains(&max));
    }

    #[test]
    fn display_and_parse_agree() {
        let reference: ReferenceNumber = "DOC-2024-12345".parse().unwrap();
        assert_eq!(reference.year(), 2024);
        assert_eq!(reference.suffix(), 12345);
        assert_eq!(reference.to_string(), "DOC-2024-12345");
    }

    #[test]
    fn parse_rejects_malformed_references() {
        for bad in ["DOC-2024-1234", "DOC-24-12345", "doc-2024-12345", "DOC-2024-01234", ""] {
            assert!(bad.parse::<ReferenceNumber>().is_err(), "{bad}");
        }
    }

    #[test]
    fn new_validates_ranges() {
        assert!(ReferenceNumber::new(2024, 9_999).is_none());
        assert!(ReferenceNumber::new(2024, 100_000).is_none());
        assert!(ReferenceNumber::new(2024, 55_555).is_some());
    }
}
