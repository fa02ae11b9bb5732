// File: maskform-core/src/formatters/phone.rs
//! Keystroke-oriented phone-number formatting.
//!
//! A fixed, ordered table of patterns covers every recognized prefix
//! family: `0502`-`0507` virtual numbers, `070` VoIP, the Seoul `02`
//! code, and generic three-digit codes (regional and mobile). Each family
//! has a "complete number" entry and a "still typing" entry, ordered from
//! most specific to least specific. On every call the first entry whose
//! length window contains the current digit count and whose pattern
//! matches supplies the formatting, so partial input formats stably as
//! digits arrive.
//!
//! License: MIT OR APACHE 2.0

use log::{debug, warn};
use once_cell::sync::Lazy;
use regex::Regex;

/// One prioritized formatting rule: a shape pattern, the digit-count
/// window it applies to, and the hyphenated replacement.
#[derive(Debug)]
pub struct PhonePattern {
    /// Identifier used in trace logging.
    pub name: &'static str,
    /// Shape the cleaned digit string must match in full.
    pub regex: Regex,
    /// Inclusive lower bound on the digit count.
    pub min_len: usize,
    /// Inclusive upper bound on the digit count.
    pub max_len: usize,
    /// Group-referencing replacement applied on selection.
    pub replacement: &'static str,
}

fn entry(
    name: &'static str,
    pattern: &str,
    min_len: usize,
    max_len: usize,
    replacement: &'static str,
) -> PhonePattern {
    PhonePattern {
        name,
        regex: Regex::new(pattern).unwrap(),
        min_len,
        max_len,
        replacement,
    }
}

/// The ordered table. First match wins; order is part of the contract.
static LIVE_PATTERNS: Lazy<Vec<PhonePattern>> = Lazy::new(|| {
    vec![
        entry("virtual_complete", r"^(050[2-7])(\d{3,4})(\d{4})$", 11, 12, "$1-$2-$3"),
        entry("virtual_partial", r"^(050[2-7])(\d+)$", 5, 10, "$1-$2"),
        entry("voip_complete", r"^(070)(\d{3,4})(\d{4})$", 10, 11, "$1-$2-$3"),
        entry("voip_partial", r"^(070)(\d+)$", 4, 9, "$1-$2"),
        entry("seoul_complete", r"^(02)(\d{3,4})(\d{4})$", 9, 10, "$1-$2-$3"),
        entry("seoul_partial", r"^(02)(\d+)$", 3, 8, "$1-$2"),
        entry("area_complete", r"^(0\d{2})(\d{3,4})(\d{4})$", 10, 11, "$1-$2-$3"),
        entry("area_partial", r"^(0\d{2})(\d+)$", 4, 9, "$1-$2"),
    ]
});

/// Formats a phone number as it is being typed.
///
/// Non-digits are stripped, then the pattern table is walked top to
/// bottom; the first entry whose window covers the digit count and whose
/// pattern matches supplies the formatting. When nothing matches, the
/// bare digits are returned.
pub fn format_phone_live(value: &str) -> String {
    if value.trim().is_empty() {
        warn!("formatters::format_phone_live: empty input");
        return String::new();
    }
    let digits: String = value.chars().filter(char::is_ascii_digit).collect();
    let len = digits.len();
    for pattern in LIVE_PATTERNS.iter() {
        if len >= pattern.min_len && len <= pattern.max_len && pattern.regex.is_match(&digits) {
            debug!(
                "formatters::format_phone_live: '{}' selected at {} digits",
                pattern.name, len
            );
            return pattern.regex.replace(&digits, pattern.replacement).into_owned();
        }
    }
    digits
}

/// Read-only view of the ordered pattern table, exposed so callers and
/// tests can audit the priority order.
pub fn live_patterns() -> &'static [PhonePattern] {
    &LIVE_PATTERNS
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_is_ordered_most_specific_first() {
        let names: Vec<&str> = live_patterns().iter().map(|p| p.name).collect();
        assert_eq!(
            names,
            [
                "virtual_complete",
                "virtual_partial",
                "voip_complete",
                "voip_partial",
                "seoul_complete",
                "seoul_partial",
                "area_complete",
                "area_partial",
            ]
        );
        for pattern in live_patterns() {
            assert!(pattern.min_len <= pattern.max_len, "{}", pattern.name);
        }
    }

    #[test]
    fn virtual_prefix_wins_over_generic_once_long_enough() {
        // Four digits still format as a generic area code; the fifth
        // digit disambiguates the 050x family.
        assert_eq!(format_phone_live("0502"), "050-2");
        assert_eq!(format_phone_live("05021"), "0502-1");
    }
}
