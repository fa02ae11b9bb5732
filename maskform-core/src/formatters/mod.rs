// File: maskform-core/src/formatters/mod.rs
//! Normalizers that rewrite accepted or partially-typed values into their
//! canonical display form.
//!
//! Formatters are fail-open: input that does not fit the expected shape is
//! returned unchanged. Re-applying a formatter to its own output yields
//! the same string. Blank input produces an empty string and a
//! warning-level diagnostic.
//!
//! The keystroke-oriented phone formatter lives in [`phone`].
//!
//! License: MIT OR APACHE 2.0

pub mod phone;

pub use phone::format_phone_live;

use log::warn;
use once_cell::sync::Lazy;
use regex::Regex;

static SIGNED_DIGITS: Lazy<Regex> = Lazy::new(|| Regex::new(r"^-?\d+$").unwrap());
static EIGHT_DIGITS: Lazy<Regex> = Lazy::new(|| Regex::new(r"^(\d{4})(\d{2})(\d{2})$").unwrap());
static SPECIAL_CHARS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[^0-9A-Za-z_\sㄱ-ㅎㅏ-ㅣ가-힣]").unwrap());
static SEOUL_PHONE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^(02)(\d{3,4})(\d{4})$").unwrap());
static AREA_PHONE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^(0\d{2})(\d{3,4})(\d{4})$").unwrap());

/// Warns about blank input, naming the formatter that received it.
fn warn_blank(value: &str, formatter: &str) -> bool {
    if value.trim().is_empty() {
        warn!("formatters::{}: empty input", formatter);
        return true;
    }
    false
}

/// Inserts `,` separators every three digits from the right.
///
/// Existing separators are stripped first, so already-grouped input
/// re-groups to the same string. A leading `-` is preserved; anything
/// else non-numeric is returned unchanged.
pub fn group_thousands(value: &str) -> String {
    if warn_blank(value, "group_thousands") {
        return String::new();
    }
    let cleaned = value.replace(',', "");
    if !SIGNED_DIGITS.is_match(&cleaned) {
        return value.to_string();
    }
    let (sign, digits) = match cleaned.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", cleaned.as_str()),
    };
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    format!("{}{}", sign, grouped)
}

/// Hyphenates a complete phone number into its area/exchange/subscriber
/// form.
///
/// Non-digits are stripped before classification, so already-hyphenated
/// numbers re-format to the same string. The Seoul code keeps its
/// two-digit area group; every other recognized shape uses a three-digit
/// area group. Unrecognized shapes are returned unchanged.
pub fn hyphenate_phone(value: &str) -> String {
    if warn_blank(value, "hyphenate_phone") {
        return String::new();
    }
    let digits: String = value.chars().filter(char::is_ascii_digit).collect();
    if let Some(caps) = SEOUL_PHONE.captures(&digits) {
        return format!("{}-{}-{}", &caps[1], &caps[2], &caps[3]);
    }
    if let Some(caps) = AREA_PHONE.captures(&digits) {
        return format!("{}-{}-{}", &caps[1], &caps[2], &caps[3]);
    }
    value.to_string()
}

/// Hyphenates an 8-digit date string at positions 4 and 6
/// (`20240115` -> `2024-01-15`). Anything else is returned unchanged.
pub fn hyphenate_date(value: &str) -> String {
    if warn_blank(value, "hyphenate_date") {
        return String::new();
    }
    match EIGHT_DIGITS.captures(value) {
        Some(caps) => format!("{}-{}-{}", &caps[1], &caps[2], &caps[3]),
        None => value.to_string(),
    }
}

/// Removes every character that is not an ASCII word character,
/// whitespace, or Hangul (syllables or bare jamo).
pub fn strip_special_chars(value: &str) -> String {
    if warn_blank(value, "strip_special_chars") {
        return String::new();
    }
    SPECIAL_CHARS.replace_all(value, "").into_owned()
}

/// Display byte length under UTF-8 accounting: 3 per non-ASCII UTF-16
/// code unit, 1 per ASCII unit.
///
/// The walk is over UTF-16 code units, not code points; a
/// supplementary-plane character contributes two units.
pub fn byte_len_utf8(value: &str) -> usize {
    value
        .encode_utf16()
        .map(|unit| if unit > 0x7F { 3 } else { 1 })
        .sum()
}

/// Display byte length under EUC-KR accounting: 2 per non-ASCII UTF-16
/// code unit, 1 per ASCII unit. Same code-unit walk as
/// [`byte_len_utf8`].
pub fn byte_len_euc_kr(value: &str) -> usize {
    value
        .encode_utf16()
        .map(|unit| if unit > 0x7F { 2 } else { 1 })
        .sum()
}
