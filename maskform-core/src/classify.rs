// File: maskform-core/src/classify.rs
//! Character-class membership predicates for form-field text.
//!
//! Classification is fail-closed: input that is empty after trimming is
//! rejected with a warning-level diagnostic. Character classes use ASCII
//! word semantics (`[0-9A-Za-z_]`), so Hangul never counts as a "word"
//! character. Hangul ranges are split between complete syllables
//! (`가-힣`) and bare jamo (`ㄱ-ㅎ`, `ㅏ-ㅣ`); each predicate documents
//! which it accepts.
//!
//! License: MIT OR APACHE 2.0

use log::warn;
use once_cell::sync::Lazy;
use regex::Regex;

static DIGITS: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[0-9]+$").unwrap());
static LATIN: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[a-zA-Z]+$").unwrap());
static LATIN_SPACE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[a-zA-Z\s]+$").unwrap());
static LATIN_DIGITS: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[a-zA-Z0-9]+$").unwrap());
static HANGUL: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[가-힣]+$").unwrap());
static HANGUL_SPACE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[가-힣\s]+$").unwrap());
static HANGUL_LATIN: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[가-힣a-zA-Z]+$").unwrap());
static HANGUL_LATIN_DIGITS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[ㄱ-ㅎㅏ-ㅣ가-힣a-zA-Z0-9\s]+$").unwrap());
static TRAILING_SPECIAL: Lazy<Regex> = Lazy::new(|| Regex::new(r"[^0-9A-Za-z_]$").unwrap());
static TRAILING_WHITESPACE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s$").unwrap());
static NO_HANGUL: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[^ㄱ-ㅎㅏ-ㅣ가-힣]+$").unwrap());

/// Rejects blank input, logging which predicate refused it.
fn reject_blank(value: &str, predicate: &str) -> bool {
    if value.trim().is_empty() {
        warn!("classify::{}: rejecting empty input", predicate);
        return true;
    }
    false
}

/// Returns `true` when `value` consists solely of ASCII digits.
pub fn is_digits(value: &str) -> bool {
    if reject_blank(value, "is_digits") {
        return false;
    }
    DIGITS.is_match(value)
}

/// Returns `true` when `value` consists solely of Latin letters.
pub fn is_latin(value: &str) -> bool {
    if reject_blank(value, "is_latin") {
        return false;
    }
    LATIN.is_match(value)
}

/// Latin letters and whitespace only.
pub fn is_latin_or_space(value: &str) -> bool {
    if reject_blank(value, "is_latin_or_space") {
        return false;
    }
    LATIN_SPACE.is_match(value)
}

/// Latin letters and ASCII digits only.
pub fn is_latin_or_digits(value: &str) -> bool {
    if reject_blank(value, "is_latin_or_digits") {
        return false;
    }
    LATIN_DIGITS.is_match(value)
}

/// Complete Hangul syllables only; bare jamo are rejected.
pub fn is_hangul(value: &str) -> bool {
    if reject_blank(value, "is_hangul") {
        return false;
    }
    HANGUL.is_match(value)
}

/// Complete Hangul syllables and whitespace; bare jamo are rejected.
pub fn is_hangul_or_space(value: &str) -> bool {
    if reject_blank(value, "is_hangul_or_space") {
        return false;
    }
    HANGUL_SPACE.is_match(value)
}

/// Complete Hangul syllables and Latin letters; bare jamo are rejected.
pub fn is_hangul_or_latin(value: &str) -> bool {
    if reject_blank(value, "is_hangul_or_latin") {
        return false;
    }
    HANGUL_LATIN.is_match(value)
}

/// The widest mixed class: Hangul syllables **and bare jamo**, Latin
/// letters, ASCII digits, and whitespace.
pub fn is_hangul_latin_digits(value: &str) -> bool {
    if reject_blank(value, "is_hangul_latin_digits") {
        return false;
    }
    HANGUL_LATIN_DIGITS.is_match(value)
}

/// Returns `true` when the final character of `value` is not an ASCII
/// word character.
///
/// Only the last character is examined; a special character anywhere else
/// does not trigger this predicate.
pub fn ends_with_special_char(value: &str) -> bool {
    if reject_blank(value, "ends_with_special_char") {
        return false;
    }
    TRAILING_SPECIAL.is_match(value)
}

/// Returns `true` when the final character of `value` is whitespace.
///
/// Same suffix-only scope as [`ends_with_special_char`].
pub fn ends_with_whitespace(value: &str) -> bool {
    if reject_blank(value, "ends_with_whitespace") {
        return false;
    }
    TRAILING_WHITESPACE.is_match(value)
}

/// Returns `true` when `value` contains no Hangul at all, neither
/// syllables nor bare jamo.
pub fn has_no_hangul(value: &str) -> bool {
    if reject_blank(value, "has_no_hangul") {
        return false;
    }
    NO_HANGUL.is_match(value)
}

/// Returns `true` when the UTF-16 length of `value` falls **outside** the
/// closed range `[min, max]`.
///
/// This is a violation check: `true` means "length is not acceptable".
/// Blank input is rejected (`false`) like every other predicate here.
pub fn is_length_outside(value: &str, min: usize, max: usize) -> bool {
    if reject_blank(value, "is_length_outside") {
        return false;
    }
    let len = value.encode_utf16().count();
    len < min || len > max
}
