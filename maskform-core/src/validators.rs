// File: maskform-core/src/validators.rs
//! Domain format validators for Korean-market form fields.
//!
//! Every function here is total: it takes a plain string slice, returns
//! `bool`, and never panics. Blank input (empty after trimming) is
//! rejected with a warning-level diagnostic; well-formed input that does
//! not conform to the domain grammar is rejected silently.
//!
//! The date validator layers a calendar round-trip on top of its regex so
//! that shapes like `2023-02-30` are rejected even though the pattern
//! alone would accept them.
//!
//! License: MIT OR APACHE 2.0

use chrono::{Datelike, NaiveDate};
use log::warn;
use once_cell::sync::Lazy;
use regex::Regex;

static DATE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(\d{4})-?(0[1-9]|1[0-2])-?(0[1-9]|[12]\d|3[01])$").unwrap());
static TIME: Lazy<Regex> = Lazy::new(|| Regex::new(r"^([01]\d|2[0-3]):?([0-5]\d)(:?[0-5]\d)?$").unwrap());
static EMAIL: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[0-9a-zA-Z]([-_.]?[0-9a-zA-Z])*@[0-9a-zA-Z]([-_.]?[0-9a-zA-Z])*\.[a-zA-Z]{2,3}$")
        .unwrap()
});
static PHONE: Lazy<Regex> = Lazy::new(|| {
    // Fixed area-code enumeration: Seoul, VoIP, virtual 050x, and the
    // assigned three-digit regional codes.
    Regex::new(r"^(02|070|050[2-7]|0(3[1-3]|4[1-4]|5[1-5]|6[1-4]))-?(\d{3,4})-?(\d{4})$").unwrap()
});
static CELL_PHONE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^01[016789]-?(\d{3,4})-?(\d{4})$").unwrap());
static BUSINESS_NUMBER: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\d{3}-?\d{2}-?\d{5}$").unwrap());
static USER_ID: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[a-zA-Z][a-zA-Z0-9]{6,29}$").unwrap());
static URL: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^https?://[0-9a-zA-Z][0-9a-zA-Z\-]*(\.[0-9a-zA-Z\-]+)*(:\d+)?(/[^\s]*)?$").unwrap()
});

/// Rejects blank input, logging which validator refused it.
fn reject_blank(value: &str, validator: &str) -> bool {
    if value.trim().is_empty() {
        warn!("validators::{}: rejecting empty input", validator);
        return true;
    }
    false
}

/// Validates a calendar date given as `YYYYMMDD` or `YYYY-MM-DD`.
///
/// Two stages: the regex filters the syntactic shape and month/day digit
/// ranges, then the parsed components are round-tripped through
/// [`NaiveDate`] — the constructed date must report exactly the year,
/// month, and day that were parsed. Both stages are required; the regex
/// alone accepts `20230230`.
pub fn is_valid_date(value: &str) -> bool {
    if reject_blank(value, "is_valid_date") {
        return false;
    }
    let Some(caps) = DATE.captures(value) else {
        return false;
    };
    let (Some(year), Some(month), Some(day)) = (
        caps[1].parse::<i32>().ok(),
        caps[2].parse::<u32>().ok(),
        caps[3].parse::<u32>().ok(),
    ) else {
        return false;
    };
    match NaiveDate::from_ymd_opt(year, month, day) {
        Some(date) => date.year() == year && date.month() == month && date.day() == day,
        None => false,
    }
}

/// Validates a time of day given as `HH:MM[:SS]` or `HHMM[SS]`.
///
/// Hours 00-23, minutes and seconds 00-59. Each colon is independently
/// optional; the single pattern is the whole contract.
pub fn is_valid_time(value: &str) -> bool {
    if reject_blank(value, "is_valid_time") {
        return false;
    }
    TIME.is_match(value)
}

/// Validates an e-mail address of the shape `local@domain.tld`.
pub fn is_valid_email(value: &str) -> bool {
    if reject_blank(value, "is_valid_email") {
        return false;
    }
    EMAIL.is_match(value)
}

/// Overload of [`is_valid_email`] taking the local part and domain
/// separately; they are joined with `@` before validation.
pub fn is_valid_email_parts(local: &str, domain: &str) -> bool {
    is_valid_email(&format!("{}@{}", local, domain))
}

/// Validates a landline/service phone number against the fixed Korean
/// area-code enumeration (Seoul `02`, regional `031`-`064`, VoIP `070`,
/// virtual `0502`-`0507`), a 3-4 digit exchange, and a 4-digit
/// subscriber number. Hyphens are optional.
///
/// Mobile carrier prefixes are *not* accepted here; see
/// [`is_valid_cell_phone`].
pub fn is_valid_phone(value: &str) -> bool {
    if reject_blank(value, "is_valid_phone") {
        return false;
    }
    PHONE.is_match(value)
}

/// Overload of [`is_valid_phone`] taking pre-split segments; they are
/// joined with `-` before validation.
pub fn is_valid_phone_parts(area: &str, exchange: &str, subscriber: &str) -> bool {
    is_valid_phone(&format!("{}-{}-{}", area, exchange, subscriber))
}

/// Validates a mobile phone number (`010`, `011`, `016`, `017`, `018`,
/// `019` prefixes), hyphens optional.
pub fn is_valid_cell_phone(value: &str) -> bool {
    if reject_blank(value, "is_valid_cell_phone") {
        return false;
    }
    CELL_PHONE.is_match(value)
}

/// Overload of [`is_valid_cell_phone`] taking pre-split segments.
pub fn is_valid_cell_phone_parts(prefix: &str, exchange: &str, subscriber: &str) -> bool {
    is_valid_cell_phone(&format!("{}-{}-{}", prefix, exchange, subscriber))
}

/// Validates a business registration number: `NNN-NN-NNNNN`, 10 digits
/// total, hyphens optional.
pub fn is_valid_business_number(value: &str) -> bool {
    if reject_blank(value, "is_valid_business_number") {
        return false;
    }
    BUSINESS_NUMBER.is_match(value)
}

/// Validates a user id: first character alphabetic, total length 7-30,
/// remaining characters alphanumeric.
pub fn is_valid_user_id(value: &str) -> bool {
    if reject_blank(value, "is_valid_user_id") {
        return false;
    }
    USER_ID.is_match(value)
}

/// Password strength check.
///
/// The first character must be an ASCII letter and whitespace is not
/// allowed anywhere. Composition then decides the minimum length, counted
/// in UTF-16 code units: three character classes (letter, digit, special)
/// require at least 8, exactly two classes require at least 10, fewer
/// than two classes are rejected outright.
pub fn is_valid_password(value: &str) -> bool {
    if reject_blank(value, "is_valid_password") {
        return false;
    }
    let starts_with_letter = value
        .chars()
        .next()
        .map(|c| c.is_ascii_alphabetic())
        .unwrap_or(false);
    if !starts_with_letter {
        return false;
    }
    if value.chars().any(char::is_whitespace) {
        return false;
    }

    let has_letter = value.chars().any(|c| c.is_ascii_alphabetic());
    let has_digit = value.chars().any(|c| c.is_ascii_digit());
    let has_special = value
        .chars()
        .any(|c| !c.is_ascii_alphanumeric() && !c.is_whitespace());
    let classes =
        usize::from(has_letter) + usize::from(has_digit) + usize::from(has_special);

    let len = value.encode_utf16().count();
    match classes {
        3 => len >= 8,
        2 => len >= 10,
        _ => false,
    }
}

/// Validates an absolute web address: `http(s)://host[.tld][:port][/path]`.
pub fn is_valid_url(value: &str) -> bool {
    if reject_blank(value, "is_valid_url") {
        return false;
    }
    URL.is_match(value)
}

/// Open-redirect guard: accepts only a root-relative path or a
/// fully-qualified `http(s)` URL.
///
/// Protocol-relative targets (`//host`) and every non-http scheme
/// (`javascript:`, `data:`, ...) are rejected, so the result is safe to
/// hand to a redirect.
pub fn is_safe_url(value: &str) -> bool {
    if reject_blank(value, "is_safe_url") {
        return false;
    }
    if let Some(rest) = value.strip_prefix('/') {
        return !rest.starts_with('/');
    }
    URL.is_match(value)
}
