// File: maskform-core/src/maskers.rs
//! One-way display masking for PII fields.
//!
//! # Fail-open contract
//!
//! Every masker here is fail-open: when the input does not match the
//! expected shape, the ORIGINAL, UNMASKED string is returned. Callers
//! that render the result must treat "output equals input" as "nothing
//! was redacted" and must not assume the value is display-safe. This
//! preserves the upstream system's behavior and is a caller-visible part
//! of the contract, not an implementation detail.
//!
//! Log lines name the masker and the outcome but never include field
//! values.
//!
//! License: MIT OR APACHE 2.0

use log::{debug, warn};
use once_cell::sync::Lazy;
use regex::Regex;

static EMAIL_SHAPE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^(.{2})(.*)@(.+)$").unwrap());
static EMAIL_DOMAIN_SHAPE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(.{2})(.*)@(.+)\.(.+)$").unwrap());
static PHONE_SHAPE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(\d{2,3})(-?)(\d{3,4})(-?)(\d{4})$").unwrap());
static RRN_SHAPE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^(\d{6})(-?)(\d)\d{6}$").unwrap());

fn stars(count: usize) -> String {
    "*".repeat(count)
}

/// Splits `value` after its first `keep` characters.
fn split_after_chars(value: &str, keep: usize) -> (&str, &str) {
    let at = value
        .char_indices()
        .nth(keep)
        .map(|(i, _)| i)
        .unwrap_or(value.len());
    value.split_at(at)
}

/// Masks the local part of an e-mail address, keeping its first two
/// characters; the domain is left untouched.
///
/// `abcdefg12345@naver.com` -> `ab**********@naver.com`
pub fn mask_email(value: &str) -> String {
    match EMAIL_SHAPE.captures(value) {
        Some(caps) => format!(
            "{}{}@{}",
            &caps[1],
            stars(caps[2].encode_utf16().count()),
            &caps[3]
        ),
        None => {
            debug!("maskers::mask_email: shape mismatch, input passed through");
            value.to_string()
        }
    }
}

/// Masks the local part as [`mask_email`] does, and additionally masks
/// the domain name: the domain splits at its last `.`, the first three
/// characters of the name segment survive, and the TLD stays verbatim.
///
/// `abcdefg12345@naver.com` -> `ab**********@nav**.com`
pub fn mask_email_domain(value: &str) -> String {
    match EMAIL_DOMAIN_SHAPE.captures(value) {
        Some(caps) => {
            let (kept, hidden) = split_after_chars(&caps[3], 3);
            format!(
                "{}{}@{}{}.{}",
                &caps[1],
                stars(caps[2].encode_utf16().count()),
                kept,
                stars(hidden.encode_utf16().count()),
                &caps[4]
            )
        }
        None => {
            debug!("maskers::mask_email_domain: shape mismatch, input passed through");
            value.to_string()
        }
    }
}

/// Masks an address for untrusted display: when the local part is longer
/// than four characters its first four survive and the rest is masked
/// (shorter local parts stay unchanged), and the whole domain collapses
/// to the literal `******`.
///
/// `abcdefg12345@naver.com` -> `abcd********@******`
pub fn mask_email_full(value: &str) -> String {
    let Some(at) = value.rfind('@') else {
        debug!("maskers::mask_email_full: shape mismatch, input passed through");
        return value.to_string();
    };
    if at == 0 {
        debug!("maskers::mask_email_full: empty local part, input passed through");
        return value.to_string();
    }
    let local = &value[..at];
    let masked_local = if local.chars().count() > 4 {
        let (kept, hidden) = split_after_chars(local, 4);
        format!("{}{}", kept, stars(hidden.encode_utf16().count()))
    } else {
        local.to_string()
    };
    format!("{}@******", masked_local)
}

/// Masks the exchange (middle) group of a phone number, keeping the area
/// code and the last four digits visible. Hyphen presence is preserved
/// per position.
///
/// `010-1234-5678` -> `010-****-5678`; `0111234567` -> `011***4567`
pub fn mask_phone(value: &str) -> String {
    match PHONE_SHAPE.captures(value) {
        Some(caps) => format!(
            "{}{}{}{}{}",
            &caps[1],
            &caps[2],
            stars(caps[3].len()),
            &caps[4],
            &caps[5]
        ),
        None => {
            debug!("maskers::mask_phone: shape mismatch, input passed through");
            value.to_string()
        }
    }
}

/// Masks a resident registration number down to the 6-digit birth date
/// and the century/gender digit; the remaining six digits become the
/// fixed literal `******`. Hyphen presence follows the input.
///
/// `990101-1234567` -> `990101-1******`
pub fn mask_rrn(value: &str) -> String {
    match RRN_SHAPE.captures(value) {
        Some(caps) => format!("{}{}{}******", &caps[1], &caps[2], &caps[3]),
        None => {
            debug!("maskers::mask_rrn: shape mismatch, input passed through");
            value.to_string()
        }
    }
}

/// Masks a personal name: single characters pass through, two-character
/// names keep only the family name, longer names keep the first and last
/// characters with stars in between.
///
/// `갓댐희` -> `갓*희`; `갓댐` -> `갓*`
pub fn mask_name(value: &str) -> String {
    let mut chars = value.chars();
    let Some(first) = chars.next() else {
        warn!("maskers::mask_name: empty input passed through");
        return value.to_string();
    };
    let rest: Vec<char> = chars.collect();
    match rest.len() {
        0 => value.to_string(),
        1 => format!("{}*", first),
        n => format!("{}{}{}", first, stars(n - 1), rest[n - 1]),
    }
}
