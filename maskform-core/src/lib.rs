// maskform-core/src/lib.rs
//! # Maskform Core Library
//!
//! `maskform-core` provides deterministic classification, format validation,
//! normalization, and PII masking for Korean-market form-field text. It is
//! the logic layer behind membership forms that collect dates, phone numbers,
//! business registration numbers, resident registration numbers, e-mail
//! addresses, and free-text names.
//!
//! The library is pure and stateless: every classifier, validator, formatter,
//! and masker is a total function over plain strings, safe to call from any
//! number of threads, with no I/O beyond diagnostic logging through the
//! [`log`] facade. The only fallible surfaces are masking-policy loading and
//! name-keyed dispatch, which return structured errors.
//!
//! ## Modules
//!
//! * `classify`: character-class membership predicates (digits, Latin,
//!   Hangul combinations) and the length-range violation check.
//! * `validators`: domain format acceptance (date, time, email, phone,
//!   business registration number, user id, password strength, URL).
//! * `formatters`: canonical display normalization (thousands grouping,
//!   phone and date hyphenation, special-char stripping, byte lengths) plus
//!   the keystroke-oriented phone formatter in `formatters::phone`.
//! * `maskers`: one-way display redaction of PII fields.
//! * `policy`: YAML masking policies binding record field names to masking
//!   categories, and their application to JSON records.
//! * `fields`: name-keyed dispatch over the validator and formatter suites.
//! * `errors`: the library error type.
//!
//! ## Usage Example
//!
//! ```rust
//! use maskform_core::{formatters, maskers, validators};
//!
//! // Calendar-checked date validation: the regex shape alone is not enough.
//! assert!(validators::is_valid_date("2024-02-29"));
//! assert!(!validators::is_valid_date("20230230"));
//!
//! // Canonical display form, idempotent under re-application.
//! assert_eq!(formatters::group_thousands("1234567"), "1,234,567");
//! assert_eq!(formatters::group_thousands("1,234,567"), "1,234,567");
//!
//! // One-way masking for rendering PII fields.
//! assert_eq!(maskers::mask_phone("010-1234-5678"), "010-****-5678");
//! assert_eq!(maskers::mask_name("갓댐희"), "갓*희");
//! ```
//!
//! ## Failure model
//!
//! Classifiers and validators are fail-closed: blank input returns `false`
//! with a warning-level diagnostic, and non-conforming input returns `false`
//! silently. Maskers are fail-open: input whose shape does not match is
//! returned unchanged — see the `maskers` module docs for the contract this
//! places on callers.
//!
//! License: MIT OR APACHE 2.0

pub mod classify;
pub mod errors;
pub mod fields;
pub mod formatters;
pub mod maskers;
pub mod policy;
pub mod validators;

/// Re-exports the library error type.
pub use errors::MaskformError;

/// Re-exports the name-keyed dispatch enums.
pub use fields::{FieldKind, FormatKind};

/// Re-exports the live phone formatter and its ordered pattern table.
pub use formatters::phone::{format_phone_live, live_patterns, PhonePattern};

/// Re-exports the masking-policy types and loaders.
pub use policy::{
    load_policy_by_name,
    policy_candidate_paths,
    FieldRule,
    MaskCategory,
    MaskPolicy,
};
