// File: maskform-core/src/fields.rs
//! Name-keyed dispatch over the validator and formatter suites.
//!
//! The CLI and policy layers address the pure functions by kind name;
//! this module is the single mapping between those names and the
//! functions themselves.
//!
//! License: MIT OR APACHE 2.0

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::MaskformError;
use crate::{formatters, validators};

/// The domain formats the validator suite understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldKind {
    Date,
    Time,
    Email,
    Phone,
    CellPhone,
    BusinessNumber,
    UserId,
    Password,
    Url,
    SafeUrl,
}

impl FieldKind {
    /// Every kind, in declaration order.
    pub const ALL: [FieldKind; 10] = [
        FieldKind::Date,
        FieldKind::Time,
        FieldKind::Email,
        FieldKind::Phone,
        FieldKind::CellPhone,
        FieldKind::BusinessNumber,
        FieldKind::UserId,
        FieldKind::Password,
        FieldKind::Url,
        FieldKind::SafeUrl,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            FieldKind::Date => "date",
            FieldKind::Time => "time",
            FieldKind::Email => "email",
            FieldKind::Phone => "phone",
            FieldKind::CellPhone => "cell_phone",
            FieldKind::BusinessNumber => "business_number",
            FieldKind::UserId => "user_id",
            FieldKind::Password => "password",
            FieldKind::Url => "url",
            FieldKind::SafeUrl => "safe_url",
        }
    }

    /// Runs the validator for this kind.
    pub fn validate(self, value: &str) -> bool {
        match self {
            FieldKind::Date => validators::is_valid_date(value),
            FieldKind::Time => validators::is_valid_time(value),
            FieldKind::Email => validators::is_valid_email(value),
            FieldKind::Phone => validators::is_valid_phone(value),
            FieldKind::CellPhone => validators::is_valid_cell_phone(value),
            FieldKind::BusinessNumber => validators::is_valid_business_number(value),
            FieldKind::UserId => validators::is_valid_user_id(value),
            FieldKind::Password => validators::is_valid_password(value),
            FieldKind::Url => validators::is_valid_url(value),
            FieldKind::SafeUrl => validators::is_safe_url(value),
        }
    }
}

impl FromStr for FieldKind {
    type Err = MaskformError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        FieldKind::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| MaskformError::UnknownFieldKind(s.to_string()))
    }
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The normalizations the formatter suite provides.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FormatKind {
    Thousands,
    Phone,
    PhoneLive,
    Date,
    StripSpecial,
}

impl FormatKind {
    /// Every kind, in declaration order.
    pub const ALL: [FormatKind; 5] = [
        FormatKind::Thousands,
        FormatKind::Phone,
        FormatKind::PhoneLive,
        FormatKind::Date,
        FormatKind::StripSpecial,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            FormatKind::Thousands => "thousands",
            FormatKind::Phone => "phone",
            FormatKind::PhoneLive => "phone_live",
            FormatKind::Date => "date",
            FormatKind::StripSpecial => "strip_special",
        }
    }

    /// Runs the formatter for this kind.
    pub fn format(self, value: &str) -> String {
        match self {
            FormatKind::Thousands => formatters::group_thousands(value),
            FormatKind::Phone => formatters::hyphenate_phone(value),
            FormatKind::PhoneLive => formatters::phone::format_phone_live(value),
            FormatKind::Date => formatters::hyphenate_date(value),
            FormatKind::StripSpecial => formatters::strip_special_chars(value),
        }
    }
}

impl FromStr for FormatKind {
    type Err = MaskformError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        FormatKind::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| MaskformError::UnknownFormatKind(s.to_string()))
    }
}

impl fmt::Display for FormatKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
