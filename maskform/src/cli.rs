// maskform/src/cli.rs
//! This file defines the command-line interface (CLI) for the maskform
//! application, including all available commands and their arguments.

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use maskform_core::{FieldKind, FormatKind, MaskCategory};

/// Top-level CLI definition.
#[derive(Parser, Debug)]
#[command(
    name = "maskform",
    version = env!("CARGO_PKG_VERSION"),
    about = "Validate, normalize, and mask Korean form-field text",
    long_about = "Maskform checks form-field text against the fixed Korean-market formats (dates, phone numbers, business registration numbers, resident registration numbers, and more), rewrites accepted values into canonical display form, and redacts PII fields before they are rendered or logged. Values are taken from the command line or streamed line by line from stdin.",
    arg_required_else_help = true,
)]
pub struct Cli {
    /// Suppress all informational and debug messages.
    #[arg(long, short = 'q')]
    pub quiet: bool,

    /// Enable debug logging.
    #[arg(long, short = 'd')]
    pub debug: bool,

    /// The subcommand to run
    #[command(subcommand)]
    pub command: Commands,
}

/// All available commands for the `maskform` CLI.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Checks a value (or stdin lines) against a domain format.
    #[command(about = "Checks a value (or stdin lines) against a domain format.")]
    Validate(ValidateCommand),

    /// Rewrites a value (or stdin lines) into canonical display form.
    #[command(about = "Rewrites a value (or stdin lines) into canonical display form.")]
    Format(FormatCommand),

    /// Redacts PII from a value, stdin lines, or JSON records.
    #[command(about = "Redacts PII from a value, stdin lines, or JSON records.")]
    Mask(MaskCommand),
}

/// Selectable domain formats for `validate`.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum KindChoice {
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

impl From<KindChoice> for FieldKind {
    fn from(choice: KindChoice) -> Self {
        match choice {
            KindChoice::Date => FieldKind::Date,
            KindChoice::Time => FieldKind::Time,
            KindChoice::Email => FieldKind::Email,
            KindChoice::Phone => FieldKind::Phone,
            KindChoice::CellPhone => FieldKind::CellPhone,
            KindChoice::BusinessNumber => FieldKind::BusinessNumber,
            KindChoice::UserId => FieldKind::UserId,
            KindChoice::Password => FieldKind::Password,
            KindChoice::Url => FieldKind::Url,
            KindChoice::SafeUrl => FieldKind::SafeUrl,
        }
    }
}

/// Selectable normalizations for `format`.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum FormatChoice {
    Thousands,
    Phone,
    PhoneLive,
    Date,
    StripSpecial,
}

impl From<FormatChoice> for FormatKind {
    fn from(choice: FormatChoice) -> Self {
        match choice {
            FormatChoice::Thousands => FormatKind::Thousands,
            FormatChoice::Phone => FormatKind::Phone,
            FormatChoice::PhoneLive => FormatKind::PhoneLive,
            FormatChoice::Date => FormatKind::Date,
            FormatChoice::StripSpecial => FormatKind::StripSpecial,
        }
    }
}

/// Selectable masking categories for `mask`.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum CategoryChoice {
    Email,
    EmailDomain,
    EmailFull,
    Phone,
    Rrn,
    Name,
}

impl From<CategoryChoice> for MaskCategory {
    fn from(choice: CategoryChoice) -> Self {
        match choice {
            CategoryChoice::Email => MaskCategory::Email,
            CategoryChoice::EmailDomain => MaskCategory::EmailDomain,
            CategoryChoice::EmailFull => MaskCategory::EmailFull,
            CategoryChoice::Phone => MaskCategory::Phone,
            CategoryChoice::Rrn => MaskCategory::Rrn,
            CategoryChoice::Name => MaskCategory::Name,
        }
    }
}

/// Arguments for the `validate` command.
#[derive(Parser, Debug)]
pub struct ValidateCommand {
    /// Domain format to check against.
    #[arg(long, short = 'k', value_enum, help = "Domain format to check against.")]
    pub kind: KindChoice,

    /// Value to check (reads stdin line by line if not provided).
    pub value: Option<String>,

    /// Emit one JSON object per input instead of human-readable text.
    #[arg(long, help = "Emit one JSON object per input instead of human-readable text.")]
    pub json: bool,
}

/// Arguments for the `format` command.
#[derive(Parser, Debug)]
pub struct FormatCommand {
    /// Normalization to apply.
    #[arg(long, short = 'k', value_enum, help = "Normalization to apply.")]
    pub kind: FormatChoice,

    /// Value to format (reads stdin line by line if not provided).
    pub value: Option<String>,

    /// Emit one JSON object per input instead of the bare result.
    #[arg(long, help = "Emit one JSON object per input instead of the bare result.")]
    pub json: bool,
}

/// Arguments for the `mask` command.
#[derive(Parser, Debug)]
pub struct MaskCommand {
    /// Masking category for plain values.
    #[arg(
        long,
        short = 'c',
        value_enum,
        required_unless_present_any = ["policy", "policy_file"],
        help = "Masking category applied to plain values."
    )]
    pub category: Option<CategoryChoice>,

    /// Treat each input as a JSON record and mask it with the named
    /// policy (`default` selects the built-in policy).
    #[arg(
        long,
        value_name = "NAME",
        conflicts_with = "category",
        help = "Mask JSON records with the named policy ('default' for the built-in one)."
    )]
    pub policy: Option<String>,

    /// Like --policy, but load the policy from an explicit YAML file.
    #[arg(
        long = "policy-file",
        value_name = "FILE",
        conflicts_with_all = ["category", "policy"],
        help = "Mask JSON records with a policy loaded from an explicit YAML file."
    )]
    pub policy_file: Option<PathBuf>,

    /// Value to mask (reads stdin line by line if not provided).
    pub value: Option<String>,

    /// Emit one JSON object per input instead of the bare result.
    #[arg(long, help = "Emit one JSON object per input instead of the bare result.")]
    pub json: bool,
}
