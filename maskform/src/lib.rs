// maskform/src/lib.rs
//! # Maskform CLI
//!
//! Terminal front end for the `maskform-core` engine: checks form-field
//! text against the fixed Korean-market formats, normalizes accepted
//! values for display, and redacts PII fields, from arguments or piped
//! input.

pub mod cli;
pub mod commands;
pub mod logger;
