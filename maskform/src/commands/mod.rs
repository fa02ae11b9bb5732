// maskform/src/commands/mod.rs
//! Implementations of the maskform subcommands.

pub mod format;
pub mod mask;
pub mod validate;

use anyhow::Result;
use std::io::{self, BufRead};

/// Runs `op` over the positional value when present, otherwise over every
/// stdin line. Piped terminal output often carries ANSI escapes, so stdin
/// lines are stripped before they reach the engine.
pub(crate) fn for_each_input<F>(value: &Option<String>, mut op: F) -> Result<()>
where
    F: FnMut(&str) -> Result<()>,
{
    if let Some(value) = value {
        return op(value);
    }
    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        let line = line?;
        let stripped = strip_ansi_escapes::strip(line.as_bytes());
        op(&String::from_utf8_lossy(&stripped))?;
    }
    Ok(())
}
