// maskform/src/commands/validate.rs
//! `maskform validate` implementation.

use anyhow::Result;
use is_terminal::IsTerminal;
use owo_colors::OwoColorize;
use serde_json::json;

use maskform_core::FieldKind;

use super::for_each_input;
use crate::cli::ValidateCommand;

pub fn run(cmd: &ValidateCommand) -> Result<()> {
    let kind: FieldKind = cmd.kind.into();
    let colored = std::io::stdout().is_terminal();

    for_each_input(&cmd.value, |value| {
        let valid = kind.validate(value);
        if cmd.json {
            println!(
                "{}",
                json!({ "kind": kind.as_str(), "value": value, "valid": valid })
            );
        } else if colored {
            if valid {
                println!("{}\t{}", "valid".green(), value);
            } else {
                println!("{}\t{}", "invalid".red(), value);
            }
        } else {
            println!("{}\t{}", if valid { "valid" } else { "invalid" }, value);
        }
        Ok(())
    })
}
