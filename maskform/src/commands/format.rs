// maskform/src/commands/format.rs
//! `maskform format` implementation.

use anyhow::Result;
use serde_json::json;

use maskform_core::FormatKind;

use super::for_each_input;
use crate::cli::FormatCommand;

pub fn run(cmd: &FormatCommand) -> Result<()> {
    let kind: FormatKind = cmd.kind.into();

    for_each_input(&cmd.value, |value| {
        let output = kind.format(value);
        if cmd.json {
            println!(
                "{}",
                json!({ "kind": kind.as_str(), "input": value, "output": output })
            );
        } else {
            println!("{}", output);
        }
        Ok(())
    })
}
