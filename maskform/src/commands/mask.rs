// maskform/src/commands/mask.rs
//! `maskform mask` implementation.
//!
//! Two modes: plain values masked with an explicit category, or JSON
//! records masked field-by-field with a policy. Maskers are fail-open, so
//! output equal to the input means nothing matched the expected shape.

use anyhow::{bail, Context, Result};
use serde_json::json;

use maskform_core::{load_policy_by_name, MaskCategory, MaskPolicy};

use super::for_each_input;
use crate::cli::MaskCommand;

pub fn run(cmd: &MaskCommand) -> Result<()> {
    if cmd.policy.is_some() || cmd.policy_file.is_some() {
        let policy = load_policy(cmd)?;
        return for_each_input(&cmd.value, |line| {
            let mut record: serde_json::Value = serde_json::from_str(line)
                .with_context(|| format!("Input is not a JSON record: {}", line))?;
            policy.apply_to_record(&mut record);
            println!("{}", record);
            Ok(())
        });
    }

    let Some(choice) = cmd.category else {
        bail!("--category is required unless --policy or --policy-file is given");
    };
    let category: MaskCategory = choice.into();

    for_each_input(&cmd.value, |value| {
        let masked = category.apply(value);
        if cmd.json {
            println!(
                "{}",
                json!({ "category": category.as_str(), "output": masked })
            );
        } else {
            println!("{}", masked);
        }
        Ok(())
    })
}

fn load_policy(cmd: &MaskCommand) -> Result<MaskPolicy> {
    if let Some(path) = &cmd.policy_file {
        return MaskPolicy::load_from_file(path);
    }
    match cmd.policy.as_deref() {
        Some("default") | None => MaskPolicy::load_default(),
        Some(name) => load_policy_by_name(name),
    }
}
