// File: maskform-core/src/policy.rs
//! Masking policy configuration.
//!
//! A policy names the record fields that carry PII and the masking
//! category applied to each. Policies are plain YAML: the built-in
//! default is embedded in the binary, explicit files can be loaded
//! directly, and named policies are discovered from the working
//! directory's `.maskform/policies` or the user's config directory.
//!
//! License: MIT OR APACHE 2.0

use anyhow::{Context, Result};
use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use crate::errors::MaskformError;
use crate::maskers;

/// Masking categories understood by the policy engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MaskCategory {
    /// Local part masked after two characters; domain untouched.
    Email,
    /// Local part and domain name masked; TLD kept verbatim.
    EmailDomain,
    /// Local part masked after four characters; domain replaced outright.
    EmailFull,
    /// Middle group masked; area code and subscriber number visible.
    Phone,
    /// Birth date and century/gender digit kept; rest collapsed.
    Rrn,
    /// First (and for longer names, last) character kept.
    Name,
}

impl MaskCategory {
    /// Applies this category's masker to `value`.
    pub fn apply(self, value: &str) -> String {
        match self {
            MaskCategory::Email => maskers::mask_email(value),
            MaskCategory::EmailDomain => maskers::mask_email_domain(value),
            MaskCategory::EmailFull => maskers::mask_email_full(value),
            MaskCategory::Phone => maskers::mask_phone(value),
            MaskCategory::Rrn => maskers::mask_rrn(value),
            MaskCategory::Name => maskers::mask_name(value),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            MaskCategory::Email => "email",
            MaskCategory::EmailDomain => "email_domain",
            MaskCategory::EmailFull => "email_full",
            MaskCategory::Phone => "phone",
            MaskCategory::Rrn => "rrn",
            MaskCategory::Name => "name",
        }
    }
}

impl FromStr for MaskCategory {
    type Err = MaskformError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "email" => Ok(MaskCategory::Email),
            "email_domain" => Ok(MaskCategory::EmailDomain),
            "email_full" => Ok(MaskCategory::EmailFull),
            "phone" => Ok(MaskCategory::Phone),
            "rrn" => Ok(MaskCategory::Rrn),
            "name" => Ok(MaskCategory::Name),
            other => Err(MaskformError::UnknownCategory(other.to_string())),
        }
    }
}

/// Binds one record field to a masking category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldRule {
    /// Record field name the rule applies to.
    pub field: String,
    /// Masking category applied to matching fields.
    pub category: MaskCategory,
    /// Explicit override; omitted means enabled.
    #[serde(default)]
    pub enabled: Option<bool>,
}

impl FieldRule {
    pub fn is_enabled(&self) -> bool {
        self.enabled.unwrap_or(true)
    }
}

/// A named set of field rules.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MaskPolicy {
    pub name: String,
    pub description: Option<String>,
    pub version: String,
    pub rules: Vec<FieldRule>,
}

impl MaskPolicy {
    /// Loads a masking policy from a YAML file.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        info!("Loading masking policy from: {}", path.display());
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read policy file {}", path.display()))?;
        let policy: MaskPolicy = serde_yml::from_str(&text)
            .with_context(|| format!("Failed to parse policy file {}", path.display()))?;

        policy.validate()?;
        info!(
            "Loaded policy '{}' with {} rules.",
            policy.name,
            policy.rules.len()
        );
        Ok(policy)
    }

    /// Loads the built-in default policy from the embedded configuration.
    pub fn load_default() -> Result<Self> {
        debug!("Loading default masking policy from embedded string...");
        let default_yaml = include_str!("../config/default_policy.yaml");
        let policy: MaskPolicy =
            serde_yml::from_str(default_yaml).context("Failed to parse default policy")?;
        policy.validate()?;
        debug!("Loaded {} default policy rules.", policy.rules.len());
        Ok(policy)
    }

    /// Validates policy integrity, collecting every problem before
    /// failing.
    pub fn validate(&self) -> Result<()> {
        let mut seen = HashSet::new();
        let mut errors = Vec::new();

        if self.name.trim().is_empty() {
            errors.push("Policy has an empty `name` field.".to_string());
        }
        for rule in &self.rules {
            if rule.field.is_empty() {
                errors.push("A rule has an empty `field` name.".to_string());
            } else if !seen.insert(rule.field.as_str()) {
                errors.push(format!("Duplicate rule for field '{}'.", rule.field));
            }
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(MaskformError::PolicyValidation(errors.join("\n")).into())
        }
    }

    /// Finds the enabled rule for `field`, if any.
    pub fn rule_for(&self, field: &str) -> Option<&FieldRule> {
        self.rules
            .iter()
            .find(|rule| rule.field == field && rule.is_enabled())
    }

    /// Masks `value` according to the rule registered for `field`.
    /// Fields without an enabled rule pass through unchanged.
    pub fn apply(&self, field: &str, value: &str) -> String {
        match self.rule_for(field) {
            Some(rule) => rule.category.apply(value),
            None => value.to_string(),
        }
    }

    /// Recursively masks every string value in `record` whose key has an
    /// enabled rule. Arrays and nested objects are walked; non-string
    /// leaves are left alone.
    pub fn apply_to_record(&self, record: &mut serde_json::Value) {
        match record {
            serde_json::Value::Object(map) => {
                for (key, entry) in map.iter_mut() {
                    match entry {
                        serde_json::Value::String(text) => {
                            if let Some(rule) = self.rule_for(key) {
                                *text = rule.category.apply(text);
                            }
                        }
                        _ => self.apply_to_record(entry),
                    }
                }
            }
            serde_json::Value::Array(items) => {
                for item in items.iter_mut() {
                    self.apply_to_record(item);
                }
            }
            _ => {}
        }
    }
}

/// Candidate locations for a policy named `name`, in lookup order: the
/// working directory's `.maskform/policies`, then the user config
/// directory.
pub fn policy_candidate_paths(name: &str) -> Vec<PathBuf> {
    let file = format!("{}.yaml", name);
    let mut paths = vec![PathBuf::from(".maskform").join("policies").join(&file)];
    if let Some(config_dir) = dirs::config_dir() {
        paths.push(config_dir.join("maskform").join("policies").join(&file));
    }
    paths
}

/// Loads a policy by name from the first candidate path that exists.
pub fn load_policy_by_name(name: &str) -> Result<MaskPolicy> {
    for candidate in policy_candidate_paths(name) {
        if candidate.is_file() {
            debug!("Policy '{}' resolved to {}", name, candidate.display());
            return MaskPolicy::load_from_file(&candidate);
        }
    }
    warn!("Policy '{}' not found in any candidate path.", name);
    Err(MaskformError::PolicyNotFound(name.to_string()).into())
}
