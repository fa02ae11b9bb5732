// maskform-core/tests/policy_tests.rs
use anyhow::Result;
use std::io::Write;
use tempfile::NamedTempFile;

use maskform_core::policy::{MaskCategory, MaskPolicy};

#[test]
fn load_default_policy() {
    let policy = MaskPolicy::load_default().unwrap();
    assert!(!policy.rules.is_empty());
    assert_eq!(policy.name, "default");
    let email_rule = policy.rules.iter().find(|r| r.field == "email").unwrap();
    assert_eq!(email_rule.category, MaskCategory::Email);
    assert!(email_rule.is_enabled());
}

#[test]
fn load_from_file() -> Result<()> {
    let yaml_content = r#"
name: intranet
version: "1.0"
rules:
  - field: personal_email
    category: email_domain
  - field: owner
    category: name
    enabled: false
"#;
    let mut file = NamedTempFile::new()?;
    file.write_all(yaml_content.as_bytes())?;
    let policy = MaskPolicy::load_from_file(file.path())?;
    assert_eq!(policy.name, "intranet");
    assert_eq!(policy.rules.len(), 2);
    assert_eq!(policy.rules[0].category, MaskCategory::EmailDomain);
    assert!(!policy.rules[1].is_enabled());
    Ok(())
}

#[test]
fn load_from_file_rejects_unknown_categories() -> Result<()> {
    let yaml_content = r#"
name: broken
version: "1.0"
rules:
  - field: email
    category: not_a_category
"#;
    let mut file = NamedTempFile::new()?;
    file.write_all(yaml_content.as_bytes())?;
    assert!(MaskPolicy::load_from_file(file.path()).is_err());
    Ok(())
}

#[test]
fn validation_collects_duplicate_fields() {
    let yaml_content = r#"
name: dupes
version: "1.0"
rules:
  - field: email
    category: email
  - field: email
    category: email_full
"#;
    let policy: MaskPolicy = serde_yml::from_str(yaml_content).unwrap();
    let err = policy.validate().unwrap_err();
    assert!(err.to_string().contains("Duplicate rule for field 'email'"));
}

#[test]
fn apply_masks_only_enabled_matching_fields() {
    let policy = MaskPolicy::load_default().unwrap();
    assert_eq!(policy.apply("name", "갓댐희"), "갓*희");
    assert_eq!(policy.apply("phone", "010-1234-5678"), "010-****-5678");
    // No rule for this field: pass-through.
    assert_eq!(policy.apply("nickname", "갓댐희"), "갓댐희");
}

#[test]
fn apply_to_record_walks_nested_structures() {
    let policy = MaskPolicy::load_default().unwrap();
    let mut record = serde_json::json!({
        "name": "갓댐희",
        "email": "abcdefg12345@naver.com",
        "age": 29,
        "contacts": [
            { "phone": "010-1234-5678", "label": "personal" }
        ]
    });
    policy.apply_to_record(&mut record);
    assert_eq!(record["name"], "갓*희");
    assert_eq!(record["email"], "ab**********@naver.com");
    assert_eq!(record["age"], 29);
    assert_eq!(record["contacts"][0]["phone"], "010-****-5678");
    assert_eq!(record["contacts"][0]["label"], "personal");
}

#[test]
fn disabled_rules_do_not_mask() {
    let yaml_content = r#"
name: partial
version: "1.0"
rules:
  - field: rrn
    category: rrn
    enabled: false
"#;
    let policy: MaskPolicy = serde_yml::from_str(yaml_content).unwrap();
    policy.validate().unwrap();
    assert_eq!(policy.apply("rrn", "990101-1234567"), "990101-1234567");
}

#[test]
fn load_by_name_reports_missing_policies() {
    let err = maskform_core::load_policy_by_name("no-such-policy").unwrap_err();
    assert!(err.to_string().contains("no-such-policy"));
}

#[test]
fn category_parses_from_str() {
    use std::str::FromStr;
    assert_eq!(MaskCategory::from_str("email_full").unwrap(), MaskCategory::EmailFull);
    assert!(MaskCategory::from_str("bogus").is_err());
}
