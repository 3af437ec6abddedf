//! Implementation of the `skillplan check` command.
//!
//! Lints the shipped template against the field schema. Safe substitution
//! means a typo'd placeholder never fails a render; this lint is where
//! such typos get caught instead.

use crate::error::{Result, SkillplanError};
use crate::form;
use crate::plan;
use regex::Regex;
use std::collections::BTreeSet;
use std::sync::LazyLock;

/// Matches `${name}` placeholders and captures the name.
static PLACEHOLDER_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\$\{\s*([^}]*?)\s*\}").expect("Invalid placeholder regex"));

/// Execute the `skillplan check` command.
pub fn cmd_check() -> Result<()> {
    let placeholders = extract_placeholders(plan::LEARNING_PLAN_TEMPLATE);

    let mut problems = Vec::new();
    for name in &placeholders {
        if !form::is_valid_field_name(name) {
            problems.push(format!("malformed placeholder name '{}'", name));
        } else if form::field(name).is_none() {
            problems.push(format!("unknown placeholder '{}'", name));
        }
    }

    let unreferenced: Vec<_> = form::SCHEMA
        .iter()
        .filter(|f| !placeholders.contains(f.name))
        .map(|f| f.name)
        .collect();

    println!(
        "Template references {} placeholder(s) across {} declared field(s).",
        placeholders.len(),
        form::SCHEMA.len()
    );

    for name in &unreferenced {
        println!("Warning: field '{}' is never referenced by the template", name);
    }

    if problems.is_empty() {
        println!("OK: every placeholder names a declared field.");
        Ok(())
    } else {
        Err(SkillplanError::CheckError(problems.join("; ")))
    }
}

/// Collect the distinct placeholder names referenced by a template.
fn extract_placeholders(template: &str) -> BTreeSet<String> {
    PLACEHOLDER_REGEX
        .captures_iter(template)
        .map(|cap| cap[1].to_string())
        .collect()
}
