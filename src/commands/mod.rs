//! Command implementations for skillplan.
//!
//! This module provides the dispatcher that routes CLI commands to their
//! implementations. The larger commands (`generate`, `check`) live in
//! their own modules; the small print-only commands are implemented here.

mod check;
mod generate;

use crate::cli::Command;
use crate::error::Result;
use crate::form::{self, FieldKind};
use crate::intake::IntakeForm;
use crate::plan;

/// Dispatch a command to its implementation.
///
/// This is the main entry point for command execution. Each command
/// is routed to its handler function.
pub fn dispatch(command: Command) -> Result<()> {
    match command {
        Command::Generate(args) => generate::cmd_generate(args),
        Command::Fields => cmd_fields(),
        Command::Template => cmd_template(),
        Command::Example => cmd_example(),
        Command::Check => check::cmd_check(),
    }
}

/// Execute the `skillplan fields` command.
fn cmd_fields() -> Result<()> {
    println!("Declared intake fields:");
    println!();

    for field in form::SCHEMA {
        let marker = if field.required { "*" } else { " " };
        println!("  {}{:<18} {:<12} {}", marker, field.name, field.kind.name(), field.label);
        if !field.choices.is_empty() {
            println!("    choices: {}", field.choices.join(", "));
        }
        if field.kind == FieldKind::MultiChoice && field.choices.is_empty() {
            println!("    choices: (free-form)");
        }
    }

    println!();
    println!("* required to generate a plan");
    Ok(())
}

/// Execute the `skillplan template` command.
fn cmd_template() -> Result<()> {
    print!("{}", plan::LEARNING_PLAN_TEMPLATE);
    Ok(())
}

/// Execute the `skillplan example` command.
fn cmd_example() -> Result<()> {
    print!("{}", IntakeForm::sample().to_yaml()?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fields_succeeds() {
        assert!(cmd_fields().is_ok());
    }

    #[test]
    fn template_succeeds() {
        assert!(cmd_template().is_ok());
    }

    #[test]
    fn example_succeeds() {
        assert!(cmd_example().is_ok());
    }

    #[test]
    fn dispatch_routes_to_correct_handler() {
        assert!(dispatch(Command::Fields).is_ok());
        assert!(dispatch(Command::Check).is_ok());
    }
}
