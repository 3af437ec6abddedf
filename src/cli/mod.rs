//! CLI argument parsing for skillplan.
//!
//! Uses clap derive macros for declarative argument definitions.
//! This module defines the command structure; actual implementations
//! are in the `commands` module.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Skillplan: turns a structured learning-plan intake form into a
/// ready-to-paste LLM prompt.
///
/// The intake form is a YAML (or JSON) file of named fields describing a
/// learner's role, schedule, tools, and goals. Generation is pure text
/// work: nothing is stored and nothing leaves the machine.
#[derive(Parser, Debug)]
#[command(name = "skillplan")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

impl Cli {
    /// Parse command-line arguments.
    pub fn parse_args() -> Self {
        Self::parse()
    }
}

/// Available commands for skillplan.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Generate the learning-plan prompt from an intake file.
    ///
    /// Prints the prompt to stdout, or a warning naming any missing
    /// required fields (role, responsibilities, weekly hours, duration).
    Generate(GenerateArgs),

    /// List the declared intake fields.
    ///
    /// Shows each field's name, kind, required flag, and choices.
    Fields,

    /// Print the raw plan template.
    ///
    /// Placeholders are shown unsubstituted, `${name}` style.
    Template,

    /// Print a filled sample intake file (YAML) to start from.
    Example,

    /// Lint the shipped template against the field schema.
    ///
    /// Fails if any `${name}` placeholder does not name a declared field;
    /// warns about declared fields the template never references.
    Check,
}

/// Arguments for the `generate` command.
#[derive(Parser, Debug)]
pub struct GenerateArgs {
    /// Path to the intake file (YAML, or JSON with a .json extension).
    pub intake: PathBuf,

    /// Write the generated text to a file instead of stdout.
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}
