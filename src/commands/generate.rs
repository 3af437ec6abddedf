//! Implementation of the `skillplan generate` command.
//!
//! Loads an intake file, generates the plan prompt (or the missing-field
//! warning), and prints it to stdout or writes it to `--output`.

use crate::cli::GenerateArgs;
use crate::error::{Result, SkillplanError};
use crate::intake::IntakeForm;
use crate::plan;

/// Execute the `skillplan generate` command.
///
/// Generation itself never fails: missing required fields and template
/// problems come back as displayable text. Only the file I/O around it
/// can error.
pub fn cmd_generate(args: GenerateArgs) -> Result<()> {
    let form = IntakeForm::load(&args.intake)?;
    let text = plan::generate(&form);

    match &args.output {
        Some(path) => {
            std::fs::write(path, &text).map_err(|e| {
                SkillplanError::UserError(format!(
                    "failed to write output file '{}': {}",
                    path.display(),
                    e
                ))
            })?;
            println!("Wrote {}", path.display());
        }
        None => print!("{}", text),
    }

    Ok(())
}
