//! Error types for the skillplan CLI.
//!
//! Uses thiserror for derive macros and provides user-actionable error
//! messages. Render-path outcomes (missing required fields, malformed
//! template) are deliberately *not* errors: they are user-facing strings
//! returned by `plan::generate`. This enum covers the CLI path only.

use crate::exit_codes;
use thiserror::Error;

/// Main error type for skillplan operations.
#[derive(Error, Debug)]
pub enum SkillplanError {
    /// User provided invalid arguments or an unreadable/unparseable file.
    #[error("{0}")]
    UserError(String),

    /// The shipped template failed the `check` lint.
    #[error("Template check failed: {0}")]
    CheckError(String),
}

impl SkillplanError {
    /// Returns the appropriate exit code for this error type.
    pub fn exit_code(&self) -> i32 {
        match self {
            SkillplanError::UserError(_) => exit_codes::USER_ERROR,
            SkillplanError::CheckError(_) => exit_codes::CHECK_FAILURE,
        }
    }
}

/// Result type alias for skillplan operations.
pub type Result<T> = std::result::Result<T, SkillplanError>;
