//! Plan generation.
//!
//! This module ties the intake record to the static template:
//!
//! - **Template**: safe `${name}` substitution engine
//! - **Text**: the static learning-plan template and fixed user-facing strings
//! - **Generator**: [`generate`], the one entry point the surface calls
//!
//! [`generate`] always returns displayable text. Missing required fields
//! produce a warning string and a malformed template produces an error
//! string; neither outcome panics or propagates.

mod template;
mod text;

pub use template::{NONE_PROVIDED, TemplateError, Value, substitute};
pub use text::{
    LEARNING_PLAN_TEMPLATE, PLAN_BEGIN_MARKER, PLAN_END_MARKER, RENDER_FAILURE_PREFIX,
    REQUIRED_WARNING_PREFIX, TITLE_BLOCK,
};

use crate::intake::IntakeForm;

/// Generate the learning-plan prompt for a submitted intake form.
///
/// Returns, in order of precedence:
/// 1. the required-field warning, naming each missing field, if any
///    required field is empty or absent (no substitution is attempted);
/// 2. the render-failure error string if the template is malformed;
/// 3. the rendered prompt.
///
/// The result is deterministic: the same form always yields the same text.
pub fn generate(form: &IntakeForm) -> String {
    let missing = form.missing_required();
    if !missing.is_empty() {
        return required_warning(&missing);
    }

    match substitute(LEARNING_PLAN_TEMPLATE, &form.to_record()) {
        Ok(text) => text,
        Err(err) => format!("{}{}", RENDER_FAILURE_PREFIX, err),
    }
}

/// The warning returned when required fields are missing.
pub fn required_warning(missing: &[&str]) -> String {
    format!("{}{}.", REQUIRED_WARNING_PREFIX, missing.join(", "))
}
