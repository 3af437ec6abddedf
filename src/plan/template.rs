//! Safe template engine for placeholder substitution.
//!
//! This module performs `${name}` substitution in strings. It is used to
//! render the learning-plan prompt from an intake record.
//!
//! # Syntax
//!
//! - `${name}` - Substitutes the value bound to `name`
//! - `$$` - Renders as literal `$`
//! - A lone `$` not followed by `{` or `$` passes through unchanged
//!
//! # Substitution semantics
//!
//! Substitution is *safe* (non-strict): a `${name}` whose name is not bound
//! in the record is left verbatim in the output rather than raising. Only a
//! malformed template (an unterminated `${` or an empty `${}`) is an error.
//! This keeps a stray placeholder visible in the generated text instead of
//! turning it into a hard failure.

use std::collections::HashMap;
use std::fmt;

/// Sentinel substituted for empty optional values and empty lists.
pub const NONE_PROVIDED: &str = "None provided";

/// A value bound to a placeholder name in an intake record.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// Free text or a single choice.
    Text(String),
    /// A whole number (hours, weeks).
    Number(u32),
    /// A multi-select, in selection order.
    List(Vec<String>),
}

impl Value {
    /// The string form substituted into the template.
    ///
    /// Lists are joined with `", "`; an empty list renders as the
    /// [`NONE_PROVIDED`] sentinel.
    pub fn render(&self) -> String {
        match self {
            Value::Text(s) => s.clone(),
            Value::Number(n) => n.to_string(),
            Value::List(items) if items.is_empty() => NONE_PROVIDED.to_string(),
            Value::List(items) => items.join(", "),
        }
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Text(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Text(s)
    }
}

impl From<u32> for Value {
    fn from(n: u32) -> Self {
        Value::Number(n)
    }
}

impl From<Vec<String>> for Value {
    fn from(items: Vec<String>) -> Self {
        Value::List(items)
    }
}

/// Error type for malformed templates.
///
/// Unbound placeholder names are *not* errors; they pass through verbatim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TemplateError {
    /// A `${` was found without a matching `}`.
    UnterminatedPlaceholder {
        /// The position of the `$` that opened the placeholder.
        position: usize,
    },
    /// An empty placeholder name was found (`${}`).
    EmptyPlaceholderName {
        /// The position of the `$` that opened the placeholder.
        position: usize,
    },
}

impl fmt::Display for TemplateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TemplateError::UnterminatedPlaceholder { position } => {
                write!(
                    f,
                    "unterminated placeholder '${{' at position {} in template",
                    position
                )
            }
            TemplateError::EmptyPlaceholderName { position } => {
                write!(
                    f,
                    "empty placeholder name '${{}}' at position {} in template",
                    position
                )
            }
        }
    }
}

impl std::error::Error for TemplateError {}

/// Render a template by substituting `${name}` placeholders from a record.
///
/// # Arguments
///
/// * `template` - The template string containing `${name}` placeholders
/// * `record` - A map of placeholder names to their values
///
/// # Returns
///
/// * `Ok(String)` - The rendered text; unbound placeholders are left verbatim
/// * `Err(TemplateError)` - Only if the template itself is malformed
///
/// The result is a pure function of `(record, template)`: identical inputs
/// always produce identical output.
pub fn substitute(
    template: &str,
    record: &HashMap<String, Value>,
) -> Result<String, TemplateError> {
    let mut result = String::with_capacity(template.len());
    let mut chars = template.char_indices().peekable();

    while let Some((pos, ch)) = chars.next() {
        if ch != '$' {
            result.push(ch);
            continue;
        }

        match chars.peek() {
            // $$ escapes to a literal $
            Some((_, '$')) => {
                chars.next();
                result.push('$');
            }
            Some((_, '{')) => {
                chars.next(); // consume the {
                let mut name = String::new();
                let closed = loop {
                    match chars.next() {
                        Some((_, '}')) => break true,
                        Some((_, c)) => name.push(c),
                        None => break false,
                    }
                };

                if !closed {
                    return Err(TemplateError::UnterminatedPlaceholder { position: pos });
                }
                if name.is_empty() {
                    return Err(TemplateError::EmptyPlaceholderName { position: pos });
                }

                match record.get(name.trim()) {
                    Some(value) => result.push_str(&value.render()),
                    // Unbound name: keep the token visible in the output
                    None => {
                        result.push_str("${");
                        result.push_str(&name);
                        result.push('}');
                    }
                }
            }
            // Lone $ is just a regular character
            _ => result.push('$'),
        }
    }

    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record<I, K, V>(pairs: I) -> HashMap<String, Value>
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<Value>,
    {
        pairs
            .into_iter()
            .map(|(k, v)| (k.into(), v.into()))
            .collect()
    }

    #[test]
    fn test_simple_substitution() {
        let rec = record([("name", "Alice"), ("greeting", "Hello")]);
        let result = substitute("${greeting}, ${name}!", &rec).unwrap();
        assert_eq!(result, "Hello, Alice!");
    }

    #[test]
    fn test_no_placeholders() {
        let rec = HashMap::new();
        let result = substitute("Just plain text", &rec).unwrap();
        assert_eq!(result, "Just plain text");
    }

    #[test]
    fn test_empty_template() {
        let rec = HashMap::new();
        let result = substitute("", &rec).unwrap();
        assert_eq!(result, "");
    }

    #[test]
    fn test_number_value() {
        let rec = record([("hours", 5u32)]);
        let result = substitute("${hours} hours/week", &rec).unwrap();
        assert_eq!(result, "5 hours/week");
    }

    #[test]
    fn test_list_joined_with_comma_space() {
        let rec = record([("tools", vec!["A".to_string(), "B".to_string()])]);
        let result = substitute("Tools: ${tools}", &rec).unwrap();
        assert_eq!(result, "Tools: A, B");
    }

    #[test]
    fn test_list_preserves_order() {
        let rec = record([(
            "tools",
            vec!["Claude".to_string(), "Copilot".to_string(), "Cursor".to_string()],
        )]);
        let result = substitute("${tools}", &rec).unwrap();
        assert_eq!(result, "Claude, Copilot, Cursor");
    }

    #[test]
    fn test_empty_list_renders_sentinel() {
        let rec = record([("tools", Vec::<String>::new())]);
        let result = substitute("Tools: ${tools}", &rec).unwrap();
        assert_eq!(result, "Tools: None provided");
    }

    #[test]
    fn test_unbound_placeholder_left_verbatim() {
        let rec = HashMap::new();
        let result = substitute("Hello ${name}", &rec).unwrap();
        assert_eq!(result, "Hello ${name}");
    }

    #[test]
    fn test_unbound_between_bound() {
        let rec = record([("a", "A"), ("c", "C")]);
        let result = substitute("${a} ${b} ${c}", &rec).unwrap();
        assert_eq!(result, "A ${b} C");
    }

    #[test]
    fn test_dollar_escape() {
        let rec = HashMap::new();
        let result = substitute("Costs $$5", &rec).unwrap();
        assert_eq!(result, "Costs $5");
    }

    #[test]
    fn test_lone_dollar_passes_through() {
        let rec = HashMap::new();
        let result = substitute("a $ b and trailing $", &rec).unwrap();
        assert_eq!(result, "a $ b and trailing $");
    }

    #[test]
    fn test_bare_name_not_a_placeholder() {
        // Only ${name} is placeholder syntax; $name is plain text.
        let rec = record([("name", "Alice")]);
        let result = substitute("Hello $name", &rec).unwrap();
        assert_eq!(result, "Hello $name");
    }

    #[test]
    fn test_unterminated_placeholder_error() {
        let rec = HashMap::new();
        let err = substitute("Hello ${name", &rec).unwrap_err();
        match err {
            TemplateError::UnterminatedPlaceholder { position } => assert_eq!(position, 6),
            _ => panic!("unexpected error type: {:?}", err),
        }
    }

    #[test]
    fn test_empty_placeholder_name_error() {
        let rec = HashMap::new();
        let err = substitute("Hello ${}", &rec).unwrap_err();
        match err {
            TemplateError::EmptyPlaceholderName { position } => assert_eq!(position, 6),
            _ => panic!("unexpected error type: {:?}", err),
        }
    }

    #[test]
    fn test_whitespace_in_placeholder_name() {
        let rec = record([("name", "Alice")]);
        let result = substitute("Hello ${ name }!", &rec).unwrap();
        assert_eq!(result, "Hello Alice!");
    }

    #[test]
    fn test_multiple_occurrences() {
        let rec = record([("x", "X")]);
        let result = substitute("${x}-${x}-${x}", &rec).unwrap();
        assert_eq!(result, "X-X-X");
    }

    #[test]
    fn test_adjacent_placeholders() {
        let rec = record([("a", "A"), ("b", "B")]);
        let result = substitute("${a}${b}", &rec).unwrap();
        assert_eq!(result, "AB");
    }

    #[test]
    fn test_empty_text_value_substitutes_empty() {
        let rec = record([("empty", "")]);
        let result = substitute("before${empty}after", &rec).unwrap();
        assert_eq!(result, "beforeafter");
    }

    #[test]
    fn test_deterministic() {
        let rec = record([
            ("role", Value::from("Data Analyst")),
            ("goals", Value::from(vec!["A".to_string(), "B".to_string()])),
        ]);
        let template = "Role: ${role}\nGoals: ${goals}\nMissing: ${other}";
        let first = substitute(template, &rec).unwrap();
        let second = substitute(template, &rec).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_multiline_template() {
        let rec = record([("role", "Analyst"), ("industry", "Retail")]);
        let template = "# Plan for ${role}\n\n## Industry\n${industry}";
        let result = substitute(template, &rec).unwrap();
        assert_eq!(result, "# Plan for Analyst\n\n## Industry\nRetail");
    }

    #[test]
    fn test_braces_without_dollar_are_plain() {
        let rec = HashMap::new();
        let result = substitute("if (x) { y } else { z }", &rec).unwrap();
        assert_eq!(result, "if (x) { y } else { z }");
    }

    #[test]
    fn test_unicode_in_template_and_values() {
        let rec = record([("emoji", "🎯"), ("text", "日本語")]);
        let result = substitute("${emoji} ${text}!", &rec).unwrap();
        assert_eq!(result, "🎯 日本語!");
    }

    #[test]
    fn test_error_display() {
        let err = TemplateError::UnterminatedPlaceholder { position: 10 };
        assert_eq!(
            err.to_string(),
            "unterminated placeholder '${' at position 10 in template"
        );

        let err = TemplateError::EmptyPlaceholderName { position: 3 };
        assert_eq!(
            err.to_string(),
            "empty placeholder name '${}' at position 3 in template"
        );
    }

    #[test]
    fn test_value_render_forms() {
        assert_eq!(Value::Text("abc".into()).render(), "abc");
        assert_eq!(Value::Number(12).render(), "12");
        assert_eq!(
            Value::List(vec!["A".into(), "B".into()]).render(),
            "A, B"
        );
        assert_eq!(Value::List(vec![]).render(), NONE_PROVIDED);
    }
}
