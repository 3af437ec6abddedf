//! File I/O for intake forms.

use super::IntakeForm;
use crate::error::{Result, SkillplanError};
use std::path::Path;

impl IntakeForm {
    /// Load an intake form from disk.
    ///
    /// Files with a `.json` extension are parsed as JSON; everything else
    /// is parsed as YAML.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            SkillplanError::UserError(format!(
                "failed to read intake file '{}': {}",
                path.display(),
                e
            ))
        })?;
        Self::parse(&content, is_json(path))
    }

    /// Parse intake file content.
    pub fn parse(content: &str, json: bool) -> Result<Self> {
        if json {
            serde_json::from_str(content).map_err(|e| {
                SkillplanError::UserError(format!("failed to parse intake JSON: {}", e))
            })
        } else {
            serde_yaml::from_str(content).map_err(|e| {
                SkillplanError::UserError(format!("failed to parse intake YAML: {}", e))
            })
        }
    }

    /// Serialize the form to YAML, for `skillplan example` output.
    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(self).map_err(|e| {
            SkillplanError::UserError(format!("failed to serialize intake form: {}", e))
        })
    }
}

fn is_json(path: &Path) -> bool {
    path.extension().is_some_and(|ext| ext == "json")
}
