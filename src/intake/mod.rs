//! Intake form model and record building.
//!
//! An [`IntakeForm`] is the deserialized snapshot of what the learner
//! submitted. [`IntakeForm::to_record`] turns it into the record the
//! template renderer consumes: every declared field name bound to a typed
//! value, with empty optional scalars replaced by the "None provided"
//! sentinel. Multi-select fields keep their selection order.

mod io;

use crate::plan::{NONE_PROVIDED, Value};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// One submitted intake form.
///
/// Every field is optional at the serde level so a minimal intake file
/// parses; [`IntakeForm::missing_required`] reports which required fields
/// still need values before a plan can be generated.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct IntakeForm {
    /// The learner's role, e.g. "Data Analyst".
    pub role: String,

    /// Day-to-day responsibilities.
    pub responsibilities: String,

    /// Hours per week available for learning.
    pub weekly_hours: Option<u32>,

    /// Total plan duration in weeks.
    pub total_weeks: Option<u32>,

    pub team_function: String,
    pub learning_style: String,
    pub industry: String,
    pub persona: String,
    pub ai_tools: Vec<String>,
    pub client_tools: Vec<String>,
    pub collab_tools: Vec<String>,
    pub platforms: Vec<String>,
    pub skills: String,
    pub goals: Vec<String>,
    pub tech_level: String,
    pub use_case: String,
}

impl IntakeForm {
    /// Labels of required fields that are empty or absent, in form order.
    ///
    /// A numeric zero counts as absent: zero hours a week or a zero-week
    /// duration cannot produce a plan.
    pub fn missing_required(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self.role.trim().is_empty() {
            missing.push("Role");
        }
        if self.responsibilities.trim().is_empty() {
            missing.push("Responsibilities");
        }
        if self.weekly_hours.unwrap_or(0) == 0 {
            missing.push("Weekly Hours");
        }
        if self.total_weeks.unwrap_or(0) == 0 {
            missing.push("Duration");
        }
        missing
    }

    /// Build the input record the renderer consumes.
    ///
    /// Every declared field name is bound. Empty optional scalars become
    /// the sentinel; lists are passed through typed so the renderer can
    /// apply its own join and empty-list handling.
    pub fn to_record(&self) -> HashMap<String, Value> {
        let mut record = HashMap::new();

        record.insert("role".to_string(), scalar(&self.role));
        record.insert(
            "responsibilities".to_string(),
            scalar(&self.responsibilities),
        );
        record.insert("weekly_hours".to_string(), number(self.weekly_hours));
        record.insert("total_weeks".to_string(), number(self.total_weeks));

        record.insert("team_function".to_string(), scalar(&self.team_function));
        record.insert("learning_style".to_string(), scalar(&self.learning_style));
        record.insert("industry".to_string(), scalar(&self.industry));
        record.insert("persona".to_string(), scalar(&self.persona));
        record.insert("skills".to_string(), scalar(&self.skills));
        record.insert("tech_level".to_string(), scalar(&self.tech_level));
        record.insert("use_case".to_string(), scalar(&self.use_case));

        record.insert("ai_tools".to_string(), Value::List(self.ai_tools.clone()));
        record.insert(
            "client_tools".to_string(),
            Value::List(self.client_tools.clone()),
        );
        record.insert(
            "collab_tools".to_string(),
            Value::List(self.collab_tools.clone()),
        );
        record.insert(
            "platforms".to_string(),
            Value::List(self.platforms.clone()),
        );
        record.insert("goals".to_string(), Value::List(self.goals.clone()));

        record
    }

    /// A filled sample form for `skillplan example`.
    pub fn sample() -> Self {
        IntakeForm {
            role: "Data Analyst".to_string(),
            responsibilities: "Build weekly sales reports and dashboards for regional managers"
                .to_string(),
            weekly_hours: Some(5),
            total_weeks: Some(12),
            team_function: "Analytics".to_string(),
            learning_style: "Hands-on projects".to_string(),
            industry: "Retail".to_string(),
            persona: "Regional sales managers".to_string(),
            ai_tools: vec!["ChatGPT".to_string(), "Claude".to_string()],
            client_tools: vec![],
            collab_tools: vec!["Google Workspace".to_string(), "Slack".to_string()],
            platforms: vec!["Udemy".to_string(), "YouTube".to_string()],
            skills: "SQL - Intermediate, Sheets - Advanced".to_string(),
            goals: vec![
                "Automate routine work".to_string(),
                "Build AI dashboards".to_string(),
            ],
            tech_level: "Medium (formulas/scripts)".to_string(),
            use_case: "Natural-language querying over the sales warehouse".to_string(),
        }
    }
}

fn scalar(s: &str) -> Value {
    if s.trim().is_empty() {
        Value::Text(NONE_PROVIDED.to_string())
    } else {
        Value::Text(s.to_string())
    }
}

fn number(n: Option<u32>) -> Value {
    match n {
        Some(n) => Value::Number(n),
        None => Value::Text(NONE_PROVIDED.to_string()),
    }
}
