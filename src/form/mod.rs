//! The declared intake field schema.
//!
//! The schema is the fixed set of fields a template version knows about.
//! Four fields are required to generate a plan; everything else is
//! personalization. Field names double as the placeholder names in the
//! plan template.

use regex::Regex;
use std::sync::LazyLock;

/// Regex pattern for valid field (and placeholder) names.
static FIELD_NAME_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-z][a-z0-9_]*$").expect("Invalid field name regex"));

/// The kind of input a field accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// A single line of free text.
    ShortText,
    /// Multi-line free text.
    LongText,
    /// A whole number.
    Number,
    /// Exactly one of the declared choices (custom values allowed).
    SingleChoice,
    /// Any subset of the declared choices, in selection order.
    MultiChoice,
}

impl FieldKind {
    /// Short name used in schema listings.
    pub fn name(&self) -> &'static str {
        match self {
            FieldKind::ShortText => "text",
            FieldKind::LongText => "long text",
            FieldKind::Number => "number",
            FieldKind::SingleChoice => "choice",
            FieldKind::MultiChoice => "multi-choice",
        }
    }
}

/// A single declared intake field.
#[derive(Debug, Clone)]
pub struct Field {
    /// Unique key; also the placeholder name in the template.
    pub name: &'static str,

    /// Human-readable label shown in listings and warnings.
    pub label: &'static str,

    /// The kind of input this field accepts.
    pub kind: FieldKind,

    /// Whether plan generation refuses to run without this field.
    pub required: bool,

    /// Declared choices for choice-kind fields; empty otherwise.
    pub choices: &'static [&'static str],
}

/// All declared fields of the reference template version, in form order.
pub const SCHEMA: &[Field] = &[
    Field {
        name: "role",
        label: "Role",
        kind: FieldKind::ShortText,
        required: true,
        choices: &[],
    },
    Field {
        name: "responsibilities",
        label: "Responsibilities",
        kind: FieldKind::LongText,
        required: true,
        choices: &[],
    },
    Field {
        name: "weekly_hours",
        label: "Weekly Hours",
        kind: FieldKind::Number,
        required: true,
        choices: &[],
    },
    Field {
        name: "total_weeks",
        label: "Duration",
        kind: FieldKind::Number,
        required: true,
        choices: &[],
    },
    Field {
        name: "team_function",
        label: "Team Function",
        kind: FieldKind::SingleChoice,
        required: false,
        choices: &[
            "Analytics",
            "Marketing",
            "Creative",
            "HR",
            "Security",
            "Sales",
            "Leadership",
            "Other",
        ],
    },
    Field {
        name: "learning_style",
        label: "Preferred Learning Style",
        kind: FieldKind::SingleChoice,
        required: false,
        choices: &[
            "Video",
            "Hands-on projects",
            "Interactive coding",
            "Reading articles",
            "Mixed",
        ],
    },
    Field {
        name: "industry",
        label: "Client Industry",
        kind: FieldKind::ShortText,
        required: false,
        choices: &[],
    },
    Field {
        name: "persona",
        label: "Primary Persona Served",
        kind: FieldKind::ShortText,
        required: false,
        choices: &[],
    },
    Field {
        name: "ai_tools",
        label: "AI Tools Available",
        kind: FieldKind::MultiChoice,
        required: false,
        choices: &[
            "Cursor",
            "Copilot",
            "ChatGPT",
            "Claude",
            "Gemini",
            "Perplexity",
            "Other",
        ],
    },
    Field {
        name: "client_tools",
        label: "Client-Approved Tools",
        kind: FieldKind::MultiChoice,
        required: false,
        choices: &[],
    },
    Field {
        name: "collab_tools",
        label: "Collaboration Tools",
        kind: FieldKind::MultiChoice,
        required: false,
        choices: &[
            "Google Workspace",
            "Slack",
            "Jira",
            "Monday",
            "SharePoint",
            "GitHub",
            "Other",
        ],
    },
    Field {
        name: "platforms",
        label: "Learning Platforms",
        kind: FieldKind::MultiChoice,
        required: false,
        choices: &["Udemy", "Google Cloud Skills Boost", "YouTube", "Other"],
    },
    Field {
        name: "skills",
        label: "Existing Tools and Skills",
        kind: FieldKind::ShortText,
        required: false,
        choices: &[],
    },
    Field {
        name: "goals",
        label: "Goals",
        kind: FieldKind::MultiChoice,
        required: false,
        choices: &[
            "Automate routine work",
            "Build AI dashboards",
            "Learn AI fundamentals",
            "Grow into strategist/lead",
            "Other",
        ],
    },
    Field {
        name: "tech_level",
        label: "Technical Comfort Level",
        kind: FieldKind::SingleChoice,
        required: false,
        choices: &[
            "Low (UI tools only)",
            "Medium (formulas/scripts)",
            "High (APIs, cloud, notebooks)",
        ],
    },
    Field {
        name: "use_case",
        label: "Dream AI Use Case",
        kind: FieldKind::ShortText,
        required: false,
        choices: &[],
    },
];

/// Look up a declared field by name.
pub fn field(name: &str) -> Option<&'static Field> {
    SCHEMA.iter().find(|f| f.name == name)
}

/// Whether `name` is shaped like a valid field/placeholder name.
pub fn is_valid_field_name(name: &str) -> bool {
    FIELD_NAME_REGEX.is_match(name)
}
