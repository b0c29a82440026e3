use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Sentinel option that reveals the auxiliary free-text input.
pub const OTHER_OPTION: &str = "Other";

/// Input kinds supported by the wizard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub enum FieldKind {
    #[serde(rename = "text")]
    ShortText,
    #[serde(rename = "url")]
    Url,
    #[serde(rename = "email")]
    Email,
    #[serde(rename = "select")]
    SingleChoice,
    #[serde(rename = "multiselect")]
    MultiChoice,
}

impl FieldKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            FieldKind::ShortText => "text",
            FieldKind::Url => "url",
            FieldKind::Email => "email",
            FieldKind::SingleChoice => "select",
            FieldKind::MultiChoice => "multiselect",
        }
    }

    /// Whether the kind draws its values from a fixed option list.
    pub fn is_choice(&self) -> bool {
        matches!(self, FieldKind::SingleChoice | FieldKind::MultiChoice)
    }
}

/// A single named input inside a step.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct FieldSpec {
    pub name: String,
    #[serde(default)]
    pub label: String,
    #[serde(rename = "type")]
    pub kind: FieldKind,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub options: Vec<String>,
    #[serde(default)]
    pub required: bool,
    /// Placeholder for the auxiliary "Other" input.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub other_placeholder: Option<String>,
}

impl FieldSpec {
    pub fn has_option(&self, option: &str) -> bool {
        self.options.iter().any(|candidate| candidate == option)
    }

    /// True for multi-choice fields that offer the "Other" sentinel.
    pub fn offers_other(&self) -> bool {
        self.kind == FieldKind::MultiChoice && self.has_option(OTHER_OPTION)
    }

    /// Key under which the auxiliary "Other" text is stored.
    pub fn other_key(&self) -> Option<String> {
        self.offers_other().then(|| other_key(&self.name))
    }
}

pub fn other_key(field_name: &str) -> String {
    format!("{field_name}_other")
}
