use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// A stored answer: free text for single-value kinds, an ordered selection
/// for multi-choice fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AnswerValue {
    Text(String),
    Choices(Vec<String>),
}

impl AnswerValue {
    pub fn as_text(&self) -> Option<&str> {
        match self {
            AnswerValue::Text(text) => Some(text),
            AnswerValue::Choices(_) => None,
        }
    }

    pub fn as_choices(&self) -> Option<&[String]> {
        match self {
            AnswerValue::Choices(choices) => Some(choices),
            AnswerValue::Text(_) => None,
        }
    }

    /// Empty after trimming, or an empty selection.
    pub fn is_blank(&self) -> bool {
        match self {
            AnswerValue::Text(text) => text.trim().is_empty(),
            AnswerValue::Choices(choices) => choices.is_empty(),
        }
    }

    /// Transport form: selections are joined with ", ".
    pub fn to_transport(&self) -> String {
        match self {
            AnswerValue::Text(text) => text.clone(),
            AnswerValue::Choices(choices) => choices.join(", "),
        }
    }
}

/// User-entered answers keyed by field name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AnswerSet {
    values: BTreeMap<String, AnswerValue>,
}

impl AnswerSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, name: &str) -> Option<&AnswerValue> {
        self.values.get(name)
    }

    pub fn text(&self, name: &str) -> Option<&str> {
        self.get(name).and_then(AnswerValue::as_text)
    }

    pub fn choices(&self, name: &str) -> &[String] {
        self.get(name)
            .and_then(AnswerValue::as_choices)
            .unwrap_or_default()
    }

    pub fn set_text(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.values
            .insert(name.into(), AnswerValue::Text(value.into()));
    }

    /// Adds `option` when absent, removes it otherwise. Returns whether the
    /// option is selected afterwards.
    pub fn toggle_choice(&mut self, name: &str, option: &str) -> bool {
        let entry = self
            .values
            .entry(name.to_string())
            .or_insert_with(|| AnswerValue::Choices(Vec::new()));
        if let AnswerValue::Text(_) = entry {
            *entry = AnswerValue::Choices(Vec::new());
        }
        let AnswerValue::Choices(selection) = entry else {
            return false;
        };
        if let Some(index) = selection.iter().position(|value| value == option) {
            selection.remove(index);
            false
        } else {
            selection.push(option.to_string());
            true
        }
    }

    /// Blank or missing.
    pub fn is_blank(&self, name: &str) -> bool {
        self.get(name).is_none_or(AnswerValue::is_blank)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.values.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &AnswerValue)> {
        self.values.iter().map(|(key, value)| (key.as_str(), value))
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn clear(&mut self) {
        self.values.clear();
    }
}

/// Per-field error flags from the last validation attempt.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ErrorSet {
    flags: BTreeMap<String, bool>,
}

impl ErrorSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_flagged(&self, name: &str) -> bool {
        self.flags.get(name).copied().unwrap_or(false)
    }

    pub fn set(&mut self, name: impl Into<String>, flagged: bool) {
        self.flags.insert(name.into(), flagged);
    }

    pub fn clear_field(&mut self, name: &str) {
        if let Some(flag) = self.flags.get_mut(name) {
            *flag = false;
        }
    }

    pub fn flagged(&self) -> impl Iterator<Item = &str> {
        self.flags
            .iter()
            .filter(|(_, flagged)| **flagged)
            .map(|(name, _)| name.as_str())
    }

    pub fn any(&self) -> bool {
        self.flags.values().any(|flagged| *flagged)
    }

    pub fn clear(&mut self) {
        self.flags.clear();
    }
}
