use std::collections::BTreeSet;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::spec::field::{FieldSpec, other_key};
use crate::spec::step::StepSpec;

const DEFAULT_FORM: &str = include_str!("../../forms/intake_form.json");

/// Problems found while loading or checking a form configuration.
#[derive(Debug, Error)]
pub enum SpecError {
    #[error("failed to parse form configuration: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("form '{0}' defines no steps")]
    NoSteps(String),
    #[error("step {found} is out of order; expected position {expected}")]
    StepOrder { expected: usize, found: usize },
    #[error("step {0} defines no fields")]
    EmptyStep(usize),
    #[error("field name '{0}' is defined more than once")]
    DuplicateField(String),
    #[error("choice field '{0}' lists no options")]
    MissingOptions(String),
    #[error("field '{0}' lists options but is not a choice field")]
    UnexpectedOptions(String),
    #[error("field '{field}' repeats option '{option}'")]
    DuplicateOption { field: String, option: String },
    #[error("field '{field}' collides with the auxiliary input of '{owner}'")]
    AuxiliaryCollision { field: String, owner: String },
}

/// Copy shown by the replacement views outside the step flow.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct FormPresentation {
    #[serde(default = "default_submitting_message")]
    pub submitting_message: String,
    #[serde(default = "default_success_title")]
    pub success_title: String,
    #[serde(default = "default_success_message")]
    pub success_message: String,
    #[serde(default = "default_failure_title")]
    pub failure_title: String,
    #[serde(default = "default_failure_message")]
    pub failure_message: String,
    #[serde(default = "default_retry_label")]
    pub retry_label: String,
}

fn default_submitting_message() -> String {
    "Submitting your request...".into()
}

fn default_success_title() -> String {
    "Thank You!".into()
}

fn default_success_message() -> String {
    "We've received your request and will be in touch within 24 hours.".into()
}

fn default_failure_title() -> String {
    "Something went wrong".into()
}

fn default_failure_message() -> String {
    "Please try again or contact us directly.".into()
}

fn default_retry_label() -> String {
    "Try Again".into()
}

impl Default for FormPresentation {
    fn default() -> Self {
        Self {
            submitting_message: default_submitting_message(),
            success_title: default_success_title(),
            success_message: default_success_message(),
            failure_title: default_failure_title(),
            failure_message: default_failure_message(),
            retry_label: default_retry_label(),
        }
    }
}

/// Top-level intake form definition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct FormSpec {
    pub id: String,
    pub title: String,
    pub version: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default)]
    pub presentation: FormPresentation,
    pub steps: Vec<StepSpec>,
}

impl FormSpec {
    /// Parses and checks a form configuration.
    pub fn from_json(json: &str) -> Result<Self, SpecError> {
        let spec: FormSpec = serde_json::from_str(json)?;
        spec.check()?;
        Ok(spec)
    }

    /// The built-in four step lead intake form.
    pub fn builtin() -> Result<Self, SpecError> {
        Self::from_json(DEFAULT_FORM)
    }

    pub fn step_count(&self) -> usize {
        self.steps.len()
    }

    /// Looks up a step by its 1-based position.
    pub fn step(&self, position: usize) -> Option<&StepSpec> {
        position
            .checked_sub(1)
            .and_then(|index| self.steps.get(index))
    }

    pub fn fields(&self) -> impl Iterator<Item = &FieldSpec> {
        self.steps.iter().flat_map(|step| step.fields.iter())
    }

    pub fn field(&self, name: &str) -> Option<&FieldSpec> {
        self.fields().find(|field| field.name == name)
    }

    /// Returns the multi-choice field owning the auxiliary key `name`.
    pub fn other_owner(&self, name: &str) -> Option<&FieldSpec> {
        self.fields()
            .find(|field| field.other_key().as_deref() == Some(name))
    }

    /// Checks the structural rules the wizard relies on.
    pub fn check(&self) -> Result<(), SpecError> {
        if self.steps.is_empty() {
            return Err(SpecError::NoSteps(self.id.clone()));
        }

        let mut names = BTreeSet::new();
        for (index, step) in self.steps.iter().enumerate() {
            let expected = index + 1;
            if step.position != expected {
                return Err(SpecError::StepOrder {
                    expected,
                    found: step.position,
                });
            }
            if step.fields.is_empty() {
                return Err(SpecError::EmptyStep(step.position));
            }
            for field in &step.fields {
                if !names.insert(field.name.as_str()) {
                    return Err(SpecError::DuplicateField(field.name.clone()));
                }
                check_options(field)?;
            }
        }

        for field in self.fields().filter(|field| field.offers_other()) {
            let key = other_key(&field.name);
            if names.contains(key.as_str()) {
                return Err(SpecError::AuxiliaryCollision {
                    field: key,
                    owner: field.name.clone(),
                });
            }
        }

        Ok(())
    }
}

fn check_options(field: &FieldSpec) -> Result<(), SpecError> {
    if !field.kind.is_choice() {
        if field.options.is_empty() {
            return Ok(());
        }
        return Err(SpecError::UnexpectedOptions(field.name.clone()));
    }

    if field.options.is_empty() {
        return Err(SpecError::MissingOptions(field.name.clone()));
    }

    let mut seen = BTreeSet::new();
    for option in &field.options {
        if !seen.insert(option.as_str()) {
            return Err(SpecError::DuplicateOption {
                field: field.name.clone(),
                option: option.clone(),
            });
        }
    }
    Ok(())
}
