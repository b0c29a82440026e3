use serde::Serialize;

use crate::answers::{AnswerSet, AnswerValue};
use crate::spec::field::{FieldKind, FieldSpec};
use crate::spec::form::FormSpec;
use crate::spec::step::StepSpec;

/// Outcome of checking the required fields of a single step.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StepValidation {
    pub step: usize,
    pub valid: bool,
    /// Error flag for every field of the step, in field order.
    pub flags: Vec<(String, bool)>,
}

impl StepValidation {
    pub fn missing_required(&self) -> impl Iterator<Item = &str> {
        self.flags
            .iter()
            .filter(|(_, flagged)| *flagged)
            .map(|(name, _)| name.as_str())
    }
}

/// A problem with a stored answer found by [`validate`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationError {
    pub field: String,
    pub message: String,
    pub code: String,
}

/// Result of validating a complete answer set against a form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationResult {
    pub valid: bool,
    pub errors: Vec<ValidationError>,
    pub missing_required: Vec<String>,
    pub unknown_fields: Vec<String>,
}

/// A required field fails when its trimmed text or its selection is empty.
pub fn validate_step(step: &StepSpec, answers: &AnswerSet) -> StepValidation {
    let flags = step
        .fields
        .iter()
        .map(|field| (field.name.clone(), field.required && answers.is_blank(&field.name)))
        .collect::<Vec<_>>();
    let valid = flags.iter().all(|(_, flagged)| !flagged);

    StepValidation {
        step: step.position,
        valid,
        flags,
    }
}

/// Validates every step plus the shape of each stored value.
pub fn validate(spec: &FormSpec, answers: &AnswerSet) -> ValidationResult {
    let mut errors = Vec::new();
    let mut missing_required = Vec::new();

    for step in &spec.steps {
        let step_result = validate_step(step, answers);
        missing_required.extend(step_result.missing_required().map(str::to_string));
        for field in &step.fields {
            if let Some(value) = answers.get(&field.name)
                && let Some(error) = validate_value(field, value)
            {
                errors.push(error);
            }
        }
    }

    let unknown_fields = answers
        .keys()
        .filter(|key| spec.field(key).is_none() && spec.other_owner(key).is_none())
        .map(str::to_string)
        .collect::<Vec<_>>();

    for key in answers.keys() {
        if spec.other_owner(key).is_some() && answers.text(key).is_none() {
            errors.push(base_error(key, "auxiliary input must be text", "type_mismatch"));
        }
    }

    ValidationResult {
        valid: errors.is_empty() && missing_required.is_empty() && unknown_fields.is_empty(),
        errors,
        missing_required,
        unknown_fields,
    }
}

fn validate_value(field: &FieldSpec, value: &AnswerValue) -> Option<ValidationError> {
    match (field.kind, value) {
        (FieldKind::MultiChoice, AnswerValue::Choices(choices)) => choices
            .iter()
            .find(|choice| !field.has_option(choice))
            .map(|_| base_error(&field.name, "invalid option selected", "option_mismatch")),
        (FieldKind::MultiChoice, AnswerValue::Text(_)) => Some(base_error(
            &field.name,
            "expected a list of options",
            "type_mismatch",
        )),
        (_, AnswerValue::Choices(_)) => Some(base_error(
            &field.name,
            "expected a single value",
            "type_mismatch",
        )),
        (FieldKind::SingleChoice, AnswerValue::Text(text))
            if !text.is_empty() && !field.has_option(text) =>
        {
            Some(base_error(&field.name, "invalid option selected", "option_mismatch"))
        }
        _ => None,
    }
}

fn base_error(field: &str, message: &str, code: &str) -> ValidationError {
    ValidationError {
        field: field.to_string(),
        message: message.into(),
        code: code.into(),
    }
}
