//! The intake wizard state machine.
//!
//! A [`Wizard`] owns the form configuration, the answers entered so far, the
//! per-field error flags and the current position. Navigation forward is
//! gated by validation of the current step; advancing from the last step
//! hands back a [`SubmissionPayload`] and parks the wizard in
//! [`WizardStatus::Submitting`] until the collaborator reports an outcome.

use serde::Serialize;
use thiserror::Error;
use tracing::{debug, info, warn};

use crate::answers::{AnswerSet, ErrorSet};
use crate::payload::{SubmissionPayload, flatten};
use crate::spec::field::FieldKind;
use crate::spec::form::{FormSpec, SpecError};
use crate::spec::step::StepSpec;
use crate::validate::{StepValidation, validate_step};
use crate::visibility::other_visible;

/// Lifecycle of a wizard instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum WizardStatus {
    InProgress,
    Submitting,
    Succeeded,
    Failed,
}

impl WizardStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            WizardStatus::InProgress => "in_progress",
            WizardStatus::Submitting => "submitting",
            WizardStatus::Succeeded => "succeeded",
            WizardStatus::Failed => "failed",
        }
    }
}

impl std::fmt::Display for WizardStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// What the collaborator reported for a submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmissionOutcome {
    Succeeded,
    Failed,
}

/// Result of a forward navigation attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Advance {
    /// Validation failed; the error flags say which fields.
    Blocked,
    /// Moved to the given step.
    Moved(usize),
    /// The last step passed; the payload must be sent to the collaborator.
    Submit(SubmissionPayload),
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum WizardError {
    #[error("unknown field '{0}'")]
    UnknownField(String),
    #[error("field '{field}' is a {kind} field")]
    WrongKind { field: String, kind: &'static str },
    #[error("'{option}' is not an option of field '{field}'")]
    UnknownOption { field: String, option: String },
    #[error("wizard is {0} and does not accept input")]
    NotEditable(WizardStatus),
    #[error("no submission is pending (wizard is {0})")]
    NoSubmissionPending(WizardStatus),
    #[error("nothing to retry (wizard is {0})")]
    NothingToRetry(WizardStatus),
}

/// Position within the wizard, 1-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct WizardProgress {
    pub current: usize,
    pub total: usize,
}

#[derive(Debug, Clone)]
pub struct Wizard {
    spec: FormSpec,
    current_step: usize,
    status: WizardStatus,
    answers: AnswerSet,
    errors: ErrorSet,
}

impl Wizard {
    /// Checks `spec` and starts at step 1 with no answers.
    pub fn new(spec: FormSpec) -> Result<Self, SpecError> {
        spec.check()?;
        Ok(Self {
            spec,
            current_step: 1,
            status: WizardStatus::InProgress,
            answers: AnswerSet::new(),
            errors: ErrorSet::new(),
        })
    }

    pub fn spec(&self) -> &FormSpec {
        &self.spec
    }

    pub fn status(&self) -> WizardStatus {
        self.status
    }

    pub fn current_step_index(&self) -> usize {
        self.current_step
    }

    pub fn current_step(&self) -> &StepSpec {
        // `current_step` stays within 1..=N and `check` guarantees N >= 1.
        &self.spec.steps[self.current_step - 1]
    }

    pub fn progress(&self) -> WizardProgress {
        WizardProgress {
            current: self.current_step,
            total: self.spec.step_count(),
        }
    }

    pub fn answers(&self) -> &AnswerSet {
        &self.answers
    }

    pub fn errors(&self) -> &ErrorSet {
        &self.errors
    }

    pub fn has_error(&self, name: &str) -> bool {
        self.errors.is_flagged(name)
    }

    /// Whether the auxiliary "Other" input of `field` is shown.
    pub fn other_visible(&self, field: &str) -> bool {
        self.spec
            .field(field)
            .is_some_and(|spec| other_visible(spec, &self.answers))
    }

    /// Overwrites a single-value answer and clears its error flag.
    ///
    /// Accepts the auxiliary `<field>_other` key of multi-choice fields that
    /// offer "Other". For single-choice fields the empty string means
    /// nothing is selected.
    pub fn set_field(&mut self, name: &str, value: impl Into<String>) -> Result<(), WizardError> {
        self.ensure_editable()?;
        let value = value.into();

        if let Some(field) = self.spec.field(name) {
            match field.kind {
                FieldKind::MultiChoice => {
                    return Err(WizardError::WrongKind {
                        field: name.to_string(),
                        kind: field.kind.as_str(),
                    });
                }
                FieldKind::SingleChoice if !value.is_empty() && !field.has_option(&value) => {
                    return Err(WizardError::UnknownOption {
                        field: name.to_string(),
                        option: value,
                    });
                }
                _ => {}
            }
        } else if self.spec.other_owner(name).is_none() {
            return Err(WizardError::UnknownField(name.to_string()));
        }

        self.answers.set_text(name, value);
        self.errors.clear_field(name);
        Ok(())
    }

    /// Flips `option` in a multi-choice selection and clears the field's
    /// error flag. Returns whether the option is now selected.
    ///
    /// Deselecting "Other" hides the auxiliary input but keeps its text, so
    /// re-selecting restores it. Hidden text is never submitted.
    pub fn toggle_choice(&mut self, field_name: &str, option: &str) -> Result<bool, WizardError> {
        self.ensure_editable()?;
        let field = self
            .spec
            .field(field_name)
            .ok_or_else(|| WizardError::UnknownField(field_name.to_string()))?;
        if field.kind != FieldKind::MultiChoice {
            return Err(WizardError::WrongKind {
                field: field_name.to_string(),
                kind: field.kind.as_str(),
            });
        }
        if !field.has_option(option) {
            return Err(WizardError::UnknownOption {
                field: field_name.to_string(),
                option: option.to_string(),
            });
        }

        let selected = self.answers.toggle_choice(field_name, option);
        self.errors.clear_field(field_name);
        debug!(field = field_name, option, selected, "toggled choice");
        Ok(selected)
    }

    /// Recomputes the error flags of the current step's fields.
    pub fn validate_current_step(&mut self) -> bool {
        let result = self.check_current_step();
        for (name, flagged) in &result.flags {
            self.errors.set(name.clone(), *flagged);
        }
        result.valid
    }

    /// Read-only variant of [`Wizard::validate_current_step`].
    pub fn check_current_step(&self) -> StepValidation {
        validate_step(self.current_step(), &self.answers)
    }

    pub fn advance(&mut self) -> Result<Advance, WizardError> {
        self.ensure_editable()?;

        if !self.validate_current_step() {
            let missing = self.errors.flagged().collect::<Vec<_>>();
            debug!(step = self.current_step, ?missing, "step validation failed");
            return Ok(Advance::Blocked);
        }

        if self.current_step < self.spec.step_count() {
            self.current_step += 1;
            debug!(step = self.current_step, "advanced");
            return Ok(Advance::Moved(self.current_step));
        }

        self.status = WizardStatus::Submitting;
        let payload = flatten(&self.spec, &self.answers);
        info!(form = %self.spec.id, fields = payload.len(), "submitting answers");
        Ok(Advance::Submit(payload))
    }

    /// Steps back without validating. No-op on the first step.
    pub fn retreat(&mut self) -> Result<usize, WizardError> {
        self.ensure_editable()?;
        if self.current_step > 1 {
            self.current_step -= 1;
            debug!(step = self.current_step, "retreated");
        }
        Ok(self.current_step)
    }

    pub fn on_submission_result(
        &mut self,
        outcome: SubmissionOutcome,
    ) -> Result<WizardStatus, WizardError> {
        if self.status != WizardStatus::Submitting {
            return Err(WizardError::NoSubmissionPending(self.status));
        }

        match outcome {
            SubmissionOutcome::Succeeded => {
                self.status = WizardStatus::Succeeded;
                self.answers.clear();
                self.errors.clear();
                info!(form = %self.spec.id, "submission succeeded");
            }
            SubmissionOutcome::Failed => {
                self.status = WizardStatus::Failed;
                warn!(form = %self.spec.id, "submission failed");
            }
        }
        Ok(self.status)
    }

    /// Starts over after a failed submission: step 1, no answers.
    pub fn retry(&mut self) -> Result<(), WizardError> {
        if self.status != WizardStatus::Failed {
            return Err(WizardError::NothingToRetry(self.status));
        }
        self.current_step = 1;
        self.status = WizardStatus::InProgress;
        self.answers.clear();
        self.errors.clear();
        debug!(form = %self.spec.id, "wizard reset for retry");
        Ok(())
    }

    fn ensure_editable(&self) -> Result<(), WizardError> {
        match self.status {
            WizardStatus::InProgress => Ok(()),
            other => Err(WizardError::NotEditable(other)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn wizard() -> Wizard {
        Wizard::new(FormSpec::builtin().expect("builtin form")).expect("wizard")
    }

    #[test]
    fn set_field_rejects_unknown_names_and_options() {
        let mut wizard = wizard();
        assert_eq!(
            wizard.set_field("nickname", "x"),
            Err(WizardError::UnknownField("nickname".into()))
        );
        assert!(matches!(
            wizard.set_field("industry", "Mining"),
            Err(WizardError::UnknownOption { .. })
        ));
        assert!(matches!(
            wizard.set_field("painPoints", "Other"),
            Err(WizardError::WrongKind { .. })
        ));
        assert!(wizard.set_field("industry", "").is_ok());
        assert!(wizard.set_field("painPoints_other", "notes").is_ok());
    }

    #[test]
    fn toggle_choice_requires_multi_choice_field() {
        let mut wizard = wizard();
        assert!(matches!(
            wizard.toggle_choice("industry", "SaaS"),
            Err(WizardError::WrongKind { .. })
        ));
        assert!(matches!(
            wizard.toggle_choice("painPoints", "Bad weather"),
            Err(WizardError::UnknownOption { .. })
        ));
    }

    #[test]
    fn optional_fields_are_never_flagged() {
        let mut wizard = wizard();
        assert!(!wizard.validate_current_step());
        assert!(wizard.has_error("company"));
        assert!(wizard.has_error("industry"));
        assert!(!wizard.has_error("website"));
    }

    #[test]
    fn result_without_pending_submission_is_rejected() {
        let mut wizard = wizard();
        assert_eq!(
            wizard.on_submission_result(SubmissionOutcome::Succeeded),
            Err(WizardError::NoSubmissionPending(WizardStatus::InProgress))
        );
        assert_eq!(
            wizard.retry(),
            Err(WizardError::NothingToRetry(WizardStatus::InProgress))
        );
    }
}
