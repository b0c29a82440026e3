use std::time::Duration;

use tracing::{info, warn};

use intake_spec::{Advance, SubmissionOutcome, Wizard, WizardError, WizardStatus};

use crate::Submitter;
use crate::error::SubmissionError;

/// What a session-level advance did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEvent {
    Blocked,
    Moved(usize),
    /// The submission ran to completion; carries the resulting status.
    Submitted(WizardStatus),
}

/// One wizard wired to one submission collaborator.
pub struct IntakeSession<S> {
    wizard: Wizard,
    submitter: S,
    timeout: Duration,
    last_error: Option<SubmissionError>,
}

impl<S: Submitter> IntakeSession<S> {
    pub fn new(wizard: Wizard, submitter: S, timeout: Duration) -> Self {
        Self {
            wizard,
            submitter,
            timeout,
            last_error: None,
        }
    }

    pub fn wizard(&self) -> &Wizard {
        &self.wizard
    }

    /// Field edits go straight to the wizard.
    pub fn wizard_mut(&mut self) -> &mut Wizard {
        &mut self.wizard
    }

    pub fn submitter(&self) -> &S {
        &self.submitter
    }

    /// Why the most recent submission failed, if it did.
    pub fn last_error(&self) -> Option<&SubmissionError> {
        self.last_error.as_ref()
    }

    /// Advances the wizard and, past the last step, awaits the collaborator.
    ///
    /// Failures are reported once and never retried here. Dropping the
    /// future mid-submission leaves the wizard in `Submitting` until
    /// [`IntakeSession::retry`] is called.
    pub async fn advance(&mut self) -> Result<SessionEvent, WizardError> {
        match self.wizard.advance()? {
            Advance::Blocked => Ok(SessionEvent::Blocked),
            Advance::Moved(step) => Ok(SessionEvent::Moved(step)),
            Advance::Submit(payload) => {
                let result =
                    match tokio::time::timeout(self.timeout, self.submitter.submit(&payload)).await
                    {
                        Ok(result) => result,
                        Err(_) => Err(SubmissionError::TimedOut(self.timeout)),
                    };

                let outcome = match result {
                    Ok(()) => {
                        info!(form = payload.form_id(), "submission accepted");
                        self.last_error = None;
                        SubmissionOutcome::Succeeded
                    }
                    Err(error) => {
                        warn!(form = payload.form_id(), %error, "submission failed");
                        self.last_error = Some(error);
                        SubmissionOutcome::Failed
                    }
                };
                let status = self.wizard.on_submission_result(outcome)?;
                Ok(SessionEvent::Submitted(status))
            }
        }
    }

    pub fn retreat(&mut self) -> Result<usize, WizardError> {
        self.wizard.retreat()
    }

    /// Full reset after a failed submission.
    ///
    /// Also recovers a wizard left in `Submitting` when an [`advance`] future
    /// was dropped before the collaborator answered.
    ///
    /// [`advance`]: IntakeSession::advance
    pub fn retry(&mut self) -> Result<(), WizardError> {
        if self.wizard.status() == WizardStatus::Submitting {
            warn!(form = %self.wizard.spec().id, "abandoning unfinished submission");
            self.wizard.on_submission_result(SubmissionOutcome::Failed)?;
        }
        self.wizard.retry()?;
        self.last_error = None;
        Ok(())
    }
}
