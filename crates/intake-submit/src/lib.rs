#![allow(missing_docs)]

pub mod config;
pub mod error;
pub mod http;
pub mod session;

use async_trait::async_trait;

use intake_spec::SubmissionPayload;

pub use config::{SubmitEncoding, SubmitterConfig};
pub use error::SubmissionError;
pub use http::HttpSubmitter;
pub use session::{IntakeSession, SessionEvent};

/// The external endpoint that durably records completed answers.
#[async_trait]
pub trait Submitter: Send + Sync {
    async fn submit(&self, payload: &SubmissionPayload) -> Result<(), SubmissionError>;
}
