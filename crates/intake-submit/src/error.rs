use std::time::Duration;

use thiserror::Error;

/// Any reason a submission did not reach a 2xx response.
#[derive(Debug, Error)]
pub enum SubmissionError {
    #[error("no submission endpoint configured")]
    MissingEndpoint,
    #[error("invalid submission endpoint '{0}'")]
    InvalidEndpoint(String),
    #[error("failed to build http client: {0}")]
    Client(#[source] reqwest::Error),
    #[error("submission request failed: {0}")]
    Transport(#[source] reqwest::Error),
    #[error("submission endpoint answered with status {0}")]
    Status(u16),
    #[error("submission did not complete within {0:?}")]
    TimedOut(Duration),
}
