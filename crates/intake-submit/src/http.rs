//! reqwest-backed submission collaborator.
//!
//! Posts the flattened answers to a hosted form-ingestion endpoint. Any 2xx
//! counts as accepted; the response body is never inspected.

use async_trait::async_trait;
use reqwest::header::ACCEPT;
use tracing::{debug, warn};

use intake_spec::SubmissionPayload;

use crate::config::{SubmitEncoding, SubmitterConfig};
use crate::error::SubmissionError;
use crate::Submitter;

const USER_AGENT: &str = concat!("intake-wizard/", env!("CARGO_PKG_VERSION"));

#[derive(Clone)]
pub struct HttpSubmitter {
    client: reqwest::Client,
    endpoint: reqwest::Url,
    encoding: SubmitEncoding,
}

impl HttpSubmitter {
    pub fn new(config: &SubmitterConfig) -> Result<Self, SubmissionError> {
        let endpoint = config.endpoint.trim();
        if endpoint.is_empty() {
            return Err(SubmissionError::MissingEndpoint);
        }
        let endpoint = reqwest::Url::parse(endpoint)
            .map_err(|_| SubmissionError::InvalidEndpoint(endpoint.to_string()))?;

        let client = reqwest::Client::builder()
            .timeout(config.timeout())
            .user_agent(USER_AGENT)
            .build()
            .map_err(SubmissionError::Client)?;

        Ok(Self {
            client,
            endpoint,
            encoding: config.encoding,
        })
    }

    pub fn endpoint(&self) -> &str {
        self.endpoint.as_str()
    }
}

#[async_trait]
impl Submitter for HttpSubmitter {
    async fn submit(&self, payload: &SubmissionPayload) -> Result<(), SubmissionError> {
        let request = self
            .client
            .post(self.endpoint.clone())
            .header(ACCEPT, "application/json");

        let request = match self.encoding {
            SubmitEncoding::Json => request.json(payload),
            SubmitEncoding::Multipart => {
                let form = payload
                    .iter()
                    .fold(reqwest::multipart::Form::new(), |form, (key, value)| {
                        form.text(key.to_string(), value.to_string())
                    });
                request.multipart(form)
            }
        };

        debug!(endpoint = %self.endpoint, encoding = ?self.encoding, "posting submission");
        let response = request.send().await.map_err(|error| {
            warn!(%error, "submission transport failure");
            SubmissionError::Transport(error)
        })?;

        let status = response.status();
        if status.is_success() {
            Ok(())
        } else {
            warn!(status = status.as_u16(), "submission rejected");
            Err(SubmissionError::Status(status.as_u16()))
        }
    }
}
