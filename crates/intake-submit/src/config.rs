use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Body encoding used for the outbound request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SubmitEncoding {
    #[default]
    Json,
    Multipart,
}

/// Settings for [`crate::HttpSubmitter`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmitterConfig {
    pub endpoint: String,
    #[serde(default)]
    pub encoding: SubmitEncoding,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_timeout_secs() -> u64 {
    30
}

impl SubmitterConfig {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            encoding: SubmitEncoding::default(),
            timeout_secs: default_timeout_secs(),
        }
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_apply_when_only_endpoint_is_given() {
        let config: SubmitterConfig =
            serde_json::from_str(r#"{"endpoint":"https://forms.example.com/f/abc"}"#)
                .expect("config");
        assert_eq!(config.encoding, SubmitEncoding::Json);
        assert_eq!(config.timeout(), Duration::from_secs(30));
    }
}
