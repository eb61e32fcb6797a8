//! Fetch errors and the displayable failure stored in state

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Everything that can go wrong between issuing a request and holding a report
#[derive(thiserror::Error, Debug)]
pub enum FetchError {
    #[error("could not reach the weather service: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("weather service responded with {0}")]
    Status(reqwest::StatusCode),
    #[error("unexpected response from the weather service: {0}")]
    Payload(#[from] serde_json::Error),
    #[error("weather service rejected the request: {0}")]
    Api(String),
}

/// Why a fetch failed, kept apart from the message so the UI can pick hints
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub enum FailureCause {
    Transport,
    Timeout,
    Status(u16),
    Payload,
    Api,
}

/// Serializable form of a [`FetchError`], carried by actions and state
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct FetchFailure {
    pub cause: FailureCause,
    pub message: String,
}

impl FetchFailure {
    pub fn new(cause: FailureCause, message: impl Into<String>) -> Self {
        Self {
            cause,
            message: message.into(),
        }
    }

    /// Relays answer 403 until access has been granted on their demo page.
    pub fn is_access_denied(&self) -> bool {
        matches!(self.cause, FailureCause::Status(403))
    }
}

impl From<FetchError> for FetchFailure {
    fn from(error: FetchError) -> Self {
        let cause = match &error {
            FetchError::Transport(e) if e.is_timeout() => FailureCause::Timeout,
            FetchError::Transport(_) => FailureCause::Transport,
            FetchError::Status(status) => FailureCause::Status(status.as_u16()),
            FetchError::Payload(_) => FailureCause::Payload,
            FetchError::Api(_) => FailureCause::Api,
        };
        let message = match cause {
            FailureCause::Timeout => "the weather service took too long to respond".to_string(),
            _ => error.to_string(),
        };
        Self { cause, message }
    }
}
