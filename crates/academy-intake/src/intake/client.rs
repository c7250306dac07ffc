use async_trait::async_trait;
use serde_json::{Map, Value};
use url::Url;

use super::payload::SubmissionPayload;

pub const DEFAULT_REJECTION_MESSAGE: &str = "We couldn't submit your application.";
pub const GENERIC_FAILURE_MESSAGE: &str = "Something went wrong. Please try again.";

/// Failure reported by (or while talking to) the intake endpoint.
///
/// The display text is the applicant-facing message.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SubmissionError {
    #[error("{message}")]
    Rejected { message: String },
    #[error("{message}")]
    Transport { message: String },
}

impl SubmissionError {
    pub fn transport(err: impl std::fmt::Display) -> Self {
        let message = err.to_string();
        let message = if message.trim().is_empty() {
            GENERIC_FAILURE_MESSAGE.to_string()
        } else {
            message
        };
        Self::Transport { message }
    }
}

/// Outbound hook for the intake collaborator (`POST /api/apply`).
#[async_trait]
pub trait IntakeClient: Send + Sync {
    async fn submit(&self, payload: &SubmissionPayload) -> Result<(), SubmissionError>;
}

/// Decides success from the HTTP status and the raw response body.
///
/// The submission succeeded when the status is 2xx and the body does not carry an
/// explicit `"ok": false`. Bodies that are not valid JSON read as an empty object.
pub fn interpret_response(status_ok: bool, body: &[u8]) -> Result<(), SubmissionError> {
    let parsed: Value =
        serde_json::from_slice(body).unwrap_or_else(|_| Value::Object(Map::new()));

    let explicit_failure = matches!(parsed.get("ok"), Some(Value::Bool(false)));
    if status_ok && !explicit_failure {
        return Ok(());
    }

    let message = parsed
        .get("error")
        .and_then(Value::as_str)
        .filter(|message| !message.trim().is_empty())
        .unwrap_or(DEFAULT_REJECTION_MESSAGE)
        .to_string();

    Err(SubmissionError::Rejected { message })
}

/// `reqwest`-backed client. No request timeout is configured.
#[derive(Debug, Clone)]
pub struct HttpIntakeClient {
    client: reqwest::Client,
    endpoint: Url,
}

impl HttpIntakeClient {
    pub fn new(endpoint: Url) -> Self {
        Self {
            client: reqwest::Client::new(),
            endpoint,
        }
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }
}

#[async_trait]
impl IntakeClient for HttpIntakeClient {
    async fn submit(&self, payload: &SubmissionPayload) -> Result<(), SubmissionError> {
        let response = self
            .client
            .post(self.endpoint.clone())
            .json(payload)
            .send()
            .await
            .map_err(SubmissionError::transport)?;

        let status_ok = response.status().is_success();
        let body = response
            .bytes()
            .await
            .map_err(SubmissionError::transport)?;

        interpret_response(status_ok, &body)
    }
}
