use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::http::StatusCode;
use axum::response::Response;
use serde_json::Value;

use crate::intake::client::{IntakeClient, SubmissionError};
use crate::intake::draft::DraftUpdate;
use crate::intake::navigation::NavigationContext;
use crate::intake::payload::SubmissionPayload;
use crate::intake::redirect::SCHEDULE_PATH;
use crate::intake::service::IntakeService;

/// Collaborator stub that records payloads and answers with a canned result.
#[derive(Default)]
pub(super) struct RecordingClient {
    payloads: Mutex<Vec<SubmissionPayload>>,
    rejection: Option<SubmissionError>,
}

impl RecordingClient {
    pub(super) fn rejecting(message: &str) -> Self {
        Self {
            payloads: Mutex::new(Vec::new()),
            rejection: Some(SubmissionError::Rejected {
                message: message.to_string(),
            }),
        }
    }

    pub(super) fn payloads(&self) -> Vec<SubmissionPayload> {
        self.payloads.lock().expect("payload mutex poisoned").clone()
    }
}

#[async_trait]
impl IntakeClient for RecordingClient {
    async fn submit(&self, payload: &SubmissionPayload) -> Result<(), SubmissionError> {
        self.payloads
            .lock()
            .expect("payload mutex poisoned")
            .push(payload.clone());
        match &self.rejection {
            Some(err) => Err(err.clone()),
            None => Ok(()),
        }
    }
}

pub(super) fn context(location: &str) -> NavigationContext {
    NavigationContext::parse(location).expect("valid location")
}

pub(super) fn contact_updates() -> Vec<DraftUpdate> {
    vec![
        DraftUpdate::FirstName("Ada".to_string()),
        DraftUpdate::LastName("Lovelace".to_string()),
        DraftUpdate::Email("ada@example.com".to_string()),
        DraftUpdate::Phone("555-0100".to_string()),
    ]
}

pub(super) fn build_service(
    client: RecordingClient,
) -> (Arc<IntakeService<RecordingClient>>, Arc<RecordingClient>) {
    let client = Arc::new(client);
    let service = Arc::new(IntakeService::new(client.clone(), SCHEDULE_PATH));
    (service, client)
}

pub(super) async fn json_body(response: Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body collects");
    serde_json::from_slice(&bytes).expect("json body")
}

pub(super) async fn assert_error_response(response: Response, status: StatusCode, message: &str) {
    assert_eq!(response.status(), status);
    let body = json_body(response).await;
    assert_eq!(body["error"], message);
}
