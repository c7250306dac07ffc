use academy_intake::intake::{IntakeClient, SubmissionError, SubmissionPayload};
use async_trait::async_trait;
use metrics_exporter_prometheus::PrometheusHandle;
use std::sync::atomic::AtomicBool;
use std::sync::{Arc, Mutex};

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Stand-in for `/api/apply` that accepts everything and keeps what it was sent.
#[derive(Default, Clone)]
pub(crate) struct InMemoryIntakeClient {
    received: Arc<Mutex<Vec<SubmissionPayload>>>,
}

#[async_trait]
impl IntakeClient for InMemoryIntakeClient {
    async fn submit(&self, payload: &SubmissionPayload) -> Result<(), SubmissionError> {
        let mut guard = self.received.lock().expect("intake mutex poisoned");
        guard.push(payload.clone());
        Ok(())
    }
}

impl InMemoryIntakeClient {
    pub(crate) fn received(&self) -> Vec<SubmissionPayload> {
        self.received.lock().expect("intake mutex poisoned").clone()
    }
}
