use tracing::{info, warn};

use super::client::{IntakeClient, SubmissionError};
use super::draft::{ApplicationDraft, DraftUpdate};
use super::navigation::NavigationContext;
use super::payload::{build_payload, SubmissionPayload};
use super::redirect::{compose, RedirectTarget};
use super::resolver::{resolve, ResolvedConfiguration};
use super::validation::{validate, ValidationError};

/// Outcome slot of the most recent submit attempt.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum SubmitState {
    #[default]
    Idle,
    Failed(String),
}

impl SubmitState {
    pub fn error_message(&self) -> Option<&str> {
        match self {
            SubmitState::Idle => None,
            SubmitState::Failed(message) => Some(message),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SubmitError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error(transparent)]
    Submission(#[from] SubmissionError),
    #[error("a submission is already in progress")]
    InFlight,
}

/// One mounted intake page: the configuration resolved from its URL, the draft being
/// edited, and the submit state.
#[derive(Debug, Clone)]
pub struct IntakeSession {
    resolved: ResolvedConfiguration,
    draft: ApplicationDraft,
    state: SubmitState,
    loading: bool,
    schedule_path: String,
}

impl IntakeSession {
    /// Resolves the navigation context once and seeds the draft from it.
    pub fn mount(context: &NavigationContext, schedule_path: impl Into<String>) -> Self {
        let resolved = resolve(context);
        let draft = ApplicationDraft::from_resolved(&resolved);
        info!(
            program = %resolved.program,
            cohort = resolved.cohort.as_str(),
            "intake session mounted"
        );

        Self {
            resolved,
            draft,
            state: SubmitState::Idle,
            loading: false,
            schedule_path: schedule_path.into(),
        }
    }

    pub fn resolved(&self) -> &ResolvedConfiguration {
        &self.resolved
    }

    pub fn draft(&self) -> &ApplicationDraft {
        &self.draft
    }

    pub fn draft_mut(&mut self) -> &mut ApplicationDraft {
        &mut self.draft
    }

    pub fn update(&mut self, update: DraftUpdate) {
        self.draft.apply(update);
    }

    pub fn submit_state(&self) -> &SubmitState {
        &self.state
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn dismiss_error(&mut self) {
        self.state = SubmitState::Idle;
    }

    /// Starts a submit attempt: clears the previous outcome, validates, and raises the
    /// loading flag. Refused while another attempt is in flight.
    pub fn begin_submit(&mut self) -> Result<SubmissionPayload, SubmitError> {
        if self.loading {
            return Err(SubmitError::InFlight);
        }
        self.state = SubmitState::Idle;

        if let Err(err) = validate(&self.draft) {
            warn!(reason = %err, "intake draft failed validation");
            self.state = SubmitState::Failed(err.to_string());
            return Err(err.into());
        }

        self.loading = true;
        Ok(build_payload(&self.draft))
    }

    /// Finishes the attempt started by [`begin_submit`](Self::begin_submit).
    pub fn complete_submit(
        &mut self,
        result: Result<(), SubmissionError>,
    ) -> Result<RedirectTarget, SubmitError> {
        self.loading = false;
        match result {
            Ok(()) => {
                let target = compose(&self.draft, &self.resolved, &self.schedule_path);
                info!(
                    program = %self.draft.program(),
                    location = %target,
                    "intake submission accepted"
                );
                Ok(target)
            }
            Err(err) => {
                warn!(error = %err, "intake submission failed");
                self.state = SubmitState::Failed(err.to_string());
                Err(err.into())
            }
        }
    }

    pub async fn submit<C>(&mut self, client: &C) -> Result<RedirectTarget, SubmitError>
    where
        C: IntakeClient + ?Sized,
    {
        let payload = self.begin_submit()?;
        let result = client.submit(&payload).await;
        self.complete_submit(result)
    }
}
