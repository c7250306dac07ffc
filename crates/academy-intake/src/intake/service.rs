use std::sync::Arc;

use super::client::IntakeClient;
use super::draft::DraftUpdate;
use super::navigation::NavigationContext;
use super::redirect::RedirectTarget;
use super::session::{IntakeSession, SubmitError};

/// Service composing session mounting with the outbound intake client.
pub struct IntakeService<C: ?Sized> {
    schedule_path: String,
    client: Arc<C>,
}

impl<C> IntakeService<C>
where
    C: IntakeClient + ?Sized + 'static,
{
    pub fn new(client: Arc<C>, schedule_path: impl Into<String>) -> Self {
        Self {
            schedule_path: schedule_path.into(),
            client,
        }
    }

    pub fn schedule_path(&self) -> &str {
        &self.schedule_path
    }

    /// Mount a fresh session for the given page location.
    pub fn mount(&self, context: &NavigationContext) -> IntakeSession {
        IntakeSession::mount(context, self.schedule_path.clone())
    }

    /// Mount, replay the applicant's edits in order, and submit.
    pub async fn submit(
        &self,
        context: &NavigationContext,
        updates: Vec<DraftUpdate>,
    ) -> Result<RedirectTarget, SubmitError> {
        let mut session = self.mount(context);
        session.draft_mut().apply_all(updates);
        session.submit(self.client.as_ref()).await
    }
}
