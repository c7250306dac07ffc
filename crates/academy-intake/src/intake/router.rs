use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, State},
    http::Uri,
    response::Redirect,
    routing::get,
    Json, Router,
};
use serde::Serialize;

use super::client::IntakeClient;
use super::draft::{ApplicationDraft, DraftUpdate};
use super::navigation::NavigationContext;
use super::service::IntakeService;
use crate::error::AppError;

/// Initial form state returned when the intake page mounts.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IntakeView {
    pub draft: ApplicationDraft,
    pub demo_banner: bool,
}

/// Router builder exposing the intake page endpoints.
pub fn intake_router<C>(service: Arc<IntakeService<C>>) -> Router
where
    C: IntakeClient + ?Sized + 'static,
{
    Router::new()
        .route(
            "/apply",
            get(view_handler::<C>).post(submit_handler::<C>),
        )
        .with_state(service)
}

fn navigation_from(uri: &Uri) -> Result<NavigationContext, AppError> {
    Ok(NavigationContext::parse(&uri.to_string())?)
}

pub(crate) async fn view_handler<C>(
    State(service): State<Arc<IntakeService<C>>>,
    uri: Uri,
) -> Result<Json<IntakeView>, AppError>
where
    C: IntakeClient + ?Sized + 'static,
{
    let context = navigation_from(&uri)?;
    let session = service.mount(&context);
    Ok(Json(IntakeView {
        demo_banner: session.draft().shows_demo_banner(),
        draft: session.draft().clone(),
    }))
}

pub(crate) async fn submit_handler<C>(
    State(service): State<Arc<IntakeService<C>>>,
    uri: Uri,
    updates: Result<Json<Vec<DraftUpdate>>, JsonRejection>,
) -> Result<Redirect, AppError>
where
    C: IntakeClient + ?Sized + 'static,
{
    let context = navigation_from(&uri)?;
    let Json(updates) = updates?;
    let target = service.submit(&context, updates).await?;
    Ok(Redirect::to(&target.location()))
}
