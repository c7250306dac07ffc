use super::common::*;
use axum::body::Body;
use axum::extract::State;
use axum::http::{header, Request, StatusCode, Uri};
use axum::response::IntoResponse;
use serde_json::json;
use tower::ServiceExt;

use crate::intake::draft::DraftUpdate;
use crate::intake::router::{intake_router, submit_handler};

fn submit_request(uri: &str, updates: serde_json::Value) -> Request<Body> {
    Request::post(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(
            serde_json::to_vec(&updates).expect("updates serialize"),
        ))
        .expect("request builds")
}

#[tokio::test]
async fn view_route_returns_resolved_draft_and_banner() {
    let (service, _) = build_service(RecordingClient::default());
    let router = intake_router(service);

    let response = router
        .oneshot(
            Request::get("/apply?program=Tutoring&cohort=demo")
                .body(Body::empty())
                .expect("request builds"),
        )
        .await
        .expect("router responds");

    assert_eq!(response.status(), StatusCode::OK);
    let body = json_body(response).await;
    assert_eq!(body["demoBanner"], json!(true));
    assert_eq!(body["draft"]["program"], json!("Tutoring"));
    assert_eq!(body["draft"]["tutoringPackage"], json!("block4"));
    assert_eq!(body["draft"]["cohort"], json!("demo"));
    assert_eq!(body["draft"]["address"]["country"], json!("United States"));
}

#[tokio::test]
async fn submit_route_redirects_to_schedule() {
    let (service, client) = build_service(RecordingClient::default());
    let router = intake_router(service);

    let response = router
        .oneshot(submit_request(
            "/apply?course=Beat+Making&classTime=6PM&cohort=demo",
            json!([
                { "field": "firstName", "value": "Ada" },
                { "field": "lastName", "value": "Lovelace" },
                { "field": "email", "value": "ada@example.com" },
                { "field": "phone", "value": "555-0100" },
                { "field": "city", "value": "" },
            ]),
        ))
        .await
        .expect("router responds");

    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    let location = response
        .headers()
        .get(header::LOCATION)
        .and_then(|value| value.to_str().ok())
        .expect("location header");
    assert_eq!(
        location,
        "/apply/schedule?program=Course&course=Beat+Making&classTime=6PM&cohort=demo"
    );

    let payloads = client.payloads();
    assert_eq!(payloads.len(), 1);
    assert_eq!(payloads[0].address.city, None);
    assert_eq!(payloads[0].course.as_deref(), Some("Beat Making"));
}

#[tokio::test]
async fn submit_route_rejects_invalid_draft() {
    let (service, client) = build_service(RecordingClient::default());
    let router = intake_router(service);

    let response = router
        .oneshot(submit_request(
            "/apply?program=Tutoring",
            json!([
                { "field": "firstName", "value": "Ada" },
                { "field": "lastName", "value": "Lovelace" },
                { "field": "email", "value": "ada@example.com" },
                { "field": "phone", "value": "555-0100" },
            ]),
        ))
        .await
        .expect("router responds");

    assert_error_response(
        response,
        StatusCode::UNPROCESSABLE_ENTITY,
        "Please tell us what you'd like tutoring in.",
    )
    .await;
    assert!(client.payloads().is_empty());
}

#[tokio::test]
async fn submit_handler_maps_collaborator_rejection_to_bad_gateway() {
    let (service, _) = build_service(RecordingClient::rejecting("Duplicate email"));
    let mut updates = contact_updates();
    updates.push(DraftUpdate::Course("Mixing".to_string()));

    let response = submit_handler::<RecordingClient>(
        State(service),
        Uri::from_static("/apply"),
        Ok(axum::Json(updates)),
    )
    .await
    .into_response();

    assert_error_response(response, StatusCode::BAD_GATEWAY, "Duplicate email").await;
}

#[tokio::test]
async fn submit_route_rejects_unknown_fields_as_json() {
    let (service, client) = build_service(RecordingClient::default());
    let router = intake_router(service);

    let response = router
        .oneshot(submit_request(
            "/apply",
            json!([{ "field": "cohort", "value": "demo" }]),
        ))
        .await
        .expect("router responds");

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = json_body(response).await;
    let message = body["error"].as_str().expect("error message is a string");
    assert!(message.starts_with("invalid draft updates: "));
    assert!(client.payloads().is_empty());
}

#[tokio::test]
async fn submit_route_rejects_missing_content_type_as_json() {
    let (service, _) = build_service(RecordingClient::default());
    let router = intake_router(service);

    let response = router
        .oneshot(
            Request::post("/apply")
                .body(Body::from("[]"))
                .expect("request builds"),
        )
        .await
        .expect("router responds");

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = json_body(response).await;
    assert!(body["error"].is_string());
}

#[tokio::test]
async fn error_bodies_match_between_router_and_app_error() {
    use crate::error::AppError;
    use crate::intake::{SubmitError, ValidationError};

    let (service, _) = build_service(RecordingClient::default());
    let router = intake_router(service);

    let routed = router
        .oneshot(submit_request("/apply", json!([])))
        .await
        .expect("router responds");
    let direct =
        AppError::from(SubmitError::from(ValidationError::MissingFirstName)).into_response();

    assert_eq!(routed.status(), direct.status());
    assert_eq!(json_body(routed).await, json_body(direct).await);
}
