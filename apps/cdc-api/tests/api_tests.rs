//! Integration tests for the CDC API router.
//!
//! Driven through `tower::ServiceExt::oneshot` with no socket and no
//! Gemini key, so the AI endpoints answer 503 and everything else runs
//! against in-memory state.

use std::sync::Arc;

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use serde_json::{json, Value};
use tower::ServiceExt;

use cdc_api::{router, AppState};

fn app() -> Router {
    router(Arc::new(AppState::with_gemini(None)))
}

async fn send(app: &Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let request = match body {
        Some(body) => Request::builder()
            .method(method)
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => Request::builder()
            .method(method)
            .uri(uri)
            .body(Body::empty())
            .unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or(Value::String(
            String::from_utf8_lossy(&bytes).into_owned(),
        ))
    };
    (status, value)
}

async fn create_assessment(app: &Router, project_type: &str) -> String {
    let (status, body) = send(
        app,
        "POST",
        "/api/assessment",
        Some(json!({ "projectType": project_type })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    body["id"].as_str().unwrap().to_string()
}

#[tokio::test]
async fn health_returns_ok() {
    let app = app();
    let (status, body) = send(&app, "GET", "/health", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, Value::String("OK".to_string()));
}

#[tokio::test]
async fn pool_assessment_starts_with_full_pending_checklist() {
    let app = app();
    let (status, body) = send(
        &app,
        "POST",
        "/api/assessment",
        Some(json!({ "projectType": "POOL" })),
    )
    .await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["projectType"], "POOL");
    assert_eq!(body["progress"]["total"], 27);
    assert_eq!(body["progress"]["reviewedPercent"], 0);
    assert_eq!(body["gatewayPassed"], false);
    assert!(body["metadata"].is_null());
}

#[tokio::test]
async fn spa_assessment_excludes_excavation_items() {
    let app = app();
    let id = create_assessment(&app, "SPA").await;
    let (status, body) = send(&app, "GET", &format!("/api/assessment/{id}"), None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["progress"]["total"], 23);
    let ids: Vec<&str> = body["categories"]
        .as_array()
        .unwrap()
        .iter()
        .flat_map(|c| c["items"].as_array().unwrap())
        .map(|i| i["id"].as_str().unwrap())
        .collect();
    for excluded in ["coping_height", "decking_height", "excavation", "landscaped_area"] {
        assert!(!ids.contains(&excluded), "{excluded} present in spa checklist");
    }
}

#[tokio::test]
async fn unknown_assessment_is_404() {
    let app = app();
    let (status, _) = send(&app, "GET", "/api/assessment/nope", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn item_update_changes_status_and_progress() {
    let app = app();
    let id = create_assessment(&app, "POOL").await;

    let (status, body) = send(
        &app,
        "PATCH",
        &format!("/api/assessment/{id}/item/title_search"),
        Some(json!({ "status": "COMPLIANT", "notes": "Owner confirmed" })),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["progress"]["compliant"], 1);
    let item = body["categories"]
        .as_array()
        .unwrap()
        .iter()
        .flat_map(|c| c["items"].as_array().unwrap())
        .find(|i| i["id"] == "title_search")
        .unwrap();
    assert_eq!(item["status"], "COMPLIANT");
    assert_eq!(item["notes"], "Owner confirmed");
}

#[tokio::test]
async fn unknown_item_is_404() {
    let app = app();
    let id = create_assessment(&app, "POOL").await;
    let (status, _) = send(
        &app,
        "PATCH",
        &format!("/api/assessment/{id}/item/not_an_item"),
        Some(json!({ "status": "COMPLIANT" })),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn empty_item_update_is_rejected() {
    let app = app();
    let id = create_assessment(&app, "POOL").await;
    let (status, _) = send(
        &app,
        "PATCH",
        &format!("/api/assessment/{id}/item/title_search"),
        Some(json!({})),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn report_passes_once_critical_items_are_compliant() {
    let app = app();
    let id = create_assessment(&app, "POOL").await;

    let criticals = [
        "sec_10_7_complying_dev",
        "sec_10_7_bushfire",
        "lot_size_normal",
        "zoning_check",
        "flood_info",
    ];
    for item_id in criticals {
        let (status, _) = send(
            &app,
            "PATCH",
            &format!("/api/assessment/{id}/item/{item_id}"),
            Some(json!({ "status": "COMPLIANT" })),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
    }

    let (status, body) = send(&app, "GET", &format!("/api/assessment/{id}/report"), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["passed"], true);
    assert_eq!(body["failedChecks"].as_array().unwrap().len(), 0);
    assert!(body["generatedAt"].is_string());
}

#[tokio::test]
async fn report_lists_failure_reasons() {
    let app = app();
    let id = create_assessment(&app, "POOL").await;

    let (_, _) = send(
        &app,
        "PATCH",
        &format!("/api/assessment/{id}/item/zoning_check"),
        Some(json!({ "status": "NON_COMPLIANT", "notes": "Lot zoned E4" })),
    )
    .await;

    let (status, body) = send(&app, "GET", &format!("/api/assessment/{id}/report"), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["passed"], false);
    let failed = body["failedChecks"].as_array().unwrap();
    assert_eq!(failed.len(), 5);
    let zoning = failed.iter().find(|f| f["id"] == "zoning_check").unwrap();
    assert_eq!(zoning["reason"], "Lot zoned E4");
    let pending = failed.iter().find(|f| f["id"] == "flood_info").unwrap();
    assert_eq!(pending["reason"], "Requirement not met");
}

#[tokio::test]
async fn export_is_a_json_attachment() {
    let app = app();
    let id = create_assessment(&app, "SPA").await;

    let request = Request::builder()
        .method("GET")
        .uri(format!("/api/assessment/{id}/export"))
        .body(Body::empty())
        .unwrap();
    let response = app.clone().oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let disposition = response
        .headers()
        .get(header::CONTENT_DISPOSITION)
        .unwrap()
        .to_str()
        .unwrap();
    assert!(disposition.contains("cdc-checklist-spa.json"));

    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let body: Value = serde_json::from_slice(&bytes).unwrap();
    assert!(body["metadata"].is_null());
    assert_eq!(body["categories"].as_array().unwrap().len(), 5);
}

#[tokio::test]
async fn ai_endpoints_are_unavailable_without_api_key() {
    let app = app();
    let id = create_assessment(&app, "POOL").await;

    let (status, _) = send(
        &app,
        "POST",
        &format!("/api/assessment/{id}/analyze"),
        Some(json!({ "files": [{ "name": "plans.pdf", "type": "application/pdf", "data": "JVBERi0=" }] })),
    )
    .await;
    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);

    let (status, _) = send(
        &app,
        "POST",
        &format!("/api/assessment/{id}/chat"),
        Some(json!({ "message": "Can I build a pool?" })),
    )
    .await;
    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
}
