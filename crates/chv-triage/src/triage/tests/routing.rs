use super::common::*;
use axum::extract::State;
use axum::http::{header, Request, StatusCode};
use serde_json::json;
use std::sync::Arc;
use tower::ServiceExt;

use crate::triage::router::assess_handler;
use crate::triage::TriageService;

#[tokio::test]
async fn assess_handler_returns_guidance_view() {
    let response = assess_handler(
        State(Arc::new(TriageService::default())),
        axum::Json(submission("child", &["high-fever"])),
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    let payload = read_json_body(response).await;
    assert_eq!(payload["rule_id"], json!("critical.pediatric_high_fever"));
    assert_eq!(payload["risk_label"], json!("CRITICAL"));
    assert_eq!(payload["badge_class"], json!("risk-badge-critical"));
    assert_eq!(payload["disposition"], json!("referred"));
    assert_eq!(payload["age_bracket"], json!("child"));
    assert_eq!(payload["symptoms"][0]["code"], json!("high-fever"));
    assert_eq!(payload["symptoms"][0]["label"], json!("High Fever"));
    assert_eq!(payload["guidance"]["risk_level"], json!("critical"));
    assert_eq!(
        payload["guidance"]["referral_facility"],
        json!("Pediatric Emergency Unit")
    );
    assert!(payload.get("evaluated_at").is_some());
}

#[tokio::test]
async fn assess_handler_rejects_unknown_symptoms() {
    let response = assess_handler(
        State(Arc::new(TriageService::default())),
        axum::Json(submission("adult", &["hiccups"])),
    )
    .await;

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let payload = read_json_body(response).await;
    assert_eq!(payload["error"], json!("unknown symptom code 'hiccups'"));
}

#[tokio::test]
async fn assess_route_accepts_json_payloads() {
    let body = json!({
        "age_bracket": "adult",
        "symptoms": ["skin-rash"],
        "narrative": "Itchy patches on forearm"
    });

    let response = router()
        .oneshot(
            Request::post("/api/v1/triage")
                .header(header::CONTENT_TYPE, "application/json")
                .body(axum::body::Body::from(body.to_string()))
                .expect("request builds"),
        )
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::OK);
    let payload = read_json_body(response).await;
    assert_eq!(payload["guidance"]["risk_level"], json!("low"));
    assert!(payload["guidance"].get("referral_facility").is_none());
    assert_eq!(payload["disposition"], json!("pending"));
    let text = payload.to_string();
    assert!(!text.contains("Itchy patches"));
}

#[tokio::test]
async fn assess_route_rejects_missing_age_bracket() {
    let response = router()
        .oneshot(
            Request::post("/api/v1/triage")
                .header(header::CONTENT_TYPE, "application/json")
                .body(axum::body::Body::from(
                    json!({ "symptoms": ["fatigue"] }).to_string(),
                ))
                .expect("request builds"),
        )
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let payload = read_json_body(response).await;
    assert_eq!(payload["error"], json!("an age bracket must be selected"));
}

#[tokio::test]
async fn symptoms_route_lists_vocabulary_in_checklist_order() {
    let response = router()
        .oneshot(
            Request::get("/api/v1/triage/symptoms")
                .body(axum::body::Body::empty())
                .expect("request builds"),
        )
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::OK);
    let payload = read_json_body(response).await;
    let entries = payload.as_array().expect("array payload");
    assert_eq!(entries.len(), 14);
    assert_eq!(entries[0]["code"], json!("difficulty-breathing"));
    assert_eq!(entries[0]["critical"], json!(true));
    assert_eq!(entries[13]["code"], json!("swelling"));
}

#[tokio::test]
async fn age_bracket_route_lists_labels() {
    let response = router()
        .oneshot(
            Request::get("/api/v1/triage/age-brackets")
                .body(axum::body::Body::empty())
                .expect("request builds"),
        )
        .await
        .expect("route executes");

    let payload = read_json_body(response).await;
    assert_eq!(payload[4]["code"], json!("middle-age"));
    assert_eq!(payload[4]["label"], json!("Middle Age (45-65 years)"));
}
