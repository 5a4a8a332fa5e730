use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde_json::json;

use super::intake::TriageSubmission;
use super::service::TriageService;
use super::views::AgeBracketView;
use super::vocabulary::SymptomVocabulary;

/// HTTP endpoints for the structured-form triage path.
pub fn triage_router(service: Arc<TriageService>) -> Router {
    Router::new()
        .route("/api/v1/triage", post(assess_handler))
        .route("/api/v1/triage/symptoms", get(symptoms_handler))
        .route("/api/v1/triage/age-brackets", get(age_brackets_handler))
        .with_state(service)
}

pub(crate) async fn assess_handler(
    State(service): State<Arc<TriageService>>,
    Json(submission): Json<TriageSubmission>,
) -> Response {
    match service.assess(submission) {
        Ok(view) => (StatusCode::OK, Json(view)).into_response(),
        Err(error) => {
            let payload = json!({
                "error": error.to_string(),
            });
            (StatusCode::UNPROCESSABLE_ENTITY, Json(payload)).into_response()
        }
    }
}

pub(crate) async fn symptoms_handler() -> Response {
    Json(SymptomVocabulary::global().entries()).into_response()
}

pub(crate) async fn age_brackets_handler() -> Json<Vec<AgeBracketView>> {
    Json(AgeBracketView::all())
}
