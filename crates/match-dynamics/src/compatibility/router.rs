use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use serde_json::json;

use super::domain::{DomainError, PartnerProfile, ProfileParams, StrategyMode};
use super::{outcomes, EvaluationBreakdown, ScoreEngine};

/// Router builder exposing the stateless evaluation and outcome endpoints.
pub fn compatibility_router() -> Router {
    Router::new()
        .route("/api/v1/compatibility/evaluate", post(evaluate_handler))
        .route("/api/v1/outcomes", get(outcomes_handler))
}

/// Wire form of one evaluation request.
#[derive(Debug, Clone, Deserialize)]
pub struct EvaluationRequest {
    pub you: ProfileParams,
    pub partner: ProfileParams,
    pub strategy: StrategyMode,
}

/// Life-event table plus its column sums.
#[derive(Debug, Serialize)]
pub struct OutcomeTableResponse {
    pub events: Vec<outcomes::LifeEvent>,
    pub totals: outcomes::OutcomeTotals,
}

/// Domain violation tagged with the side of the pairing it was found on.
#[derive(Debug, thiserror::Error)]
#[error("{side} profile rejected: {source}")]
pub struct ProfileRejection {
    pub side: &'static str,
    pub source: DomainError,
}

pub fn evaluate_request(request: EvaluationRequest) -> Result<EvaluationBreakdown, ProfileRejection> {
    let you = PartnerProfile::new(request.you)
        .map_err(|source| ProfileRejection { side: "you", source })?;
    let partner = PartnerProfile::new(request.partner)
        .map_err(|source| ProfileRejection { side: "partner", source })?;

    Ok(ScoreEngine::new(request.strategy).evaluate_detailed(&you, &partner))
}

pub(crate) async fn evaluate_handler(Json(request): Json<EvaluationRequest>) -> Response {
    match evaluate_request(request) {
        Ok(breakdown) => (StatusCode::OK, Json(breakdown)).into_response(),
        Err(rejection) => {
            let payload = json!({ "error": rejection.to_string() });
            (StatusCode::UNPROCESSABLE_ENTITY, Json(payload)).into_response()
        }
    }
}

pub(crate) async fn outcomes_handler() -> Json<OutcomeTableResponse> {
    Json(OutcomeTableResponse {
        events: outcomes::events(),
        totals: outcomes::totals(),
    })
}
