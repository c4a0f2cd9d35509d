use crate::infra::AppState;
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::{Extension, Json};
use chrono::{DateTime, Utc};
use match_dynamics::compatibility::router::{
    compatibility_router, evaluate_request, EvaluationRequest,
};
use match_dynamics::compatibility::{
    outcomes, EvaluationBreakdown, LifeEvent, OutcomeTotals, ProfileParams, StrategyMode,
};
use serde::{Deserialize, Serialize};
use serde_json::json;

#[derive(Debug, Deserialize)]
pub(crate) struct CompatibilityReportRequest {
    pub(crate) you: ProfileParams,
    pub(crate) partner: ProfileParams,
    /// Defaults to the configured strategy when omitted.
    #[serde(default)]
    pub(crate) strategy: Option<StrategyMode>,
}

#[derive(Debug, Serialize)]
pub(crate) struct CompatibilityReportResponse {
    pub(crate) generated_at: DateTime<Utc>,
    pub(crate) strategy: StrategyMode,
    pub(crate) evaluation: EvaluationBreakdown,
    pub(crate) events: Vec<LifeEvent>,
    pub(crate) totals: OutcomeTotals,
}

pub(crate) fn with_service_routes() -> axum::Router {
    compatibility_router()
        .route("/health", axum::routing::get(healthcheck))
        .route("/ready", axum::routing::get(readiness_endpoint))
        .route("/metrics", axum::routing::get(metrics_endpoint))
        .route(
            "/api/v1/compatibility/report",
            axum::routing::post(report_endpoint),
        )
}

pub(crate) async fn healthcheck() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

pub(crate) async fn readiness_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    let ready = state.readiness.load(std::sync::atomic::Ordering::Relaxed);
    let status = if ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    let payload = if ready {
        json!({ "status": "ready" })
    } else {
        json!({ "status": "initializing" })
    };

    (status, Json(payload))
}

pub(crate) async fn metrics_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        state.metrics.render(),
    )
}

pub(crate) async fn report_endpoint(
    Extension(state): Extension<AppState>,
    Json(payload): Json<CompatibilityReportRequest>,
) -> Response {
    let CompatibilityReportRequest {
        you,
        partner,
        strategy,
    } = payload;
    let strategy = strategy.unwrap_or(state.default_strategy);

    let request = EvaluationRequest {
        you,
        partner,
        strategy,
    };

    match evaluate_request(request) {
        Ok(evaluation) => {
            let response = CompatibilityReportResponse {
                generated_at: Utc::now(),
                strategy,
                evaluation,
                events: outcomes::events(),
                totals: outcomes::totals(),
            };
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(rejection) => {
            let payload = json!({ "error": rejection.to_string() });
            (StatusCode::UNPROCESSABLE_ENTITY, Json(payload)).into_response()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infra::reference_pair;
    use match_dynamics::compatibility::Dominance;
    use metrics_exporter_prometheus::PrometheusBuilder;
    use std::sync::atomic::AtomicBool;
    use std::sync::Arc;

    fn app_state(default_strategy: StrategyMode) -> AppState {
        AppState {
            readiness: Arc::new(AtomicBool::new(true)),
            metrics: Arc::new(PrometheusBuilder::new().build_recorder().handle()),
            default_strategy,
        }
    }

    async fn response_json(response: Response) -> serde_json::Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("body readable");
        serde_json::from_slice(&bytes).expect("body is json")
    }

    #[tokio::test]
    async fn report_endpoint_falls_back_to_configured_strategy() {
        let (you, partner) = reference_pair();
        let request = CompatibilityReportRequest {
            you,
            partner,
            strategy: None,
        };

        let response =
            report_endpoint(Extension(app_state(StrategyMode::ShortTerm)), Json(request)).await;

        assert_eq!(response.status(), StatusCode::OK);
        let body = response_json(response).await;
        assert_eq!(body["strategy"], json!("short_term"));
        assert_eq!(body["evaluation"]["result"]["compatibility"], json!(35.4));
        assert_eq!(
            body["evaluation"]["result"]["dominant"],
            json!(Dominance::Equal.label())
        );
        assert_eq!(body["totals"]["self_total"], json!(4));
        assert_eq!(body["totals"]["partner_total"], json!(2));
        assert!(body["generated_at"].is_string());
    }

    #[tokio::test]
    async fn report_endpoint_rejects_domain_violations() {
        let (you, mut partner) = reference_pair();
        partner.age = 17;
        let request = CompatibilityReportRequest {
            you,
            partner,
            strategy: Some(StrategyMode::LongTerm),
        };

        let response =
            report_endpoint(Extension(app_state(StrategyMode::LongTerm)), Json(request)).await;

        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
        let body = response_json(response).await;
        let message = body["error"].as_str().expect("error message present");
        assert!(message.contains("partner"));
        assert!(message.contains("age 17"));
    }

    #[tokio::test]
    async fn healthcheck_reports_ok() {
        let Json(body) = healthcheck().await;
        assert_eq!(body, json!({ "status": "ok" }));
    }
}
