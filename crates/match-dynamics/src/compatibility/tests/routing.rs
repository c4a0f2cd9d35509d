use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use serde_json::{json, Value};
use tower::ServiceExt;

use crate::compatibility::router::{compatibility_router, evaluate_handler, EvaluationRequest};
use crate::compatibility::domain::{ProfileParams, StrategyMode};

fn you_params() -> Value {
    json!({
        "age": 25,
        "income": "<1000",
        "occupation": "Engineering",
        "emotional_stability": 7,
        "value_alignment": 8,
    })
}

fn partner_params() -> Value {
    json!({
        "age": 37,
        "income": "<1000",
        "occupation": "Engineering",
        "emotional_stability": 6,
        "value_alignment": 8,
    })
}

async fn body_json(response: axum::response::Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body readable");
    serde_json::from_slice(&bytes).expect("body is json")
}

#[tokio::test]
async fn evaluate_route_returns_scores_and_breakdown() {
    let router = compatibility_router();

    let request = json!({
        "you": you_params(),
        "partner": partner_params(),
        "strategy": "short_term",
    });

    let response = router
        .oneshot(
            Request::post("/api/v1/compatibility/evaluate")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(request.to_string()))
                .expect("request builds"),
        )
        .await
        .expect("router responds");

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["result"]["compatibility"], json!(35.4));
    assert_eq!(body["result"]["power_balance"], json!(1.0));
    assert_eq!(body["result"]["dominant"], json!("Equal"));
    assert_eq!(body["your_score"], json!(35.9));
    assert_eq!(body["your_components"].as_array().map(Vec::len), Some(5));
}

#[tokio::test]
async fn evaluate_route_rejects_out_of_domain_age() {
    let router = compatibility_router();

    let mut partner = partner_params();
    partner["age"] = json!(17);
    let request = json!({
        "you": you_params(),
        "partner": partner,
        "strategy": "long_term",
    });

    let response = router
        .oneshot(
            Request::post("/api/v1/compatibility/evaluate")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(request.to_string()))
                .expect("request builds"),
        )
        .await
        .expect("router responds");

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let body = body_json(response).await;
    let message = body["error"].as_str().expect("error message present");
    assert!(message.contains("partner"));
    assert!(message.contains("age 17"));
}

#[tokio::test]
async fn evaluate_handler_accepts_typed_requests() {
    let you: ProfileParams = serde_json::from_value(you_params()).expect("valid params");

    let response = evaluate_handler(axum::Json(EvaluationRequest {
        you,
        partner: you,
        strategy: StrategyMode::LongTerm,
    }))
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["result"]["power_balance"], json!(0.0));
    assert_eq!(body["result"]["dominant"], json!("Equal"));
}

#[tokio::test]
async fn outcomes_route_serves_the_fixed_table() {
    let router = compatibility_router();

    let response = router
        .oneshot(
            Request::get("/api/v1/outcomes")
                .body(Body::empty())
                .expect("request builds"),
        )
        .await
        .expect("router responds");

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["events"].as_array().map(Vec::len), Some(5));
    assert_eq!(body["totals"]["self_total"], json!(4));
    assert_eq!(body["totals"]["partner_total"], json!(2));
}
