// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! HTTP handler tests over the axum router

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use http_body_util::BodyExt;
use serde_json::{json, Value};
use tower::ServiceExt;

use corral::catalog::ClassifyResponse;
use corral::server::{router, AppState};

fn app() -> axum::Router {
    router(AppState::new(false))
}

fn json_request(uri: &str, body: String) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body))
        .unwrap()
}

async fn response_body(response: axum::response::Response) -> ClassifyResponse {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn test_classify_returns_hierarchy() {
    let body = json!({
        "models": [
            {"id": "gpt-4o-mini"},
            {"id": "gemini-1.5-flash"},
            {"id": "claude-3-opus-20240229"}
        ]
    });
    let response = app()
        .oneshot(json_request("/classify", body.to_string()))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let parsed = response_body(response).await;
    assert!(parsed.error_message.is_empty());
    assert!(parsed.classified_groups.is_empty());
    assert_eq!(parsed.available_properties.len(), 5);

    let providers: Vec<_> = parsed
        .hierarchical_groups
        .iter()
        .map(|g| g.group_value.as_str())
        .collect();
    assert_eq!(providers, vec!["gemini", "openai", "anthropic"]);
}

#[tokio::test]
async fn test_classify_empty_model_list() {
    let response = app()
        .oneshot(json_request("/classify", json!({"models": []}).to_string()))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let parsed = response_body(response).await;
    assert!(parsed.hierarchical_groups.is_empty());
    assert!(parsed.error_message.is_empty());
    assert_eq!(parsed.available_properties.len(), 5);
}

#[tokio::test]
async fn test_classify_missing_models_field_defaults_empty() {
    let response = app()
        .oneshot(json_request("/classify", "{}".to_string()))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let parsed = response_body(response).await;
    assert!(parsed.hierarchical_groups.is_empty());
}

#[tokio::test]
async fn test_classify_bad_body_is_400_with_properties() {
    let response = app()
        .oneshot(json_request("/classify", "this is not json".to_string()))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let parsed = response_body(response).await;
    assert!(!parsed.error_message.is_empty());
    assert!(parsed.hierarchical_groups.is_empty());
    // Property metadata is static and survives decode failures
    assert_eq!(parsed.available_properties.len(), 5);
}

#[tokio::test]
async fn test_classify_criteria_flat_mode() {
    let body = json!({
        "models": [
            {"id": "gpt-4o"},
            {"id": "claude-3-opus-20240229"}
        ],
        "hierarchical": false,
        "properties": ["provider"]
    });
    let response = app()
        .oneshot(json_request("/classify/criteria", body.to_string()))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let parsed = response_body(response).await;
    assert!(parsed.hierarchical_groups.is_empty());
    let values: Vec<_> = parsed
        .classified_groups
        .iter()
        .map(|g| g.property_value.as_str())
        .collect();
    assert_eq!(values, vec!["anthropic", "openai"]);
}

#[tokio::test]
async fn test_classify_criteria_hierarchical_with_filter() {
    let body = json!({
        "models": [
            {"id": "gpt-3.5-turbo"},
            {"id": "claude-3-opus-20240229"}
        ],
        "min_context_size": 100000
    });
    let response = app()
        .oneshot(json_request("/classify/criteria", body.to_string()))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let parsed = response_body(response).await;
    assert_eq!(parsed.hierarchical_groups.len(), 1);
    assert_eq!(parsed.hierarchical_groups[0].group_value, "anthropic");
}

#[tokio::test]
async fn test_health_endpoint() {
    let response = app()
        .oneshot(
            Request::builder()
                .method("GET")
                .uri("/health")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let parsed: Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(parsed["status"], "healthy");
    assert!(parsed["time"].is_string());
}
