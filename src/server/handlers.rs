// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Request handlers

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde_json::json;
use tracing::{debug, info, warn};

use crate::catalog::{
    available_properties, ClassifyRequest, ClassifyResponse, CriteriaRequest,
};
use crate::grouping::{filter_by_criteria, group_by_property, DEFAULT_PROPERTIES};

/// `POST /classify`: classify, rank and group the submitted models
pub async fn classify(
    State(state): State<super::AppState>,
    payload: Result<Json<ClassifyRequest>, JsonRejection>,
) -> impl IntoResponse {
    let request = match payload {
        Ok(Json(request)) => request,
        Err(rejection) => return decode_failure(rejection),
    };

    info!(models = request.models.len(), "classifying models");
    if state.log_requests {
        debug!(request = ?request, "classify request payload");
    }

    let hierarchical_groups = state.categorizer.categorize(&request.models);
    (
        StatusCode::OK,
        Json(ClassifyResponse {
            classified_groups: Vec::new(),
            available_properties: available_properties(),
            error_message: String::new(),
            hierarchical_groups,
        }),
    )
}

/// `POST /classify/criteria`: classify with filtering, hierarchical or flat
pub async fn classify_with_criteria(
    State(state): State<super::AppState>,
    payload: Result<Json<CriteriaRequest>, JsonRejection>,
) -> impl IntoResponse {
    let request = match payload {
        Ok(Json(request)) => request,
        Err(rejection) => return decode_failure(rejection),
    };

    info!(
        models = request.models.len(),
        hierarchical = request.criteria.hierarchical,
        "classifying models with criteria"
    );
    if state.log_requests {
        debug!(request = ?request, "criteria request payload");
    }

    let classified = state.categorizer.classify_all(&request.models);
    let filtered = filter_by_criteria(&classified, &request.criteria);

    let mut response = ClassifyResponse {
        available_properties: available_properties(),
        ..Default::default()
    };

    if request.criteria.hierarchical {
        response.hierarchical_groups = state.categorizer.rank_and_group(filtered);
    } else {
        let requested: Vec<String> = if request.criteria.properties.is_empty() {
            DEFAULT_PROPERTIES.iter().map(|p| p.to_string()).collect()
        } else {
            request.criteria.properties.clone()
        };
        for property in &requested {
            response
                .classified_groups
                .extend(group_by_property(&filtered, property));
        }
    }

    (StatusCode::OK, Json(response))
}

/// `GET /health`: liveness probe
pub async fn health() -> impl IntoResponse {
    Json(json!({
        "status": "healthy",
        "time": chrono::Utc::now().to_rfc3339(),
    }))
}

/// HTTP 400 with the decode error in the body; the property metadata is
/// static and stays populated
fn decode_failure(rejection: JsonRejection) -> (StatusCode, Json<ClassifyResponse>) {
    warn!(error = %rejection, "rejecting malformed classification request");
    (
        StatusCode::BAD_REQUEST,
        Json(ClassifyResponse {
            classified_groups: Vec::new(),
            available_properties: available_properties(),
            error_message: rejection.body_text(),
            hierarchical_groups: Vec::new(),
        }),
    )
}
