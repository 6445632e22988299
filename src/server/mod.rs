// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! HTTP surface for the classification engine
//!
//! A small axum application: `POST /classify` runs the full pipeline,
//! `POST /classify/criteria` adds filtering and flat grouping, and
//! `GET /health` reports liveness. Decode failures come back as HTTP 400
//! with the error in the response body and the static property metadata
//! still populated.

mod handlers;

use std::sync::Arc;

use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::config::Settings;
use crate::engine::Categorizer;
use crate::error::Result;

/// Shared state for request handlers
#[derive(Clone)]
pub struct AppState {
    pub categorizer: Arc<Categorizer>,
    /// Verbose request payload logging, from the settings file
    pub log_requests: bool,
}

impl AppState {
    pub fn new(log_requests: bool) -> Self {
        Self {
            categorizer: Arc::new(Categorizer::new()),
            log_requests,
        }
    }
}

/// Build the API router over the given state
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(handlers::health))
        .route("/classify", post(handlers::classify))
        .route("/classify/criteria", post(handlers::classify_with_criteria))
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state)
}

/// Bind and serve until the process is stopped
pub async fn serve(settings: &Settings) -> Result<()> {
    let state = AppState::new(settings.logging.log_requests);
    let app = router(state);

    let addr = format!("{}:{}", settings.server.host, settings.server.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("corral listening on {addr}");
    axum::serve(listener, app).await?;
    Ok(())
}
