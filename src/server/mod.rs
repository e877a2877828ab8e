// HTTP surface for the document analyzer
use anyhow::Context;
use axum::extract::DefaultBodyLimit;
use axum::http::header::{ACCEPT, AUTHORIZATION, CONTENT_TYPE};
use axum::http::{HeaderValue, Method, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde_json::json;
use std::sync::Arc;
use tower_http::cors::{AllowOrigin, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::config::ServerConfig;
use crate::pipeline::DocumentPipeline;
use crate::types::{AnalyzerError, ErrorBody};

mod process;
mod upload;

#[derive(Clone)]
pub struct AppState {
    pub pipeline: Arc<DocumentPipeline>,
    pub server: Arc<ServerConfig>,
}

impl AppState {
    pub fn new(pipeline: DocumentPipeline, server: ServerConfig) -> Self {
        Self {
            pipeline: Arc::new(pipeline),
            server: Arc::new(server),
        }
    }
}

/// An error rendered as a flat `{"error": ...}` body.
#[derive(Debug)]
pub struct ApiError {
    status: StatusCode,
    message: String,
}

impl ApiError {
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
        }
    }

    pub fn internal(err: &AnalyzerError) -> Self {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, err.to_string())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, Json(ErrorBody::new(self.message))).into_response()
    }
}

pub fn router(state: AppState) -> Router {
    let body_limit = state.server.max_upload_bytes;
    let cors = cors_layer(&state.server.allowed_origins);

    Router::new()
        .route("/", get(root_handler))
        .route("/test-upload", post(upload::test_upload_handler))
        .route("/upload", post(upload::upload_handler))
        .route("/process", post(process::process_handler))
        .layer(DefaultBodyLimit::max(body_limit))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

fn cors_layer(origins: &[String]) -> CorsLayer {
    let origins: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| match origin.parse() {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!(origin = %origin, "ignoring unparsable CORS origin");
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_credentials(true)
        .allow_headers([ACCEPT, AUTHORIZATION, CONTENT_TYPE])
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_origin(AllowOrigin::list(origins))
}

async fn root_handler() -> impl IntoResponse {
    Json(json!({
        "message": "Document analyzer API is running. Use POST /upload or /test-upload to send files."
    }))
}

pub async fn serve(state: AppState) -> anyhow::Result<()> {
    let bind = state.server.bind.clone();
    let upload_dir = state.server.upload_dir.clone();
    tokio::fs::create_dir_all(&upload_dir)
        .await
        .with_context(|| format!("could not create upload dir {}", upload_dir.display()))?;

    let listener = tokio::net::TcpListener::bind(&bind)
        .await
        .with_context(|| format!("could not bind {bind}"))?;
    tracing::info!(%bind, upload_dir = %upload_dir.display(), "document analyzer listening");

    axum::serve(listener, router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("error running server")
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    tracing::info!("shutting down");
}
