// Path-based endpoint: analyze a file that already sits on the server
use axum::body::Bytes;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Deserialize;
use std::path::PathBuf;

use super::{ApiError, AppState};
use crate::types::AnalyzerError;

const INVALID_PATH: &str = "Missing or invalid file_path";

#[derive(Debug, Deserialize)]
struct ProcessRequest {
    file_path: Option<String>,
}

fn requested_path(body: &[u8]) -> Option<PathBuf> {
    let request: ProcessRequest = serde_json::from_slice(body).ok()?;
    let path = PathBuf::from(request.file_path.filter(|p| !p.is_empty())?);
    path.exists().then_some(path)
}

#[tracing::instrument(skip_all)]
pub async fn process_handler(State(state): State<AppState>, body: Bytes) -> Response {
    let Some(path) = requested_path(&body) else {
        return ApiError::new(StatusCode::BAD_REQUEST, INVALID_PATH).into_response();
    };

    tracing::info!(path = %path.display(), "processing file by path");
    let pipeline = state.pipeline.clone();
    let result = tokio::task::spawn_blocking(move || pipeline.process_file(&path))
        .await
        .unwrap_or_else(|e| Err(AnalyzerError::Analysis(format!("analysis task failed: {e}"))));

    match result {
        Ok(record) => (StatusCode::OK, Json(record)).into_response(),
        Err(err) => {
            tracing::error!(error = %err, "path analysis failed");
            ApiError::internal(&err).into_response()
        }
    }
}
