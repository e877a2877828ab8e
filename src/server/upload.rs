// Multipart upload endpoints
use axum::body::Bytes;
use axum::extract::{Multipart, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use std::path::{Path, PathBuf};

use super::{ApiError, AppState};
use crate::types::{AnalyzerError, Result, ResultRecord};

const FILE_FIELD: &str = "file";

struct UploadedFile {
    filename: String,
    content_type: Option<String>,
    bytes: Bytes,
}

async fn read_file_field(multipart: &mut Multipart) -> Result<Option<UploadedFile>> {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AnalyzerError::InvalidUpload(e.to_string()))?
    {
        if field.name() != Some(FILE_FIELD) {
            continue;
        }

        let filename = field.file_name().unwrap_or_default().to_string();
        let content_type = field.content_type().map(str::to_string);
        let bytes = field
            .bytes()
            .await
            .map_err(|e| AnalyzerError::InvalidUpload(e.to_string()))?;

        return Ok(Some(UploadedFile {
            filename,
            content_type,
            bytes,
        }));
    }

    Ok(None)
}

/// Where an upload lands. Only the final path component of the client's
/// file name is kept, so identically named uploads share a path.
fn upload_location(upload_dir: &Path, filename: &str) -> PathBuf {
    let name = Path::new(filename)
        .file_name()
        .map(|n| n.to_os_string())
        .unwrap_or_else(|| "upload".into());
    upload_dir.join(name)
}

#[tracing::instrument(skip_all)]
pub async fn test_upload_handler(mut multipart: Multipart) -> Response {
    match read_file_field(&mut multipart).await {
        Ok(Some(file)) => Json(json!({
            "filename": file.filename,
            "content_type": file.content_type,
            "detail": "Upload successful!"
        }))
        .into_response(),
        Ok(None) => Json(json!({ "error": "No file received" })).into_response(),
        Err(err) => Json(json!({ "error": err.to_string() })).into_response(),
    }
}

#[tracing::instrument(skip_all)]
pub async fn upload_handler(State(state): State<AppState>, mut multipart: Multipart) -> Response {
    match analyze_upload(&state, &mut multipart).await {
        Ok(record) => (StatusCode::OK, Json(record)).into_response(),
        Err(err) => {
            tracing::error!(error = %err, "upload analysis failed");
            ApiError::internal(&err).into_response()
        }
    }
}

async fn analyze_upload(state: &AppState, multipart: &mut Multipart) -> Result<ResultRecord> {
    let file = read_file_field(multipart)
        .await?
        .ok_or(AnalyzerError::MissingUpload)?;

    let upload_dir = &state.server.upload_dir;
    tokio::fs::create_dir_all(upload_dir).await?;
    let location = upload_location(upload_dir, &file.filename);
    tokio::fs::write(&location, &file.bytes).await?;
    tracing::info!(
        filename = %file.filename,
        bytes = file.bytes.len(),
        location = %location.display(),
        "stored upload"
    );

    let pipeline = state.pipeline.clone();
    let path = location.clone();
    let record = tokio::task::spawn_blocking(move || pipeline.process_file(&path))
        .await
        .map_err(|e| AnalyzerError::Analysis(format!("analysis task failed: {e}")))??;

    // Failed analyses return above and leave the upload behind
    tokio::fs::remove_file(&location).await?;
    Ok(record)
}
