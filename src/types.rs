// Core types shared by extraction, analysis and the HTTP layer
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Analysis of a single chunk of normalized text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisRecord {
    pub chunk_number: usize,
    pub keywords: Vec<String>,
    pub highlights: Vec<String>,
    pub summary: Vec<String>,
}

/// Result of running the whole pipeline over one document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResultRecord {
    pub total_chunks: usize,
    pub analysis: Vec<AnalysisRecord>,
}

/// Flat error body returned to clients.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

impl ErrorBody {
    pub fn new(message: impl Into<String>) -> Self {
        Self { error: message.into() }
    }
}

/// Either a result record or an error body, serialized without a tag so the
/// JSON matches what the front end expects.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum ProcessOutcome {
    Success(ResultRecord),
    Failure(ErrorBody),
}

impl From<Result<ResultRecord>> for ProcessOutcome {
    fn from(result: Result<ResultRecord>) -> Self {
        match result {
            Ok(record) => ProcessOutcome::Success(record),
            Err(e) => ProcessOutcome::Failure(ErrorBody::new(e.to_string())),
        }
    }
}

// Error types
#[derive(Debug, thiserror::Error)]
pub enum AnalyzerError {
    #[error("File not found!")]
    FileNotFound { path: PathBuf },

    #[error("Unsupported file type: {0}")]
    UnsupportedFormat(String),

    #[error("Failed to extract text from {format} document: {message}")]
    Extraction { format: &'static str, message: String },

    #[error("OCR error: {0}")]
    Ocr(String),

    #[error("Analysis error: {0}")]
    Analysis(String),

    #[error("No file received")]
    MissingUpload,

    #[error("Invalid upload: {0}")]
    InvalidUpload(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl AnalyzerError {
    pub fn extraction(format: &'static str, err: impl std::fmt::Display) -> Self {
        AnalyzerError::Extraction {
            format,
            message: err.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, AnalyzerError>;
