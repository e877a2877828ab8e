// Configuration for docanalyzer - TOML file with environment overrides
use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use crate::analysis::ChunkStrategy;

pub const DEFAULT_BIND: &str = "0.0.0.0:8000";
pub const DEFAULT_UPLOAD_DIR: &str = "temp_uploads";
pub const DEFAULT_MAX_UPLOAD_BYTES: usize = 50 * 1024 * 1024;

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct AppConfig {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub analysis: AnalysisSettings,
    #[serde(default)]
    pub ocr: OcrConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerConfig {
    #[serde(default = "default_bind")]
    pub bind: String,
    #[serde(default = "default_upload_dir")]
    pub upload_dir: PathBuf,
    #[serde(default = "default_origins")]
    pub allowed_origins: Vec<String>,
    #[serde(default = "default_max_upload_bytes")]
    pub max_upload_bytes: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind: default_bind(),
            upload_dir: default_upload_dir(),
            allowed_origins: default_origins(),
            max_upload_bytes: default_max_upload_bytes(),
        }
    }
}

/// Knobs for the per-chunk analysis.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct AnalysisSettings {
    #[serde(default = "default_keyword_count")]
    pub keyword_count: usize,
    #[serde(default = "default_highlight_count")]
    pub highlight_count: usize,
    #[serde(default = "default_summary_sentences")]
    pub summary_sentences: usize,
    /// Fraction of LSA dimensions kept when ranking sentences.
    #[serde(default = "default_reduction_ratio")]
    pub reduction_ratio: f64,
    #[serde(default)]
    pub chunking: ChunkStrategy,
}

impl Default for AnalysisSettings {
    fn default() -> Self {
        Self {
            keyword_count: default_keyword_count(),
            highlight_count: default_highlight_count(),
            summary_sentences: default_summary_sentences(),
            reduction_ratio: default_reduction_ratio(),
            chunking: ChunkStrategy::default(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct OcrConfig {
    #[serde(default = "default_tesseract_path")]
    pub tesseract_path: PathBuf,
    #[serde(default = "default_language")]
    pub language: String,
}

impl Default for OcrConfig {
    fn default() -> Self {
        Self {
            tesseract_path: default_tesseract_path(),
            language: default_language(),
        }
    }
}

fn default_bind() -> String { DEFAULT_BIND.to_string() }
fn default_upload_dir() -> PathBuf { PathBuf::from(DEFAULT_UPLOAD_DIR) }
fn default_max_upload_bytes() -> usize { DEFAULT_MAX_UPLOAD_BYTES }
fn default_keyword_count() -> usize { 8 }
fn default_highlight_count() -> usize { 3 }
fn default_summary_sentences() -> usize { 3 }
fn default_reduction_ratio() -> f64 { 1.0 }
fn default_tesseract_path() -> PathBuf { PathBuf::from("tesseract") }
fn default_language() -> String { "eng".to_string() }

fn default_origins() -> Vec<String> {
    vec![
        "http://localhost:3000".to_string(),
        "http://127.0.0.1:3000".to_string(),
        "https://documentanalyzer-beta.vercel.app".to_string(),
    ]
}

impl AppConfig {
    /// Load from an optional TOML file, then apply environment overrides.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut config = match path {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };
        config.apply_env();
        config.validate()?;
        Ok(config)
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("could not read config file {}", path.display()))?;
        Self::from_toml(&content)
            .with_context(|| format!("invalid config file {}", path.display()))
    }

    pub fn from_toml(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    fn apply_env(&mut self) {
        if let Ok(bind) = env::var("DOCANALYZER_BIND") {
            self.server.bind = bind;
        }
        if let Ok(dir) = env::var("DOCANALYZER_UPLOAD_DIR") {
            self.server.upload_dir = dir.into();
        }
        if let Ok(path) = env::var("DOCANALYZER_TESSERACT") {
            self.ocr.tesseract_path = path.into();
        }
    }

    pub fn validate(&self) -> Result<()> {
        self.analysis.chunking.validate()?;
        if !(self.analysis.reduction_ratio > 0.0) {
            bail!("analysis.reduction_ratio must be positive");
        }
        for origin in &self.server.allowed_origins {
            origin
                .parse::<axum::http::HeaderValue>()
                .with_context(|| format!("invalid allowed origin {origin:?}"))?;
        }
        Ok(())
    }
}
