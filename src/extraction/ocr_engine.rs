// OCR engine - tesseract driven through its command line
use image::{DynamicImage, ImageFormat};
use std::path::{Path, PathBuf};
use std::process::Command;

use crate::config::OcrConfig;
use crate::types::{AnalyzerError, Result};

/// Recognizes text in an image, returning one fragment per detected line.
///
/// Implementations are shared across requests, so they must be safe to call
/// concurrently.
pub trait OcrEngine: Send + Sync {
    fn recognize(&self, image: &DynamicImage) -> Result<Vec<String>>;

    fn name(&self) -> &str;

    fn is_ready(&self) -> bool {
        true
    }
}

pub struct TesseractEngine {
    binary: PathBuf,
    language: String,
}

impl TesseractEngine {
    pub fn new(binary: impl Into<PathBuf>, language: impl Into<String>) -> Self {
        Self {
            binary: binary.into(),
            language: language.into(),
        }
    }

    pub fn from_config(config: &OcrConfig) -> Self {
        Self::new(config.tesseract_path.clone(), config.language.clone())
    }

    fn run(&self, image_path: &Path) -> Result<String> {
        let output = Command::new(&self.binary)
            .arg(image_path)
            .arg("stdout")
            .args(["-l", &self.language])
            .output()
            .map_err(|e| {
                AnalyzerError::Ocr(format!("failed to run {}: {}", self.binary.display(), e))
            })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(AnalyzerError::Ocr(format!(
                "tesseract exited with {}: {}",
                output.status,
                stderr.trim()
            )));
        }

        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}

impl OcrEngine for TesseractEngine {
    fn recognize(&self, image: &DynamicImage) -> Result<Vec<String>> {
        // Re-encode as PNG so tesseract never sees a format it cannot read
        let scratch = tempfile::Builder::new()
            .prefix("docanalyzer-ocr-")
            .suffix(".png")
            .tempfile()?;
        image
            .save_with_format(scratch.path(), ImageFormat::Png)
            .map_err(|e| AnalyzerError::Ocr(format!("could not prepare image: {e}")))?;

        let raw = self.run(scratch.path())?;
        Ok(split_fragments(&raw))
    }

    fn name(&self) -> &str {
        "tesseract"
    }

    fn is_ready(&self) -> bool {
        Command::new(&self.binary)
            .arg("--version")
            .output()
            .map(|out| out.status.success())
            .unwrap_or(false)
    }
}

/// Non-empty, trimmed lines of OCR output.
pub fn split_fragments(raw: &str) -> Vec<String> {
    raw.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}
