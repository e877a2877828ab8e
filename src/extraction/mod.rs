// Document text extraction - routes a file to the extractor for its format
pub mod docx;
pub mod ocr_engine;
pub mod pdf;
pub mod spreadsheet;

use std::path::Path;
use std::sync::Arc;
use std::time::Instant;

use crate::types::{AnalyzerError, Result};
pub use ocr_engine::{OcrEngine, TesseractEngine};

pub const IMAGE_EXTENSIONS: [&str; 6] = ["png", "jpg", "jpeg", "bmp", "tiff", "tif"];
pub const SPREADSHEET_EXTENSIONS: [&str; 2] = ["xlsx", "xls"];

/// Document families the extractor knows how to read.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentKind {
    Pdf,
    Image,
    Spreadsheet,
    WordDocument,
}

impl DocumentKind {
    /// Classify a path by its lowercased extension.
    pub fn from_path(path: &Path) -> Result<Self> {
        let ext = path
            .extension()
            .and_then(|ext| ext.to_str())
            .unwrap_or("")
            .to_lowercase();

        match ext.as_str() {
            "pdf" => Ok(DocumentKind::Pdf),
            "docx" => Ok(DocumentKind::WordDocument),
            e if IMAGE_EXTENSIONS.contains(&e) => Ok(DocumentKind::Image),
            e if SPREADSHEET_EXTENSIONS.contains(&e) => Ok(DocumentKind::Spreadsheet),
            "" => Err(AnalyzerError::UnsupportedFormat(String::new())),
            other => Err(AnalyzerError::UnsupportedFormat(format!(".{other}"))),
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            DocumentKind::Pdf => "pdf",
            DocumentKind::Image => "image",
            DocumentKind::Spreadsheet => "spreadsheet",
            DocumentKind::WordDocument => "docx",
        }
    }
}

/// Turns a document on disk into raw text.
///
/// Holds the OCR engine so it is built once and shared by every request.
#[derive(Clone)]
pub struct TextExtractor {
    ocr: Arc<dyn OcrEngine>,
}

impl TextExtractor {
    pub fn new(ocr: Arc<dyn OcrEngine>) -> Self {
        Self { ocr }
    }

    pub fn extract_text(&self, path: &Path) -> Result<String> {
        let kind = DocumentKind::from_path(path)?;
        let start = Instant::now();
        tracing::debug!(path = %path.display(), kind = kind.label(), "extracting text");

        let text = match kind {
            DocumentKind::Pdf => pdf::extract_pdf_text(path)?,
            DocumentKind::Image => self.extract_image_text(path)?,
            DocumentKind::Spreadsheet => spreadsheet::extract_spreadsheet_text(path)?,
            DocumentKind::WordDocument => docx::extract_docx_text(path)?,
        };

        tracing::info!(
            kind = kind.label(),
            chars = text.chars().count(),
            elapsed_ms = start.elapsed().as_millis() as u64,
            "extracted text"
        );
        Ok(text)
    }

    fn extract_image_text(&self, path: &Path) -> Result<String> {
        let image = image::open(path).map_err(|e| AnalyzerError::extraction("image", e))?;
        let fragments = self.ocr.recognize(&image)?;
        Ok(fragments.join("\n"))
    }
}
