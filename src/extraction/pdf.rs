// Page-by-page PDF text extraction - pure Rust via lopdf
use lopdf::Document;
use std::path::Path;

use crate::types::{AnalyzerError, Result};

/// Extract the text of every page, one newline after each page that has text.
pub fn extract_pdf_text(path: &Path) -> Result<String> {
    let document = Document::load(path).map_err(|e| AnalyzerError::extraction("pdf", e))?;
    Ok(collect_pages(&document))
}

pub fn get_page_count(path: &Path) -> Result<usize> {
    let document = Document::load(path).map_err(|e| AnalyzerError::extraction("pdf", e))?;
    Ok(document.get_pages().len())
}

fn collect_pages(document: &Document) -> String {
    let mut text = String::new();

    for page_number in document.get_pages().keys() {
        match document.extract_text(&[*page_number]) {
            Ok(page_text) if !page_text.trim().is_empty() => {
                text.push_str(&page_text);
                text.push('\n');
            }
            Ok(_) => {}
            Err(e) => {
                tracing::warn!(page = page_number, error = %e, "skipping page without decodable text");
            }
        }
    }

    text
}
