// Pipeline orchestrator: extract -> normalize -> chunk -> analyze
use std::path::Path;
use std::sync::Arc;

use crate::analysis::{clean_text, extract_keywords, highlight_sentences, LsaSummarizer, Summarizer};
use crate::config::AnalysisSettings;
use crate::extraction::{OcrEngine, TextExtractor};
use crate::types::{AnalysisRecord, AnalyzerError, Result, ResultRecord};

pub struct DocumentPipeline {
    extractor: TextExtractor,
    summarizer: Box<dyn Summarizer>,
    settings: AnalysisSettings,
}

impl DocumentPipeline {
    pub fn new(
        extractor: TextExtractor,
        summarizer: Box<dyn Summarizer>,
        settings: AnalysisSettings,
    ) -> Self {
        Self {
            extractor,
            summarizer,
            settings,
        }
    }

    /// Pipeline with the LSA summarizer configured from `settings`.
    pub fn with_ocr(ocr: Arc<dyn OcrEngine>, settings: AnalysisSettings) -> Self {
        let summarizer = Box::new(LsaSummarizer::new(settings.reduction_ratio));
        Self::new(TextExtractor::new(ocr), summarizer, settings)
    }

    pub fn extractor(&self) -> &TextExtractor {
        &self.extractor
    }

    pub fn process_file(&self, path: &Path) -> Result<ResultRecord> {
        if !path.exists() {
            return Err(AnalyzerError::FileNotFound {
                path: path.to_path_buf(),
            });
        }

        let raw = self.extractor.extract_text(path)?;
        self.analyze_text(&raw)
    }

    /// Everything after extraction, on text already in memory.
    pub fn analyze_text(&self, raw: &str) -> Result<ResultRecord> {
        let cleaned = clean_text(raw);
        let chunks = self.settings.chunking.chunk(&cleaned);

        let analysis = chunks
            .iter()
            .enumerate()
            .map(|(i, chunk)| self.analyze_chunk(i + 1, chunk))
            .collect::<Result<Vec<_>>>()?;

        Ok(ResultRecord {
            total_chunks: chunks.len(),
            analysis,
        })
    }

    fn analyze_chunk(&self, chunk_number: usize, chunk: &str) -> Result<AnalysisRecord> {
        let keywords = extract_keywords(chunk, self.settings.keyword_count);
        let highlights = highlight_sentences(chunk, &keywords, self.settings.highlight_count);
        let summary = self
            .summarizer
            .summarize(chunk, self.settings.summary_sentences)?;

        tracing::debug!(
            chunk_number,
            keywords = keywords.len(),
            highlights = highlights.len(),
            summary = summary.len(),
            "analyzed chunk"
        );

        Ok(AnalysisRecord {
            chunk_number,
            keywords,
            highlights,
            summary,
        })
    }
}
