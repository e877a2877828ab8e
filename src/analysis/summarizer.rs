// Extractive summarization via latent semantic analysis
//
// Sentences are columns of a smoothed term-frequency matrix. Their weight in
// the strongest latent topics (singular values of the matrix) decides which
// ones make it into the summary.
use ndarray::{Array1, Array2, Axis};
use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::HashMap;

use super::highlight::split_sentences;
use crate::types::Result;

static WORD: Lazy<Regex> = Lazy::new(|| Regex::new(r"\w+").unwrap());

const MIN_DIMENSIONS: usize = 3;
const SMOOTHING: f64 = 0.4;
const MAX_ITERATIONS: usize = 200;
const TOLERANCE: f64 = 1e-10;
const EPSILON: f64 = 1e-12;

/// Anything that can pick representative sentences out of a text.
pub trait Summarizer: Send + Sync {
    fn summarize(&self, text: &str, sentence_count: usize) -> Result<Vec<String>>;
}

#[derive(Debug, Clone)]
pub struct LsaSummarizer {
    reduction_ratio: f64,
}

impl Default for LsaSummarizer {
    fn default() -> Self {
        Self { reduction_ratio: 1.0 }
    }
}

impl LsaSummarizer {
    pub fn new(reduction_ratio: f64) -> Self {
        Self { reduction_ratio }
    }

    /// Rank every sentence; higher means more representative.
    ///
    /// Returns `None` when the sentences contain no words at all.
    pub fn rank_sentences(&self, sentences: &[&str]) -> Option<Vec<f64>> {
        let matrix = term_matrix(sentences)?;
        let (rows, cols) = matrix.dim();

        let singular_count = rows.min(cols);
        let dimensions = MIN_DIMENSIONS
            .max((singular_count as f64 * self.reduction_ratio).floor() as usize);

        if dimensions >= singular_count {
            // Summing over every singular triple collapses to the column norm
            return Some(
                matrix
                    .axis_iter(Axis(1))
                    .map(|column| column.dot(&column).sqrt())
                    .collect(),
            );
        }

        let gram = matrix.t().dot(&matrix);
        let pairs = top_eigenpairs(&gram, dimensions);
        let ranks = (0..cols)
            .map(|j| {
                pairs
                    .iter()
                    .map(|(value, vector)| value * vector[j] * vector[j])
                    .sum::<f64>()
                    .max(0.0)
                    .sqrt()
            })
            .collect();
        Some(ranks)
    }
}

impl Summarizer for LsaSummarizer {
    fn summarize(&self, text: &str, sentence_count: usize) -> Result<Vec<String>> {
        if sentence_count == 0 {
            return Ok(Vec::new());
        }

        let sentences = split_sentences(text);
        let Some(ranks) = self.rank_sentences(&sentences) else {
            tracing::debug!("no words to summarize");
            return Ok(Vec::new());
        };

        let mut order: Vec<usize> = (0..sentences.len()).collect();
        order.sort_by(|&a, &b| {
            ranks[b]
                .partial_cmp(&ranks[a])
                .unwrap_or(std::cmp::Ordering::Equal)
        });
        order.truncate(sentence_count);
        order.sort_unstable();

        Ok(order.into_iter().map(|i| sentences[i].to_string()).collect())
    }
}

/// Summarize with the default LSA settings.
pub fn summarize_text(text: &str, sentence_count: usize) -> Result<Vec<String>> {
    LsaSummarizer::default().summarize(text, sentence_count)
}

fn sentence_words(sentence: &str) -> Vec<String> {
    WORD.find_iter(sentence)
        .map(|m| m.as_str())
        .filter(|w| w.chars().next().is_some_and(char::is_alphabetic))
        .map(str::to_lowercase)
        .collect()
}

/// Words x sentences matrix with smoothed per-sentence term frequency.
fn term_matrix(sentences: &[&str]) -> Option<Array2<f64>> {
    let tokenized: Vec<Vec<String>> = sentences.iter().map(|s| sentence_words(s)).collect();

    let mut vocabulary: HashMap<&str, usize> = HashMap::new();
    for word in tokenized.iter().flatten() {
        let next = vocabulary.len();
        vocabulary.entry(word.as_str()).or_insert(next);
    }
    if vocabulary.is_empty() {
        return None;
    }

    let mut matrix = Array2::<f64>::zeros((vocabulary.len(), sentences.len()));
    for (col, words) in tokenized.iter().enumerate() {
        for word in words {
            matrix[[vocabulary[word.as_str()], col]] += 1.0;
        }
    }

    for mut column in matrix.axis_iter_mut(Axis(1)) {
        let max = column.fold(0.0_f64, |acc, &v| acc.max(v));
        if max > 0.0 {
            column.mapv_inplace(|count| SMOOTHING + (1.0 - SMOOTHING) * count / max);
        }
    }

    Some(matrix)
}

/// Largest eigenpairs of a symmetric positive semi-definite matrix, found by
/// power iteration with deflation.
fn top_eigenpairs(matrix: &Array2<f64>, count: usize) -> Vec<(f64, Array1<f64>)> {
    let n = matrix.nrows();
    let mut residual = matrix.clone();
    let mut pairs = Vec::with_capacity(count);

    for k in 0..count.min(n) {
        let mut vector = Array1::from_shape_fn(n, |i| 1.0 + ((i + k) % 7) as f64 * 0.1);
        let norm = vector.dot(&vector).sqrt();
        vector /= norm;

        for _ in 0..MAX_ITERATIONS {
            let next = residual.dot(&vector);
            let norm = next.dot(&next).sqrt();
            if norm < EPSILON {
                break;
            }
            let next = next / norm;
            let delta: f64 = (&next - &vector).mapv(f64::abs).sum();
            vector = next;
            if delta < TOLERANCE {
                break;
            }
        }

        let value = vector.dot(&residual.dot(&vector));
        if value <= EPSILON {
            break;
        }

        let column = vector.clone().insert_axis(Axis(1));
        let row = vector.clone().insert_axis(Axis(0));
        residual = residual - column.dot(&row) * value;
        pairs.push((value, vector));
    }

    pairs
}
