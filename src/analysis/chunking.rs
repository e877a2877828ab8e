// Chunking strategies for normalized text
use anyhow::{bail, Result};
use serde::{Deserialize, Serialize};

/// How normalized text is split before analysis.
///
/// `Single` keeps the whole document as one chunk. `Window` slides a fixed
/// number of words with `overlap` words shared between neighbours.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(tag = "strategy", rename_all = "snake_case")]
pub enum ChunkStrategy {
    #[default]
    Single,
    Window { size: usize, overlap: usize },
}

impl ChunkStrategy {
    pub fn validate(&self) -> Result<()> {
        if let ChunkStrategy::Window { size, overlap } = self {
            if *size == 0 {
                bail!("chunk window size must be greater than zero");
            }
            if overlap >= size {
                bail!("chunk overlap ({overlap}) must be smaller than the window size ({size})");
            }
        }
        Ok(())
    }

    /// Split already-normalized text. Empty text yields no chunks.
    pub fn chunk(&self, text: &str) -> Vec<String> {
        if text.is_empty() {
            return Vec::new();
        }

        match *self {
            ChunkStrategy::Single => vec![text.to_string()],
            ChunkStrategy::Window { size, overlap } => window_chunks(text, size, overlap),
        }
    }
}

fn window_chunks(text: &str, size: usize, overlap: usize) -> Vec<String> {
    let words: Vec<&str> = text.split_whitespace().collect();
    let step = size.saturating_sub(overlap).max(1);
    let size = size.max(1);

    let mut chunks = Vec::new();
    let mut start = 0;
    while start < words.len() {
        let end = (start + size).min(words.len());
        chunks.push(words[start..end].join(" "));
        if end == words.len() {
            break;
        }
        start += step;
    }
    chunks
}
