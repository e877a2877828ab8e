// Text analysis: normalization, chunking, keywords, highlights, summaries
pub mod chunking;
pub mod highlight;
pub mod keywords;
pub mod normalize;
pub mod summarizer;

pub use chunking::ChunkStrategy;
pub use highlight::{highlight_sentences, split_sentences};
pub use keywords::{extract_keywords, STOPWORDS};
pub use normalize::clean_text;
pub use summarizer::{summarize_text, LsaSummarizer, Summarizer};
