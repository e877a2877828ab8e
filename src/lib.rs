// docanalyzer - document text extraction and lightweight analysis
pub mod analysis;
pub mod config;
pub mod extraction;
pub mod logging;
pub mod pipeline;
pub mod server;
pub mod types;

pub use pipeline::DocumentPipeline;
pub use types::{AnalysisRecord, AnalyzerError, ProcessOutcome, ResultRecord};
