// docanalyzer - upload a document, get keywords, highlights and a summary
use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::sync::Arc;

use docanalyzer::config::AppConfig;
use docanalyzer::extraction::{self, DocumentKind, OcrEngine, TesseractEngine};
use docanalyzer::server::{self, AppState};
use docanalyzer::{logging, DocumentPipeline, ProcessOutcome};

#[derive(Parser, Debug)]
#[command(author, version, about = "Document text extraction and analysis")]
struct Args {
    /// TOML configuration file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run the HTTP API
    Serve {
        /// Address to listen on, overrides the config file
        #[arg(short, long)]
        bind: Option<String>,
    },
    /// Analyze a document and print the result as JSON
    Analyze { path: PathBuf },
    /// Print the raw text extracted from a document
    Extract { path: PathBuf },
}

fn build_pipeline(config: &AppConfig) -> DocumentPipeline {
    let ocr = TesseractEngine::from_config(&config.ocr);
    if !ocr.is_ready() {
        tracing::warn!(
            binary = %config.ocr.tesseract_path.display(),
            "tesseract not found - image uploads will fail until it is installed"
        );
    }
    DocumentPipeline::with_ocr(Arc::new(ocr), config.analysis.clone())
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    logging::init(args.verbose);

    let mut config = AppConfig::load(args.config.as_deref()).context("failed to load configuration")?;

    match args.command {
        Command::Serve { bind } => {
            if let Some(bind) = bind {
                config.server.bind = bind;
            }
            let pipeline = build_pipeline(&config);
            server::serve(AppState::new(pipeline, config.server)).await
        }
        Command::Analyze { path } => {
            let pipeline = build_pipeline(&config);
            let result = tokio::task::spawn_blocking(move || pipeline.process_file(&path)).await?;
            let failed = result.is_err();

            let outcome = ProcessOutcome::from(result);
            println!("{}", serde_json::to_string_pretty(&outcome)?);
            if failed {
                std::process::exit(1);
            }
            Ok(())
        }
        Command::Extract { path } => {
            let pipeline = build_pipeline(&config);
            if DocumentKind::from_path(&path)? == DocumentKind::Pdf {
                let pages = extraction::pdf::get_page_count(&path)?;
                eprintln!("{} pages", pages);
            }
            let text = tokio::task::spawn_blocking(move || pipeline.extractor().extract_text(&path))
                .await??;
            println!("{}", text);
            Ok(())
        }
    }
}
