// src/main.rs
mod document;
mod enrichment;
mod extractors;
mod report;
mod storage;
mod utils;

use clap::Parser;
use document::DocumentText;
use enrichment::client::CompletionClient;
use enrichment::sectionizer::EnrichmentRecord;
use enrichment::{prompt, sectionizer};
use report::ProtocolReport;
use storage::StorageManager;
use utils::error::CompletionError;
use utils::AppError;

/// Command Line Interface for the carbon-offset protocol metadata extractor
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the methodology PDF to process
    pdf_path: std::path::PathBuf,

    /// API key for the completion service (falls back to the
    /// OPENAI_API_KEY environment variable)
    #[arg(long)]
    api_key: Option<String>,

    /// Completion model used for the enrichment pass
    #[arg(long, default_value = "gpt-4o-mini")]
    model: String,

    /// Output directory for the extracted report (print-only when omitted)
    #[arg(short, long)]
    output_dir: Option<String>,

    /// Skip the LLM enrichment pass and emit only deterministic fields
    #[arg(long)]
    skip_enrichment: bool,
}

#[tokio::main]
async fn main() -> Result<(), AppError> {
    // 1. Setup Logging (reads RUST_LOG env var)
    utils::logging::setup_logging();

    // 2. Parse CLI Arguments
    let args = Args::parse();
    tracing::info!("Starting processing for: {}", args.pdf_path.display());

    // 3. Render the document text. Unreadable input is the one fatal
    //    error: without page text there is no record to produce.
    let doc = DocumentText::from_pdf(&args.pdf_path)?;
    tracing::info!("Rendered {} pages of text", doc.page_count());

    // 4. Deterministic field extraction
    let metadata = extractors::fields::extract_metadata(&doc);
    tracing::info!("Classified standard body: {}", metadata.standard_body);

    // 5. Optional enrichment pass. The credential is resolved once here
    //    and passed by value into the client; enrichment failure is
    //    logged and the deterministic record stands on its own.
    let enrichment = if args.skip_enrichment {
        tracing::info!("Enrichment pass skipped by request");
        None
    } else {
        let api_key = args
            .api_key
            .clone()
            .or_else(|| std::env::var("OPENAI_API_KEY").ok());

        match api_key {
            Some(key) => match run_enrichment(&doc, key, args.model.clone()).await {
                Ok(record) => {
                    tracing::info!("Recovered {} enrichment sections", record.len());
                    Some(record)
                }
                Err(e) => {
                    tracing::warn!("Enrichment unavailable, continuing without it: {}", e);
                    None
                }
            },
            None => {
                tracing::warn!("No API key provided; skipping enrichment pass");
                None
            }
        }
    };

    // 6. Assemble and present the record
    let protocol_report = ProtocolReport::new(metadata, enrichment);
    println!("Extracted Information:");
    for (label, value) in protocol_report.entries() {
        println!("{}: {}", label, value);
    }

    // 7. Persist when an output directory was requested
    if let Some(output_dir) = &args.output_dir {
        let storage = StorageManager::new(output_dir)?;
        let stem = args
            .pdf_path
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or("protocol");
        let path = storage.save_report(&protocol_report, stem)?;
        tracing::info!("Saved report to: {}", path.display());
    }

    Ok(())
}

/// Builds the prompt, calls the completion service, and sectionizes the
/// answer. Any failure along the way surfaces as one CompletionError
/// for the caller to log.
async fn run_enrichment(
    doc: &DocumentText,
    api_key: String,
    model: String,
) -> Result<EnrichmentRecord, CompletionError> {
    let client = CompletionClient::new(api_key, model)?;
    let request = prompt::build_enrichment_prompt(&doc.full_text());
    let completion = client.complete(&request).await?;
    Ok(sectionizer::sectionize(&completion))
}
