mod crawler;
mod export;
mod parser;
mod store;

use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::warn;

use store::Store;

#[derive(Parser)]
#[command(name = "agta_scraper", about = "AGTA member directory scraper")]
struct Cli {
    /// Directory holding fetched profile documents
    #[arg(long, default_value = "data/html")]
    data_dir: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Crawl the directory listing and store profile pages
    Crawl {
        /// Max profiles to fetch (default: all)
        #[arg(short = 'n', long)]
        limit: Option<usize>,
    },
    /// Extract records from stored documents and write them out
    Process {
        /// Output file path
        #[arg(short, long, default_value = "data/results/records.csv")]
        output: PathBuf,
        /// Output format: csv or json
        #[arg(long, default_value = "csv")]
        format: String,
    },
    /// Crawl + process in one pipeline
    Run {
        /// Max profiles to fetch (default: all)
        #[arg(short = 'n', long)]
        limit: Option<usize>,
        #[arg(short, long, default_value = "data/results/records.csv")]
        output: PathBuf,
        #[arg(long, default_value = "csv")]
        format: String,
    },
    /// Show document store statistics
    Stats,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let t0 = Instant::now();
    let cli = Cli::parse();
    let store = Store::open(&cli.data_dir)?;

    let result = match cli.command {
        Commands::Crawl { limit } => {
            let stats = crawler::crawl(&store, limit).await?;
            print_crawl_stats(&stats);
            Ok(())
        }
        Commands::Process { output, format } => process_corpus(&store, &output, &format),
        Commands::Run {
            limit,
            output,
            format,
        } => {
            let stats = crawler::crawl(&store, limit).await?;
            print_crawl_stats(&stats);
            process_corpus(&store, &output, &format)
        }
        Commands::Stats => {
            let docs = store.list()?;
            println!("Documents in store: {}", docs.len());
            Ok(())
        }
    };

    let elapsed = t0.elapsed();
    if elapsed.as_secs() >= 1 {
        println!("\nDone in {:.1}s", elapsed.as_secs_f64());
    }

    result
}

fn print_crawl_stats(stats: &crawler::CrawlStats) {
    println!(
        "Crawled {} listing pages: {} profiles fetched, {} already stored.",
        stats.pages, stats.fetched, stats.skipped
    );
}

/// Batch driver: extract every stored document, log per-document warnings,
/// and hand the record stream to the requested sink. One bad document never
/// aborts the batch.
fn process_corpus(store: &Store, output: &Path, format: &str) -> Result<()> {
    use indicatif::{ProgressBar, ProgressStyle};
    use rayon::prelude::*;

    let docs = store.list()?;
    if docs.is_empty() {
        println!("No documents in store. Run 'crawl' first.");
        return Ok(());
    }
    println!("Processing {} documents...", docs.len());

    let pb = ProgressBar::new(docs.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template(
                "{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} ({per_sec})",
            )?
            .progress_chars("#>-"),
    );

    let mut records = Vec::with_capacity(docs.len());
    let mut failed = 0usize;

    for chunk in docs.chunks(500) {
        let results: Vec<_> = chunk
            .par_iter()
            .map(|doc| (doc.slug.clone(), extract_one(doc)))
            .collect();

        for (slug, result) in results {
            match result {
                Ok((record, warnings)) => {
                    for w in warnings {
                        warn!("{}: {}", slug, w);
                    }
                    records.push(record);
                }
                Err(e) => {
                    warn!("skipping {}: {}", slug, e);
                    failed += 1;
                }
            }
        }
        pb.inc(chunk.len() as u64);
    }
    pb.finish_and_clear();

    match format {
        "csv" => export::write_csv(&records, output)?,
        "json" => export::write_json(&records, output)?,
        other => anyhow::bail!("unknown output format: {}", other),
    }

    println!(
        "Produced {} records from {} documents ({} failed).",
        records.len(),
        docs.len(),
        failed
    );
    Ok(())
}

fn extract_one(
    doc: &store::StoredDocument,
) -> Result<(parser::extract::Record, Vec<parser::extract::ExtractWarning>)> {
    let html = doc
        .read()
        .with_context(|| format!("reading {}", doc.path.display()))?;
    let out = parser::process_document(&html)?;
    Ok(out)
}
