// docsort - classify a directory of PDFs and store per-type metadata
use anyhow::{Context, Result};
use clap::Parser;
use docsort::{pipeline, PipelineConfig};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Args {
    /// TOML config file (defaults to ./docsort.toml when present)
    #[arg(long)]
    config: Option<PathBuf>,
    /// Directory holding the PDFs
    #[arg(long)]
    data_dir: Option<PathBuf>,
    /// Where the trained model is written and reloaded from
    #[arg(long)]
    model: Option<PathBuf>,
    /// SQLite database receiving one row per document
    #[arg(long)]
    db: Option<PathBuf>,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let mut config =
        PipelineConfig::load(args.config.as_deref()).context("loading configuration")?;
    if let Some(dir) = args.data_dir {
        config.data_dir = dir;
    }
    if let Some(model) = args.model {
        config.model_path = model;
    }
    if let Some(db) = args.db {
        config.db_path = db;
    }

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_level));
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(filter)
        .init();

    let summary = pipeline::run(&config)?;
    tracing::info!(
        documents = summary.documents,
        rows = summary.rows_written,
        iterations = summary.iterations,
        converged = summary.converged,
        "run complete"
    );
    Ok(())
}
