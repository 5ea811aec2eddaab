//! chavrutad — Daf Yomi study-partner daemon.
//!
//! Serves the chat API over HTTP, backed by a hosted text-generation
//! provider with retry and response caching.

use clap::Parser;
use tracing_subscriber::EnvFilter;

use chavruta::server::config::{Config, Secrets};

/// Chavruta daemon — bilingual Daf Yomi study-partner service.
#[derive(Parser)]
#[command(name = "chavrutad")]
#[command(version)]
#[command(about = "Daf Yomi study-partner daemon")]
struct Args {
    /// Path to configuration file.
    #[arg(short, long)]
    config: Option<std::path::PathBuf>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let args = Args::parse();

    let config = Config::load(args.config.as_deref())?;
    let secrets = Secrets::load()?;

    chavruta::server::serve(config, secrets).await?;

    Ok(())
}
