#![allow(missing_docs)]

//! Synthesis CLI — the thin transport over the pipeline engine.
//!
//! One-shot subcommands that run a pipeline and print the result as JSON
//! to stdout. Logs go to stderr so output stays pipeable.

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use tracing::info;
use url::Url;

use synthesis::agent::PersonaAgent;
use synthesis::condense::{ChunkSummarizer, Condenser};
use synthesis::config::{config_dir, load_config, Config};
use synthesis::document::{self, Document};
use synthesis::pipeline::{AnalysisPipeline, DebatePipeline};
use synthesis::providers::ollama::OllamaClient;
use synthesis::providers::ChatClient;

#[derive(Parser)]
#[command(name = "synthesis", about = "Multi-persona LLM debate and document analysis")]
struct Cli {
    /// Path to config.toml (default: ~/.synthesis/config.toml).
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Also write JSON logs to this directory (daily rotation).
    #[arg(long, global = true)]
    log_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Run the Optimist → Critic → Realist debate over a problem statement.
    Debate {
        /// The problem to debate.
        #[arg(long)]
        problem: String,
    },
    /// Run the three-angle analysis over a document.
    Analyze {
        /// Source URL to fetch.
        #[arg(long, conflicts_with = "file")]
        url: Option<Url>,
        /// Local file to read.
        #[arg(long)]
        file: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Keep the guard alive until exit so file logs flush.
    let _logging_guard = match &cli.log_dir {
        Some(dir) => Some(synthesis::logging::init_production(dir)?),
        None => {
            synthesis::logging::init_cli();
            None
        }
    };

    let config = resolve_config(cli.config.as_deref())?;

    let client = OllamaClient::new(&config.ollama).context("failed to build Ollama client")?;
    if !client.is_available().await {
        bail!(
            "Ollama server at {} is not reachable; start it or adjust [ollama].base_url",
            config.ollama.base_url
        );
    }
    info!(model = %client.model_id(), "Ollama client ready");

    let client: Arc<dyn ChatClient> = Arc::new(client);
    let agent = PersonaAgent::new(client);

    match cli.command {
        Command::Debate { problem } => {
            let problem = problem.trim().to_owned();
            if problem.is_empty() {
                bail!("--problem must not be empty");
            }
            let pipeline = DebatePipeline::new(agent);
            let result = pipeline.run(&problem).await?;
            println!("{}", serde_json::to_string_pretty(&result)?);
        }
        Command::Analyze { url, file } => {
            let doc = acquire_document(url, file, &config).await?;
            let summarizer =
                ChunkSummarizer::new(agent.clone(), config.condense.fallback_prefix_chars);
            let condenser = Condenser::new(summarizer, &config.condense);
            let pipeline = AnalysisPipeline::new(agent, condenser);
            let result = pipeline.run(&doc).await;
            println!("{}", serde_json::to_string_pretty(&result)?);
        }
    }

    Ok(())
}

fn resolve_config(path: Option<&std::path::Path>) -> Result<Config> {
    let path = match path {
        Some(p) => p.to_path_buf(),
        None => config_dir()?.join("config.toml"),
    };
    load_config(&path)
}

async fn acquire_document(
    url: Option<Url>,
    file: Option<PathBuf>,
    config: &Config,
) -> Result<Document> {
    match (url, file) {
        (Some(url), None) => {
            let fetcher = reqwest::Client::builder()
                .timeout(Duration::from_secs(config.ollama.request_timeout_secs))
                .build()
                .context("failed to build fetch client")?;
            let doc = document::fetch_url(&fetcher, &url).await?;
            Ok(doc)
        }
        (None, Some(file)) => {
            let bytes = std::fs::read(&file)
                .with_context(|| format!("failed to read {}", file.display()))?;
            let doc = document::from_bytes(&bytes)?;
            Ok(doc)
        }
        _ => bail!("analyze requires exactly one of --url or --file"),
    }
}
