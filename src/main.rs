//! Article metrics binary entrypoint.
//! Fetches articles, analyzes them, writes reports, or serves the HTTP API.

use std::net::SocketAddr;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use article_metrics::api::{create_router, AppState};
use article_metrics::config::{settings::ENV_CONFIG_PATH, Settings};
use article_metrics::engine::default_workers;
use article_metrics::lexicon::Lexicons;
use article_metrics::pipeline;
use article_metrics::telemetry::Telemetry;

#[derive(Parser, Debug)]
#[command(name = "article-metrics", version, about)]
struct Cli {
    /// Path to the TOML config (defaults to config/analyzer.toml when present).
    #[arg(long, global = true, env = ENV_CONFIG_PATH)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Download every URL in the input list into the articles directory.
    Fetch,
    /// Analyze the articles directory and write the report.
    Analyze {
        /// Override the report path (`.json` selects JSON output).
        #[arg(long)]
        output: Option<PathBuf>,
    },
    /// Fetch, analyze and report in one go.
    Run {
        #[arg(long)]
        output: Option<PathBuf>,
    },
    /// Serve the analysis API over HTTP.
    Serve {
        #[arg(long, default_value = "127.0.0.1:8080")]
        addr: SocketAddr,
    },
}

/// Logs go to stderr. `RUST_LOG` sets the filter; `LOG_FORMAT=json` switches to JSON lines.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("article_metrics=info,warn"));

    let json = std::env::var("LOG_FORMAT")
        .map(|v| v.eq_ignore_ascii_case("json"))
        .unwrap_or(false);

    let registry = tracing_subscriber::registry().with(filter);
    if json {
        registry
            .with(fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        registry
            .with(fmt::layer().compact().with_writer(std::io::stderr))
            .init();
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env in local/dev; no-op when absent.
    let _ = dotenvy::dotenv();
    init_tracing();

    let cli = Cli::parse();
    let mut settings = Settings::load(cli.config.as_deref())?;

    match cli.command {
        Command::Fetch => {
            let collected = pipeline::fetch_articles(&settings).await?;
            println!(
                "Saved {} article(s) to {} ({} failed)",
                collected.documents.len(),
                settings.paths.articles_dir.display(),
                collected.failures.len()
            );
        }
        Command::Analyze { output } => {
            if let Some(o) = output {
                settings.paths.output = o;
            }
            let out = pipeline::analyze_and_report(&settings).await?;
            println!(
                "Analyzed {} document(s), {} failed. Report: {}",
                out.documents.len(),
                out.failed.len(),
                settings.paths.output.display()
            );
        }
        Command::Run { output } => {
            if let Some(o) = output {
                settings.paths.output = o;
            }
            let out = pipeline::run(&settings).await?;
            println!(
                "Analysis complete: {} document(s), {} failed. Report: {}",
                out.documents.len(),
                out.failed.len(),
                settings.paths.output.display()
            );
        }
        Command::Serve { addr } => serve(&settings, addr).await?,
    }

    Ok(())
}

async fn serve(settings: &Settings, addr: SocketAddr) -> Result<()> {
    let workers = match settings.run.workers {
        0 => default_workers(),
        n => n,
    };
    let telemetry = Telemetry::install(workers)?;
    let lexicons = Lexicons::load(&settings.lexicon_paths())?;

    let router = create_router(AppState::new(lexicons, workers)).merge(telemetry.routes());
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("binding {addr}"))?;
    tracing::info!(%addr, workers, "serving analysis API");
    axum::serve(listener, router).await.context("http server")?;
    Ok(())
}
