use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::sync::Arc;
use std::time::Instant;

mod application;
mod config;
mod infrastructure;
mod interfaces;

use application::query::QueryEngine;
use application::roots::RootResolver;
use application::tokenizer::{Tokenizer, load_blacklist};
use config::AppConfig;
use infrastructure::corpus::GithubCorpus;
use infrastructure::http::{HttpFetcher, PageFetcher};
use infrastructure::logging;
use interfaces::console::ConsoleUI;

#[derive(Parser)]
#[command(
    name = "readme-roots",
    about = "Word root frequencies over course README files"
)]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Occurrences of a word among the words sharing its root
    Count { word: String },
    /// The N roots with the most words
    Top { n: usize },
    /// `count` with all root lookups issued concurrently
    CountAsync { word: String },
    /// `top` with all root lookups issued concurrently
    TopAsync { n: usize },
}

async fn build_engine(config: &AppConfig) -> Result<QueryEngine> {
    let token = config.load_key().await?;
    let blacklist = load_blacklist(&config.blacklist_file)
        .await
        .context("failed to load blacklist")?;

    let fetcher: Arc<dyn PageFetcher> =
        Arc::new(HttpFetcher::new(config.http_timeout).context("failed to create HTTP client")?);
    let corpus = GithubCorpus::new(
        Arc::clone(&fetcher),
        config.github_org.clone(),
        token,
        config.task_count,
    );

    Ok(QueryEngine::new(
        Arc::new(corpus),
        Tokenizer::new(blacklist),
        RootResolver::new(fetcher),
    )
    .with_services(config.sequential_service, config.concurrent_service)
    .with_concurrency(config.lookup_concurrency))
}

async fn run(args: Args) -> Result<()> {
    let config = AppConfig::from_env()?;
    log::info!(
        "config org={} tasks={} sequential={} concurrent={} concurrency={:?}",
        config.github_org,
        config.task_count,
        config.sequential_service,
        config.concurrent_service,
        config.lookup_concurrency
    );
    let engine = build_engine(&config).await?;

    let t0 = Instant::now();
    match args.command {
        Command::Count { word } => {
            let count = engine.count(&word).await?;
            ConsoleUI::print_header("count");
            ConsoleUI::print_count(&word, count);
        }
        Command::Top { n } => {
            let entries = engine.top(n).await?;
            ConsoleUI::print_header(&format!("top {}", n));
            ConsoleUI::print_top(&entries);
        }
        Command::CountAsync { word } => {
            let count = engine.count_async(&word).await?;
            ConsoleUI::print_header("count (async)");
            ConsoleUI::print_count(&word, count);
        }
        Command::TopAsync { n } => {
            let entries = engine.top_async(n).await?;
            ConsoleUI::print_header(&format!("top {} (async)", n));
            ConsoleUI::print_top(&entries);
        }
    }
    ConsoleUI::print_elapsed(t0.elapsed());
    log::info!("query.done perf.query_ms={}", t0.elapsed().as_millis());
    Ok(())
}

#[tokio::main]
async fn main() {
    dotenv::dotenv().ok();
    logging::init();

    let args = Args::parse();
    if let Err(e) = run(args).await {
        log::error!("{:#}", e);
        ConsoleUI::print_error(&format!("{:#}", e));
        std::process::exit(1);
    }
}
