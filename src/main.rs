// src/main.rs

//! sheetfolio: Portfolio page populator CLI
//!
//! Fetches the published content feeds through the snapshot cache, renders the
//! page regions, and writes each region to a fragment file for the host page
//! to include.

use std::path::Path;
use std::sync::Arc;

use clap::{Parser, Subcommand};

use sheetfolio::error::Result;
use sheetfolio::models::{Config, Language};
use sheetfolio::pipeline::run_populate;
use sheetfolio::render::Page;
use sheetfolio::services::{ContentCache, CsvDecoder, SourceFetcher};
use sheetfolio::storage::{ContentKey, LocalStore, SnapshotStore};

#[derive(Parser, Debug)]
#[command(name = "sheetfolio", version, about = "Portfolio page populator")]

/// CLI Arguments
struct Cli {
    #[arg(short, long, default_value = "data/config.toml")]
    config: String,

    #[arg(short, long, global = true)]
    quiet: bool,

    #[command(subcommand)]
    command: Command,
}

/// CLI Commands
#[derive(Subcommand, Debug)]
enum Command {
    /// Fetch feeds (cached) and write rendered region fragments
    Populate {
        /// Output directory for region fragment files
        #[arg(short, long, default_value = "public/fragments")]
        out: String,

        /// Persist a language selection before rendering ("es" or "en")
        #[arg(long)]
        lang: Option<String>,
    },
    /// Force-refetch all feeds, ignoring snapshot freshness
    Refresh,
    /// Validate the configuration
    Validate,
}

fn build_cache(config: &Config) -> Result<ContentCache<LocalStore>> {
    let store = LocalStore::new(&config.cache.dir);
    let fetcher = SourceFetcher::new(&config.fetcher, Arc::new(CsvDecoder))?;
    Ok(ContentCache::new(
        store,
        Arc::new(fetcher),
        config.cache.max_age_secs,
    ))
}

async fn populate(config: &Config, out: &str, lang: Option<String>) -> Result<()> {
    let cache = build_cache(config)?;

    if let Some(code) = lang {
        cache
            .store()
            .write_language(Language::from_code(&code))
            .await?;
    }

    let mut page = Page::standard();
    run_populate(config, &cache, &mut page, None).await?;

    let out_dir = Path::new(out);
    tokio::fs::create_dir_all(out_dir).await?;

    let mut written = 0;
    for id in page.region_ids() {
        if let Some(html) = page.html(id) {
            tokio::fs::write(out_dir.join(format!("{id}.html")), html).await?;
            written += 1;
        }
    }

    log::info!("Wrote {} region fragment(s) to {:?}", written, out_dir);
    Ok(())
}

async fn refresh(config: &Config) -> Result<()> {
    let cache = build_cache(config)?;
    let sources = &config.sources;

    let (books, talks, news) = tokio::join!(
        cache.refresh(ContentKey::Books, &sources.books_url),
        cache.refresh(ContentKey::Talks, &sources.talks_url),
        cache.refresh(ContentKey::News, &sources.news_url),
    );

    log::info!(
        "Refreshed feeds: {} book(s), {} talk(s), {} news item(s)",
        books.len(),
        talks.len(),
        news.len()
    );
    Ok(())
}

fn validate(config: &Config) -> Result<()> {
    config.validate()?;
    log::info!("Configuration OK");
    log::info!("  books feed: {}", config.sources.books_url);
    log::info!("  talks feed: {}", config.sources.talks_url);
    log::info!("  news feed:  {}", config.sources.news_url);
    Ok(())
}

/// Main entry point
#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.quiet { "warn" } else { "info" };
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(default_level),
    )
    .init();

    let config = Config::load_or_default(&cli.config);

    match cli.command {
        Command::Populate { out, lang } => populate(&config, &out, lang).await?,
        Command::Refresh => refresh(&config).await?,
        Command::Validate => validate(&config)?,
    }

    Ok(())
}
