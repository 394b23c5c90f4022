//! Imposter - terminal frontend
//!
//! Deals rounds and plays them on one shared terminal.

#![warn(missing_docs)]

mod cli;
mod terminal;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Command, RoundArgs};
use imposter_game::{AppConfig, Category, RoundController, SessionConfiguration, WordCatalog};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use strum::IntoEnumIterator;
use tracing::{debug, info, instrument};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = AppConfig::load_or_default(&cli.config)?;
    let catalog = config.catalog();

    match cli.command {
        Command::Categories => list_categories(&catalog),
        Command::Deal(args) => deal(&config, catalog, &args),
        Command::Play(args) => play(&config, catalog, &args).await,
    }
}

/// Print every catalog category with its word count
fn list_categories(catalog: &WordCatalog) -> Result<()> {
    for category in Category::iter().filter(|c| !c.is_custom()) {
        println!("{:<24} {}", category.to_string(), catalog.count_in(category));
    }
    println!("{:<24} (your own topics)", Category::Custom.to_string());
    Ok(())
}

/// Deal one round and print its transport payload
#[instrument(skip_all)]
fn deal(config: &AppConfig, catalog: WordCatalog, args: &RoundArgs) -> Result<()> {
    let session_config = session_config(config, args)?;
    let mut controller = RoundController::new(catalog, rng(args.seed));
    controller.start_round(&session_config)?;
    let session = controller
        .session()
        .context("Round was dealt but holds no session")?;
    println!("{}", session.to_transport()?);
    Ok(())
}

/// Play rounds interactively
#[instrument(skip_all)]
async fn play(config: &AppConfig, catalog: WordCatalog, args: &RoundArgs) -> Result<()> {
    let session_config = session_config(config, args)?;
    info!(players = session_config.players().len(), "Starting game");
    let mut controller = RoundController::new(catalog, rng(args.seed));
    terminal::play(&mut controller, &session_config).await
}

/// Merge command-line round arguments over the config file defaults
#[instrument(skip_all)]
fn session_config(config: &AppConfig, args: &RoundArgs) -> Result<SessionConfiguration> {
    let discussion_ms = match &args.discussion {
        Some(clock) => imposter_game::parse_clock(clock)?,
        None => config.discussion_ms()?,
    };
    debug!(discussion_ms, clue = args.clue || *config.clue(), "Round settings");
    let session_config = SessionConfiguration::new(
        args.categories.iter().copied().collect(),
        args.topics.clone(),
        args.players.clone(),
        args.clue || *config.clue(),
        discussion_ms,
    )?;
    Ok(session_config)
}

fn rng(seed: Option<u64>) -> ChaCha8Rng {
    match seed {
        Some(seed) => ChaCha8Rng::seed_from_u64(seed),
        None => ChaCha8Rng::seed_from_u64(rand::random()),
    }
}
