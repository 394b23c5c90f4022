//! Command-line interface for imposter_game.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use imposter_game::Category;

/// Imposter - pass-the-device party game
#[derive(Parser, Debug)]
#[command(name = "imposter_game")]
#[command(about = "Find the imposter: a pass-the-device party game", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the TOML config file
    #[arg(long, global = true, default_value = "imposter.toml")]
    pub config: PathBuf,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// List categories and how many words each holds
    Categories,

    /// Deal one round and print its session payload as JSON
    Deal(RoundArgs),

    /// Play rounds interactively in this terminal
    Play(RoundArgs),
}

/// Round setup shared by `deal` and `play`.
#[derive(Args, Debug, Clone)]
pub struct RoundArgs {
    /// Player name (repeat for each player, in reveal order)
    #[arg(short, long = "player", required = true)]
    pub players: Vec<String>,

    /// Category to draw words from (repeatable; "custom" uses --topic)
    #[arg(short, long = "category", default_value = "places")]
    pub categories: Vec<Category>,

    /// Custom topic (repeatable; requires --category custom)
    #[arg(short, long = "topic")]
    pub topics: Vec<String>,

    /// Give the imposter a clue (overrides the config file)
    #[arg(long)]
    pub clue: bool,

    /// Discussion length as m:ss (overrides the config file)
    #[arg(short, long)]
    pub discussion: Option<String>,

    /// Seed for reproducible deals
    #[arg(long)]
    pub seed: Option<u64>,
}
