//! Command-line interface definitions.
//!
//! Each browse command mounts one view: it builds the view's filter from the
//! arguments, opens a session on the first page, issues one "load more" per
//! extra page requested, and renders what is visible.

pub mod browse;
pub mod config;
pub mod output;

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use rust_decimal::Decimal;

use crate::config::Config;
use crate::error::Result;

/// Browse prediction markets, trader leaderboards and leagues
#[derive(Parser, Debug)]
#[command(name = "predictbase")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Path to a TOML configuration file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// JSON output for scripting
    #[arg(long, global = true)]
    pub json: bool,

    /// Decrease output verbosity
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Browse prediction markets
    Markets(MarketsArgs),

    /// Browse the trader leaderboard
    Traders(TradersArgs),

    /// Browse prediction leagues
    Leagues(LeaguesArgs),

    /// Inspect configuration
    #[command(subcommand)]
    Config(ConfigCommand),
}

/// Subcommands for `predictbase config`
#[derive(Subcommand, Debug)]
pub enum ConfigCommand {
    /// Validate the configuration file
    Validate,
    /// Show the effective configuration
    Show,
}

/// How many pages of results to show.
#[derive(Args, Debug, Clone, Copy)]
pub struct PageArgs {
    /// Number of pages to show (each extra page is one "load more")
    #[arg(long, default_value_t = 1, value_parser = clap::value_parser!(u32).range(1..))]
    pub pages: u32,
}

/// Arguments for the `markets` subcommand.
#[derive(Args, Debug)]
pub struct MarketsArgs {
    /// Case-insensitive search over market titles
    #[arg(short, long, default_value = "")]
    pub search: String,

    /// Market status (trending, new, closing-soon, resolved) or "all"
    #[arg(long, default_value = "trending")]
    pub status: String,

    /// Exact category or "all"
    #[arg(long, default_value = "all")]
    pub category: String,

    /// Minimum traded volume; 0 disables the floor
    #[arg(long, default_value = "0")]
    pub min_volume: Decimal,

    #[command(flatten)]
    pub pages: PageArgs,
}

/// Arguments for the `traders` subcommand.
#[derive(Args, Debug)]
pub struct TradersArgs {
    /// Case-insensitive search over usernames
    #[arg(short, long, default_value = "")]
    pub search: String,

    /// Exact category or "all"
    #[arg(long, default_value = "all")]
    pub category: String,

    /// Leaderboard window (all-time, this-year, this-month, this-week)
    #[arg(long, default_value = "all-time")]
    pub timeframe: String,

    /// Risk score (Low, Medium, High) or "all"
    #[arg(long, default_value = "all")]
    pub risk: String,

    #[command(flatten)]
    pub pages: PageArgs,
}

/// Arguments for the `leagues` subcommand.
#[derive(Args, Debug)]
pub struct LeaguesArgs {
    /// Case-insensitive search over league names and descriptions
    #[arg(short, long, default_value = "")]
    pub search: String,

    /// Category, any case, or "all"
    #[arg(long, default_value = "all")]
    pub category: String,

    /// League status (open, active, closed) or "all"
    #[arg(long, default_value = "all")]
    pub status: String,

    #[command(flatten)]
    pub pages: PageArgs,
}

/// Load configuration, initialise logging, and dispatch the command.
pub fn run(cli: Cli) -> Result<()> {
    let config = match &cli.config {
        Some(path) => Config::load(path)?,
        None => Config::default(),
    };
    config.init_logging();

    match cli.command {
        Commands::Markets(args) => browse::markets(&config, &args),
        Commands::Traders(args) => browse::traders(&config, &args),
        Commands::Leagues(args) => browse::leagues(&config, &args),
        Commands::Config(ConfigCommand::Validate) => config::validate(cli.config.as_deref()),
        Commands::Config(ConfigCommand::Show) => config::show(&config, cli.config.as_deref()),
    }
}
