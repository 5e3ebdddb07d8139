//! sportech CLI - read-only football catalog service
//!
//! - `serve`: run the HTTP API
//! - `migrate`: apply or revert the catalog schema

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

mod commands;
mod config;
mod tracing_setup;

use config::Config;
use tracing_setup::{init_tracing, TracingConfig};

#[derive(Parser, Debug)]
#[command(
    name = "sportech",
    author,
    version,
    about = "Read-only football catalog API: leagues, teams, stadiums, players and managers"
)]
struct Cli {
    /// Directory holding config.toml
    #[arg(long, global = true, default_value = "./config", env = "SPORTECH_CONFIG_DIR")]
    config_dir: PathBuf,

    /// Enable debug logging
    #[arg(long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run the HTTP API server
    Serve(commands::ServeArgs),
    /// Apply or revert schema migrations
    Migrate(commands::MigrateArgs),
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();
    init_tracing(&TracingConfig { debug: cli.debug }).ok();

    let config = Config::load(&cli.config_dir).context("Failed to load configuration")?;

    match cli.command {
        Commands::Serve(args) => commands::run_serve(args, config).await?,
        Commands::Migrate(args) => commands::run_migrate(args, config).await?,
    }
    Ok(())
}
