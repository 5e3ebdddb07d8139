//! Schema migration command

use anyhow::{Context, Result};
use clap::{Args, Subcommand};

use sportech_server::db::{create_pool, migrations};

use crate::config::Config;

#[derive(Args, Debug)]
pub struct MigrateArgs {
    #[command(subcommand)]
    pub command: MigrateCommands,
}

#[derive(Subcommand, Debug)]
pub enum MigrateCommands {
    /// Apply all pending migrations
    Up,
    /// Revert applied migrations down to a target version
    Down {
        /// Version to revert to (0 drops every catalog table)
        #[arg(long, default_value_t = 0)]
        target: i64,
    },
}

pub async fn run_migrate(args: MigrateArgs, config: Config) -> Result<()> {
    let pool = create_pool(config.database_url()?)
        .await
        .context("Failed to create database pool")?;

    match args.command {
        MigrateCommands::Up => migrations::run(&pool)
            .await
            .context("Failed to apply migrations")?,
        MigrateCommands::Down { target } => migrations::revert(&pool, target)
            .await
            .with_context(|| format!("Failed to revert migrations to version {target}"))?,
    }

    pool.close().await;
    Ok(())
}
