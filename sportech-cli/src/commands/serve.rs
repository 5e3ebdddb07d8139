//! HTTP server command
//!
//! Connects to Postgres, brings the schema up to date and serves the catalog
//! until Ctrl+C or SIGTERM.

use std::net::SocketAddr;

use anyhow::{Context, Result};
use clap::Parser;

use sportech_server::db::{create_pool_with_options, migrations, FixtureRepo};
use sportech_server::models::Team;
use sportech_server::{run_server, Accessors, AppState, ServerConfig};

use crate::config::Config;

#[derive(Parser, Debug)]
pub struct ServeArgs {
    /// Address to bind to (overrides server.http-address)
    #[arg(long, short = 'b')]
    pub bind: Option<SocketAddr>,

    /// Do not apply pending migrations before serving
    #[arg(long)]
    pub skip_migrations: bool,
}

pub async fn run_serve(args: ServeArgs, config: Config) -> Result<()> {
    let database_url = config.database_url()?;
    let pool = create_pool_with_options(database_url, config.max_connections())
        .await
        .context("Failed to create database pool")?;

    if args.skip_migrations {
        tracing::warn!("Skipping migrations, schema may be out of date");
    } else {
        migrations::run(&pool)
            .await
            .context("Failed to apply migrations")?;
    }

    let mut accessors = Accessors::postgres(pool);
    if let Some(path) = &config.teams.fixture {
        let teams = FixtureRepo::<Team>::load_teams(path)
            .with_context(|| format!("Failed to load team fixtures from {}", path.display()))?;
        accessors = accessors.with_team_fixtures(teams);
    }

    let server_config = ServerConfig {
        bind_addr: args.bind.unwrap_or(config.server.http_address),
        request_timeout: config.request_timeout(),
    };

    tracing::info!(
        environment = %config.environment,
        address = %server_config.bind_addr,
        "Starting sportech server"
    );

    run_server(AppState::new(accessors), server_config)
        .await
        .context("Server error")?;

    Ok(())
}
