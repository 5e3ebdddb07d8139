//! Service configuration
//!
//! Read once at start-up from `<config-dir>/config.toml`. Any key can be
//! overridden from the environment by upper-casing its dotted path and
//! replacing `.` and `-` with `_` (`server.http-address` becomes
//! `SERVER_HTTP_ADDRESS`).

use std::net::SocketAddr;
use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{anyhow, bail, Context, Result};
use serde::Deserialize;
use sportech_server::db::DEFAULT_MAX_CONNECTIONS;

pub const CONFIG_FILE: &str = "config.toml";

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Config {
    #[serde(default = "default_environment")]
    pub environment: String,
    #[serde(default)]
    pub server: ServerSection,
    #[serde(default)]
    pub database: DatabaseSection,
    #[serde(default)]
    pub teams: TeamsSection,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct ServerSection {
    #[serde(default = "default_http_address")]
    pub http_address: SocketAddr,
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct DatabaseSection {
    pub url: Option<String>,
    pub max_connections: Option<u32>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct TeamsSection {
    /// Team seed file; relative paths resolve against the config directory
    pub fixture: Option<PathBuf>,
}

fn default_environment() -> String {
    "development".to_string()
}

fn default_http_address() -> SocketAddr {
    SocketAddr::from(([127, 0, 0, 1], 8080))
}

fn default_request_timeout_secs() -> u64 {
    30
}

impl Default for ServerSection {
    fn default() -> Self {
        Self {
            http_address: default_http_address(),
            request_timeout_secs: default_request_timeout_secs(),
        }
    }
}

impl Config {
    /// Load `config.toml` from `dir` and apply environment overrides
    pub fn load(dir: &Path) -> Result<Self> {
        Self::load_with(dir, |key| std::env::var(key).ok())
    }

    /// Load from `dir`, taking overrides from `lookup`
    pub fn load_with<F>(dir: &Path, lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let path = dir.join(CONFIG_FILE);
        let content = std::fs::read_to_string(&path).with_context(|| {
            format!(
                "Failed to read {}. Create it or point --config-dir at the directory holding it",
                path.display()
            )
        })?;

        let mut config = Self::from_toml(&content)
            .with_context(|| format!("Invalid config file {}", path.display()))?;
        config.apply_env(lookup)?;
        config.resolve_paths(dir);

        Ok(config)
    }

    /// Anchor a relative `teams.fixture` at the config directory
    fn resolve_paths(&mut self, dir: &Path) {
        if let Some(fixture) = &self.teams.fixture {
            if fixture.is_relative() {
                self.teams.fixture = Some(dir.join(fixture));
            }
        }
    }

    pub fn from_toml(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| anyhow!(e))
    }

    /// Apply overrides from `lookup`
    pub fn apply_env<F>(&mut self, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(v) = lookup("ENVIRONMENT") {
            self.environment = v;
        }
        if let Some(v) = lookup("SERVER_HTTP_ADDRESS") {
            self.server.http_address = v
                .parse()
                .with_context(|| format!("SERVER_HTTP_ADDRESS is not a socket address: {v}"))?;
        }
        if let Some(v) = lookup("SERVER_REQUEST_TIMEOUT_SECS") {
            self.server.request_timeout_secs = v
                .parse()
                .with_context(|| format!("SERVER_REQUEST_TIMEOUT_SECS is not a number: {v}"))?;
        }
        if let Some(v) = lookup("DATABASE_URL") {
            self.database.url = Some(v);
        }
        if let Some(v) = lookup("DATABASE_MAX_CONNECTIONS") {
            let max = v
                .parse()
                .with_context(|| format!("DATABASE_MAX_CONNECTIONS is not a number: {v}"))?;
            self.database.max_connections = Some(max);
        }
        if let Some(v) = lookup("TEAMS_FIXTURE") {
            self.teams.fixture = Some(PathBuf::from(v));
        }
        Ok(())
    }

    pub fn database_url(&self) -> Result<&str> {
        match self.database.url.as_deref() {
            Some(url) if !url.is_empty() => Ok(url),
            _ => bail!("database.url not set. Set it in {CONFIG_FILE} or via DATABASE_URL"),
        }
    }

    pub fn max_connections(&self) -> u32 {
        self.database
            .max_connections
            .unwrap_or(DEFAULT_MAX_CONNECTIONS)
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.server.request_timeout_secs)
    }
}
