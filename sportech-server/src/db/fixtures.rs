//! In-memory seed data accessor
//!
//! `FixtureRepo` serves a fixed set of records handed to it at construction.
//! It backs the optional team seed file and stands in for Postgres in tests.

use std::path::Path;

use async_trait::async_trait;
use serde::Deserialize;
use uuid::Uuid;

use super::{DbError, ReadRepo};
use crate::models::{Record, Team};

/// Accessor over a fixed, ordered record set
#[derive(Debug, Clone)]
pub struct FixtureRepo<T> {
    records: Vec<T>,
}

impl<T> FixtureRepo<T> {
    pub fn new(records: Vec<T>) -> Self {
        Self { records }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl<T> Default for FixtureRepo<T> {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

#[async_trait]
impl<T> ReadRepo<T> for FixtureRepo<T>
where
    T: Record + Clone + Send + Sync + 'static,
{
    async fn list_all(&self) -> Result<Vec<T>, DbError> {
        Ok(self.records.clone())
    }

    async fn get_by_id(&self, id: Uuid) -> Result<T, DbError> {
        self.records
            .iter()
            .find(|r| r.id() == id)
            .cloned()
            .ok_or_else(|| DbError::not_found(T::KIND, id))
    }
}

/// Error loading a seed file
#[derive(Debug, thiserror::Error)]
pub enum FixtureError {
    #[error("failed to read fixture file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid fixture file {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: toml::de::Error,
    },

    #[error("duplicate {resource} id {id} in fixture file")]
    DuplicateId { resource: &'static str, id: Uuid },
}

#[derive(Deserialize)]
struct TeamFixtures {
    #[serde(default)]
    teams: Vec<Team>,
}

impl FixtureRepo<Team> {
    /// Parse a `[[teams]]` TOML seed document.
    pub fn teams_from_toml(content: &str, path: &str) -> Result<Self, FixtureError> {
        let parsed: TeamFixtures = toml::from_str(content).map_err(|source| FixtureError::Parse {
            path: path.to_owned(),
            source,
        })?;

        let mut seen = std::collections::HashSet::new();
        if let Some(dup) = parsed.teams.iter().find(|t| !seen.insert(t.id)) {
            return Err(FixtureError::DuplicateId {
                resource: Team::KIND,
                id: dup.id,
            });
        }

        Ok(Self::new(parsed.teams))
    }

    /// Load team seed data from a TOML file.
    pub fn load_teams(path: &Path) -> Result<Self, FixtureError> {
        let shown = path.display().to_string();
        let content = std::fs::read_to_string(path).map_err(|source| FixtureError::Io {
            path: shown.clone(),
            source,
        })?;

        let repo = Self::teams_from_toml(&content, &shown)?;
        tracing::info!(path = %shown, teams = repo.len(), "Loaded team fixtures");
        Ok(repo)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const ARSENAL: &str = "7f1c2b8e-7d0e-4b7a-9a57-0d4d1f0c8a01";
    const CHELSEA: &str = "2b6d3c1a-5e4f-4c3b-8a9d-1e2f3a4b5c6d";

    fn seed() -> String {
        format!(
            r#"
            [[teams]]
            id = "{ARSENAL}"
            fullName = "Arsenal Football Club"
            mediumName = "Arsenal"
            acronym = "AFC"
            nickname = "The Gunners"
            yearFounded = 1886
            city = "London"
            country = "/countries/eng"
            stadium = "/stadiums/emirates"
            league = "/leagues/premier-league"

            [[teams]]
            id = "{CHELSEA}"
            fullName = "Chelsea Football Club"
            mediumName = "Chelsea"
            acronym = "CFC"
            yearFounded = 1905
            country = "/countries/eng"
            stadium = "/stadiums/stamford-bridge"
            league = "/leagues/premier-league"
            "#
        )
    }

    #[tokio::test]
    async fn serves_seed_in_file_order() {
        let repo = FixtureRepo::<Team>::teams_from_toml(&seed(), "inline").unwrap();
        let teams = repo.list_all().await.unwrap();

        assert_eq!(teams.len(), 2);
        assert_eq!(teams[0].medium_name, "Arsenal");
        assert_eq!(teams[1].medium_name, "Chelsea");
        assert_eq!(teams[1].nickname, None);
        assert_eq!(teams[1].city, None);
    }

    #[tokio::test]
    async fn get_by_id_hits_and_misses() {
        let repo = FixtureRepo::<Team>::teams_from_toml(&seed(), "inline").unwrap();
        let chelsea = repo.get_by_id(CHELSEA.parse().unwrap()).await.unwrap();
        assert_eq!(chelsea.acronym, "CFC");

        let err = repo.get_by_id(Uuid::new_v4()).await.unwrap_err();
        assert!(matches!(err, DbError::NotFound { resource: "team", .. }));
    }

    #[test]
    fn rejects_duplicate_ids() {
        let doubled = format!("{}\n{}", seed(), seed());
        let err = FixtureRepo::<Team>::teams_from_toml(&doubled, "inline").unwrap_err();
        assert!(matches!(err, FixtureError::DuplicateId { .. }));
    }

    #[test]
    fn load_teams_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(seed().as_bytes()).unwrap();

        let repo = FixtureRepo::<Team>::load_teams(file.path()).unwrap();
        assert_eq!(repo.len(), 2);
    }

    #[test]
    fn missing_file_is_io_error() {
        let err = FixtureRepo::<Team>::load_teams(Path::new("/nonexistent/teams.toml")).unwrap_err();
        assert!(matches!(err, FixtureError::Io { .. }));
    }

    #[test]
    fn shipped_seed_file_parses() {
        let content = include_str!("../../../config/teams.toml");
        let repo = FixtureRepo::<Team>::teams_from_toml(content, "config/teams.toml").unwrap();
        assert_eq!(repo.len(), 6);
    }
}
