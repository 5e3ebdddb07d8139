use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use super::ReadRepo;
use crate::db::DbError;
use crate::models::{Record, Team};

/// Team repository (storage order)
#[derive(Clone)]
pub struct TeamRepo {
    pool: PgPool,
}

impl TeamRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ReadRepo<Team> for TeamRepo {
    async fn list_all(&self) -> Result<Vec<Team>, DbError> {
        sqlx::query_as::<_, Team>(
            r#"
            SELECT
                id,
                full_name,
                medium_name,
                acronym,
                nickname,
                year_founded,
                city,
                CONCAT('/countries/', country_id) AS country,
                CONCAT('/stadiums/', stadium_id) AS stadium,
                CONCAT('/leagues/', league_id) AS league
            FROM teams
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| DbError::storage("error listing teams", e))
    }

    async fn get_by_id(&self, id: Uuid) -> Result<Team, DbError> {
        sqlx::query_as::<_, Team>(
            r#"
            SELECT
                id,
                full_name,
                medium_name,
                acronym,
                nickname,
                year_founded,
                city,
                CONCAT('/countries/', country_id) AS country,
                CONCAT('/stadiums/', stadium_id) AS stadium,
                CONCAT('/leagues/', league_id) AS league
            FROM teams
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| DbError::storage(format!("error getting team with id {id}"), e))?
        .ok_or_else(|| DbError::not_found(Team::KIND, id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::{create_pool, migrations};

    #[tokio::test]
    #[ignore = "requires database"]
    async fn get_team_renders_reference_paths() {
        let url = std::env::var("DATABASE_URL").expect("DATABASE_URL required");
        let pool = create_pool(&url).await.unwrap();
        migrations::run(&pool).await.unwrap();
        sqlx::query("TRUNCATE teams").execute(&pool).await.unwrap();

        let (country, stadium, league) = (Uuid::new_v4(), Uuid::new_v4(), Uuid::new_v4());
        let row: (Uuid,) = sqlx::query_as(
            r#"
            INSERT INTO teams (full_name, medium_name, acronym, nickname, year_founded, city, country_id, stadium_id, league_id)
            VALUES ($1, $2, $3, NULL, $4, $5, $6, $7, $8)
            RETURNING id
            "#,
        )
        .bind("Liverpool Football Club")
        .bind("Liverpool")
        .bind("LFC")
        .bind(1892)
        .bind("Liverpool")
        .bind(country)
        .bind(stadium)
        .bind(league)
        .fetch_one(&pool)
        .await
        .unwrap();

        let team = TeamRepo::new(pool).get_by_id(row.0).await.unwrap();
        assert_eq!(team.acronym, "LFC");
        assert_eq!(team.nickname, None);
        assert_eq!(team.city.as_deref(), Some("Liverpool"));
        assert_eq!(team.stadium, format!("/stadiums/{stadium}"));
        assert_eq!(team.league, format!("/leagues/{league}"));
    }
}
