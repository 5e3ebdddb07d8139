//! League accessor - alphabetical listing

use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use super::ReadRepo;
use crate::db::DbError;
use crate::models::{League, Record};

/// League repository
#[derive(Clone)]
pub struct LeagueRepo {
    pool: PgPool,
}

impl LeagueRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ReadRepo<League> for LeagueRepo {
    async fn list_all(&self) -> Result<Vec<League>, DbError> {
        sqlx::query_as::<_, League>(
            r#"
            SELECT
                id,
                name,
                number_of_teams,
                CONCAT('/countries/', country_id) AS country
            FROM leagues
            ORDER BY name
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| DbError::storage("error listing leagues", e))
    }

    async fn get_by_id(&self, id: Uuid) -> Result<League, DbError> {
        sqlx::query_as::<_, League>(
            r#"
            SELECT
                id,
                name,
                number_of_teams,
                CONCAT('/countries/', country_id) AS country
            FROM leagues
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| DbError::storage(format!("error getting league with id {id}"), e))?
        .ok_or_else(|| DbError::not_found(League::KIND, id))
    }
}
