use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use super::ReadRepo;
use crate::db::DbError;
use crate::models::{Record, Stadium};

/// Stadium repository, listed alphabetically
#[derive(Clone)]
pub struct StadiumRepo {
    pool: PgPool,
}

impl StadiumRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ReadRepo<Stadium> for StadiumRepo {
    async fn list_all(&self) -> Result<Vec<Stadium>, DbError> {
        sqlx::query_as::<_, Stadium>(
            r#"
            SELECT
                id,
                name,
                capacity,
                city,
                CONCAT('/countries/', country_id) AS country
            FROM stadiums
            ORDER BY name ASC
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| DbError::storage("error listing stadiums", e))
    }

    async fn get_by_id(&self, id: Uuid) -> Result<Stadium, DbError> {
        sqlx::query_as::<_, Stadium>(
            r#"
            SELECT
                id,
                name,
                capacity,
                city,
                CONCAT('/countries/', country_id) AS country
            FROM stadiums
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| DbError::storage(format!("error getting stadium with id {id}"), e))?
        .ok_or_else(|| DbError::not_found(Stadium::KIND, id))
    }
}
