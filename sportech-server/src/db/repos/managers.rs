//! Manager slot accessor (`team_managers`)

use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use super::ReadRepo;
use crate::db::DbError;
use crate::models::{ManagerSlot, Record};

#[derive(Clone)]
pub struct ManagerRepo {
    pool: PgPool,
}

impl ManagerRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ReadRepo<ManagerSlot> for ManagerRepo {
    async fn list_all(&self) -> Result<Vec<ManagerSlot>, DbError> {
        sqlx::query_as::<_, ManagerSlot>(
            r#"
            SELECT
                m.id,
                m.person_id,
                CONCAT('/teams/', m.team_id) AS team,
                m.started,
                m.ended
            FROM team_managers m
            ORDER BY m.created_at, m.id
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| DbError::storage("error listing managers", e))
    }

    async fn get_by_id(&self, id: Uuid) -> Result<ManagerSlot, DbError> {
        sqlx::query_as::<_, ManagerSlot>(
            r#"
            SELECT
                m.id,
                m.person_id,
                CONCAT('/teams/', m.team_id) AS team,
                m.started,
                m.ended
            FROM team_managers m
            WHERE m.id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| DbError::storage(format!("error getting manager with id {id}"), e))?
        .ok_or_else(|| DbError::not_found(ManagerSlot::KIND, id))
    }
}
