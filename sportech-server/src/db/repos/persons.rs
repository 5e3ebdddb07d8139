//! Person accessor - the single source of identity data

use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use super::ReadRepo;
use crate::db::DbError;
use crate::models::{Person, Record};

#[derive(Clone)]
pub struct PersonRepo {
    pool: PgPool,
}

impl PersonRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ReadRepo<Person> for PersonRepo {
    async fn list_all(&self) -> Result<Vec<Person>, DbError> {
        sqlx::query_as::<_, Person>(
            r#"
            SELECT id, first_name, middle_names, last_name, date_of_birth, nationality
            FROM persons
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| DbError::storage("error listing persons", e))
    }

    async fn get_by_id(&self, id: Uuid) -> Result<Person, DbError> {
        sqlx::query_as::<_, Person>(
            r#"
            SELECT id, first_name, middle_names, last_name, date_of_birth, nationality
            FROM persons
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| DbError::storage(format!("error getting person with id {id}"), e))?
        .ok_or_else(|| DbError::not_found(Person::KIND, id))
    }
}
