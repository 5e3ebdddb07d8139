//! Player slot accessor (`team_players`)
//!
//! Returns slot records only. Identity fields are joined in by
//! `services::CompositionService`, not here.

use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use super::ReadRepo;
use crate::db::DbError;
use crate::models::{PlayerSlot, Record};

#[derive(Clone)]
pub struct PlayerRepo {
    pool: PgPool,
}

impl PlayerRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ReadRepo<PlayerSlot> for PlayerRepo {
    /// Slots in insertion order.
    async fn list_all(&self) -> Result<Vec<PlayerSlot>, DbError> {
        sqlx::query_as::<_, PlayerSlot>(
            r#"
            SELECT
                id,
                person_id,
                CONCAT('/teams/', team_id) AS team,
                squad_number,
                general_position,
                specific_position,
                started,
                ended
            FROM team_players
            ORDER BY created_at, id
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| DbError::storage("error listing players", e))
    }

    async fn get_by_id(&self, id: Uuid) -> Result<PlayerSlot, DbError> {
        sqlx::query_as::<_, PlayerSlot>(
            r#"
            SELECT
                id,
                person_id,
                CONCAT('/teams/', team_id) AS team,
                squad_number,
                general_position,
                specific_position,
                started,
                ended
            FROM team_players
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| DbError::storage(format!("error getting player with id {id}"), e))?
        .ok_or_else(|| DbError::not_found(PlayerSlot::KIND, id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{DateTime, TimeZone, Utc};

    use crate::db::{create_pool, migrations};

    async fn create_player(
        pool: &PgPool,
        team: Uuid,
        squad_number: i32,
        general: &str,
        specific: Option<&str>,
        started: DateTime<Utc>,
    ) -> PlayerSlot {
        sqlx::query_as::<_, PlayerSlot>(
            r#"
            INSERT INTO team_players (person_id, team_id, squad_number, general_position, specific_position, started)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING id, person_id, CONCAT('/teams/', team_id) AS team, squad_number,
                      general_position, specific_position, started, ended
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(team)
        .bind(squad_number)
        .bind(general)
        .bind(specific)
        .bind(started)
        .fetch_one(pool)
        .await
        .unwrap()
    }

    #[tokio::test]
    #[ignore = "requires database"]
    async fn list_players_in_insertion_order() {
        let url = std::env::var("DATABASE_URL").expect("DATABASE_URL required");
        let pool = create_pool(&url).await.unwrap();
        migrations::run(&pool).await.unwrap();
        sqlx::query("TRUNCATE team_players").execute(&pool).await.unwrap();

        let team = Uuid::new_v4();
        let salah = create_player(&pool, team, 11, "FWD", Some("RW"), Utc.with_ymd_and_hms(2017, 7, 1, 0, 0, 0).unwrap()).await;
        let alisson = create_player(&pool, team, 1, "GK", Some("GK"), Utc.with_ymd_and_hms(2018, 7, 19, 0, 0, 0).unwrap()).await;

        let repo = PlayerRepo::new(pool);
        let slots = repo.list_all().await.unwrap();
        assert_eq!(slots, vec![salah.clone(), alisson]);

        let fetched = repo.get_by_id(salah.id).await.unwrap();
        assert_eq!(fetched, salah);
        assert_eq!(fetched.team, format!("/teams/{team}"));
    }
}
