//! Read accessors for catalog entities
//!
//! Each accessor follows these patterns:
//! - `list_all` is a single query; ordering is defined per entity
//! - `get_by_id` uses `fetch_optional` so zero rows becomes `DbError::NotFound`
//! - Query faults are wrapped with the attempted operation and id

pub mod leagues;
pub mod managers;
pub mod persons;
pub mod players;
pub mod stadiums;
pub mod teams;

use async_trait::async_trait;
use uuid::Uuid;

use super::DbError;

pub use leagues::LeagueRepo;
pub use managers::ManagerRepo;
pub use persons::PersonRepo;
pub use players::PlayerRepo;
pub use stadiums::StadiumRepo;
pub use teams::TeamRepo;

/// Read-only accessor capability set.
///
/// Services depend on this trait only, so every entity's storage backend can
/// be swapped independently (Postgres, seed fixtures, test doubles).
#[async_trait]
pub trait ReadRepo<T>: Send + Sync {
    async fn list_all(&self) -> Result<Vec<T>, DbError>;

    async fn get_by_id(&self, id: Uuid) -> Result<T, DbError>;
}
