//! Service layer
//!
//! Every entity kind is served through `CatalogService`, whether it is a
//! straight passthrough to its accessor or composed from two accessors.

pub mod composition;
pub mod logging;
pub mod passthrough;

use async_trait::async_trait;
use uuid::Uuid;

use crate::db::DbError;

pub use composition::CompositionService;
pub use logging::Logged;
pub use passthrough::PassthroughService;

/// Uniform read contract for one entity kind.
#[async_trait]
pub trait CatalogService<T>: Send + Sync {
    async fn list(&self) -> Result<Vec<T>, ServiceError>;

    async fn get(&self, id: Uuid) -> Result<T, ServiceError>;
}

/// Service failure
#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    /// Accessor failure, propagated unchanged
    #[error(transparent)]
    Store(#[from] DbError),

    /// The slot exists but its person reference did not resolve
    #[error("error getting {resource} with id {id}")]
    UnresolvedIdentity {
        resource: &'static str,
        id: Uuid,
        #[source]
        source: DbError,
    },
}

impl ServiceError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::Store(e) if e.is_not_found())
    }

    /// The slot points at a person that does not exist, as opposed to the
    /// person lookup failing in storage.
    pub fn is_dangling_reference(&self) -> bool {
        matches!(self, Self::UnresolvedIdentity { source, .. } if source.is_not_found())
    }
}
