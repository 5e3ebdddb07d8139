use std::sync::Arc;

use async_trait::async_trait;
use uuid::Uuid;

use super::{CatalogService, ServiceError};
use crate::db::ReadRepo;

/// Forwards straight to a single accessor (leagues, teams, stadiums).
pub struct PassthroughService<T> {
    repo: Arc<dyn ReadRepo<T>>,
}

impl<T> PassthroughService<T> {
    pub fn new(repo: Arc<dyn ReadRepo<T>>) -> Self {
        Self { repo }
    }
}

#[async_trait]
impl<T> CatalogService<T> for PassthroughService<T>
where
    T: Send + 'static,
{
    async fn list(&self) -> Result<Vec<T>, ServiceError> {
        Ok(self.repo.list_all().await?)
    }

    async fn get(&self, id: Uuid) -> Result<T, ServiceError> {
        Ok(self.repo.get_by_id(id).await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::FixtureRepo;
    use crate::models::Stadium;

    fn anfield() -> Stadium {
        Stadium {
            id: Uuid::new_v4(),
            name: "Anfield".into(),
            capacity: 61_276,
            city: "Liverpool".into(),
            country: "/countries/eng".into(),
        }
    }

    fn service(stadiums: Vec<Stadium>) -> PassthroughService<Stadium> {
        PassthroughService::new(Arc::new(FixtureRepo::new(stadiums)))
    }

    #[tokio::test]
    async fn forwards_records_unchanged() {
        let stadium = anfield();
        let service = service(vec![stadium.clone()]);

        assert_eq!(service.list().await.unwrap(), vec![stadium.clone()]);
        assert_eq!(service.get(stadium.id).await.unwrap(), stadium);
    }

    #[tokio::test]
    async fn missing_id_is_not_found() {
        let service = service(vec![anfield()]);
        let err = service.get(Uuid::new_v4()).await.unwrap_err();
        assert!(err.is_not_found());
    }
}
