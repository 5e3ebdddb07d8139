//! Request logging decorator for services
//!
//! Wraps any `CatalogService` and records, for every call, the request kind,
//! the resource, the elapsed time and the error (if any). Results pass
//! through untouched.

use std::time::Instant;

use async_trait::async_trait;
use uuid::Uuid;

use super::{CatalogService, ServiceError};

pub struct Logged<S> {
    inner: S,
    resource: &'static str,
}

impl<S> Logged<S> {
    pub fn new(inner: S, resource: &'static str) -> Self {
        Self { inner, resource }
    }

    fn record(&self, request: &'static str, id: Option<Uuid>, started: Instant, error: Option<&ServiceError>) {
        let elapsed_ms = started.elapsed().as_secs_f64() * 1000.0;
        let id = id.map(|id| id.to_string());
        match error {
            None => tracing::info!(
                request,
                resource = self.resource,
                id = id.as_deref(),
                elapsed_ms,
                "request served"
            ),
            Some(err) => tracing::warn!(
                request,
                resource = self.resource,
                id = id.as_deref(),
                elapsed_ms,
                error = %err,
                "request failed"
            ),
        }
    }
}

#[async_trait]
impl<T, S> CatalogService<T> for Logged<S>
where
    T: Send + 'static,
    S: CatalogService<T>,
{
    async fn list(&self) -> Result<Vec<T>, ServiceError> {
        let started = Instant::now();
        let result = self.inner.list().await;
        self.record("list", None, started, result.as_ref().err());
        result
    }

    async fn get(&self, id: Uuid) -> Result<T, ServiceError> {
        let started = Instant::now();
        let result = self.inner.get(id).await;
        self.record("get", Some(id), started, result.as_ref().err());
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    use crate::db::DbError;

    #[derive(Default)]
    struct Counting {
        calls: AtomicUsize,
    }

    #[async_trait]
    impl CatalogService<u32> for Counting {
        async fn list(&self) -> Result<Vec<u32>, ServiceError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(vec![1, 2, 3])
        }

        async fn get(&self, id: Uuid) -> Result<u32, ServiceError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Err(DbError::not_found("counter", id).into())
        }
    }

    #[tokio::test]
    async fn passes_results_through() {
        let logged = Logged::new(Counting::default(), "counters");

        assert_eq!(logged.list().await.unwrap(), vec![1, 2, 3]);
        assert!(logged.get(Uuid::nil()).await.unwrap_err().is_not_found());
        assert_eq!(logged.inner.calls.load(Ordering::SeqCst), 2);
    }
}
