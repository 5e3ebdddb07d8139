//! Catalog collection endpoints
//!
//! Every collection gets the same pair of routes:
//! - `GET /<plural>`      → `{"<plural>": [...]}`
//! - `GET /<plural>/{id}` → `{"<singular>": {...}}`

use std::sync::Arc;

use axum::extract::State;
use axum::routing::get;
use axum::{Json, Router};
use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

use crate::http::error::ApiError;
use crate::http::extractors::EntityId;
use crate::models::Resource;
use crate::services::CatalogService;

type SharedService<T> = Arc<dyn CatalogService<T>>;

/// Single-field JSON object named after the collection
pub struct Envelope<V> {
    field: &'static str,
    value: V,
}

impl<V> Envelope<V> {
    pub fn new(field: &'static str, value: V) -> Self {
        Self { field, value }
    }
}

impl<V: Serialize> Serialize for Envelope<V> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(1))?;
        map.serialize_entry(self.field, &self.value)?;
        map.end()
    }
}

/// GET /<plural>
async fn list<T>(State(service): State<SharedService<T>>) -> Result<Json<Envelope<Vec<T>>>, ApiError>
where
    T: Resource + Serialize + Send + 'static,
{
    let items = service.list().await?;
    Ok(Json(Envelope::new(T::PLURAL, items)))
}

/// GET /<plural>/{id}
async fn get_one<T>(
    State(service): State<SharedService<T>>,
    EntityId(id): EntityId,
) -> Result<Json<Envelope<T>>, ApiError>
where
    T: Resource + Serialize + Send + 'static,
{
    let item = service.get(id).await?;
    Ok(Json(Envelope::new(T::SINGULAR, item)))
}

/// Routes for one collection, bound to its service
pub fn router<T>(service: SharedService<T>) -> Router
where
    T: Resource + Serialize + Send + 'static,
{
    Router::new()
        .route(&format!("/{}", T::PLURAL), get(list::<T>))
        .route(&format!("/{}/{{id}}", T::PLURAL), get(get_one::<T>))
        .with_state(service)
}
