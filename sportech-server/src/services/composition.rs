//! Join-on-read composition of slot records with person identities
//!
//! Players and managers are never stored denormalized. Each request reads the
//! slot accessor and the person accessor independently and merges in memory.
//!
//! The two paths deliberately differ on an unresolved person reference:
//! - `list_composed` serves the slot with an empty `Identity` and keeps going
//! - `get_composed` fails with `ServiceError::UnresolvedIdentity`

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use uuid::Uuid;

use super::{CatalogService, ServiceError};
use crate::db::ReadRepo;
use crate::models::{Composed, Identity, Person, Record, SlotRecord};

/// Composes `C` from its slot accessor and the shared person accessor
pub struct CompositionService<C: Composed> {
    slots: Arc<dyn ReadRepo<C::Slot>>,
    persons: Arc<dyn ReadRepo<Person>>,
}

impl<C: Composed> CompositionService<C> {
    pub fn new(slots: Arc<dyn ReadRepo<C::Slot>>, persons: Arc<dyn ReadRepo<Person>>) -> Self {
        Self { slots, persons }
    }

    /// List every slot with its identity merged in, in slot order.
    ///
    /// Both listings are fetched concurrently and either failure fails the
    /// call. Output length always equals the slot listing length.
    pub async fn list_composed(&self) -> Result<Vec<C>, ServiceError> {
        let (slots, people) = tokio::try_join!(self.slots.list_all(), self.persons.list_all())?;
        Ok(merge(slots, people))
    }

    /// Fetch one slot and its person. Both lookups must succeed.
    pub async fn get_composed(&self, id: Uuid) -> Result<C, ServiceError> {
        let slot = self.slots.get_by_id(id).await?;

        let person = self
            .persons
            .get_by_id(slot.person_id())
            .await
            .map_err(|source| ServiceError::UnresolvedIdentity {
                resource: C::SINGULAR,
                id,
                source,
            })?;

        Ok(C::compose(slot, Identity::from(person)))
    }
}

/// Map-join slots against persons. Duplicate person ids: last one wins.
fn merge<C: Composed>(slots: Vec<C::Slot>, people: Vec<Person>) -> Vec<C> {
    let by_id: HashMap<Uuid, Person> = people.into_iter().map(|p| (p.id, p)).collect();

    slots
        .into_iter()
        .map(|slot| {
            let identity = match by_id.get(&slot.person_id()) {
                Some(person) => Identity::from(person.clone()),
                None => {
                    tracing::warn!(
                        resource = C::SINGULAR,
                        id = %slot.id(),
                        person_id = %slot.person_id(),
                        "unresolved person reference, serving empty identity"
                    );
                    Identity::default()
                }
            };
            C::compose(slot, identity)
        })
        .collect()
}

#[async_trait]
impl<C> CatalogService<C> for CompositionService<C>
where
    C: Composed + Send + 'static,
    C::Slot: Send + 'static,
{
    async fn list(&self) -> Result<Vec<C>, ServiceError> {
        self.list_composed().await
    }

    async fn get(&self, id: Uuid) -> Result<C, ServiceError> {
        self.get_composed(id).await
    }
}
