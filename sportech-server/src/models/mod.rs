//! Catalog domain models
//!
//! Stored records (`Record`) are what the accessors return. Public entities
//! (`Resource`) are what the HTTP layer serializes. Leagues, teams and
//! stadiums are both; players and managers are composed from a slot record
//! plus a person record.

pub mod league;
pub mod manager;
pub mod person;
pub mod player;
pub mod stadium;
pub mod team;

use uuid::Uuid;

pub use league::League;
pub use manager::{Manager, ManagerSlot};
pub use person::{Identity, Person};
pub use player::{Player, PlayerSlot};
pub use stadium::Stadium;
pub use team::Team;

/// A row owned by a single accessor, addressable by id.
pub trait Record {
    /// Resource name used in not-found diagnostics.
    const KIND: &'static str;

    fn id(&self) -> Uuid;
}

/// A slot record references the person that fills it.
pub trait SlotRecord: Record {
    fn person_id(&self) -> Uuid;
}

/// A public entity exposed as a JSON collection.
pub trait Resource {
    /// JSON field for single-item responses (`{"league": {...}}`)
    const SINGULAR: &'static str;
    /// JSON field and path segment for collections (`/leagues`)
    const PLURAL: &'static str;
}

/// A public entity assembled from a slot record and the slot's identity.
pub trait Composed: Resource + Sized {
    type Slot: SlotRecord;

    fn compose(slot: Self::Slot, identity: Identity) -> Self;
}
