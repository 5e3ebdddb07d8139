use chrono::{DateTime, NaiveDate, Utc};
use serde::Serialize;
use sqlx::FromRow;
use uuid::Uuid;

use super::{Composed, Identity, Record, Resource, SlotRecord};

/// Manager slot record from `team_managers`
#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct ManagerSlot {
    pub id: Uuid,
    pub person_id: Uuid,
    pub team: String,
    pub started: DateTime<Utc>,
    pub ended: Option<DateTime<Utc>>,
}

impl Record for ManagerSlot {
    const KIND: &'static str = "manager";

    fn id(&self) -> Uuid {
        self.id
    }
}

impl SlotRecord for ManagerSlot {
    fn person_id(&self) -> Uuid {
        self.person_id
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Manager {
    pub id: Uuid,
    pub first_name: String,
    pub middle_names: Option<String>,
    pub last_name: String,
    pub date_of_birth: NaiveDate,
    pub nationality: String,
    pub team: String,
    pub started: DateTime<Utc>,
    pub ended: Option<DateTime<Utc>>,
}

impl Resource for Manager {
    const SINGULAR: &'static str = "manager";
    const PLURAL: &'static str = "managers";
}

impl Composed for Manager {
    type Slot = ManagerSlot;

    fn compose(slot: ManagerSlot, identity: Identity) -> Self {
        Self {
            id: slot.id,
            first_name: identity.first_name,
            middle_names: identity.middle_names,
            last_name: identity.last_name,
            date_of_birth: identity.date_of_birth,
            nationality: identity.nationality,
            team: slot.team,
            started: slot.started,
            ended: slot.ended,
        }
    }
}
