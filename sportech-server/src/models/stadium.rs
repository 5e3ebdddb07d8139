use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use super::{Record, Resource};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Stadium {
    pub id: Uuid,
    pub name: String,
    pub capacity: i32,
    pub city: String,
    pub country: String,
}

impl Record for Stadium {
    const KIND: &'static str = "stadium";

    fn id(&self) -> Uuid {
        self.id
    }
}

impl Resource for Stadium {
    const SINGULAR: &'static str = "stadium";
    const PLURAL: &'static str = "stadiums";
}
