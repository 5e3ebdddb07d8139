use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use super::{Record, Resource};

/// League record, `country` is rendered as a `/countries/<id>` path
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct League {
    pub id: Uuid,
    pub name: String,
    pub number_of_teams: i32,
    pub country: String,
}

impl Record for League {
    const KIND: &'static str = "league";

    fn id(&self) -> Uuid {
        self.id
    }
}

impl Resource for League {
    const SINGULAR: &'static str = "league";
    const PLURAL: &'static str = "leagues";
}
