use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use super::{Record, Resource};

/// Team record
///
/// `country`, `stadium` and `league` are resource paths. Teams can also be
/// served from a seed file, which uses the same camelCase field names.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Team {
    pub id: Uuid,
    pub full_name: String,
    pub medium_name: String,
    pub acronym: String,
    #[serde(default)]
    pub nickname: Option<String>,
    pub year_founded: i32,
    #[serde(default)]
    pub city: Option<String>,
    pub country: String,
    pub stadium: String,
    pub league: String,
}

impl Record for Team {
    const KIND: &'static str = "team";

    fn id(&self) -> Uuid {
        self.id
    }
}

impl Resource for Team {
    const SINGULAR: &'static str = "team";
    const PLURAL: &'static str = "teams";
}
