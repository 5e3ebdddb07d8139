use chrono::{DateTime, NaiveDate, Utc};
use serde::Serialize;
use sqlx::FromRow;
use uuid::Uuid;

use super::{Composed, Identity, Record, Resource, SlotRecord};

/// Player slot record from `team_players`
#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct PlayerSlot {
    pub id: Uuid,
    pub person_id: Uuid,
    /// `/teams/<id>` path
    pub team: String,
    pub squad_number: i32,
    pub general_position: String,
    pub specific_position: Option<String>,
    pub started: DateTime<Utc>,
    pub ended: Option<DateTime<Utc>>,
}

impl Record for PlayerSlot {
    const KIND: &'static str = "player";

    fn id(&self) -> Uuid {
        self.id
    }
}

impl SlotRecord for PlayerSlot {
    fn person_id(&self) -> Uuid {
        self.person_id
    }
}

/// Player as served: slot attributes flattened with the person's identity
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Player {
    pub id: Uuid,
    pub first_name: String,
    pub middle_names: Option<String>,
    pub last_name: String,
    pub date_of_birth: NaiveDate,
    pub nationality: String,
    pub team: String,
    pub squad_number: i32,
    pub general_position: String,
    pub specific_position: Option<String>,
    pub started: DateTime<Utc>,
    pub ended: Option<DateTime<Utc>>,
}

impl Resource for Player {
    const SINGULAR: &'static str = "player";
    const PLURAL: &'static str = "players";
}

impl Composed for Player {
    type Slot = PlayerSlot;

    fn compose(slot: PlayerSlot, identity: Identity) -> Self {
        Self {
            id: slot.id,
            first_name: identity.first_name,
            middle_names: identity.middle_names,
            last_name: identity.last_name,
            date_of_birth: identity.date_of_birth,
            nationality: identity.nationality,
            team: slot.team,
            squad_number: slot.squad_number,
            general_position: slot.general_position,
            specific_position: slot.specific_position,
            started: slot.started,
            ended: slot.ended,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn serializes_camel_case() {
        let player = Player::compose(
            PlayerSlot {
                id: Uuid::nil(),
                person_id: Uuid::nil(),
                team: "/teams/liverpool".into(),
                squad_number: 1,
                general_position: "GK".into(),
                specific_position: None,
                started: Utc.with_ymd_and_hms(2018, 7, 19, 0, 0, 0).unwrap(),
                ended: None,
            },
            Identity::default(),
        );

        let value = serde_json::to_value(&player).unwrap();
        assert_eq!(value["squadNumber"], 1);
        assert_eq!(value["generalPosition"], "GK");
        assert!(value["specificPosition"].is_null());
        assert!(value["ended"].is_null());
        assert!(value.get("personId").is_none());
    }
}
