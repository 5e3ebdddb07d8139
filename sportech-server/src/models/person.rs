//! Person identity records
//!
//! Persons are owned by their own accessor and carry no role or team
//! information. Players and managers borrow their identity fields from here.

use chrono::NaiveDate;
use sqlx::FromRow;
use uuid::Uuid;

use super::Record;

/// Person record from the identity store
#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct Person {
    pub id: Uuid,
    pub first_name: String,
    pub middle_names: Option<String>,
    pub last_name: String,
    pub date_of_birth: NaiveDate,
    /// Nationality code, e.g. `EGY`
    pub nationality: String,
}

impl Record for Person {
    const KIND: &'static str = "person";

    fn id(&self) -> Uuid {
        self.id
    }
}

/// Identity fields copied into a composed entity.
///
/// `Default` is the unresolved identity: empty names and the default date.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Identity {
    pub first_name: String,
    pub middle_names: Option<String>,
    pub last_name: String,
    pub date_of_birth: NaiveDate,
    pub nationality: String,
}

impl From<Person> for Identity {
    fn from(p: Person) -> Self {
        Self {
            first_name: p.first_name,
            middle_names: p.middle_names,
            last_name: p.last_name,
            date_of_birth: p.date_of_birth,
            nationality: p.nationality,
        }
    }
}
