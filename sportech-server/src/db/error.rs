//! Accessor error type

use uuid::Uuid;

/// Failure of a single accessor call.
#[derive(Debug, thiserror::Error)]
pub enum DbError {
    /// Single-item lookup matched zero rows
    #[error("{resource} with id {id} not found")]
    NotFound { resource: &'static str, id: Uuid },

    /// Connection, query or row decode failure
    #[error("{context}")]
    Storage {
        context: String,
        #[source]
        source: sqlx::Error,
    },
}

impl DbError {
    pub fn not_found(resource: &'static str, id: Uuid) -> Self {
        Self::NotFound { resource, id }
    }

    pub fn storage(context: impl Into<String>, source: sqlx::Error) -> Self {
        Self::Storage {
            context: context.into(),
            source,
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn storage_keeps_cause() {
        let err = DbError::storage("error listing leagues", sqlx::Error::RowNotFound);
        assert_eq!(err.to_string(), "error listing leagues");
        assert!(err.source().is_some());
        assert!(!err.is_not_found());
    }

    #[test]
    fn not_found_names_resource() {
        let id = Uuid::nil();
        let err = DbError::not_found("stadium", id);
        assert_eq!(err.to_string(), format!("stadium with id {id} not found"));
        assert!(err.is_not_found());
    }
}
