//! API error type with IntoResponse
//!
//! Every error is rendered as `{"error": "<message>"}`. 5xx causes are
//! logged with their full source chain; the client only sees the top-level
//! message.

use axum::http::StatusCode;
use axum::BoxError;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

use crate::services::ServiceError;

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// Missing or malformed request parameter (400)
    #[error("{0}")]
    BadRequest(String),

    /// Service failure: 404 for not found, 500 otherwise
    #[error(transparent)]
    Service(#[from] ServiceError),

    /// Request deadline elapsed before the handler finished (408)
    #[error("request timed out")]
    Timeout,

    /// Middleware failure other than the deadline (500)
    #[error("{0}")]
    Internal(String),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::Service(e) if e.is_not_found() => StatusCode::NOT_FOUND,
            Self::Service(ServiceError::Store(_)) => StatusCode::INTERNAL_SERVER_ERROR,
            Self::Service(ServiceError::UnresolvedIdentity { .. }) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
            Self::Timeout => StatusCode::REQUEST_TIMEOUT,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn dangling_reference(&self) -> bool {
        matches!(self, Self::Service(e) if e.is_dangling_reference())
    }
}

/// Convert errors raised by the tower middleware stack.
pub async fn handle_middleware_error(err: BoxError) -> ApiError {
    if err.is::<tower::timeout::error::Elapsed>() {
        ApiError::Timeout
    } else {
        ApiError::Internal(format!("unhandled middleware error: {err}"))
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!(
                error = ?self,
                dangling_reference = self.dangling_reference(),
                "{}",
                self
            );
        }

        let body = Json(json!({ "error": self.to_string() }));
        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;
    use uuid::Uuid;

    use crate::db::DbError;

    async fn body_of(err: ApiError) -> (StatusCode, serde_json::Value) {
        let response = err.into_response();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn bad_request_is_400() {
        let (status, body) = body_of(ApiError::BadRequest("missing id".into())).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, json!({ "error": "missing id" }));
    }

    #[tokio::test]
    async fn not_found_is_404() {
        let id = Uuid::new_v4();
        let err = ApiError::from(ServiceError::from(DbError::not_found("league", id)));
        let (status, body) = body_of(err).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"], format!("league with id {id} not found"));
    }

    #[tokio::test]
    async fn storage_is_500_without_cause() {
        let err = ApiError::from(ServiceError::from(DbError::storage(
            "error listing teams",
            sqlx::Error::PoolTimedOut,
        )));
        let (status, body) = body_of(err).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body, json!({ "error": "error listing teams" }));
    }

    #[tokio::test]
    async fn unresolved_identity_is_500() {
        let id = Uuid::new_v4();
        let err = ApiError::from(ServiceError::UnresolvedIdentity {
            resource: "manager",
            id,
            source: DbError::not_found("person", Uuid::new_v4()),
        });
        let (status, body) = body_of(err).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["error"], format!("error getting manager with id {id}"));
    }

    #[tokio::test]
    async fn elapsed_deadline_is_408_json() {
        let err = handle_middleware_error(Box::new(tower::timeout::error::Elapsed::new())).await;
        let (status, body) = body_of(err).await;
        assert_eq!(status, StatusCode::REQUEST_TIMEOUT);
        assert_eq!(body, json!({ "error": "request timed out" }));
    }

    #[tokio::test]
    async fn other_middleware_error_is_500() {
        let err = handle_middleware_error("layer exploded".into()).await;
        let (status, body) = body_of(err).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert!(body["error"].as_str().unwrap().contains("layer exploded"));
    }

    #[test]
    fn dangling_reference_only_for_missing_person() {
        let missing = ApiError::from(ServiceError::UnresolvedIdentity {
            resource: "player",
            id: Uuid::new_v4(),
            source: DbError::not_found("person", Uuid::new_v4()),
        });
        let broken = ApiError::from(ServiceError::UnresolvedIdentity {
            resource: "player",
            id: Uuid::new_v4(),
            source: DbError::storage("error getting person", sqlx::Error::PoolTimedOut),
        });

        assert!(missing.dangling_reference());
        assert!(!broken.dangling_reference());
        assert_eq!(missing.status(), broken.status());
    }
}
