//! Custom Axum extractors

use axum::extract::{FromRequestParts, Path};
use axum::http::request::Parts;
use uuid::Uuid;

use super::error::ApiError;

/// Extract and validate the `{id}` path parameter.
///
/// Absent and malformed ids are rejected with 400 before any service call.
pub struct EntityId(pub Uuid);

impl<S> FromRequestParts<S> for EntityId
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw): Path<String> = Path::from_request_parts(parts, state)
            .await
            .map_err(|_| ApiError::BadRequest("missing id path parameter".into()))?;

        let id = Uuid::parse_str(&raw)
            .map_err(|_| ApiError::BadRequest(format!("invalid id '{raw}': expected a UUID")))?;

        Ok(Self(id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use axum::routing::get;
    use axum::Router;
    use tower::ServiceExt;

    async fn echo(EntityId(id): EntityId) -> String {
        id.to_string()
    }

    fn app() -> Router {
        Router::new()
            .route("/things/{id}", get(echo))
            .route("/things", get(echo))
    }

    async fn status_of(uri: &str) -> StatusCode {
        app()
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap()
            .status()
    }

    #[tokio::test]
    async fn accepts_uuid() {
        assert_eq!(status_of(&format!("/things/{}", Uuid::new_v4())).await, StatusCode::OK);
    }

    #[tokio::test]
    async fn rejects_malformed_id() {
        assert_eq!(status_of("/things/not-a-uuid").await, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn rejects_missing_id() {
        assert_eq!(status_of("/things").await, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn rejects_whitespace_padded_id() {
        let uri = format!("/things/%20{}%20", Uuid::new_v4());
        assert_eq!(status_of(&uri).await, StatusCode::BAD_REQUEST);
    }
}
