use axum::{
    Json,
    extract::{FromRequest, Request},
};
use serde::de::DeserializeOwned;

use crate::errors::AppError;

/// JSON body extractor that rejects with `400 {"error":"Invalid body"}`.
///
/// Missing content type, malformed JSON and type mismatches are all reported
/// the same way; the underlying rejection is logged at debug level.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonBody<T>(pub T);

impl<T, S> FromRequest<S> for JsonBody<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match Json::<T>::from_request(req, state).await {
            Ok(Json(value)) => Ok(JsonBody(value)),
            Err(rejection) => {
                tracing::debug!(rejection = %rejection.body_text(), "Rejected request body");
                Err(AppError::invalid_body())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{Router, body::Body, http::StatusCode, routing::post};
    use serde::Deserialize;
    use tower::ServiceExt;

    #[derive(Deserialize)]
    struct Payload {
        #[allow(dead_code)]
        quantity: i64,
    }

    async fn handler(JsonBody(_): JsonBody<Payload>) -> StatusCode {
        StatusCode::NO_CONTENT
    }

    async fn send(content_type: Option<&str>, body: &'static str) -> StatusCode {
        let mut request = axum::http::Request::builder().method("POST").uri("/");
        if let Some(content_type) = content_type {
            request = request.header("content-type", content_type);
        }
        Router::new()
            .route("/", post(handler))
            .oneshot(request.body(Body::from(body)).unwrap())
            .await
            .unwrap()
            .status()
    }

    #[tokio::test]
    async fn test_accepts_valid_json() {
        assert_eq!(
            send(Some("application/json"), r#"{"quantity": 3}"#).await,
            StatusCode::NO_CONTENT
        );
    }

    #[tokio::test]
    async fn test_rejects_with_bad_request() {
        assert_eq!(send(Some("application/json"), "{").await, StatusCode::BAD_REQUEST);
        assert_eq!(
            send(Some("application/json"), r#"{"quantity": "three"}"#).await,
            StatusCode::BAD_REQUEST
        );
        assert_eq!(send(None, r#"{"quantity": 3}"#).await, StatusCode::BAD_REQUEST);
    }
}
