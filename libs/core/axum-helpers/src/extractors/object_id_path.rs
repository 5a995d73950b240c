use axum::{
    extract::{FromRequestParts, Path},
    http::request::Parts,
};
use database::mongodb::object_id;
use mongodb::bson::oid::ObjectId;
use std::collections::HashMap;

use crate::errors::AppError;

/// Extracts the `{id}` path parameter as an [`ObjectId`].
///
/// A route without an `id` parameter, or an empty one, rejects with
/// `"id is required"`; anything that is not 24 hex characters rejects with
/// `"invalid id"`. Take it as `Result<ObjectIdPath, AppError>` to decide when
/// the rejection is reported relative to body binding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ObjectIdPath(pub ObjectId);

impl<S> FromRequestParts<S> for ObjectIdPath
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let raw = Path::<HashMap<String, String>>::from_request_parts(parts, state)
            .await
            .ok()
            .and_then(|Path(mut params)| params.remove("id"))
            .unwrap_or_default();

        Ok(ObjectIdPath(object_id::decode(&raw)?))
    }
}
