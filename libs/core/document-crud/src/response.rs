//! Response envelopes.
//!
//! Reads are wrapped in `{"data": ...}`. Writes carry the store outcome under
//! the resource's envelope key next to a human readable `msg`.

use axum::Json;
use axum_helpers::AppError;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use utoipa::ToSchema;

use crate::error::CrudError;
use crate::resource::Resource;

/// `{"data": <payload>}`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct DataEnvelope<T> {
    pub data: T,
}

impl<T> DataEnvelope<T> {
    pub fn new(data: T) -> Self {
        Self { data }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteAction {
    Create,
    Update,
    Delete,
}

impl WriteAction {
    pub fn verb(self) -> &'static str {
        match self {
            WriteAction::Create => "create",
            WriteAction::Update => "update",
            WriteAction::Delete => "delete",
        }
    }

    pub fn past_tense(self) -> &'static str {
        match self {
            WriteAction::Create => "created",
            WriteAction::Update => "updated",
            WriteAction::Delete => "deleted",
        }
    }
}

/// `"Transport created successfully"`
pub fn success_message<R: Resource>(action: WriteAction) -> String {
    format!("{} {} successfully", R::LABEL, action.past_tense())
}

/// `"Failed to create transport"`
pub fn failure_message<R: Resource>(action: WriteAction) -> String {
    format!("Failed to {} {}", action.verb(), R::LABEL.to_lowercase())
}

/// Builds `{"<envelope>": outcome, "msg": "..."}` for a successful write.
pub fn write_response<R: Resource, T: Serialize>(
    action: WriteAction,
    outcome: &T,
) -> Result<Json<Value>, AppError> {
    let outcome = serde_json::to_value(outcome)
        .map_err(|e| AppError::store_write(failure_message::<R>(action), e.to_string()))?;

    let mut body = Map::new();
    body.insert(R::ENVELOPE.to_string(), outcome);
    body.insert(
        "msg".to_string(),
        Value::String(success_message::<R>(action)),
    );
    Ok(Json(Value::Object(body)))
}

/// Store failure on a read path: `{"error": <store message>}`
pub fn read_error(err: CrudError) -> AppError {
    AppError::store(err.to_string())
}

/// Store failure on a write path: `{"error": "Failed to ...", "message": <store message>}`
pub fn write_error<R: Resource>(action: WriteAction) -> impl FnOnce(CrudError) -> AppError {
    move |err| AppError::store_write(failure_message::<R>(action), err.to_string())
}
