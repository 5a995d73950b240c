//! Generic HTTP handlers, one instantiation per resource.
//!
//! Each handler binds its input, resolves `{id}`, performs one store call and
//! maps the outcome. Bodies are bound before the identifier is checked, so a
//! request that is wrong on both counts reports `"Invalid body"`.

use std::sync::Arc;

use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    routing::{MethodRouter, get},
};
use axum_helpers::{AppError, JsonBody, ObjectIdPath};
use serde_json::Value;

use crate::resource::Resource;
use crate::response::{DataEnvelope, WriteAction, read_error, write_error, write_response};
use crate::service::CrudService;
use crate::store::DocumentStore;

type SharedService<R, S> = State<Arc<CrudService<R, S>>>;

pub async fn list<R: Resource, S: DocumentStore + 'static>(
    State(service): SharedService<R, S>,
) -> Result<Json<DataEnvelope<Vec<R>>>, AppError> {
    let items = service.list().await.map_err(read_error)?;
    Ok(Json(DataEnvelope::new(items)))
}

pub async fn get_one<R: Resource, S: DocumentStore + 'static>(
    State(service): SharedService<R, S>,
    ObjectIdPath(id): ObjectIdPath,
) -> Result<Json<DataEnvelope<R>>, AppError> {
    let item = service.get(id).await.map_err(read_error)?;
    Ok(Json(DataEnvelope::new(item)))
}

pub async fn create<R: Resource, S: DocumentStore + 'static>(
    State(service): SharedService<R, S>,
    JsonBody(input): JsonBody<R::Create>,
) -> Result<(StatusCode, Json<Value>), AppError> {
    let outcome = service
        .create(&input)
        .await
        .map_err(write_error::<R>(WriteAction::Create))?;
    Ok((
        StatusCode::CREATED,
        write_response::<R, _>(WriteAction::Create, &outcome)?,
    ))
}

pub async fn update<R: Resource, S: DocumentStore + 'static>(
    State(service): SharedService<R, S>,
    id: Result<ObjectIdPath, AppError>,
    body: Result<JsonBody<R::Update>, AppError>,
) -> Result<Json<Value>, AppError> {
    let JsonBody(input) = body?;
    let ObjectIdPath(id) = id?;
    let outcome = service
        .update(id, &input)
        .await
        .map_err(write_error::<R>(WriteAction::Update))?;
    write_response::<R, _>(WriteAction::Update, &outcome)
}

pub async fn delete<R: Resource, S: DocumentStore + 'static>(
    State(service): SharedService<R, S>,
    ObjectIdPath(id): ObjectIdPath,
) -> Result<Json<Value>, AppError> {
    let outcome = service
        .delete(id)
        .await
        .map_err(write_error::<R>(WriteAction::Delete))?;
    write_response::<R, _>(WriteAction::Delete, &outcome)
}

/// Route table for one resource with a caller-supplied collection `POST`.
///
/// `/<url>` and `/<url>/` serve list and create; `/<url>/{id}` serves get,
/// update and delete. Update and delete on the collection path answer
/// `"id is required"`.
pub fn routes_with_create<R, S, St>(create_route: MethodRouter<St>) -> Router<St>
where
    R: Resource,
    S: DocumentStore + 'static,
    St: Clone + Send + Sync + 'static,
    Arc<CrudService<R, S>>: axum::extract::FromRef<St>,
{
    let collection = get(list::<R, S>)
        .merge(create_route)
        .put(update::<R, S>)
        .delete(delete::<R, S>);
    let item = get(get_one::<R, S>)
        .put(update::<R, S>)
        .delete(delete::<R, S>);

    Router::new()
        .route(R::URL, collection.clone())
        .route(&format!("{}/", R::URL), collection)
        .route(&format!("{}/{{id}}", R::URL), item)
}

/// Complete router for a resource, state attached.
///
/// ```ignore
/// let books = document_crud::router(CrudService::<Book, _>::new(store));
/// ```
pub fn router<R: Resource, S: DocumentStore + 'static>(service: CrudService<R, S>) -> Router {
    let shared_service = Arc::new(service);
    routes_with_create::<R, S, Arc<CrudService<R, S>>>(axum::routing::post(create::<R, S>))
        .with_state(shared_service)
}
