use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{DefaultBodyLimit, FromRef, State},
    http::StatusCode,
    routing::post,
};
use axum_helpers::{
    AppError,
    errors::responses::{BadRequestResponse, InternalServerErrorResponse},
};
use document_crud::{
    CrudOperation, CrudService, DocumentStore, WriteAction, crud_openapi,
    handlers::routes_with_create,
    response::{write_error, write_response},
};
use object_storage::{ObjectStorage, StorageError};
use serde_json::{Value, json};
use tracing::instrument;
use utoipa::OpenApi;

use crate::form::ProductForm;
use crate::models::{Product, ProductCreatedResponse, ProductUploadForm};

/// Body limit of the products group when none is configured (32 MiB)
pub const DEFAULT_MAX_UPLOAD_BYTES: usize = 32 * 1024 * 1024;

pub(crate) const UPLOAD_FAILED: &str = "Failed to upload product image";

/// State shared by the product routes
pub struct ProductState<S: DocumentStore, O: ObjectStorage> {
    pub service: Arc<CrudService<Product, S>>,
    pub storage: Arc<O>,
}

impl<S: DocumentStore, O: ObjectStorage> Clone for ProductState<S, O> {
    fn clone(&self) -> Self {
        Self {
            service: Arc::clone(&self.service),
            storage: Arc::clone(&self.storage),
        }
    }
}

impl<S: DocumentStore, O: ObjectStorage> FromRef<ProductState<S, O>>
    for Arc<CrudService<Product, S>>
{
    fn from_ref(state: &ProductState<S, O>) -> Self {
        Arc::clone(&state.service)
    }
}

#[derive(OpenApi)]
#[openapi(
    paths(create_product),
    components(schemas(ProductUploadForm, ProductCreatedResponse))
)]
struct ProductUploadDoc;

fn upload_error(err: StorageError) -> AppError {
    let upload_id = err.upload_id().map(str::to_string);
    let error = AppError::storage(UPLOAD_FAILED, err.to_string());
    match upload_id {
        Some(upload_id) => error.with_details(json!({ "uploadId": upload_id })),
        None => error,
    }
}

/// Create a product from a multipart form, uploading its image first
#[utoipa::path(
    post,
    path = "/products",
    tag = "Products",
    request_body(content = ProductUploadForm, content_type = "multipart/form-data"),
    responses(
        (status = 201, description = "Product created", body = ProductCreatedResponse),
        (status = 400, response = BadRequestResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
#[instrument(skip_all)]
pub async fn create_product<S: DocumentStore + 'static, O: ObjectStorage + 'static>(
    State(state): State<ProductState<S, O>>,
    form: ProductForm,
) -> Result<(StatusCode, Json<Value>), AppError> {
    let ProductForm { mut product, image } = form;
    let image =
        image.ok_or_else(|| AppError::storage(UPLOAD_FAILED, "image file is required"))?;

    let stored = state.storage.upload(image).await.map_err(upload_error)?;
    product.image = stored.url;

    match state.service.create(&product).await {
        Ok(outcome) => Ok((
            StatusCode::CREATED,
            write_response::<Product, _>(WriteAction::Create, &outcome)?,
        )),
        Err(err) => {
            if let Err(cleanup) = state.storage.delete(&stored.key).await {
                tracing::warn!(key = %stored.key, error = %cleanup, "Failed to remove orphaned product image");
            }
            Err(write_error::<Product>(WriteAction::Create)(err))
        }
    }
}

/// `/products` routes: multipart create plus the generic read, update and delete.
///
/// Request bodies are capped at `max_upload_bytes`.
pub fn router<S, O>(store: Arc<S>, storage: Arc<O>, max_upload_bytes: usize) -> Router
where
    S: DocumentStore + 'static,
    O: ObjectStorage + 'static,
{
    let state = ProductState {
        service: Arc::new(CrudService::new(store)),
        storage,
    };

    routes_with_create::<Product, S, ProductState<S, O>>(post(create_product::<S, O>))
        .layer(DefaultBodyLimit::max(max_upload_bytes))
        .with_state(state)
}

pub fn openapi() -> utoipa::openapi::OpenApi {
    let mut doc = crud_openapi::<Product>(&[
        CrudOperation::List,
        CrudOperation::Get,
        CrudOperation::Update,
        CrudOperation::Delete,
    ]);
    doc.merge(ProductUploadDoc::openapi());
    doc
}
