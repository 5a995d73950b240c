use std::sync::Arc;

use axum::Router;
use document_crud::{CrudOperation, CrudService, DocumentStore, crud_openapi};

use crate::models::Query;

/// `/query` routes backed by `store`
pub fn router<S: DocumentStore + 'static>(store: Arc<S>) -> Router {
    document_crud::router(CrudService::<Query, S>::new(store))
}

pub fn openapi() -> utoipa::openapi::OpenApi {
    crud_openapi::<Query>(CrudOperation::ALL)
}
