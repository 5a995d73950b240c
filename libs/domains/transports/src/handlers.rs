use std::sync::Arc;

use axum::Router;
use document_crud::{CrudOperation, CrudService, DocumentStore, crud_openapi};

use crate::models::Transport;

/// `/transports` routes backed by `store`
pub fn router<S: DocumentStore + 'static>(store: Arc<S>) -> Router {
    document_crud::router(CrudService::<Transport, S>::new(store))
}

pub fn openapi() -> utoipa::openapi::OpenApi {
    crud_openapi::<Transport>(CrudOperation::ALL)
}
