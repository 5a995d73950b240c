//! API routes
//!
//! Resource groups are mounted at the root (`/products`, `/query`, ...).

pub mod health;

use std::sync::Arc;

use axum::Router;
use document_crud::DocumentStore;
use object_storage::ObjectStorage;

/// Every resource group over one document store
pub fn routes<S, O>(store: Arc<S>, storage: Arc<O>, product_upload_max_bytes: usize) -> Router
where
    S: DocumentStore + 'static,
    O: ObjectStorage + 'static,
{
    Router::new()
        .merge(domain_products::router(
            Arc::clone(&store),
            storage,
            product_upload_max_bytes,
        ))
        .merge(domain_transports::router(Arc::clone(&store)))
        .merge(domain_enquiries::router(Arc::clone(&store)))
        .merge(domain_queries::router(Arc::clone(&store)))
        .merge(domain_books::router(store))
}
