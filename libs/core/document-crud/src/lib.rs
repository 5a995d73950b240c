//! Generic CRUD over MongoDB collections.
//!
//! One pipeline serves every resource: bind the body, resolve the `{id}`,
//! run a single store operation, wrap the outcome in the resource's envelope.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────┐
//! │ handlers      list / get_one / create / update / delete │
//! │               (generic over Resource + DocumentStore)   │
//! ├─────────────────────────────────────────────────────────┤
//! │ CrudService<R, S>   typed documents ⇄ bson::Document    │
//! ├─────────────────────────────────────────────────────────┤
//! │ DocumentStore (trait)  ◄──  MongoDocumentStore          │
//! └─────────────────────────────────────────────────────────┘
//! ```
//!
//! A resource only declares its schemas:
//!
//! ```ignore
//! #[derive(ApiResource, Serialize, Deserialize, ToSchema)]
//! #[api_resource(envelope = "result")]
//! pub struct Transport { /* ... */ }
//!
//! impl Resource for Transport {
//!     type Create = CreateTransport;
//!     type Update = UpdateTransport;
//! }
//!
//! let routes = document_crud::router(CrudService::<Transport, _>::new(store));
//! let docs = document_crud::openapi::crud_openapi::<Transport>(CrudOperation::ALL);
//! ```

pub mod error;
pub mod handlers;
pub mod mongo;
pub mod openapi;
pub mod resource;
pub mod response;
pub mod service;
pub mod store;

pub use error::CrudError;
pub use handlers::router;
pub use mongo::MongoDocumentStore;
pub use openapi::{CrudOperation, crud_openapi};
pub use resource::{Resource, partial_update_document};
pub use response::WriteAction;
pub use service::CrudService;
pub use store::{DeleteOutcome, DocumentStore, InsertOutcome, UpdateOutcome};

#[cfg(any(test, feature = "mocks"))]
pub use store::MockDocumentStore;
