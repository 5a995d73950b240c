//! Products Domain
//!
//! Products listed by sellers, stored in the `products` collection. Reads,
//! updates and deletes use the generic document pipeline; creation takes a
//! `multipart/form-data` body whose `image` file is uploaded to object storage
//! before the document is written.
//!
//! ```text
//! POST /products/ (multipart)
//!   │
//!   ├─► ProductForm            bind text fields, spool image (400 Invalid body)
//!   ├─► ObjectStorage::upload  image → bucket, public URL    (500, details.uploadId)
//!   ├─► CrudService::create    insert with image = URL       (500)
//!   └─► on insert failure: ObjectStorage::delete (best effort)
//! ```
//!
//! ```rust,ignore
//! let routes = domain_products::router(store, storage, DEFAULT_MAX_UPLOAD_BYTES);
//! ```

pub mod form;
pub mod handlers;
pub mod models;

pub use form::ProductForm;
pub use handlers::{DEFAULT_MAX_UPLOAD_BYTES, ProductState, openapi, router};
pub use models::{CreateProduct, Product, UpdateProduct};
