//! Transports Domain
//!
//! Carriers that move products to buyers, stored in the `transports`
//! collection and served under `/transports`.
//!
//! ```rust,ignore
//! let routes = domain_transports::router(store.clone());
//! let docs = domain_transports::openapi();
//! ```

pub mod handlers;
pub mod models;

pub use handlers::{openapi, router};
pub use models::{CreateTransport, Transport, UpdateTransport};
