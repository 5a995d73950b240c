//! Books Domain
//!
//! Catalogue entries in the `books` collection, served under `/books`.

pub mod handlers;
pub mod models;

pub use handlers::{openapi, router};
pub use models::{Book, CreateBook, UpdateBook};
