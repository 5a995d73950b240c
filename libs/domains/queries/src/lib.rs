//! Queries Domain
//!
//! Contact-form messages, stored in the singular `query` collection and served
//! under `/query`. Unlike the other resources, write results are wrapped
//! in `data`.

pub mod handlers;
pub mod models;

pub use handlers::{openapi, router};
pub use models::{CreateQuery, Query, UpdateQuery};
