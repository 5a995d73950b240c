//! Enquiries Domain
//!
//! Delivery requests linking a product to a transport. References are stored
//! as given; neither id is checked against its collection.

pub mod handlers;
pub mod models;

pub use handlers::{openapi, router};
pub use models::{CreateEnquiry, Enquiry, UpdateEnquiry};
