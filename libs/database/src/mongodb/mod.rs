//! MongoDB connection management and helpers.

mod config;
mod connector;
mod health;
pub mod object_id;

pub use config::MongoConfig;
pub use connector::{MongoError, connect, connect_from_config};
pub use health::{HealthStatus, check_health};
pub use object_id::IdError;

pub use mongodb::{Client, Collection, Database};
