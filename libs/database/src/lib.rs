//! Database connectors and helpers.
//!
//! # Features
//!
//! - `mongodb` (default): MongoDB connector, health check and identifier codec
//! - `config`: `core_config::FromEnv` support for connection settings
//!
//! ```ignore
//! use database::mongodb::{self, MongoConfig};
//!
//! let config = MongoConfig::with_database("mongodb://localhost:27017", "go_demo");
//! let client = mongodb::connect_from_config(&config).await?;
//! let db = client.database(config.database());
//! let id = mongodb::object_id::decode("64b7f0c2a1b2c3d4e5f60718")?;
//! ```

#[cfg(feature = "mongodb")]
pub mod mongodb;
