//! Application state.
//!
//! Built once at startup. Every handle inside is cheap to clone and shares its
//! underlying pool.

use std::sync::Arc;

use document_crud::MongoDocumentStore;
use mongodb::{Client, Database};
use object_storage::S3ObjectStorage;

use crate::config::Config;

#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Kept for shutdown
    pub mongo_client: Client,
    pub db: Database,
    pub store: Arc<MongoDocumentStore>,
    pub storage: Arc<S3ObjectStorage>,
}

impl AppState {
    pub fn new(config: Config, mongo_client: Client, storage: S3ObjectStorage) -> Self {
        let db = mongo_client.database(config.mongodb.database());
        Self {
            store: Arc::new(MongoDocumentStore::new(db.clone())),
            storage: Arc::new(storage),
            config,
            mongo_client,
            db,
        }
    }
}
