//! [`DocumentStore`] backed by a MongoDB database handle.

use async_trait::async_trait;
use futures::TryStreamExt;
use mongodb::Database;
use mongodb::bson::{Bson, Document, doc, oid::ObjectId};
use tracing::instrument;

use crate::error::CrudResult;
use crate::store::{DeleteOutcome, DocumentStore, InsertOutcome, UpdateOutcome};

#[derive(Clone)]
pub struct MongoDocumentStore {
    db: Database,
}

impl MongoDocumentStore {
    pub fn new(db: Database) -> Self {
        Self { db }
    }

    pub fn database(&self) -> &Database {
        &self.db
    }

    fn collection(&self, name: &str) -> mongodb::Collection<Document> {
        self.db.collection::<Document>(name)
    }
}

/// String form of a driver-assigned id; `ObjectId`s render as hex.
fn bson_id_to_string(id: &Bson) -> String {
    match id {
        Bson::ObjectId(oid) => oid.to_hex(),
        Bson::String(s) => s.clone(),
        other => other.to_string(),
    }
}

#[async_trait]
impl DocumentStore for MongoDocumentStore {
    #[instrument(skip(self))]
    async fn find_all(&self, collection: &str) -> CrudResult<Vec<Document>> {
        let cursor = self.collection(collection).find(doc! {}).await?;
        let documents: Vec<Document> = cursor.try_collect().await?;
        tracing::debug!(count = documents.len(), "Fetched documents");
        Ok(documents)
    }

    #[instrument(skip(self), fields(id = %id))]
    async fn find_one(&self, collection: &str, id: ObjectId) -> CrudResult<Option<Document>> {
        Ok(self
            .collection(collection)
            .find_one(doc! { "_id": id })
            .await?)
    }

    #[instrument(skip(self, document))]
    async fn insert_one(&self, collection: &str, document: Document) -> CrudResult<InsertOutcome> {
        let result = self.collection(collection).insert_one(document).await?;
        let inserted_id = bson_id_to_string(&result.inserted_id);
        tracing::info!(inserted_id = %inserted_id, "Document inserted");
        Ok(InsertOutcome { inserted_id })
    }

    #[instrument(skip(self, set), fields(id = %id, fields = set.len()))]
    async fn update_one(
        &self,
        collection: &str,
        id: ObjectId,
        set: Document,
    ) -> CrudResult<UpdateOutcome> {
        let result = self
            .collection(collection)
            .update_one(doc! { "_id": id }, doc! { "$set": set })
            .await?;
        tracing::info!(
            matched = result.matched_count,
            modified = result.modified_count,
            "Document updated"
        );
        Ok(UpdateOutcome {
            matched_count: result.matched_count,
            modified_count: result.modified_count,
            upserted_count: u64::from(result.upserted_id.is_some()),
            upserted_id: result.upserted_id.as_ref().map(bson_id_to_string),
        })
    }

    #[instrument(skip(self), fields(id = %id))]
    async fn delete_one(&self, collection: &str, id: ObjectId) -> CrudResult<DeleteOutcome> {
        let result = self
            .collection(collection)
            .delete_one(doc! { "_id": id })
            .await?;
        tracing::info!(deleted = result.deleted_count, "Document deleted");
        Ok(DeleteOutcome {
            deleted_count: result.deleted_count,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bson_id_to_string() {
        let oid = ObjectId::new();
        assert_eq!(bson_id_to_string(&Bson::ObjectId(oid)), oid.to_hex());
        assert_eq!(bson_id_to_string(&Bson::String("abc".into())), "abc");
        assert_eq!(bson_id_to_string(&Bson::Int32(7)), "7");
    }

    #[tokio::test]
    #[ignore] // Requires Docker
    async fn test_round_trip_against_mongo() {
        let mongo = test_utils::TestMongo::new().await;
        let store = MongoDocumentStore::new(mongo.database("document_crud"));

        let inserted = store
            .insert_one("books", doc! { "title": "Dune", "year": 1965 })
            .await
            .unwrap();
        let id = ObjectId::parse_str(&inserted.inserted_id).unwrap();

        let all = store.find_all("books").await.unwrap();
        assert_eq!(all.len(), 1);

        let updated = store
            .update_one("books", id, doc! { "year": 1966 })
            .await
            .unwrap();
        assert_eq!(updated.matched_count, 1);
        assert_eq!(updated.modified_count, 1);
        assert_eq!(updated.upserted_count, 0);

        let found = store.find_one("books", id).await.unwrap().unwrap();
        assert_eq!(found.get_i32("year").unwrap(), 1966);
        assert_eq!(found.get_str("title").unwrap(), "Dune");

        let deleted = store.delete_one("books", id).await.unwrap();
        assert_eq!(deleted.deleted_count, 1);

        let again = store.delete_one("books", id).await.unwrap();
        assert_eq!(again.deleted_count, 0);
        assert!(store.find_one("books", id).await.unwrap().is_none());
    }
}
