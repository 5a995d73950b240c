use async_trait::async_trait;
use mongodb::bson::{Document, oid::ObjectId};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::error::CrudResult;

/// Result of an insert, keyed the way existing clients expect
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct InsertOutcome {
    #[serde(rename = "InsertedID")]
    pub inserted_id: String,
}

/// Result of a partial update
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "PascalCase")]
pub struct UpdateOutcome {
    pub matched_count: u64,
    pub modified_count: u64,
    pub upserted_count: u64,
    #[serde(rename = "UpsertedID")]
    pub upserted_id: Option<String>,
}

/// Result of a delete
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "PascalCase")]
pub struct DeleteOutcome {
    pub deleted_count: u64,
}

/// Collection-addressed document operations.
///
/// Every method is a single round trip; nothing is retried.
#[cfg_attr(any(test, feature = "mocks"), mockall::automock)]
#[async_trait]
pub trait DocumentStore: Send + Sync {
    async fn find_all(&self, collection: &str) -> CrudResult<Vec<Document>>;

    async fn find_one(&self, collection: &str, id: ObjectId) -> CrudResult<Option<Document>>;

    /// Inserts `document`; the store assigns `_id`.
    async fn insert_one(&self, collection: &str, document: Document) -> CrudResult<InsertOutcome>;

    /// Applies `{"$set": set}` to the document with `_id == id`.
    async fn update_one(
        &self,
        collection: &str,
        id: ObjectId,
        set: Document,
    ) -> CrudResult<UpdateOutcome>;

    async fn delete_one(&self, collection: &str, id: ObjectId) -> CrudResult<DeleteOutcome>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_outcome_wire_names() {
        let insert = InsertOutcome {
            inserted_id: "64b7f0c2a1b2c3d4e5f60718".into(),
        };
        assert_eq!(
            serde_json::to_value(insert).unwrap(),
            json!({"InsertedID": "64b7f0c2a1b2c3d4e5f60718"})
        );

        let update = UpdateOutcome {
            matched_count: 1,
            modified_count: 1,
            ..Default::default()
        };
        assert_eq!(
            serde_json::to_value(update).unwrap(),
            json!({"MatchedCount": 1, "ModifiedCount": 1, "UpsertedCount": 0, "UpsertedID": null})
        );

        assert_eq!(
            serde_json::to_value(DeleteOutcome { deleted_count: 0 }).unwrap(),
            json!({"DeletedCount": 0})
        );
    }
}
