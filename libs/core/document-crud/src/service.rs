//! Typed CRUD on top of a [`DocumentStore`].

use std::marker::PhantomData;
use std::sync::Arc;

use mongodb::bson::{self, Document, oid::ObjectId};
use tracing::instrument;

use crate::error::{CrudError, CrudResult};
use crate::resource::{Resource, partial_update_document};
use crate::store::{DeleteOutcome, DocumentStore, InsertOutcome, UpdateOutcome};

/// CRUD operations for one resource, bound to its collection.
pub struct CrudService<R, S: DocumentStore> {
    store: Arc<S>,
    _resource: PhantomData<fn() -> R>,
}

impl<R, S: DocumentStore> Clone for CrudService<R, S> {
    fn clone(&self) -> Self {
        Self {
            store: Arc::clone(&self.store),
            _resource: PhantomData,
        }
    }
}

impl<R: Resource, S: DocumentStore> CrudService<R, S> {
    /// Create a service over a shared store handle
    pub fn new(store: Arc<S>) -> Self {
        Self {
            store,
            _resource: PhantomData,
        }
    }

    pub fn store(&self) -> &Arc<S> {
        &self.store
    }

    fn decode(document: Document) -> CrudResult<R> {
        Ok(bson::from_document(document)?)
    }

    /// Every document in the collection. One undecodable document fails the whole list.
    #[instrument(skip(self), fields(collection = R::COLLECTION))]
    pub async fn list(&self) -> CrudResult<Vec<R>> {
        self.store
            .find_all(R::COLLECTION)
            .await?
            .into_iter()
            .map(Self::decode)
            .collect()
    }

    #[instrument(skip(self), fields(collection = R::COLLECTION, id = %id))]
    pub async fn get(&self, id: ObjectId) -> CrudResult<R> {
        self.store
            .find_one(R::COLLECTION, id)
            .await?
            .ok_or(CrudError::NoDocuments)
            .and_then(Self::decode)
    }

    #[instrument(skip(self, input), fields(collection = R::COLLECTION))]
    pub async fn create(&self, input: &R::Create) -> CrudResult<InsertOutcome> {
        let document = bson::to_document(input)?;
        self.store.insert_one(R::COLLECTION, document).await
    }

    /// Merges the non-zero fields of `input`. An empty `$set` still goes to the
    /// store so the reported counts are the store's own.
    #[instrument(skip(self, input), fields(collection = R::COLLECTION, id = %id))]
    pub async fn update(&self, id: ObjectId, input: &R::Update) -> CrudResult<UpdateOutcome> {
        let set = partial_update_document(input)?;
        self.store.update_one(R::COLLECTION, id, set).await
    }

    #[instrument(skip(self), fields(collection = R::COLLECTION, id = %id))]
    pub async fn delete(&self, id: ObjectId) -> CrudResult<DeleteOutcome> {
        self.store.delete_one(R::COLLECTION, id).await
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::store::MockDocumentStore;
    use core_proc_macros::ApiResource;
    use database::mongodb::object_id;
    use mockall::predicate::*;
    use mongodb::bson::doc;
    use serde::{Deserialize, Serialize};
    use utoipa::ToSchema;

    #[derive(Debug, Clone, Default, PartialEq, ApiResource, Serialize, Deserialize, ToSchema)]
    #[api_resource(envelope = "result")]
    #[serde(rename_all = "camelCase", default)]
    pub struct Book {
        #[serde(rename = "_id", deserialize_with = "object_id::deserialize_hex")]
        pub id: String,
        pub title: String,
        pub author: String,
        pub year: String,
    }

    #[derive(Debug, Default, Serialize, Deserialize, ToSchema)]
    #[serde(rename_all = "camelCase", default)]
    pub struct CreateBook {
        pub title: String,
        pub author: String,
        pub year: String,
    }

    #[derive(Debug, Default, Serialize, Deserialize, ToSchema)]
    #[serde(rename_all = "camelCase")]
    pub struct UpdateBook {
        #[serde(skip_serializing_if = "Option::is_none")]
        pub title: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub author: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub year: Option<String>,
    }

    impl Resource for Book {
        type Create = CreateBook;
        type Update = UpdateBook;
    }

    fn service(store: MockDocumentStore) -> CrudService<Book, MockDocumentStore> {
        CrudService::new(Arc::new(store))
    }

    #[tokio::test]
    async fn test_list_decodes_documents() {
        let oid = ObjectId::new();
        let mut store = MockDocumentStore::new();
        store
            .expect_find_all()
            .with(eq("books"))
            .times(1)
            .returning(move |_| Ok(vec![doc! { "_id": oid, "title": "Dune" }]));

        let books = service(store).list().await.unwrap();
        assert_eq!(books.len(), 1);
        assert_eq!(books[0].id, oid.to_hex());
        assert_eq!(books[0].title, "Dune");
        assert_eq!(books[0].author, "");
    }

    #[tokio::test]
    async fn test_list_fails_on_single_bad_document() {
        let mut store = MockDocumentStore::new();
        store.expect_find_all().returning(|_| {
            Ok(vec![
                doc! { "_id": ObjectId::new(), "title": "Dune" },
                doc! { "_id": ObjectId::new(), "title": 42 },
            ])
        });

        let err = service(store).list().await.unwrap_err();
        assert!(matches!(err, CrudError::Decode(_)));
    }

    #[tokio::test]
    async fn test_get_missing_is_no_documents() {
        let mut store = MockDocumentStore::new();
        store.expect_find_one().returning(|_, _| Ok(None));

        let err = service(store).get(ObjectId::new()).await.unwrap_err();
        assert_eq!(err, CrudError::NoDocuments);
        assert_eq!(err.to_string(), "mongo: no documents in result");
    }

    #[tokio::test]
    async fn test_create_inserts_payload_verbatim() {
        let mut store = MockDocumentStore::new();
        store
            .expect_insert_one()
            .withf(|collection, document| {
                collection == "books"
                    && *document == doc! { "title": "Dune", "author": "", "year": "1965" }
            })
            .times(1)
            .returning(|_, _| {
                Ok(InsertOutcome {
                    inserted_id: "64b7f0c2a1b2c3d4e5f60718".into(),
                })
            });

        let input = CreateBook {
            title: "Dune".into(),
            year: "1965".into(),
            ..Default::default()
        };
        let outcome = service(store).create(&input).await.unwrap();
        assert_eq!(outcome.inserted_id, "64b7f0c2a1b2c3d4e5f60718");
    }

    #[tokio::test]
    async fn test_update_sets_only_supplied_fields() {
        let id = ObjectId::new();
        let mut store = MockDocumentStore::new();
        store
            .expect_update_one()
            .withf(move |collection, target, set| {
                collection == "books" && *target == id && *set == doc! { "author": "Herbert" }
            })
            .times(1)
            .returning(|_, _, _| {
                Ok(UpdateOutcome {
                    matched_count: 1,
                    modified_count: 1,
                    ..Default::default()
                })
            });

        let input = UpdateBook {
            author: Some("Herbert".into()),
            title: Some(String::new()),
            ..Default::default()
        };
        let outcome = service(store).update(id, &input).await.unwrap();
        assert_eq!(outcome.matched_count, 1);
    }

    #[tokio::test]
    async fn test_empty_update_reports_store_counts() {
        let mut store = MockDocumentStore::new();
        store
            .expect_update_one()
            .withf(|collection, _, set| collection == "books" && set.is_empty())
            .times(1)
            .returning(|_, _, _| {
                Ok(UpdateOutcome {
                    matched_count: 1,
                    ..Default::default()
                })
            });

        let outcome = service(store)
            .update(ObjectId::new(), &UpdateBook::default())
            .await
            .unwrap();
        assert_eq!(outcome.matched_count, 1);
        assert_eq!(outcome.modified_count, 0);
    }

    #[tokio::test]
    async fn test_store_error_propagates() {
        let mut store = MockDocumentStore::new();
        store
            .expect_delete_one()
            .returning(|_, _| Err(CrudError::Store("connection reset".into())));

        let err = service(store).delete(ObjectId::new()).await.unwrap_err();
        assert_eq!(err.to_string(), "connection reset");
    }
}
