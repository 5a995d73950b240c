use std::sync::Arc;

use axum::Router;
use document_crud::{CrudOperation, CrudService, DocumentStore, crud_openapi};

use crate::models::Enquiry;

/// `/enquiries` routes backed by `store`
pub fn router<S: DocumentStore + 'static>(store: Arc<S>) -> Router {
    document_crud::router(CrudService::<Enquiry, S>::new(store))
}

pub fn openapi() -> utoipa::openapi::OpenApi {
    crud_openapi::<Enquiry>(CrudOperation::ALL)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        body::Body,
        http::{Request, StatusCode},
    };
    use document_crud::{MockDocumentStore, UpdateOutcome};
    use http_body_util::BodyExt;
    use mongodb::bson::{doc, oid::ObjectId};
    use serde_json::{Value, json};
    use tower::ServiceExt;

    const ID: &str = "64b7f0c2a1b2c3d4e5f60718";

    async fn put(store: MockDocumentStore, uri: &str, body: &'static str) -> (StatusCode, Value) {
        let response = router(Arc::new(store))
            .oneshot(
                Request::put(uri)
                    .header("content-type", "application/json")
                    .body(Body::from(body))
                    .unwrap(),
            )
            .await
            .unwrap();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn test_status_update_sets_only_status() {
        let expected_id = ObjectId::parse_str(ID).unwrap();
        let mut store = MockDocumentStore::new();
        store
            .expect_update_one()
            .withf(move |collection, id, set| {
                collection == "enquiries" && *id == expected_id && *set == doc! { "status": "shipped" }
            })
            .times(1)
            .returning(|_, _, _| {
                Ok(UpdateOutcome {
                    matched_count: 1,
                    modified_count: 1,
                    ..Default::default()
                })
            });

        let (status, body) = put(store, &format!("/enquiries/{ID}"), r#"{"status":"shipped"}"#).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["msg"], "Enquiry updated successfully");
        assert_eq!(body["result"]["ModifiedCount"], 1);
    }

    #[tokio::test]
    async fn test_update_without_changes_sends_empty_set() {
        let mut store = MockDocumentStore::new();
        store
            .expect_update_one()
            .withf(|_, _, set| set.is_empty())
            .times(1)
            .returning(|_, _, _| {
                Ok(UpdateOutcome {
                    matched_count: 1,
                    ..Default::default()
                })
            });

        let (status, body) = put(store, &format!("/enquiries/{ID}"), r#"{"quantity":0,"status":""}"#).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            body["result"],
            json!({"MatchedCount": 1, "ModifiedCount": 0, "UpsertedCount": 0, "UpsertedID": null})
        );
    }

    #[tokio::test]
    async fn test_get_renders_id_without_underscore() {
        let oid = ObjectId::parse_str(ID).unwrap();
        let mut store = MockDocumentStore::new();
        store.expect_find_one().times(1).returning(move |_, _| {
            Ok(Some(doc! {
                "_id": oid,
                "transportId": "t-1",
                "quantity": 40_i64,
                "status": "pending",
            }))
        });

        let response = router(Arc::new(store))
            .oneshot(Request::get(format!("/enquiries/{ID}")).body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let body: Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body["data"]["id"], ID);
        assert_eq!(body["data"]["transportId"], "t-1");
        assert_eq!(body["data"]["quantity"], 40);
        assert!(body["data"].get("_id").is_none());
    }

    #[tokio::test]
    async fn test_update_mistyped_quantity() {
        let mut store = MockDocumentStore::new();
        store.expect_update_one().times(0);

        let (status, body) = put(store, &format!("/enquiries/{ID}"), r#"{"quantity":"many"}"#).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, json!({"error": "Invalid body"}));
    }
}
