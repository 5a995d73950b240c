use core_proc_macros::ApiResource;
use database::mongodb::object_id;
use document_crud::Resource;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A message submitted through the contact form
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema, ApiResource)]
#[api_resource(collection = "query", tag = "Queries")]
#[serde(rename_all = "camelCase", default)]
pub struct Query {
    /// Read from `_id`, rendered as `id`
    #[serde(alias = "_id", deserialize_with = "object_id::deserialize_hex")]
    pub id: String,
    pub name: String,
    #[schema(example = "buyer@example.com")]
    pub email: String,
    pub phone: String,
    pub message: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct CreateQuery {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub message: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct UpdateQuery {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub message: Option<String>,
}

impl Resource for Query {
    type Create = CreateQuery;
    type Update = UpdateQuery;
}
