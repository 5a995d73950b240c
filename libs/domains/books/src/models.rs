use core_proc_macros::ApiResource;
use database::mongodb::object_id;
use document_crud::Resource;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema, ApiResource)]
#[api_resource(envelope = "result")]
#[serde(rename_all = "camelCase", default)]
pub struct Book {
    #[serde(rename = "_id", deserialize_with = "object_id::deserialize_hex")]
    pub id: String,
    #[schema(example = "Things Fall Apart")]
    pub title: String,
    #[schema(example = "Chinua Achebe")]
    pub author: String,
    /// Publication year as free text
    #[schema(example = "1958")]
    pub year: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct CreateBook {
    pub title: String,
    pub author: String,
    pub year: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct UpdateBook {
    pub title: Option<String>,
    pub author: Option<String>,
    pub year: Option<String>,
}

impl Resource for Book {
    type Create = CreateBook;
    type Update = UpdateBook;
}
