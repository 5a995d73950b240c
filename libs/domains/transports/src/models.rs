use core_proc_macros::ApiResource;
use database::mongodb::object_id;
use document_crud::Resource;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A carrier offering delivery services
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema, ApiResource)]
#[api_resource(envelope = "result")]
#[serde(rename_all = "camelCase", default)]
pub struct Transport {
    /// Store-assigned identifier (24 hex characters)
    #[serde(rename = "_id", deserialize_with = "object_id::deserialize_hex")]
    #[schema(example = "64b7f0c2a1b2c3d4e5f60718")]
    pub id: String,
    #[schema(example = "Northern Haulage")]
    pub name: String,
    /// Logo URL
    pub logo: String,
    pub phone: String,
    pub services: Vec<String>,
    pub price: f64,
    pub min_quantity: i64,
    pub address: String,
    pub available: bool,
    pub rating: f64,
}

/// Payload for registering a transport; missing fields are stored as zero values
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct CreateTransport {
    pub name: String,
    pub logo: String,
    pub phone: String,
    pub services: Vec<String>,
    pub price: f64,
    pub min_quantity: i64,
    pub address: String,
    pub available: bool,
    pub rating: f64,
}

/// Fields to change; absent and zero-valued fields are left untouched
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct UpdateTransport {
    pub name: Option<String>,
    pub logo: Option<String>,
    pub phone: Option<String>,
    pub services: Option<Vec<String>>,
    pub price: Option<f64>,
    pub min_quantity: Option<i64>,
    pub address: Option<String>,
    pub available: Option<bool>,
    pub rating: Option<f64>,
}

impl Resource for Transport {
    type Create = CreateTransport;
    type Update = UpdateTransport;
}
