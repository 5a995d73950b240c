use core_proc_macros::ApiResource;
use database::mongodb::object_id;
use document_crud::Resource;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A buyer's request to ship a quantity of a product with a given transport
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema, ApiResource)]
#[api_resource(collection = "enquiries", envelope = "result")]
#[serde(rename_all = "camelCase", default)]
pub struct Enquiry {
    /// Read from `_id`, rendered as `id`
    #[serde(alias = "_id", deserialize_with = "object_id::deserialize_hex")]
    #[schema(example = "64b7f0c2a1b2c3d4e5f60718")]
    pub id: String,
    pub transport_id: String,
    pub product_id: String,
    #[schema(example = 40)]
    pub quantity: i64,
    pub delivery_address: String,
    /// Free-form date as entered by the buyer
    #[schema(example = "2024-06-01")]
    pub date_of_delivery: String,
    #[schema(example = "pending")]
    pub status: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct CreateEnquiry {
    pub transport_id: String,
    pub product_id: String,
    pub quantity: i64,
    pub delivery_address: String,
    pub date_of_delivery: String,
    pub status: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct UpdateEnquiry {
    pub transport_id: Option<String>,
    pub product_id: Option<String>,
    pub quantity: Option<i64>,
    pub delivery_address: Option<String>,
    pub date_of_delivery: Option<String>,
    pub status: Option<String>,
}

impl Resource for Enquiry {
    type Create = CreateEnquiry;
    type Update = UpdateEnquiry;
}
