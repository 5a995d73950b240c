use core_proc_macros::ApiResource;
use database::mongodb::object_id;
use document_crud::{InsertOutcome, Resource};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A product offered by a seller
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema, ApiResource)]
#[api_resource(envelope = "result")]
#[serde(rename_all = "camelCase", default)]
pub struct Product {
    #[serde(rename = "_id", deserialize_with = "object_id::deserialize_hex")]
    #[schema(example = "64b7f0c2a1b2c3d4e5f60718")]
    pub id: String,
    #[schema(example = "Yellow maize")]
    pub name: String,
    /// Public URL of the uploaded image
    #[schema(example = "https://grain.s3.us-east-1.amazonaws.com/grains/gimaize.png")]
    pub image: String,
    pub description: String,
    #[schema(example = 320.5)]
    pub price: f64,
    #[schema(example = 10)]
    pub min_quantity: i64,
    pub seller_id: String,
}

/// Document written on creation; `image` is filled in from the upload
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct CreateProduct {
    pub name: String,
    pub image: String,
    pub description: String,
    pub price: f64,
    pub min_quantity: i64,
    pub seller_id: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct UpdateProduct {
    pub name: Option<String>,
    pub image: Option<String>,
    pub description: Option<String>,
    pub price: Option<f64>,
    pub min_quantity: Option<i64>,
    pub seller_id: Option<String>,
}

impl Resource for Product {
    type Create = CreateProduct;
    type Update = UpdateProduct;
}

/// `multipart/form-data` body accepted by product creation
#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProductUploadForm {
    name: Option<String>,
    /// Image file; its name becomes part of the object key
    #[schema(value_type = String, format = Binary)]
    image: Vec<u8>,
    description: Option<String>,
    price: Option<f64>,
    min_quantity: Option<i64>,
    seller_id: Option<String>,
}

/// Body of a successful product creation
#[derive(Serialize, ToSchema)]
pub struct ProductCreatedResponse {
    result: InsertOutcome,
    #[schema(example = "Product created successfully")]
    msg: String,
}
