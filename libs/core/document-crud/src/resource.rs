use core_proc_macros::ApiResource;
use mongodb::bson::{self, Bson, Document};
use serde::{Serialize, de::DeserializeOwned};
use utoipa::ToSchema;

use crate::error::CrudResult;

/// A document collection served over HTTP.
///
/// `Self` is the full stored representation; `Create` is inserted as-is and
/// `Update` is merged field by field.
pub trait Resource: ApiResource + DeserializeOwned + Serialize + ToSchema + Send + Sync + 'static {
    type Create: DeserializeOwned + Serialize + ToSchema + Send + Sync + 'static;
    type Update: DeserializeOwned + Serialize + ToSchema + Send + Sync + 'static;
}

/// Whether `value` is the zero value of its type.
///
/// Zero values never reach a `$set`, so `false`, `0` and `""` cannot be
/// written through a partial update.
pub fn is_zero(value: &Bson) -> bool {
    match value {
        Bson::Null | Bson::Undefined => true,
        Bson::String(s) => s.is_empty(),
        Bson::Int32(n) => *n == 0,
        Bson::Int64(n) => *n == 0,
        Bson::Double(n) => *n == 0.0,
        Bson::Boolean(b) => !b,
        Bson::Array(items) => items.is_empty(),
        Bson::Document(doc) => doc.is_empty(),
        _ => false,
    }
}

/// Serializes a partial update into the body of a `$set`, keeping only
/// non-zero fields. `_id` is never part of the result.
pub fn partial_update_document<T: Serialize>(update: &T) -> CrudResult<Document> {
    let document = bson::to_document(update)?;
    Ok(document
        .into_iter()
        .filter(|(key, value)| key != "_id" && !is_zero(value))
        .collect())
}
