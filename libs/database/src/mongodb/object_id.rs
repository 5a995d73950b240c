//! Conversion between external string identifiers and MongoDB `ObjectId`s.

use mongodb::bson::{Bson, oid::ObjectId};
use serde::{Deserialize, Deserializer, de::Error as _};

/// Failure to turn a path parameter into an `ObjectId`
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum IdError {
    #[error("id is required")]
    Missing,

    #[error("invalid id")]
    Invalid,
}

/// Decodes a 24-character hexadecimal identifier.
pub fn decode(external: &str) -> Result<ObjectId, IdError> {
    if external.is_empty() {
        return Err(IdError::Missing);
    }
    ObjectId::parse_str(external).map_err(|_| IdError::Invalid)
}

/// Lowercase hexadecimal form of `id`.
pub fn encode(id: &ObjectId) -> String {
    id.to_hex()
}

/// Deserializes an `_id` held either as a BSON `ObjectId` or as a string into
/// its hex string form. `null` becomes an empty string.
///
/// ```ignore
/// #[derive(Deserialize)]
/// struct Book {
///     #[serde(rename = "_id", default, deserialize_with = "object_id::deserialize_hex")]
///     id: String,
/// }
/// ```
pub fn deserialize_hex<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    match Bson::deserialize(deserializer)? {
        Bson::ObjectId(oid) => Ok(encode(&oid)),
        Bson::String(s) => Ok(s),
        Bson::Null => Ok(String::new()),
        other => Err(D::Error::custom(format!(
            "expected an ObjectId or string identifier, found {other}"
        ))),
    }
}
