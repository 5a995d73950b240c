use thiserror::Error;

/// Failure of a document store round trip.
///
/// The `Display` text is what clients see in the `error`/`message` fields.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CrudError {
    /// Driver or server error, message verbatim
    #[error("{0}")]
    Store(String),

    /// Find-by-id matched nothing
    #[error("mongo: no documents in result")]
    NoDocuments,

    /// A stored document did not fit the resource schema
    #[error("{0}")]
    Decode(String),

    /// A payload could not be turned into a document
    #[error("{0}")]
    Encode(String),
}

impl From<mongodb::error::Error> for CrudError {
    fn from(err: mongodb::error::Error) -> Self {
        CrudError::Store(err.to_string())
    }
}

impl From<mongodb::bson::de::Error> for CrudError {
    fn from(err: mongodb::bson::de::Error) -> Self {
        CrudError::Decode(err.to_string())
    }
}

impl From<mongodb::bson::ser::Error> for CrudError {
    fn from(err: mongodb::bson::ser::Error) -> Self {
        CrudError::Encode(err.to_string())
    }
}

pub type CrudResult<T> = Result<T, CrudError>;
