//! Extractors that reject with [`AppError`](crate::errors::AppError).

pub mod json_body;
pub mod object_id_path;

pub use json_body::JsonBody;
pub use object_id_path::ObjectIdPath;
