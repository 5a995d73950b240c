//! Object storage for uploaded product images.
//!
//! ```text
//! ┌──────────────────┐     ┌─────────────────┐     ┌──────────────┐
//! │  ObjectStorage   │ ◄── │ S3ObjectStorage │ ──► │  S3 / MinIO  │
//! │     (trait)      │     │  (aws-sdk-s3)   │     │              │
//! └──────────────────┘     └─────────────────┘     └──────────────┘
//! ```
//!
//! Uploads are stored under `<key_prefix><filename>` with a content type chosen
//! from the file extension, a `public-read` ACL and inline disposition. Bodies
//! larger than [`PART_SIZE`] go through a multipart upload; if it fails after
//! the upload was created, the error carries the upload id.
//!
//! Request bodies can be spooled to a temporary file with [`Spool`]; spooled
//! bodies are streamed from disk one part at a time.
//!
//! ```ignore
//! use object_storage::{ObjectStorage, S3Config, S3ObjectStorage, UploadRequest};
//!
//! let storage = S3ObjectStorage::from_config(S3Config::from_env()?).await;
//! let stored = storage.upload(UploadRequest::new("wheat.png", bytes)).await?;
//! println!("{}", stored.url);
//! ```

pub mod config;
pub mod content_type;
pub mod error;
pub mod s3;
pub mod spool;
pub mod storage;

pub use config::S3Config;
pub use content_type::content_type_for;
pub use error::StorageError;
pub use s3::{PART_SIZE, S3ObjectStorage, part_ranges};
pub use spool::Spool;
pub use storage::{ObjectStorage, StoredObject, UploadBody, UploadRequest};

#[cfg(any(test, feature = "mocks"))]
pub use storage::MockObjectStorage;
