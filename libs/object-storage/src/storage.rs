use async_trait::async_trait;
use bytes::Bytes;
use tempfile::TempPath;

use crate::StorageError;

/// Contents of an upload.
#[derive(Debug)]
pub enum UploadBody {
    Memory(Bytes),
    /// Temporary file written by [`crate::Spool`], removed when dropped
    Spooled { path: TempPath, len: usize },
}

impl UploadBody {
    pub fn len(&self) -> usize {
        match self {
            UploadBody::Memory(bytes) => bytes.len(),
            UploadBody::Spooled { len, .. } => *len,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl From<Bytes> for UploadBody {
    fn from(bytes: Bytes) -> Self {
        UploadBody::Memory(bytes)
    }
}

impl From<Vec<u8>> for UploadBody {
    fn from(bytes: Vec<u8>) -> Self {
        UploadBody::Memory(bytes.into())
    }
}

impl From<&'static [u8]> for UploadBody {
    fn from(bytes: &'static [u8]) -> Self {
        UploadBody::Memory(Bytes::from_static(bytes))
    }
}

/// A file received from a client.
#[derive(Debug)]
pub struct UploadRequest {
    pub filename: String,
    pub body: UploadBody,
}

impl UploadRequest {
    pub fn new(filename: impl Into<String>, body: impl Into<UploadBody>) -> Self {
        Self {
            filename: filename.into(),
            body: body.into(),
        }
    }
}

/// Location of a successfully stored object.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredObject {
    pub key: String,
    /// Publicly reachable URL of the object
    pub url: String,
    pub content_type: &'static str,
}

#[cfg_attr(any(test, feature = "mocks"), mockall::automock)]
#[async_trait]
pub trait ObjectStorage: Send + Sync {
    /// Stores `request` and returns where it landed.
    async fn upload(&self, request: UploadRequest) -> Result<StoredObject, StorageError>;

    /// Removes the object stored under `key`.
    async fn delete(&self, key: &str) -> Result<(), StorageError>;
}
