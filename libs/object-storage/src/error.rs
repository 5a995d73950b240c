use thiserror::Error;

/// Object storage failure
#[derive(Debug, Error)]
pub enum StorageError {
    /// Single-request upload failed
    #[error("{message}")]
    Upload { message: String },

    /// Multipart upload failed after it was created. The upload is left as is;
    /// `upload_id` identifies it for external cleanup.
    #[error("multipart upload {upload_id} failed: {message}")]
    MultipartUpload { upload_id: String, message: String },

    #[error("failed to delete {key}: {message}")]
    Delete { key: String, message: String },

    /// Writing or reading the local copy of an upload failed
    #[error("failed to buffer upload: {0}")]
    Spool(#[from] std::io::Error),
}

impl StorageError {
    /// Id of the in-flight multipart upload, when one was created.
    pub fn upload_id(&self) -> Option<&str> {
        match self {
            StorageError::MultipartUpload { upload_id, .. } => Some(upload_id),
            _ => None,
        }
    }
}
