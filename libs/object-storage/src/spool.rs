//! Temporary on-disk copy of an incoming upload.

use tempfile::{NamedTempFile, TempPath};
use tokio::fs::File;
use tokio::io::AsyncWriteExt;

use crate::{StorageError, UploadBody};

/// Collects an upload chunk by chunk into a temporary file so the whole body
/// never has to sit in memory.
///
/// ```ignore
/// let mut spool = Spool::create()?;
/// while let Some(chunk) = field.chunk().await? {
///     spool.write(&chunk).await?;
/// }
/// let body = spool.finish().await?;
/// ```
pub struct Spool {
    file: File,
    path: TempPath,
    len: usize,
}

impl Spool {
    pub fn create() -> Result<Self, StorageError> {
        let (file, path) = NamedTempFile::new()?.into_parts();
        Ok(Self {
            file: File::from_std(file),
            path,
            len: 0,
        })
    }

    pub async fn write(&mut self, chunk: &[u8]) -> Result<(), StorageError> {
        self.file.write_all(chunk).await?;
        self.len += chunk.len();
        Ok(())
    }

    /// Bytes written so far
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub async fn finish(mut self) -> Result<UploadBody, StorageError> {
        self.file.flush().await?;
        self.file.sync_all().await?;
        Ok(UploadBody::Spooled {
            path: self.path,
            len: self.len,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_spooled_body_lands_on_disk() {
        let mut spool = Spool::create().unwrap();
        spool.write(b"\x89PNG").await.unwrap();
        spool.write(b"\r\n").await.unwrap();
        assert_eq!(spool.len(), 6);

        let body = spool.finish().await.unwrap();
        assert_eq!(body.len(), 6);
        let UploadBody::Spooled { path, .. } = &body else {
            panic!("expected a spooled body");
        };
        assert_eq!(std::fs::read(path).unwrap(), b"\x89PNG\r\n");
    }

    #[tokio::test]
    async fn test_temporary_file_removed_on_drop() {
        let mut spool = Spool::create().unwrap();
        spool.write(b"maize").await.unwrap();
        let body = spool.finish().await.unwrap();
        let UploadBody::Spooled { path, .. } = &body else {
            panic!("expected a spooled body");
        };
        let location = path.to_path_buf();
        assert!(location.exists());

        drop(body);
        assert!(!location.exists());
    }
}
