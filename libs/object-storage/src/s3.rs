use async_trait::async_trait;
use aws_config::{BehaviorVersion, Region};
use aws_sdk_s3::Client;
use aws_sdk_s3::config::Credentials;
use aws_sdk_s3::error::DisplayErrorContext;
use aws_sdk_s3::primitives::{ByteStream, Length};
use aws_sdk_s3::types::{CompletedMultipartUpload, CompletedPart, ObjectCannedAcl};
use std::ops::Range;
use tracing::{debug, info, instrument, warn};

use crate::{
    ObjectStorage, S3Config, StorageError, StoredObject, UploadBody, UploadRequest, content_type_for,
};

/// Part size for multipart uploads (6 MiB); smaller bodies use a single `PutObject`.
pub const PART_SIZE: usize = 6 * 1024 * 1024;

const DISPOSITION: &str = "inline";

/// Byte ranges of each part when splitting `len` bytes into `part_size` chunks.
pub fn part_ranges(len: usize, part_size: usize) -> Vec<Range<usize>> {
    (0..len)
        .step_by(part_size.max(1))
        .map(|start| start..(start + part_size).min(len))
        .collect()
}

fn sdk_message<E: std::error::Error>(err: E) -> String {
    DisplayErrorContext(err).to_string()
}

/// Stream over `range` of `body`. Spooled bodies are read from disk.
async fn body_stream(body: &UploadBody, range: Range<usize>) -> Result<ByteStream, StorageError> {
    match body {
        UploadBody::Memory(bytes) => Ok(ByteStream::from(bytes.slice(range))),
        UploadBody::Spooled { path, .. } => ByteStream::read_from()
            .path(path)
            .offset(range.start as u64)
            .length(Length::Exact(range.len() as u64))
            .build()
            .await
            .map_err(|e| StorageError::Upload {
                message: sdk_message(e),
            }),
    }
}

/// [`ObjectStorage`] backed by `aws-sdk-s3`.
#[derive(Clone, Debug)]
pub struct S3ObjectStorage {
    client: Client,
    config: S3Config,
}

impl S3ObjectStorage {
    pub fn new(client: Client, config: S3Config) -> Self {
        Self { client, config }
    }

    /// Builds a client from the default AWS credential chain
    /// (`AWS_ACCESS_KEY_ID`/`AWS_SECRET_ACCESS_KEY`, web identity, instance profile).
    pub async fn from_config(config: S3Config) -> Self {
        let sdk_config = aws_config::defaults(BehaviorVersion::latest())
            .region(Region::new(config.region.clone()))
            .load()
            .await;

        let mut builder = aws_sdk_s3::config::Builder::from(&sdk_config);
        if let Some(endpoint) = &config.endpoint_url {
            builder = builder.endpoint_url(endpoint).force_path_style(true);
        }

        info!(bucket = %config.bucket, region = %config.region, "S3 object storage configured");
        Self::new(Client::from_conf(builder.build()), config)
    }

    /// Builds a client with static credentials (MinIO, tests).
    pub fn with_credentials(
        access_key_id: impl Into<String>,
        secret_access_key: impl Into<String>,
        config: S3Config,
    ) -> Self {
        let credentials = Credentials::new(
            access_key_id,
            secret_access_key,
            None, // session token
            None, // expiry
            "static",
        );

        let mut builder = aws_sdk_s3::Config::builder()
            .behavior_version(BehaviorVersion::latest())
            .region(Region::new(config.region.clone()))
            .credentials_provider(credentials);
        if let Some(endpoint) = &config.endpoint_url {
            builder = builder.endpoint_url(endpoint).force_path_style(true);
        }

        Self::new(Client::from_conf(builder.build()), config)
    }

    pub fn client(&self) -> &Client {
        &self.client
    }

    pub fn config(&self) -> &S3Config {
        &self.config
    }

    async fn put_single(
        &self,
        key: &str,
        content_type: &str,
        body: &UploadBody,
    ) -> Result<(), StorageError> {
        let stream = body_stream(body, 0..body.len()).await?;
        self.client
            .put_object()
            .bucket(&self.config.bucket)
            .key(key)
            .body(stream)
            .content_type(content_type)
            .content_disposition(DISPOSITION)
            .acl(ObjectCannedAcl::PublicRead)
            .send()
            .await
            .map_err(|e| StorageError::Upload {
                message: sdk_message(e),
            })?;
        Ok(())
    }

    async fn put_multipart(
        &self,
        key: &str,
        content_type: &str,
        body: &UploadBody,
    ) -> Result<(), StorageError> {
        let created = self
            .client
            .create_multipart_upload()
            .bucket(&self.config.bucket)
            .key(key)
            .content_type(content_type)
            .content_disposition(DISPOSITION)
            .acl(ObjectCannedAcl::PublicRead)
            .send()
            .await
            .map_err(|e| StorageError::Upload {
                message: sdk_message(e),
            })?;

        let upload_id = created
            .upload_id()
            .ok_or_else(|| StorageError::Upload {
                message: "CreateMultipartUpload returned no upload id".to_string(),
            })?
            .to_string();

        let failed = |message: String| {
            warn!(upload_id = %upload_id, key, "Multipart upload failed: {message}");
            StorageError::MultipartUpload {
                upload_id: upload_id.clone(),
                message,
            }
        };

        let mut parts = Vec::new();
        for (index, range) in part_ranges(body.len(), PART_SIZE).into_iter().enumerate() {
            let part_number = index as i32 + 1;
            let stream = body_stream(body, range)
                .await
                .map_err(|e| failed(e.to_string()))?;
            let uploaded = self
                .client
                .upload_part()
                .bucket(&self.config.bucket)
                .key(key)
                .upload_id(&upload_id)
                .part_number(part_number)
                .body(stream)
                .send()
                .await
                .map_err(|e| failed(sdk_message(e)))?;

            debug!(part_number, "Uploaded part");
            parts.push(
                CompletedPart::builder()
                    .set_e_tag(uploaded.e_tag().map(str::to_string))
                    .part_number(part_number)
                    .build(),
            );
        }

        self.client
            .complete_multipart_upload()
            .bucket(&self.config.bucket)
            .key(key)
            .upload_id(&upload_id)
            .multipart_upload(
                CompletedMultipartUpload::builder()
                    .set_parts(Some(parts))
                    .build(),
            )
            .send()
            .await
            .map_err(|e| failed(sdk_message(e)))?;

        Ok(())
    }
}

#[async_trait]
impl ObjectStorage for S3ObjectStorage {
    #[instrument(skip(self, request), fields(filename = %request.filename, size = request.body.len()))]
    async fn upload(&self, request: UploadRequest) -> Result<StoredObject, StorageError> {
        let key = self.config.key_for(&request.filename);
        let content_type = content_type_for(&request.filename);

        if request.body.len() <= PART_SIZE {
            self.put_single(&key, content_type, &request.body).await?;
        } else {
            self.put_multipart(&key, content_type, &request.body).await?;
        }

        let url = self.config.public_url(&key);
        info!(key = %key, url = %url, "Stored object");

        Ok(StoredObject {
            key,
            url,
            content_type,
        })
    }

    #[instrument(skip(self))]
    async fn delete(&self, key: &str) -> Result<(), StorageError> {
        self.client
            .delete_object()
            .bucket(&self.config.bucket)
            .key(key)
            .send()
            .await
            .map_err(|e| StorageError::Delete {
                key: key.to_string(),
                message: sdk_message(e),
            })?;

        info!(key, "Deleted object");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn collect(stream: ByteStream) -> Vec<u8> {
        stream.collect().await.unwrap().into_bytes().to_vec()
    }

    #[tokio::test]
    async fn test_body_stream_from_memory() {
        let body = UploadBody::from(b"0123456789".to_vec());
        assert_eq!(collect(body_stream(&body, 2..5).await.unwrap()).await, b"234");
    }

    #[tokio::test]
    async fn test_body_stream_reads_only_its_range_from_disk() {
        let mut spool = crate::Spool::create().unwrap();
        spool.write(b"01234").await.unwrap();
        spool.write(b"56789").await.unwrap();
        let body = spool.finish().await.unwrap();

        assert_eq!(collect(body_stream(&body, 3..8).await.unwrap()).await, b"34567");
        assert_eq!(
            collect(body_stream(&body, 0..body.len()).await.unwrap()).await,
            b"0123456789"
        );
    }

    #[test]
    fn test_part_ranges_empty() {
        assert!(part_ranges(0, PART_SIZE).is_empty());
    }

    #[test]
    fn test_part_ranges_exact_multiple() {
        assert_eq!(
            part_ranges(2 * PART_SIZE, PART_SIZE),
            vec![0..PART_SIZE, PART_SIZE..2 * PART_SIZE]
        );
    }

    #[test]
    fn test_part_ranges_with_remainder() {
        let ranges = part_ranges(2 * PART_SIZE + 10, PART_SIZE);
        assert_eq!(ranges.len(), 3);
        assert_eq!(ranges[2], 2 * PART_SIZE..2 * PART_SIZE + 10);
        let total: usize = ranges.iter().map(|r| r.len()).sum();
        assert_eq!(total, 2 * PART_SIZE + 10);
    }

    #[test]
    fn test_part_size_is_six_mebibytes() {
        assert_eq!(PART_SIZE, 6_291_456);
    }

    #[test]
    fn test_with_credentials_keeps_config() {
        let config = S3Config::default().with_endpoint("http://localhost:9000");
        let storage = S3ObjectStorage::with_credentials("key", "secret", config.clone());
        assert_eq!(storage.config(), &config);
    }
}
