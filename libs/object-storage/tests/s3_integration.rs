//! Round trips against a MinIO container. Run with `cargo test -- --ignored`.

use object_storage::{ObjectStorage, PART_SIZE, S3Config, S3ObjectStorage, Spool, UploadRequest};
use testcontainers::runners::AsyncRunner;
use testcontainers_modules::minio::MinIO;

const ACCESS_KEY: &str = "minioadmin";
const SECRET_KEY: &str = "minioadmin";

async fn storage(endpoint: String) -> S3ObjectStorage {
    let config = S3Config::new("grain", "us-east-1").with_endpoint(endpoint);
    let storage = S3ObjectStorage::with_credentials(ACCESS_KEY, SECRET_KEY, config);
    storage
        .client()
        .create_bucket()
        .bucket("grain")
        .send()
        .await
        .expect("create bucket");
    storage
}

#[tokio::test]
#[ignore] // Requires Docker
async fn test_single_part_upload_and_delete() {
    let container = MinIO::default().start().await.unwrap();
    let port = container.get_host_port_ipv4(9000).await.unwrap();
    let storage = storage(format!("http://127.0.0.1:{port}")).await;

    let stored = storage
        .upload(UploadRequest::new("wheat.png", vec![7u8; 1024]))
        .await
        .unwrap();
    assert_eq!(stored.key, "grains/giwheat.png");
    assert_eq!(stored.content_type, "image/png");
    assert_eq!(
        stored.url,
        format!("http://127.0.0.1:{port}/grain/grains/giwheat.png")
    );

    let head = storage
        .client()
        .head_object()
        .bucket("grain")
        .key(&stored.key)
        .send()
        .await
        .unwrap();
    assert_eq!(head.content_type(), Some("image/png"));
    assert_eq!(head.content_disposition(), Some("inline"));

    storage.delete(&stored.key).await.unwrap();
}

#[tokio::test]
#[ignore] // Requires Docker
async fn test_multipart_upload_from_spool() {
    let container = MinIO::default().start().await.unwrap();
    let port = container.get_host_port_ipv4(9000).await.unwrap();
    let storage = storage(format!("http://127.0.0.1:{port}")).await;

    let chunk = vec![1u8; 64 * 1024];
    let mut spool = Spool::create().unwrap();
    while spool.len() < PART_SIZE * 2 + 512 {
        spool.write(&chunk).await.unwrap();
    }
    let body = spool.finish().await.unwrap();
    let len = body.len();

    let stored = storage
        .upload(UploadRequest::new("catalog.pdf", body))
        .await
        .unwrap();

    let head = storage
        .client()
        .head_object()
        .bucket("grain")
        .key(&stored.key)
        .send()
        .await
        .unwrap();
    assert_eq!(head.content_length(), Some(len as i64));
    assert_eq!(head.content_type(), Some("application/pdf"));
}
