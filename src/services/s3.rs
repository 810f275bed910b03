use crate::config::{app_config, aws_config};
use async_trait::async_trait;
use aws_sdk_s3 as s3;
use s3::{presigning::PresigningConfig, primitives::ByteStream, Client};
use std::time::Duration;
use thiserror::Error;
use url::Url;

/// folder uploaded drivers license images are stored under
pub const DRIVERS_LICENSES_FOLDER: &str = "drivers_licenses";

#[derive(Error, Debug)]
pub enum ObjectStoreError {
    #[error("failed to upload object: {0}")]
    Upload(String),

    #[error("failed to create signed url for object: {0}")]
    SignedUrl(String),

    #[error("failed to delete object: {0}")]
    Delete(String),
}

/// a key to store uploaded objects, in the format: `folder`/`filename`
#[derive(Clone)]
pub struct ObjectKey {
    /// the "folder" a file using this key will be stored into
    pub folder: String,

    /// filename with extension, eg: `b4a1...e2.jpeg`
    pub filename: String,
}

impl From<ObjectKey> for String {
    fn from(v: ObjectKey) -> Self {
        format!("{}/{}", v.folder, v.filename)
    }
}

/// remote storage for uploaded documents, behind a trait so flows that
/// upload can be exercised without AWS credentials
#[async_trait]
pub trait ObjectStore: Send + Sync {
    async fn upload(&self, key: String, bytes: Vec<u8>) -> Result<(), ObjectStoreError>;

    /// time limited read url for a stored object
    async fn signed_url(&self, key: String, expires_in: Duration) -> Result<Url, ObjectStoreError>;

    async fn delete(&self, key: String) -> Result<(), ObjectStoreError>;
}

#[derive(Clone)]
pub struct S3 {
    client: Client,
    uploads_bucket: String,
}

impl S3 {
    pub async fn new() -> Self {
        Self {
            client: s3::Client::new(aws_config().await),
            uploads_bucket: app_config().aws_uploads_bucket_name.clone(),
        }
    }
}

#[async_trait]
impl ObjectStore for S3 {
    async fn upload(&self, key: String, bytes: Vec<u8>) -> Result<(), ObjectStoreError> {
        let result = self
            .client
            .put_object()
            .bucket(&self.uploads_bucket)
            .key(key.clone())
            .body(ByteStream::from(bytes))
            .send()
            .await;

        if result.is_err() {
            tracing::error!("[S3] failed to upload S3 object: {}", key);
            return Err(ObjectStoreError::Upload(key));
        }

        Ok(())
    }

    async fn signed_url(&self, key: String, expires_in: Duration) -> Result<Url, ObjectStoreError> {
        let presigning = PresigningConfig::expires_in(expires_in)
            .map_err(|_| ObjectStoreError::SignedUrl(key.clone()))?;

        let result = self
            .client
            .get_object()
            .bucket(&self.uploads_bucket)
            .key(key.clone())
            .presigned(presigning)
            .await;

        match result {
            Ok(request) => Url::parse(request.uri()).map_err(|_| ObjectStoreError::SignedUrl(key)),
            Err(_) => {
                tracing::error!("[S3] failed to presign S3 object: {}", key);
                Err(ObjectStoreError::SignedUrl(key))
            }
        }
    }

    async fn delete(&self, key: String) -> Result<(), ObjectStoreError> {
        let result = self
            .client
            .delete_object()
            .bucket(&self.uploads_bucket)
            .key(key.clone())
            .send()
            .await;

        if result.is_err() {
            tracing::error!("[S3] failed to delete S3 object: {}", key);
            return Err(ObjectStoreError::Delete(key));
        }

        Ok(())
    }
}
