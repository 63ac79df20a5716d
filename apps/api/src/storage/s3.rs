use async_trait::async_trait;
use aws_sdk_s3::primitives::ByteStream;
use aws_sdk_s3::Client as S3Client;
use bytes::Bytes;
use tracing::{debug, info};

use crate::storage::{PutOutcome, StorageError, SubmissionStore};

/// Submissions stored as objects under `prefix` in one bucket.
pub struct S3SubmissionStore {
    client: S3Client,
    bucket: String,
    prefix: String,
}

impl S3SubmissionStore {
    pub fn new(client: S3Client, bucket: String, prefix: String) -> Self {
        Self {
            client,
            bucket,
            prefix,
        }
    }

    fn key(&self, name: &str) -> String {
        format!("{}{}", self.prefix, name)
    }

    async fn exists(&self, key: &str) -> Result<bool, StorageError> {
        match self
            .client
            .head_object()
            .bucket(&self.bucket)
            .key(key)
            .send()
            .await
        {
            Ok(_) => Ok(true),
            Err(e) => {
                let service_error = e.into_service_error();
                if service_error.is_not_found() {
                    Ok(false)
                } else {
                    Err(StorageError::Backend(format!(
                        "S3 head failed: {service_error}"
                    )))
                }
            }
        }
    }
}

#[async_trait]
impl SubmissionStore for S3SubmissionStore {
    async fn put_if_absent(&self, name: &str, body: Bytes) -> Result<PutOutcome, StorageError> {
        let key = self.key(name);

        // Names have minute resolution; a second save in the same minute is skipped.
        if self.exists(&key).await? {
            debug!("s3://{}/{} already exists, skipping write", self.bucket, key);
            return Ok(PutOutcome::AlreadyExists);
        }

        self.client
            .put_object()
            .bucket(&self.bucket)
            .key(&key)
            .body(ByteStream::from(body))
            .content_type("application/json")
            .send()
            .await
            .map_err(|e| StorageError::Backend(format!("S3 upload failed: {e}")))?;

        info!("Uploaded submission to s3://{}/{}", self.bucket, key);
        Ok(PutOutcome::Written)
    }

    async fn get(&self, name: &str) -> Result<Bytes, StorageError> {
        let key = self.key(name);
        let output = self
            .client
            .get_object()
            .bucket(&self.bucket)
            .key(&key)
            .send()
            .await
            .map_err(|e| {
                let service_error = e.into_service_error();
                if service_error.is_no_such_key() {
                    StorageError::NotFound(name.to_string())
                } else {
                    StorageError::Backend(format!("S3 download failed: {service_error}"))
                }
            })?;

        let data = output
            .body
            .collect()
            .await
            .map_err(|e| StorageError::Backend(format!("S3 body read failed: {e}")))?;
        Ok(data.into_bytes())
    }

    async fn list(&self) -> Result<Vec<String>, StorageError> {
        let mut names = Vec::new();
        let mut continuation: Option<String> = None;

        loop {
            let page = self
                .client
                .list_objects_v2()
                .bucket(&self.bucket)
                .prefix(&self.prefix)
                .set_continuation_token(continuation.take())
                .send()
                .await
                .map_err(|e| StorageError::Backend(format!("S3 list failed: {e}")))?;

            names.extend(
                page.contents()
                    .iter()
                    .filter_map(|obj| obj.key())
                    .filter_map(|key| key.strip_prefix(self.prefix.as_str()))
                    .filter(|name| !name.contains('/'))
                    .map(String::from),
            );

            match page.next_continuation_token() {
                Some(token) if page.is_truncated().unwrap_or(false) => {
                    continuation = Some(token.to_string());
                }
                _ => break,
            }
        }

        Ok(names)
    }
}
