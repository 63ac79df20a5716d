// Prior submissions: generated records persisted as timestamp-named JSON files.
// All backends implement SubmissionStore; nothing else talks to S3 or the disk.

pub mod handlers;
pub mod local;
#[cfg(test)]
pub mod memory;
pub mod naming;
pub mod s3;
pub mod submissions;

use async_trait::async_trait;
use bytes::Bytes;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("submission not found: {0}")]
    NotFound(String),

    #[error("storage backend error: {0}")]
    Backend(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("submission {name} is not a valid résumé record: {source}")]
    Corrupt {
        name: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to serialize record: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Result of a create-only write.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PutOutcome {
    Written,
    /// An object with this name already exists; nothing was written.
    AlreadyExists,
}

/// Flat namespace of submission objects. Writes never overwrite.
#[async_trait]
pub trait SubmissionStore: Send + Sync {
    async fn put_if_absent(&self, name: &str, body: Bytes) -> Result<PutOutcome, StorageError>;

    async fn get(&self, name: &str) -> Result<Bytes, StorageError>;

    /// Every object name in the store, in no particular order.
    async fn list(&self) -> Result<Vec<String>, StorageError>;
}
