use std::io::ErrorKind;
use std::path::PathBuf;

use async_trait::async_trait;
use bytes::Bytes;
use tokio::io::AsyncWriteExt;
use tracing::{debug, info};

use crate::storage::{PutOutcome, StorageError, SubmissionStore};

/// Submissions kept as files in a single directory.
pub struct LocalSubmissionStore {
    dir: PathBuf,
}

impl LocalSubmissionStore {
    /// Creates the directory if it does not exist yet.
    pub async fn open(dir: impl Into<PathBuf>) -> Result<Self, StorageError> {
        let dir = dir.into();
        tokio::fs::create_dir_all(&dir).await?;
        info!("Local submission store at {}", dir.display());
        Ok(Self { dir })
    }
}

#[async_trait]
impl SubmissionStore for LocalSubmissionStore {
    async fn put_if_absent(&self, name: &str, body: Bytes) -> Result<PutOutcome, StorageError> {
        let path = self.dir.join(name);
        let file = tokio::fs::OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(&path)
            .await;

        let mut file = match file {
            Ok(f) => f,
            Err(e) if e.kind() == ErrorKind::AlreadyExists => {
                debug!("{} already exists, skipping write", path.display());
                return Ok(PutOutcome::AlreadyExists);
            }
            Err(e) => return Err(e.into()),
        };

        file.write_all(&body).await?;
        file.flush().await?;
        Ok(PutOutcome::Written)
    }

    async fn get(&self, name: &str) -> Result<Bytes, StorageError> {
        match tokio::fs::read(self.dir.join(name)).await {
            Ok(data) => Ok(Bytes::from(data)),
            Err(e) if e.kind() == ErrorKind::NotFound => {
                Err(StorageError::NotFound(name.to_string()))
            }
            Err(e) => Err(e.into()),
        }
    }

    async fn list(&self) -> Result<Vec<String>, StorageError> {
        let mut names = Vec::new();
        let mut entries = tokio::fs::read_dir(&self.dir).await?;
        while let Some(entry) = entries.next_entry().await? {
            if !entry.file_type().await?.is_file() {
                continue;
            }
            if let Some(name) = entry.file_name().to_str() {
                names.push(name.to_string());
            }
        }
        Ok(names)
    }
}
