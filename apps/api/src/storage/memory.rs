//! In-memory store for tests.

use std::collections::BTreeMap;
use std::sync::Mutex;

use async_trait::async_trait;
use bytes::Bytes;

use crate::storage::{PutOutcome, StorageError, SubmissionStore};

#[derive(Default)]
pub struct MemoryStore {
    objects: Mutex<BTreeMap<String, Bytes>>,
    /// When set, every call fails with a backend error.
    pub fail: bool,
}

impl MemoryStore {
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Default::default()
        }
    }

    pub fn insert(&self, name: &str, body: &str) {
        self.objects
            .lock()
            .unwrap()
            .insert(name.to_string(), Bytes::from(body.to_string()));
    }

    pub fn len(&self) -> usize {
        self.objects.lock().unwrap().len()
    }

    fn check(&self) -> Result<(), StorageError> {
        if self.fail {
            Err(StorageError::Backend("store offline".to_string()))
        } else {
            Ok(())
        }
    }
}

#[async_trait]
impl SubmissionStore for MemoryStore {
    async fn put_if_absent(&self, name: &str, body: Bytes) -> Result<PutOutcome, StorageError> {
        self.check()?;
        let mut objects = self.objects.lock().unwrap();
        if objects.contains_key(name) {
            return Ok(PutOutcome::AlreadyExists);
        }
        objects.insert(name.to_string(), body);
        Ok(PutOutcome::Written)
    }

    async fn get(&self, name: &str) -> Result<Bytes, StorageError> {
        self.check()?;
        self.objects
            .lock()
            .unwrap()
            .get(name)
            .cloned()
            .ok_or_else(|| StorageError::NotFound(name.to_string()))
    }

    async fn list(&self) -> Result<Vec<String>, StorageError> {
        self.check()?;
        Ok(self.objects.lock().unwrap().keys().cloned().collect())
    }
}
