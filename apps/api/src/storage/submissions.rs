//! Record-level persistence on top of a `SubmissionStore`.

use bytes::Bytes;
use chrono::{DateTime, Utc};
use tracing::info;

use crate::models::resume::ResumeRecord;
use crate::storage::naming::{recent_submissions, submission_file_name, RECENT_LIMIT};
use crate::storage::{PutOutcome, StorageError, SubmissionStore};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SavedSubmission {
    pub name: String,
    pub outcome: PutOutcome,
}

/// Writes `record` under the name derived from `at`. An existing object with
/// that name is left as is.
pub async fn save_submission(
    store: &dyn SubmissionStore,
    record: &ResumeRecord,
    at: DateTime<Utc>,
) -> Result<SavedSubmission, StorageError> {
    let name = submission_file_name(at);
    let body = serde_json::to_vec_pretty(record)?;
    let outcome = store.put_if_absent(&name, Bytes::from(body)).await?;

    match outcome {
        PutOutcome::Written => info!("Saved submission {name}"),
        PutOutcome::AlreadyExists => info!("Submission {name} already exists, not overwritten"),
    }
    Ok(SavedSubmission { name, outcome })
}

pub async fn load_submission(
    store: &dyn SubmissionStore,
    name: &str,
) -> Result<ResumeRecord, StorageError> {
    let body = store.get(name).await?;
    serde_json::from_slice(&body).map_err(|source| StorageError::Corrupt {
        name: name.to_string(),
        source,
    })
}

/// The most recent submissions, newest first.
pub async fn list_recent_submissions(
    store: &dyn SubmissionStore,
) -> Result<Vec<String>, StorageError> {
    Ok(recent_submissions(store.list().await?, RECENT_LIMIT))
}
