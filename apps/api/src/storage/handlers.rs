//! Axum route handlers for prior submissions.

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::record::session::SessionState;
use crate::state::AppState;
use crate::storage::naming::is_submission_name;
use crate::storage::submissions::{list_recent_submissions, load_submission};

#[derive(Debug, Serialize)]
pub struct SubmissionListResponse {
    pub submissions: Vec<String>,
}

#[derive(Debug, Deserialize)]
pub struct LoadRequest {
    pub session: SessionState,
    pub file_name: String,
}

/// GET /api/v1/submissions
///
/// The ten most recent submissions, newest first.
pub async fn handle_list_submissions(
    State(state): State<AppState>,
) -> Result<Json<SubmissionListResponse>, AppError> {
    let submissions = list_recent_submissions(state.store.as_ref()).await?;
    Ok(Json(SubmissionListResponse { submissions }))
}

/// POST /api/v1/session/load
///
/// Replaces the session's record with a stored submission. On any failure the
/// error is returned and the client keeps its current session.
pub async fn handle_load_submission(
    State(state): State<AppState>,
    Json(request): Json<LoadRequest>,
) -> Result<Json<SessionState>, AppError> {
    if !is_submission_name(&request.file_name) {
        return Err(AppError::Validation(format!(
            "'{}' is not a submission name",
            request.file_name
        )));
    }

    let record = load_submission(state.store.as_ref(), &request.file_name).await?;

    let mut session = request.session.normalized();
    session.load(record);
    tracing::info!(
        "Loaded submission {} ({} experience slots)",
        request.file_name,
        session.exp_count
    );
    Ok(Json(session))
}
