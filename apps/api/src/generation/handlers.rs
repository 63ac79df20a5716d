//! Axum route handlers for the Generation API.

use axum::{extract::State, Json};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::errors::AppError;
use crate::generation::generator::generate_record;
use crate::record::session::SessionState;
use crate::state::AppState;
use crate::storage::submissions::save_submission;
use crate::storage::PutOutcome;

#[derive(Debug, Deserialize)]
pub struct GenerateRequest {
    pub session: SessionState,
    pub prompt: String,
}

#[derive(Debug, Serialize)]
pub struct GenerateResponse {
    pub session: SessionState,
    /// Name the generated record was stored under, if the save went through.
    pub saved_as: Option<String>,
    /// Set when the record could not be stored. Generation itself still succeeded.
    pub storage_warning: Option<String>,
}

/// POST /api/v1/session/generate
///
/// prompt → completion → parse → save → load into session.
/// A parse or completion failure returns an error and the client's session
/// stays as it was. A save failure is only reported.
pub async fn handle_generate(
    State(state): State<AppState>,
    Json(request): Json<GenerateRequest>,
) -> Result<Json<GenerateResponse>, AppError> {
    let record = generate_record(state.llm.as_ref(), &request.prompt).await?;

    let (saved_as, storage_warning) =
        match save_submission(state.store.as_ref(), &record, Utc::now()).await {
            Ok(saved) if saved.outcome == PutOutcome::Written => (Some(saved.name), None),
            Ok(saved) => {
                let warning = format!("{} already exists and was not overwritten", saved.name);
                (Some(saved.name), Some(warning))
            }
            Err(e) => {
                warn!("Could not save generated record: {e}");
                (None, Some(format!("Generated résumé was not saved: {e}")))
            }
        };

    let mut session = request.session.normalized();
    session.load(record);

    Ok(Json(GenerateResponse {
        session,
        saved_as,
        storage_warning,
    }))
}
