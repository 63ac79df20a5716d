//! Axum route handlers for session editing.
//!
//! Each handler takes the client's session, applies one operation and returns
//! the new session. None of them touch storage or the model.

use axum::{extract::State, Json};
use serde::Deserialize;

use crate::errors::AppError;
use crate::record::fields::FieldPath;
use crate::record::session::SessionState;
use crate::record::slots::{editor_view, EditorView};
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct SessionRequest {
    pub session: SessionState,
}

#[derive(Debug, Deserialize)]
pub struct SetFieldRequest {
    pub session: SessionState,
    pub path: FieldPath,
    pub value: String,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/session
///
/// New session seeded from the configured profile.
pub async fn handle_new_session(State(state): State<AppState>) -> Json<SessionState> {
    Json(SessionState::new(&state.profile))
}

/// POST /api/v1/session/field
pub async fn handle_set_field(
    Json(request): Json<SetFieldRequest>,
) -> Result<Json<SessionState>, AppError> {
    let mut session = request.session.normalized();
    session.set_field(request.path, request.value)?;
    Ok(Json(session))
}

/// POST /api/v1/session/experience/add
pub async fn handle_add_experience(Json(request): Json<SessionRequest>) -> Json<SessionState> {
    let mut session = request.session.normalized();
    session.add_experience_slot();
    Json(session)
}

/// POST /api/v1/session/experience/remove
pub async fn handle_remove_experience(Json(request): Json<SessionRequest>) -> Json<SessionState> {
    let mut session = request.session.normalized();
    session.remove_experience_slot();
    Json(session)
}

/// POST /api/v1/session/slots
///
/// The slot layout an editor should draw for this session.
pub async fn handle_slots(Json(request): Json<SessionRequest>) -> Json<EditorView> {
    Json(editor_view(&request.session.normalized()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::profile::Profile;
    use crate::record::fields::ReferenceField;

    fn session() -> SessionState {
        SessionState::new(&Profile::default())
    }

    #[tokio::test]
    async fn test_remove_at_floor_keeps_one() {
        let Json(session) = handle_remove_experience(Json(SessionRequest {
            session: session(),
        }))
        .await;
        assert_eq!(session.exp_count, 1);
    }

    #[tokio::test]
    async fn test_add_then_slots() {
        let Json(session) = handle_add_experience(Json(SessionRequest {
            session: session(),
        }))
        .await;
        assert_eq!(session.exp_count, 2);

        let Json(view) = handle_slots(Json(SessionRequest { session })).await;
        assert_eq!(view.work_experience.len(), 2);
    }

    #[tokio::test]
    async fn test_set_field_keeps_blank_reference_rows_editable() {
        let Json(session) = handle_set_field(Json(SetFieldRequest {
            session: session(),
            path: FieldPath::Reference {
                index: 1,
                field: ReferenceField::Name,
            },
            value: "Ada".to_string(),
        }))
        .await
        .unwrap();

        assert_eq!(session.record.reference_details.len(), 2);
        assert!(session.record.reference_details[0].is_blank());
        assert_eq!(session.record.compact_references().len(), 1);
    }

    #[tokio::test]
    async fn test_set_field_out_of_range_is_validation_error() {
        let result = handle_set_field(Json(SetFieldRequest {
            session: session(),
            path: FieldPath::KeySkill { index: 1_000 },
            value: "x".to_string(),
        }))
        .await;
        assert!(matches!(result, Err(AppError::Validation(_))));
    }
}
