//! Axum route handlers for preview and PDF download.

use axum::{
    extract::State,
    http::header,
    response::{Html, IntoResponse},
    Json,
};
use serde::Deserialize;
use tracing::info;

use crate::errors::AppError;
use crate::record::session::SessionState;
use crate::render::{render_document, TruncationMode};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct RenderRequest {
    pub session: SessionState,
    #[serde(default)]
    pub truncation: TruncationMode,
}

/// Session → HTML. The truncation policy, if any, runs on the visible record
/// before the renderer sees it.
pub fn render_session(session: &SessionState, truncation: TruncationMode) -> String {
    let record = session.to_render_input();
    let record = match truncation.policy() {
        Some(policy) => policy.apply(record),
        None => record,
    };
    render_document(&session.contact, &record)
}

/// POST /api/v1/render/preview
pub async fn handle_preview(Json(request): Json<RenderRequest>) -> Html<String> {
    let session = request.session.normalized();
    Html(render_session(&session, request.truncation))
}

/// POST /api/v1/render/pdf
///
/// Renders and converts in one step. A conversion failure returns an error and
/// no file.
pub async fn handle_pdf(
    State(state): State<AppState>,
    Json(request): Json<RenderRequest>,
) -> Result<impl IntoResponse, AppError> {
    let session = request.session.normalized();
    let html = render_session(&session, request.truncation);
    let pdf = state.converter.convert(&html).await?;

    info!("Serving PDF for '{}' ({} bytes)", session.contact.name, pdf.len());
    Ok((
        [
            (header::CONTENT_TYPE, "application/pdf"),
            (
                header::CONTENT_DISPOSITION,
                "attachment; filename=\"resume.pdf\"",
            ),
        ],
        pdf,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::convert::tests::FakeConverter;
    use crate::generation::generator::tests::CannedCompletion;
    use crate::models::resume::{ExperienceEntry, ResumeRecord};
    use crate::state::tests::{test_profile, test_state};
    use crate::storage::memory::MemoryStore;
    use axum::http::StatusCode;

    fn crowded_session() -> SessionState {
        let mut session = SessionState::new(&test_profile());
        session.load(ResumeRecord {
            key_skills: ["A", "B", "C", "D", "E", "F", "G", "H"]
                .iter()
                .map(|s| s.to_string())
                .collect(),
            work_experience: vec![
                ExperienceEntry {
                    position: "First".to_string(),
                    description: (1..=7).map(|i| format!("duty {i}")).collect(),
                    ..Default::default()
                },
                ExperienceEntry {
                    position: "Second".to_string(),
                    ..Default::default()
                },
            ],
            ..Default::default()
        });
        session
    }

    #[test]
    fn test_truncation_is_opt_in() {
        let session = crowded_session();

        let full = render_session(&session, TruncationMode::None);
        assert!(full.contains("<li>H</li>"));
        assert!(full.contains("<li>duty 7</li>"));

        let trimmed = render_session(&session, TruncationMode::SinglePage);
        assert!(trimmed.contains("<li>G</li>"));
        assert!(!trimmed.contains("<li>H</li>"));
        assert!(trimmed.contains("<li>duty 5</li>"));
        assert!(!trimmed.contains("<li>duty 6</li>"));
    }

    #[test]
    fn test_hidden_experience_slots_are_not_rendered() {
        let mut session = crowded_session();
        session.remove_experience_slot();
        let html = render_session(&session, TruncationMode::None);
        assert!(html.contains("First"));
        assert!(!html.contains("Second"));
    }

    #[test]
    fn test_render_request_defaults_to_no_truncation() {
        let request: RenderRequest = serde_json::from_str(r#"{"session": {}}"#).unwrap();
        assert_eq!(request.truncation, TruncationMode::None);
    }

    #[tokio::test]
    async fn test_pdf_response() {
        let (state, _, _, converter) = test_state(
            CannedCompletion::ok("{}"),
            MemoryStore::default(),
            FakeConverter::new(false),
        );

        let response = handle_pdf(
            State(state),
            Json(RenderRequest {
                session: crowded_session(),
                truncation: TruncationMode::None,
            }),
        )
        .await
        .unwrap()
        .into_response();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers()[header::CONTENT_TYPE],
            "application/pdf"
        );
        let seen = converter.seen.lock().unwrap();
        assert_eq!(seen.len(), 1);
        assert!(seen[0].contains("Jane Roe"));
    }

    #[tokio::test]
    async fn test_conversion_failure_returns_no_file() {
        let (state, ..) = test_state(
            CannedCompletion::ok("{}"),
            MemoryStore::default(),
            FakeConverter::new(true),
        );

        let result = handle_pdf(
            State(state),
            Json(RenderRequest {
                session: crowded_session(),
                truncation: TruncationMode::None,
            }),
        )
        .await;

        match result {
            Err(err @ AppError::Conversion(_)) => {
                assert_eq!(err.into_response().status(), StatusCode::BAD_GATEWAY)
            }
            _ => panic!("expected a conversion error"),
        }
    }
}
