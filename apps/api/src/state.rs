use std::sync::Arc;

use crate::convert::DocumentConverter;
use crate::llm_client::TextCompletion;
use crate::models::profile::Profile;
use crate::storage::SubmissionStore;

/// Shared application state injected into all route handlers via Axum extractors.
///
/// Holds only immutable configuration and collaborators. Form state lives in
/// the client-owned `SessionState`, never here.
#[derive(Clone)]
pub struct AppState {
    /// Completion collaborator. Default: `LlmClient`.
    pub llm: Arc<dyn TextCompletion>,
    /// Prior submissions. S3 or a local directory, per `STORAGE_BACKEND`.
    pub store: Arc<dyn SubmissionStore>,
    /// HTML → PDF. Default: `CommandConverter` running `PDF_CONVERTER_BIN`.
    pub converter: Arc<dyn DocumentConverter>,
    /// Contact block and education list every new session is seeded from.
    pub profile: Arc<Profile>,
}

#[cfg(test)]
pub mod tests {
    use super::*;
    use crate::convert::tests::FakeConverter;
    use crate::generation::generator::tests::CannedCompletion;
    use crate::models::resume::{ContactInfo, EducationEntry};
    use crate::storage::memory::MemoryStore;

    pub fn test_profile() -> Profile {
        Profile {
            contact: ContactInfo {
                name: "Jane Roe".to_string(),
                phone: "555-0100".to_string(),
                email: "jane@example.com".to_string(),
                address: "1 Main St".to_string(),
            },
            education: vec![EducationEntry {
                course: "BSc Computing".to_string(),
                institute: "State University".to_string(),
                from_date: "2014".to_string(),
                to_date: "2018".to_string(),
                location: None,
            }],
        }
    }

    /// State wired to in-memory fakes. Returns the concrete fakes too so tests
    /// can inspect them.
    pub fn test_state(
        llm: CannedCompletion,
        store: MemoryStore,
        converter: FakeConverter,
    ) -> (AppState, Arc<CannedCompletion>, Arc<MemoryStore>, Arc<FakeConverter>) {
        let llm = Arc::new(llm);
        let store = Arc::new(store);
        let converter = Arc::new(converter);
        let state = AppState {
            llm: llm.clone(),
            store: store.clone(),
            converter: converter.clone(),
            profile: Arc::new(test_profile()),
        };
        (state, llm, store, converter)
    }
}
