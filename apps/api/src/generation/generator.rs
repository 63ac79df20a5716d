//! Résumé generation: prompt in, `ResumeRecord` out.
//!
//! The completion output is only accepted if it is a JSON object that
//! deserializes as a record. On any failure the caller's session is not touched;
//! loading the result into a session is the handler's job.

use serde_json::Value;
use tracing::info;

use crate::errors::AppError;
use crate::generation::prompts::{GENERATION_PROMPT_TEMPLATE, GENERATION_ROLE};
use crate::llm_client::prompts::JSON_ONLY_SYSTEM;
use crate::llm_client::{strip_json_fences, TextCompletion};
use crate::models::resume::ResumeRecord;

pub async fn generate_record(
    llm: &dyn TextCompletion,
    user_prompt: &str,
) -> Result<ResumeRecord, AppError> {
    if user_prompt.trim().is_empty() {
        return Err(AppError::Validation("prompt cannot be empty".to_string()));
    }

    let prompt = GENERATION_PROMPT_TEMPLATE.replace("{user_prompt}", user_prompt);
    let system = format!("{GENERATION_ROLE} {JSON_ONLY_SYSTEM}");

    let text = llm
        .complete(&prompt, &system)
        .await
        .map_err(|e| AppError::Llm(format!("Generation call failed: {e}")))?;

    let record = parse_generated_record(&text)?;
    info!(
        "Generated record: {} skills, {} education, {} experience, {} references",
        record.key_skills.len(),
        record.education.len(),
        record.work_experience.len(),
        record.reference_details.len()
    );
    Ok(record)
}

/// Parses model output into a record. Fences are tolerated; anything other
/// than a JSON object is rejected.
pub fn parse_generated_record(text: &str) -> Result<ResumeRecord, AppError> {
    let value: Value = serde_json::from_str(strip_json_fences(text))
        .map_err(|e| AppError::Generation(format!("response is not JSON: {e}")))?;

    if !value.is_object() {
        return Err(AppError::Generation(
            "response is not a JSON object".to_string(),
        ));
    }

    serde_json::from_value(value)
        .map_err(|e| AppError::Generation(format!("response does not match the record shape: {e}")))
}
