// Résumé generation from free-text notes.
// All model calls go through llm_client; nothing here talks HTTP directly.

pub mod generator;
pub mod handlers;
pub mod prompts;
