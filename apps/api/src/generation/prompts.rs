// All LLM prompt constants for the Generation module.
// Reuses cross-cutting fragments from llm_client::prompts.

/// Role half of the generation system prompt; `JSON_ONLY_SYSTEM` is appended.
pub const GENERATION_ROLE: &str = "You are an expert resume writer. \
    Turn the candidate's free-text notes into a structured resume.";

/// Fixed instruction sent with every generation request.
/// Replace `{user_prompt}` before sending.
pub const GENERATION_PROMPT_TEMPLATE: &str = r#"Write a resume from the candidate notes below.

Return a JSON object with this EXACT schema (no extra fields):
{
  "profile_summary": "Two to four sentences summarising the candidate.",
  "key_skills": ["Up to nine short skill names"],
  "education": [
    {
      "course": "BSc Computer Science",
      "institute": "University name",
      "from_date": "2015",
      "to_date": "2019",
      "location": "City, Country"
    }
  ],
  "work_experience": [
    {
      "from_date": "Jan 2020",
      "to_date": "Present",
      "position": "Job title",
      "workplace": "Employer",
      "location": "City, Country",
      "description": ["Three to five one-line duties"],
      "achievements": ["One or two measurable achievements"]
    }
  ],
  "reference_details": [
    {"name": "Referee name", "position": "Referee title", "contact": "Email or phone"}
  ]
}

RULES:
1. Use only facts present in the notes. Leave a string empty ("") rather than invent it.
2. List work experience most recent first.
3. Omit reference_details entries the notes do not mention.
4. Keep every bullet to a single line.

CANDIDATE NOTES:
{user_prompt}"#;
