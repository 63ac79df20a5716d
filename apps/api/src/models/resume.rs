use serde::{Deserialize, Serialize};

/// Number of key-skill slots offered to the editor.
pub const KEY_SKILL_SLOTS: usize = 9;
/// Minimum description bullet slots per experience entry.
pub const MIN_DESCRIPTION_SLOTS: usize = 3;
/// Minimum achievement bullet slots per experience entry.
pub const MIN_ACHIEVEMENT_SLOTS: usize = 1;
/// Minimum reference rows offered to the editor.
pub const MIN_REFERENCE_SLOTS: usize = 2;

// ────────────────────────────────────────────────────────────────────────────
// Entities
//
// Every field defaults to empty so partial JSON (stored submissions, LLM output)
// deserializes cleanly. Absent always means empty, never "keep previous".
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContactInfo {
    pub name: String,
    pub phone: String,
    pub email: String,
    pub address: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EducationEntry {
    pub course: String,
    pub institute: String,
    pub from_date: String,
    pub to_date: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExperienceEntry {
    pub from_date: String,
    pub to_date: String,
    pub position: String,
    pub workplace: String,
    pub location: String,
    pub description: Vec<String>,
    pub achievements: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReferenceEntry {
    pub name: String,
    pub position: String,
    pub contact: String,
}

impl ReferenceEntry {
    /// True when every field is empty or whitespace-only.
    pub fn is_blank(&self) -> bool {
        is_blank(&self.name) && is_blank(&self.position) && is_blank(&self.contact)
    }
}

/// The structured résumé body. Field names double as the JSON contract with the
/// generation collaborator and with stored submissions.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResumeRecord {
    pub profile_summary: String,
    pub key_skills: Vec<String>,
    pub education: Vec<EducationEntry>,
    pub work_experience: Vec<ExperienceEntry>,
    pub reference_details: Vec<ReferenceEntry>,
}

impl ResumeRecord {
    /// References with at least one non-blank field, in input order.
    ///
    /// Applied at render time only; blank rows stay editable in the session.
    pub fn compact_references(&self) -> Vec<ReferenceEntry> {
        self.reference_details
            .iter()
            .filter(|r| !r.is_blank())
            .cloned()
            .collect()
    }
}

/// Whitespace-only counts as blank.
pub fn is_blank(s: &str) -> bool {
    s.trim().is_empty()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reference(name: &str, position: &str, contact: &str) -> ReferenceEntry {
        ReferenceEntry {
            name: name.to_string(),
            position: position.to_string(),
            contact: contact.to_string(),
        }
    }

    #[test]
    fn test_partial_json_fills_missing_fields_with_empty() {
        let json = r#"{
            "profile_summary": "Backend engineer",
            "work_experience": [{"position": "Engineer"}]
        }"#;
        let record: ResumeRecord = serde_json::from_str(json).unwrap();

        assert_eq!(record.profile_summary, "Backend engineer");
        assert!(record.key_skills.is_empty());
        assert!(record.education.is_empty());
        assert_eq!(record.work_experience.len(), 1);
        assert_eq!(record.work_experience[0].position, "Engineer");
        assert!(record.work_experience[0].description.is_empty());
        assert!(record.work_experience[0].workplace.is_empty());
    }

    #[test]
    fn test_education_location_is_optional() {
        let json =
            r#"{"course": "BSc", "institute": "Uni", "from_date": "2015", "to_date": "2019"}"#;
        let entry: EducationEntry = serde_json::from_str(json).unwrap();
        assert!(entry.location.is_none());

        let out = serde_json::to_value(&entry).unwrap();
        assert!(out.get("location").is_none());
    }

    #[test]
    fn test_compact_references_drops_all_blank_rows() {
        let record = ResumeRecord {
            reference_details: vec![
                reference("", "  ", "\t"),
                reference("Ada", "", ""),
                reference("", "", ""),
                reference("", "", "ada@example.com"),
            ],
            ..Default::default()
        };

        let compact = record.compact_references();
        assert_eq!(compact.len(), 2);
        assert_eq!(compact[0].name, "Ada");
        assert_eq!(compact[1].contact, "ada@example.com");
    }

    #[test]
    fn test_compact_references_all_blank_is_empty() {
        let record = ResumeRecord {
            reference_details: vec![reference(" ", "", ""), reference("", "\n", "")],
            ..Default::default()
        };
        assert!(record.compact_references().is_empty());
        // The editable rows themselves are untouched.
        assert_eq!(record.reference_details.len(), 2);
    }
}
