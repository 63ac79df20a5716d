use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::models::resume::{ContactInfo, EducationEntry};

/// Fixed inputs supplied by the operator rather than typed into the form:
/// the contact block and the configured education list. Every new session is
/// seeded from this.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Profile {
    pub contact: ContactInfo,
    pub education: Vec<EducationEntry>,
}

impl Profile {
    /// Reads the profile JSON at `path`. A missing file yields an empty profile;
    /// a present but malformed file is a startup error.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            warn!(
                "Profile file {} not found, starting with an empty contact block",
                path.display()
            );
            return Ok(Profile::default());
        }

        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read profile file {}", path.display()))?;
        let profile: Profile = serde_json::from_str(&raw)
            .with_context(|| format!("Profile file {} is not valid JSON", path.display()))?;

        info!(
            "Loaded profile for '{}' with {} education entries",
            profile.contact.name,
            profile.education.len()
        );
        Ok(profile)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_missing_profile_file_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let profile = Profile::load(&dir.path().join("nope.json")).unwrap();
        assert_eq!(profile, Profile::default());
    }

    #[test]
    fn test_profile_file_parses() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{
                "contact": {{"name": "Jane Roe", "email": "jane@example.com"}},
                "education": [{{"course": "MSc Physics", "institute": "ETH", "location": "Zurich"}}]
            }}"#
        )
        .unwrap();

        let profile = Profile::load(file.path()).unwrap();
        assert_eq!(profile.contact.name, "Jane Roe");
        assert!(profile.contact.phone.is_empty());
        assert_eq!(profile.education.len(), 1);
        assert_eq!(profile.education[0].location.as_deref(), Some("Zurich"));
    }

    #[test]
    fn test_malformed_profile_is_an_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{{ not json").unwrap();
        assert!(Profile::load(file.path()).is_err());
    }
}
