//! Opt-in content reduction applied to a record before rendering.
//!
//! The renderer itself never drops content; a caller that needs the document to
//! fit a page budget picks a policy and runs it on its input first.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::models::resume::{is_blank, ResumeRecord};

/// Wire-level selector for a truncation policy.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TruncationMode {
    #[default]
    None,
    SinglePage,
}

impl TruncationMode {
    pub fn policy(self) -> Option<TruncationPolicy> {
        match self {
            TruncationMode::None => None,
            TruncationMode::SinglePage => Some(TruncationPolicy::SINGLE_PAGE),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TruncationPolicy {
    /// The policy only kicks in at this many experience entries.
    pub min_experiences: usize,
    pub max_key_skills: usize,
    pub max_education: usize,
    pub max_description_items: usize,
}

impl TruncationPolicy {
    /// Caps for squeezing a multi-job résumé onto one page. Achievements are never cut.
    pub const SINGLE_PAGE: TruncationPolicy = TruncationPolicy {
        min_experiences: 2,
        max_key_skills: 7,
        max_education: 1,
        max_description_items: 5,
    };

    pub fn applies_to(&self, record: &ResumeRecord) -> bool {
        record.work_experience.len() >= self.min_experiences
    }

    /// Returns `record` with the caps applied, or unchanged if the trigger is
    /// not met. Blank skills and bullets are dropped before counting so they
    /// do not use up a capped slot.
    pub fn apply(&self, mut record: ResumeRecord) -> ResumeRecord {
        if !self.applies_to(&record) {
            return record;
        }

        record.key_skills = keep_first_non_blank(record.key_skills, self.max_key_skills);
        record.education.truncate(self.max_education);
        for entry in &mut record.work_experience {
            entry.description = keep_first_non_blank(
                std::mem::take(&mut entry.description),
                self.max_description_items,
            );
        }

        debug!(
            "Truncated record: {} skills, {} education entries",
            record.key_skills.len(),
            record.education.len()
        );
        record
    }
}

fn keep_first_non_blank(items: Vec<String>, limit: usize) -> Vec<String> {
    items
        .into_iter()
        .filter(|item| !is_blank(item))
        .take(limit)
        .collect()
}
