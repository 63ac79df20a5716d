//! Session state: the explicit, serializable form state.
//!
//! The client owns this object. Each request carries it in, each handler returns
//! the updated copy. Nothing is kept server-side between requests.

use serde::{Deserialize, Serialize};

use crate::models::profile::Profile;
use crate::models::resume::{ContactInfo, ResumeRecord};
use crate::record::fields::{slot_mut, FieldError, FieldPath, MAX_SLOTS};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionState {
    #[serde(default)]
    pub contact: ContactInfo,
    #[serde(default)]
    pub record: ResumeRecord,
    /// Number of experience slots the editor shows. Between 1 and `MAX_SLOTS`.
    #[serde(default = "default_exp_count")]
    pub exp_count: usize,
    /// Education slot count, fixed from the configured education list.
    #[serde(default)]
    pub education_slots: usize,
}

fn default_exp_count() -> usize {
    1
}

impl SessionState {
    /// Fresh session seeded from the operator profile.
    pub fn new(profile: &Profile) -> Self {
        Self {
            contact: profile.contact.clone(),
            record: ResumeRecord {
                education: profile.education.clone(),
                ..Default::default()
            },
            exp_count: 1,
            education_slots: profile.education.len(),
        }
    }

    /// Restores invariants on a client-supplied session (e.g. `exp_count: 0`).
    pub fn normalized(mut self) -> Self {
        self.exp_count = self.exp_count.clamp(1, MAX_SLOTS);
        self.education_slots = self.education_slots.min(MAX_SLOTS);
        self
    }

    /// Replaces every record field with `record`'s values and reconciles the
    /// experience slot count. The contact block is not part of the record and
    /// is left alone.
    pub fn load(&mut self, record: ResumeRecord) {
        self.exp_count = record.work_experience.len().clamp(1, MAX_SLOTS);
        self.record = record;
    }

    /// Capped at `MAX_SLOTS`; at the cap this is a no-op.
    pub fn add_experience_slot(&mut self) {
        self.exp_count = self.exp_count.saturating_add(1).min(MAX_SLOTS);
    }

    /// Floor of 1; below it this is a no-op.
    pub fn remove_experience_slot(&mut self) {
        if self.exp_count > 1 {
            self.exp_count -= 1;
        }
    }

    /// Plain assignment. Any string is accepted, including empty; sequences grow
    /// with empty values to reach the addressed slot.
    pub fn set_field(&mut self, path: FieldPath, value: String) -> Result<(), FieldError> {
        path.check_bounds()?;

        let record = &mut self.record;
        match path {
            FieldPath::Contact { field } => *field.target(&mut self.contact) = value,
            FieldPath::ProfileSummary => record.profile_summary = value,
            FieldPath::KeySkill { index } => *slot_mut(&mut record.key_skills, index) = value,
            FieldPath::Education { index, field } => {
                field.assign(slot_mut(&mut record.education, index), value)
            }
            FieldPath::Experience { index, field } => {
                *field.target(slot_mut(&mut record.work_experience, index)) = value
            }
            FieldPath::Description { experience, index } => {
                let entry = slot_mut(&mut record.work_experience, experience);
                *slot_mut(&mut entry.description, index) = value;
            }
            FieldPath::Achievement { experience, index } => {
                let entry = slot_mut(&mut record.work_experience, experience);
                *slot_mut(&mut entry.achievements, index) = value;
            }
            FieldPath::Reference { index, field } => {
                *field.target(slot_mut(&mut record.reference_details, index)) = value
            }
        }
        Ok(())
    }

    /// The record as it should be rendered: only the experience entries the
    /// user can currently see (the first `exp_count`).
    pub fn to_render_input(&self) -> ResumeRecord {
        let mut record = self.record.clone();
        record.work_experience.truncate(self.exp_count.clamp(1, MAX_SLOTS));
        record
    }
}
