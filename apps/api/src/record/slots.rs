//! Slot layout for the editor.
//!
//! A repeated block (skills, education, experience, bullets, references) is shown
//! as a fixed number of slots: existing items first, empty slots after. The view
//! is derived on demand and never written back into the session.

use serde::Serialize;

use crate::models::resume::{
    ContactInfo, EducationEntry, ExperienceEntry, ReferenceEntry, KEY_SKILL_SLOTS,
    MIN_ACHIEVEMENT_SLOTS, MIN_DESCRIPTION_SLOTS, MIN_REFERENCE_SLOTS,
};
use crate::record::fields::MAX_SLOTS;
use crate::record::session::SessionState;

/// Returns exactly `count` slots: the first `count` existing items, then defaults.
pub fn render_n_slots<T: Clone + Default>(count: usize, existing: &[T]) -> Vec<T> {
    let mut slots: Vec<T> = existing.iter().take(count).cloned().collect();
    slots.resize_with(count, T::default);
    slots
}

/// Slot count that never hides an existing item and never drops below `minimum`.
pub fn slot_count(existing: usize, minimum: usize) -> usize {
    existing.max(minimum)
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EditorView {
    pub contact: ContactInfo,
    pub profile_summary: String,
    pub key_skills: Vec<String>,
    pub education: Vec<EducationEntry>,
    pub work_experience: Vec<ExperienceEntry>,
    pub reference_details: Vec<ReferenceEntry>,
    pub exp_count: usize,
}

pub fn editor_view(session: &SessionState) -> EditorView {
    let record = &session.record;
    let exp_count = session.exp_count.clamp(1, MAX_SLOTS);
    let education_slots = session.education_slots.min(MAX_SLOTS);

    let work_experience = render_n_slots(exp_count, &record.work_experience)
        .into_iter()
        .map(|mut entry| {
            entry.description = render_n_slots(
                slot_count(entry.description.len(), MIN_DESCRIPTION_SLOTS),
                &entry.description,
            );
            entry.achievements = render_n_slots(
                slot_count(entry.achievements.len(), MIN_ACHIEVEMENT_SLOTS),
                &entry.achievements,
            );
            entry
        })
        .collect();

    EditorView {
        contact: session.contact.clone(),
        profile_summary: record.profile_summary.clone(),
        key_skills: render_n_slots(
            slot_count(record.key_skills.len(), KEY_SKILL_SLOTS),
            &record.key_skills,
        ),
        education: render_n_slots(
            slot_count(record.education.len(), education_slots),
            &record.education,
        ),
        work_experience,
        reference_details: render_n_slots(
            slot_count(record.reference_details.len(), MIN_REFERENCE_SLOTS),
            &record.reference_details,
        ),
        exp_count,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::profile::Profile;
    use crate::models::resume::ResumeRecord;
    use crate::record::fields::{ExperienceField, FieldPath};

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_render_n_slots_pads_and_truncates() {
        assert_eq!(render_n_slots(3, &strings(&["a"])), strings(&["a", "", ""]));
        assert_eq!(render_n_slots(1, &strings(&["a", "b"])), strings(&["a"]));
        assert!(render_n_slots::<String>(0, &[]).is_empty());
    }

    #[test]
    fn test_bullet_slots_respect_minimum_and_existing() {
        let mut session = SessionState::new(&Profile::default());
        session.load(ResumeRecord {
            work_experience: vec![
                ExperienceEntry {
                    description: strings(&["one"]),
                    ..Default::default()
                },
                ExperienceEntry {
                    description: strings(&["1", "2", "3", "4", "5"]),
                    achievements: strings(&["a", "b"]),
                    ..Default::default()
                },
            ],
            ..Default::default()
        });

        let view = editor_view(&session);
        assert_eq!(view.work_experience.len(), 2);
        assert_eq!(view.work_experience[0].description, strings(&["one", "", ""]));
        assert_eq!(view.work_experience[0].achievements, strings(&[""]));
        assert_eq!(view.work_experience[1].description.len(), 5);
        assert_eq!(view.work_experience[1].achievements.len(), 2);
    }

    #[test]
    fn test_experience_slots_follow_exp_count() {
        let mut session = SessionState::new(&Profile::default());
        session.add_experience_slot();
        session.add_experience_slot();

        let view = editor_view(&session);
        assert_eq!(view.exp_count, 3);
        assert_eq!(view.work_experience.len(), 3);
        assert!(view
            .work_experience
            .iter()
            .all(|e| e.description.len() == MIN_DESCRIPTION_SLOTS));
    }

    #[test]
    fn test_fixed_section_slot_counts() {
        let profile = Profile {
            education: vec![EducationEntry::default(); 2],
            ..Default::default()
        };
        let mut session = SessionState::new(&profile);
        session.record.key_skills = strings(&["Rust", "SQL"]);

        let view = editor_view(&session);
        assert_eq!(view.key_skills.len(), KEY_SKILL_SLOTS);
        assert_eq!(view.key_skills[0], "Rust");
        assert_eq!(view.education.len(), 2);
        assert_eq!(view.reference_details.len(), MIN_REFERENCE_SLOTS);

        // Loading drops the seeded education, but the slot count stays configured.
        session.load(ResumeRecord::default());
        let view = editor_view(&session);
        assert_eq!(view.education.len(), 2);
        assert!(view.education.iter().all(|e| e.course.is_empty()));
    }

    #[test]
    fn test_oversized_counts_do_not_blow_up_the_view() {
        let mut session = SessionState::new(&Profile::default());
        session.exp_count = usize::MAX;
        session.education_slots = usize::MAX;

        let view = editor_view(&session);
        assert_eq!(view.exp_count, MAX_SLOTS);
        assert_eq!(view.work_experience.len(), MAX_SLOTS);
        assert_eq!(view.education.len(), MAX_SLOTS);
    }

    #[test]
    fn test_every_visible_experience_slot_is_editable() {
        let mut session = SessionState::new(&Profile::default());
        for _ in 0..MAX_SLOTS + 10 {
            session.add_experience_slot();
        }

        let view = editor_view(&session);
        for index in 0..view.work_experience.len() {
            session
                .set_field(
                    FieldPath::Experience {
                        index,
                        field: ExperienceField::Position,
                    },
                    format!("Role {index}"),
                )
                .unwrap();
        }
        assert_eq!(session.record.work_experience.len(), view.work_experience.len());
    }
}
