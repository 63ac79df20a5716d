//! Typed addressing for single-field edits.
//!
//! A `FieldPath` names exactly one string slot in a session. Unknown entity or
//! field names cannot be represented, so over HTTP they fail deserialization.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::models::resume::{ContactInfo, EducationEntry, ExperienceEntry, ReferenceEntry};

/// Upper bound on any slot index accepted by an edit. Guards against a client
/// asking the server to grow a sequence to an absurd length.
pub const MAX_SLOT_INDEX: usize = 63;

/// Upper bound on any slot count, so every visible slot stays addressable.
pub const MAX_SLOTS: usize = MAX_SLOT_INDEX + 1;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum FieldError {
    #[error("slot index {index} exceeds the maximum of {max}")]
    IndexOutOfRange { index: usize, max: usize },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContactField {
    Name,
    Phone,
    Email,
    Address,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EducationField {
    Course,
    Institute,
    FromDate,
    ToDate,
    Location,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExperienceField {
    FromDate,
    ToDate,
    Position,
    Workplace,
    Location,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReferenceField {
    Name,
    Position,
    Contact,
}

/// Wire form: `{"entity": "education", "index": 0, "field": "course"}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "entity", rename_all = "snake_case")]
pub enum FieldPath {
    Contact { field: ContactField },
    ProfileSummary,
    KeySkill { index: usize },
    Education { index: usize, field: EducationField },
    Experience { index: usize, field: ExperienceField },
    Description { experience: usize, index: usize },
    Achievement { experience: usize, index: usize },
    Reference { index: usize, field: ReferenceField },
}

impl FieldPath {
    /// Every index carried by the path must be within `MAX_SLOT_INDEX`.
    pub fn check_bounds(&self) -> Result<(), FieldError> {
        let indices: &[usize] = match self {
            FieldPath::Contact { .. } | FieldPath::ProfileSummary => &[],
            FieldPath::KeySkill { index }
            | FieldPath::Education { index, .. }
            | FieldPath::Experience { index, .. }
            | FieldPath::Reference { index, .. } => std::slice::from_ref(index),
            FieldPath::Description { experience, index }
            | FieldPath::Achievement { experience, index } => {
                return check_index(*experience).and_then(|_| check_index(*index));
            }
        };
        indices.iter().try_for_each(|i| check_index(*i))
    }
}

fn check_index(index: usize) -> Result<(), FieldError> {
    if index > MAX_SLOT_INDEX {
        Err(FieldError::IndexOutOfRange {
            index,
            max: MAX_SLOT_INDEX,
        })
    } else {
        Ok(())
    }
}

/// Returns a mutable reference to `items[index]`, growing the sequence with
/// default values as needed.
pub fn slot_mut<T: Default>(items: &mut Vec<T>, index: usize) -> &mut T {
    if items.len() <= index {
        items.resize_with(index + 1, T::default);
    }
    &mut items[index]
}

impl ContactField {
    pub fn target(self, contact: &mut ContactInfo) -> &mut String {
        match self {
            ContactField::Name => &mut contact.name,
            ContactField::Phone => &mut contact.phone,
            ContactField::Email => &mut contact.email,
            ContactField::Address => &mut contact.address,
        }
    }
}

impl EducationField {
    pub fn assign(self, entry: &mut EducationEntry, value: String) {
        match self {
            EducationField::Course => entry.course = value,
            EducationField::Institute => entry.institute = value,
            EducationField::FromDate => entry.from_date = value,
            EducationField::ToDate => entry.to_date = value,
            EducationField::Location => entry.location = Some(value),
        }
    }
}

impl ExperienceField {
    pub fn target(self, entry: &mut ExperienceEntry) -> &mut String {
        match self {
            ExperienceField::FromDate => &mut entry.from_date,
            ExperienceField::ToDate => &mut entry.to_date,
            ExperienceField::Position => &mut entry.position,
            ExperienceField::Workplace => &mut entry.workplace,
            ExperienceField::Location => &mut entry.location,
        }
    }
}

impl ReferenceField {
    pub fn target(self, entry: &mut ReferenceEntry) -> &mut String {
        match self {
            ReferenceField::Name => &mut entry.name,
            ReferenceField::Position => &mut entry.position,
            ReferenceField::Contact => &mut entry.contact,
        }
    }
}
