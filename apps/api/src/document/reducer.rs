//! Edit reducer — the only way a `ResumeDocument` changes.
//!
//! `reduce` is pure and total: every action yields a new top-level document,
//! and actions it does not recognise yield an unchanged copy. Entries that an
//! action does not touch are carried over by `Arc` clone, so consumers can
//! detect changed entries with `Arc::ptr_eq`.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::document::ids::new_id;
use crate::document::model::{
    EducationEntry, EducationField, EntryId, ExperienceEntry, ExperienceField, ResumeDocument,
    ScalarField,
};

/// One edit to the document. Wire form is tagged by `type`, e.g.
/// `{"type": "UPDATE_EXPERIENCE", "id": "exp1", "field": "company", "value": "Acme"}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Action {
    #[serde(alias = "UPDATE_FIELD")]
    SetField {
        field: ScalarField,
        value: String,
    },
    AddExperience,
    UpdateExperience {
        id: EntryId,
        field: ExperienceField,
        value: String,
    },
    RemoveExperience {
        id: EntryId,
    },
    AddEducation,
    UpdateEducation {
        id: EntryId,
        field: EducationField,
        value: String,
    },
    RemoveEducation {
        id: EntryId,
    },
    /// Any `type` tag this build does not know. Reduces to a no-op.
    #[serde(other)]
    Unknown,
}

/// Applies `action` to `doc`, drawing fresh identities from [`new_id`].
pub fn reduce(doc: &ResumeDocument, action: &Action) -> ResumeDocument {
    reduce_with(doc, action, &mut new_id)
}

/// Same as [`reduce`] with an explicit identity source.
pub fn reduce_with(
    doc: &ResumeDocument,
    action: &Action,
    next_id: &mut impl FnMut() -> EntryId,
) -> ResumeDocument {
    let mut next = doc.clone();

    match action {
        Action::SetField { field, value } => {
            *next.scalar_mut(*field) = value.clone();
        }
        Action::AddExperience => {
            next.experience
                .push(Arc::new(ExperienceEntry::blank(next_id())));
        }
        Action::UpdateExperience { id, field, value } => {
            next.experience = update_matching(&doc.experience, id, |e| &e.id, |e| {
                e.with_field(*field, value.clone())
            });
        }
        Action::RemoveExperience { id } => {
            next.experience.retain(|e| &e.id != id);
        }
        Action::AddEducation => {
            next.education
                .push(Arc::new(EducationEntry::blank(next_id())));
        }
        Action::UpdateEducation { id, field, value } => {
            next.education = update_matching(&doc.education, id, |e| &e.id, |e| {
                e.with_field(*field, value.clone())
            });
        }
        Action::RemoveEducation { id } => {
            next.education.retain(|e| &e.id != id);
        }
        Action::Unknown => {}
    }

    next
}

/// Rebuilds only the entry whose identity matches; every other `Arc` is reused.
fn update_matching<T>(
    entries: &[Arc<T>],
    id: &EntryId,
    id_of: impl Fn(&T) -> &EntryId,
    update: impl Fn(&T) -> T,
) -> Vec<Arc<T>> {
    entries
        .iter()
        .map(|entry| {
            if id_of(entry) == id {
                Arc::new(update(entry))
            } else {
                Arc::clone(entry)
            }
        })
        .collect()
}
