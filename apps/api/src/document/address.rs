//! Field addresses — the keys of the loading registry and the targets of AI enhancement.
//!
//! Canonical string forms:
//! - scalar field: its wire name, e.g. `summary`
//! - experience description: `experience.{id}.description`

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use thiserror::Error;

use crate::document::model::{EntryId, ExperienceField, ResumeDocument, ScalarField};
use crate::document::reducer::Action;

const EXPERIENCE_PREFIX: &str = "experience.";
const DESCRIPTION_SUFFIX: &str = ".description";

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum FieldAddress {
    Scalar(ScalarField),
    ExperienceDescription(EntryId),
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("Unrecognised field address: {0}")]
pub struct ParseAddressError(pub String);

/// Label handed to the enhancement collaborator so it knows what kind of text it is rewriting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SectionLabel {
    Summary,
    ExperienceDescription,
}

impl SectionLabel {
    pub fn as_str(self) -> &'static str {
        match self {
            SectionLabel::Summary => "Summary",
            SectionLabel::ExperienceDescription => "Experience Description",
        }
    }
}

impl fmt::Display for SectionLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FieldAddress {
    /// Every scalar address is labelled "Summary"; only experience descriptions differ.
    pub fn section_label(&self) -> SectionLabel {
        match self {
            FieldAddress::Scalar(_) => SectionLabel::Summary,
            FieldAddress::ExperienceDescription(_) => SectionLabel::ExperienceDescription,
        }
    }

    /// The action that overwrites this address with `value`.
    pub fn overwrite_action(&self, value: String) -> Action {
        match self {
            FieldAddress::Scalar(field) => Action::SetField {
                field: *field,
                value,
            },
            FieldAddress::ExperienceDescription(id) => Action::UpdateExperience {
                id: id.clone(),
                field: ExperienceField::Description,
                value,
            },
        }
    }

    /// Current text at this address, or `None` when the entry no longer exists.
    pub fn read<'a>(&self, doc: &'a ResumeDocument) -> Option<&'a str> {
        match self {
            FieldAddress::Scalar(field) => Some(doc.scalar(*field)),
            FieldAddress::ExperienceDescription(id) => {
                doc.experience_entry(id).map(|e| e.description.as_str())
            }
        }
    }
}

impl fmt::Display for FieldAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldAddress::Scalar(field) => f.write_str(field.as_str()),
            FieldAddress::ExperienceDescription(id) => {
                write!(f, "{EXPERIENCE_PREFIX}{id}{DESCRIPTION_SUFFIX}")
            }
        }
    }
}

impl FromStr for FieldAddress {
    type Err = ParseAddressError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if let Some(field) = ScalarField::from_name(s) {
            return Ok(FieldAddress::Scalar(field));
        }

        s.strip_prefix(EXPERIENCE_PREFIX)
            .and_then(|rest| rest.strip_suffix(DESCRIPTION_SUFFIX))
            .filter(|id| !id.is_empty())
            .map(|id| FieldAddress::ExperienceDescription(EntryId::from(id)))
            .ok_or_else(|| ParseAddressError(s.to_string()))
    }
}

impl Serialize for FieldAddress {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for FieldAddress {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scalar_address_string_form() {
        let addr = FieldAddress::Scalar(ScalarField::Summary);
        assert_eq!(addr.to_string(), "summary");
        assert_eq!("summary".parse::<FieldAddress>().unwrap(), addr);
    }

    #[test]
    fn test_experience_address_string_form() {
        let addr = FieldAddress::ExperienceDescription(EntryId::from("id-abc123"));
        assert_eq!(addr.to_string(), "experience.id-abc123.description");
        assert_eq!(
            "experience.id-abc123.description"
                .parse::<FieldAddress>()
                .unwrap(),
            addr
        );
    }

    #[test]
    fn test_rejects_malformed_addresses() {
        for bad in [
            "",
            "experience",
            "experience..description",
            "experience.exp1.company",
            "education.edu1.description",
            "Summary",
        ] {
            assert!(bad.parse::<FieldAddress>().is_err(), "{bad} should not parse");
        }
    }

    #[test]
    fn test_section_labels() {
        assert_eq!(
            FieldAddress::Scalar(ScalarField::Summary).section_label().as_str(),
            "Summary"
        );
        assert_eq!(
            FieldAddress::Scalar(ScalarField::Skills).section_label().as_str(),
            "Summary"
        );
        assert_eq!(
            FieldAddress::ExperienceDescription(EntryId::from("exp1"))
                .section_label()
                .as_str(),
            "Experience Description"
        );
    }

    #[test]
    fn test_read_current_text() {
        let doc = ResumeDocument::sample();
        let addr = FieldAddress::ExperienceDescription(EntryId::from("exp2"));
        assert!(addr.read(&doc).unwrap().starts_with("- Assisted"));
        let missing = FieldAddress::ExperienceDescription(EntryId::from("gone"));
        assert_eq!(missing.read(&doc), None);
    }

    #[test]
    fn test_overwrite_action_targets_description() {
        let addr = FieldAddress::ExperienceDescription(EntryId::from("exp1"));
        assert_eq!(
            addr.overwrite_action("new".to_string()),
            Action::UpdateExperience {
                id: EntryId::from("exp1"),
                field: ExperienceField::Description,
                value: "new".to_string(),
            }
        );
    }

    #[test]
    fn test_serde_uses_string_form() {
        let addr = FieldAddress::ExperienceDescription(EntryId::from("exp1"));
        let json = serde_json::to_string(&addr).unwrap();
        assert_eq!(json, "\"experience.exp1.description\"");
        let back: FieldAddress = serde_json::from_str(&json).unwrap();
        assert_eq!(back, addr);
    }
}
