//! Resume document — the typed record every edit, preview, and export reads from.
//!
//! Entries are held behind `Arc` so the reducer can hand untouched entries to the
//! next document without copying them.

use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

// ────────────────────────────────────────────────────────────────────────────
// Identity
// ────────────────────────────────────────────────────────────────────────────

/// Opaque identity of one experience or education entry. Immutable once created.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EntryId(String);

impl EntryId {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EntryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<&str> for EntryId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Entries
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExperienceEntry {
    pub id: EntryId,
    pub job_title: String,
    pub company: String,
    pub start_date: String,
    pub end_date: String,
    /// Newline-delimited bullet lines, optionally prefixed with "- ".
    pub description: String,
}

impl ExperienceEntry {
    /// A blank entry with the given identity, as created by `AddExperience`.
    pub fn blank(id: EntryId) -> Self {
        Self {
            id,
            job_title: String::new(),
            company: String::new(),
            start_date: String::new(),
            end_date: String::new(),
            description: String::new(),
        }
    }

    /// Copy of this entry with exactly one field replaced.
    pub fn with_field(&self, field: ExperienceField, value: String) -> Self {
        let mut next = self.clone();
        match field {
            ExperienceField::JobTitle => next.job_title = value,
            ExperienceField::Company => next.company = value,
            ExperienceField::StartDate => next.start_date = value,
            ExperienceField::EndDate => next.end_date = value,
            ExperienceField::Description => next.description = value,
        }
        next
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EducationEntry {
    pub id: EntryId,
    pub degree: String,
    pub institution: String,
    pub grad_date: String,
}

impl EducationEntry {
    pub fn blank(id: EntryId) -> Self {
        Self {
            id,
            degree: String::new(),
            institution: String::new(),
            grad_date: String::new(),
        }
    }

    pub fn with_field(&self, field: EducationField, value: String) -> Self {
        let mut next = self.clone();
        match field {
            EducationField::Degree => next.degree = value,
            EducationField::Institution => next.institution = value,
            EducationField::GradDate => next.grad_date = value,
        }
        next
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Field selectors
// ────────────────────────────────────────────────────────────────────────────

/// Scalar text fields of a `ResumeDocument`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ScalarField {
    FullName,
    Email,
    Phone,
    Address,
    Summary,
    Skills,
}

impl ScalarField {
    pub const ALL: [ScalarField; 6] = [
        ScalarField::FullName,
        ScalarField::Email,
        ScalarField::Phone,
        ScalarField::Address,
        ScalarField::Summary,
        ScalarField::Skills,
    ];

    /// Wire name, identical to the serde representation.
    pub fn as_str(self) -> &'static str {
        match self {
            ScalarField::FullName => "fullName",
            ScalarField::Email => "email",
            ScalarField::Phone => "phone",
            ScalarField::Address => "address",
            ScalarField::Summary => "summary",
            ScalarField::Skills => "skills",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|f| f.as_str() == name)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ExperienceField {
    JobTitle,
    Company,
    StartDate,
    EndDate,
    Description,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum EducationField {
    Degree,
    Institution,
    GradDate,
}

// ────────────────────────────────────────────────────────────────────────────
// Document
// ────────────────────────────────────────────────────────────────────────────

/// The complete resume record. Every field is always present.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResumeDocument {
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub summary: String,
    pub experience: Vec<Arc<ExperienceEntry>>,
    pub education: Vec<Arc<EducationEntry>>,
    pub skills: String,
}

impl ResumeDocument {
    pub fn scalar(&self, field: ScalarField) -> &str {
        match field {
            ScalarField::FullName => &self.full_name,
            ScalarField::Email => &self.email,
            ScalarField::Phone => &self.phone,
            ScalarField::Address => &self.address,
            ScalarField::Summary => &self.summary,
            ScalarField::Skills => &self.skills,
        }
    }

    pub(crate) fn scalar_mut(&mut self, field: ScalarField) -> &mut String {
        match field {
            ScalarField::FullName => &mut self.full_name,
            ScalarField::Email => &mut self.email,
            ScalarField::Phone => &mut self.phone,
            ScalarField::Address => &mut self.address,
            ScalarField::Summary => &mut self.summary,
            ScalarField::Skills => &mut self.skills,
        }
    }

    pub fn experience_entry(&self, id: &EntryId) -> Option<&ExperienceEntry> {
        self.experience
            .iter()
            .find(|e| &e.id == id)
            .map(|e| e.as_ref())
    }

    /// The fixed sample record loaded on cold start.
    pub fn sample() -> Self {
        Self {
            full_name: "Jane Doe".to_string(),
            email: "jane.doe@email.com".to_string(),
            phone: "123-456-7890".to_string(),
            address: "123 Main St, Anytown, USA".to_string(),
            summary: "A highly motivated and detail-oriented professional with 5 years of experience in project management. Seeking to leverage strong leadership and communication skills to contribute to a dynamic team.".to_string(),
            experience: vec![
                Arc::new(ExperienceEntry {
                    id: EntryId::from("exp1"),
                    job_title: "Project Manager".to_string(),
                    company: "Tech Solutions Inc.".to_string(),
                    start_date: "Jan 2020".to_string(),
                    end_date: "Present".to_string(),
                    description: "- Led cross-functional teams to deliver projects on time and within budget.\n- Developed project plans and tracked progress using Agile methodologies.\n- Communicated project status to stakeholders and managed expectations.".to_string(),
                }),
                Arc::new(ExperienceEntry {
                    id: EntryId::from("exp2"),
                    job_title: "Project Coordinator".to_string(),
                    company: "Innovate Corp.".to_string(),
                    start_date: "Jun 2018".to_string(),
                    end_date: "Dec 2019".to_string(),
                    description: "- Assisted project managers with daily tasks and scheduling.\n- Prepared project documentation and reports.\n- Coordinated team meetings and recorded minutes.".to_string(),
                }),
            ],
            education: vec![
                Arc::new(EducationEntry {
                    id: EntryId::from("edu1"),
                    degree: "Master of Business Administration".to_string(),
                    institution: "State University".to_string(),
                    grad_date: "May 2018".to_string(),
                }),
                Arc::new(EducationEntry {
                    id: EntryId::from("edu2"),
                    degree: "Bachelor of Science in Business".to_string(),
                    institution: "City College".to_string(),
                    grad_date: "May 2016".to_string(),
                }),
            ],
            skills: "Project Management, Agile, Scrum, JIRA, Communication, Leadership, Risk Management, Budgeting".to_string(),
        }
    }
}

impl Default for ResumeDocument {
    fn default() -> Self {
        Self::sample()
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Layout-agnostic peer state
// ────────────────────────────────────────────────────────────────────────────

/// Visual layout used by the preview projection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Template {
    #[default]
    Modern,
    Classic,
}

/// Which half of the editor is active; decides what gets exported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum ActiveTab {
    #[default]
    Resume,
    #[serde(rename = "Cover Letter")]
    CoverLetter,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_sample_has_fixture_ids() {
        let doc = ResumeDocument::sample();
        let exp: Vec<&str> = doc.experience.iter().map(|e| e.id.as_str()).collect();
        let edu: Vec<&str> = doc.education.iter().map(|e| e.id.as_str()).collect();
        assert_eq!(exp, vec!["exp1", "exp2"]);
        assert_eq!(edu, vec!["edu1", "edu2"]);
        assert_eq!(doc.full_name, "Jane Doe");
    }

    #[test]
    fn test_document_serializes_camel_case() {
        let value = serde_json::to_value(ResumeDocument::sample()).unwrap();
        assert_eq!(value["fullName"], json!("Jane Doe"));
        assert_eq!(value["experience"][0]["jobTitle"], json!("Project Manager"));
        assert_eq!(value["experience"][0]["id"], json!("exp1"));
        assert_eq!(value["education"][1]["gradDate"], json!("May 2016"));
    }

    #[test]
    fn test_document_deserializes_from_wire_shape() {
        let doc: ResumeDocument = serde_json::from_value(json!({
            "fullName": "A",
            "email": "",
            "phone": "",
            "address": "",
            "summary": "",
            "experience": [],
            "education": [{"id": "e", "degree": "BA", "institution": "X", "gradDate": "2010"}],
            "skills": ""
        }))
        .unwrap();
        assert_eq!(doc.education[0].degree, "BA");
        assert!(doc.experience.is_empty());
    }

    #[test]
    fn test_scalar_field_names_round_trip() {
        for field in ScalarField::ALL {
            assert_eq!(ScalarField::from_name(field.as_str()), Some(field));
            let wire = serde_json::to_value(field).unwrap();
            assert_eq!(wire, json!(field.as_str()));
        }
        assert_eq!(ScalarField::from_name("experience"), None);
    }

    #[test]
    fn test_with_field_touches_only_named_field() {
        let entry = ExperienceEntry::blank(EntryId::from("x"));
        let next = entry.with_field(ExperienceField::Company, "Acme".to_string());
        assert_eq!(next.company, "Acme");
        assert_eq!(next.job_title, "");
        assert_eq!(next.id, entry.id);
    }

    #[test]
    fn test_active_tab_wire_names() {
        assert_eq!(
            serde_json::to_value(ActiveTab::CoverLetter).unwrap(),
            json!("Cover Letter")
        );
        assert_eq!(serde_json::to_value(Template::Classic).unwrap(), json!("Classic"));
    }
}
