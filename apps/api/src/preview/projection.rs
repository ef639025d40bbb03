//! Preview projection — turns a document into a presentational tree for one template.
//!
//! Both templates share `description_bullets`; only grouping and ordering of the
//! sections differ. Projection is total: empty strings and empty sequences produce
//! empty paragraphs and empty sections, never an error.

use serde::Serialize;

use crate::document::{EducationEntry, ExperienceEntry, ResumeDocument, Template};

const BULLET_MARKER: &str = "- ";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    Page,
    Sidebar,
    Main,
    Header,
    Section,
    Entry,
    EntryMeta,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TextStyle {
    Plain,
    Strong,
    Italic,
    Muted,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Node {
    Container { role: Role, children: Vec<Node> },
    Heading { level: u8, text: String },
    Paragraph { text: String, style: TextStyle },
    Bullets { items: Vec<String> },
}

impl Node {
    fn container(role: Role, children: Vec<Node>) -> Self {
        Node::Container { role, children }
    }

    fn heading(level: u8, text: impl Into<String>) -> Self {
        Node::Heading {
            level,
            text: text.into(),
        }
    }

    fn text(text: impl Into<String>, style: TextStyle) -> Self {
        Node::Paragraph {
            text: text.into(),
            style,
        }
    }
}

/// A projected resume, ready to serialize or render to HTML.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResumeView {
    pub template: Template,
    pub root: Node,
}

pub fn project(doc: &ResumeDocument, template: Template) -> ResumeView {
    let root = match template {
        Template::Modern => project_modern(doc),
        Template::Classic => project_classic(doc),
    };
    ResumeView { template, root }
}

/// One bullet per non-empty line, in order, with a single leading "- " removed.
pub fn description_bullets(description: &str) -> Vec<String> {
    description
        .split('\n')
        .filter(|line| !line.is_empty())
        .map(|line| line.strip_prefix(BULLET_MARKER).unwrap_or(line).to_string())
        .collect()
}

fn date_range(entry: &ExperienceEntry) -> String {
    format!("{} - {}", entry.start_date, entry.end_date)
}

fn section(title: &str, level: u8, mut body: Vec<Node>) -> Node {
    body.insert(0, Node::heading(level, title));
    Node::container(Role::Section, body)
}

// ────────────────────────────────────────────────────────────────────────────
// Modern: sidebar with identity, summary, skills; main column with history
// ────────────────────────────────────────────────────────────────────────────

fn project_modern(doc: &ResumeDocument) -> Node {
    let sidebar = Node::container(
        Role::Sidebar,
        vec![
            Node::heading(1, &doc.full_name),
            Node::container(
                Role::Header,
                vec![
                    Node::text(&doc.email, TextStyle::Muted),
                    Node::text(&doc.phone, TextStyle::Muted),
                    Node::text(&doc.address, TextStyle::Muted),
                ],
            ),
            section("Summary", 2, vec![Node::text(&doc.summary, TextStyle::Plain)]),
            section("Skills", 2, vec![Node::text(&doc.skills, TextStyle::Plain)]),
        ],
    );

    let main = Node::container(
        Role::Main,
        vec![
            section(
                "Experience",
                2,
                doc.experience.iter().map(|e| modern_experience(e)).collect(),
            ),
            section(
                "Education",
                2,
                doc.education.iter().map(|e| modern_education(e)).collect(),
            ),
        ],
    );

    Node::container(Role::Page, vec![sidebar, main])
}

fn modern_experience(entry: &ExperienceEntry) -> Node {
    Node::container(
        Role::Entry,
        vec![
            Node::heading(3, &entry.job_title),
            Node::container(
                Role::EntryMeta,
                vec![
                    Node::text(&entry.company, TextStyle::Strong),
                    Node::text(date_range(entry), TextStyle::Italic),
                ],
            ),
            Node::Bullets {
                items: description_bullets(&entry.description),
            },
        ],
    )
}

fn modern_education(entry: &EducationEntry) -> Node {
    Node::container(
        Role::Entry,
        vec![
            Node::heading(3, &entry.degree),
            Node::container(
                Role::EntryMeta,
                vec![
                    Node::text(&entry.institution, TextStyle::Strong),
                    Node::text(&entry.grad_date, TextStyle::Italic),
                ],
            ),
        ],
    )
}

// ────────────────────────────────────────────────────────────────────────────
// Classic: centered header, then single-column sections
// ────────────────────────────────────────────────────────────────────────────

fn project_classic(doc: &ResumeDocument) -> Node {
    let contact = format!("{} | {} | {}", doc.address, doc.phone, doc.email);

    Node::container(
        Role::Page,
        vec![
            Node::container(
                Role::Header,
                vec![
                    Node::heading(1, &doc.full_name),
                    Node::text(contact, TextStyle::Plain),
                ],
            ),
            section("Summary", 2, vec![Node::text(&doc.summary, TextStyle::Plain)]),
            section(
                "Experience",
                2,
                doc.experience.iter().map(|e| classic_experience(e)).collect(),
            ),
            section(
                "Education",
                2,
                doc.education.iter().map(|e| classic_education(e)).collect(),
            ),
            section("Skills", 2, vec![Node::text(&doc.skills, TextStyle::Plain)]),
        ],
    )
}

fn classic_experience(entry: &ExperienceEntry) -> Node {
    Node::container(
        Role::Entry,
        vec![
            Node::container(
                Role::EntryMeta,
                vec![
                    Node::heading(3, &entry.job_title),
                    Node::text(date_range(entry), TextStyle::Italic),
                ],
            ),
            Node::text(&entry.company, TextStyle::Italic),
            Node::Bullets {
                items: description_bullets(&entry.description),
            },
        ],
    )
}

fn classic_education(entry: &EducationEntry) -> Node {
    Node::container(
        Role::Entry,
        vec![
            Node::container(
                Role::EntryMeta,
                vec![
                    Node::heading(3, &entry.degree),
                    Node::text(&entry.grad_date, TextStyle::Italic),
                ],
            ),
            Node::text(&entry.institution, TextStyle::Italic),
        ],
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::model::{EntryId, ExperienceField};
    use crate::document::{reduce, Action};
    use pretty_assertions::assert_eq;

    fn collect_bullets(node: &Node, out: &mut Vec<Vec<String>>) {
        match node {
            Node::Bullets { items } => out.push(items.clone()),
            Node::Container { children, .. } => {
                children.iter().for_each(|c| collect_bullets(c, out))
            }
            _ => {}
        }
    }

    fn collect_headings(node: &Node, level: u8, out: &mut Vec<String>) {
        match node {
            Node::Heading { level: l, text } if *l == level => out.push(text.clone()),
            Node::Container { children, .. } => {
                children.iter().for_each(|c| collect_headings(c, level, out))
            }
            _ => {}
        }
    }

    fn empty_doc() -> ResumeDocument {
        ResumeDocument {
            full_name: String::new(),
            email: String::new(),
            phone: String::new(),
            address: String::new(),
            summary: String::new(),
            experience: vec![],
            education: vec![],
            skills: String::new(),
        }
    }

    #[test]
    fn test_description_bullets_drops_empty_and_strips_marker() {
        assert_eq!(
            description_bullets("- Did X\n\nDid Y"),
            vec!["Did X".to_string(), "Did Y".to_string()]
        );
    }

    #[test]
    fn test_description_bullets_strips_only_one_marker() {
        assert_eq!(
            description_bullets("- - nested\n-no space\n  - indented"),
            vec![
                "- nested".to_string(),
                "-no space".to_string(),
                "  - indented".to_string()
            ]
        );
    }

    #[test]
    fn test_description_bullets_empty_input() {
        assert!(description_bullets("").is_empty());
        assert!(description_bullets("\n\n").is_empty());
    }

    #[test]
    fn test_projection_is_deterministic() {
        let doc = ResumeDocument::sample();
        assert_eq!(project(&doc, Template::Modern), project(&doc, Template::Modern));
        assert_eq!(
            project(&doc, Template::Classic),
            project(&doc, Template::Classic)
        );
    }

    #[test]
    fn test_both_templates_derive_identical_bullets() {
        let doc = reduce(
            &ResumeDocument::sample(),
            &Action::UpdateExperience {
                id: EntryId::from("exp1"),
                field: ExperienceField::Description,
                value: "- Did X\n\nDid Y".to_string(),
            },
        );

        let mut modern = vec![];
        let mut classic = vec![];
        collect_bullets(&project(&doc, Template::Modern).root, &mut modern);
        collect_bullets(&project(&doc, Template::Classic).root, &mut classic);

        assert_eq!(modern, classic);
        assert_eq!(modern[0], vec!["Did X".to_string(), "Did Y".to_string()]);
        assert_eq!(modern[1].len(), 3);
    }

    #[test]
    fn test_section_order_differs_by_template() {
        let doc = ResumeDocument::sample();
        let mut modern = vec![];
        let mut classic = vec![];
        collect_headings(&project(&doc, Template::Modern).root, 2, &mut modern);
        collect_headings(&project(&doc, Template::Classic).root, 2, &mut classic);
        assert_eq!(modern, vec!["Summary", "Skills", "Experience", "Education"]);
        assert_eq!(classic, vec!["Summary", "Experience", "Education", "Skills"]);
    }

    #[test]
    fn test_classic_contact_line() {
        let view = project(&ResumeDocument::sample(), Template::Classic);
        let Node::Container { children, .. } = &view.root else {
            panic!("root should be a container");
        };
        let Node::Container { children: header, .. } = &children[0] else {
            panic!("first child should be the header");
        };
        assert_eq!(
            header[1],
            Node::Paragraph {
                text: "123 Main St, Anytown, USA | 123-456-7890 | jane.doe@email.com"
                    .to_string(),
                style: TextStyle::Plain,
            }
        );
    }

    #[test]
    fn test_empty_document_projects_empty_sections() {
        for template in [Template::Modern, Template::Classic] {
            let view = project(&empty_doc(), template);
            let mut bullets = vec![];
            collect_bullets(&view.root, &mut bullets);
            assert!(bullets.is_empty());
            let mut titles = vec![];
            collect_headings(&view.root, 2, &mut titles);
            assert_eq!(titles.len(), 4);
        }
    }

    #[test]
    fn test_tree_serializes_with_kind_tags() {
        let value = serde_json::to_value(project(&ResumeDocument::sample(), Template::Modern))
            .unwrap();
        assert_eq!(value["template"], "Modern");
        assert_eq!(value["root"]["kind"], "container");
        assert_eq!(value["root"]["role"], "page");
        assert_eq!(value["root"]["children"][0]["role"], "sidebar");
    }
}
