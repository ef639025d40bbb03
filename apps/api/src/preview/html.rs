//! HTML rendering of preview trees — the "rendered region" handed to the PDF exporter.
//!
//! All text is escaped; styling is left to the embedding page via `class` names.

use html_escape::encode_text;

use crate::document::Template;
use crate::preview::projection::{Node, ResumeView, Role, TextStyle};

pub fn render(view: &ResumeView) -> String {
    let mut out = format!(
        r#"<div class="resume resume-{}">"#,
        template_class(view.template)
    );
    render_node(&view.root, &mut out);
    out.push_str("</div>");
    out
}

/// Cover letters are plain text; line breaks are preserved by `<pre>`.
pub fn render_cover_letter(content: &str) -> String {
    format!(
        r#"<div class="cover-letter"><pre>{}</pre></div>"#,
        encode_text(content)
    )
}

fn template_class(template: Template) -> &'static str {
    match template {
        Template::Modern => "modern",
        Template::Classic => "classic",
    }
}

fn role_class(role: Role) -> &'static str {
    match role {
        Role::Page => "page",
        Role::Sidebar => "sidebar",
        Role::Main => "main",
        Role::Header => "header",
        Role::Section => "section",
        Role::Entry => "entry",
        Role::EntryMeta => "entry-meta",
    }
}

fn render_node(node: &Node, out: &mut String) {
    match node {
        Node::Container { role, children } => {
            out.push_str(&format!(r#"<div class="{}">"#, role_class(*role)));
            for child in children {
                render_node(child, out);
            }
            out.push_str("</div>");
        }
        Node::Heading { level, text } => {
            let level = (*level).clamp(1, 6);
            out.push_str(&format!("<h{level}>{}</h{level}>", encode_text(text)));
        }
        Node::Paragraph { text, style } => {
            let text = encode_text(text);
            let paragraph = match style {
                TextStyle::Plain => format!("<p>{text}</p>"),
                TextStyle::Strong => format!("<p><strong>{text}</strong></p>"),
                TextStyle::Italic => format!("<p><em>{text}</em></p>"),
                TextStyle::Muted => format!(r#"<p class="muted">{text}</p>"#),
            };
            out.push_str(&paragraph);
        }
        Node::Bullets { items } => {
            out.push_str("<ul>");
            for item in items {
                out.push_str(&format!("<li>{}</li>", encode_text(item)));
            }
            out.push_str("</ul>");
        }
    }
}
