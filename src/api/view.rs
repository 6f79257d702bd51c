//! Server-side HTML rendering.
//!
//! Templates are embedded at compile time and parsed once into a [`View`],
//! which the router holds in its state.

use rust_embed::RustEmbed;

use super::ApiError;
use crate::db::Note;

#[derive(RustEmbed)]
#[folder = "assets/templates/"]
#[include = "*.html"]
struct Templates;

/// Renders notes into full HTML pages.
#[derive(Debug, Clone)]
pub struct View {
    base: String,
    note: String,
    notes: String,
    note_item: String,
}

impl View {
    /// Load every template, failing on the first one that is missing.
    pub fn load() -> Result<Self, ApiError> {
        Ok(Self {
            base: template("_base.html")?,
            note: template("note.html")?,
            notes: template("notes.html")?,
            note_item: template("note_item.html")?,
        })
    }

    /// Render a single note page.
    pub fn note(&self, note: &Note) -> String {
        let title = escape_html(&note.title);
        let author = escape_html(&note.author.name);
        let content = escape_html(&note.content);
        let body = fill(
            &self.note,
            &[
                ("title", title.as_str()),
                ("author", author.as_str()),
                ("content", content.as_str()),
            ],
        );
        self.page(&note.title, &body)
    }

    /// Render the listing page.
    pub fn notes(&self, notes: &[Note]) -> String {
        let items = if notes.is_empty() {
            r#"<li class="empty">No notes yet.</li>"#.to_string()
        } else {
            notes
                .iter()
                .map(|note| {
                    let id = escape_html(&note.id);
                    let title = escape_html(&note.title);
                    let author = escape_html(&note.author.name);
                    fill(
                        &self.note_item,
                        &[
                            ("id", id.as_str()),
                            ("title", title.as_str()),
                            ("author", author.as_str()),
                        ],
                    )
                })
                .collect::<Vec<_>>()
                .join("\n")
        };

        let body = fill(&self.notes, &[("items", items.as_str())]);
        self.page("Notes", &body)
    }

    fn page(&self, title: &str, body: &str) -> String {
        let title = escape_html(title);
        fill(&self.base, &[("title", title.as_str()), ("body", body)])
    }
}

fn template(name: &str) -> Result<String, ApiError> {
    let missing = || ApiError::Template {
        name: name.to_string(),
    };
    let file = Templates::get(name).ok_or_else(missing)?;
    String::from_utf8(file.data.into_owned()).map_err(|_| missing())
}

/// Substitute `{{key}}` placeholders in a single pass.
///
/// Values are inserted verbatim and never rescanned. Unknown keys are kept.
fn fill(template: &str, vars: &[(&str, &str)]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(start) = rest.find("{{") {
        out.push_str(&rest[..start]);
        let after = &rest[start + 2..];

        let Some(end) = after.find("}}") else {
            out.push_str(&rest[start..]);
            return out;
        };

        let key = &after[..end];
        match vars.iter().find(|(k, _)| *k == key) {
            Some((_, value)) => out.push_str(value),
            None => out.push_str(&rest[start..start + end + 4]),
        }
        rest = &after[end + 2..];
    }

    out.push_str(rest);
    out
}

fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}
