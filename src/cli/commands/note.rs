use tabled::{Table, Tabled};

use crate::cli::error::CliResult;
use crate::cli::utils::{apply_table_style, truncate_with_ellipsis};
use crate::db::{AuthorRepository, Database, Note, NoteRepository};

#[derive(Tabled)]
pub(crate) struct NoteDisplay {
    #[tabled(rename = "ID")]
    pub(crate) id: String,
    #[tabled(rename = "Title")]
    pub(crate) title: String,
    #[tabled(rename = "Author")]
    pub(crate) author: String,
}

impl From<&Note> for NoteDisplay {
    fn from(note: &Note) -> Self {
        Self {
            id: note.id.clone(),
            title: truncate_with_ellipsis(&note.title, 50),
            author: truncate_with_ellipsis(&note.author.name, 30),
        }
    }
}

/// Create a new note for an existing author
pub async fn add_note<D: Database>(
    db: &D,
    author_id: &str,
    title: &str,
    content: &str,
) -> CliResult<String> {
    let author = db.authors().get(author_id).await?;
    let note = Note::new(title, content, author);
    db.notes().create(&note).await?;
    Ok(format!("✓ Created note: {} ({})", note.title, note.id))
}

/// List all notes
pub async fn list_notes<D: Database>(db: &D, format: &str) -> CliResult<String> {
    let notes = db.notes().list().await?;

    match format {
        "json" => Ok(serde_json::to_string_pretty(&notes)?),
        _ => Ok(format_table(&notes)),
    }
}

pub(crate) fn format_table(notes: &[Note]) -> String {
    if notes.is_empty() {
        return "No notes found.".to_string();
    }

    let display_notes: Vec<NoteDisplay> = notes.iter().map(|n| n.into()).collect();
    let mut table = Table::new(display_notes);
    apply_table_style(&mut table);
    table.to_string()
}

/// Get a single note by ID
pub async fn get_note<D: Database>(db: &D, id: &str, format: &str) -> CliResult<String> {
    let note = db.notes().get(id).await?;

    match format {
        "json" => Ok(serde_json::to_string_pretty(&note)?),
        _ => {
            use tabled::builder::Builder;

            let mut builder = Builder::default();
            builder.push_record(["Field", "Value"]);
            builder.push_record(["ID", &note.id]);
            builder.push_record(["Title", &note.title]);
            builder.push_record(["Author", &note.author.name]);
            builder.push_record(["Author ID", &note.author.id]);
            builder.push_record(["Content", &truncate_with_ellipsis(&note.content, 200)]);

            let mut table = builder.build();
            apply_table_style(&mut table);
            Ok(table.to_string())
        }
    }
}
