use tabled::{Table, Tabled};

use crate::cli::error::CliResult;
use crate::cli::utils::{apply_table_style, truncate_with_ellipsis};
use crate::db::{Author, AuthorRepository, Database};

#[derive(Tabled)]
pub(crate) struct AuthorDisplay {
    #[tabled(rename = "ID")]
    pub(crate) id: String,
    #[tabled(rename = "Name")]
    pub(crate) name: String,
}

impl From<&Author> for AuthorDisplay {
    fn from(author: &Author) -> Self {
        Self {
            id: author.id.clone(),
            name: truncate_with_ellipsis(&author.name, 50),
        }
    }
}

/// Create a new author
pub async fn add_author<D: Database>(db: &D, name: &str) -> CliResult<String> {
    let author = Author::new(name);
    db.authors().create(&author).await?;
    Ok(format!("✓ Created author: {} ({})", author.name, author.id))
}

/// List all authors
pub async fn list_authors<D: Database>(db: &D, format: &str) -> CliResult<String> {
    let authors = db.authors().list().await?;

    match format {
        "json" => Ok(serde_json::to_string_pretty(&authors)?),
        _ => Ok(format_table(&authors)),
    }
}

pub(crate) fn format_table(authors: &[Author]) -> String {
    if authors.is_empty() {
        return "No authors found.".to_string();
    }

    let display: Vec<AuthorDisplay> = authors.iter().map(|a| a.into()).collect();
    let mut table = Table::new(display);
    apply_table_style(&mut table);
    table.to_string()
}
