mod commands;
pub mod error;
mod utils;

#[cfg(test)]
mod utils_test;

use std::path::PathBuf;

use clap::{CommandFactory, Parser, Subcommand};

use crate::db::{Database, SqliteDatabase};
use crate::paths::resolve_db_path;
use error::CliResult;

#[derive(Parser)]
#[command(name = "nb")]
#[command(author, version, about = "Notebook management CLI", long_about = None)]
pub struct Cli {
    /// Database file path (default: NB_DB env or ~/.local/share/notebook/notes.db)
    #[arg(long, global = true)]
    pub db: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Author management commands
    Author {
        #[command(subcommand)]
        command: AuthorCommands,
    },
    /// Note management commands
    Note {
        #[command(subcommand)]
        command: NoteCommands,
    },
}

#[derive(Subcommand)]
enum AuthorCommands {
    /// Create an author
    Add {
        /// Display name
        name: String,
    },
    /// List authors
    List {
        /// Output format (table or json)
        #[arg(long, default_value = "table")]
        format: String,
    },
}

#[derive(Subcommand)]
enum NoteCommands {
    /// Create a note
    Add {
        /// Author ID
        #[arg(long)]
        author: String,
        /// Note title
        title: String,
        /// Note content
        content: String,
    },
    /// List notes
    List {
        /// Output format (table or json)
        #[arg(long, default_value = "table")]
        format: String,
    },
    /// Show a single note
    Get {
        /// Note ID
        id: String,
        /// Output format (table or json)
        #[arg(long, default_value = "table")]
        format: String,
    },
}

async fn execute<D: Database>(db: &D, command: Commands) -> CliResult<String> {
    match command {
        Commands::Author { command } => match command {
            AuthorCommands::Add { name } => commands::author::add_author(db, &name).await,
            AuthorCommands::List { format } => commands::author::list_authors(db, &format).await,
        },
        Commands::Note { command } => match command {
            NoteCommands::Add {
                author,
                title,
                content,
            } => commands::note::add_note(db, &author, &title, &content).await,
            NoteCommands::List { format } => commands::note::list_notes(db, &format).await,
            NoteCommands::Get { id, format } => commands::note::get_note(db, &id, &format).await,
        },
    }
}

pub async fn run() -> CliResult<()> {
    let cli = Cli::parse();

    let Some(command) = cli.command else {
        // Show help when no command provided
        Cli::command().print_help()?;
        return Ok(());
    };

    let db_path = resolve_db_path(cli.db);
    if let Some(parent) = db_path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    let db = SqliteDatabase::open(&db_path).await?;
    let output = execute(&db, command).await;
    db.close().await?;

    println!("{}", output?);
    Ok(())
}
