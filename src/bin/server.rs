//! Notebook HTTP server binary.
//!
//! This binary creates the concrete database implementation and passes it
//! to the HTTP layer. The HTTP layer remains agnostic of the storage backend.

use std::net::IpAddr;
use std::path::PathBuf;

use clap::Parser;
use miette::Diagnostic;
use notebook::api::{self, ApiError, Config};
use notebook::db::{DbError, SqliteDatabase};
use notebook::paths::resolve_db_path;
use thiserror::Error;

#[derive(Error, Diagnostic, Debug)]
enum BinaryError {
    #[error("Database error: {0}")]
    #[diagnostic(code(notebook::binary::database))]
    Database(#[from] DbError),

    #[error("Failed to create data directory: {0}")]
    #[diagnostic(code(notebook::binary::io))]
    Io(#[from] std::io::Error),

    #[error("Server error: {0}")]
    #[diagnostic(code(notebook::binary::api))]
    Api(#[from] ApiError),
}

#[derive(Parser)]
#[command(name = "nb-server")]
#[command(author, version, about = "Notebook HTTP server", long_about = None)]
struct Cli {
    /// Host address to bind to
    #[arg(long, default_value = "0.0.0.0")]
    host: IpAddr,

    /// Port to listen on
    #[arg(short, long, default_value = "8080")]
    port: u16,

    /// Database file path (defaults to NB_DB, then ~/.local/share/notebook/notes.db)
    #[arg(long)]
    db: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> miette::Result<()> {
    run().await.map_err(Into::into)
}

async fn run() -> Result<(), BinaryError> {
    let cli = Cli::parse();

    let db_path = resolve_db_path(cli.db);
    println!("Opening database at {:?}", db_path);

    // Ensure parent directory exists
    if let Some(parent) = db_path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    // A store that cannot be opened is fatal
    let db = SqliteDatabase::open(&db_path).await?;

    api::run(
        Config {
            host: cli.host,
            port: cli.port,
        },
        db,
    )
    .await?;

    Ok(())
}
