use miette::Diagnostic;
use thiserror::Error;

use crate::db::DbError;

#[derive(Error, Diagnostic, Debug)]
pub enum CliError {
    #[error("Database error: {0}")]
    #[diagnostic(code(notebook::cli::database))]
    Database(#[from] DbError),

    #[error("Failed to prepare database directory: {0}")]
    #[diagnostic(
        code(notebook::cli::io),
        help("Pass --db or set NB_DB to a writable location")
    )]
    Io(#[from] std::io::Error),

    #[error("Failed to encode output: {0}")]
    #[diagnostic(code(notebook::cli::json))]
    Json(#[from] serde_json::Error),
}

pub type CliResult<T> = Result<T, CliError>;
