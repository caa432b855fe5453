use std::io;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Api(#[from] notes_core::ApiError),
    #[error(transparent)]
    Config(#[from] notes_core::ConfigError),
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error(transparent)]
    Serialization(#[from] serde_json::Error),
    #[error("No note content provided")]
    EmptyContent,
    #[error("Nothing to update: pass --title and/or --content")]
    EmptyUpdate,
    #[error("Search query cannot be empty")]
    EmptySearchQuery,
    #[error("Invalid note ID '{0}': expected a number")]
    InvalidNoteId(String),
}
