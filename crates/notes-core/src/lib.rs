//! notes-core - Core library for the notes client
//!
//! This crate contains the HTTP client for the remote notes API, the note
//! models it exchanges, and the reactive state containers a user interface
//! binds to.

pub mod api;
pub mod config;
pub mod error;
pub mod models;
pub mod state;
pub mod util;

pub use api::{NotesApiClient, RequestOptions};
pub use config::ApiConfig;
pub use error::{ApiError, ConfigError, Error, Result};
pub use models::{CreateNoteRequest, Note, NoteId, UpdateNoteRequest};
pub use state::{AppState, NotesState, Store, Subscription, Theme, ThemeState};
