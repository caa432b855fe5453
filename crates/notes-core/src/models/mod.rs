//! Data models for the notes API

mod note;

pub use note::{CreateNoteRequest, Note, NoteId, UpdateNoteRequest};
