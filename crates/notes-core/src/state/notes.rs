//! Notes screen state

use super::Store;
use crate::models::Note;

/// Independent cells backing a notes view.
///
/// Nothing here keeps the cells consistent with one another; the code that
/// drives the API client is responsible for setting them.
#[derive(Debug, Clone, Default)]
pub struct NotesState {
    pub notes: Store<Vec<Note>>,
    pub is_loading: Store<bool>,
    pub error: Store<Option<String>>,
    pub search_query: Store<String>,
}
