//! Reactive application state.
//!
//! State is owned explicitly and passed to UI code rather than held in
//! globals. Each cell is a [`Store`] with synchronous set/subscribe semantics.
//! Cells are single-threaded (`Rc`-based) and carry no cross-cell invariants.

mod notes;
mod store;
mod theme;

pub use notes::NotesState;
pub use store::{Store, Subscription};
pub use theme::{Theme, ThemeState};

/// Application-wide state handed to the UI layer.
#[derive(Debug, Clone, Default)]
pub struct AppState {
    pub notes: NotesState,
    pub theme: ThemeState,
}
