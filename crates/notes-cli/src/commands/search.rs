use crate::commands::common::{normalize_search_query, print_notes, run_tracked, Session};
use crate::error::CliError;

pub async fn run_search(session: &Session, query: &str, as_json: bool) -> Result<(), CliError> {
    let state = &session.state.notes;
    let normalized_query = normalize_search_query(query)?;
    state.search_query.set(normalized_query.clone());

    let notes = run_tracked(state, session.client.search_notes(&normalized_query)).await?;
    state.notes.set(notes);

    print_notes(&state.notes.get(), as_json)
}
