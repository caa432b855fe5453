use crate::commands::common::{print_notes, run_tracked, Session};
use crate::error::CliError;

pub async fn run_list(session: &Session, as_json: bool) -> Result<(), CliError> {
    let state = &session.state.notes;
    let notes = run_tracked(state, session.client.get_all_notes()).await?;
    state.notes.set(notes);

    print_notes(&state.notes.get(), as_json)
}
