use crate::commands::common::{parse_note_id, run_tracked, Session};
use crate::error::CliError;

pub async fn run_delete(session: &Session, id: &str) -> Result<(), CliError> {
    let note_id = parse_note_id(id)?;
    let state = &session.state.notes;
    run_tracked(state, session.client.delete_note(note_id)).await?;

    println!("{note_id}");
    state.notes.update(|notes| notes.retain(|note| note.id != note_id));
    Ok(())
}
