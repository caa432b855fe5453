use notes_core::UpdateNoteRequest;

use crate::commands::common::{normalize_content, parse_note_id, run_tracked, Session};
use crate::error::CliError;

pub async fn run_edit(
    session: &Session,
    id: &str,
    title: Option<String>,
    content: Option<String>,
) -> Result<(), CliError> {
    let note_id = parse_note_id(id)?;
    let request = UpdateNoteRequest {
        title: title.as_deref().and_then(normalize_content),
        content: content.as_deref().and_then(normalize_content),
    };
    if request.is_empty() {
        return Err(CliError::EmptyUpdate);
    }

    let state = &session.state.notes;
    let updated = run_tracked(state, session.client.update_note(note_id, &request)).await?;

    println!("{}", updated.id);
    state.notes.update(|notes| {
        if let Some(index) = notes.iter().position(|note| note.id == updated.id) {
            notes[index] = updated;
        } else {
            notes.push(updated);
        }
    });
    Ok(())
}
