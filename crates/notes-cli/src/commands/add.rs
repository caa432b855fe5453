use notes_core::CreateNoteRequest;

use crate::commands::common::{derive_title, resolve_note_content, run_tracked, Session};
use crate::error::CliError;

pub async fn run_add(
    session: &Session,
    title: Option<String>,
    content_parts: &[String],
) -> Result<(), CliError> {
    let content = resolve_note_content(content_parts)?;
    let title = title
        .map(|title| title.trim().to_string())
        .filter(|title| !title.is_empty())
        .unwrap_or_else(|| derive_title(&content));

    let state = &session.state.notes;
    let request = CreateNoteRequest::new(title, content);
    let note = run_tracked(state, session.client.create_note(&request)).await?;

    println!("{}", note.id);
    state.notes.update(|notes| notes.push(note));
    Ok(())
}
