use std::future::Future;
use std::io::{self, IsTerminal, Read};

use notes_core::{ApiError, Note, NoteId, NotesApiClient, NotesState};

use crate::error::CliError;

/// Maximum characters taken from content when deriving a title.
const DERIVED_TITLE_MAX_CHARS: usize = 60;

/// API client plus the state cells the commands drive.
pub struct Session {
    pub client: NotesApiClient,
    pub state: notes_core::AppState,
}

/// Runs an API call while reflecting its progress into `state`.
///
/// `is_loading` is raised for the duration of the call and `error` holds the
/// failure text (or `None` once a call succeeds).
pub async fn run_tracked<T, F>(state: &NotesState, operation: F) -> Result<T, CliError>
where
    F: Future<Output = Result<T, ApiError>>,
{
    state.is_loading.set(true);
    state.error.set(None);

    let result = operation.await;
    if let Err(error) = &result {
        state.error.set(Some(error.to_string()));
    }

    state.is_loading.set(false);
    result.map_err(CliError::from)
}

pub fn print_notes(notes: &[Note], as_json: bool) -> Result<(), CliError> {
    if as_json {
        println!("{}", serde_json::to_string_pretty(notes)?);
    } else {
        for line in format_note_lines(notes) {
            println!("{line}");
        }
    }
    Ok(())
}

pub fn format_note_lines(notes: &[Note]) -> Vec<String> {
    notes
        .iter()
        .map(|note| {
            let preview = note_preview(note, 40);
            match note.updated_at.as_deref().or(note.created_at.as_deref()) {
                Some(timestamp) => format!("{:>6}  {preview:<40}  {timestamp}", note.id),
                None => format!("{:>6}  {preview}", note.id),
            }
        })
        .collect()
}

pub fn note_preview(note: &Note, max_chars: usize) -> String {
    let collapsed = note
        .title_preview(usize::MAX)
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ");

    if collapsed.chars().count() <= max_chars {
        collapsed
    } else {
        let take_len = max_chars.saturating_sub(3);
        let mut truncated = collapsed.chars().take(take_len).collect::<String>();
        truncated.push_str("...");
        truncated
    }
}

pub fn resolve_note_content(content_parts: &[String]) -> Result<String, CliError> {
    if let Some(content) = normalize_content(&content_parts.join(" ")) {
        return Ok(content);
    }

    if let Some(content) = read_piped_stdin()? {
        return Ok(content);
    }

    Err(CliError::EmptyContent)
}

pub fn normalize_content(content: &str) -> Option<String> {
    let trimmed = content.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// First line of `content`, capped for use as a title.
pub fn derive_title(content: &str) -> String {
    content
        .lines()
        .next()
        .unwrap_or("")
        .trim()
        .chars()
        .take(DERIVED_TITLE_MAX_CHARS)
        .collect()
}

pub fn normalize_search_query(query: &str) -> Result<String, CliError> {
    let trimmed = query.trim();
    if trimmed.is_empty() {
        Err(CliError::EmptySearchQuery)
    } else {
        Ok(trimmed.to_string())
    }
}

pub fn parse_note_id(id: &str) -> Result<NoteId, CliError> {
    id.parse::<NoteId>()
        .map_err(|_| CliError::InvalidNoteId(id.trim().to_string()))
}

pub fn read_piped_stdin() -> Result<Option<String>, CliError> {
    let stdin = io::stdin();
    if stdin.is_terminal() {
        return Ok(None);
    }

    let mut buffer = String::new();
    stdin.lock().read_to_string(&mut buffer)?;
    Ok(normalize_content(&buffer))
}
