use clap::{Parser, Subcommand};
use notes_core::Theme;

#[derive(Parser)]
#[command(name = "notes")]
#[command(about = "Manage notes stored behind a remote notes API")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// API base URL (overrides NOTES_API_BASE_URL)
    #[arg(long, global = true, value_name = "URL")]
    pub api_url: Option<String>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List all notes
    #[command(alias = "ls")]
    List {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Search notes (matching is done by the server)
    Search {
        /// Search query
        query: String,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Create a new note
    #[command(alias = "new")]
    Add {
        /// Note title (defaults to the first line of the content)
        #[arg(short, long)]
        title: Option<String>,
        /// Note content
        content: Vec<String>,
    },
    /// Update an existing note
    Edit {
        /// Numeric note ID
        id: String,
        /// Replacement title
        #[arg(short, long)]
        title: Option<String>,
        /// Replacement content
        #[arg(short, long)]
        content: Option<String>,
    },
    /// Delete a note
    #[command(alias = "rm")]
    Delete {
        /// Numeric note ID
        id: String,
    },
    /// List available color themes
    Themes {
        /// Select a theme
        #[arg(long, value_name = "THEME")]
        set: Option<Theme>,
    },
}
