//! notes CLI - Command-line front end for the remote notes API
//!
//! Drives the API client and mirrors each call into the shared state cells,
//! the same way a graphical UI would bind to them.

mod cli;
mod commands;
mod error;


use clap::Parser;
use notes_core::{ApiConfig, AppState, NotesApiClient, Subscription};

use crate::cli::{Cli, Commands};
use crate::commands::add::run_add;
use crate::commands::common::Session;
use crate::commands::delete::run_delete;
use crate::commands::edit::run_edit;
use crate::commands::list::run_list;
use crate::commands::search::run_search;
use crate::commands::themes::run_themes;
use crate::error::CliError;

#[tokio::main]
async fn main() {
    if let Err(error) = run().await {
        eprintln!("Error: {error}");
        std::process::exit(1);
    }
}

async fn run() -> Result<(), CliError> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("notes=info".parse().expect("valid directive"))
                .add_directive("notes_core=info".parse().expect("valid directive")),
        )
        .init();

    let cli = Cli::parse();

    let config = ApiConfig::from_env()?.with_override(cli.api_url.as_deref())?;
    let session = Session {
        client: NotesApiClient::from_config(&config)?,
        state: AppState::default(),
    };
    let _trace = trace_state_changes(&session.state);
    tracing::debug!(base_url = session.client.base_url(), "notes client ready");

    match cli.command {
        Commands::List { json } => run_list(&session, json).await?,
        Commands::Search { query, json } => run_search(&session, &query, json).await?,
        Commands::Add { title, content } => run_add(&session, title, &content).await?,
        Commands::Edit { id, title, content } => run_edit(&session, &id, title, content).await?,
        Commands::Delete { id } => run_delete(&session, &id).await?,
        Commands::Themes { set } => run_themes(&session.state.theme, set),
    }

    Ok(())
}

fn trace_state_changes(state: &AppState) -> Vec<Subscription> {
    vec![
        state
            .notes
            .is_loading
            .subscribe(|loading| tracing::debug!(loading = *loading, "loading state changed")),
        state.notes.notes.subscribe(|notes| {
            tracing::debug!(count = notes.len(), "notes updated");
        }),
    ]
}
