mod cli;
mod commands;
mod config;
mod db;
mod editor;
mod error;
mod fuzzy;
mod launcher;
mod recents;
mod search;
mod tui;

use cli::{Cli, Commands, join_query};
use commands::Session;
use error::Result;
use search::ResultItem;
use std::io::Write;
use std::process;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    // Logs go to stderr so stdout and the picker stay clean.
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("code_recents=warn")),
        )
        .init();

    if let Err(e) = run().await {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

async fn run() -> Result<()> {
    let cli = Cli::parse_args();
    let session = Session::load(&cli.overrides)?;

    match cli.command {
        None => {
            launch_tui(&session, String::new()).await?;
        }
        Some(Commands::Pick { query }) => {
            launch_tui(&session, join_query(&query)).await?;
        }
        Some(Commands::List { query, json }) => {
            commands::run_list(&session, &join_query(&query), json).await?;
        }
        Some(Commands::Open { query }) => {
            commands::run_open(&session, &join_query(&query)).await?;
        }
        Some(Commands::Status) => {
            commands::run_status(&session).await?;
        }
        Some(Commands::Config { init }) => {
            commands::run_config(&session, init).await?;
        }
    }

    Ok(())
}

async fn launch_tui(session: &Session, query: String) -> Result<()> {
    let editor = session.require_editor()?;
    let (recents, source) = session.recents()?;
    tracing::info!(count = recents.len(), %source, "loaded recents");

    let mut app = tui::App::new(
        recents,
        session.prefs.clone(),
        editor.variant.clone(),
        query,
        80,
        24,
    );

    let mut stdout = std::io::stdout();
    crossterm::terminal::enable_raw_mode()?;
    enter_alternate_screen(&mut stdout, crossterm::terminal::disable_raw_mode)?;

    let backend = ratatui::backend::CrosstermBackend::new(stdout);
    let terminal = ratatui::Terminal::new(backend)?;

    let result = run_tui(terminal, &mut app).await;

    crossterm::terminal::disable_raw_mode()?;
    let mut stdout = std::io::stdout();
    crossterm::execute!(stdout, crossterm::terminal::LeaveAlternateScreen)?;

    let chosen: Option<ResultItem> = result?;

    if let Some(item) = chosen {
        println!("Opening {} ({})", item.name, item.description);
        launcher::open_target(editor, &item.target, &session.prefs.excluded_env_list()).await?;
    }

    Ok(())
}

/// Switch `out` to the alternate screen, calling `restore` if that fails.
fn enter_alternate_screen<W: Write>(
    out: &mut W,
    restore: impl FnOnce() -> std::io::Result<()>,
) -> Result<()> {
    if let Err(e) = crossterm::execute!(out, crossterm::terminal::EnterAlternateScreen) {
        let _ = restore();
        return Err(e.into());
    }
    Ok(())
}

async fn run_tui(
    mut terminal: ratatui::Terminal<ratatui::backend::CrosstermBackend<std::io::Stdout>>,
    app: &mut tui::App,
) -> Result<Option<ResultItem>> {
    let (w, h) = crossterm::terminal::size()
        .map(|(w, h)| (w as usize, h as usize))
        .unwrap_or((80, 24));
    app.update_terminal_size(w, h);

    let mut event_handler = tui::EventHandler::new();

    loop {
        terminal.draw(|f| {
            tui::draw(f, app);
        })?;

        match event_handler.next().await {
            Some(event) => {
                if tui::handlers::EventHandler::handle(&event, app) {
                    break;
                }
            }
            None => break,
        }
    }

    event_handler.stop();
    Ok(app.chosen.take())
}
