use crate::commands::Session;
use crate::error::Result;
use crate::launcher;
use crate::search;

pub async fn run_open(session: &Session, query: &str) -> Result<()> {
    let editor = session.require_editor()?;
    let (recents, _) = session.recents()?;

    let Some(best) = search::best_match(query, &recents, &session.prefs) else {
        eprintln!("No recents match '{}'", query);
        return Ok(());
    };

    println!("Opening {} ({})", best.name, best.description);
    launcher::open_target(editor, &best.target, &session.prefs.excluded_env_list()).await?;
    Ok(())
}
