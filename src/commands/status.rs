use crate::commands::Session;
use crate::error::Result;

pub async fn run_status(session: &Session) -> Result<()> {
    let Some(editor) = &session.editor else {
        println!("No Cursor, Code or VSCodium installation found.");
        println!("Looked for cursor, code and vscodium in /usr/bin, /bin and /snap/bin.\n");
        return Ok(());
    };

    println!("\nEditor Status");
    println!("=============\n");

    println!("Editor:          {}", editor.variant);
    println!("Binary:          {}", editor.installed_path.display());
    println!("Config:          {}", editor.config_path.display());
    println!("State DB:        {} {}", exists_symbol(editor.global_state_db.exists()), editor.global_state_db.display());
    println!("storage.json:    {} {}", exists_symbol(editor.storage_json.exists()), editor.storage_json.display());

    match session.recents() {
        Ok((recents, source)) => {
            println!("Recents:         {}", recents.len());
            println!("Read from:       {}\n", source);
        }
        Err(e) => {
            println!("Recents:         unreadable ({})\n", e);
        }
    }

    Ok(())
}

fn exists_symbol(exists: bool) -> &'static str {
    if exists { "✓" } else { "✗" }
}
