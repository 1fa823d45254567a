use crate::commands::Session;
use crate::config::{ConfigManager, Preferences};
use crate::error::Result;

pub async fn run_config(session: &Session, init: bool) -> Result<()> {
    let config_manager = ConfigManager::new()?;

    if init {
        if config_manager.exists() {
            println!("Config already exists at {}", config_manager.path().display());
        } else {
            config_manager.save(&Preferences::default())?;
            println!("✓ Wrote default config to {}", config_manager.path().display());
        }
        println!();
    }

    let prefs = &session.prefs;
    println!("Config file:        {}", config_manager.path().display());
    println!("Keyword:            {}", prefs.keyword);
    println!("Excluded env vars:  {}", display_list(&prefs.excluded_env_list()));
    println!("Excluded dirs:      {}", display_list(&prefs.exclude_dir_list()));
    println!("Create file item:   {}\n", if prefs.create_file { "yes" } else { "no" });

    Ok(())
}

fn display_list(values: &[String]) -> String {
    if values.is_empty() {
        "(none)".to_string()
    } else {
        values.join(", ")
    }
}
