pub mod list;
pub mod open;
pub mod prefs;
pub mod status;

pub use list::run_list;
pub use open::run_open;
pub use prefs::run_config;
pub use status::run_status;

use crate::cli::Overrides;
use crate::config::{ConfigManager, Preferences};
use crate::editor::Editor;
use crate::error::{CliError, Result};
use crate::recents::{self, Recent, RecentsSource};

/// Preferences and editor location shared by every command.
pub struct Session {
    pub prefs: Preferences,
    pub editor: Option<Editor>,
}

impl Session {
    pub fn load(overrides: &Overrides) -> Result<Self> {
        let mut prefs = ConfigManager::new()?.load()?;
        overrides.apply(&mut prefs);
        Ok(Session {
            prefs,
            editor: Editor::locate(),
        })
    }

    pub fn require_editor(&self) -> Result<&Editor> {
        self.editor.as_ref().ok_or(CliError::EditorNotFound)
    }

    pub fn recents(&self) -> Result<(Vec<Recent>, RecentsSource)> {
        recents::load_recents(self.require_editor()?)
    }
}
