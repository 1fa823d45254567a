use std::path::{Path, PathBuf};

pub const PATH_DIRS: &[&str] = &["/usr/bin", "/bin", "/snap/bin"];
pub const VARIANTS: &[&str] = &["Cursor", "Code", "VSCodium"];

/// A located editor installation and its configuration store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Editor {
    pub variant: String,
    pub installed_path: PathBuf,
    pub config_path: PathBuf,
    pub global_state_db: PathBuf,
    pub storage_json: PathBuf,
}

impl Editor {
    /// Locate the first installed variant under the standard directories.
    pub fn locate() -> Option<Self> {
        let root = config_root(dirs::home_dir())?;
        let path_dirs: Vec<PathBuf> = PATH_DIRS.iter().map(PathBuf::from).collect();
        Self::locate_in(&path_dirs, &root)
    }

    /// Directories are searched in order, variants in order within each.
    /// A candidate needs its binary, its config dir and a `storage.json`.
    pub fn locate_in(path_dirs: &[PathBuf], config_root: &Path) -> Option<Self> {
        tracing::debug!("locating installation and config directories");
        for dir in path_dirs {
            for variant in VARIANTS {
                let installed_path = dir.join(variant.to_lowercase());
                let config_path = config_root.join(variant);
                tracing::debug!(
                    installed = %installed_path.display(),
                    config = %config_path.display(),
                    "evaluating installation"
                );
                let global_storage = config_path.join("User").join("globalStorage");
                let storage_json = global_storage.join("storage.json");
                if installed_path.exists() && config_path.exists() && storage_json.exists() {
                    tracing::debug!(
                        installed = %installed_path.display(),
                        config = %config_path.display(),
                        "found installation"
                    );
                    return Some(Editor {
                        variant: variant.to_string(),
                        installed_path,
                        global_state_db: global_storage.join("state.vscdb"),
                        storage_json,
                        config_path,
                    });
                }
            }
        }

        tracing::warn!("unable to find a Cursor, Code or VSCodium installation and config directory");
        None
    }
}

/// `~/.config`, or `None` when the home directory is unknown.
fn config_root(home: Option<PathBuf>) -> Option<PathBuf> {
    match home {
        Some(home) => Some(home.join(".config")),
        None => {
            tracing::warn!("could not determine home directory");
            None
        }
    }
}
