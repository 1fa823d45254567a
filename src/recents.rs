use crate::db::StateDb;
use crate::editor::Editor;
use crate::error::{CliError, Result};
use serde::Serialize;
use serde_json::Value;
use std::fmt;
use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RecentKind {
    Folder,
    File,
    Workspace,
}

impl RecentKind {
    /// Command line option the editor expects in front of the URI
    pub fn option(self) -> &'static str {
        match self {
            RecentKind::Folder => "--folder-uri",
            RecentKind::File | RecentKind::Workspace => "--file-uri",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            RecentKind::Folder => "folder",
            RecentKind::File => "file",
            RecentKind::Workspace => "workspace",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Recent {
    pub uri: String,
    pub label: String,
    pub kind: RecentKind,
}

/// Where a list of recents was read from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecentsSource {
    GlobalState,
    StorageJson,
    Missing,
}

impl fmt::Display for RecentsSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecentsSource::GlobalState => write!(f, "state.vscdb"),
            RecentsSource::StorageJson => write!(f, "storage.json (legacy)"),
            RecentsSource::Missing => write!(f, "none"),
        }
    }
}

/// Read the editor's recently opened list.
///
/// The global state database is preferred. If reading it fails and a
/// `storage.json` exists, the legacy file is used instead.
pub fn load_recents(editor: &Editor) -> Result<(Vec<Recent>, RecentsSource)> {
    if editor.global_state_db.exists() {
        tracing::debug!("getting recents from global state database");
        match recents_from_global_state(&editor.global_state_db) {
            Ok(recents) => return Ok((recents, RecentsSource::GlobalState)),
            Err(e) => {
                tracing::error!(error = %e, "getting recents from global state database failed");
                if !editor.storage_json.exists() {
                    return Err(e);
                }
            }
        }
    }

    if editor.storage_json.exists() {
        tracing::debug!("getting recents from storage.json (legacy)");
        let recents = recents_from_storage_json(&editor.storage_json)?;
        return Ok((recents, RecentsSource::StorageJson));
    }

    Ok((Vec::new(), RecentsSource::Missing))
}

pub fn recents_from_global_state(path: &Path) -> Result<Vec<Recent>> {
    let db = StateDb::open(path)?;
    let entries = db.recent_entries()?;
    Ok(parse_entry_paths(&entries))
}

/// Editors before 1.64 kept the list in `storage.json`.
pub fn recents_from_storage_json(path: &Path) -> Result<Vec<Recent>> {
    tracing::debug!(path = %path.display(), "loading storage.json");
    let content = std::fs::read_to_string(path)?;
    let storage: Value = serde_json::from_str(&content)?;
    let entries = storage
        .get("openedPathsList")
        .and_then(|list| list.get("entries"))
        .and_then(Value::as_array)
        .ok_or_else(|| CliError::RecentsNotFound("openedPathsList.entries".to_string()))?;
    tracing::debug!(count = entries.len(), "found entries in storage.json");
    Ok(parse_entry_paths(entries))
}

pub fn parse_entry_paths(entries: &[Value]) -> Vec<Recent> {
    entries.iter().filter_map(parse_entry).collect()
}

fn parse_entry(entry: &Value) -> Option<Recent> {
    let (uri, kind) = if let Some(uri) = entry.get("folderUri").and_then(Value::as_str) {
        (uri, RecentKind::Folder)
    } else if let Some(uri) = entry.get("fileUri").and_then(Value::as_str) {
        (uri, RecentKind::File)
    } else if let Some(uri) = entry
        .get("workspace")
        .and_then(|w| w.get("configPath"))
        .and_then(Value::as_str)
    {
        (uri, RecentKind::Workspace)
    } else {
        tracing::warn!(%entry, "entry not recognized");
        return None;
    };

    let label = match entry.get("label").and_then(Value::as_str) {
        Some(label) => label.to_string(),
        None => uri.rsplit('/').next().unwrap_or(uri).to_string(),
    };

    Some(Recent {
        uri: uri.to_string(),
        label,
        kind,
    })
}
