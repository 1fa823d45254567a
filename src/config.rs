use crate::error::{CliError, Result};
use serde::{Deserialize, Deserializer, Serialize};
use std::path::PathBuf;

/// User preferences, stored as JSON in the config directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Preferences {
    /// Keyword that prefixes a query, e.g. `code myproject`
    pub keyword: String,
    /// Comma-separated environment variables withheld from the editor
    pub excluded_env_vars: String,
    /// Offer the raw query as a path to open
    #[serde(deserialize_with = "lenient_bool")]
    pub create_file: bool,
    /// Comma-separated substrings; recents whose URI contains one are hidden
    pub exclude_dir: String,
}

impl Default for Preferences {
    fn default() -> Self {
        Preferences {
            keyword: "code".to_string(),
            excluded_env_vars: String::new(),
            create_file: false,
            exclude_dir: String::new(),
        }
    }
}

impl Preferences {
    pub fn excluded_env_list(&self) -> Vec<String> {
        split_list(&self.excluded_env_vars)
    }

    pub fn exclude_dir_list(&self) -> Vec<String> {
        split_list(&self.exclude_dir)
    }
}

fn split_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

/// Accepts `true`, `"true"` and `"True"`; anything else is false.
fn lenient_bool<'de, D>(deserializer: D) -> std::result::Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(match value {
        serde_json::Value::Bool(b) => b,
        serde_json::Value::String(s) => s.trim().eq_ignore_ascii_case("true"),
        _ => false,
    })
}

pub struct ConfigManager {
    path: PathBuf,
}

impl ConfigManager {
    /// Config manager for ~/.config/code-recents/config.json
    pub fn new() -> Result<Self> {
        let base = dirs::config_dir()
            .ok_or(CliError::ConfigError("Could not determine config directory".to_string()))?;
        Ok(Self::with_path(base.join("code-recents").join("config.json")))
    }

    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        ConfigManager { path: path.into() }
    }

    pub fn path(&self) -> &PathBuf {
        &self.path
    }

    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    /// Load preferences, falling back to defaults when no file exists
    pub fn load(&self) -> Result<Preferences> {
        if !self.exists() {
            tracing::debug!(path = %self.path.display(), "no config file, using defaults");
            return Ok(Preferences::default());
        }
        let content = std::fs::read_to_string(&self.path)?;
        let prefs = serde_json::from_str(&content)?;
        Ok(prefs)
    }

    pub fn save(&self, prefs: &Preferences) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = serde_json::to_string_pretty(prefs)?;
        std::fs::write(&self.path, content)?;
        Ok(())
    }
}
