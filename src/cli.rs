use crate::config::Preferences;
use clap::{Args, Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(
    name = "code-recents",
    about = "Reopen recent Cursor, Code and VSCodium workspaces with a fuzzy query",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    #[command(flatten)]
    pub overrides: Overrides,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Pick a recent interactively
    #[command(about = "Pick a recent interactively")]
    Pick {
        /// Initial query
        query: Vec<String>,
    },

    /// Print the ranked recents for a query
    #[command(about = "Print ranked recents")]
    List {
        query: Vec<String>,

        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Open the best match for a query
    #[command(about = "Open the best match for a query")]
    Open {
        #[arg(required = true)]
        query: Vec<String>,
    },

    /// Show the located editor and where recents come from
    #[command(about = "Show editor and recents status")]
    Status,

    /// Show preferences
    #[command(about = "Show preferences")]
    Config {
        /// Write default preferences if no config file exists
        #[arg(long)]
        init: bool,
    },
}

/// Per-invocation preference overrides.
#[derive(Args, Debug, Default)]
pub struct Overrides {
    /// Comma-separated substrings; matching recents are hidden
    #[arg(long, global = true)]
    pub exclude_dir: Option<String>,

    /// Comma-separated environment variables not passed to the editor
    #[arg(long = "exclude-env", global = true)]
    pub excluded_env_vars: Option<String>,

    /// Offer the typed query as a path to open
    #[arg(long, global = true)]
    pub create_file: bool,
}

impl Overrides {
    pub fn apply(&self, prefs: &mut Preferences) {
        if let Some(dirs) = &self.exclude_dir {
            prefs.exclude_dir = dirs.clone();
        }
        if let Some(vars) = &self.excluded_env_vars {
            prefs.excluded_env_vars = vars.clone();
        }
        if self.create_file {
            prefs.create_file = true;
        }
    }
}

impl Cli {
    pub fn parse_args() -> Self {
        Parser::parse()
    }
}

pub fn join_query(words: &[String]) -> String {
    words.join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_subcommand() {
        let cli = Cli::try_parse_from(["code-recents"]).unwrap();
        assert!(cli.command.is_none());
    }

    #[test]
    fn test_list_with_query() {
        let cli = Cli::try_parse_from(["code-recents", "list", "my", "api", "--json"]).unwrap();
        match cli.command {
            Some(Commands::List { query, json }) => {
                assert_eq!(join_query(&query), "my api");
                assert!(json);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_open_requires_query() {
        assert!(Cli::try_parse_from(["code-recents", "open"]).is_err());
    }

    #[test]
    fn test_global_overrides() {
        let cli = Cli::try_parse_from([
            "code-recents",
            "open",
            "api",
            "--exclude-dir",
            "/tmp,/mnt",
            "--exclude-env",
            "PYTHONPATH",
        ])
        .unwrap();
        let mut prefs = Preferences::default();
        cli.overrides.apply(&mut prefs);
        assert_eq!(prefs.exclude_dir, "/tmp,/mnt");
        assert_eq!(prefs.excluded_env_vars, "PYTHONPATH");
        assert!(!prefs.create_file);
    }

    #[test]
    fn test_help_is_display_help() {
        let err = Cli::try_parse_from(["code-recents", "--help"]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::DisplayHelp);
    }
}
