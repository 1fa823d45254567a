use crate::editor::Editor;
use crate::error::{CliError, Result};
use crate::search::LaunchTarget;
use std::ffi::OsString;
use std::path::Path;
use std::process::ExitStatus;
use tokio::process::Command;

/// Current environment minus every variable named in `excluded`.
pub fn filtered_env<I>(vars: I, excluded: &[String]) -> Vec<(OsString, OsString)>
where
    I: IntoIterator<Item = (OsString, OsString)>,
{
    vars.into_iter()
        .filter(|(name, _)| !excluded.iter().any(|ex| name.as_os_str() == ex.as_str()))
        .collect()
}

pub fn build_command(binary: &Path, target: &LaunchTarget, excluded: &[String]) -> Command {
    let mut cmd = Command::new(binary);
    if !target.option.is_empty() {
        cmd.arg(&target.option);
    }
    cmd.arg(&target.uri);
    cmd.env_clear()
        .envs(filtered_env(std::env::vars_os(), excluded));
    cmd
}

/// Run the editor for `target` and wait for the launcher process to exit.
pub async fn open_target(editor: &Editor, target: &LaunchTarget, excluded: &[String]) -> Result<ExitStatus> {
    tracing::info!(
        editor = %editor.installed_path.display(),
        option = %target.option,
        uri = %target.uri,
        "opening recent"
    );
    if !excluded.is_empty() {
        tracing::debug!(?excluded, "withholding environment variables");
    }

    let status = build_command(&editor.installed_path, target, excluded)
        .status()
        .await
        .map_err(|e| CliError::LaunchError(editor.installed_path.display().to_string(), e.to_string()))?;

    if !status.success() {
        tracing::warn!(%status, "editor exited unsuccessfully");
    }
    Ok(status)
}
