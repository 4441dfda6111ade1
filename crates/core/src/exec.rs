//! Synchronous child-process execution
//!
//! Install steps run one child at a time, stream their output straight to
//! the controlling terminal, and are fully awaited before the next step.

use std::path::Path;
use std::process::Command;

use serde::Deserialize;
use tracing::debug;

use crate::Result;
use crate::error::CoreError;

/// A single (program, args) pair from the manifest
#[derive(Debug, Clone, Deserialize)]
pub struct Cmd {
    pub program: String,
    #[serde(default)]
    pub args: Vec<String>,
}

impl Cmd {
    pub fn new<S, I, A>(program: S, args: I) -> Self
    where
        S: Into<String>,
        I: IntoIterator<Item = A>,
        A: Into<String>,
    {
        Self {
            program: program.into(),
            args: args.into_iter().map(Into::into).collect(),
        }
    }
}

/// Run `cmd` with inherited stdio and wait for it to finish
///
/// A spawn failure or non-zero exit status is an error.
pub fn run_cmd(cmd: &Cmd, cwd: Option<&Path>) -> Result<()> {
    debug!(program = %cmd.program, args = ?cmd.args, cwd = ?cwd, "spawning process");

    let mut command = Command::new(&cmd.program);
    command.args(&cmd.args);
    if let Some(dir) = cwd {
        command.current_dir(dir);
    }

    let status = command.status().map_err(|source| CoreError::Spawn {
        program: cmd.program.clone(),
        source,
    })?;

    if !status.success() {
        return Err(CoreError::CommandFailed {
            program: cmd.program.clone(),
            code: status.code(),
        });
    }

    Ok(())
}

/// True when `name` resolves to an executable on the search path
pub fn command_on_path(name: &str) -> bool {
    which::which(name).is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn run_cmd_succeeds_for_zero_exit() {
        let cmd = Cmd::new("sh", ["-c", "exit 0"]);
        run_cmd(&cmd, None).unwrap();
    }

    #[test]
    fn run_cmd_reports_non_zero_exit() {
        let cmd = Cmd::new("sh", ["-c", "exit 3"]);
        let err = run_cmd(&cmd, None).unwrap_err();
        assert!(matches!(
            err,
            CoreError::CommandFailed { code: Some(3), .. }
        ));
    }

    #[test]
    fn run_cmd_reports_spawn_failure() {
        let cmd = Cmd::new("dotup-no-such-program", Vec::<String>::new());
        let err = run_cmd(&cmd, None).unwrap_err();
        assert!(matches!(err, CoreError::Spawn { .. }));
    }

    #[test]
    fn run_cmd_honors_working_directory() {
        let temp_dir = TempDir::new().unwrap();
        let cmd = Cmd::new("sh", ["-c", "touch cwd_marker"]);

        run_cmd(&cmd, Some(temp_dir.path())).unwrap();

        assert!(temp_dir.path().join("cwd_marker").exists());
    }

    #[test]
    fn command_on_path_finds_sh() {
        assert!(command_on_path("sh"));
    }

    #[test]
    fn command_on_path_rejects_unknown() {
        assert!(!command_on_path("dotup-no-such-program"));
    }
}
