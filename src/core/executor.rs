//! Blocking shell execution for container-engine command lines.

use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

use crate::error::{Error, Result};

/// Runs assembled command lines through the shell, blocking, with stdio
/// passed through to the terminal so engine output streams live.
///
/// Holds the project root so builds can pin the child's working directory
/// without ever touching the parent process CWD (the pin is scoped to the
/// spawned process by construction).
pub struct Executor {
    root: PathBuf,
}

impl Executor {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Run a command in the caller's working directory.
    pub fn run(&self, command: &str) -> Result<()> {
        self.spawn(command, None)
    }

    /// Run a command with the working directory pinned to the project root.
    pub fn run_in_root(&self, command: &str) -> Result<()> {
        self.spawn(command, Some(&self.root))
    }

    fn spawn(&self, command: &str, dir: Option<&Path>) -> Result<()> {
        log_status!("exec", "{}", command);

        #[cfg(windows)]
        let mut cmd = {
            let mut cmd = Command::new("cmd");
            cmd.args(["/C", command]);
            cmd
        };

        #[cfg(not(windows))]
        let mut cmd = {
            let mut cmd = Command::new("sh");
            cmd.args(["-c", command]);
            cmd
        };

        if let Some(dir) = dir {
            cmd.current_dir(dir);
        }

        let status = cmd
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .status()
            .map_err(|e| {
                Error::internal_io(e.to_string(), Some(format!("spawn: {}", command)))
            })?;

        if !status.success() {
            return Err(Error::command_failed(command, status.code().unwrap_or(-1)));
        }

        Ok(())
    }
}
