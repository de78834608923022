use std::path::{Path, PathBuf};
use std::process::Command;

use tracing::debug;

use crate::error::{ChangelogError, Result};
use crate::git::GitCommand;

/// Runs the system `git` binary inside a working directory
///
/// Inherits the user's git configuration. Any non-zero exit is reported as
/// [ChangelogError::Git] with the combined stdout and stderr as message.
#[derive(Debug, Clone)]
pub struct SystemGit {
    workdir: PathBuf,
}

impl SystemGit {
    /// Create an adapter rooted at `workdir`
    pub fn new(workdir: impl AsRef<Path>) -> Self {
        SystemGit {
            workdir: workdir.as_ref().to_path_buf(),
        }
    }

    /// Directory git is executed in
    pub fn workdir(&self) -> &Path {
        &self.workdir
    }
}

impl Default for SystemGit {
    fn default() -> Self {
        Self::new(".")
    }
}

impl GitCommand for SystemGit {
    fn run(&self, args: &[&str]) -> Result<String> {
        debug!(args = ?args, workdir = %self.workdir.display(), "running git");

        let output = Command::new("git")
            .args(args)
            .current_dir(&self.workdir)
            .output()
            .map_err(|e| ChangelogError::git(args, format!("failed to spawn git: {}", e)))?;

        let stdout = String::from_utf8_lossy(&output.stdout);

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(ChangelogError::git(args, format!("{}{}", stdout, stderr)));
        }

        Ok(stdout.into_owned())
    }
}
