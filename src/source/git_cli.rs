use std::path::PathBuf;
use std::process::Command;

use crate::error::{GitRecentError, Result};
use crate::source::{LogSource, RECENT_COMMIT_LIMIT};

/// [LogSource] implementation that spawns the system `git` binary.
///
/// Runs `git log --oneline -n 20` in the configured working directory and
/// returns its output lines. Spawns exactly one process per call, with no
/// caching and no retry. The directory must be inside a git work tree;
/// otherwise git itself reports the failure.
pub struct GitCliSource {
    workdir: PathBuf,
}

impl GitCliSource {
    /// Creates a source that runs git in the current working directory.
    pub fn new() -> Self {
        GitCliSource {
            workdir: PathBuf::from("."),
        }
    }

    /// Creates a source that runs git in the given directory.
    ///
    /// # Arguments
    /// * `workdir` - Directory to run `git log` in (as with `git -C`)
    pub fn in_dir(workdir: impl Into<PathBuf>) -> Self {
        GitCliSource {
            workdir: workdir.into(),
        }
    }
}

impl Default for GitCliSource {
    fn default() -> Self {
        Self::new()
    }
}

impl LogSource for GitCliSource {
    fn recent_commits(&self) -> Result<Vec<String>> {
        let output = Command::new("git")
            .args(["log", "--oneline", "-n", "20"])
            .current_dir(&self.workdir)
            .output()
            .map_err(|e| {
                log::error!("Failed to spawn git: {}", e);
                GitRecentError::Io(e)
            })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            let detail = format!(
                "git log exited with {}: {}",
                output.status,
                stderr.trim()
            );
            log::error!("Failed to fetch git log: {}", detail);
            return Err(GitRecentError::log_tool(detail));
        }

        // The tool terminates its output with a newline; dropping empty lines
        // keeps that trailing blank out of the list.
        let stdout = String::from_utf8_lossy(&output.stdout);
        let commits = stdout
            .lines()
            .filter(|line| !line.is_empty())
            .take(RECENT_COMMIT_LIMIT)
            .map(|line| line.to_string())
            .collect();

        Ok(commits)
    }
}
