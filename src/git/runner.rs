//! git::runner
//!
//! The external-process collaborator.
//!
//! [`GitRunner`] is the narrow capability boundary behind which the git
//! binary lives: one method, `run`, taking an argument list and an optional
//! working directory and returning captured output. Production code uses
//! [`SystemGitRunner`]; tests substitute a scripted fake so control flow can
//! be exercised without a repository.

use std::path::Path;
use std::process::Stdio;

use async_trait::async_trait;
use tokio::process::Command;

use super::interface::GitError;

/// Captured output of one successful git invocation.
#[derive(Debug, Clone, Default)]
pub struct ToolOutput {
    pub stdout: String,
    pub stderr: String,
}

/// Capability to run the external git binary.
///
/// One call maps to one process invocation, which is the sole suspension
/// point of every operation in this crate. Implementations resolve with
/// [`ToolOutput`] only on a zero exit status; a non-zero exit becomes
/// [`GitError::Tool`] carrying the tool's own stderr detail.
#[async_trait]
pub trait GitRunner: Send + Sync {
    /// Run `git <args>` in `cwd` (or the process working directory).
    async fn run(&self, cwd: Option<&Path>, args: &[&str]) -> Result<ToolOutput, GitError>;
}

/// Runs the real `git` binary found on `PATH`.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemGitRunner;

#[async_trait]
impl GitRunner for SystemGitRunner {
    async fn run(&self, cwd: Option<&Path>, args: &[&str]) -> Result<ToolOutput, GitError> {
        let mut command = Command::new("git");
        command
            .args(args)
            // Never block on a terminal prompt; a missing credential is a failure.
            .env("GIT_TERMINAL_PROMPT", "0")
            .stdin(Stdio::null());
        if let Some(dir) = cwd {
            command.current_dir(dir);
        }

        let output = command
            .output()
            .await
            .map_err(|source| GitError::Spawn { source })?;

        let stdout = String::from_utf8_lossy(&output.stdout).into_owned();
        let stderr = String::from_utf8_lossy(&output.stderr).into_owned();

        if !output.status.success() {
            return Err(GitError::tool_failure(args, &stdout, &stderr, output.status.code()));
        }

        Ok(ToolOutput { stdout, stderr })
    }
}
