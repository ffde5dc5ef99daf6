//! git::interface
//!
//! Typed operation surface over the external git binary.
//!
//! Every method issues exactly one process invocation through the injected
//! [`GitRunner`] and normalizes failures into [`GitError`]. Higher layers
//! never see raw tool output except through the parsed types returned here.
//!
//! # Error Handling
//!
//! - [`GitError::NotARepo`]: a path is not inside any working tree
//! - [`GitError::NoRemote`] / [`GitError::NoRemoteUrl`]: remote
//!   configuration missing before a credentialed operation
//! - [`GitError::CredentialConfig`]: credential URL construction or remote
//!   reconfiguration failed (the network operation is never attempted)
//! - [`GitError::Tool`]: the tool exited non-zero; carries its stderr
//! - [`GitError::Spawn`]: the tool could not be invoked at all

use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::core::types::CommitSummary;

use super::porcelain::{self, RawStatus};
use super::runner::{GitRunner, ToolOutput};

/// Field and record separators for machine-readable log output.
const LOG_FORMAT: &str = "--format=%H%x1f%s%x1f%aI%x1f%an%x1e";

/// Errors from git operations.
#[derive(Debug, Error)]
pub enum GitError {
    /// The path is not inside any git working tree.
    #[error("no git working tree found for path: {}", path.display())]
    NotARepo {
        /// The path that was searched.
        path: PathBuf,
    },

    /// No remote repository is configured.
    #[error("no remote repository configured")]
    NoRemote,

    /// The remote exists but reports no URL.
    #[error("remote '{remote}' has no url configured")]
    NoRemoteUrl {
        /// The remote that was queried.
        remote: String,
    },

    /// Credential URL construction or remote reconfiguration failed.
    #[error("failed to configure credentials: {message}")]
    CredentialConfig {
        /// What went wrong, without the credential values.
        message: String,
    },

    /// The git binary could not be invoked.
    #[error("failed to invoke git: {source}")]
    Spawn {
        #[source]
        source: std::io::Error,
    },

    /// git exited non-zero; `message` carries its own error detail.
    #[error("git {command} failed: {message}")]
    Tool {
        /// The subcommand that failed.
        command: String,
        /// The tool's stderr (or stdout, or exit code when both are empty).
        message: String,
    },

    /// git succeeded but produced output this crate cannot use.
    #[error("unexpected output from git {command}: {message}")]
    Parse {
        /// The subcommand whose output was unusable.
        command: String,
        /// Description of the problem.
        message: String,
    },
}

impl GitError {
    /// Build a [`GitError::Tool`] from a non-zero exit, preferring stderr
    /// detail, then stdout, then the bare exit code.
    pub(crate) fn tool_failure(
        args: &[&str],
        stdout: &str,
        stderr: &str,
        code: Option<i32>,
    ) -> Self {
        let command = args.first().copied().unwrap_or("<none>").to_string();
        let detail = if !stderr.trim().is_empty() {
            stderr.trim().to_string()
        } else if !stdout.trim().is_empty() {
            stdout.trim().to_string()
        } else {
            match code {
                Some(code) => format!("exit code {}", code),
                None => "terminated by signal".to_string(),
            }
        };
        GitError::Tool {
            command,
            message: detail,
        }
    }
}

/// Bounds for a log query.
#[derive(Debug, Clone, Default)]
pub struct LogOptions {
    /// Maximum number of commits to return.
    pub max_count: Option<usize>,
    /// Restrict to commits reachable from `to` but not from `from`.
    pub range: Option<LogRange>,
}

/// A two-dot revision range, `<from>..<to>`.
#[derive(Debug, Clone)]
pub struct LogRange {
    pub from: String,
    pub to: String,
}

impl LogOptions {
    /// The `n` most recent commits on the current branch.
    pub fn latest(n: usize) -> Self {
        Self {
            max_count: Some(n),
            ..Self::default()
        }
    }

    /// Commits reachable from `to` but not from `from`.
    pub fn between(from: &str, to: &str) -> Self {
        Self {
            max_count: None,
            range: Some(LogRange {
                from: from.to_string(),
                to: to.to_string(),
            }),
        }
    }
}

/// The typed git operation surface.
///
/// Holds the injected process runner; every method is one tool invocation.
#[derive(Debug)]
pub struct Git<R> {
    runner: R,
}

impl<R: GitRunner> Git<R> {
    pub fn new(runner: R) -> Self {
        Self { runner }
    }

    async fn run_in(&self, dir: &Path, args: &[&str]) -> Result<ToolOutput, GitError> {
        self.runner.run(Some(dir), args).await
    }

    #[cfg(test)]
    pub(crate) fn runner(&self) -> &R {
        &self.runner
    }

    // =========================================================================
    // Root resolution
    // =========================================================================

    /// Resolve the top-level directory of the working tree containing `path`.
    ///
    /// Every other operation works against the resolved root rather than the
    /// caller-supplied path, so staging, commits, and remote configuration
    /// are always rooted consistently.
    ///
    /// # Errors
    ///
    /// - [`GitError::NotARepo`] if `path` is not inside any working tree
    pub async fn show_toplevel(&self, path: &Path) -> Result<PathBuf, GitError> {
        let output = match self.run_in(path, &["rev-parse", "--show-toplevel"]).await {
            Ok(output) => output,
            Err(GitError::Tool { .. }) => {
                return Err(GitError::NotARepo {
                    path: path.to_path_buf(),
                })
            }
            Err(other) => return Err(other),
        };

        let toplevel = output.stdout.trim();
        if toplevel.is_empty() {
            return Err(GitError::Parse {
                command: "rev-parse".to_string(),
                message: "empty --show-toplevel output".to_string(),
            });
        }
        Ok(PathBuf::from(toplevel))
    }

    // =========================================================================
    // Status and history
    // =========================================================================

    /// Query raw status, split into per-category file lists.
    ///
    /// `-u` expands untracked directories into individual files.
    pub async fn status(&self, dir: &Path) -> Result<RawStatus, GitError> {
        let output = self
            .run_in(dir, &["status", "--porcelain", "-b", "-u"])
            .await?;
        Ok(porcelain::parse(&output.stdout))
    }

    /// List commits, newest first.
    pub async fn log(&self, dir: &Path, options: &LogOptions) -> Result<Vec<CommitSummary>, GitError> {
        let mut args: Vec<String> = vec!["log".to_string(), LOG_FORMAT.to_string()];
        if let Some(n) = options.max_count {
            args.push(format!("--max-count={}", n));
        }
        if let Some(range) = &options.range {
            args.push(format!("{}..{}", range.from, range.to));
        }

        let argv: Vec<&str> = args.iter().map(String::as_str).collect();
        let output = self.run_in(dir, &argv).await?;
        Ok(parse_log(&output.stdout))
    }

    /// Author date of the most recent commit, if any exist.
    pub async fn latest_commit_date(&self, dir: &Path) -> Result<Option<String>, GitError> {
        let commits = self.log(dir, &LogOptions::latest(1)).await?;
        Ok(commits.into_iter().next().map(|c| c.date))
    }

    // =========================================================================
    // Staging and commits
    // =========================================================================

    /// Stage exactly the given files.
    pub async fn stage(&self, dir: &Path, files: &[String]) -> Result<(), GitError> {
        let mut args: Vec<&str> = vec!["add", "--"];
        args.extend(files.iter().map(String::as_str));
        self.run_in(dir, &args).await?;
        Ok(())
    }

    /// Remove exactly the given files from the index.
    pub async fn unstage(&self, dir: &Path, files: &[String]) -> Result<(), GitError> {
        let mut args: Vec<&str> = vec!["reset", "--"];
        args.extend(files.iter().map(String::as_str));
        self.run_in(dir, &args).await?;
        Ok(())
    }

    /// Record a commit with the given message.
    pub async fn commit(&self, dir: &Path, message: &str) -> Result<(), GitError> {
        self.run_in(dir, &["commit", "-m", message]).await?;
        Ok(())
    }

    // =========================================================================
    // Network operations
    // =========================================================================

    pub async fn push(&self, dir: &Path) -> Result<(), GitError> {
        self.run_in(dir, &["push"]).await?;
        Ok(())
    }

    pub async fn pull(&self, dir: &Path) -> Result<(), GitError> {
        self.run_in(dir, &["pull"]).await?;
        Ok(())
    }

    pub async fn fetch(&self, dir: &Path) -> Result<(), GitError> {
        self.run_in(dir, &["fetch"]).await?;
        Ok(())
    }

    /// Clone `url` into `target`, which must not already exist.
    pub async fn clone_into(&self, url: &str, target: &Path) -> Result<(), GitError> {
        let target = target.to_string_lossy();
        self.runner
            .run(None, &["clone", url, target.as_ref()])
            .await?;
        Ok(())
    }

    // =========================================================================
    // Remote configuration
    // =========================================================================

    /// List configured remote names.
    pub async fn remotes(&self, dir: &Path) -> Result<Vec<String>, GitError> {
        let output = self.run_in(dir, &["remote"]).await?;
        Ok(output
            .stdout
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(str::to_string)
            .collect())
    }

    /// The default remote name: `origin` when present, else the first listed.
    pub async fn default_remote(&self, dir: &Path) -> Result<Option<String>, GitError> {
        let remotes = self.remotes(dir).await?;
        if remotes.iter().any(|name| name == "origin") {
            return Ok(Some("origin".to_string()));
        }
        Ok(remotes.into_iter().next())
    }

    /// The URL of a remote, or `None` when the remote has none (or does not
    /// exist).
    pub async fn remote_url(&self, dir: &Path, remote: &str) -> Result<Option<String>, GitError> {
        match self.run_in(dir, &["remote", "get-url", remote]).await {
            Ok(output) => {
                let url = output.stdout.trim();
                if url.is_empty() {
                    Ok(None)
                } else {
                    Ok(Some(url.to_string()))
                }
            }
            Err(GitError::Tool { .. }) => Ok(None),
            Err(other) => Err(other),
        }
    }

    /// Point a remote at a new URL.
    pub async fn set_remote_url(&self, dir: &Path, remote: &str, url: &str) -> Result<(), GitError> {
        self.run_in(dir, &["remote", "set-url", remote, url]).await?;
        Ok(())
    }
}

/// Parse the record/field-separated output of [`LOG_FORMAT`].
///
/// Malformed records are skipped rather than failing the whole listing.
fn parse_log(stdout: &str) -> Vec<CommitSummary> {
    stdout
        .split('\u{1e}')
        .filter_map(|record| {
            let record = record.trim();
            if record.is_empty() {
                return None;
            }
            let mut fields = record.split('\u{1f}');
            let hash = fields.next()?;
            let message = fields.next()?;
            let date = fields.next()?;
            let author = fields.next()?;
            Some(CommitSummary {
                short_hash: hash.chars().take(7).collect(),
                message: message.to_string(),
                date: date.to_string(),
                author: author.to_string(),
            })
        })
        .collect()
}
