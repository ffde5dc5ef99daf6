//! core::types
//!
//! Domain types for the repository facade.
//!
//! # Types
//!
//! - [`FileState`] - The kind of change a file carries
//! - [`FileStatusEntry`] - One file in the unified status view
//! - [`RepoStatus`] - Unified working-tree status
//! - [`CommitSummary`] - One commit in a divergence listing
//! - [`RemoteDivergence`] - Incoming/outgoing commits vs. the tracking ref
//! - [`FullStatus`] - Status and divergence in one payload
//! - [`BasicInfo`] - Cheap, never-failing summary for list views
//! - [`Credentials`] - Username/password pair for remote authentication
//!
//! All wire-facing types serialize as camelCase JSON, which is the payload
//! shape the facade's consumers expect.

use serde::{Deserialize, Serialize};

/// The kind of change a file carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FileState {
    /// Content differs from the committed version.
    Modified,
    /// Newly added to the index.
    Added,
    /// Removed from the working tree or index.
    Deleted,
    /// Renamed in the index.
    Renamed,
    /// Present in the working tree but unknown to the index.
    Untracked,
}

impl FileState {
    /// Single-letter code, as printed by `git status --short`.
    pub fn code(&self) -> char {
        match self {
            FileState::Modified => 'M',
            FileState::Added => 'A',
            FileState::Deleted => 'D',
            FileState::Renamed => 'R',
            FileState::Untracked => '?',
        }
    }
}

impl std::fmt::Display for FileState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let word = match self {
            FileState::Modified => "modified",
            FileState::Added => "added",
            FileState::Deleted => "deleted",
            FileState::Renamed => "renamed",
            FileState::Untracked => "untracked",
        };
        write!(f, "{}", word)
    }
}

/// One file in the unified status view.
///
/// For a renamed file, `path` is the composite display form
/// `"<old> -> <new>"` and `staged` is always true (renames only exist in
/// the index).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FileStatusEntry {
    /// Path relative to the repository root (composite for renames).
    pub path: String,
    /// The kind of change.
    pub status: FileState,
    /// Whether the change lives in the index.
    pub staged: bool,
}

/// Unified working-tree status.
///
/// `files` carries no two entries with the same `(staged, path)` identity;
/// entries appear in first-insertion order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RepoStatus {
    /// Deduplicated, ordered file entries.
    pub files: Vec<FileStatusEntry>,
    /// Current branch, or `"HEAD"` when detached or unborn.
    pub current_branch: String,
    /// The tracking ref (e.g. `origin/main`), if one is configured.
    pub tracking: Option<String>,
    /// Local-only commit count relative to the tracking ref.
    pub ahead: u32,
    /// Remote-only commit count relative to the tracking ref.
    pub behind: u32,
    /// Author date of the most recent commit, if one could be read.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_commit_date: Option<String>,
}

/// One commit in a divergence listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommitSummary {
    /// Abbreviated commit id, always 7 characters.
    pub short_hash: String,
    /// Commit subject line.
    pub message: String,
    /// Author date as git reports it (strict ISO 8601).
    pub date: String,
    /// Author name.
    pub author: String,
}

/// Commits the local branch and its tracking ref do not share.
///
/// `incoming` is non-empty only when the branch is behind its tracking ref,
/// `outgoing` only when it is ahead.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RemoteDivergence {
    /// Commits reachable from the tracking ref but not from the branch.
    pub incoming: Vec<CommitSummary>,
    /// Commits reachable from the branch but not from the tracking ref.
    pub outgoing: Vec<CommitSummary>,
}

/// Unified status merged with remote divergence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FullStatus {
    #[serde(flatten)]
    pub status: RepoStatus,
    #[serde(flatten)]
    pub divergence: RemoteDivergence,
}

/// Cheap summary for list views.
///
/// Produced by a never-failing query: when anything goes wrong the whole
/// value collapses to `is_git_repo: false`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BasicInfo {
    /// Whether the path sits inside a git working tree.
    pub is_git_repo: bool,
    /// Author date of the most recent commit, when readable.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_commit_date: Option<String>,
    /// Local-only commit count, when readable.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ahead: Option<u32>,
    /// Remote-only commit count, when readable.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub behind: Option<u32>,
}

/// Username/password pair for remote authentication.
///
/// Held in memory, or in the settings store at the caller's explicit
/// request. Never written to a remote's configuration beyond the lifetime
/// of one credential transaction.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

impl std::fmt::Debug for Credentials {
    // The password must never reach logs or panic messages.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    mod serialization {
        use super::*;

        #[test]
        fn file_entry_uses_camel_case_and_lowercase_state() {
            let entry = FileStatusEntry {
                path: "src/lib.rs".to_string(),
                status: FileState::Modified,
                staged: true,
            };
            let json = serde_json::to_value(&entry).unwrap();
            assert_eq!(json["path"], "src/lib.rs");
            assert_eq!(json["status"], "modified");
            assert_eq!(json["staged"], true);
        }

        #[test]
        fn repo_status_field_names() {
            let status = RepoStatus {
                files: vec![],
                current_branch: "main".to_string(),
                tracking: Some("origin/main".to_string()),
                ahead: 1,
                behind: 2,
                last_commit_date: None,
            };
            let json = serde_json::to_value(&status).unwrap();
            assert_eq!(json["currentBranch"], "main");
            assert_eq!(json["tracking"], "origin/main");
            assert_eq!(json["ahead"], 1);
            assert_eq!(json["behind"], 2);
            assert!(json.get("lastCommitDate").is_none());
        }

        #[test]
        fn full_status_flattens_both_halves() {
            let full = FullStatus {
                status: RepoStatus {
                    files: vec![],
                    current_branch: "main".to_string(),
                    tracking: None,
                    ahead: 0,
                    behind: 0,
                    last_commit_date: Some("2024-04-01T10:00:00+00:00".to_string()),
                },
                divergence: RemoteDivergence::default(),
            };
            let json = serde_json::to_value(&full).unwrap();
            assert_eq!(json["currentBranch"], "main");
            assert_eq!(json["lastCommitDate"], "2024-04-01T10:00:00+00:00");
            assert!(json["incoming"].as_array().unwrap().is_empty());
            assert!(json["outgoing"].as_array().unwrap().is_empty());
        }

        #[test]
        fn commit_summary_short_hash_field() {
            let commit = CommitSummary {
                short_hash: "abc1234".to_string(),
                message: "fix parser".to_string(),
                date: "2024-04-01T10:00:00+00:00".to_string(),
                author: "Test User".to_string(),
            };
            let json = serde_json::to_value(&commit).unwrap();
            assert_eq!(json["shortHash"], "abc1234");
            assert_eq!(json["author"], "Test User");
        }

        #[test]
        fn basic_info_omits_absent_fields() {
            let info = BasicInfo::default();
            let json = serde_json::to_value(&info).unwrap();
            assert_eq!(json["isGitRepo"], false);
            assert!(json.get("lastCommitDate").is_none());
            assert!(json.get("ahead").is_none());
        }
    }

    mod file_state {
        use super::*;

        #[test]
        fn codes() {
            assert_eq!(FileState::Modified.code(), 'M');
            assert_eq!(FileState::Added.code(), 'A');
            assert_eq!(FileState::Deleted.code(), 'D');
            assert_eq!(FileState::Renamed.code(), 'R');
            assert_eq!(FileState::Untracked.code(), '?');
        }

        #[test]
        fn display_words() {
            assert_eq!(FileState::Renamed.to_string(), "renamed");
            assert_eq!(FileState::Untracked.to_string(), "untracked");
        }
    }

    mod credentials {
        use super::*;

        #[test]
        fn debug_never_prints_password() {
            let creds = Credentials {
                username: "alice".to_string(),
                password: "hunter2".to_string(),
            };
            let rendered = format!("{:?}", creds);
            assert!(rendered.contains("alice"));
            assert!(!rendered.contains("hunter2"));
        }
    }
}
