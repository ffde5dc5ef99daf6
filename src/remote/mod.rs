//! remote
//!
//! Remote divergence: which commits exist on only one side of a tracking
//! relationship.
//!
//! The ahead/behind counters from the status query decide whether each side
//! is enumerated at all; the listings themselves come from two-dot log
//! ranges. Either listing failing is non-fatal: the failure is logged and
//! that side stays empty.

use std::path::Path;

use tracing::warn;

use crate::core::types::RemoteDivergence;
use crate::git::{Git, GitRunner, LogOptions};

/// Derive incoming/outgoing commit listings for a branch.
///
/// Without a tracking ref divergence is undefined and both listings are
/// empty; that is not an error. `incoming` is populated only when
/// `behind > 0`, `outgoing` only when `ahead > 0`.
pub async fn compute_divergence<R: GitRunner>(
    git: &Git<R>,
    root: &Path,
    current: &str,
    tracking: Option<&str>,
    ahead: u32,
    behind: u32,
) -> RemoteDivergence {
    let Some(tracking) = tracking else {
        return RemoteDivergence::default();
    };

    let mut divergence = RemoteDivergence::default();

    if behind > 0 {
        // Commits reachable from the tracking ref but not from the branch.
        match git.log(root, &LogOptions::between(current, tracking)).await {
            Ok(commits) => divergence.incoming = commits,
            Err(e) => warn!("could not list incoming commits: {}", e),
        }
    }

    if ahead > 0 {
        // Commits reachable from the branch but not from the tracking ref.
        match git.log(root, &LogOptions::between(tracking, current)).await {
            Ok(commits) => divergence.outgoing = commits,
            Err(e) => warn!("could not list outgoing commits: {}", e),
        }
    }

    divergence
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::git::test_support::ScriptedRunner;

    const ROOT: &str = "/repo";

    fn log_record(hash: &str, message: &str) -> String {
        format!(
            "{}\u{1f}{}\u{1f}2024-04-01T10:00:00+00:00\u{1f}Alice\u{1e}\n",
            hash, message
        )
    }

    #[tokio::test]
    async fn no_tracking_ref_means_no_queries() {
        let git = Git::new(ScriptedRunner::new());

        let divergence =
            compute_divergence(&git, Path::new(ROOT), "main", None, 5, 3).await;

        assert!(divergence.incoming.is_empty());
        assert!(divergence.outgoing.is_empty());
        assert!(git.runner().calls().is_empty());
    }

    #[tokio::test]
    async fn zero_counts_skip_both_listings() {
        let git = Git::new(ScriptedRunner::new());

        let divergence =
            compute_divergence(&git, Path::new(ROOT), "main", Some("origin/main"), 0, 0).await;

        assert_eq!(divergence, RemoteDivergence::default());
        assert!(git.runner().calls().is_empty());
    }

    #[tokio::test]
    async fn behind_lists_incoming_range() {
        let runner = ScriptedRunner::new();
        runner.respond("log", &log_record("aaaaaaa1111", "remote change"));
        let git = Git::new(runner);

        let divergence =
            compute_divergence(&git, Path::new(ROOT), "main", Some("origin/main"), 0, 1).await;

        assert_eq!(divergence.incoming.len(), 1);
        assert_eq!(divergence.incoming[0].short_hash, "aaaaaaa");
        assert!(divergence.outgoing.is_empty());

        let calls = git.runner().calls();
        assert!(calls[0].contains(&"main..origin/main".to_string()));
    }

    #[tokio::test]
    async fn ahead_lists_outgoing_range() {
        let runner = ScriptedRunner::new();
        runner.respond("log", &log_record("bbbbbbb2222", "local change"));
        let git = Git::new(runner);

        let divergence =
            compute_divergence(&git, Path::new(ROOT), "main", Some("origin/main"), 1, 0).await;

        assert!(divergence.incoming.is_empty());
        assert_eq!(divergence.outgoing.len(), 1);

        let calls = git.runner().calls();
        assert!(calls[0].contains(&"origin/main..main".to_string()));
    }

    #[tokio::test]
    async fn failed_listing_leaves_that_side_empty() {
        let runner = ScriptedRunner::new();
        runner.fail("log", "fatal: bad revision"); // incoming query
        runner.respond("log", &log_record("ccccccc3333", "local change")); // outgoing query
        let git = Git::new(runner);

        let divergence =
            compute_divergence(&git, Path::new(ROOT), "main", Some("origin/main"), 2, 2).await;

        assert!(divergence.incoming.is_empty());
        assert_eq!(divergence.outgoing.len(), 1);
    }
}
