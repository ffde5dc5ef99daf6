//! Property-based tests for status aggregation.
//!
//! The aggregation invariants must hold for arbitrary raw category lists,
//! including pathological overlap between categories, not just the shapes
//! git happens to emit.

use proptest::prelude::*;

use driftwood::core::types::FileState;
use driftwood::git::{RawStatus, Rename};
use driftwood::status::aggregate;

/// Paths without spaces, so rename composites stay unambiguous.
fn path_strategy() -> impl Strategy<Value = String> {
    "[a-z][a-z0-9_]{0,10}(\\.txt)?"
}

fn paths(max: usize) -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec(path_strategy(), 0..max)
}

fn renames(max: usize) -> impl Strategy<Value = Vec<Rename>> {
    prop::collection::vec(
        (path_strategy(), path_strategy()).prop_map(|(from, to)| Rename { from, to }),
        0..max,
    )
}

fn raw_status_strategy() -> impl Strategy<Value = RawStatus> {
    (
        paths(8),
        paths(8),
        paths(8),
        paths(8),
        paths(8),
        renames(4),
    )
        .prop_map(
            |(modified, untracked, deleted, staged, created, renamed)| RawStatus {
                modified,
                untracked,
                deleted,
                staged,
                created,
                renamed,
                ..RawStatus::default()
            },
        )
}

/// The identity a renamed entry is keyed on is its new path.
fn identity(entry: &driftwood::core::types::FileStatusEntry) -> (bool, String) {
    let path = match entry.status {
        FileState::Renamed => entry
            .path
            .split(" -> ")
            .last()
            .unwrap_or(&entry.path)
            .to_string(),
        _ => entry.path.clone(),
    };
    (entry.staged, path)
}

proptest! {
    #[test]
    fn no_two_entries_share_identity(raw in raw_status_strategy()) {
        let entries = aggregate(&raw);
        let mut seen = std::collections::HashSet::new();
        for entry in &entries {
            prop_assert!(
                seen.insert(identity(entry)),
                "duplicate identity in {:?}",
                entries
            );
        }
    }

    #[test]
    fn unstaged_entries_precede_staged_entries(raw in raw_status_strategy()) {
        let entries = aggregate(&raw);
        let first_staged = entries.iter().position(|e| e.staged);
        if let Some(boundary) = first_staged {
            prop_assert!(entries[boundary..].iter().all(|e| e.staged));
        }
    }

    #[test]
    fn created_always_wins_over_staged_modified(raw in raw_status_strategy()) {
        let entries = aggregate(&raw);
        for path in &raw.created {
            // Unless a rename to the same path overwrote it afterwards, a
            // created path must surface as Added.
            let renamed_over = raw.renamed.iter().any(|r| &r.to == path);
            if !renamed_over {
                let entry = entries
                    .iter()
                    .find(|e| e.staged && e.path == *path)
                    .expect("created path must have a staged entry");
                prop_assert_eq!(entry.status, FileState::Added);
            }
        }
    }

    #[test]
    fn every_input_path_is_represented(raw in raw_status_strategy()) {
        let entries = aggregate(&raw);
        let identities: std::collections::HashSet<_> =
            entries.iter().map(identity).collect();

        for path in raw
            .modified
            .iter()
            .chain(raw.untracked.iter())
            .chain(raw.deleted.iter())
        {
            prop_assert!(identities.contains(&(false, path.clone())));
        }
        for path in raw.staged.iter().chain(raw.created.iter()) {
            prop_assert!(identities.contains(&(true, path.clone())));
        }
        for rename in &raw.renamed {
            prop_assert!(identities.contains(&(true, rename.to.clone())));
        }
    }

    #[test]
    fn aggregation_is_deterministic(raw in raw_status_strategy()) {
        prop_assert_eq!(aggregate(&raw), aggregate(&raw));
    }
}
