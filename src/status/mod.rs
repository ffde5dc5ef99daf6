//! status
//!
//! Reconciliation of raw status categories into one unified view.
//!
//! The index and working tree report the same file through different
//! channels (a freshly added file is both "staged" and "created"; a partial
//! stage is both staged and modified). [`aggregate`] merges those channels
//! into a single deduplicated list keyed on `(staged, path)` identity, with
//! deterministic ordering:
//!
//! 1. unstaged: modified, untracked, deleted
//! 2. staged: modified, then created (which **overwrites** a colliding
//!    modified entry in place), then renames
//!
//! Overwritten entries keep their first-seen position. The ordering is a
//! correctness property relied on by consumers, not an incidental detail.

use std::collections::HashMap;

use crate::core::types::{FileState, FileStatusEntry};
use crate::git::RawStatus;

/// An insertion-ordered map of status entries.
///
/// Plain hash maps do not preserve insertion order on overwrite, so entries
/// live in a `Vec` and the map only tracks each identity's position.
#[derive(Default)]
struct OrderedEntries {
    entries: Vec<FileStatusEntry>,
    index: HashMap<(bool, String), usize>,
}

impl OrderedEntries {
    /// Insert an entry under `(entry.staged, identity)`, replacing any
    /// earlier entry with the same identity while keeping its position.
    fn upsert(&mut self, identity: &str, entry: FileStatusEntry) {
        let key = (entry.staged, identity.to_string());
        match self.index.get(&key) {
            Some(&position) => self.entries[position] = entry,
            None => {
                self.index.insert(key, self.entries.len());
                self.entries.push(entry);
            }
        }
    }

    fn into_vec(self) -> Vec<FileStatusEntry> {
        self.entries
    }
}

/// Merge raw per-category file lists into one deduplicated, ordered list.
pub fn aggregate(raw: &RawStatus) -> Vec<FileStatusEntry> {
    let mut out = OrderedEntries::default();

    for path in &raw.modified {
        out.upsert(
            path,
            FileStatusEntry {
                path: path.clone(),
                status: FileState::Modified,
                staged: false,
            },
        );
    }
    for path in &raw.untracked {
        out.upsert(
            path,
            FileStatusEntry {
                path: path.clone(),
                status: FileState::Untracked,
                staged: false,
            },
        );
    }
    for path in &raw.deleted {
        out.upsert(
            path,
            FileStatusEntry {
                path: path.clone(),
                status: FileState::Deleted,
                staged: false,
            },
        );
    }

    // Staged entries: generic index activity first, then the more specific
    // channels override it for the same path.
    for path in &raw.staged {
        out.upsert(
            path,
            FileStatusEntry {
                path: path.clone(),
                status: FileState::Modified,
                staged: true,
            },
        );
    }
    for path in &raw.created {
        out.upsert(
            path,
            FileStatusEntry {
                path: path.clone(),
                status: FileState::Added,
                staged: true,
            },
        );
    }
    for rename in &raw.renamed {
        out.upsert(
            &rename.to,
            FileStatusEntry {
                path: format!("{} -> {}", rename.from, rename.to),
                status: FileState::Renamed,
                staged: true,
            },
        );
    }

    out.into_vec()
}
