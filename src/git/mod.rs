//! git
//!
//! Single doorway to the external `git` binary.
//!
//! # Architecture
//!
//! All repository reads and writes flow through [`Git`], which issues one
//! external process invocation per operation via a [`GitRunner`]. No other
//! module spawns git directly. This keeps:
//!
//! - Error normalization in one place ([`GitError`])
//! - The process boundary narrow and swappable in tests
//! - Argument construction reviewable per operation
//!
//! The underlying tool is treated strictly as a collaborator: this crate
//! interprets its reported state (status, logs, remote configuration) and
//! never reimplements version-control internals.

mod interface;
mod porcelain;
mod runner;

pub use interface::{Git, GitError, LogOptions, LogRange};
pub use porcelain::{RawStatus, Rename};
pub use runner::{GitRunner, SystemGitRunner, ToolOutput};

#[cfg(test)]
pub(crate) use runner::test_support;
