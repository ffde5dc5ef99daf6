//! driftwood - a facade over one git working tree
//!
//! driftwood coordinates operations against a single local working tree:
//! unified file status, staging and unstaging, committing, and authenticated
//! remote synchronization (push/pull/fetch/clone). The underlying tool is
//! invoked as an external process and treated strictly as a collaborator;
//! this crate interprets its reported state, it does not reimplement
//! version-control internals.
//!
//! # Architecture
//!
//! - [`repo`] - The public operation surface ([`repo::Repo`])
//! - [`status`] - Reconciliation of raw status categories into one view
//! - [`creds`] - Credential injection around remote operations
//! - [`remote`] - Incoming/outgoing divergence computation
//! - [`git`] - Single doorway to the external git binary
//! - [`settings`] - Key/value settings storage (stored credentials)
//! - [`core`] - Domain types
//! - [`cli`] - Command-line surface for the `dw` binary
//!
//! # Correctness invariants
//!
//! 1. Status entries are unique per `(staged, path)` identity, in
//!    first-insertion order
//! 2. A remote's configured URL is restored on every exit path of a
//!    credentialed operation
//! 3. Divergence listings are empty without a tracking ref, and populated
//!    only on the side its counter reports

pub mod cli;
pub mod core;
pub mod creds;
pub mod git;
pub mod remote;
pub mod repo;
pub mod settings;
pub mod status;
