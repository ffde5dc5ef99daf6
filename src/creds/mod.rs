//! creds
//!
//! Credential injection around remote operations.
//!
//! A [`CredentialTransaction`] temporarily points a remote at a URL with the
//! username and password embedded, runs exactly one network operation, and
//! restores the original URL on every exit path. Restoration failures are
//! logged, never raised, and never change the wrapped operation's outcome.
//!
//! Injection only applies to HTTP(S) remotes; SSH-style endpoints are left
//! untouched (the tool may still authenticate through ambient keys).

mod transaction;
mod url;

pub use transaction::CredentialTransaction;
pub use url::{is_http_url, with_embedded_credentials};
