//! settings::traits
//!
//! Settings storage trait definition.
//!
//! A simple key/value interface with category-scoped writes. The interface
//! is deliberately asymmetric: `set` files a key under a category, `get`
//! looks a key up wherever it lives. Implementations must be thread-safe
//! and must never log or include stored values in error messages (the git
//! category holds credentials in the clear).

use thiserror::Error;

/// Errors from settings storage operations.
///
/// Messages intentionally never include stored values.
#[derive(Debug, Error)]
pub enum SettingsError {
    /// Failed to read from the store.
    #[error("failed to read settings: {0}")]
    ReadError(String),

    /// Failed to write to the store.
    #[error("failed to write settings: {0}")]
    WriteError(String),
}

/// Key/value settings storage.
pub trait SettingsStore: Send + Sync {
    /// Look up a key, wherever it was filed.
    ///
    /// Returns `Ok(None)` when the key is absent.
    fn get(&self, key: &str) -> Result<Option<String>, SettingsError>;

    /// Store a value for a key under a category, overwriting any existing
    /// value.
    fn set(&self, key: &str, value: &str, category: &str) -> Result<(), SettingsError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display_formatting() {
        let err = SettingsError::ReadError("disk full".into());
        assert!(err.to_string().contains("read"));
        assert!(err.to_string().contains("disk full"));

        let err = SettingsError::WriteError("permission denied".into());
        assert!(err.to_string().contains("write"));
    }
}
