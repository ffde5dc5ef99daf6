//! settings::file_store
//!
//! File-based settings storage.
//!
//! Settings live in `~/.driftwood/settings.toml`, one TOML table per
//! category. Writes are atomic (temp file, then rename) and the file is
//! created with 0600 permissions on Unix, since the `git` category holds
//! credentials in plain text.

use std::collections::BTreeMap;
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::PathBuf;

#[cfg(unix)]
use std::os::unix::fs::PermissionsExt;

use super::traits::{SettingsError, SettingsStore};

type Categories = BTreeMap<String, BTreeMap<String, String>>;

/// Settings stored in a category-sectioned TOML file.
#[derive(Debug)]
pub struct FileSettingsStore {
    /// Path to the settings file
    path: PathBuf,
}

impl FileSettingsStore {
    /// Create a store at the default location, `~/.driftwood/settings.toml`.
    ///
    /// # Errors
    ///
    /// Returns an error if the home directory cannot be determined.
    pub fn new() -> Result<Self, SettingsError> {
        let home = dirs::home_dir()
            .ok_or_else(|| SettingsError::ReadError("cannot determine home directory".into()))?;
        let path = home.join(".driftwood").join("settings.toml");
        Ok(Self { path })
    }

    /// Create a store at a custom path. Primarily useful for testing.
    pub fn with_path(path: PathBuf) -> Self {
        Self { path }
    }

    /// Path to the settings file.
    pub fn path(&self) -> &PathBuf {
        &self.path
    }

    fn read_categories(&self) -> Result<Categories, SettingsError> {
        if !self.path.exists() {
            return Ok(Categories::new());
        }

        let content = fs::read_to_string(&self.path)
            .map_err(|e| SettingsError::ReadError(format!("cannot read settings file: {}", e)))?;

        toml::from_str(&content)
            .map_err(|e| SettingsError::ReadError(format!("cannot parse settings file: {}", e)))
    }

    fn write_categories(&self, categories: &Categories) -> Result<(), SettingsError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)
                .map_err(|e| SettingsError::WriteError(format!("cannot create directory: {}", e)))?;
        }

        let content = toml::to_string_pretty(categories)
            .map_err(|e| SettingsError::WriteError(format!("cannot serialize settings: {}", e)))?;

        // Write to a temp file first for atomicity.
        let temp_path = self.path.with_extension("tmp");
        {
            let mut file = OpenOptions::new()
                .write(true)
                .create(true)
                .truncate(true)
                .open(&temp_path)
                .map_err(|e| SettingsError::WriteError(format!("cannot create temp file: {}", e)))?;

            // Restrictive permissions before any content lands (Unix only).
            #[cfg(unix)]
            {
                let permissions = fs::Permissions::from_mode(0o600);
                file.set_permissions(permissions).map_err(|e| {
                    SettingsError::WriteError(format!("cannot set permissions: {}", e))
                })?;
            }

            file.write_all(content.as_bytes())
                .map_err(|e| SettingsError::WriteError(format!("cannot write settings: {}", e)))?;

            file.sync_all()
                .map_err(|e| SettingsError::WriteError(format!("cannot sync to disk: {}", e)))?;
        }

        fs::rename(&temp_path, &self.path)
            .map_err(|e| SettingsError::WriteError(format!("cannot rename temp file: {}", e)))?;

        Ok(())
    }
}

impl SettingsStore for FileSettingsStore {
    fn get(&self, key: &str) -> Result<Option<String>, SettingsError> {
        let categories = self.read_categories()?;
        // Categories are scanned in sorted order; the first hit wins.
        for entries in categories.values() {
            if let Some(value) = entries.get(key) {
                return Ok(Some(value.clone()));
            }
        }
        Ok(None)
    }

    fn set(&self, key: &str, value: &str, category: &str) -> Result<(), SettingsError> {
        let mut categories = self.read_categories()?;
        categories
            .entry(category.to_string())
            .or_default()
            .insert(key.to_string(), value.to_string());
        self.write_categories(&categories)
    }
}
