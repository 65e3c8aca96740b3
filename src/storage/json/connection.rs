//! Filesystem handle for the JSON key/value store.
use anyhow::{Context, Result};
use directories::ProjectDirs;
use log::{debug, warn};
use std::fs;
use std::path::{Path, PathBuf};

/// Base directory holding one `<key>.json` blob per record domain.
#[derive(Debug, Clone)]
pub struct JsonStoreConnection {
    base_directory: PathBuf,
}

impl JsonStoreConnection {
    /// Open a connection rooted at `base_directory`, creating the directory
    /// if needed.
    pub fn new(base_directory: impl AsRef<Path>) -> Result<Self> {
        let base_directory = base_directory.as_ref().to_path_buf();
        fs::create_dir_all(&base_directory)
            .with_context(|| format!("creating data directory {:?}", base_directory))?;
        debug!("Opened JSON store at {:?}", base_directory);
        Ok(JsonStoreConnection { base_directory })
    }

    /// Platform-appropriate default data directory.
    pub fn default_data_dir() -> Result<PathBuf> {
        let dirs = ProjectDirs::from("", "", "finance-tracker")
            .ok_or_else(|| anyhow::anyhow!("could not determine a home directory"))?;
        Ok(dirs.data_dir().to_path_buf())
    }

    pub fn base_directory(&self) -> &Path {
        &self.base_directory
    }

    /// Path of the blob stored under `key`.
    pub(crate) fn key_path(&self, key: &str) -> PathBuf {
        self.base_directory.join(format!("{}.json", key))
    }

    /// Read the blob under `key`, if present and readable.
    pub(crate) fn read_key(&self, key: &str) -> Option<String> {
        let path = self.key_path(key);
        if !path.exists() {
            return None;
        }
        match fs::read_to_string(&path) {
            Ok(content) => Some(content),
            Err(error) => {
                warn!("Failed to read {:?}: {}", path, error);
                None
            }
        }
    }

    /// Replace the blob under `key`. Writes go to a temp file first, then
    /// rename, so a crash mid-write cannot corrupt the stored list.
    pub(crate) fn write_key(&self, key: &str, content: &str) -> Result<()> {
        let path = self.key_path(key);
        let temp_path = path.with_extension("tmp");
        fs::write(&temp_path, content)
            .with_context(|| format!("writing {:?}", temp_path))?;
        fs::rename(&temp_path, &path)
            .with_context(|| format!("replacing {:?}", path))?;
        debug!("Wrote {} bytes to {:?}", content.len(), path);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_new_creates_the_base_directory() {
        let temp_dir = TempDir::new().unwrap();
        let nested = temp_dir.path().join("data").join("tracker");
        let connection = JsonStoreConnection::new(&nested).unwrap();
        assert!(nested.exists());
        assert_eq!(connection.base_directory(), nested.as_path());
    }

    #[test]
    fn test_keys_map_to_json_files() {
        let temp_dir = TempDir::new().unwrap();
        let connection = JsonStoreConnection::new(temp_dir.path()).unwrap();
        assert_eq!(
            connection.key_path("incomes"),
            temp_dir.path().join("incomes.json")
        );
    }

    #[test]
    fn test_write_then_read_round_trips() {
        let temp_dir = TempDir::new().unwrap();
        let connection = JsonStoreConnection::new(temp_dir.path()).unwrap();

        connection.write_key("expenses", "[]").unwrap();
        assert_eq!(connection.read_key("expenses").as_deref(), Some("[]"));
        // the temp file must not survive the rename
        assert!(!temp_dir.path().join("expenses.tmp").exists());
    }

    #[test]
    fn test_absent_key_reads_as_none() {
        let temp_dir = TempDir::new().unwrap();
        let connection = JsonStoreConnection::new(temp_dir.path()).unwrap();
        assert_eq!(connection.read_key("incomes"), None);
    }
}
