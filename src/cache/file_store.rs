use anyhow::{Context, Result};
use log::debug;
use std::fs;
use std::path::{Path, PathBuf};

use crate::storage::KeyValueStore;

/// Key-value store keeping one JSON file per key in a directory
pub struct FileStore {
    data_dir: PathBuf,
}

impl FileStore {
    pub fn new<P: AsRef<Path>>(data_dir: P) -> Result<Self> {
        let data_dir = data_dir.as_ref().to_path_buf();
        fs::create_dir_all(&data_dir).context("Failed to create data directory")?;

        Ok(Self { data_dir })
    }

    fn build_path(&self, key: &str) -> PathBuf {
        self.data_dir.join(format!("{}.json", key))
    }
}

impl KeyValueStore for FileStore {
    fn load_raw(&self, key: &str) -> Result<Option<String>> {
        let path = self.build_path(key);
        if !path.exists() {
            return Ok(None);
        }

        let json = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        debug!("Loaded {} from {}", key, path.display());
        Ok(Some(json))
    }

    /// Writes a sibling temp file, then renames it over the old value
    fn save_raw(&self, key: &str, value: &str) -> Result<()> {
        let path = self.build_path(key);
        let temp_path = path.with_extension("json.tmp");

        fs::write(&temp_path, value)
            .with_context(|| format!("Failed to write {}", temp_path.display()))?;
        fs::rename(&temp_path, &path)
            .with_context(|| format!("Failed to replace {}", path.display()))?;

        debug!("Saved {} to {}", key, path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_file_store_save_and_load() {
        let dir = TempDir::new().unwrap();
        let store = FileStore::new(dir.path().join("league")).unwrap();

        assert_eq!(store.load_raw("players").unwrap(), None);

        store.save_raw("players", r#"["Eli","Amit"]"#).unwrap();
        assert!(dir.path().join("league").join("players.json").is_file());
        assert_eq!(
            store.load_raw("players").unwrap().as_deref(),
            Some(r#"["Eli","Amit"]"#)
        );

        store.save_raw("players", "[]").unwrap();
        assert_eq!(store.load_raw("players").unwrap().as_deref(), Some("[]"));
        assert!(!dir.path().join("league").join("players.json.tmp").exists());
    }
}
