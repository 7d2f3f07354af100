//! # Filesystem-backed key/value store
//!
//! [`FileStore`] is the [`KeyValueStore`] used by native builds, where there is
//! no `localStorage`. All keys live in one small TOML file:
//!
//! ```toml
//! [values]
//! userLoggedIn = "a@x.com"
//! ```
//!
//! Every call re-reads the file, so two handles on the same path always agree.
//! A missing or unreadable file is an empty store; write failures are logged and
//! otherwise ignored.
//!
//! Use `dirs::data_dir()` to obtain a platform-appropriate base directory and
//! join [`FileStore::FILENAME`] onto it.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::session::KeyValueStore;

#[derive(Debug, Default, Serialize, Deserialize)]
struct StoredValues {
    #[serde(default)]
    values: BTreeMap<String, String>,
}

/// Filesystem-backed KeyValueStore for native persistence.
#[derive(Clone, Debug)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    /// The well-known filename for the store.
    pub const FILENAME: &'static str = "session.toml";

    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn load(&self) -> StoredValues {
        let Ok(raw) = std::fs::read_to_string(&self.path) else {
            return StoredValues::default();
        };
        toml::from_str(&raw).unwrap_or_else(|e| {
            tracing::warn!("Ignoring unreadable {}: {}", self.path.display(), e);
            StoredValues::default()
        })
    }

    fn save(&self, stored: &StoredValues) {
        let raw = match toml::to_string_pretty(stored) {
            Ok(raw) => raw,
            Err(e) => {
                tracing::warn!("Failed to serialise {}: {}", self.path.display(), e);
                return;
            }
        };
        if let Some(parent) = self.path.parent() {
            let _ = std::fs::create_dir_all(parent);
        }
        if let Err(e) = std::fs::write(&self.path, raw) {
            tracing::warn!("Failed to write {}: {}", self.path.display(), e);
        }
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Option<String> {
        self.load().values.remove(key)
    }

    fn set(&self, key: &str, value: &str) {
        let mut stored = self.load();
        stored.values.insert(key.to_string(), value.to_string());
        self.save(&stored);
    }

    fn remove(&self, key: &str) {
        let mut stored = self.load();
        if stored.values.remove(key).is_some() {
            self.save(&stored);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::{Session, SESSION_KEY};

    #[test]
    fn test_file_store_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join(FileStore::FILENAME);

        let store = FileStore::new(path.clone());
        store.set("a", "1");
        store.set("b", "2");

        // Re-open from the same path
        let reopened = FileStore::new(path);
        assert_eq!(reopened.get("a").as_deref(), Some("1"));
        assert_eq!(reopened.get("b").as_deref(), Some("2"));

        reopened.remove("a");
        assert!(store.get("a").is_none());
        assert_eq!(store.get("b").as_deref(), Some("2"));
    }

    #[test]
    fn test_missing_file_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::new(dir.path().join(FileStore::FILENAME));

        assert!(store.get(SESSION_KEY).is_none());
        store.remove(SESSION_KEY);
        assert!(!store.path().exists());
    }

    #[test]
    fn test_corrupt_file_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(FileStore::FILENAME);
        std::fs::write(&path, "not = [valid").unwrap();

        let store = FileStore::new(path);
        assert!(store.get("anything").is_none());

        // Writing replaces the corrupt content
        store.set("k", "v");
        assert_eq!(store.get("k").as_deref(), Some("v"));
    }

    #[test]
    fn test_session_survives_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(FileStore::FILENAME);

        Session::new(FileStore::new(path.clone())).sign_in("a@x.com");

        let session = Session::new(FileStore::new(path));
        assert_eq!(session.current_user().as_deref(), Some("a@x.com"));
    }
}
