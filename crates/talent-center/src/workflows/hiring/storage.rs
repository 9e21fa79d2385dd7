use std::collections::HashMap;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

/// Key/value persistence for serialized flow snapshots.
///
/// Implementations deal in raw payloads; parsing stays with the store so a corrupt
/// payload and an unavailable backend can be told apart.
pub trait StateStorage: Send + Sync {
    fn load(&self, key: &str) -> Result<Option<String>, StorageError>;
    fn save(&self, key: &str, payload: &str) -> Result<(), StorageError>;
    fn clear(&self, key: &str) -> Result<(), StorageError>;
}

#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("storage io failure at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("storage unavailable: {0}")]
    Unavailable(String),
}

/// Stores each key as `<dir>/<key>.json`.
#[derive(Debug, Clone)]
pub struct FileStateStorage {
    dir: PathBuf,
}

impl FileStateStorage {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }
}

impl StateStorage for FileStateStorage {
    fn load(&self, key: &str) -> Result<Option<String>, StorageError> {
        let path = self.path_for(key);
        match fs::read_to_string(&path) {
            Ok(payload) => Ok(Some(payload)),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(None),
            Err(source) => Err(StorageError::Io { path, source }),
        }
    }

    fn save(&self, key: &str, payload: &str) -> Result<(), StorageError> {
        fs::create_dir_all(&self.dir).map_err(|source| StorageError::Io {
            path: self.dir.clone(),
            source,
        })?;
        // Staged write plus rename: readers see the old or the new snapshot, never a partial one.
        let path = self.path_for(key);
        let staging = path.with_extension("json.tmp");
        fs::write(&staging, payload).map_err(|source| StorageError::Io {
            path: staging.clone(),
            source,
        })?;
        fs::rename(&staging, &path).map_err(|source| StorageError::Io { path, source })
    }

    fn clear(&self, key: &str) -> Result<(), StorageError> {
        let path = self.path_for(key);
        match fs::remove_file(&path) {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(()),
            Err(source) => Err(StorageError::Io { path, source }),
        }
    }
}

/// Process-local storage used by tests and the CLI demo.
///
/// Clones share the same entries, which lets a test "reload" a store from what a
/// previous instance persisted.
#[derive(Debug, Default, Clone)]
pub struct InMemoryStateStorage {
    entries: Arc<Mutex<HashMap<String, String>>>,
}

impl InMemoryStateStorage {
    pub fn raw(&self, key: &str) -> Option<String> {
        self.entries
            .lock()
            .ok()
            .and_then(|guard| guard.get(key).cloned())
    }

    fn guard(&self) -> Result<std::sync::MutexGuard<'_, HashMap<String, String>>, StorageError> {
        self.entries
            .lock()
            .map_err(|_| StorageError::Unavailable("in-memory storage mutex poisoned".to_string()))
    }
}

impl StateStorage for InMemoryStateStorage {
    fn load(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.guard()?.get(key).cloned())
    }

    fn save(&self, key: &str, payload: &str) -> Result<(), StorageError> {
        self.guard()?.insert(key.to_string(), payload.to_string());
        Ok(())
    }

    fn clear(&self, key: &str) -> Result<(), StorageError> {
        self.guard()?.remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn file_storage_round_trips_payloads() {
        let dir = tempfile::tempdir().expect("temp dir");
        let storage = FileStateStorage::new(dir.path().join("nested"));

        assert!(storage.load("flow").expect("load succeeds").is_none());
        storage.save("flow", "{\"role\":\"QA Engineer\"}").expect("save succeeds");
        assert_eq!(
            storage.load("flow").expect("load succeeds").as_deref(),
            Some("{\"role\":\"QA Engineer\"}")
        );
        assert!(storage.path_for("flow").ends_with("flow.json"));
    }

    #[test]
    fn clearing_a_missing_key_is_not_an_error() {
        let dir = tempfile::tempdir().expect("temp dir");
        let storage = FileStateStorage::new(dir.path());
        storage.clear("absent").expect("clear tolerates missing file");
    }

    #[test]
    fn saving_under_a_file_path_reports_io_error() {
        let dir = tempfile::tempdir().expect("temp dir");
        let blocker = dir.path().join("blocker");
        fs::write(&blocker, "not a directory").expect("write blocker");
        let storage = FileStateStorage::new(&blocker);

        match storage.save("flow", "{}") {
            Err(StorageError::Io { .. }) => {}
            other => panic!("expected io error, got {other:?}"),
        }
    }

    #[test]
    fn save_replaces_snapshot_without_leftover_staging_file() {
        let dir = tempfile::tempdir().expect("temp dir");
        let storage = FileStateStorage::new(dir.path());
        storage.save("flow", "{\"role\":\"QA Engineer\"}").expect("first save");
        storage.save("flow", "{}").expect("second save");

        assert_eq!(
            storage.load("flow").expect("load succeeds").as_deref(),
            Some("{}")
        );
        let entries: Vec<_> = fs::read_dir(dir.path())
            .expect("read dir")
            .map(|entry| entry.expect("dir entry").file_name())
            .collect();
        assert_eq!(entries, vec![std::ffi::OsString::from("flow.json")]);
    }

    #[test]
    fn in_memory_clones_share_entries() {
        let storage = InMemoryStateStorage::default();
        let clone = storage.clone();
        storage.save("flow", "{}").expect("save");
        assert_eq!(clone.raw("flow").as_deref(), Some("{}"));
        clone.clear("flow").expect("clear");
        assert!(storage.raw("flow").is_none());
    }
}
