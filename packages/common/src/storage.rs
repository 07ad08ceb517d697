use std::collections::HashMap;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};
use thiserror::Error;

/// Backend-level storage failure, below the document layer
#[derive(Error, Debug)]
pub enum BackendError {
    #[error("storage unavailable: {0}")]
    Unavailable(String),

    #[error("invalid key: {0}")]
    InvalidKey(String),
}

impl From<std::io::Error> for BackendError {
    fn from(e: std::io::Error) -> Self {
        BackendError::Unavailable(e.to_string())
    }
}

/// Key-value storage abstraction for document persistence and testing.
///
/// Keys are flat strings namespaced by the caller. Values are opaque; the
/// backend never inspects them. `put` fully overwrites and must be
/// all-or-nothing from the caller's perspective.
pub trait KeyValueBackend {
    /// Read the value under `key`, or `None` if no record exists
    fn get(&self, key: &str) -> Result<Option<String>, BackendError>;

    /// Write `value` under `key`, overwriting any prior value
    fn put(&self, key: &str, value: &str) -> Result<(), BackendError>;

    /// Delete the record under `key`; deleting a missing key is fine
    fn remove(&self, key: &str) -> Result<(), BackendError>;
}

impl<B: KeyValueBackend + ?Sized> KeyValueBackend for Arc<B> {
    fn get(&self, key: &str) -> Result<Option<String>, BackendError> {
        (**self).get(key)
    }

    fn put(&self, key: &str, value: &str) -> Result<(), BackendError> {
        (**self).put(key, value)
    }

    fn remove(&self, key: &str) -> Result<(), BackendError> {
        (**self).remove(key)
    }
}

/// In-memory backend for tests and ephemeral sessions
#[derive(Debug, Default)]
pub struct MemoryBackend {
    entries: Mutex<HashMap<String, String>>,
}

impl MemoryBackend {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueBackend for MemoryBackend {
    fn get(&self, key: &str) -> Result<Option<String>, BackendError> {
        let entries = self
            .entries
            .lock()
            .map_err(|_| BackendError::Unavailable("poisoned lock".to_string()))?;
        Ok(entries.get(key).cloned())
    }

    fn put(&self, key: &str, value: &str) -> Result<(), BackendError> {
        let mut entries = self
            .entries
            .lock()
            .map_err(|_| BackendError::Unavailable("poisoned lock".to_string()))?;
        entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), BackendError> {
        let mut entries = self
            .entries
            .lock()
            .map_err(|_| BackendError::Unavailable("poisoned lock".to_string()))?;
        entries.remove(key);
        Ok(())
    }
}

/// File-backed backend: one file per key under a base directory.
///
/// Writes land in a temp file first and are renamed into place, so a record
/// is either the old value or the new one, never a torn write.
#[derive(Debug)]
pub struct FileBackend {
    base_dir: PathBuf,
}

impl FileBackend {
    pub fn new(base_dir: impl Into<PathBuf>) -> Self {
        Self {
            base_dir: base_dir.into(),
        }
    }

    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    fn entry_path(&self, key: &str) -> Result<PathBuf, BackendError> {
        Self::validate_key(key)?;
        Ok(self.base_dir.join(format!("{key}.json")))
    }

    /// Keys become file names, so path separators, `..` and control
    /// characters are rejected outright.
    fn validate_key(key: &str) -> Result<(), BackendError> {
        if key.is_empty() {
            return Err(BackendError::InvalidKey("key cannot be empty".to_string()));
        }
        if key.contains('/') || key.contains('\\') || key.contains("..") || key.contains('\0') {
            return Err(BackendError::InvalidKey(format!(
                "key contains invalid characters: {key:?}"
            )));
        }
        if key.chars().any(|c| c.is_control()) {
            return Err(BackendError::InvalidKey(format!(
                "key contains control characters: {key:?}"
            )));
        }
        Ok(())
    }
}

impl KeyValueBackend for FileBackend {
    fn get(&self, key: &str) -> Result<Option<String>, BackendError> {
        let path = self.entry_path(key)?;
        match std::fs::read_to_string(&path) {
            Ok(value) => Ok(Some(value)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn put(&self, key: &str, value: &str) -> Result<(), BackendError> {
        let path = self.entry_path(key)?;
        if !self.base_dir.exists() {
            std::fs::create_dir_all(&self.base_dir)?;
        }

        let tmp_path = self
            .base_dir
            .join(format!(".{key}.{}.tmp", uuid::Uuid::new_v4().simple()));

        let write_result = (|| {
            let mut file = std::fs::File::create(&tmp_path)?;
            file.write_all(value.as_bytes())?;
            file.sync_all()?;
            drop(file);
            std::fs::rename(&tmp_path, &path)
        })();

        if let Err(e) = write_result {
            let _ = std::fs::remove_file(&tmp_path);
            return Err(e.into());
        }
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), BackendError> {
        let path = self.entry_path(key)?;
        match std::fs::remove_file(&path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_memory_backend_round_trip() {
        let backend = MemoryBackend::new();

        assert!(backend.get("cv:1").unwrap().is_none());
        backend.put("cv:1", "[]").unwrap();
        assert_eq!(backend.get("cv:1").unwrap().unwrap(), "[]");

        backend.put("cv:1", "[{}]").unwrap();
        assert_eq!(backend.get("cv:1").unwrap().unwrap(), "[{}]");

        backend.remove("cv:1").unwrap();
        assert!(backend.get("cv:1").unwrap().is_none());
    }

    #[test]
    fn test_file_backend_round_trip() {
        let dir = TempDir::new().unwrap();
        let backend = FileBackend::new(dir.path());

        assert!(backend.get("cv:abc").unwrap().is_none());
        backend.put("cv:abc", r#"["x"]"#).unwrap();
        assert_eq!(backend.get("cv:abc").unwrap().unwrap(), r#"["x"]"#);

        backend.remove("cv:abc").unwrap();
        assert!(backend.get("cv:abc").unwrap().is_none());
        // Removing again is not an error.
        backend.remove("cv:abc").unwrap();
    }

    #[test]
    fn test_file_backend_leaves_no_temp_files() {
        let dir = TempDir::new().unwrap();
        let backend = FileBackend::new(dir.path());

        backend.put("cv:abc", "[]").unwrap();

        let names: Vec<String> = std::fs::read_dir(dir.path())
            .unwrap()
            .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
            .collect();
        assert_eq!(names, vec!["cv:abc.json".to_string()]);
    }

    #[test]
    fn test_file_backend_rejects_path_traversal_keys() {
        let dir = TempDir::new().unwrap();
        let backend = FileBackend::new(dir.path());

        for key in ["", "../escape", "a/b", "a\\b", "nul\0byte"] {
            assert!(matches!(
                backend.put(key, "x"),
                Err(BackendError::InvalidKey(_))
            ));
        }
    }

    #[test]
    fn test_shared_backend_through_arc() {
        let backend = Arc::new(MemoryBackend::new());
        let reader = Arc::clone(&backend);

        backend.put("cv-registry", "[]").unwrap();
        assert_eq!(reader.get("cv-registry").unwrap().unwrap(), "[]");
    }
}
