use crate::{SessionError, SessionErrorResult, SessionStorage};

use std::io::ErrorKind;
use std::path::PathBuf;

use log::debug;

/// One file per key inside a dedicated directory.
///
/// The directory is created on the first write. No expiry, no encryption.
#[derive(Debug, Clone)]
pub struct FileStorage {
    dir: PathBuf,
}

impl FileStorage {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Keys map straight to file names, so only `[A-Za-z0-9_-]` is allowed.
    #[track_caller]
    fn slot_path(&self, key: &str) -> SessionErrorResult<PathBuf> {
        let valid = !key.is_empty()
            && key
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-');

        if !valid {
            return Err(SessionError::invalid_key(key));
        }

        Ok(self.dir.join(key))
    }
}

impl SessionStorage for FileStorage {
    fn get(&self, key: &str) -> SessionErrorResult<Option<String>> {
        let path = self.slot_path(key)?;

        match std::fs::read_to_string(&path) {
            Ok(value) => Ok(Some(value)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(SessionError::io(path, e)),
        }
    }

    fn set(&self, key: &str, value: &str) -> SessionErrorResult<()> {
        let path = self.slot_path(key)?;

        std::fs::create_dir_all(&self.dir).map_err(|e| SessionError::io(&self.dir, e))?;
        std::fs::write(&path, value).map_err(|e| SessionError::io(&path, e))?;

        debug!("Wrote session slot '{}' ({} bytes)", key, value.len());
        Ok(())
    }

    fn remove(&self, key: &str) -> SessionErrorResult<()> {
        let path = self.slot_path(key)?;

        match std::fs::remove_file(&path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(SessionError::io(path, e)),
        }
    }

    fn clear(&self) -> SessionErrorResult<()> {
        let entries = match std::fs::read_dir(&self.dir) {
            Ok(entries) => entries,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(()),
            Err(e) => return Err(SessionError::io(&self.dir, e)),
        };

        for entry in entries {
            let entry = entry.map_err(|e| SessionError::io(&self.dir, e))?;
            let path = entry.path();
            if path.is_file() {
                std::fs::remove_file(&path).map_err(|e| SessionError::io(&path, e))?;
            }
        }

        debug!("Cleared session storage at {}", self.dir.display());
        Ok(())
    }
}
