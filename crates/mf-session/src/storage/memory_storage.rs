use crate::{SessionErrorResult, SessionStorage};

use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard, PoisonError};

/// In-process slots. Nothing survives the process.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    entries: Mutex<HashMap<String, String>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    fn entries(&self) -> MutexGuard<'_, HashMap<String, String>> {
        self.entries.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl SessionStorage for MemoryStorage {
    fn get(&self, key: &str) -> SessionErrorResult<Option<String>> {
        Ok(self.entries().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> SessionErrorResult<()> {
        self.entries().insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> SessionErrorResult<()> {
        self.entries().remove(key);
        Ok(())
    }

    fn clear(&self) -> SessionErrorResult<()> {
        self.entries().clear();
        Ok(())
    }
}
