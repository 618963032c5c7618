use crate::{
    FileStorage, MemoryStorage, PendingUpdate, SessionError, SessionErrorResult, SessionStorage,
    TOKEN_KEY, USER_KEY,
};

use std::path::PathBuf;
use std::sync::{Arc, Mutex, PoisonError};

use log::debug;
use mf_core::{LoginResponse, User};

/// Typed handle over the `token` and `user` slots.
///
/// Clones share the same backend and the same write lock, so
/// read-modify-write cycles on the cached user never interleave inside
/// one process. Token and user are still written independently.
#[derive(Clone)]
pub struct SessionStore {
    storage: Arc<dyn SessionStorage>,
    write_lock: Arc<Mutex<()>>,
}

impl SessionStore {
    pub fn new(storage: Arc<dyn SessionStorage>) -> Self {
        Self {
            storage,
            write_lock: Arc::new(Mutex::new(())),
        }
    }

    /// File-backed store rooted at `dir`.
    pub fn open(dir: impl Into<PathBuf>) -> Self {
        Self::new(Arc::new(FileStorage::new(dir)))
    }

    pub fn in_memory() -> Self {
        Self::new(Arc::new(MemoryStorage::new()))
    }

    // =========================================================================
    // Token
    // =========================================================================

    pub fn token(&self) -> SessionErrorResult<Option<String>> {
        self.storage.get(TOKEN_KEY)
    }

    pub fn set_token(&self, token: &str) -> SessionErrorResult<()> {
        self.storage.set(TOKEN_KEY, token)
    }

    // =========================================================================
    // User
    // =========================================================================

    /// The cached user, or an empty record when nothing is stored.
    pub fn cached_user(&self) -> SessionErrorResult<User> {
        match self.storage.get(USER_KEY)? {
            Some(raw) if !raw.trim().is_empty() => {
                serde_json::from_str(&raw).map_err(|e| SessionError::serde(USER_KEY, e))
            }
            _ => Ok(User::default()),
        }
    }

    /// Replace the cached user wholesale.
    pub fn set_user(&self, user: &User) -> SessionErrorResult<()> {
        let _guard = self.write_lock.lock().unwrap_or_else(PoisonError::into_inner);
        self.write_user(user)
    }

    /// Persist a successful login: user first, then token.
    pub fn establish(&self, login: &LoginResponse) -> SessionErrorResult<()> {
        self.set_user(&login.user)?;
        self.set_token(&login.token)?;
        debug!(
            "Session established for '{}'",
            login.user.username().unwrap_or_default()
        );
        Ok(())
    }

    /// Forget both slots.
    pub fn clear(&self) -> SessionErrorResult<()> {
        let _guard = self.write_lock.lock().unwrap_or_else(PoisonError::into_inner);
        self.storage.clear()?;
        debug!("Session cleared");
        Ok(())
    }

    /// Read the cached user, apply `mutate`, and write it back under the
    /// write lock. The returned guard can undo the change.
    pub fn update_user<F>(&self, mutate: F) -> SessionErrorResult<PendingUpdate>
    where
        F: FnOnce(&mut User),
    {
        let _guard = self.write_lock.lock().unwrap_or_else(PoisonError::into_inner);

        let previous = self.cached_user()?;
        let mut updated = previous.clone();
        mutate(&mut updated);
        self.write_user(&updated)?;

        Ok(PendingUpdate::new(self.clone(), previous, updated))
    }

    // =========================================================================
    // Favorites
    // =========================================================================

    /// Append `movie_id` to the cached favorites. Duplicates are kept.
    pub fn add_favorite(&self, movie_id: &str) -> SessionErrorResult<PendingUpdate> {
        self.update_user(|user| user.push_favorite(movie_id))
    }

    /// Drop the first occurrence of `movie_id` from the cached favorites.
    pub fn remove_favorite(&self, movie_id: &str) -> SessionErrorResult<PendingUpdate> {
        self.update_user(|user| {
            user.remove_favorite(movie_id);
        })
    }

    pub fn is_favorite(&self, movie_id: &str) -> SessionErrorResult<bool> {
        Ok(self.cached_user()?.is_favorite(movie_id))
    }

    /// Put `previous` back if the slot still holds `expected`.
    pub(crate) fn restore_user(&self, expected: &User, previous: &User) -> SessionErrorResult<bool> {
        let _guard = self.write_lock.lock().unwrap_or_else(PoisonError::into_inner);

        if self.cached_user()? != *expected {
            return Ok(false);
        }

        self.write_user(previous)?;
        Ok(true)
    }

    fn write_user(&self, user: &User) -> SessionErrorResult<()> {
        let raw = serde_json::to_string(user).map_err(|e| SessionError::serde(USER_KEY, e))?;
        self.storage.set(USER_KEY, &raw)
    }
}
