use crate::{SessionErrorResult, SessionStore};

use log::warn;
use mf_core::User;

/// An optimistic change to the cached user that has already been written.
///
/// Settle it with [`confirm`](Self::confirm) once the server agrees, or
/// [`rollback`](Self::rollback) when it does not. Dropping the guard
/// keeps the change.
#[must_use = "an optimistic update should be confirmed or rolled back"]
pub struct PendingUpdate {
    store: SessionStore,
    previous: User,
    written: User,
}

impl PendingUpdate {
    pub(crate) fn new(store: SessionStore, previous: User, written: User) -> Self {
        Self {
            store,
            previous,
            written,
        }
    }

    /// The user as it was before this update.
    pub fn previous(&self) -> &User {
        &self.previous
    }

    /// The user this update wrote.
    pub fn written(&self) -> &User {
        &self.written
    }

    /// Keep the optimistic change.
    pub fn confirm(self) {}

    /// Restore the snapshot taken before the update.
    ///
    /// Returns `false` without touching the slot when another write has
    /// landed since; the newer value wins.
    pub fn rollback(self) -> SessionErrorResult<bool> {
        let restored = self.store.restore_user(&self.written, &self.previous)?;
        if !restored {
            warn!("Skipped rollback of cached user: it changed after the optimistic write");
        }
        Ok(restored)
    }
}
