//! Persistent client session: the bearer `token` and the cached `user`.
//!
//! The two values live in independent slots of a [`SessionStorage`]
//! backend. [`SessionStore`] is the typed handle the rest of the client
//! goes through; nothing else reads or writes the slots.

mod error;
mod pending_update;
mod session_store;
mod storage;

#[cfg(test)]
mod tests;

pub use error::{SessionError, SessionErrorResult};
pub use pending_update::PendingUpdate;
pub use session_store::SessionStore;
pub use storage::{FileStorage, MemoryStorage, SessionStorage};

/// Slot holding the opaque bearer token
pub const TOKEN_KEY: &str = "token";
/// Slot holding the JSON-serialized user record
pub const USER_KEY: &str = "user";
