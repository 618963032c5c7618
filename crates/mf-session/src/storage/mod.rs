mod file_storage;
mod memory_storage;

pub use file_storage::FileStorage;
pub use memory_storage::MemoryStorage;

use crate::SessionErrorResult;

/// Durable string key-value slots.
///
/// Reads and writes are synchronous. Implementations only promise
/// per-key consistency; two keys written back to back are not atomic.
pub trait SessionStorage: Send + Sync {
    fn get(&self, key: &str) -> SessionErrorResult<Option<String>>;

    fn set(&self, key: &str, value: &str) -> SessionErrorResult<()>;

    fn remove(&self, key: &str) -> SessionErrorResult<()>;

    /// Remove every slot.
    fn clear(&self) -> SessionErrorResult<()>;
}
