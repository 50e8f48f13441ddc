pub(crate) mod error;
pub(crate) mod file_storage;
pub(crate) mod memory_storage;

pub use error::{Result as StorageResult, StorageError, StorageOp};
pub use file_storage::FileStorage;
pub use memory_storage::MemoryStorage;

use portal_core::StoredSession;

/// Key the session record is kept under.
pub const STORAGE_KEY: &str = "auth";
pub const SESSION_FILENAME: &str = "auth.json";

/// Durable home of the persisted session record.
///
/// Writes are synchronous and whole-record; there is never a partial record.
pub trait SessionStorage: Send + Sync {
    /// `Ok(None)` when nothing usable is stored.
    fn load(&self) -> StorageResult<Option<StoredSession>>;

    fn save(&self, session: &StoredSession) -> StorageResult<()>;

    /// Removing an absent record is not an error.
    fn clear(&self) -> StorageResult<()>;
}
