pub(crate) mod error;
pub(crate) mod guard;
pub(crate) mod storage;
pub(crate) mod store;
pub(crate) mod view_scope;

#[cfg(test)]
mod tests;

pub use error::{Result as SessionResult, SessionError};
pub use guard::{GuardDecision, guard, resolve};
pub use storage::{
    FileStorage, MemoryStorage, SESSION_FILENAME, STORAGE_KEY, SessionStorage, StorageError,
    StorageOp, StorageResult,
};
pub use store::{SessionEvent, SessionStore};
pub use view_scope::ViewScope;
