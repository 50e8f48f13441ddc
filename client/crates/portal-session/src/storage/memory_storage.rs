use crate::{SessionStorage, StorageResult};

use portal_core::StoredSession;

use std::sync::{Mutex, PoisonError};

/// Process-local storage; nothing survives a restart.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    record: Mutex<Option<StoredSession>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start with a record already present, as after a previous login.
    pub fn with_record(session: StoredSession) -> Self {
        Self {
            record: Mutex::new(Some(session)),
        }
    }

    pub fn snapshot(&self) -> Option<StoredSession> {
        self.record
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

impl SessionStorage for MemoryStorage {
    fn load(&self) -> StorageResult<Option<StoredSession>> {
        Ok(self.snapshot())
    }

    fn save(&self, session: &StoredSession) -> StorageResult<()> {
        *self.record.lock().unwrap_or_else(PoisonError::into_inner) = Some(session.clone());
        Ok(())
    }

    fn clear(&self) -> StorageResult<()> {
        self.record
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .take();
        Ok(())
    }
}
