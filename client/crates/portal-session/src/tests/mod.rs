
use crate::{SessionStorage, StorageError, StorageOp, StorageResult};

use portal_core::{BearerToken, StoredSession, UserProfile};

use std::path::PathBuf;

pub(crate) fn ana() -> UserProfile {
    UserProfile::new(1, "Ana")
}

pub(crate) fn record(token: &str) -> StoredSession {
    StoredSession::new(ana(), BearerToken::new(token))
}

/// Storage whose writes always fail; reads see nothing.
pub(crate) struct ReadOnlyStorage;

impl SessionStorage for ReadOnlyStorage {
    fn load(&self) -> StorageResult<Option<StoredSession>> {
        Ok(None)
    }

    fn save(&self, _session: &StoredSession) -> StorageResult<()> {
        Err(StorageError::io(
            StorageOp::Write,
            PathBuf::from("/read-only/auth.json"),
            std::io::Error::new(std::io::ErrorKind::PermissionDenied, "read-only"),
        ))
    }

    fn clear(&self) -> StorageResult<()> {
        Err(StorageError::io(
            StorageOp::Remove,
            PathBuf::from("/read-only/auth.json"),
            std::io::Error::new(std::io::ErrorKind::PermissionDenied, "read-only"),
        ))
    }
}
