use crate::{SESSION_FILENAME, SessionStorage, StorageError, StorageOp, StorageResult};

use portal_core::StoredSession;

use std::fs;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use log::{debug, info, warn};

const DATE_FORMAT: &str = "%Y%m%d_%H%M%S";

/// Session record kept as `auth.json` inside a directory.
#[derive(Debug, Clone)]
pub struct FileStorage {
    dir: PathBuf,
}

impl FileStorage {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn path(&self) -> PathBuf {
        self.dir.join(SESSION_FILENAME)
    }

    /// Moves a corrupted `auth.json` aside to `auth.json.corrupted.{timestamp}`.
    pub fn backup_corrupted(&self) -> StorageResult<Option<PathBuf>> {
        let path = self.path();

        if !path.exists() {
            return Ok(None);
        }

        let timestamp = chrono::Utc::now().format(DATE_FORMAT);
        let backup_path = self
            .dir
            .join(format!("{SESSION_FILENAME}.corrupted.{timestamp}"));

        fs::rename(&path, &backup_path)
            .map_err(|e| StorageError::io(StorageOp::Quarantine, &path, e))?;

        warn!("Backed up corrupted session file to {backup_path:?}");
        Ok(Some(backup_path))
    }
}

impl SessionStorage for FileStorage {
    /// A corrupted file is backed up and reported as no record.
    fn load(&self) -> StorageResult<Option<StoredSession>> {
        let path = self.path();

        if !path.exists() {
            debug!("No session file at {path:?}");
            return Ok(None);
        }

        let contents =
            fs::read_to_string(&path).map_err(|e| StorageError::io(StorageOp::Read, &path, e))?;

        match serde_json::from_str::<StoredSession>(&contents) {
            Ok(session) => {
                debug!("Loaded session for user {}", session.user.id);
                Ok(Some(session))
            }
            Err(e) => {
                warn!("Session file corrupted at {path:?}: {e}");
                self.backup_corrupted()?;
                Ok(None)
            }
        }
    }

    /// Temp file, fsync, then rename over the final path.
    fn save(&self, session: &StoredSession) -> StorageResult<()> {
        fs::create_dir_all(&self.dir)
            .map_err(|e| StorageError::io(StorageOp::CreateDir, &self.dir, e))?;

        let final_path = self.path();
        let temp_path = self
            .dir
            .join(format!("{SESSION_FILENAME}.tmp.{}", std::process::id()));

        let json = serde_json::to_string_pretty(session)?;

        {
            let mut file = fs::File::create(&temp_path)
                .map_err(|e| StorageError::io(StorageOp::Write, &temp_path, e))?;

            file.write_all(json.as_bytes())
                .map_err(|e| StorageError::io(StorageOp::Write, &temp_path, e))?;

            file.sync_all()
                .map_err(|e| StorageError::io(StorageOp::Write, &temp_path, e))?;
        }

        fs::rename(&temp_path, &final_path).map_err(|e| {
            let _ = fs::remove_file(&temp_path);
            StorageError::io(StorageOp::Replace, &final_path, e)
        })?;

        info!("Saved session for user {}", session.user.id);
        Ok(())
    }

    fn clear(&self) -> StorageResult<()> {
        let path = self.path();

        match fs::remove_file(&path) {
            Ok(()) => {
                info!("Removed session file {path:?}");
                Ok(())
            }
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(StorageError::io(StorageOp::Remove, &path, e)),
        }
    }
}
