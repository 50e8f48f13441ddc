use std::fmt;
use std::panic::Location;
use std::path::{Path, PathBuf};

use error_location::ErrorLocation;
use thiserror::Error;

/// Filesystem step that failed while handling the session file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageOp {
    CreateDir,
    Read,
    Write,
    /// Renaming the temp file over `auth.json`
    Replace,
    Remove,
    /// Moving an undecodable `auth.json` aside
    Quarantine,
}

impl StorageOp {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::CreateDir => "create directory",
            Self::Read => "read",
            Self::Write => "write",
            Self::Replace => "replace",
            Self::Remove => "remove",
            Self::Quarantine => "move aside",
        }
    }
}

impl fmt::Display for StorageOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Error, Debug)]
pub enum StorageError {
    #[error("Could not {op} {path}: {source} {location}")]
    Io {
        op: StorageOp,
        path: PathBuf,
        #[source]
        source: std::io::Error,
        location: ErrorLocation,
    },

    #[error("Could not encode the session record: {source} {location}")]
    Encode {
        #[source]
        source: serde_json::Error,
        location: ErrorLocation,
    },
}

impl StorageError {
    #[track_caller]
    pub fn io(op: StorageOp, path: impl AsRef<Path>, source: std::io::Error) -> Self {
        Self::Io {
            op,
            path: path.as_ref().to_path_buf(),
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    pub fn op(&self) -> Option<StorageOp> {
        match self {
            Self::Io { op, .. } => Some(*op),
            Self::Encode { .. } => None,
        }
    }

    /// An undecodable record is still sitting at the session path.
    pub fn leaves_corrupt_record(&self) -> bool {
        self.op() == Some(StorageOp::Quarantine)
    }
}

impl From<serde_json::Error> for StorageError {
    #[track_caller]
    fn from(source: serde_json::Error) -> Self {
        Self::Encode {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type Result<T> = std::result::Result<T, StorageError>;
