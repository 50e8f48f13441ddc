use crate::{StorageError, StorageOp};

use std::path::PathBuf;

fn io_error() -> std::io::Error {
    std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied")
}

#[test]
fn given_failed_quarantine_when_checked_then_leaves_corrupt_record() {
    let err = StorageError::io(StorageOp::Quarantine, PathBuf::from("/data/auth.json"), io_error());

    assert!(err.leaves_corrupt_record());
    assert_eq!(err.op(), Some(StorageOp::Quarantine));
}

#[test]
fn given_failed_read_when_checked_then_record_not_reported_corrupt() {
    let err = StorageError::io(StorageOp::Read, PathBuf::from("/data/auth.json"), io_error());

    assert!(!err.leaves_corrupt_record());
}

#[test]
fn given_encode_error_when_checked_then_has_no_op() {
    let source = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
    let err = StorageError::from(source);

    assert_eq!(err.op(), None);
    assert!(err.to_string().starts_with("Could not encode the session record"));
}

#[test]
fn given_io_error_when_displayed_then_names_step_and_path() {
    let err = StorageError::io(StorageOp::Replace, PathBuf::from("/data/auth.json"), io_error());

    assert!(err.to_string().starts_with("Could not replace /data/auth.json: denied"));
}
