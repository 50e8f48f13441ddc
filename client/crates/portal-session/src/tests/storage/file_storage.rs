use crate::tests::record;
use crate::{FileStorage, SESSION_FILENAME, SessionStorage};

use std::fs;

use tempfile::TempDir;

#[test]
fn given_no_file_when_load_then_returns_none() {
    let temp = TempDir::new().unwrap();
    let storage = FileStorage::new(temp.path());

    assert!(storage.load().unwrap().is_none());
}

#[test]
fn given_saved_record_when_load_then_returns_it() {
    let temp = TempDir::new().unwrap();
    let storage = FileStorage::new(temp.path().join("nested"));

    storage.save(&record("tok123")).unwrap();

    assert_eq!(storage.load().unwrap(), Some(record("tok123")));
}

#[test]
fn given_save_when_complete_then_no_temp_file_left() {
    let temp = TempDir::new().unwrap();
    let storage = FileStorage::new(temp.path());

    storage.save(&record("tok123")).unwrap();

    let names: Vec<String> = fs::read_dir(temp.path())
        .unwrap()
        .map(|entry| entry.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    assert_eq!(names, vec![SESSION_FILENAME.to_string()]);
}

#[test]
fn given_saved_record_when_written_then_file_holds_user_and_token() {
    let temp = TempDir::new().unwrap();
    let storage = FileStorage::new(temp.path());

    storage.save(&record("tok123")).unwrap();

    let json: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(storage.path()).unwrap()).unwrap();
    assert_eq!(json["token"], "tok123");
    assert_eq!(json["user"]["name"], "Ana");
}

#[test]
fn given_corrupted_file_when_load_then_backs_up_and_returns_none() {
    let temp = TempDir::new().unwrap();
    let storage = FileStorage::new(temp.path());
    fs::write(storage.path(), "{ not json").unwrap();

    assert!(storage.load().unwrap().is_none());
    assert!(!storage.path().exists());

    let backups: Vec<String> = fs::read_dir(temp.path())
        .unwrap()
        .map(|entry| entry.unwrap().file_name().to_string_lossy().into_owned())
        .filter(|name| name.starts_with("auth.json.corrupted."))
        .collect();
    assert_eq!(backups.len(), 1);
}

#[test]
fn given_record_when_clear_then_file_removed() {
    let temp = TempDir::new().unwrap();
    let storage = FileStorage::new(temp.path());
    storage.save(&record("tok123")).unwrap();

    storage.clear().unwrap();

    assert!(!storage.path().exists());
    assert!(storage.load().unwrap().is_none());
}

#[test]
fn given_no_record_when_clear_then_ok() {
    let temp = TempDir::new().unwrap();
    let storage = FileStorage::new(temp.path());

    assert!(storage.clear().is_ok());
}
