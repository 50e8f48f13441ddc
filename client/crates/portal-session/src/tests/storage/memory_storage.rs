use crate::tests::record;
use crate::{MemoryStorage, SessionStorage};

#[test]
fn given_new_storage_when_load_then_empty() {
    let storage = MemoryStorage::new();
    assert!(storage.load().unwrap().is_none());
}

#[test]
fn given_save_then_clear_when_load_then_empty() {
    let storage = MemoryStorage::new();

    storage.save(&record("tok123")).unwrap();
    assert_eq!(storage.snapshot(), Some(record("tok123")));

    storage.clear().unwrap();
    assert!(storage.snapshot().is_none());
}

#[test]
fn given_existing_record_when_load_then_returns_it() {
    let storage = MemoryStorage::with_record(record("tok123"));
    assert_eq!(storage.load().unwrap(), Some(record("tok123")));
}
