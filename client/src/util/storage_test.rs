use super::*;

#[test]
fn memory_storage_set_then_get() {
    let storage = MemoryStorage::new();
    storage.set("token", "abc").unwrap();
    assert_eq!(storage.get("token"), Some("abc".to_owned()));
    assert_eq!(storage.len(), 1);
}

#[test]
fn memory_storage_set_overwrites() {
    let storage = MemoryStorage::new();
    storage.set("username", "alice").unwrap();
    storage.set("username", "bob").unwrap();
    assert_eq!(storage.get("username"), Some("bob".to_owned()));
    assert_eq!(storage.len(), 1);
}

#[test]
fn memory_storage_remove_missing_key_is_noop() {
    let storage = MemoryStorage::new();
    assert_eq!(storage.remove("token"), Ok(()));
    assert!(storage.is_empty());
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn browser_storage_is_unavailable_outside_browser() {
    let storage = BrowserStorage;
    assert_eq!(storage.set("token", "abc"), Err(StorageError::Unavailable));
    assert_eq!(storage.get("token"), None);
    assert_eq!(storage.remove("token"), Err(StorageError::Unavailable));
}

#[test]
fn storage_error_names_rejected_key() {
    assert_eq!(StorageError::Rejected("token".to_owned()).to_string(), "storage write rejected for token");
}
