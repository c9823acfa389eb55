use super::*;

#[test]
fn memory_storage_set_get_remove() {
    let mut storage = MemoryStorage::new();
    assert!(storage.is_empty());

    storage.set(TOKEN_KEY, "abc").expect("set");
    assert_eq!(storage.get(TOKEN_KEY).as_deref(), Some("abc"));

    storage.remove(TOKEN_KEY).expect("remove");
    assert_eq!(storage.get(TOKEN_KEY), None);
    assert!(storage.is_empty());
}

#[test]
fn removing_missing_key_is_not_an_error() {
    let mut storage = MemoryStorage::new();
    assert_eq!(storage.remove(USER_KEY), Ok(()));
}

#[test]
fn with_entries_seeds_values() {
    let storage = MemoryStorage::with_entries([(TOKEN_KEY, "t"), (USER_KEY, "{}")]);
    assert_eq!(storage.get(TOKEN_KEY).as_deref(), Some("t"));
    assert_eq!(storage.get(USER_KEY).as_deref(), Some("{}"));
}
