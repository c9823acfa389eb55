use super::*;
use portal::storage::{TOKEN_KEY, USER_KEY};

fn session_path(dir: &tempfile::TempDir) -> PathBuf {
    dir.path().join("nested").join("session.json")
}

// =============================================================
// Loading
// =============================================================

#[test]
fn missing_file_is_empty_session() {
    let dir = tempfile::tempdir().expect("tempdir");
    let storage = FileStorage::open(session_path(&dir)).expect("open");
    assert_eq!(storage.get(TOKEN_KEY), None);
}

#[test]
fn corrupt_file_is_ignored() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("session.json");
    std::fs::write(&path, "not json").expect("write");

    let storage = FileStorage::open(&path).expect("open");
    assert_eq!(storage.get(TOKEN_KEY), None);
}

// =============================================================
// Persistence
// =============================================================

#[test]
fn values_survive_reopen() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = session_path(&dir);

    let mut storage = FileStorage::open(&path).expect("open");
    storage.set(TOKEN_KEY, "abc").expect("set token");
    storage.set(USER_KEY, r#"{"id":"1"}"#).expect("set user");

    let reopened = FileStorage::open(&path).expect("reopen");
    assert_eq!(reopened.get(TOKEN_KEY).as_deref(), Some("abc"));
    assert_eq!(reopened.get(USER_KEY).as_deref(), Some(r#"{"id":"1"}"#));
}

#[test]
fn removing_last_key_deletes_file() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = session_path(&dir);

    let mut storage = FileStorage::open(&path).expect("open");
    storage.set(TOKEN_KEY, "abc").expect("set");
    assert!(path.exists());

    storage.remove(TOKEN_KEY).expect("remove");
    assert!(!path.exists());
    assert_eq!(storage.get(TOKEN_KEY), None);
}

#[test]
fn removing_absent_key_is_noop() {
    let dir = tempfile::tempdir().expect("tempdir");
    let mut storage = FileStorage::open(session_path(&dir)).expect("open");
    assert_eq!(storage.remove(USER_KEY), Ok(()));
}

#[test]
fn failed_write_keeps_previous_value() {
    let dir = tempfile::tempdir().expect("tempdir");
    // A directory where the file should be makes every write fail.
    let path = dir.path().join("session.json");
    std::fs::create_dir(&path).expect("mkdir");

    let mut storage = FileStorage::open(dir.path().join("unused.json")).expect("open");
    storage.path = path;
    assert!(matches!(storage.set(TOKEN_KEY, "abc"), Err(StorageError::Write(_))));
    assert_eq!(storage.get(TOKEN_KEY), None);
}

#[cfg(unix)]
#[test]
fn session_file_is_owner_only() {
    use std::os::unix::fs::PermissionsExt;

    let dir = tempfile::tempdir().expect("tempdir");
    let path = session_path(&dir);
    let mut storage = FileStorage::open(&path).expect("open");
    storage.set(TOKEN_KEY, "abc").expect("set");

    let mode = std::fs::metadata(&path).expect("metadata").permissions().mode();
    assert_eq!(mode & 0o777, 0o600);
}
