use super::*;
use crate::storage::MemoryStorage;
use crate::types::Role;

fn profile(name: &str) -> UserProfile {
    UserProfile {
        id: "1".to_owned(),
        name: name.to_owned(),
        email: "admin@example.com".to_owned(),
        role: Role::Admin,
        last_login_at: None,
    }
}

fn profile_json(name: &str) -> String {
    serde_json::to_string(&profile(name)).expect("profile json")
}

/// Storage that refuses writes to one key.
#[derive(Default)]
struct RejectingStorage {
    inner: MemoryStorage,
    reject: &'static str,
}

impl Storage for RejectingStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.inner.get(key)
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        if key == self.reject {
            return Err(StorageError::Write("quota exceeded".to_owned()));
        }
        self.inner.set(key, value)
    }

    fn remove(&mut self, key: &str) -> Result<(), StorageError> {
        self.inner.remove(key)
    }
}

// =============================================================
// Session snapshot
// =============================================================

#[test]
fn new_store_is_uninitialized_and_empty() {
    let store = SessionStore::new(MemoryStorage::new());
    assert_eq!(store.session().phase(), AuthPhase::Uninitialized);
    assert!(!store.session().is_loading());
    assert!(!store.session().is_resolved());
    assert_eq!(store.token(), None);
    assert_eq!(store.session().user(), None);
}

// =============================================================
// Hydration
// =============================================================

#[test]
fn hydrate_with_both_keys_enters_loading() {
    let user = profile_json("Ana");
    let storage = MemoryStorage::with_entries([(TOKEN_KEY, "tok"), (USER_KEY, user.as_str())]);
    let mut store = SessionStore::new(storage);

    assert!(store.hydrate());
    assert!(store.session().is_loading());
    assert_eq!(store.token(), Some("tok"));
    assert_eq!(store.session().user().map(|u| u.name.as_str()), Some("Ana"));
    assert!(!store.session().is_authenticated());
}

#[test]
fn hydrate_without_user_key_resolves_anonymous_and_clears_token() {
    let storage = MemoryStorage::with_entries([(TOKEN_KEY, "tok")]);
    let mut store = SessionStore::new(storage);

    assert!(!store.hydrate());
    assert_eq!(store.session(), &Session::anonymous());
    assert!(store.storage().is_empty());
}

#[test]
fn hydrate_with_corrupt_profile_resolves_anonymous() {
    let storage = MemoryStorage::with_entries([(TOKEN_KEY, "tok"), (USER_KEY, "{not json")]);
    let mut store = SessionStore::new(storage);

    assert!(!store.hydrate());
    assert_eq!(store.session().phase(), AuthPhase::Anonymous);
    assert!(store.storage().is_empty());
}

#[test]
fn hydrate_with_blank_token_resolves_anonymous() {
    let user = profile_json("Ana");
    let storage = MemoryStorage::with_entries([(TOKEN_KEY, "  "), (USER_KEY, user.as_str())]);
    let mut store = SessionStore::new(storage);

    assert!(!store.hydrate());
    assert_eq!(store.token(), None);
}

// =============================================================
// Establish / update / clear
// =============================================================

#[test]
fn establish_sets_memory_and_both_durable_keys() {
    let mut store = SessionStore::new(MemoryStorage::new());
    store.begin_login();
    store.establish("abc".to_owned(), profile("A")).expect("establish");

    assert!(store.session().is_authenticated());
    assert_eq!(store.token(), Some("abc"));
    assert_eq!(store.storage().get(TOKEN_KEY).as_deref(), Some("abc"));
    let cached: UserProfile =
        serde_json::from_str(&store.storage().get(USER_KEY).expect("user key")).expect("cached profile");
    assert_eq!(cached.name, "A");
}

#[test]
fn establish_rolls_back_when_profile_write_fails() {
    let mut store = SessionStore::new(RejectingStorage { reject: USER_KEY, ..Default::default() });
    store.begin_login();

    let err = store.establish("abc".to_owned(), profile("A")).expect_err("should fail");
    assert_eq!(err, StorageError::Write("quota exceeded".to_owned()));
    assert_eq!(store.storage().get(TOKEN_KEY), None);
    assert_eq!(store.token(), None);
    assert_eq!(store.session().user(), None);
}

#[test]
fn failed_relogin_keeps_previous_durable_session() {
    let old_user = profile_json("Old");
    let storage = RejectingStorage {
        inner: MemoryStorage::with_entries([(TOKEN_KEY, "old"), (USER_KEY, old_user.as_str())]),
        reject: USER_KEY,
    };
    let mut store = SessionStore::new(storage);
    assert!(store.hydrate());
    store.begin_login();

    store.establish("new".to_owned(), profile("New")).expect_err("should fail");
    store.abort_login();

    assert_eq!(store.session().phase(), AuthPhase::Authenticated);
    assert_eq!(store.token(), Some("old"));
    assert_eq!(store.storage().get(TOKEN_KEY).as_deref(), Some("old"));
    assert_eq!(store.storage().get(USER_KEY), Some(old_user));
    assert!(!store.superseded());
}

#[test]
fn adopt_durable_follows_storage_without_writing() {
    let user = profile_json("Ana");
    let mut store = SessionStore::new(MemoryStorage::with_entries([(TOKEN_KEY, "t"), (USER_KEY, user.as_str())]));
    store.adopt_durable();
    assert!(store.session().is_authenticated());
    assert_eq!(store.token(), Some("t"));

    let mut empty = SessionStore::new(MemoryStorage::new());
    empty.adopt_durable();
    assert_eq!(empty.session(), &Session::anonymous());
}

#[test]
fn abort_login_returns_to_anonymous() {
    let mut store = SessionStore::new(MemoryStorage::new());
    store.clear().expect("clear");
    store.begin_login();
    assert!(store.session().is_loading());

    store.abort_login();
    assert_eq!(store.session(), &Session::anonymous());
}

#[test]
fn update_user_requires_token() {
    let mut store = SessionStore::new(MemoryStorage::new());
    assert_eq!(store.update_user(profile("A")), Ok(false));
    assert_eq!(store.session().user(), None);
    assert!(store.storage().is_empty());
}

#[test]
fn update_user_replaces_cached_profile() {
    let mut store = SessionStore::new(MemoryStorage::new());
    store.establish("abc".to_owned(), profile("A")).expect("establish");

    assert_eq!(store.update_user(profile("B")), Ok(true));
    assert_eq!(store.session().user().map(|u| u.name.as_str()), Some("B"));
    assert!(store.storage().get(USER_KEY).expect("user key").contains("\"B\""));
}

#[test]
fn clear_after_establish_matches_resolved_empty_state() {
    let mut store = SessionStore::new(MemoryStorage::new());
    store.establish("abc".to_owned(), profile("A")).expect("establish");

    store.clear().expect("clear");
    assert_eq!(store.session(), &Session::anonymous());
    assert!(store.storage().is_empty());
}
