use super::*;
use crate::util::storage::MemoryStorage;

/// Storage whose writes to `reject` fail; everything else goes to `inner`.
struct RejectingStorage {
    inner: MemoryStorage,
    reject: &'static [&'static str],
}

impl RejectingStorage {
    fn new(reject: &'static [&'static str]) -> Self {
        Self { inner: MemoryStorage::new(), reject }
    }
}

impl SessionStorage for RejectingStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.inner.get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        if self.reject.contains(&key) {
            return Err(StorageError::Rejected(key.to_owned()));
        }
        self.inner.set(key, value)
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        if self.reject.contains(&key) {
            return Err(StorageError::Rejected(key.to_owned()));
        }
        self.inner.remove(key)
    }
}

fn stored(token: Option<&str>, username: Option<&str>) -> MemoryStorage {
    let storage = MemoryStorage::new();
    if let Some(t) = token {
        storage.set(TOKEN_KEY, t).unwrap();
    }
    if let Some(u) = username {
        storage.set(USERNAME_KEY, u).unwrap();
    }
    storage
}

// =============================================================
// Session::restore / SessionStore::initialize
// =============================================================

#[test]
fn initialize_with_token_and_username_restores_session() {
    let storage = stored(Some("tok-1"), Some("alice"));
    let store = SessionStore::initialize(&storage);
    assert_eq!(store.session(), Some(&Session { username: "alice".to_owned() }));
    assert!(store.is_authenticated());
}

#[test]
fn initialize_with_empty_storage_has_no_session() {
    let store = SessionStore::initialize(&MemoryStorage::new());
    assert!(store.session().is_none());
    assert!(!store.is_authenticated());
}

#[test]
fn initialize_with_token_only_has_no_session() {
    let storage = stored(Some("tok-1"), None);
    assert!(!SessionStore::initialize(&storage).is_authenticated());
}

#[test]
fn initialize_with_username_only_has_no_session() {
    let storage = stored(None, Some("alice"));
    assert!(!SessionStore::initialize(&storage).is_authenticated());
}

#[test]
fn initialize_treats_empty_values_as_missing() {
    assert!(Session::restore(&stored(Some(""), Some("alice"))).is_none());
    assert!(Session::restore(&stored(Some("tok-1"), Some(""))).is_none());
}

// =============================================================
// login / logout
// =============================================================

#[test]
fn login_updates_memory_and_storage() {
    let storage = MemoryStorage::new();
    let mut store = SessionStore::default();
    store.login(&storage, "tok-1", "alice").unwrap();

    assert_eq!(store.session(), Some(&Session { username: "alice".to_owned() }));
    assert_eq!(storage.get(TOKEN_KEY), Some("tok-1".to_owned()));
    assert_eq!(storage.get(USERNAME_KEY), Some("alice".to_owned()));
}

#[test]
fn login_overwrites_previous_credentials() {
    let storage = stored(Some("old"), Some("bob"));
    let mut store = SessionStore::initialize(&storage);
    store.login(&storage, "new", "alice").unwrap();

    assert_eq!(store.session().map(|s| s.username.as_str()), Some("alice"));
    assert_eq!(storage.get(TOKEN_KEY), Some("new".to_owned()));
    assert_eq!(storage.len(), 2);
}

#[test]
fn login_survives_reload() {
    let storage = MemoryStorage::new();
    SessionStore::default().login(&storage, "tok-1", "alice").unwrap();
    let reloaded = SessionStore::initialize(&storage);
    assert_eq!(reloaded.session().map(|s| s.username.as_str()), Some("alice"));
}

#[test]
fn logout_clears_memory_and_storage() {
    let storage = stored(Some("tok-1"), Some("alice"));
    let mut store = SessionStore::initialize(&storage);
    store.logout(&storage);

    assert!(store.session().is_none());
    assert!(storage.is_empty());
}

#[test]
fn logout_twice_is_noop() {
    let storage = stored(Some("tok-1"), Some("alice"));
    let mut store = SessionStore::initialize(&storage);
    store.logout(&storage);
    store.logout(&storage);

    assert!(!store.is_authenticated());
    assert!(storage.is_empty());
}

#[test]
fn logout_when_never_logged_in_is_noop() {
    let storage = MemoryStorage::new();
    let mut store = SessionStore::default();
    store.logout(&storage);
    assert!(!store.is_authenticated());
    assert!(storage.is_empty());
}

#[test]
fn login_rejected_by_storage_stays_logged_out() {
    let storage = RejectingStorage::new(&[TOKEN_KEY, USERNAME_KEY]);
    let mut store = SessionStore::default();

    let result = store.login(&storage, "tok-1", "alice");

    assert_eq!(result, Err(StorageError::Rejected(TOKEN_KEY.to_owned())));
    assert!(!store.is_authenticated());
    assert!(storage.inner.is_empty());
}

#[test]
fn login_with_failed_username_write_rolls_back_token() {
    let storage = RejectingStorage::new(&[USERNAME_KEY]);
    let mut store = SessionStore::default();

    let result = store.login(&storage, "tok-1", "alice");

    assert_eq!(result, Err(StorageError::Rejected(USERNAME_KEY.to_owned())));
    assert!(!store.is_authenticated());
    assert_eq!(storage.get(TOKEN_KEY), None);
}

#[test]
fn failed_login_keeps_previous_session() {
    let storage = RejectingStorage::new(&[USERNAME_KEY]);
    storage.inner.set(TOKEN_KEY, "old").unwrap();
    storage.inner.set(USERNAME_KEY, "bob").unwrap();
    let mut store = SessionStore::initialize(&storage);

    assert!(store.login(&storage, "new", "alice").is_err());

    assert_eq!(store.session().map(|s| s.username.as_str()), Some("bob"));
}

#[test]
fn logout_clears_memory_even_when_storage_rejects() {
    let storage = RejectingStorage::new(&[USERNAME_KEY]);
    storage.inner.set(TOKEN_KEY, "tok-1").unwrap();
    storage.inner.set(USERNAME_KEY, "alice").unwrap();
    let mut store = SessionStore::initialize(&storage);

    store.logout(&storage);

    assert!(!store.is_authenticated());
    assert_eq!(storage.get(TOKEN_KEY), None);
}

// =============================================================
// SessionContext
// =============================================================

#[test]
fn context_login_without_storage_is_not_authenticated() {
    let owner = Owner::new();
    owner.with(|| {
        let ctx = provide_session(Arc::new(RejectingStorage::new(&[TOKEN_KEY, USERNAME_KEY])));

        assert!(ctx.login("tok-1", "alice").is_err());

        assert!(!ctx.is_authenticated());
        assert_eq!(ctx.username(), None);
        assert_eq!(ctx.token(), None);
    });
}

#[test]
fn context_login_then_logout() {
    let owner = Owner::new();
    owner.with(|| {
        let storage = Arc::new(MemoryStorage::new());
        let ctx = provide_session(storage.clone());
        assert!(!ctx.is_authenticated());
        assert_eq!(ctx.token(), None);

        ctx.login("tok-1", "alice").unwrap();
        assert!(ctx.is_authenticated());
        assert_eq!(ctx.username(), Some("alice".to_owned()));
        assert_eq!(ctx.token(), Some("tok-1".to_owned()));
        assert_eq!(storage.get(USERNAME_KEY), Some("alice".to_owned()));

        ctx.logout();
        assert!(ctx.session().is_none());
        assert!(storage.is_empty());
    });
}

#[test]
fn context_is_available_to_children() {
    let owner = Owner::new();
    owner.with(|| {
        let storage = Arc::new(MemoryStorage::new());
        storage.set(TOKEN_KEY, "tok-1").unwrap();
        storage.set(USERNAME_KEY, "alice").unwrap();
        provide_session(storage);

        let session = use_session();
        assert_eq!(session.username(), Some("alice".to_owned()));
        assert!(try_use_session().is_some());
    });
}

#[test]
fn try_use_session_outside_provider_is_none() {
    let owner = Owner::new();
    owner.with(|| {
        assert!(try_use_session().is_none());
    });
}

#[test]
#[should_panic(expected = "use_session called outside the session provider")]
fn use_session_outside_provider_panics() {
    let owner = Owner::new();
    owner.with(|| {
        let _ = use_session();
    });
}

#[test]
fn context_starts_not_ready() {
    let owner = Owner::new();
    owner.with(|| {
        let ctx = provide_session(Arc::new(MemoryStorage::new()));
        assert!(!ctx.is_ready());
        ctx.mark_ready();
        ctx.mark_ready();
        assert!(ctx.is_ready());
    });
}
