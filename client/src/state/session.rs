//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Used by route guards and user-aware components to coordinate login redirects
//! and identity-dependent rendering. Durable storage is the source of truth;
//! the in-memory session is a cache rebuilt once at app start.
//!
//! DESIGN
//! ======
//! `SessionStore` is the plain state machine (testable without a reactive
//! runtime). `SessionContext` pairs it with a signal and the storage handle and
//! is provided once by `App` before any page exists.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use std::sync::Arc;

use leptos::prelude::*;

use crate::util::storage::{SessionStorage, StorageError};

/// Storage key holding the opaque bearer token.
pub const TOKEN_KEY: &str = "token";
/// Storage key holding the logged-in username.
pub const USERNAME_KEY: &str = "username";

/// The authenticated identity.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Session {
    pub username: String,
}

impl Session {
    /// Rebuild a session from durable storage.
    ///
    /// Returns `None` unless both token and username are present and non-empty.
    /// The token is not validated against the backend.
    pub fn restore(storage: &dyn SessionStorage) -> Option<Self> {
        if !storage.get(TOKEN_KEY).is_some_and(|t| !t.is_empty()) {
            return None;
        }
        let username = storage.get(USERNAME_KEY).filter(|u| !u.is_empty())?;
        Some(Self { username })
    }
}

/// In-memory mirror of the stored session.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SessionStore {
    session: Option<Session>,
}

impl SessionStore {
    pub fn initialize(storage: &dyn SessionStorage) -> Self {
        Self { session: Session::restore(storage) }
    }

    pub fn session(&self) -> Option<&Session> {
        self.session.as_ref()
    }

    pub fn is_authenticated(&self) -> bool {
        self.session.is_some()
    }

    /// Persist credentials, then replace the cached session.
    ///
    /// The cached session changes only after both keys are stored. A failed
    /// username write removes the token again so storage never holds half a
    /// session.
    ///
    /// # Errors
    ///
    /// Returns the first write failure; the cached session is left untouched.
    pub fn login(&mut self, storage: &dyn SessionStorage, token: &str, username: &str) -> Result<(), StorageError> {
        storage.set(TOKEN_KEY, token)?;
        if let Err(e) = storage.set(USERNAME_KEY, username) {
            if let Err(rollback) = storage.remove(TOKEN_KEY) {
                log::warn!("token rollback failed: {rollback}");
            }
            return Err(e);
        }
        self.session = Some(Session { username: username.to_owned() });
        Ok(())
    }

    /// Remove credentials, then clear the cached session. Safe to repeat.
    ///
    /// Memory is always cleared; a failed removal is only logged.
    pub fn logout(&mut self, storage: &dyn SessionStorage) {
        for key in [TOKEN_KEY, USERNAME_KEY] {
            if let Err(e) = storage.remove(key) {
                log::warn!("logout could not clear {key}: {e}");
            }
        }
        self.session = None;
    }
}

/// Application-wide session handle shared through Leptos context.
#[derive(Clone, Copy)]
pub struct SessionContext {
    store: RwSignal<SessionStore>,
    storage: StoredValue<Arc<dyn SessionStorage>>,
    ready: RwSignal<bool>,
}

impl SessionContext {
    pub fn new(storage: Arc<dyn SessionStorage>) -> Self {
        let store = RwSignal::new(SessionStore::initialize(storage.as_ref()));
        if let Some(session) = store.with_untracked(|s| s.session().cloned()) {
            log::debug!("restored session for {}", session.username);
        }
        Self { store, storage: StoredValue::new(storage), ready: RwSignal::new(false) }
    }

    /// Whether identity-dependent markup may render.
    ///
    /// Server renders never see browser storage, so anything derived from the
    /// session stays hidden until the client has hydrated and calls
    /// [`SessionContext::mark_ready`].
    pub fn is_ready(&self) -> bool {
        self.ready.get()
    }

    pub fn mark_ready(&self) {
        if !self.ready.get_untracked() {
            self.ready.set(true);
        }
    }

    /// Current session (tracked).
    pub fn session(&self) -> Option<Session> {
        self.store.with(|s| s.session().cloned())
    }

    /// Current username (tracked).
    pub fn username(&self) -> Option<String> {
        self.store.with(|s| s.session().map(|session| session.username.clone()))
    }

    /// Whether a user is logged in (tracked). Never reads storage.
    pub fn is_authenticated(&self) -> bool {
        self.store.with(SessionStore::is_authenticated)
    }

    /// Bearer token for outgoing API requests, read from storage at call time.
    pub fn token(&self) -> Option<String> {
        self.storage.with_value(|s| s.get(TOKEN_KEY)).filter(|t| !t.is_empty())
    }

    /// Persist and publish a new session.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` when the credentials could not be stored; the
    /// user stays logged out.
    pub fn login(&self, token: &str, username: &str) -> Result<(), StorageError> {
        let storage = self.storage.get_value();
        let result = self
            .store
            .try_update(|s| s.login(storage.as_ref(), token, username))
            .unwrap_or(Err(StorageError::Unavailable));
        match &result {
            Ok(()) => log::debug!("logged in as {username}"),
            Err(e) => log::warn!("login not persisted: {e}"),
        }
        result
    }

    pub fn logout(&self) {
        let storage = self.storage.get_value();
        self.store.update(|s| s.logout(storage.as_ref()));
        log::debug!("logged out");
    }
}

/// Build the session from storage and install it as context.
pub fn provide_session(storage: Arc<dyn SessionStorage>) -> SessionContext {
    let ctx = SessionContext::new(storage);
    provide_context(ctx);
    ctx
}

/// Read the session handle provided by `App`.
///
/// # Panics
///
/// Panics when called outside the component tree rooted at `App`; that is a
/// wiring defect, not a runtime condition.
pub fn use_session() -> SessionContext {
    use_context::<SessionContext>()
        .unwrap_or_else(|| panic!("use_session called outside the session provider"))
}

/// Like [`use_session`] but returns `None` outside the provider.
pub fn try_use_session() -> Option<SessionContext> {
    use_context::<SessionContext>()
}
