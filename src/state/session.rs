//! Session store: the single source of truth for authentication.
//!
//! The store owns the [`AuthState`], the backend, and the token storage.
//! It is constructed once by the app and handed down through context;
//! clones share the same session.
//!
//! STALE RESULTS
//! =============
//! Every async operation takes a ticket from a generation counter when it
//! starts, and `logout` advances the counter too. A result whose ticket is
//! no longer current is dropped, and storage is re-synced to the token the
//! store actually holds. The operation then reports `false`.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use super::auth::{AuthState, AuthStatus};
use crate::net::api::AuthBackend;
use crate::net::auth::{self, AuthError};
use crate::net::types::{AuthResponse, User};
use crate::util::storage::TokenStorage;

type Listener = Rc<dyn Fn(&AuthState)>;

struct Inner<B, S> {
    backend: B,
    storage: S,
    token_key: String,
    state: RefCell<AuthState>,
    generation: Cell<u64>,
    listeners: RefCell<Vec<Listener>>,
}

pub struct SessionStore<B, S> {
    inner: Rc<Inner<B, S>>,
}

impl<B, S> Clone for SessionStore<B, S> {
    fn clone(&self) -> Self {
        Self { inner: Rc::clone(&self.inner) }
    }
}

impl<B: AuthBackend, S: TokenStorage> SessionStore<B, S> {
    /// New store in the `Checking` state.
    pub fn new(backend: B, storage: S, token_key: impl Into<String>) -> Self {
        Self {
            inner: Rc::new(Inner {
                backend,
                storage,
                token_key: token_key.into(),
                state: RefCell::new(AuthState::default()),
                generation: Cell::new(0),
                listeners: RefCell::new(Vec::new()),
            }),
        }
    }

    /// Snapshot of the current session.
    #[must_use]
    pub fn state(&self) -> AuthState {
        self.inner.state.borrow().clone()
    }

    #[must_use]
    pub fn status(&self) -> AuthStatus {
        self.inner.state.borrow().status()
    }

    #[must_use]
    pub fn user(&self) -> Option<User> {
        self.inner.state.borrow().user().cloned()
    }

    #[must_use]
    pub fn token(&self) -> Option<String> {
        self.inner.state.borrow().token().map(str::to_owned)
    }

    #[must_use]
    pub fn is_admin(&self) -> bool {
        self.inner.state.borrow().is_admin()
    }

    #[cfg(test)]
    pub(crate) fn storage(&self) -> &S {
        &self.inner.storage
    }

    /// Register a callback run with the new state after every applied change.
    pub fn subscribe(&self, listener: impl Fn(&AuthState) + 'static) {
        self.inner.listeners.borrow_mut().push(Rc::new(listener));
    }

    /// Log in. Returns whether the session is now authenticated.
    pub async fn login(&self, email: &str, password: &str) -> bool {
        let ticket = self.begin();
        let result = auth::login(&self.inner.backend, email, password).await;
        self.finish_sign_in(ticket, result)
    }

    /// Register and sign in. Same contract as [`Self::login`].
    pub async fn register(&self, email: &str, password: &str, full_name: &str) -> bool {
        let ticket = self.begin();
        let result = auth::register(&self.inner.backend, email, password, full_name).await;
        self.finish_sign_in(ticket, result)
    }

    /// Sign out locally. Also invalidates any operation still in flight.
    pub fn logout(&self) {
        self.begin();
        self.inner.storage.remove(&self.inner.token_key);
        self.apply(AuthState::clear);
        log::debug!("session logged out");
    }

    /// Resolve the session from the persisted token.
    pub async fn check_auth_status(&self) -> bool {
        let ticket = self.begin();
        let result = auth::check_auth_status(&self.inner.backend, &self.inner.storage, &self.inner.token_key).await;
        if !self.is_current(ticket) {
            self.discard_stale("check-status");
            return false;
        }
        match result {
            Ok(data) => {
                self.apply(|s| s.authenticate(data));
                self.status() == AuthStatus::Authenticated
            }
            Err(e) => {
                log::debug!("status check failed: {e}");
                self.inner.storage.remove(&self.inner.token_key);
                self.apply(AuthState::clear);
                false
            }
        }
    }

    fn finish_sign_in(&self, ticket: u64, result: Result<AuthResponse, AuthError>) -> bool {
        if !self.is_current(ticket) {
            self.discard_stale("sign-in");
            return false;
        }
        match result {
            Ok(data) => {
                self.inner.storage.set(&self.inner.token_key, &data.token);
                self.apply(|s| s.authenticate(data));
                true
            }
            Err(_) => {
                self.inner.storage.remove(&self.inner.token_key);
                self.apply(AuthState::clear);
                false
            }
        }
    }

    fn begin(&self) -> u64 {
        let next = self.inner.generation.get().wrapping_add(1);
        self.inner.generation.set(next);
        next
    }

    fn is_current(&self, ticket: u64) -> bool {
        self.inner.generation.get() == ticket
    }

    fn discard_stale(&self, op: &str) {
        log::info!("discarding stale {op} result");
        match self.token() {
            Some(token) => self.inner.storage.set(&self.inner.token_key, &token),
            None => self.inner.storage.remove(&self.inner.token_key),
        }
    }

    fn apply(&self, change: impl FnOnce(&mut AuthState)) {
        let snapshot = {
            let mut state = self.inner.state.borrow_mut();
            change(&mut state);
            debug_assert!(state.is_consistent());
            state.clone()
        };
        log::debug!("session status: {:?}", snapshot.status());
        // Listeners may read the store, so no borrow is held while they run.
        let listeners: Vec<Listener> = self.inner.listeners.borrow().clone();
        for listener in listeners {
            listener(&snapshot);
        }
    }
}
