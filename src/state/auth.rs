#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use serde::{Deserialize, Serialize};

use crate::net::types::{AuthResponse, Role, User};

/// Resolution progress of the session.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AuthStatus {
    /// Initial value until the first status check resolves.
    #[default]
    Checking,
    Authenticated,
    NotAuthenticated,
}

/// The current session: who is signed in and with which token.
///
/// `status` is `Authenticated` exactly when both `user` and a non-empty
/// `token` are present. Fields are only changed through the transition
/// methods below.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AuthState {
    user: Option<User>,
    token: Option<String>,
    status: AuthStatus,
}

impl AuthState {
    #[must_use]
    pub fn user(&self) -> Option<&User> {
        self.user.as_ref()
    }

    #[must_use]
    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    #[must_use]
    pub fn status(&self) -> AuthStatus {
        self.status
    }

    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.status == AuthStatus::Authenticated
    }

    /// Whether the signed-in user holds the admin role. False when signed out.
    #[must_use]
    pub fn is_admin(&self) -> bool {
        self.user.as_ref().is_some_and(|u| u.has_role(Role::Admin))
    }

    /// Adopt a backend response. An empty token clears the session instead.
    pub fn authenticate(&mut self, data: AuthResponse) {
        if data.token.is_empty() {
            self.clear();
            return;
        }
        self.user = Some(data.user);
        self.token = Some(data.token);
        self.status = AuthStatus::Authenticated;
    }

    /// Drop user and token and mark the session not authenticated.
    pub fn clear(&mut self) {
        self.user = None;
        self.token = None;
        self.status = AuthStatus::NotAuthenticated;
    }

    /// Check the status/user/token consistency rule.
    #[must_use]
    pub fn is_consistent(&self) -> bool {
        let present = self.user.is_some() && self.token.as_deref().is_some_and(|t| !t.is_empty());
        match self.status {
            AuthStatus::Authenticated => present,
            AuthStatus::Checking | AuthStatus::NotAuthenticated => self.user.is_none() && self.token.is_none(),
        }
    }
}
