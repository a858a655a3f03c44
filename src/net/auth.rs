//! Auth actions: login, register, and status check against the backend.
//!
//! These are thin request/response operations. They never touch session
//! state; failures propagate to the `SessionStore`, which absorbs them.
//! Only the status check reads and writes the persisted token.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use super::api::AuthBackend;
use super::types::{AuthResponse, LoginRequest, RegisterRequest};
use crate::util::storage::TokenStorage;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AuthError {
    #[error("no token found")]
    NoTokenPresent,
    #[error("backend rejected request ({status}): {message}")]
    BackendRejected { status: u16, message: String },
    #[error("network failure: {0}")]
    NetworkFailure(String),
    #[error("malformed response: {0}")]
    MalformedResponse(String),
    /// The stored token was refused on revalidation.
    #[error("token expired or not valid: {0}")]
    TokenExpired(Box<AuthError>),
}

/// Log in with email and password.
///
/// # Errors
///
/// Propagates any backend or transport failure unchanged.
pub async fn login<B: AuthBackend>(backend: &B, email: &str, password: &str) -> Result<AuthResponse, AuthError> {
    let result = backend.login(&LoginRequest { email, password }).await;
    if let Err(e) = &result {
        log::warn!("login failed: {e}");
    }
    result.and_then(validated)
}

/// Register a new account. The backend logs the new account in directly.
///
/// # Errors
///
/// Propagates any backend or transport failure unchanged.
pub async fn register<B: AuthBackend>(
    backend: &B,
    email: &str,
    password: &str,
    full_name: &str,
) -> Result<AuthResponse, AuthError> {
    let result = backend.register(&RegisterRequest { email, password, full_name }).await;
    if let Err(e) = &result {
        log::warn!("register failed: {e}");
    }
    result.and_then(validated)
}

/// Revalidate the persisted token.
///
/// On success the (possibly rotated) token is written back to storage. On
/// any backend failure the persisted token is removed.
///
/// # Errors
///
/// [`AuthError::NoTokenPresent`] when storage holds no token; no request is
/// made in that case. Otherwise [`AuthError::TokenExpired`] wrapping the
/// backend failure.
pub async fn check_auth_status<B, S>(backend: &B, storage: &S, token_key: &str) -> Result<AuthResponse, AuthError>
where
    B: AuthBackend,
    S: TokenStorage,
{
    let token = storage
        .get(token_key)
        .filter(|t| !t.is_empty())
        .ok_or(AuthError::NoTokenPresent)?;

    match backend.check_status(&token).await.and_then(validated) {
        Ok(data) => {
            storage.set(token_key, &data.token);
            Ok(data)
        }
        Err(e) => {
            let err = AuthError::TokenExpired(Box::new(e));
            log::warn!("{err}");
            storage.remove(token_key);
            Err(err)
        }
    }
}

fn validated(data: AuthResponse) -> Result<AuthResponse, AuthError> {
    if data.token.trim().is_empty() {
        return Err(AuthError::MalformedResponse("empty token".to_owned()));
    }
    Ok(data)
}
