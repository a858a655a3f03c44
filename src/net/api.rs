//! REST backend for the auth endpoints.
//!
//! Browser build (`csr`): real HTTP calls via `gloo-net`.
//! Native builds: every call fails fast with
//! [`AuthError::NetworkFailure`] since the browser transport is absent.
//!
//! ERROR HANDLING
//! ==============
//! Non-2xx responses become [`AuthError::BackendRejected`] carrying the
//! backend's own message. Bodies that do not decode become
//! [`AuthError::MalformedResponse`].

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::auth::AuthError;
use super::types::{AuthResponse, LoginRequest, RegisterRequest};
use crate::config::ClientConfig;

/// The three backend operations the session core depends on.
///
/// Futures are not required to be `Send`; everything runs on the single
/// browser event loop.
#[allow(async_fn_in_trait)]
pub trait AuthBackend {
    /// `POST /auth/login`.
    async fn login(&self, request: &LoginRequest<'_>) -> Result<AuthResponse, AuthError>;

    /// `POST /auth/register`.
    async fn register(&self, request: &RegisterRequest<'_>) -> Result<AuthResponse, AuthError>;

    /// `GET /auth/check-status` authorized with `token`.
    async fn check_status(&self, token: &str) -> Result<AuthResponse, AuthError>;
}

/// HTTP implementation of [`AuthBackend`].
#[derive(Clone, Debug)]
pub struct HttpAuthApi {
    #[cfg_attr(not(feature = "csr"), allow(dead_code))]
    config: ClientConfig,
}

impl HttpAuthApi {
    #[must_use]
    pub fn new(config: ClientConfig) -> Self {
        Self { config }
    }
}

impl AuthBackend for HttpAuthApi {
    async fn login(&self, request: &LoginRequest<'_>) -> Result<AuthResponse, AuthError> {
        #[cfg(feature = "csr")]
        {
            let req = gloo_net::http::Request::post(&self.config.endpoint("auth/login"))
                .json(request)
                .map_err(|e| AuthError::NetworkFailure(e.to_string()))?;
            decode_response(req.send().await).await
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = request;
            Err(unavailable())
        }
    }

    async fn register(&self, request: &RegisterRequest<'_>) -> Result<AuthResponse, AuthError> {
        #[cfg(feature = "csr")]
        {
            let req = gloo_net::http::Request::post(&self.config.endpoint("auth/register"))
                .json(request)
                .map_err(|e| AuthError::NetworkFailure(e.to_string()))?;
            decode_response(req.send().await).await
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = request;
            Err(unavailable())
        }
    }

    async fn check_status(&self, token: &str) -> Result<AuthResponse, AuthError> {
        #[cfg(feature = "csr")]
        {
            let resp = gloo_net::http::Request::get(&self.config.endpoint("auth/check-status"))
                .header("Authorization", &bearer(token))
                .send()
                .await;
            decode_response(resp).await
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = token;
            Err(unavailable())
        }
    }
}

#[cfg(feature = "csr")]
async fn decode_response(
    resp: Result<gloo_net::http::Response, gloo_net::Error>,
) -> Result<AuthResponse, AuthError> {
    let resp = resp.map_err(|e| AuthError::NetworkFailure(e.to_string()))?;
    let status = resp.status();
    let body = resp
        .text()
        .await
        .map_err(|e| AuthError::NetworkFailure(e.to_string()))?;
    if !resp.ok() {
        return Err(rejection(status, &body));
    }
    serde_json::from_str(&body).map_err(|e| AuthError::MalformedResponse(e.to_string()))
}

#[cfg(not(feature = "csr"))]
fn unavailable() -> AuthError {
    AuthError::NetworkFailure("not available outside the browser".to_owned())
}

/// `Authorization` header value for a bearer token.
#[must_use]
pub fn bearer(token: &str) -> String {
    format!("Bearer {token}")
}

/// Build a rejection from a non-2xx status and its raw body.
///
/// The backend reports errors as `{"message": ..., "error": ..., "statusCode": ...}`
/// where `message` is either a string or a list of validation messages.
#[must_use]
pub fn rejection(status: u16, body: &str) -> AuthError {
    let message = serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|value| rejection_message(&value))
        .unwrap_or_else(|| format!("request failed with status {status}"));
    AuthError::BackendRejected { status, message }
}

fn rejection_message(body: &serde_json::Value) -> Option<String> {
    match body.get("message") {
        Some(serde_json::Value::String(s)) if !s.is_empty() => return Some(s.clone()),
        Some(serde_json::Value::Array(items)) => {
            if let Some(first) = items.iter().find_map(serde_json::Value::as_str) {
                return Some(first.to_owned());
            }
        }
        _ => {}
    }
    body.get("error")
        .and_then(serde_json::Value::as_str)
        .filter(|s| !s.is_empty())
        .map(str::to_owned)
}
