//! Client configuration and route paths.
//!
//! A WASM bundle has no process environment, so the API location is baked
//! in at compile time through `TESLO_API_URL`.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

pub const DEFAULT_API_URL: &str = "http://localhost:3000/api";
pub const DEFAULT_TOKEN_KEY: &str = "token";

pub const HOME_ROUTE: &str = "/";
pub const LOGIN_ROUTE: &str = "/auth/login";
pub const REGISTER_ROUTE: &str = "/auth/register";
pub const ADMIN_ROUTE: &str = "/admin";
pub const ACCOUNT_ROUTE: &str = "/account";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Base URL of the REST API, without a trailing slash.
    pub api_url: String,
    /// Key under which the bearer token is persisted.
    pub token_key: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::from_raw(None)
    }
}

impl ClientConfig {
    /// Build config from the compile-time `TESLO_API_URL` variable.
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_raw(option_env!("TESLO_API_URL"))
    }

    /// Build config from an optional raw API URL. Blank values fall back to
    /// [`DEFAULT_API_URL`].
    #[must_use]
    pub fn from_raw(api_url: Option<&str>) -> Self {
        let api_url = api_url
            .map(str::trim)
            .filter(|v| !v.is_empty())
            .unwrap_or(DEFAULT_API_URL)
            .trim_end_matches('/')
            .to_owned();
        Self { api_url, token_key: DEFAULT_TOKEN_KEY.to_owned() }
    }

    /// Join an API path onto the base URL.
    #[must_use]
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.api_url, path.trim_start_matches('/'))
    }
}
