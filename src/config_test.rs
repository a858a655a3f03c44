use super::*;

#[test]
fn from_raw_none_uses_default_url() {
    let config = ClientConfig::from_raw(None);
    assert_eq!(config.api_url, DEFAULT_API_URL);
    assert_eq!(config.token_key, "token");
}

#[test]
fn from_raw_blank_uses_default_url() {
    assert_eq!(ClientConfig::from_raw(Some("   ")).api_url, DEFAULT_API_URL);
}

#[test]
fn from_raw_trims_trailing_slashes() {
    let config = ClientConfig::from_raw(Some("https://shop.example.com/api//"));
    assert_eq!(config.api_url, "https://shop.example.com/api");
}

#[test]
fn endpoint_joins_with_single_slash() {
    let config = ClientConfig::from_raw(Some("https://shop.example.com/api/"));
    assert_eq!(config.endpoint("/auth/login"), "https://shop.example.com/api/auth/login");
    assert_eq!(config.endpoint("auth/check-status"), "https://shop.example.com/api/auth/check-status");
}

#[test]
fn default_matches_from_raw_none() {
    assert_eq!(ClientConfig::default(), ClientConfig::from_raw(None));
}
