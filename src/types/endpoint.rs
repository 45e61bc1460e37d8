//! Endpoint configuration passed explicitly on every API call

use serde::{Deserialize, Serialize};

/// Public Monday.com GraphQL endpoint
pub const DEFAULT_API_URL: &str = "https://api.monday.com/v2";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiUrl(pub String);

impl ApiUrl {
    pub fn new<T: Into<String>>(url: T) -> Self {
        Self(url.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for ApiUrl {
    fn default() -> Self {
        Self(DEFAULT_API_URL.to_string())
    }
}

impl std::fmt::Display for ApiUrl {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// API token sent verbatim in the `Authorization` header
#[derive(Clone, PartialEq, Eq)]
pub struct ApiKey(String);

impl ApiKey {
    pub fn new<T: Into<String>>(key: T) -> Self {
        Self(key.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("ApiKey(<redacted>)")
    }
}

/// Where and as whom a request is sent
#[derive(Debug, Clone)]
pub struct ApiEndpoint {
    pub api_url: ApiUrl,
    pub api_key: ApiKey,
}

impl ApiEndpoint {
    pub fn new<K: Into<String>, U: Into<String>>(api_key: K, api_url: U) -> Self {
        Self {
            api_url: ApiUrl::new(api_url),
            api_key: ApiKey::new(api_key),
        }
    }
}
