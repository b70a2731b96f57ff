//! Per-instance configuration

use std::time::Duration;

use reqwest::header::{HeaderMap, HeaderValue, ACCEPT};
use url::Url;

/// Default per-call timeout in milliseconds
pub const DEFAULT_TIMEOUT_MS: u64 = 1000;

/// Immutable per-instance defaults, captured by value at construction
///
/// Shared read-only by every call made through the owning instance; there is
/// no mutable state between calls.
#[derive(Debug, Clone)]
pub struct InstanceConfig {
    base_url: Url,
    headers: HeaderMap,
    query: Vec<(String, String)>,
    timeout: Duration,
}

impl InstanceConfig {
    /// `accept: application/json` is injected unless the defaults override it.
    pub(crate) fn new(
        base_url: Url,
        mut headers: HeaderMap,
        query: Vec<(String, String)>,
        timeout: Duration,
    ) -> Self {
        if !headers.contains_key(ACCEPT) {
            headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        }
        Self {
            base_url,
            headers,
            query,
            timeout,
        }
    }

    /// The base URL every call path is resolved against
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Default headers sent with every call
    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    /// Default query parameters appended to every call URL
    pub fn query(&self) -> &[(String, String)] {
        &self.query
    }

    /// Per-call timeout
    pub fn timeout(&self) -> Duration {
        self.timeout
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accept_header_injected() {
        let base = Url::parse("https://api.example.com").expect("valid url");
        let config = InstanceConfig::new(
            base,
            HeaderMap::new(),
            Vec::new(),
            Duration::from_millis(DEFAULT_TIMEOUT_MS),
        );

        assert_eq!(
            config.headers().get(ACCEPT).map(|v| v.as_bytes()),
            Some(b"application/json".as_slice())
        );
    }

    #[test]
    fn test_accept_header_not_overridden() {
        let base = Url::parse("https://api.example.com").expect("valid url");
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("text/html"));

        let config = InstanceConfig::new(
            base,
            headers,
            Vec::new(),
            Duration::from_millis(DEFAULT_TIMEOUT_MS),
        );

        assert_eq!(
            config.headers().get(ACCEPT).map(|v| v.as_bytes()),
            Some(b"text/html".as_slice())
        );
    }
}
