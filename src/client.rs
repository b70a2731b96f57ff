//! Per-base-URL client facade

use std::time::Duration;

use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use reqwest::Method;
use url::Url;

use crate::config::{InstanceConfig, DEFAULT_TIMEOUT_MS};
use crate::error::Error;
use crate::executor::RequestExecutor;
use crate::options::CallOptions;
use crate::request::{Body, ResolvedRequest};
use crate::response::Outcome;

/// HTTP client bound to a base URL, holding shared defaults for all calls
///
/// The configuration is captured by value at construction and read-only
/// afterwards; no state is retained between calls.
#[derive(Debug, Clone)]
pub struct HttpInstance {
    config: InstanceConfig,
    executor: RequestExecutor,
}

impl HttpInstance {
    /// Create an instance with default headers and timeout
    pub fn new(base_url: impl Into<String>) -> Outcome<Self> {
        Self::builder(base_url).build()
    }

    /// Create a builder for configuring instance defaults
    pub fn builder(base_url: impl Into<String>) -> HttpInstanceBuilder {
        HttpInstanceBuilder::new(base_url.into())
    }

    /// Read access to the captured configuration
    pub fn config(&self) -> &InstanceConfig {
        &self.config
    }

    /// GET request
    pub async fn get(&self, path: &str, options: CallOptions) -> Outcome {
        self.dispatch(Method::GET, path, None, options).await
    }

    /// DELETE request
    pub async fn delete(&self, path: &str, options: CallOptions) -> Outcome {
        self.dispatch(Method::DELETE, path, None, options).await
    }

    /// POST request with an optional body
    pub async fn post(
        &self,
        path: &str,
        body: impl Into<Option<Body>>,
        options: CallOptions,
    ) -> Outcome {
        self.dispatch(Method::POST, path, body.into(), options).await
    }

    /// PUT request with an optional body
    pub async fn put(
        &self,
        path: &str,
        body: impl Into<Option<Body>>,
        options: CallOptions,
    ) -> Outcome {
        self.dispatch(Method::PUT, path, body.into(), options).await
    }

    async fn dispatch(
        &self,
        method: Method,
        path: &str,
        body: Option<Body>,
        options: CallOptions,
    ) -> Outcome {
        let request = ResolvedRequest::resolve(&self.config, method, path, body, &options)?;
        self.executor.execute(request).await
    }
}

/// Builder for [`HttpInstance`] defaults
#[derive(Debug)]
pub struct HttpInstanceBuilder {
    base_url: String,
    headers: Vec<(String, String)>,
    query: Vec<(String, String)>,
    timeout: Duration,
}

impl HttpInstanceBuilder {
    fn new(base_url: String) -> Self {
        Self {
            base_url,
            headers: Vec::new(),
            query: Vec::new(),
            timeout: Duration::from_millis(DEFAULT_TIMEOUT_MS),
        }
    }

    /// Add a default header sent with every call
    pub fn default_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }

    /// Add a default query parameter appended to every call URL
    pub fn default_query(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.query.push((name.into(), value.into()));
        self
    }

    /// Set the per-call timeout (default 1000 ms)
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Validate the base URL and capture the configuration
    ///
    /// Fails with [`Error::InvalidConfiguration`] when the base URL is not an
    /// absolute URL or a default header is malformed.
    pub fn build(self) -> Outcome<HttpInstance> {
        let base_url = Url::parse(&self.base_url)
            .map_err(|e| Error::InvalidConfiguration(format!("{}: {}", self.base_url, e)))?;

        let mut headers = HeaderMap::new();
        for (name, value) in &self.headers {
            let name = HeaderName::from_bytes(name.as_bytes())
                .map_err(|e| Error::InvalidConfiguration(format!("{name}: {e}")))?;
            let value = HeaderValue::from_str(value)
                .map_err(|e| Error::InvalidConfiguration(e.to_string()))?;
            headers.insert(name, value);
        }

        Ok(HttpInstance {
            config: InstanceConfig::new(base_url, headers, self.query, self.timeout),
            executor: RequestExecutor::new(),
        })
    }
}
