//! Request resolution and body serialization

use std::time::Duration;

use reqwest::header::{HeaderMap, HeaderName, HeaderValue, CONTENT_LENGTH, CONTENT_TYPE};
use reqwest::Method;
use serde::Serialize;
use url::Url;

use crate::config::InstanceConfig;
use crate::error::Error;
use crate::options::CallOptions;
use crate::response::Outcome;

/// Request body, serialized to bytes before dispatch
#[derive(Debug, Clone)]
pub enum Body {
    /// Structured value, sent as `application/json`
    Json(serde_json::Value),
    /// Plain text, sent as `text/plain` unless per-call headers override
    Text(String),
}

impl Body {
    /// Serialize any value into a JSON body
    pub fn json<T: Serialize + ?Sized>(value: &T) -> Outcome<Self> {
        Ok(Body::Json(serde_json::to_value(value)?))
    }

    fn into_bytes(self) -> (Vec<u8>, &'static str) {
        match self {
            Body::Json(value) => (value.to_string().into_bytes(), "application/json"),
            Body::Text(text) => (text.into_bytes(), "text/plain"),
        }
    }
}

impl From<serde_json::Value> for Body {
    fn from(value: serde_json::Value) -> Self {
        Body::Json(value)
    }
}

impl From<String> for Body {
    fn from(text: String) -> Self {
        Body::Text(text)
    }
}

impl From<&str> for Body {
    fn from(text: &str) -> Self {
        Body::Text(text.to_string())
    }
}

/// One fully resolved request, consumed once by the executor
#[derive(Debug)]
pub struct ResolvedRequest {
    pub(crate) url: Url,
    pub(crate) method: Method,
    pub(crate) headers: HeaderMap,
    pub(crate) body: Option<Vec<u8>>,
    pub(crate) timeout: Duration,
}

impl ResolvedRequest {
    /// Merge instance defaults, path, body and per-call options into one request
    ///
    /// Resolution is pure: the same base, path and parameters always produce
    /// the same absolute URL. The path follows standard URL-resolution rules,
    /// so an absolute path replaces the base path and a relative path appends.
    /// Header merge is last-write-wins: instance defaults first, then computed
    /// body headers, then per-call headers.
    pub fn resolve(
        config: &InstanceConfig,
        method: Method,
        path: &str,
        body: Option<Body>,
        options: &CallOptions,
    ) -> Outcome<Self> {
        let mut url = config.base_url().join(path)?;

        // query_pairs_mut leaves a dangling '?' when nothing is appended
        if !(config.query().is_empty() && options.query.is_empty()) {
            let mut pairs = url.query_pairs_mut();
            for (name, value) in config.query().iter().chain(options.query.iter()) {
                pairs.append_pair(name, value);
            }
        }

        let mut headers = config.headers().clone();

        let body = match body {
            Some(body) => {
                let (bytes, content_type) = body.into_bytes();
                headers.insert(CONTENT_TYPE, HeaderValue::from_static(content_type));
                headers.insert(CONTENT_LENGTH, HeaderValue::from(bytes.len() as u64));
                Some(bytes)
            }
            None => None,
        };

        for (name, value) in &options.headers {
            let name = HeaderName::from_bytes(name.as_bytes())
                .map_err(|e| Error::InvalidHeader(format!("{name}: {e}")))?;
            let value = HeaderValue::from_str(value)
                .map_err(|e| Error::InvalidHeader(e.to_string()))?;
            headers.insert(name, value);
        }

        Ok(Self {
            url,
            method,
            headers,
            body,
            timeout: config.timeout(),
        })
    }

    /// The absolute URL this request will be sent to
    pub fn url(&self) -> &Url {
        &self.url
    }

    /// The final merged header set
    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }
}
