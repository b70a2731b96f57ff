//! Request execution and response classification

use std::collections::BTreeMap;

use crate::error::Error;
use crate::request::ResolvedRequest;
use crate::response::{Outcome, Payload, ResponseEnvelope};

/// Performs one request/response cycle and classifies the result
///
/// Stateless between calls; the inner reqwest client is cheap to clone and
/// may be shared freely across concurrent calls.
#[derive(Debug, Clone, Default)]
pub struct RequestExecutor {
    client: reqwest::Client,
}

impl RequestExecutor {
    /// Create a new executor with default transport settings
    pub fn new() -> Self {
        Self {
            client: reqwest::Client::new(),
        }
    }

    /// Execute one resolved request, producing exactly one outcome
    ///
    /// Suspends until the full response body is received, the timeout
    /// elapses, or a transport-level error occurs. The body is buffered in
    /// full before classification; a failure during the body read is an
    /// error, never a partial success.
    pub async fn execute(&self, request: ResolvedRequest) -> Outcome {
        match request.url.scheme() {
            "http" | "https" => {}
            scheme => return Err(Error::UnsupportedScheme(scheme.to_string())),
        }

        tracing::debug!("{} {}", request.method, request.url);

        let mut builder = self
            .client
            .request(request.method, request.url)
            .headers(request.headers)
            .timeout(request.timeout);
        if let Some(body) = request.body {
            builder = builder.body(body);
        }

        let response = builder.send().await?;
        let status = response.status();

        let mut headers = BTreeMap::new();
        for (name, value) in response.headers() {
            if let Ok(value) = value.to_str() {
                headers.insert(name.as_str().to_string(), value.to_string());
            }
        }

        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(Error::Status {
                status: status.as_u16(),
                message,
            });
        }

        let data = match headers.get("content-type").map(|ct| ct.to_ascii_lowercase()) {
            None => None,
            Some(ct) if ct.contains("application/json") => {
                let text = response.text().await?;
                let value = serde_json::from_str(&text).map_err(|err| {
                    tracing::warn!("JSON response could not be parsed: {}", err);
                    Error::Decode(err.to_string())
                })?;
                Some(Payload::Json(value))
            }
            Some(ct) if ct.contains("text/plain") || ct.contains("text/html") => {
                Some(Payload::Text(response.text().await?))
            }
            Some(ct) => return Err(Error::UnsupportedContentType(ct)),
        };

        Ok(ResponseEnvelope::new(status.as_u16(), headers, data))
    }
}
