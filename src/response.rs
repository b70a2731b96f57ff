//! HTTP response types

use std::collections::BTreeMap;

use serde::de::DeserializeOwned;

use crate::error::Error;

/// Call outcome - exactly one of `Ok(success value)` or `Err(error)`
///
/// This is the primary return type for all HTTP operations. Callers inspect
/// the variant explicitly; no exception channel exists.
pub type Outcome<T = ResponseEnvelope, E = Error> = Result<T, E>;

/// Decoded response payload, classified by the declared content type
#[derive(Debug, Clone, PartialEq)]
pub enum Payload {
    /// Body declared `application/json`, parsed into a JSON value
    Json(serde_json::Value),
    /// Body declared `text/plain` or `text/html`
    Text(String),
}

/// Successful response: status code, headers and optional decoded payload
///
/// Produced exactly once per call. Header names are stored lowercased.
#[derive(Debug, Clone)]
pub struct ResponseEnvelope {
    status: u16,
    headers: BTreeMap<String, String>,
    data: Option<Payload>,
}

impl ResponseEnvelope {
    pub(crate) fn new(
        status: u16,
        headers: BTreeMap<String, String>,
        data: Option<Payload>,
    ) -> Self {
        Self {
            status,
            headers,
            data,
        }
    }

    /// Get the HTTP status code
    pub fn status(&self) -> u16 {
        self.status
    }

    /// Check if the response status is a success (2xx)
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Get the response headers, names lowercased
    pub fn headers(&self) -> &BTreeMap<String, String> {
        &self.headers
    }

    /// Look up a single response header by name (case-insensitive)
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .get(&name.to_ascii_lowercase())
            .map(String::as_str)
    }

    /// Get the decoded payload, if the response carried one
    pub fn data(&self) -> Option<&Payload> {
        self.data.as_ref()
    }

    /// Consume the envelope and take the payload
    pub fn into_data(self) -> Option<Payload> {
        self.data
    }

    /// Get the payload as text, if it was decoded as text
    pub fn text(&self) -> Option<&str> {
        match &self.data {
            Some(Payload::Text(text)) => Some(text),
            _ => None,
        }
    }

    /// Deserialize the JSON payload into `T`
    ///
    /// Fails with [`Error::Decode`] when the response carried no payload or a
    /// text payload.
    pub fn json<T: DeserializeOwned>(&self) -> Outcome<T> {
        match &self.data {
            Some(Payload::Json(value)) => {
                serde_json::from_value(value.clone()).map_err(|e| Error::Decode(e.to_string()))
            }
            Some(Payload::Text(_)) => Err(Error::Decode("payload is text, not JSON".to_string())),
            None => Err(Error::Decode("response carried no payload".to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use serde::Deserialize;
    use serde_json::json;

    use super::*;

    fn envelope(status: u16, data: Option<Payload>) -> ResponseEnvelope {
        ResponseEnvelope::new(status, BTreeMap::new(), data)
    }

    #[test]
    fn test_outcome_is_result() {
        let success: Outcome<i32> = Ok(42);
        assert!(matches!(success, Ok(42)));

        let error: Outcome<i32> = Err(Error::Timeout);
        assert!(matches!(error, Err(Error::Timeout)));
    }

    #[test]
    fn test_is_success_bounds() {
        assert!(envelope(200, None).is_success());
        assert!(envelope(299, None).is_success());
        assert!(!envelope(199, None).is_success());
        assert!(!envelope(300, None).is_success());
    }

    #[test]
    fn test_header_lookup_is_case_insensitive() {
        let mut headers = BTreeMap::new();
        headers.insert("content-type".to_string(), "text/plain".to_string());
        let envelope = ResponseEnvelope::new(200, headers, None);

        assert_eq!(envelope.header("Content-Type"), Some("text/plain"));
        assert_eq!(envelope.header("missing"), None);
    }

    #[test]
    fn test_json_payload_deserializes() {
        #[derive(Deserialize)]
        struct Data {
            a: i32,
        }

        let envelope = envelope(200, Some(Payload::Json(json!({"a": 1}))));
        let data: Data = envelope.json().expect("payload should deserialize");
        assert_eq!(data.a, 1);
    }

    #[test]
    fn test_json_on_missing_payload_fails() {
        let envelope = envelope(200, None);
        let result: Outcome<serde_json::Value> = envelope.json();
        assert!(matches!(result, Err(Error::Decode(_))));
    }

    #[test]
    fn test_json_on_text_payload_fails() {
        let envelope = envelope(200, Some(Payload::Text("hello".to_string())));
        let result: Outcome<serde_json::Value> = envelope.json();
        assert!(matches!(result, Err(Error::Decode(_))));
    }

    #[test]
    fn test_text_accessor() {
        let envelope = envelope(200, Some(Payload::Text("hello".to_string())));
        assert_eq!(envelope.text(), Some("hello"));
    }
}
