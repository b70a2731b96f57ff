//! Minimal HTTP client with per-instance defaults and Result-based outcomes
//!
//! An [`HttpInstance`] is bound to a base URL and holds default headers,
//! default query parameters and a timeout. Each call resolves a path and
//! per-call [`CallOptions`] against those defaults, executes exactly one
//! request, and returns an [`Outcome`]: `Ok(ResponseEnvelope)` on success or
//! `Err(Error)` for every expected failure path. Response bodies are
//! classified by their declared content type (JSON, plain text or HTML);
//! anything else is rejected.
//!
//! # Example
//!
//! ```no_run
//! use fetch_client::{Body, CallOptions, HttpInstance, Outcome};
//!
//! async fn example() -> Outcome {
//!     let api = HttpInstance::builder("https://api.example.com")
//!         .default_header("authorization", "Bearer token")
//!         .build()?;
//!
//!     api.post(
//!         "/widgets",
//!         Body::json(&serde_json::json!({"name": "gear"}))?,
//!         CallOptions::new().query("dry_run", "true"),
//!     )
//!     .await
//! }
//! ```

mod client;
mod config;
mod error;
mod executor;
mod options;
mod request;
mod response;

pub use client::{HttpInstance, HttpInstanceBuilder};
pub use config::{InstanceConfig, DEFAULT_TIMEOUT_MS};
pub use error::Error;
pub use executor::RequestExecutor;
pub use options::CallOptions;
pub use request::{Body, ResolvedRequest};
pub use response::{Outcome, Payload, ResponseEnvelope};
