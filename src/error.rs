//! Unified SDK error types.

use reqwest::{Method, StatusCode, Url};
use serde_json::Value;
use std::fmt;
use std::time::Duration;
use thiserror::Error;

/// Result alias used throughout the SDK.
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level SDK error.
#[derive(Error, Debug)]
pub enum Error {
    /// The client was misconfigured; raised before any network activity.
    #[error("{0}")]
    Configuration(String),

    /// The call did not complete within the configured timeout.
    /// `timeout` is `None` when the transport timed out on its own.
    #[error("Request timed out{}: {method} {url}", elapsed(.timeout))]
    Timeout {
        method: Method,
        url: String,
        timeout: Option<Duration>,
    },

    /// Transport-level failure (DNS, connection refused, ...), surfaced unchanged.
    #[error(transparent)]
    Transport(#[from] reqwest::Error),

    /// The server answered with a non-success status.
    #[error(transparent)]
    Api(#[from] ApiError),

    /// `next_page` was called after the last page had been fetched.
    #[error("No more pages available.")]
    PaginationExhausted,

    /// A success response whose body was not the expected JSON.
    #[error("Failed to decode response from {url}: {source}")]
    Decode {
        url: String,
        #[source]
        source: serde_json::Error,
    },
}

impl Error {
    pub(crate) fn missing_token() -> Self {
        Error::Configuration("You must provide an API token.".to_string())
    }

    /// Returns the [`ApiError`] if this error came from a non-success response.
    pub fn as_api(&self) -> Option<&ApiError> {
        match self {
            Error::Api(e) => Some(e),
            _ => None,
        }
    }

    pub fn is_timeout(&self) -> bool {
        matches!(self, Error::Timeout { .. })
    }
}

fn elapsed(timeout: &Option<Duration>) -> String {
    timeout
        .map(|t| format!(" after {}ms", t.as_millis()))
        .unwrap_or_default()
}

// ─── HttpStatusError ─────────────────────────────────────────────────────────

/// The failed exchange behind an [`ApiError`]: status, method and URL.
#[derive(Debug, Clone)]
pub struct HttpStatusError {
    status: StatusCode,
    method: Method,
    url: Url,
}

impl HttpStatusError {
    pub fn new(status: StatusCode, method: Method, url: Url) -> Self {
        Self {
            status,
            method,
            url,
        }
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }

    pub fn method(&self) -> &Method {
        &self.method
    }

    pub fn url(&self) -> &Url {
        &self.url
    }
}

impl fmt::Display for HttpStatusError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let reason = self.status.canonical_reason().unwrap_or_default();
        let status = format!("{} {}", self.status.as_u16(), reason);
        write!(
            f,
            "Request failed with status code {}: {} {}",
            status.trim(),
            self.method,
            self.url
        )
    }
}

impl std::error::Error for HttpStatusError {}

// ─── ApiError ────────────────────────────────────────────────────────────────

/// Error returned by the API for a completed, non-success HTTP exchange.
///
/// The message is the [`HttpStatusError`] text, followed by the `message`
/// field of a JSON error body or, failing that, the raw body text.
#[derive(Error, Debug, Clone)]
#[error("{message}")]
pub struct ApiError {
    status: u16,
    message: String,
    #[source]
    cause: HttpStatusError,
}

impl ApiError {
    /// Fixed discriminant name for this error kind.
    pub const NAME: &'static str = "APIError";

    /// Build from the failed exchange and the full response body text.
    pub fn new(cause: HttpStatusError, text: &str) -> Self {
        let base = cause.to_string();
        let message = if text.is_empty() {
            base
        } else {
            let detail = body_message(text).unwrap_or_else(|| text.to_string());
            format!("{}: {}", base, detail)
        };

        Self {
            status: cause.status().as_u16(),
            message,
            cause,
        }
    }

    pub fn name(&self) -> &'static str {
        Self::NAME
    }

    /// HTTP status code of the response.
    pub fn status(&self) -> u16 {
        self.status
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn cause(&self) -> &HttpStatusError {
        &self.cause
    }
}

/// The usable `message` field of a JSON object body, if any.
fn body_message(text: &str) -> Option<String> {
    let Ok(Value::Object(map)) = serde_json::from_str::<Value>(text) else {
        return None;
    };
    match map.get("message")? {
        Value::String(s) if !s.is_empty() => Some(s.clone()),
        Value::Bool(true) => Some("true".to_string()),
        Value::Number(n) if n.as_f64() != Some(0.0) => Some(n.to_string()),
        v @ (Value::Array(_) | Value::Object(_)) => Some(v.to_string()),
        _ => None,
    }
}
