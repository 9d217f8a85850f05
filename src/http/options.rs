//! Client options: instance defaults merged with per-call overrides.

use crate::error::{Error, Result};
use crate::http::retry::RetryConfig;
use crate::network::DEFAULT_API_URL;
use std::time::Duration;

/// Default request timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Default number of retries after the initial attempt.
pub const DEFAULT_RETRY_LIMIT: u32 = 2;

/// Environment variable read by [`ClientOptions::from_env`] for the token.
pub const API_TOKEN_ENV: &str = "MORISAWA_FONTS_API_TOKEN";

/// Environment variable read by [`ClientOptions::from_env`] for the base URL.
pub const BASE_URL_ENV: &str = "MORISAWA_FONTS_BASE_URL";

/// Timeout applied to one logical call, retries included.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestTimeout {
    After(Duration),
    Disabled,
}

impl RequestTimeout {
    pub fn duration(&self) -> Option<Duration> {
        match self {
            RequestTimeout::After(d) => Some(*d),
            RequestTimeout::Disabled => None,
        }
    }
}

impl From<Duration> for RequestTimeout {
    fn from(d: Duration) -> Self {
        RequestTimeout::After(d)
    }
}

/// Partial client configuration.
///
/// Every field is optional: the client holds one set as instance defaults and
/// each call may pass another set that wins field by field.
#[derive(Debug, Clone, Default)]
pub struct ClientOptions {
    /// API token sent as `Authorization: Bearer <token>`.
    pub api_token: Option<String>,
    /// Base URL for the API endpoint. Defaults to [`DEFAULT_API_URL`].
    pub base_url: Option<String>,
    /// Defaults to [`DEFAULT_TIMEOUT`].
    pub timeout: Option<RequestTimeout>,
    /// Retry attempts for failed requests. Defaults to [`DEFAULT_RETRY_LIMIT`].
    pub retry: Option<u32>,
    /// Delay schedule between retries.
    pub backoff: Option<RetryConfig>,
    /// Transport used to send requests.
    pub http_client: Option<reqwest::Client>,
}

impl ClientOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Token and base URL from [`API_TOKEN_ENV`] / [`BASE_URL_ENV`], if set.
    pub fn from_env() -> Self {
        Self {
            api_token: std::env::var(API_TOKEN_ENV).ok(),
            base_url: std::env::var(BASE_URL_ENV).ok(),
            ..Self::default()
        }
    }

    pub fn api_token(mut self, token: impl Into<String>) -> Self {
        self.api_token = Some(token.into());
        self
    }

    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(RequestTimeout::After(timeout));
        self
    }

    pub fn no_timeout(mut self) -> Self {
        self.timeout = Some(RequestTimeout::Disabled);
        self
    }

    pub fn retry(mut self, limit: u32) -> Self {
        self.retry = Some(limit);
        self
    }

    pub fn backoff(mut self, config: RetryConfig) -> Self {
        self.backoff = Some(config);
        self
    }

    pub fn http_client(mut self, client: reqwest::Client) -> Self {
        self.http_client = Some(client);
        self
    }

    /// Overlay `overrides` on top of `self`; set fields in `overrides` win.
    pub fn merge(&self, overrides: &ClientOptions) -> ClientOptions {
        ClientOptions {
            api_token: overrides.api_token.clone().or_else(|| self.api_token.clone()),
            base_url: overrides.base_url.clone().or_else(|| self.base_url.clone()),
            timeout: overrides.timeout.or(self.timeout),
            retry: overrides.retry.or(self.retry),
            backoff: overrides.backoff.clone().or_else(|| self.backoff.clone()),
            http_client: overrides
                .http_client
                .clone()
                .or_else(|| self.http_client.clone()),
        }
    }

    /// Fill in defaults. Fails when no non-empty token is configured.
    pub(crate) fn resolve(&self, fallback: &reqwest::Client) -> Result<ResolvedOptions> {
        let api_token = match self.api_token.as_deref() {
            Some(token) if !token.is_empty() => token.to_string(),
            _ => return Err(Error::missing_token()),
        };

        let base_url = match self.base_url.as_deref() {
            Some(url) if !url.is_empty() => url.to_string(),
            _ => DEFAULT_API_URL.to_string(),
        };

        Ok(ResolvedOptions {
            api_token,
            base_url,
            timeout: self
                .timeout
                .unwrap_or(RequestTimeout::After(DEFAULT_TIMEOUT))
                .duration(),
            retry: self.retry.unwrap_or(DEFAULT_RETRY_LIMIT),
            backoff: self.backoff.clone().unwrap_or_default(),
            http_client: self.http_client.clone().unwrap_or_else(|| fallback.clone()),
        })
    }
}

/// Effective configuration for a single call.
#[derive(Debug, Clone)]
pub(crate) struct ResolvedOptions {
    pub api_token: String,
    pub base_url: String,
    pub timeout: Option<Duration>,
    pub retry: u32,
    pub backoff: RetryConfig,
    pub http_client: reqwest::Client,
}

impl ResolvedOptions {
    /// `base_url` joined with `path`; a leading `/` on `path` is dropped.
    pub fn url_for(&self, path: &str) -> String {
        let path = path.strip_prefix('/').unwrap_or(path);
        format!("{}/{}", self.base_url.trim_end_matches('/'), path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_override_wins_field_by_field() {
        let defaults = ClientOptions::new()
            .api_token("instance")
            .base_url("https://example.com/v1")
            .retry(5);
        let overrides = ClientOptions::new().api_token("call").no_timeout();

        let merged = defaults.merge(&overrides);
        assert_eq!(merged.api_token.as_deref(), Some("call"));
        assert_eq!(merged.base_url.as_deref(), Some("https://example.com/v1"));
        assert_eq!(merged.retry, Some(5));
        assert_eq!(merged.timeout, Some(RequestTimeout::Disabled));
    }

    #[test]
    fn test_merge_does_not_touch_defaults() {
        let defaults = ClientOptions::new().api_token("instance");
        let _ = defaults.merge(&ClientOptions::new().api_token("call"));
        assert_eq!(defaults.api_token.as_deref(), Some("instance"));
    }

    #[test]
    fn test_resolve_requires_token() {
        let fallback = reqwest::Client::new();
        let err = ClientOptions::new().resolve(&fallback).unwrap_err();
        assert_eq!(err.to_string(), "You must provide an API token.");

        let err = ClientOptions::new()
            .api_token("")
            .resolve(&fallback)
            .unwrap_err();
        assert!(matches!(err, Error::Configuration(_)));
    }

    #[test]
    fn test_resolve_defaults() {
        let fallback = reqwest::Client::new();
        let resolved = ClientOptions::new()
            .api_token("t")
            .base_url("")
            .resolve(&fallback)
            .unwrap();
        assert_eq!(resolved.base_url, DEFAULT_API_URL);
        assert_eq!(resolved.timeout, Some(Duration::from_secs(30)));
        assert_eq!(resolved.retry, 2);
    }

    #[test]
    fn test_resolve_disabled_timeout() {
        let fallback = reqwest::Client::new();
        let resolved = ClientOptions::new()
            .api_token("t")
            .no_timeout()
            .resolve(&fallback)
            .unwrap();
        assert_eq!(resolved.timeout, None);
    }

    #[test]
    fn test_url_for_strips_leading_slash() {
        let fallback = reqwest::Client::new();
        let resolved = ClientOptions::new()
            .api_token("t")
            .base_url("https://example.com/v1/")
            .resolve(&fallback)
            .unwrap();
        assert_eq!(resolved.url_for("/domains"), "https://example.com/v1/domains");
        assert_eq!(resolved.url_for("stats/pv"), "https://example.com/v1/stats/pv");
    }
}
