//! High-level client: `MorisawaFontsWebFont` with nested sub-client accessors.
//!
//! Each resource has its own sub-client in `domain/<name>/client.rs`.
//! This module keeps the builder and the accessor methods.

use crate::domain::domains::client::Domains;
use crate::domain::stats::client::Stats;
use crate::error::Result;
use crate::http::{Client, ClientBuilder, ClientOptions, RetryConfig};

use std::time::Duration;

// Re-export sub-client types for convenience.
pub use crate::domain::domains::client::Domains as DomainsClient;
pub use crate::domain::stats::client::{
    Pv as PvClient, PvDomains as PvDomainsClient, Stats as StatsClient,
};

/// The primary entry point for the Morisawa Fonts web font API.
///
/// Provides nested sub-client accessors for each resource:
/// `client.domains()`, `client.stats().pv()`, `client.stats().pv().domains()`.
#[derive(Debug, Clone)]
pub struct MorisawaFontsWebFont {
    pub(crate) http: Client,
}

impl MorisawaFontsWebFont {
    pub fn builder() -> MorisawaFontsWebFontBuilder {
        MorisawaFontsWebFontBuilder::default()
    }

    /// Create a client with the given instance defaults.
    pub fn new(options: ClientOptions) -> Result<Self> {
        Ok(Self {
            http: Client::new(options)?,
        })
    }

    /// Create a client configured from the process environment.
    ///
    /// See [`ClientOptions::from_env`].
    pub fn from_env() -> Result<Self> {
        Self::new(ClientOptions::from_env())
    }

    /// The underlying request client, for endpoints without a sub-client.
    pub fn client(&self) -> &Client {
        &self.http
    }

    // ── Sub-client accessors ─────────────────────────────────────────────

    pub fn domains(&self) -> Domains<'_> {
        Domains { client: self }
    }

    pub fn stats(&self) -> Stats<'_> {
        Stats { client: self }
    }
}

// ═════════════════════════════════════════════════════════════════════════════
// Builder
// ═════════════════════════════════════════════════════════════════════════════

#[derive(Default)]
pub struct MorisawaFontsWebFontBuilder {
    inner: ClientBuilder,
}

impl MorisawaFontsWebFontBuilder {
    pub fn api_token(mut self, token: impl Into<String>) -> Self {
        self.inner = self.inner.api_token(token);
        self
    }

    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.inner = self.inner.base_url(url);
        self
    }

    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.inner = self.inner.timeout(timeout);
        self
    }

    pub fn no_timeout(mut self) -> Self {
        self.inner = self.inner.no_timeout();
        self
    }

    pub fn retry(mut self, limit: u32) -> Self {
        self.inner = self.inner.retry(limit);
        self
    }

    pub fn backoff(mut self, config: RetryConfig) -> Self {
        self.inner = self.inner.backoff(config);
        self
    }

    pub fn http_client(mut self, client: reqwest::Client) -> Self {
        self.inner = self.inner.http_client(client);
        self
    }

    pub fn browser_host(mut self, browser_host: bool) -> Self {
        self.inner = self.inner.browser_host(browser_host);
        self
    }

    pub fn build(self) -> Result<MorisawaFontsWebFont> {
        Ok(MorisawaFontsWebFont {
            http: self.inner.build()?,
        })
    }
}
