//! Low-level HTTP client: `Client`.
//!
//! Authenticated GET/POST/DELETE against the web font API, with count-bounded
//! retries, a per-call timeout and error normalization. Resource sub-clients
//! and [`Pager`] are built on top of this.

use crate::error::{ApiError, Error, HttpStatusError, Result};
use crate::http::options::{ClientOptions, ResolvedOptions};
use crate::http::params::SearchParams;
use crate::http::retry::RetryPolicy;
use crate::network::USER_AGENT;
use crate::pager::{Paginated, Pager};

use futures_util::future::{self, Either};
use reqwest::header;
use reqwest::{Method, Response, Url};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::sync::Arc;
use std::time::Duration;

/// HTTP client for the Morisawa Fonts web font REST API.
///
/// Holds read-only instance defaults; every call may pass a partial
/// [`ClientOptions`] that is merged over them for that call only. Cloning is
/// cheap and clones share the connection pool.
#[derive(Debug, Clone)]
pub struct Client {
    options: Arc<ClientOptions>,
    /// Transport used when the effective options name none.
    default_http: reqwest::Client,
    user_agent: Option<&'static str>,
}

impl Client {
    /// Create a client with the given instance defaults.
    ///
    /// The token is not checked here; a missing token fails each call.
    pub fn new(options: ClientOptions) -> Result<Self> {
        Self::builder().options(options).build()
    }

    pub fn builder() -> ClientBuilder {
        ClientBuilder::default()
    }

    /// Instance defaults.
    pub fn options(&self) -> &ClientOptions {
        &self.options
    }

    /// `GET path?params`, returning the parsed JSON body.
    pub async fn get<T: DeserializeOwned>(
        &self,
        path: &str,
        params: Option<&SearchParams>,
        overrides: Option<&ClientOptions>,
    ) -> Result<T> {
        let (url, body) = self
            .request(Method::GET, path, params, None::<&()>, overrides)
            .await?;
        decode(url, &body)
    }

    /// `POST path` with a JSON body, returning the parsed JSON body.
    pub async fn post<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: Option<&B>,
        overrides: Option<&ClientOptions>,
    ) -> Result<T> {
        let (url, bytes) = self
            .request(Method::POST, path, None, body, overrides)
            .await?;
        decode(url, &bytes)
    }

    /// `DELETE path` with an optional JSON body. The response body is discarded.
    pub async fn delete<B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: Option<&B>,
        overrides: Option<&ClientOptions>,
    ) -> Result<()> {
        self.request(Method::DELETE, path, None, body, overrides)
            .await?;
        Ok(())
    }

    /// A [`Pager`] over `path`. No request is made until the first page is asked for.
    pub fn get_list<P: Paginated>(
        &self,
        path: &str,
        input: impl Into<SearchParams>,
        overrides: Option<ClientOptions>,
    ) -> Pager<P> {
        Pager::new(self.clone(), path, input.into(), overrides)
    }

    // ── Internal HTTP methods ────────────────────────────────────────────

    async fn request<B: Serialize + ?Sized>(
        &self,
        method: Method,
        path: &str,
        params: Option<&SearchParams>,
        body: Option<&B>,
        overrides: Option<&ClientOptions>,
    ) -> Result<(Url, Vec<u8>)> {
        let options = match overrides {
            Some(o) => self.options.merge(o),
            None => ClientOptions::clone(&self.options),
        };
        let options = options.resolve(&self.default_http)?;
        let url = options.url_for(path);

        let call = self.request_with_retry(&method, &url, params, body, &options);
        let Some(timeout) = options.timeout else {
            return call.await;
        };

        let call = std::pin::pin!(call);
        match future::select(call, futures_timer::Delay::new(timeout)).await {
            Either::Left((result, _)) => result,
            Either::Right(_) => Err(timeout_error(&method, &url, Some(timeout))),
        }
    }

    async fn request_with_retry<B: Serialize + ?Sized>(
        &self,
        method: &Method,
        url: &str,
        params: Option<&SearchParams>,
        body: Option<&B>,
        options: &ResolvedOptions,
    ) -> Result<(Url, Vec<u8>)> {
        let max_retries = match RetryPolicy::for_method(method) {
            RetryPolicy::None => 0,
            RetryPolicy::Idempotent => options.retry,
        };
        let backoff = &options.backoff;
        let mut attempt = 0;

        loop {
            let request = self
                .build_request(method, url, params, body, options)
                .build()?;
            let request_url = request.url().clone();

            tracing::debug!(
                method = %method,
                url = %request_url,
                attempt = attempt + 1,
                "Sending request"
            );

            let response = match options.http_client.execute(request).await {
                Ok(resp) => resp,
                Err(e) if e.is_timeout() => {
                    return Err(timeout_error(method, url, options.timeout));
                }
                Err(e) => {
                    if attempt < max_retries && is_retryable_transport(&e) {
                        let delay = backoff.delay_for_attempt(attempt);
                        log_retry(attempt, max_retries, delay, url, &e.to_string());
                        futures_timer::Delay::new(delay).await;
                        attempt += 1;
                        continue;
                    }
                    return Err(Error::Transport(e));
                }
            };

            let status = response.status();
            if status.is_success() {
                let bytes = response.bytes().await?;
                return Ok((request_url, bytes.to_vec()));
            }

            if attempt < max_retries && backoff.is_retryable_status(status) {
                let delay = backoff
                    .retry_after(status, response.headers())
                    .unwrap_or_else(|| backoff.delay_for_attempt(attempt));
                log_retry(attempt, max_retries, delay, url, status.as_str());
                futures_timer::Delay::new(delay).await;
                attempt += 1;
                continue;
            }

            return Err(api_error(method, request_url, response).await?);
        }
    }

    fn build_request<B: Serialize + ?Sized>(
        &self,
        method: &Method,
        url: &str,
        params: Option<&SearchParams>,
        body: Option<&B>,
        options: &ResolvedOptions,
    ) -> reqwest::RequestBuilder {
        let mut req = options
            .http_client
            .request(method.clone(), url)
            .bearer_auth(&options.api_token);

        if let Some(agent) = self.user_agent {
            req = req.header(header::USER_AGENT, agent);
        }
        if let Some(p) = params {
            req = req.query(p);
        }
        if let Some(b) = body {
            req = req.json(b);
        }
        req
    }
}

/// Read the failed response body once, in full, and normalize it.
///
/// A failure while reading the body is a transport error, not an [`ApiError`].
async fn api_error(method: &Method, url: Url, response: Response) -> Result<Error> {
    let cause = HttpStatusError::new(response.status(), method.clone(), url);
    let text = response.text().await?;
    Ok(Error::Api(ApiError::new(cause, &text)))
}

fn decode<T: DeserializeOwned>(url: Url, body: &[u8]) -> Result<T> {
    serde_json::from_slice(body).map_err(|source| Error::Decode {
        url: url.to_string(),
        source,
    })
}

fn timeout_error(method: &Method, url: &str, timeout: Option<Duration>) -> Error {
    Error::Timeout {
        method: method.clone(),
        url: url.to_string(),
        timeout,
    }
}

fn is_retryable_transport(e: &reqwest::Error) -> bool {
    #[cfg(not(target_arch = "wasm32"))]
    let retryable = e.is_connect() || e.is_request();
    #[cfg(target_arch = "wasm32")]
    let retryable = e.is_request();
    retryable && !e.is_builder()
}

fn log_retry(attempt: u32, max: u32, delay: Duration, url: &str, reason: &str) {
    tracing::debug!(
        attempt = attempt + 1,
        max,
        delay_ms = delay.as_millis() as u64,
        reason,
        "Retrying request to {}",
        url
    );
}

// ═════════════════════════════════════════════════════════════════════════════
// Builder
// ═════════════════════════════════════════════════════════════════════════════

pub struct ClientBuilder {
    options: ClientOptions,
    browser_host: bool,
}

impl Default for ClientBuilder {
    fn default() -> Self {
        Self {
            options: ClientOptions::default(),
            browser_host: cfg!(target_arch = "wasm32"),
        }
    }
}

impl ClientBuilder {
    /// Replace all instance defaults at once.
    pub fn options(mut self, options: ClientOptions) -> Self {
        self.options = options;
        self
    }

    pub fn api_token(mut self, token: impl Into<String>) -> Self {
        self.options.api_token = Some(token.into());
        self
    }

    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.options.base_url = Some(url.into());
        self
    }

    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.options = self.options.timeout(timeout);
        self
    }

    pub fn no_timeout(mut self) -> Self {
        self.options = self.options.no_timeout();
        self
    }

    pub fn retry(mut self, limit: u32) -> Self {
        self.options.retry = Some(limit);
        self
    }

    pub fn backoff(mut self, config: crate::http::RetryConfig) -> Self {
        self.options.backoff = Some(config);
        self
    }

    pub fn http_client(mut self, client: reqwest::Client) -> Self {
        self.options.http_client = Some(client);
        self
    }

    /// Running inside a browser-like host that owns the `User-Agent` header.
    ///
    /// Defaults to `true` on `wasm32`, `false` elsewhere.
    pub fn browser_host(mut self, browser_host: bool) -> Self {
        self.browser_host = browser_host;
        self
    }

    pub fn build(self) -> Result<Client> {
        let default_http = match &self.options.http_client {
            Some(client) => client.clone(),
            None => default_transport()?,
        };

        Ok(Client {
            options: Arc::new(self.options),
            default_http,
            user_agent: (!self.browser_host).then_some(USER_AGENT),
        })
    }
}

fn default_transport() -> Result<reqwest::Client> {
    let mut builder = reqwest::Client::builder();
    #[cfg(not(target_arch = "wasm32"))]
    {
        builder = builder.pool_max_idle_per_host(10);
    }
    Ok(builder.build()?)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client(browser_host: bool) -> Client {
        Client::builder()
            .api_token("test-token")
            .base_url("https://example.com/v1")
            .browser_host(browser_host)
            .build()
            .unwrap()
    }

    fn resolved(client: &Client) -> ResolvedOptions {
        client.options().resolve(&client.default_http).unwrap()
    }

    #[test]
    fn test_request_carries_bearer_token_and_user_agent() {
        let client = client(false);
        let options = resolved(&client);
        let params = SearchParams::new().with("param", 42u32);
        let request = client
            .build_request(
                &Method::GET,
                &options.url_for("/get"),
                Some(&params),
                None::<&()>,
                &options,
            )
            .build()
            .unwrap();

        assert_eq!(request.url().as_str(), "https://example.com/v1/get?param=42");
        assert_eq!(
            request.headers().get(header::AUTHORIZATION).unwrap(),
            "Bearer test-token"
        );
        assert_eq!(
            request.headers().get(header::USER_AGENT).unwrap(),
            USER_AGENT
        );
    }

    #[test]
    fn test_browser_host_omits_user_agent() {
        let client = client(true);
        let options = resolved(&client);
        let request = client
            .build_request(
                &Method::GET,
                &options.url_for("get"),
                None,
                None::<&()>,
                &options,
            )
            .build()
            .unwrap();

        assert!(request.headers().get(header::USER_AGENT).is_none());
    }

    #[test]
    fn test_json_body_is_attached() {
        let client = client(false);
        let options = resolved(&client);
        let body = serde_json::json!({ "domains": ["example.com"] });
        let request = client
            .build_request(
                &Method::DELETE,
                &options.url_for("domains"),
                None,
                Some(&body),
                &options,
            )
            .build()
            .unwrap();

        assert_eq!(
            request.headers().get(header::CONTENT_TYPE).unwrap(),
            "application/json"
        );
        let bytes = request.body().and_then(|b| b.as_bytes()).unwrap();
        assert_eq!(
            serde_json::from_slice::<serde_json::Value>(bytes).unwrap(),
            body
        );
    }

    #[test]
    fn test_get_list_makes_no_request() {
        let client = client(false);
        let pager: Pager<crate::pager::Page<u32>> =
            client.get_list("/pager", SearchParams::new(), None);
        assert!(pager.has_next_page());
    }
}
