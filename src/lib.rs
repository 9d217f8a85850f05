//! # Morisawa Fonts Web Font SDK
//!
//! A typed Rust client for the Morisawa Fonts web font REST API, supporting
//! both native and WASM targets.
//!
//! ## Architecture
//!
//! The SDK is organized in layers:
//!
//! 1. **Core**: Error taxonomy, network constants, shared newtypes
//! 2. **HTTP**: `Client` with per-call option overrides, retries and error normalization
//! 3. **Pagination**: `Pager` over cursor-paginated list endpoints
//! 4. **Resources**: Thin sub-clients mapping methods to endpoint paths
//! 5. **High-Level Client**: `MorisawaFontsWebFont` with nested sub-clients
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use morisawa_fonts_webfont::prelude::*;
//! use futures_util::TryStreamExt;
//!
//! let client = MorisawaFontsWebFont::builder()
//!     .api_token(std::env::var("MORISAWA_FONTS_API_TOKEN")?)
//!     .build()?;
//!
//! client.domains().add(&["example.com"], None).await?;
//!
//! let mut domains = client.domains().list(PagerInput::new(), None).into_items();
//! while let Some(item) = domains.try_next().await? {
//!     println!("{} ({})", item.value, item.meta.project_id);
//! }
//!
//! let august = YearMonth::new(2025, 8).unwrap();
//! let pv = client.stats().pv().get(PvInput::new().from(august), None).await?;
//! println!("{}", pv.pv.total);
//! ```

// ── Layer 1: Core ────────────────────────────────────────────────────────────

/// Unified SDK error types.
pub mod error;

/// Network URL constants.
pub mod network;

/// Shared newtypes used across resources.
pub mod shared;

// ── Layer 2: HTTP ────────────────────────────────────────────────────────────

/// HTTP client with option overrides and retry policies.
pub mod http;

// ── Layer 3: Pagination ──────────────────────────────────────────────────────

/// Cursor pagination engine.
pub mod pager;

// ── Layer 4: Resources ───────────────────────────────────────────────────────

/// Resource modules (vertical slices): inputs, results, sub-clients.
pub mod domain;

// ── Layer 5: High-Level Client ───────────────────────────────────────────────

/// `MorisawaFontsWebFont`: the primary entry point.
pub mod client;

// ── Prelude ──────────────────────────────────────────────────────────────────

pub mod prelude {
    // Errors
    pub use crate::error::{ApiError, Error, HttpStatusError, Result};

    // Network
    pub use crate::network::DEFAULT_API_URL;

    // Shared newtypes
    pub use crate::shared::YearMonth;

    // HTTP client
    pub use crate::http::{
        Client, ClientBuilder, ClientOptions, ParamValue, RequestTimeout, RetryConfig,
        RetryPolicy, SearchParams,
    };

    // Pagination
    pub use crate::pager::{Page, PageInfo, PageMeta, PagedItem, Paginated, Pager, PagerInput};

    // Resource types
    pub use crate::domain::domains::{AddResult, DomainsMeta};
    pub use crate::domain::stats::{
        DomainPv, PvDomainsInput, PvDomainsMeta, PvDomainsResult, PvInput, PvMeta, PvResult,
        PvTotal,
    };

    // High-level client + sub-clients
    pub use crate::client::{
        DomainsClient, MorisawaFontsWebFont, MorisawaFontsWebFontBuilder, PvClient,
        PvDomainsClient, StatsClient,
    };
}
