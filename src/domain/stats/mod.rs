//! Stats: page view statistics, in total and per domain.

pub mod client;

use crate::http::SearchParams;
use crate::pager::{Page, PageInfo, PageMeta, PagerInput};
use crate::shared::YearMonth;
use serde::{Deserialize, Serialize};

/// Endpoint path for aggregate page views.
pub const PV_PATH: &str = "/stats/pv";

/// Endpoint path for per-domain page views.
pub const PV_DOMAINS_PATH: &str = "/stats/pv/domains";

// ─── Page views ──────────────────────────────────────────────────────────────

/// Month range for `GET /stats/pv`. Unset bounds are chosen by the server.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PvInput {
    pub from: Option<YearMonth>,
    pub to: Option<YearMonth>,
}

impl PvInput {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from(mut self, month: impl Into<YearMonth>) -> Self {
        self.from = Some(month.into());
        self
    }

    pub fn to(mut self, month: impl Into<YearMonth>) -> Self {
        self.to = Some(month.into());
        self
    }
}

impl From<PvInput> for SearchParams {
    fn from(input: PvInput) -> Self {
        let mut params = SearchParams::new();
        params.insert_opt("from", input.from);
        params.insert_opt("to", input.to);
        params
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PvTotal {
    pub total: u64,
}

/// Project and effective month range a statistic was computed for.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PvMeta {
    pub project_id: String,
    pub from: String,
    pub to: String,
}

/// Response of `GET /stats/pv`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PvResult {
    pub pv: PvTotal,
    pub meta: PvMeta,
}

// ─── Page views per domain ───────────────────────────────────────────────────

/// Filters and pagination for `GET /stats/pv/domains`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PvDomainsInput {
    pub page: PagerInput,
    pub from: Option<YearMonth>,
    pub to: Option<YearMonth>,
    /// Restrict the breakdown to one domain.
    pub domain: Option<String>,
}

impl PvDomainsInput {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn limit(mut self, limit: u32) -> Self {
        self.page.limit = Some(limit);
        self
    }

    pub fn cursor(mut self, cursor: impl Into<String>) -> Self {
        self.page.cursor = Some(cursor.into());
        self
    }

    pub fn from(mut self, month: impl Into<YearMonth>) -> Self {
        self.from = Some(month.into());
        self
    }

    pub fn to(mut self, month: impl Into<YearMonth>) -> Self {
        self.to = Some(month.into());
        self
    }

    pub fn domain(mut self, domain: impl Into<String>) -> Self {
        self.domain = Some(domain.into());
        self
    }
}

impl From<PvDomainsInput> for SearchParams {
    fn from(input: PvDomainsInput) -> Self {
        let mut params = SearchParams::from(input.page);
        params.insert_opt("from", input.from);
        params.insert_opt("to", input.to);
        params.insert_opt("domain", input.domain);
        params
    }
}

/// Page views of one domain.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DomainPv {
    pub domain: String,
    pub value: u64,
}

/// Metadata of a `GET /stats/pv/domains` page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PvDomainsMeta {
    #[serde(flatten)]
    pub page: PageInfo,
    pub project_id: String,
    pub from: String,
    pub to: String,
}

impl PageMeta for PvDomainsMeta {
    fn page_info(&self) -> &PageInfo {
        &self.page
    }
}

/// One page of per-domain page views.
pub type PvDomainsResult = Page<DomainPv, PvDomainsMeta>;
